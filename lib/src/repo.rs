// Copyright 2026 The Minigit Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The engine: orchestrates the four stores (object, ref, log, index) and
//! enforces the cross-store invariants. This is the only module that
//! sequences multi-store writes; `object_store`, `ref_store`, `log_store`
//! and `index` never call each other.

use std::fs;

use tracing::info;
use tracing::instrument;

use crate::clock::Clock;
use crate::clock::SystemClock;
use crate::commit::CommitRecord;
use crate::commit::FileHashes;
use crate::config::RepoConfig;
use crate::error::RepoError;
use crate::error::Result;
use crate::file_util::create_or_reuse_dir;
use crate::file_util::IoResultExt as _;
use crate::hash;
use crate::index;
use crate::log_entry::LogEntry;
use crate::log_store;
use crate::merge;
use crate::object_store;
use crate::paths::RepoLayout;
use crate::ref_store;
use crate::status::compute_status;
use crate::status::StatusReport;

const MASTER: &str = "master";

#[derive(Debug, Default)]
pub struct AddReport {
    pub staged: Vec<String>,
    pub not_found: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct BranchInfo {
    pub name: String,
    pub tip: Option<String>,
    pub is_current: bool,
}

/// A handle onto one repository. Cheap to construct; all state lives on
/// disk under `layout.repo_root()`.
pub struct Repo {
    layout: RepoLayout,
    config: RepoConfig,
    clock: Box<dyn Clock>,
}

impl Repo {
    pub fn open(layout: RepoLayout) -> Self {
        Self::with_config(layout, RepoConfig::from_env())
    }

    pub fn with_config(layout: RepoLayout, config: RepoConfig) -> Self {
        Self::with_clock(layout, config, Box::new(SystemClock))
    }

    pub fn with_clock(layout: RepoLayout, config: RepoConfig, clock: Box<dyn Clock>) -> Self {
        Self {
            layout,
            config,
            clock,
        }
    }

    pub fn layout(&self) -> &RepoLayout {
        &self.layout
    }

    /// Creates the repository directory tree and writes `HEAD = master`. A
    /// failure creating one subdirectory is logged and does not abort
    /// creation of the rest; no branch ref is written until the first
    /// commit.
    #[instrument(skip_all, fields(repo_root = %layout.repo_root().display()))]
    pub fn init(layout: &RepoLayout) -> Result<()> {
        if layout.exists() {
            return Err(RepoError::AlreadyInitialised(
                layout.repo_root().to_path_buf(),
            ));
        }
        for dir in layout.all_dirs() {
            if let Err(err) = create_or_reuse_dir(&dir) {
                tracing::warn!(dir = %dir.display(), %err, "failed to create repository directory");
            }
        }
        ref_store::set_head(layout, MASTER)?;
        info!("initialised empty repository");
        Ok(())
    }

    fn ensure_initialised(&self) -> Result<()> {
        if !self.layout.exists() {
            return Err(RepoError::NotInitialised(
                self.layout.repo_root().to_path_buf(),
            ));
        }
        Ok(())
    }

    pub fn current_branch(&self) -> Result<String> {
        ref_store::get_head(&self.layout)
    }

    fn head_commit_on(&self, branch: &str) -> Result<Option<CommitRecord>> {
        match ref_store::get_tip(&self.layout, branch)? {
            Some(id) => Ok(Some(object_store::get_commit(&self.layout, &id)?)),
            None => Ok(None),
        }
    }

    /// Stages each path that exists in the working directory; paths that
    /// don't are collected into the report rather than aborting the whole
    /// call.
    #[instrument(skip(self))]
    pub fn add(&self, paths: &[String]) -> Result<AddReport> {
        self.ensure_initialised()?;
        let mut tracked = index::load(&self.layout)?;
        let mut report = AddReport::default();

        for path in paths {
            let full_path = self.layout.working_dir().join(path);
            if !full_path.is_file() {
                report.not_found.push(path.clone());
                continue;
            }
            let id = hash::blob_id(&full_path)?;
            if tracked.get(path) == Some(&id) {
                tracing::debug!(path, "already staged at this content");
                continue;
            }
            object_store::put_blob(&self.layout, &id, &full_path)?;
            tracked.insert(path.clone(), id);
            report.staged.push(path.clone());
        }

        index::save(&self.layout, &tracked)?;
        info!(staged = report.staged.len(), not_found = report.not_found.len(), "add complete");
        Ok(report)
    }

    #[instrument(skip(self))]
    pub fn status(&self) -> Result<StatusReport> {
        self.ensure_initialised()?;
        let branch = self.current_branch()?;
        let tracked = index::load(&self.layout)?;
        let head = self.head_commit_on(&branch)?;
        compute_status(&self.layout, &branch, &tracked, head.as_ref())
    }

    fn require_clean(&self) -> Result<()> {
        let status = self.status()?;
        if !status.is_clean() {
            let mut dirty: Vec<&str> = status.staged.iter().map(String::as_str).collect();
            dirty.extend(status.modified.iter().map(String::as_str));
            dirty.sort_unstable();
            dirty.dedup();
            return Err(RepoError::DirtyWorktree(dirty.join(", ")));
        }
        Ok(())
    }

    fn append_movement(
        &self,
        branch_log_path: &std::path::Path,
        old_commit_id: &str,
        new_commit_id: &str,
        message: &str,
        merge: bool,
        other_commit_id: &str,
    ) -> Result<()> {
        let entry = LogEntry {
            old_commit_id: old_commit_id.to_string(),
            new_commit_id: new_commit_id.to_string(),
            author: self.config.author.clone(),
            timestamp: self.clock.now(),
            message: message.to_string(),
            merge,
            other_commit_id: other_commit_id.to_string(),
        };
        log_store::append_log(branch_log_path, entry)
    }

    /// Builds and writes a `CommitRecord`, advances `branch`'s tip, and
    /// appends the matching log entries to both `logs/HEAD` and the branch's
    /// own log.
    fn write_commit(
        &self,
        branch: &str,
        message: String,
        file_hashes: FileHashes,
        parent_2_id: String,
        merge: bool,
    ) -> Result<CommitRecord> {
        let prior_tip = ref_store::get_tip(&self.layout, branch)?.unwrap_or_default();
        let timestamp = self.clock.now();
        let id = hash::commit_id(&self.config.author, &timestamp, &message);
        let record = CommitRecord {
            id: id.clone(),
            author: self.config.author.clone(),
            message: message.clone(),
            timestamp,
            parent_1_id: prior_tip.clone(),
            parent_2_id: parent_2_id.clone(),
            file_hashes,
        };
        object_store::put_commit(&self.layout, &record)?;
        ref_store::set_tip(&self.layout, branch, &id)?;
        self.append_movement(
            &self.layout.head_log(),
            &prior_tip,
            &id,
            &message,
            merge,
            &parent_2_id,
        )?;
        self.append_movement(
            &self.layout.branch_log(branch),
            &prior_tip,
            &id,
            &message,
            merge,
            &parent_2_id,
        )?;
        Ok(record)
    }

    #[instrument(skip(self))]
    pub fn commit(&self, message: &str) -> Result<CommitRecord> {
        self.ensure_initialised()?;
        let branch = self.current_branch()?;
        let status = self.status()?;
        if status.staged.is_empty() {
            return Err(RepoError::NothingToCommit);
        }
        let tracked = index::load(&self.layout)?;
        let record = self.write_commit(&branch, message.to_string(), tracked, String::new(), false)?;
        info!(commit_id = %record.id, "created commit");
        Ok(record)
    }

    /// Restores every `(path, blob_id)` of `file_hashes` into the working
    /// directory, skipping paths whose current content already matches.
    fn restore_working_copy(&self, file_hashes: &FileHashes) -> Result<()> {
        for (path, blob_id) in file_hashes {
            let working_path = self.layout.working_dir().join(path);
            let up_to_date = hash::blob_id(&working_path)
                .map(|current| &current == blob_id)
                .unwrap_or(false);
            if up_to_date {
                continue;
            }
            if working_path.is_file() {
                fs::remove_file(&working_path).context(&working_path)?;
            }
            object_store::copy_blob_to(&self.layout, blob_id, &working_path)?;
        }
        Ok(())
    }

    /// Reverts the current branch to `commit_id`, which must be an ancestor
    /// reachable through this branch's own log. Creates a new commit rather
    /// than rewriting history.
    #[instrument(skip(self))]
    pub fn revert(&self, commit_id: &str) -> Result<CommitRecord> {
        self.ensure_initialised()?;
        self.require_clean()?;
        let branch = self.current_branch()?;

        let branch_log = log_store::read_log(&self.layout.branch_log(&branch))?;
        if !branch_log.iter().any(|e| e.new_commit_id == commit_id) {
            return Err(RepoError::InvalidCommitId(commit_id.to_string()));
        }

        let target = object_store::get_commit(&self.layout, commit_id)?;
        self.restore_working_copy(&target.file_hashes)?;
        index::save(&self.layout, &target.file_hashes)?;

        let message = format!("Reverting to {commit_id}");
        let record = self.write_commit(&branch, message, target.file_hashes, String::new(), false)?;
        info!(commit_id = %record.id, reverted_to = commit_id, "reverted");
        Ok(record)
    }

    /// Copies the current branch's tip and last log entry to a new branch.
    /// Refuses if the current branch has no commits yet (B2) or if `name`
    /// already names a branch.
    #[instrument(skip(self))]
    pub fn create_branch(&self, name: &str) -> Result<()> {
        self.ensure_initialised()?;
        if ref_store::branch_exists(&self.layout, name) {
            return Err(RepoError::BranchAlreadyExists(name.to_string()));
        }
        let branch = self.current_branch()?;
        let tip = ref_store::get_tip(&self.layout, &branch)?
            .ok_or(RepoError::NothingToCommit)?;
        ref_store::set_tip(&self.layout, name, &tip)?;

        let branch_log = log_store::read_log(&self.layout.branch_log(&branch))?;
        if let Some(last) = branch_log.last() {
            log_store::append_log(&self.layout.branch_log(name), last.clone())?;
        }
        info!(branch = name, tip, "created branch");
        Ok(())
    }

    /// Switches HEAD to `branch`, rewrites the index to the branch tip's
    /// `file_hashes`, and restores the working copy. Files tracked before
    /// checkout but not in the new tip are not removed; this is a documented
    /// limitation, not a bug.
    #[instrument(skip(self))]
    pub fn checkout(&self, branch: &str) -> Result<()> {
        self.ensure_initialised()?;
        if !ref_store::branch_exists(&self.layout, branch) {
            return Err(RepoError::BranchNotFound(branch.to_string()));
        }
        self.require_clean()?;

        let current_branch = self.current_branch()?;
        let prior_tip = ref_store::get_tip(&self.layout, &current_branch)?.unwrap_or_default();

        ref_store::set_head(&self.layout, branch)?;
        let new_tip = ref_store::get_tip(&self.layout, branch)?;
        let target_hashes = match &new_tip {
            Some(id) => object_store::get_commit(&self.layout, id)?.file_hashes,
            None => FileHashes::default(),
        };

        index::save(&self.layout, &target_hashes)?;
        self.restore_working_copy(&target_hashes)?;

        self.append_movement(
            &self.layout.head_log(),
            &prior_tip,
            new_tip.as_deref().unwrap_or_default(),
            &format!("Switched to branch {branch}"),
            false,
            "",
        )?;
        info!(branch, "checked out");
        Ok(())
    }

    /// Three-way merges `other`'s tip into the current branch. Refuses with
    /// `MergeConflict` (and makes no changes) rather than writing conflict
    /// markers.
    #[instrument(skip(self))]
    pub fn merge(&self, other: &str) -> Result<CommitRecord> {
        self.ensure_initialised()?;
        if !ref_store::branch_exists(&self.layout, other) {
            return Err(RepoError::BranchNotFound(other.to_string()));
        }
        self.require_clean()?;

        let current_branch = self.current_branch()?;
        let current_log = log_store::read_log(&self.layout.branch_log(&current_branch))?;
        let other_log = log_store::read_log(&self.layout.branch_log(other))?;

        let base_id = merge::find_merge_base(&current_log, &other_log)
            .ok_or_else(|| RepoError::NoCommonAncestor(other.to_string()))?;
        let other_tip = ref_store::get_tip(&self.layout, other)?.unwrap_or_default();
        if base_id == other_tip {
            return Err(RepoError::AlreadyUpToDate);
        }

        let current_tip = ref_store::get_tip(&self.layout, &current_branch)?.unwrap_or_default();
        let base_commit = object_store::get_commit(&self.layout, &base_id)?;
        let current_commit = object_store::get_commit(&self.layout, &current_tip)?;
        let other_commit = object_store::get_commit(&self.layout, &other_tip)?;

        let merged = merge::three_way_merge(
            &base_commit.file_hashes,
            &current_commit.file_hashes,
            &other_commit.file_hashes,
        );
        if !merged.conflicts.is_empty() {
            return Err(RepoError::MergeConflict(merged.conflicts));
        }

        // merge rewrites the index like checkout and revert do; restore the
        // working copy too so it isn't left pointing at pre-merge content
        // the new commit no longer describes.
        self.restore_working_copy(&merged.file_hashes)?;
        index::save(&self.layout, &merged.file_hashes)?;

        let message = format!("Merge branch '{other}' into {current_branch}");
        let record =
            self.write_commit(&current_branch, message, merged.file_hashes, other_tip, true)?;
        info!(commit_id = %record.id, other, "merged");
        Ok(record)
    }

    /// The current branch's log, newest first. Read-only.
    #[instrument(skip(self))]
    pub fn log(&self) -> Result<Vec<LogEntry>> {
        self.ensure_initialised()?;
        let branch = self.current_branch()?;
        let mut entries = log_store::read_log(&self.layout.branch_log(&branch))?;
        entries.reverse();
        Ok(entries)
    }

    /// Every branch with its tip (if any), current branch marked.
    pub fn branches(&self) -> Result<Vec<BranchInfo>> {
        self.ensure_initialised()?;
        let current = self.current_branch()?;
        ref_store::list_branches(&self.layout)?
            .into_iter()
            .map(|name| {
                let tip = ref_store::get_tip(&self.layout, &name)?;
                Ok(BranchInfo {
                    is_current: name == current,
                    name,
                    tip,
                })
            })
            .collect()
    }
}
