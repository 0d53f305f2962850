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

use std::collections::BTreeSet;

use crate::commit::CommitRecord;
use crate::commit::FileHashes;
use crate::hash;
use crate::worktree::list_working_files;
use crate::{error::Result, paths::RepoLayout};

/// The three disjoint-by-construction sets `status` reports, plus the
/// current branch name. Computed only over files enumerated in the working
/// directory: files present in the HEAD commit but absent from the working
/// directory are not reported; this is a documented limitation.
#[derive(Debug, Clone, Default)]
pub struct StatusReport {
    pub branch: String,
    pub staged: BTreeSet<String>,
    pub modified: BTreeSet<String>,
    pub untracked: BTreeSet<String>,
}

impl StatusReport {
    pub fn is_clean(&self) -> bool {
        self.staged.is_empty() && self.modified.is_empty()
    }
}

pub fn compute_status(
    layout: &RepoLayout,
    branch: &str,
    index: &FileHashes,
    head_commit: Option<&CommitRecord>,
) -> Result<StatusReport> {
    let mut report = StatusReport {
        branch: branch.to_string(),
        ..Default::default()
    };

    for path in list_working_files(layout)? {
        let Some(index_hash) = index.get(&path) else {
            report.untracked.insert(path);
            continue;
        };

        let working_hash = hash::blob_id(&layout.working_dir().join(&path))?;
        if &working_hash != index_hash {
            report.modified.insert(path.clone());
        }

        let head_hash = head_commit.and_then(|c| c.file_hashes.get(&path));
        if head_hash != Some(index_hash) {
            report.staged.insert(path);
        }
    }

    Ok(report)
}
