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

//! Pure path derivations for the on-disk repository layout. No I/O lives
//! here; everything is string/path arithmetic anchored on the repository
//! root. Grouping these into one immutable value (rather than free-floating
//! global constants) means every operation takes its paths from a single
//! source of truth that is easy to construct in tests against a temp dir.

use std::path::Path;
use std::path::PathBuf;

/// Name of the hidden directory a repository lives under, relative to the
/// working directory root.
pub const REPO_DIR_NAME: &str = ".minigit";

/// All on-disk locations for one repository, derived once from the working
/// directory root.
#[derive(Debug, Clone)]
pub struct RepoLayout {
    /// The working directory that contains `.minigit/`.
    working_dir: PathBuf,
    /// `<working_dir>/.minigit`.
    repo_root: PathBuf,
}

impl RepoLayout {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        let working_dir = working_dir.into();
        let repo_root = working_dir.join(REPO_DIR_NAME);
        Self {
            working_dir,
            repo_root,
        }
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    pub fn head(&self) -> PathBuf {
        self.repo_root.join("HEAD")
    }

    pub fn index(&self) -> PathBuf {
        self.repo_root.join("index.json")
    }

    pub fn refs_heads_dir(&self) -> PathBuf {
        self.repo_root.join("refs").join("heads")
    }

    pub fn branch_ref(&self, branch: &str) -> PathBuf {
        self.refs_heads_dir().join(branch)
    }

    pub fn objects_commits_dir(&self) -> PathBuf {
        self.repo_root.join("objects").join("commits")
    }

    pub fn commit_object(&self, commit_id: &str) -> PathBuf {
        self.objects_commits_dir().join(commit_id)
    }

    pub fn objects_blobs_dir(&self) -> PathBuf {
        self.repo_root.join("objects").join("blobs")
    }

    pub fn blob_object(&self, blob_id: &str) -> PathBuf {
        self.objects_blobs_dir().join(blob_id)
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.repo_root.join("logs")
    }

    pub fn head_log(&self) -> PathBuf {
        self.logs_dir().join("HEAD")
    }

    pub fn logs_refs_heads_dir(&self) -> PathBuf {
        self.logs_dir().join("refs").join("heads")
    }

    pub fn branch_log(&self, branch: &str) -> PathBuf {
        self.logs_refs_heads_dir().join(branch)
    }

    /// Every directory `init` must create, in creation order.
    pub fn all_dirs(&self) -> [PathBuf; 7] {
        [
            self.repo_root.clone(),
            self.refs_heads_dir(),
            self.objects_commits_dir(),
            self.objects_blobs_dir(),
            self.logs_dir(),
            self.logs_refs_heads_dir(),
            // logs/refs is implied by logs/refs/heads, but create_dir_all
            // handles that; listed so the repo layout tree shows it explicitly.
            self.logs_dir().join("refs"),
        ]
    }

    pub fn exists(&self) -> bool {
        self.repo_root.is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_paths_under_repo_root() {
        let layout = RepoLayout::new("/work");
        assert_eq!(layout.repo_root(), Path::new("/work/.minigit"));
        assert_eq!(layout.head(), Path::new("/work/.minigit/HEAD"));
        assert_eq!(
            layout.branch_ref("master"),
            Path::new("/work/.minigit/refs/heads/master")
        );
        assert_eq!(
            layout.blob_object("abc123"),
            Path::new("/work/.minigit/objects/blobs/abc123")
        );
        assert_eq!(
            layout.branch_log("feature"),
            Path::new("/work/.minigit/logs/refs/heads/feature")
        );
    }
}
