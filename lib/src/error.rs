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

use std::path::PathBuf;

use thiserror::Error;

use crate::file_util::PathError;

/// Every way an engine operation can fail. The CLI front-end owns turning
/// this into a message and an exit code; engine code never prints.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Repository is not initialised in {0}")]
    NotInitialised(PathBuf),

    #[error("Repository is already initialised in {0}")]
    AlreadyInitialised(PathBuf),

    /// Never constructed directly: `add` realizes this taxonomy entry by
    /// collecting missing paths into `AddReport::not_found` instead of
    /// aborting the whole call on the first one (see DESIGN.md). Kept as its
    /// own variant so callers matching on `RepoError` exhaustively still see
    /// the documented kind, even though today nothing returns it.
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Nothing to commit")]
    NothingToCommit,

    #[error("Worktree has staged or modified files: {0}")]
    DirtyWorktree(String),

    #[error("Commit {0} is not an ancestor of the current branch")]
    InvalidCommitId(String),

    #[error("Branch not found: {0}")]
    BranchNotFound(String),

    #[error("Branch already exists: {0}")]
    BranchAlreadyExists(String),

    #[error("Branch {0} has no common ancestor with the current branch")]
    NoCommonAncestor(String),

    #[error("Already up to date")]
    AlreadyUpToDate,

    #[error("Merge conflict in: {}", .0.join(", "))]
    MergeConflict(Vec<String>),

    #[error("Commit not found: {0}")]
    CommitNotFound(String),

    #[error(transparent)]
    IoFailure(#[from] PathError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RepoError>;
