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

//! Core engine for minigit: a minimal distributed version control system.
//!
//! This crate holds no I/O towards a terminal. It loads and writes the
//! on-disk repository state and returns typed results; the `minigit-cli`
//! crate is the only place that formats anything for a human.

pub mod clock;
pub mod commit;
pub mod config;
pub mod error;
pub mod file_util;
pub mod hash;
pub mod index;
pub mod log_entry;
pub mod log_store;
pub mod merge;
pub mod object_store;
pub mod paths;
pub mod ref_store;
pub mod repo;
pub mod status;
pub mod worktree;

#[cfg(test)]
pub mod testutils;

pub use clock::Clock;
pub use clock::SystemClock;
pub use commit::CommitRecord;
pub use commit::FileHashes;
pub use config::RepoConfig;
pub use error::RepoError;
pub use error::Result;
pub use log_entry::LogEntry;
pub use paths::RepoLayout;
pub use repo::AddReport;
pub use repo::BranchInfo;
pub use repo::Repo;
pub use status::StatusReport;
