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

//! Shared fixtures for this crate's own `#[cfg(test)]` modules, in the
//! manner of this codebase's own internal test-support conventions.

#![cfg(test)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::clock::FixedClock;
use crate::config::RepoConfig;
use crate::log_entry::LogEntry;
use crate::paths::RepoLayout;
use crate::repo::Repo;

pub fn new_temp_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("minigit-test-")
        .tempdir()
        .unwrap()
}

pub fn sample_log_entry(old: &str, new: &str) -> LogEntry {
    LogEntry {
        old_commit_id: old.to_string(),
        new_commit_id: new.to_string(),
        author: "Author".to_string(),
        timestamp: "2026-01-01 00:00:00".to_string(),
        message: "msg".to_string(),
        merge: false,
        other_commit_id: String::new(),
    }
}

/// An initialised repository rooted in a temp directory that is removed when
/// dropped.
pub struct TestRepo {
    _temp_dir: TempDir,
    layout: RepoLayout,
}

impl TestRepo {
    pub fn init() -> Self {
        let temp_dir = new_temp_dir();
        let layout = RepoLayout::new(temp_dir.path());
        Repo::init(&layout).unwrap();
        Self {
            _temp_dir: temp_dir,
            layout,
        }
    }

    pub fn layout(&self) -> &RepoLayout {
        &self.layout
    }

    pub fn working_dir(&self) -> &Path {
        self.layout.working_dir()
    }

    pub fn write_file(&self, name: &str, contents: &str) {
        fs::write(self.working_dir().join(name), contents).unwrap();
    }

    pub fn remove_file(&self, name: &str) {
        fs::remove_file(self.working_dir().join(name)).unwrap();
    }

    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.working_dir().join(name)).unwrap()
    }

    /// A `Repo` handle with a clock fixed at a constant timestamp, so tests
    /// can assert on exact commit ids and log contents.
    pub fn repo(&self) -> Repo {
        self.repo_at("2026-01-01 00:00:00")
    }

    pub fn repo_at(&self, timestamp: &str) -> Repo {
        Repo::with_clock(
            self.layout.clone(),
            RepoConfig::default(),
            Box::new(FixedClock(timestamp.to_string())),
        )
    }
}
