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

//! Shared fixtures for the CLI integration tests. Plain `assert_cmd` plus
//! manual string checks, rather than a snapshot-testing crate, since that's
//! the smallest tool that fits what these tests assert.

use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::process::Output;

use assert_cmd::cargo::cargo_bin;
use tempfile::TempDir;

pub struct TestEnv {
    root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: tempfile::Builder::new()
                .prefix("minigit-cli-test-")
                .tempdir()
                .unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn write_file(&self, name: &str, contents: &str) {
        fs::write(self.path().join(name), contents).unwrap();
    }

    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.path().join(name)).unwrap()
    }

    fn minigit_bin() -> PathBuf {
        cargo_bin("minigit")
    }

    /// Runs `minigit <args>` in this environment's directory, returning the
    /// raw process output for the caller to assert on.
    pub fn run(&self, args: &[&str]) -> Output {
        std::process::Command::new(Self::minigit_bin())
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("failed to spawn minigit")
    }

    pub fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "minigit {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
