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

mod common;

use common::TestEnv;

#[test]
fn init_creates_repo_directory() {
    let env = TestEnv::new();
    let stdout = env.run_ok(&["init"]);
    assert!(stdout.contains("Initialised empty repository"));
    assert!(env.path().join(".minigit").is_dir());
    assert!(env.path().join(".minigit/HEAD").is_file());
}

#[test]
fn init_twice_fails() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    let output = env.run(&["init"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("already initialised"));
}

#[test]
fn status_reports_untracked_file() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    env.write_file("a.txt", "hello");

    let stdout = env.run_ok(&["status"]);
    assert!(stdout.contains("On branch master"));
    assert!(stdout.contains("untracked: a.txt"));
}

#[test]
fn add_then_commit_then_status_is_clean() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    env.write_file("a.txt", "hello");

    let add_out = env.run_ok(&["add", "a.txt"]);
    assert!(add_out.contains("added a.txt"));

    let commit_out = env.run_ok(&["commit", "-m", "first"]);
    assert!(commit_out.contains("committed"));

    let status_out = env.run_ok(&["status"]);
    assert!(status_out.contains("nothing to commit"));
}

#[test]
fn commit_with_nothing_staged_fails() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    let output = env.run(&["commit", "-m", "empty"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Nothing to commit"));
}
