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

fn init_with_first_commit(env: &TestEnv) {
    env.run_ok(&["init"]);
    env.write_file("a.txt", "hello");
    env.run_ok(&["add", "a.txt"]);
    env.run_ok(&["commit", "-m", "first"]);
}

#[test]
fn branch_lists_master_after_first_commit() {
    let env = TestEnv::new();
    init_with_first_commit(&env);

    let out = env.run_ok(&["branch"]);
    assert!(out.contains("* master"));
}

#[test]
fn branch_create_then_checkout_round_trips() {
    let env = TestEnv::new();
    init_with_first_commit(&env);

    env.run_ok(&["branch", "feature"]);
    let branches = env.run_ok(&["branch"]);
    assert!(branches.contains("feature"));

    env.run_ok(&["checkout", "feature"]);
    let out = env.run_ok(&["status"]);
    assert!(out.contains("On branch feature"));
}

#[test]
fn checkout_unknown_branch_fails() {
    let env = TestEnv::new();
    init_with_first_commit(&env);

    let output = env.run(&["checkout", "does-not-exist"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Branch not found"));
}

#[test]
fn merge_diverging_branches_via_cli() {
    let env = TestEnv::new();
    init_with_first_commit(&env);
    env.run_ok(&["branch", "feature"]);

    env.run_ok(&["checkout", "feature"]);
    env.write_file("b.txt", "on feature");
    env.run_ok(&["add", "b.txt"]);
    env.run_ok(&["commit", "-m", "on feature"]);

    env.run_ok(&["checkout", "master"]);
    env.write_file("c.txt", "on master");
    env.run_ok(&["add", "c.txt"]);
    env.run_ok(&["commit", "-m", "on master"]);

    let out = env.run_ok(&["merge", "feature"]);
    assert!(out.contains("merged feature"));
    assert_eq!(env.read_file("b.txt"), "on feature");
}

#[test]
fn revert_restores_file_contents() {
    let env = TestEnv::new();
    init_with_first_commit(&env);

    env.write_file("a.txt", "world");
    env.run_ok(&["add", "a.txt"]);
    env.run_ok(&["commit", "-m", "second"]);

    let log_out = env.run_ok(&["log"]);
    let first_commit_id = log_out
        .lines()
        .last()
        .unwrap()
        .split_whitespace()
        .nth(1)
        .unwrap();

    env.run_ok(&["revert", first_commit_id]);
    assert_eq!(env.read_file("a.txt"), "hello");
}
