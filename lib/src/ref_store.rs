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

//! Branch files (`refs/heads/<branch>`, each a bare commit id) and the HEAD
//! pointer (`HEAD`, the current branch name).

use std::collections::BTreeSet;
use std::fs;

use crate::error::Result;
use crate::file_util::write_file_atomic;
use crate::file_util::IoResultExt as _;
use crate::paths::RepoLayout;

pub fn get_head(layout: &RepoLayout) -> Result<String> {
    let path = layout.head();
    Ok(fs::read_to_string(&path).context(&path)?.trim().to_string())
}

pub fn set_head(layout: &RepoLayout, branch: &str) -> Result<()> {
    write_file_atomic(&layout.head(), branch.as_bytes())?;
    Ok(())
}

pub fn get_tip(layout: &RepoLayout, branch: &str) -> Result<Option<String>> {
    let path = layout.branch_ref(branch);
    if !path.is_file() {
        return Ok(None);
    }
    let contents = fs::read_to_string(&path).context(&path)?;
    Ok(Some(contents.trim().to_string()))
}

pub fn set_tip(layout: &RepoLayout, branch: &str, commit_id: &str) -> Result<()> {
    write_file_atomic(&layout.branch_ref(branch), commit_id.as_bytes())?;
    Ok(())
}

pub fn branch_exists(layout: &RepoLayout, branch: &str) -> bool {
    layout.branch_ref(branch).is_file()
}

/// The set of branches is exactly the set of files under `refs/heads/`.
pub fn list_branches(layout: &RepoLayout) -> Result<BTreeSet<String>> {
    let dir = layout.refs_heads_dir();
    if !dir.is_dir() {
        return Ok(BTreeSet::new());
    }
    let mut branches = BTreeSet::new();
    for entry in fs::read_dir(&dir).context(&dir)? {
        let entry = entry.context(&dir)?;
        if entry.file_type().context(&dir)?.is_file() {
            if let Some(name) = entry.file_name().to_str() {
                branches.insert(name.to_string());
            }
        }
    }
    Ok(branches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::TestRepo;

    #[test]
    fn head_round_trips() {
        let repo = TestRepo::init();
        assert_eq!(get_head(repo.layout()).unwrap(), "master");
        set_head(repo.layout(), "feature").unwrap();
        assert_eq!(get_head(repo.layout()).unwrap(), "feature");
    }

    #[test]
    fn tip_is_none_until_set() {
        let repo = TestRepo::init();
        assert_eq!(get_tip(repo.layout(), "master").unwrap(), None);
        assert!(!branch_exists(repo.layout(), "master"));

        set_tip(repo.layout(), "master", "deadbeef").unwrap();
        assert_eq!(
            get_tip(repo.layout(), "master").unwrap(),
            Some("deadbeef".to_string())
        );
        assert!(branch_exists(repo.layout(), "master"));
    }

    #[test]
    fn list_branches_reflects_ref_files() {
        let repo = TestRepo::init();
        set_tip(repo.layout(), "master", "a").unwrap();
        set_tip(repo.layout(), "feature", "b").unwrap();
        let branches: Vec<_> = list_branches(repo.layout()).unwrap().into_iter().collect();
        assert_eq!(branches, vec!["feature".to_string(), "master".to_string()]);
    }
}
