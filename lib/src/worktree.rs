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

//! Enumeration of the working directory. Flat and non-recursive: subdirectory
//! trees are out of scope.

use std::collections::BTreeSet;
use std::fs;

use crate::error::Result;
use crate::file_util::IoResultExt as _;
use crate::paths::RepoLayout;
use crate::paths::REPO_DIR_NAME;

/// Names of every regular file directly inside the working directory,
/// excluding the repository directory itself.
pub fn list_working_files(layout: &RepoLayout) -> Result<BTreeSet<String>> {
    let dir = layout.working_dir();
    let mut files = BTreeSet::new();
    for entry in fs::read_dir(dir).context(dir)? {
        let entry = entry.context(dir)?;
        let file_type = entry.file_type().context(dir)?;
        if !file_type.is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if name == REPO_DIR_NAME {
            continue;
        }
        files.insert(name);
    }
    Ok(files)
}
