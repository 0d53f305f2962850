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

//! The staging area: a single JSON document at `index.json` recording the
//! content that will be included in the next commit.

use std::fs;

use serde::Deserialize;
use serde::Serialize;

use crate::commit::FileHashes;
use crate::error::Result;
use crate::file_util::write_file_atomic;
use crate::file_util::IoResultExt as _;
use crate::paths::RepoLayout;

#[derive(Debug, Default, Serialize, Deserialize)]
struct IndexDocument {
    tracked_files: FileHashes,
}

/// Loads the index, or an empty map if `index.json` doesn't exist yet.
pub fn load(layout: &RepoLayout) -> Result<FileHashes> {
    let path = layout.index();
    if !path.is_file() {
        return Ok(FileHashes::default());
    }
    let contents = fs::read_to_string(&path).context(&path)?;
    let doc: IndexDocument = serde_json::from_str(&contents)?;
    Ok(doc.tracked_files)
}

/// Persists the index, replacing whatever was there before.
pub fn save(layout: &RepoLayout, tracked_files: &FileHashes) -> Result<()> {
    let doc = IndexDocument {
        tracked_files: tracked_files.clone(),
    };
    let contents = serde_json::to_string_pretty(&doc)?;
    write_file_atomic(&layout.index(), contents.as_bytes())?;
    Ok(())
}
