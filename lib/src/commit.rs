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

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

/// A path -> blob id mapping. `BTreeMap` rather than a hash map so the
/// on-disk JSON is written in deterministic key order; the schema itself is
/// still an unordered JSON object, this only makes output diffable.
pub type FileHashes = BTreeMap<String, String>;

/// An immutable snapshot node. Commits form a DAG with at most two parents;
/// the DAG is never held in memory as a pointer graph, only as ids resolved
/// through the object store on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub id: String,
    pub author: String,
    pub message: String,
    pub timestamp: String,
    pub parent_1_id: String,
    pub parent_2_id: String,
    pub file_hashes: FileHashes,
}

impl CommitRecord {
    pub fn is_root(&self) -> bool {
        self.parent_1_id.is_empty()
    }

    pub fn is_merge(&self) -> bool {
        !self.parent_2_id.is_empty()
    }
}
