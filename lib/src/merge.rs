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

//! Common-ancestor discovery and the three-way merge of `file_hashes` maps.
//! Both are pure functions over already-loaded data; `repo.rs` is the only
//! caller and owns all I/O.

use crate::commit::FileHashes;
use crate::log_entry::LogEntry;

/// Walks `other_log` from newest to oldest; for each entry, looks for a
/// matching `new_commit_id` anywhere in `current_log`. The first match is
/// the merge base. Ignores `parent_2_id` entirely: a repository that has
/// already merged once may have ancestors this linear log walk can't see
/// (documented limitation, not fixed here).
pub fn find_merge_base(current_log: &[LogEntry], other_log: &[LogEntry]) -> Option<String> {
    other_log.iter().rev().find_map(|o_entry| {
        current_log
            .iter()
            .any(|c_entry| c_entry.new_commit_id == o_entry.new_commit_id)
            .then(|| o_entry.new_commit_id.clone())
    })
}

pub struct MergeResult {
    pub file_hashes: FileHashes,
    pub conflicts: Vec<String>,
}

/// Three-way merge of `other` into `current`, relative to `base`. Starts
/// from `current` and folds in `other`'s changes path by path; never
/// consults iteration order for anything semantic, so the result doesn't
/// depend on the (unordered) map's iteration order.
pub fn three_way_merge(base: &FileHashes, current: &FileHashes, other: &FileHashes) -> MergeResult {
    let mut merged = current.clone();
    let mut conflicts = Vec::new();

    for (path, o_hash) in other {
        let Some(c_hash) = current.get(path) else {
            // Current branch never touched this path: take other's version.
            merged.insert(path.clone(), o_hash.clone());
            continue;
        };
        match base.get(path) {
            None => {
                // Neither side has a common starting point for this path:
                // a potential conflict, reported rather than guessed at.
                conflicts.push(path.clone());
            }
            Some(b_hash) => {
                if o_hash == c_hash {
                    // Both sides agree; nothing to do.
                } else if c_hash == b_hash {
                    // Only the other branch changed it.
                    merged.insert(path.clone(), o_hash.clone());
                } else if o_hash == b_hash {
                    // Only the current branch changed it; already in `merged`.
                } else {
                    conflicts.push(path.clone());
                }
            }
        }
    }

    MergeResult {
        file_hashes: merged,
        conflicts,
    }
}
