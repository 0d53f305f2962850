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

//! The two hash derivations this store relies on. Both are metadata-based
//! rather than content-addressed in the usual sense; see DESIGN.md for the
//! stability and collision tradeoffs that follow from that.

use std::fs;
use std::path::Path;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use digest::Digest as _;
use sha1::Sha1;

use crate::file_util::IoResultExt as _;
use crate::file_util::PathError;

/// `lower_hex(SHA1(path ‖ decimal(mtime_ticks) ‖ decimal(size_bytes)))`.
///
/// Two files with identical content but different mtimes get different ids;
/// two files that happen to share `(path, mtime, size)` collide. A known
/// tradeoff of hashing metadata instead of content (see DESIGN.md).
pub fn blob_id(path: &Path) -> Result<String, PathError> {
    let metadata = fs::metadata(path).context(path)?;
    let mtime = metadata.modified().context(path)?;
    let ticks = mtime
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let size = metadata.len();

    let mut hasher = Sha1::new();
    hasher.update(path.to_string_lossy().as_bytes());
    hasher.update(ticks.to_string().as_bytes());
    hasher.update(size.to_string().as_bytes());
    Ok(lower_hex(hasher))
}

/// `lower_hex(SHA1(author ‖ timestamp ‖ message))`.
///
/// Parents and `file_hashes` deliberately do not participate. Two commits by
/// the same author, with the same message, in the same second, collide
/// (see DESIGN.md).
pub fn commit_id(author: &str, timestamp: &str, message: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(author.as_bytes());
    hasher.update(timestamp.as_bytes());
    hasher.update(message.as_bytes());
    lower_hex(hasher)
}

fn lower_hex(hasher: Sha1) -> String {
    hex::encode(hasher.finalize())
}
