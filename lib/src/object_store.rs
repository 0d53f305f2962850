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

//! Content-addressed blob storage and JSON-encoded commit records. Both
//! sub-stores are append-only: blobs are create-only (re-staging identical
//! content is a no-op) and commits are written exactly once.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::commit::CommitRecord;
use crate::error::RepoError;
use crate::error::Result;
use crate::file_util::copy_preserving_mtime;
use crate::file_util::write_file_atomic;
use crate::file_util::IoResultExt as _;
use crate::paths::RepoLayout;

/// Copies `src` into the blob store under `blob_id`, preserving `src`'s
/// mtime. A no-op if the blob already exists: the blob-id derivation is
/// metadata-based, so two stagings of unchanged content hit the same id and
/// there is nothing new to write.
pub fn put_blob(layout: &RepoLayout, blob_id: &str, src: &Path) -> Result<()> {
    let dest = layout.blob_object(blob_id);
    if dest.is_file() {
        debug!(blob_id, "blob already present, skipping copy");
        return Ok(());
    }
    copy_preserving_mtime(src, &dest)?;
    Ok(())
}

/// Restores a blob to `dest`, preserving the blob's own mtime.
pub fn copy_blob_to(layout: &RepoLayout, blob_id: &str, dest: &Path) -> Result<()> {
    let src = layout.blob_object(blob_id);
    copy_preserving_mtime(&src, dest)?;
    Ok(())
}

pub fn has_commit(layout: &RepoLayout, commit_id: &str) -> bool {
    layout.commit_object(commit_id).is_file()
}

/// Writes a commit record. Commits are immutable once written; callers are
/// expected to only ever write a given id once (ids are derived from
/// author/timestamp/message, so a conflicting write would mean a hash
/// collision, not a legitimate update).
pub fn put_commit(layout: &RepoLayout, record: &CommitRecord) -> Result<()> {
    let path = layout.commit_object(&record.id);
    let contents = serde_json::to_string_pretty(record)?;
    write_file_atomic(&path, contents.as_bytes())?;
    Ok(())
}

pub fn get_commit(layout: &RepoLayout, commit_id: &str) -> Result<CommitRecord> {
    let path = layout.commit_object(commit_id);
    if !path.is_file() {
        return Err(RepoError::CommitNotFound(commit_id.to_string()));
    }
    let contents = fs::read_to_string(&path).context(&path)?;
    Ok(serde_json::from_str(&contents)?)
}
