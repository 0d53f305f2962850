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

#![allow(missing_docs)]

use std::fs;
use std::fs::File;
use std::io;
use std::io::Write as _;
use std::path::Path;
use std::path::PathBuf;

use tempfile::NamedTempFile;
use tempfile::PersistError;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Cannot access {path}")]
pub struct PathError {
    pub path: PathBuf,
    #[source]
    pub error: io::Error,
}

pub trait IoResultExt<T> {
    fn context(self, path: impl AsRef<Path>) -> Result<T, PathError>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn context(self, path: impl AsRef<Path>) -> Result<T, PathError> {
        self.map_err(|error| PathError {
            path: path.as_ref().to_path_buf(),
            error,
        })
    }
}

/// Creates a directory, and any missing parents, or does nothing if it
/// already exists.
///
/// Returns the underlying error if the directory can't be created.
pub fn create_or_reuse_dir(dirname: &Path) -> Result<(), PathError> {
    match fs::create_dir_all(dirname) {
        Ok(()) => Ok(()),
        Err(_) if dirname.is_dir() => Ok(()),
        Err(e) => Err(e).context(dirname),
    }
}

/// Writes `contents` to `path` atomically: the data lands in a temporary file
/// in the same directory first, then is renamed over the destination. A crash
/// mid-write can never leave `path` truncated or half-written.
pub fn write_file_atomic(path: &Path, contents: &[u8]) -> Result<(), PathError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut temp_file = NamedTempFile::new_in(dir).context(path)?;
    temp_file.write_all(contents).context(path)?;
    persist_temp_file(temp_file, path).context(path)?;
    Ok(())
}

/// Like `NamedTempFile::persist()`, but doesn't try to overwrite the existing
/// target on Windows.
fn persist_temp_file<P: AsRef<Path>>(temp_file: NamedTempFile, new_path: P) -> io::Result<File> {
    if cfg!(windows) {
        // On Windows, overwriting a file can fail if the file is opened without
        // FILE_SHARE_DELETE, for example. persist_noclobber() sidesteps that by
        // never attempting the overwrite in the first place.
        match temp_file.persist_noclobber(&new_path) {
            Ok(file) => Ok(file),
            Err(PersistError { error, file: _ }) => Err(error),
        }
    } else {
        // On Unix, rename() is atomic and succeeds even if the destination
        // exists.
        temp_file
            .persist(new_path)
            .map_err(|PersistError { error, file: _ }| error)
    }
}

/// Copies `src` into `dest`, then sets `dest`'s mtime to match `src`'s.
///
/// Blob ids are derived from `(path, mtime, size)` (see `crate::hash`), so a
/// copy that silently refreshed the mtime would change the id of the content
/// it just stored. This keeps the id stable across the copy.
pub fn copy_preserving_mtime(src: &Path, dest: &Path) -> Result<(), PathError> {
    fs::copy(src, dest).context(src)?;
    let mtime = fs::metadata(src).context(src)?.modified().context(src)?;
    let dest_file = File::open(dest).context(dest)?;
    dest_file.set_modified(mtime).context(dest)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;
    use crate::testutils::new_temp_dir;

    #[test]
    fn test_write_file_atomic_creates_new_file() {
        let temp_dir = new_temp_dir();
        let target = temp_dir.path().join("file");
        write_file_atomic(&target, b"contents").unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"contents");
    }

    #[test]
    fn test_write_file_atomic_overwrites_existing_file() {
        let temp_dir = new_temp_dir();
        let target = temp_dir.path().join("file");
        fs::write(&target, b"old").unwrap();
        write_file_atomic(&target, b"new").unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"new");
    }

    #[test]
    fn test_copy_preserving_mtime() {
        let temp_dir = new_temp_dir();
        let src = temp_dir.path().join("src");
        let dest = temp_dir.path().join("dest");
        let mut f = File::create(&src).unwrap();
        f.write_all(b"hello").unwrap();
        drop(f);

        copy_preserving_mtime(&src, &dest).unwrap();
        assert_eq!(fs::read(&dest).unwrap(), b"hello");
        let src_mtime = fs::metadata(&src).unwrap().modified().unwrap();
        let dest_mtime = fs::metadata(&dest).unwrap().modified().unwrap();
        assert_eq!(src_mtime, dest_mtime);
    }
}
