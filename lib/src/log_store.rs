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

//! Per-ref append-only logs. Each log file is `{"log": [LogEntry, ...]}` in
//! append order (oldest first).

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::error::Result;
use crate::file_util::write_file_atomic;
use crate::file_util::IoResultExt as _;
use crate::log_entry::LogEntry;

#[derive(Debug, Default, Serialize, Deserialize)]
struct LogDocument {
    log: Vec<LogEntry>,
}

/// Reads the log at `path`, or an empty list if the file is absent.
pub fn read_log(path: &Path) -> Result<Vec<LogEntry>> {
    if !path.is_file() {
        return Ok(Vec::new());
    }
    let contents = fs::read_to_string(path).context(path)?;
    let doc: LogDocument = serde_json::from_str(&contents)?;
    Ok(doc.log)
}

/// Reads, appends, and rewrites the log at `path`.
pub fn append_log(path: &Path, entry: LogEntry) -> Result<()> {
    let mut entries = read_log(path)?;
    entries.push(entry);
    let doc = LogDocument { log: entries };
    let contents = serde_json::to_string_pretty(&doc)?;
    write_file_atomic(path, contents.as_bytes())?;
    Ok(())
}
