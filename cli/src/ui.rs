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

//! A small seam between commands and the terminal. Commands write through
//! `Ui` rather than calling `println!`/`eprintln!` directly, so that the
//! output streams stay in one place and are easy to redirect in tests.

use std::io;
use std::io::Write as _;

/// Primary command output (one line per result, e.g. a log entry or a
/// status line) goes to stdout; incidental progress notes go to stderr.
pub struct Ui {
    stdout: io::Stdout,
    stderr: io::Stderr,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            stderr: io::stderr(),
        }
    }

    pub fn write_result(&mut self, line: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.stdout, "{}", line.as_ref())
    }

    pub fn write_status(&mut self, line: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.stderr, "{}", line.as_ref())
    }

    pub fn write_error(&mut self, line: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.stderr, "Error: {}", line.as_ref())
    }
}
