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

//! Wraps engine errors (and the front-end's own usage errors) for
//! presentation. The engine never prints; this is the one place that turns a
//! failure into a message and an exit code.

use std::io;

use minigit_lib::RepoError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Repo(#[from] RepoError),

    /// A usage error: wrong argument count, bad flag combination. Distinct
    /// from a `RepoError` because it never touched the repository.
    #[error("{0}")]
    Cli(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CommandError {
    pub fn cli(message: impl Into<String>) -> Self {
        Self::Cli(message.into())
    }

    /// All documented misuse and engine failures exit 1; only a clean run
    /// exits 0.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_exits_with_code_one() {
        let repo_err = CommandError::from(RepoError::NotInitialised("/tmp/x".into()));
        let cli_err = CommandError::cli("bad arguments");
        let io_err = CommandError::from(io::Error::new(io::ErrorKind::NotFound, "missing"));

        assert_eq!(repo_err.exit_code(), 1);
        assert_eq!(cli_err.exit_code(), 1);
        assert_eq!(io_err.exit_code(), 1);
    }

    #[test]
    fn cli_error_displays_its_message_verbatim() {
        let err = CommandError::cli("paths must not be empty");
        assert_eq!(err.to_string(), "paths must not be empty");
    }
}
