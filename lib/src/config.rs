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

//! Configuration threaded into every engine operation, rather than read ad
//! hoc from globals or the environment inside the operations themselves.

/// The literal author name used when no override is configured.
pub const DEFAULT_AUTHOR: &str = "Author";

/// Environment variable that overrides [`DEFAULT_AUTHOR`], read once by the
/// CLI front-end at start-up.
pub const AUTHOR_ENV_VAR: &str = "MINIGIT_AUTHOR";

#[derive(Debug, Clone)]
pub struct RepoConfig {
    pub author: String,
}

impl RepoConfig {
    pub fn from_env() -> Self {
        Self {
            author: std::env::var(AUTHOR_ENV_VAR).unwrap_or_else(|_| DEFAULT_AUTHOR.to_string()),
        }
    }
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            author: DEFAULT_AUTHOR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_author_is_the_reference_literal() {
        assert_eq!(RepoConfig::default().author, "Author");
    }

    #[test]
    fn from_env_falls_back_to_default_when_unset() {
        // SAFETY: mutating process env races with any other thread reading
        // it; sound here only because no other test in this crate reads
        // MINIGIT_AUTHOR, not because the test harness is single-threaded.
        unsafe {
            std::env::remove_var(AUTHOR_ENV_VAR);
        }
        assert_eq!(RepoConfig::from_env().author, DEFAULT_AUTHOR);
    }

    #[test]
    fn from_env_honours_override() {
        // SAFETY: mutating process env races with any other thread reading
        // it; sound here only because no other test in this crate reads
        // MINIGIT_AUTHOR, not because the test harness is single-threaded.
        unsafe {
            std::env::set_var(AUTHOR_ENV_VAR, "Ada");
        }
        let config = RepoConfig::from_env();
        unsafe {
            std::env::remove_var(AUTHOR_ENV_VAR);
        }
        assert_eq!(config.author, "Ada");
    }
}
