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

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod merge;
pub mod revert;
pub mod status;

use minigit_lib::Repo;
use minigit_lib::RepoConfig;
use minigit_lib::RepoLayout;

use crate::command_error::CommandError;

/// Every command except `init` opens the repository rooted at the current
/// directory this way.
pub fn open_repo_in_cwd() -> Result<Repo, CommandError> {
    let cwd = std::env::current_dir().map_err(|e| CommandError::cli(e.to_string()))?;
    let layout = RepoLayout::new(cwd);
    Ok(Repo::with_config(layout, RepoConfig::from_env()))
}
