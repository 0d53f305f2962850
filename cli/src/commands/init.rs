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

use minigit_lib::Repo;
use minigit_lib::RepoLayout;

use crate::command_error::CommandError;
use crate::ui::Ui;

/// Create a new repository in the current directory
#[derive(clap::Args, Clone, Debug)]
pub struct InitArgs {}

pub fn cmd_init(ui: &mut Ui, _args: &InitArgs) -> Result<(), CommandError> {
    let cwd = std::env::current_dir().map_err(|e| CommandError::cli(e.to_string()))?;
    let layout = RepoLayout::new(cwd);
    Repo::init(&layout)?;
    ui.write_result(format!(
        "Initialised empty repository in {}",
        layout.repo_root().display()
    ))?;
    Ok(())
}
