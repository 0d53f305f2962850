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

use crate::command_error::CommandError;
use crate::commands::open_repo_in_cwd;
use crate::ui::Ui;

/// Show the current branch and the staged/modified/untracked file sets
#[derive(clap::Args, Clone, Debug)]
pub struct StatusArgs {}

#[tracing::instrument(skip(ui))]
pub fn cmd_status(ui: &mut Ui, _args: &StatusArgs) -> Result<(), CommandError> {
    let repo = open_repo_in_cwd()?;
    let status = repo.status()?;

    ui.write_result(format!("On branch {}", status.branch))?;
    if status.is_clean() && status.untracked.is_empty() {
        ui.write_result("nothing to commit, working tree clean")?;
        return Ok(());
    }
    for path in &status.staged {
        ui.write_result(format!("staged:    {path}"))?;
    }
    for path in &status.modified {
        ui.write_result(format!("modified:  {path}"))?;
    }
    for path in &status.untracked {
        ui.write_result(format!("untracked: {path}"))?;
    }
    Ok(())
}
