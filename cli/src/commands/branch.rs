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

/// List branches, or create a new one from the current branch's tip
///
/// With no argument, lists every branch and its tip, marking the current
/// one. With a name, creates a new branch pointing at the current branch's
/// tip; HEAD is not moved (use `checkout` for that).
#[derive(clap::Args, Clone, Debug)]
pub struct BranchArgs {
    /// Name of the branch to create
    name: Option<String>,
}

#[tracing::instrument(skip(ui))]
pub fn cmd_branch(ui: &mut Ui, args: &BranchArgs) -> Result<(), CommandError> {
    let repo = open_repo_in_cwd()?;
    match &args.name {
        None => {
            for branch in repo.branches()? {
                let marker = if branch.is_current { "* " } else { "  " };
                let tip = branch.tip.as_deref().unwrap_or("(no commits)");
                ui.write_result(format!("{marker}{} {tip}", branch.name))?;
            }
        }
        Some(name) => {
            repo.create_branch(name)?;
            ui.write_result(format!("Created branch {name}"))?;
        }
    }
    Ok(())
}
