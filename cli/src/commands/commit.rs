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

/// Record the staged files as a new commit on the current branch
#[derive(clap::Args, Clone, Debug)]
pub struct CommitArgs {
    /// The commit message
    #[arg(long, short = 'm', required = true)]
    message: String,
}

#[tracing::instrument(skip(ui))]
pub fn cmd_commit(ui: &mut Ui, args: &CommitArgs) -> Result<(), CommandError> {
    let repo = open_repo_in_cwd()?;
    let commit = repo.commit(&args.message)?;
    ui.write_result(format!("committed {}", commit.id))?;
    Ok(())
}
