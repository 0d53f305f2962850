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

/// Three-way merge another branch's tip into the current branch
#[derive(clap::Args, Clone, Debug)]
pub struct MergeArgs {
    /// The branch to merge into the current one
    branch: String,
}

#[tracing::instrument(skip(ui))]
pub fn cmd_merge(ui: &mut Ui, args: &MergeArgs) -> Result<(), CommandError> {
    let repo = open_repo_in_cwd()?;
    let commit = repo.merge(&args.branch)?;
    ui.write_result(format!("merged {} into current branch as {}", args.branch, commit.id))?;
    Ok(())
}
