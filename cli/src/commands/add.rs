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

/// Stage one or more files for the next commit
#[derive(clap::Args, Clone, Debug)]
pub struct AddArgs {
    /// Paths, relative to the working directory, to stage
    #[arg(required = true, num_args = 1..)]
    paths: Vec<String>,
}

#[tracing::instrument(skip(ui))]
pub fn cmd_add(ui: &mut Ui, args: &AddArgs) -> Result<(), CommandError> {
    let repo = open_repo_in_cwd()?;
    let report = repo.add(&args.paths)?;
    for path in &report.staged {
        ui.write_result(format!("added {path}"))?;
    }
    for path in &report.not_found {
        ui.write_error(format!("path not found: {path}"))?;
    }
    Ok(())
}
