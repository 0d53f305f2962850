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

mod command_error;
mod commands;
mod ui;

use clap::Parser;
use clap::Subcommand;

use command_error::CommandError;
use commands::add::cmd_add;
use commands::add::AddArgs;
use commands::branch::cmd_branch;
use commands::branch::BranchArgs;
use commands::checkout::cmd_checkout;
use commands::checkout::CheckoutArgs;
use commands::commit::cmd_commit;
use commands::commit::CommitArgs;
use commands::init::cmd_init;
use commands::init::InitArgs;
use commands::log::cmd_log;
use commands::log::LogArgs;
use commands::merge::cmd_merge;
use commands::merge::MergeArgs;
use commands::revert::cmd_revert;
use commands::revert::RevertArgs;
use commands::status::cmd_status;
use commands::status::StatusArgs;
use ui::Ui;

/// minigit: a minimal distributed version control system
#[derive(clap::Parser, Clone, Debug)]
#[command(name = "minigit", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase logging verbosity; can be repeated
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Clone, Debug)]
enum Commands {
    Init(InitArgs),
    Add(AddArgs),
    Commit(CommitArgs),
    Status(StatusArgs),
    Log(LogArgs),
    Revert(RevertArgs),
    Checkout(CheckoutArgs),
    Branch(BranchArgs),
    Merge(MergeArgs),
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn,minigit_lib=info",
        1 => "info,minigit_lib=debug",
        _ => "debug,minigit_lib=trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(
            |_| tracing_subscriber::EnvFilter::new(filter),
        ))
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli, ui: &mut Ui) -> Result<(), CommandError> {
    match &cli.command {
        Commands::Init(args) => cmd_init(ui, args),
        Commands::Add(args) => cmd_add(ui, args),
        Commands::Commit(args) => cmd_commit(ui, args),
        Commands::Status(args) => cmd_status(ui, args),
        Commands::Log(args) => cmd_log(ui, args),
        Commands::Revert(args) => cmd_revert(ui, args),
        Commands::Checkout(args) => cmd_checkout(ui, args),
        Commands::Branch(args) => cmd_branch(ui, args),
        Commands::Merge(args) => cmd_merge(ui, args),
    }
}

/// clap's own usage-error path (missing required argument, wrong arg count,
/// ...) prints and exits before `run` ever sees a `CommandError`, and it
/// exits with code 2. Route it through the same code-1 contract as every
/// other documented misuse; `--help`/`--version` still exit 0.
fn exit_for_clap_error(err: clap::Error) -> ! {
    let _ = err.print();
    let code = match err.kind() {
        clap::error::ErrorKind::DisplayHelp
        | clap::error::ErrorKind::DisplayVersion
        | clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
        _ => 1,
    };
    std::process::exit(code);
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => exit_for_clap_error(err),
    };
    init_tracing(cli.verbose);

    let mut ui = Ui::new();
    if let Err(err) = run(&cli, &mut ui) {
        let _ = ui.write_error(err.to_string());
        std::process::exit(err.exit_code());
    }
}
