// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "commitgen")]
#[command(version)]
#[command(
    about = "Suggest a conventional commit message from changed files and diff keywords",
    long_about = None
)]
pub struct Cli {
    /// Don't stage untracked files before analysis
    #[arg(long)]
    pub no_stage: bool,

    /// Print the message only, don't write the message file
    #[arg(long)]
    pub dry_run: bool,

    /// Print changes, classification and message as JSON
    #[arg(long, conflicts_with = "commit")]
    pub json: bool,

    /// Create the commit with the generated message
    #[arg(short, long)]
    pub commit: bool,

    /// Auto-confirm the commit without prompting
    #[arg(short = 'y', long, requires = "commit")]
    pub yes: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Initialize config file
    Init,
    /// Show current configuration
    Config,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
