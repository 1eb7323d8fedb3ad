// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::io::IsTerminal;
use std::path::PathBuf;

use console::style;
use dialoguer::Confirm;
use serde::Serialize;
use tracing::{debug, warn};

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::domain::{ChangeSet, ChangeStatus, ClassificationResult, CommitMessage, CommitType};
use crate::error::{Error, Result};
use crate::services::{assembler::MessageAssembler, classifier::Classifier, git::GitService};

pub struct App {
    cli: Cli,
    config: Config,
}

/// Everything a run decided, for `--json`.
#[derive(Serialize)]
struct Report<'a> {
    changes: &'a ChangeSet,
    classification: &'a ClassificationResult,
    commit_type: CommitType,
    message: String,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self> {
        let config = Config::load(&cli)?;
        debug!(
            message_file = %config.message_file,
            stage_untracked = config.stage_untracked,
            excludes = config.exclude.len(),
            "config loaded"
        );
        Ok(Self { cli, config })
    }

    pub fn run(&mut self) -> Result<()> {
        if let Some(ref cmd) = self.cli.command {
            return self.handle_command(cmd);
        }

        self.generate_message()
    }

    fn generate_message(&self) -> Result<()> {
        let git = GitService::discover()?;

        if let Some(op) = git.in_progress_operation() {
            self.print_warning(&format!(
                "A {op} is in progress; its changes are included in the analysis"
            ));
        }

        // Step 1: make new files visible to the diff
        if self.config.stage_untracked {
            self.stage_untracked(&git);
        }

        // Step 2: status is the only query whose failure ends the run
        let status = git.status()?;
        if status.trim().is_empty() {
            println!("No changes detected. Nothing to commit.");
            return Ok(());
        }

        // Step 3: collect changed files
        let files = self.changed_files(&git)?;
        if files.is_empty() {
            println!("No changed files detected.");
            return Ok(());
        }
        debug!(count = files.len(), "changed files collected");

        // Step 4: classify and assemble
        let diff = git.diff();
        let statuses = GitService::parse_status(&status);
        let changes = ChangeSet::from_entries(files.iter().map(|f| {
            let status = statuses.get(f).copied().unwrap_or(ChangeStatus::Modified);
            (f.as_str(), status)
        }));

        let classification = Classifier::classify(&files, &diff);
        let commit_type = MessageAssembler::commit_type(&classification);
        debug!(
            %commit_type,
            areas = ?classification.areas(),
            diff_bytes = diff.len(),
            "changes classified"
        );

        let message = MessageAssembler::assemble(&classification, &changes, &self.config.format);

        if self.cli.json {
            let report = Report {
                changes: &changes,
                classification: &classification,
                commit_type,
                message: message.to_string(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        // Step 5: show, persist, optionally commit
        self.print_message(&message)?;

        if self.cli.commit {
            self.commit(&git, &message)?;
        }

        Ok(())
    }

    fn stage_untracked(&self, git: &GitService) {
        let untracked = git.untracked_files();
        if untracked.is_empty() {
            return;
        }

        self.print_status(&format!(
            "Found {} untracked file(s). Staging them...",
            untracked.len()
        ));

        match git.stage_all() {
            Ok(()) => self.print_info("All files staged successfully."),
            Err(e) => {
                warn!(error = %e, "staging untracked files failed");
                self.print_warning("Failed to stage some files. Continuing anyway...");
            }
        }
    }

    fn changed_files(&self, git: &GitService) -> Result<Vec<String>> {
        let mut files = git.changed_files();

        if !self.config.exclude.is_empty() {
            let excludes = self.config.exclude_set()?;
            let before = files.len();
            files.retain(|f| !excludes.is_match(f));
            debug!(excluded = before - files.len(), "exclude patterns applied");
        }

        Ok(files)
    }

    fn print_message(&self, message: &CommitMessage) -> Result<()> {
        eprintln!("\n{}\n", style("Generated commit message:").bold());
        println!("{message}");
        println!("\n---\n");
        println!("To use this message, run:");
        println!(
            "  git commit -m \"{}\"",
            message.summary().replace('"', "\\\"")
        );

        if message.is_multiline() && !self.cli.dry_run {
            let path = self.message_file_path()?;
            std::fs::write(&path, message.to_string()).map_err(|source| Error::MessageFile {
                path: path.display().to_string(),
                source,
            })?;
            debug!(path = %path.display(), "message file written");

            println!("\nOr save it to a file and use:");
            println!("  git commit -F {}", path.display());
        }

        Ok(())
    }

    fn message_file_path(&self) -> Result<PathBuf> {
        Ok(std::env::current_dir()?.join(&self.config.message_file))
    }

    fn commit(&self, git: &GitService, message: &CommitMessage) -> Result<()> {
        if !self.cli.yes {
            let is_interactive = std::io::stdout().is_terminal() && std::io::stdin().is_terminal();
            if !is_interactive {
                self.print_warning("Not a terminal. Use --yes to commit from scripts/hooks.");
                return Ok(());
            }

            let confirm = Confirm::new()
                .with_prompt("Create commit with this message?")
                .default(true)
                .interact()?;

            if !confirm {
                return Err(Error::Cancelled);
            }
        }

        git.commit(&message.to_string())?;

        eprintln!("{} Committed!", style("✓").green().bold());
        Ok(())
    }

    fn handle_command(&self, cmd: &Commands) -> Result<()> {
        match cmd {
            Commands::Init => {
                let path = Config::create_default()?;
                println!("Created config: {}", path.display());
                Ok(())
            }
            Commands::Config => {
                println!("Message file: {}", self.config.message_file);
                println!("Stage untracked: {}", self.config.stage_untracked);
                if self.config.exclude.is_empty() {
                    println!("Exclude: (none)");
                } else {
                    println!("Exclude: {}", self.config.exclude.join(", "));
                }
                if let Some(ref path) = Config::config_path() {
                    let status = if path.exists() { "found" } else { "not found" };
                    println!("Config file: {} ({})", path.display(), status);
                }
                println!();
                println!("[format]");
                println!("  include_body: {}", self.config.format.include_body);
                println!("  include_scope: {}", self.config.format.include_scope);
                Ok(())
            }
            Commands::Completions { shell } => {
                let mut cmd = <Cli as clap::CommandFactory>::command();
                clap_complete::generate(*shell, &mut cmd, "commitgen", &mut std::io::stdout());
                Ok(())
            }
        }
    }

    // ─── Output Helpers ───

    fn print_status(&self, msg: &str) {
        eprintln!("{} {}", style("→").cyan(), msg);
    }

    fn print_info(&self, msg: &str) {
        eprintln!("{} {}", style("info:").cyan(), msg);
    }

    fn print_warning(&self, msg: &str) {
        eprintln!("{} {}", style("warning:").yellow().bold(), msg);
    }
}
