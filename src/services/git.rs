// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tracing::{debug, warn};

use crate::domain::ChangeStatus;
use crate::error::{Error, Result};

/// Handle on one repository. Created once per run and passed by reference.
pub struct GitService {
    repo: gix::Repository,
    work_dir: PathBuf,
}

impl GitService {
    pub fn discover() -> Result<Self> {
        Self::discover_at(".")
    }

    pub fn discover_at(path: impl AsRef<Path>) -> Result<Self> {
        let repo = gix::discover(path.as_ref()).map_err(|_| Error::NotAGitRepo)?;

        let work_dir = repo
            .workdir()
            .ok_or_else(|| Error::Git("Bare repository not supported".into()))?
            .to_path_buf();

        debug!(work_dir = %work_dir.display(), "repository discovered");
        Ok(Self { repo, work_dir })
    }

    /// Name of an unfinished merge/rebase/etc., if any.
    pub fn in_progress_operation(&self) -> Option<&'static str> {
        let state = self.repo.state()?;
        Some(match state {
            gix::state::InProgress::Merge => "merge",
            gix::state::InProgress::Rebase | gix::state::InProgress::RebaseInteractive => {
                "rebase"
            }
            gix::state::InProgress::CherryPick | gix::state::InProgress::CherryPickSequence => {
                "cherry-pick"
            }
            gix::state::InProgress::Revert | gix::state::InProgress::RevertSequence => "revert",
            _ => "operation",
        })
    }

    fn git(&self, args: &[&str]) -> std::io::Result<Output> {
        debug!(?args, "running git");
        Command::new("git")
            .args(args)
            .current_dir(&self.work_dir)
            .output()
    }

    /// Run git and return stdout, mapping a non-zero exit to `Error::Git`.
    fn run(&self, args: &[&str]) -> Result<String> {
        let output = self.git(args)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Git(stderr.trim().to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// NUL-separated path list. Failures degrade to an empty list.
    fn path_list(&self, args: &[&str]) -> Vec<String> {
        match self.run(args) {
            Ok(out) => split_nul(&out),
            Err(e) => {
                warn!(?args, error = %e, "git path listing failed, treating as empty");
                Vec::new()
            }
        }
    }

    pub fn untracked_files(&self) -> Vec<String> {
        self.path_list(&["ls-files", "--others", "--exclude-standard", "-z"])
    }

    pub fn staged_files(&self) -> Vec<String> {
        self.path_list(&["diff", "--cached", "--name-only", "--no-renames", "-z"])
    }

    pub fn unstaged_files(&self) -> Vec<String> {
        self.path_list(&["diff", "--name-only", "--no-renames", "-z"])
    }

    /// Staged then unstaged paths, each path once, first occurrence kept.
    pub fn changed_files(&self) -> Vec<String> {
        let mut files = self.staged_files();
        for path in self.unstaged_files() {
            if !files.contains(&path) {
                files.push(path);
            }
        }
        files
    }

    pub fn stage_all(&self) -> Result<()> {
        self.run(&["add", "./"]).map(|_| ())
    }

    /// Porcelain status of the work tree. This is the one query a run
    /// cannot continue without.
    pub fn status(&self) -> Result<String> {
        self.run(&[
            "status",
            "--porcelain",
            "--no-renames",
            "--untracked-files=all",
            "-z",
        ])
        .map_err(|e| match e {
            Error::Git(msg) => Error::Status(msg),
            other => Error::Status(other.to_string()),
        })
    }

    /// Staged diff, or the unstaged one when nothing is staged. Empty when
    /// both are unavailable.
    pub fn diff(&self) -> String {
        match self.run(&["diff", "--cached", "--no-ext-diff"]) {
            Ok(diff) if !diff.is_empty() => return diff,
            Ok(_) => {}
            Err(e) => warn!(error = %e, "staged diff unavailable, trying work tree"),
        }

        self.run(&["diff", "--no-ext-diff"]).unwrap_or_else(|e| {
            warn!(error = %e, "work tree diff unavailable, continuing without diff");
            String::new()
        })
    }

    pub fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "-m", message]).map(|_| ())
    }

    /// Map each path in `git status --porcelain -z` output to its status.
    ///
    /// Untracked (`??`) and index additions count as added. An index
    /// deletion, or a work-tree deletion with a clean index, counts as
    /// deleted. Everything else, `MD` included, counts as modified.
    pub fn parse_status(status: &str) -> HashMap<String, ChangeStatus> {
        status
            .split('\0')
            .filter_map(|entry| {
                let code = entry.get(..2)?;
                let path = entry.get(3..).filter(|p| !p.is_empty())?;
                Some((path.to_string(), status_from_code(code)))
            })
            .collect()
    }
}

fn status_from_code(code: &str) -> ChangeStatus {
    let mut chars = code.chars();
    let index = chars.next().unwrap_or(' ');
    let worktree = chars.next().unwrap_or(' ');

    match (index, worktree) {
        ('?', '?') | ('A', _) => ChangeStatus::Added,
        ('D', _) | (' ', 'D') => ChangeStatus::Deleted,
        _ => ChangeStatus::Modified,
    }
}

fn split_nul(out: &str) -> Vec<String> {
    out.split('\0')
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
