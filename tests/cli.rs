// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

//! End-to-end runs of the binary inside throwaway git repositories.
//!
//! Every test returns early when `git` is not installed.

mod helpers;

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use helpers::{commit_all, git, git_available, init_repo, write_file};

fn commitgen(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("commitgen").expect("binary built");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".xdg"))
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

// ─── No-op outcomes ──────────────────────────────────────────────────────────

#[test]
fn clean_repository_reports_nothing_to_commit() {
    if !git_available() {
        return;
    }
    let repo = init_repo();

    commitgen(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No changes detected. Nothing to commit.",
        ));
}

#[test]
fn unstaged_untracked_file_yields_no_changed_files() {
    if !git_available() {
        return;
    }
    let repo = init_repo();
    write_file(repo.path(), "notes.txt", "draft\n");

    commitgen(repo.path())
        .arg("--no-stage")
        .assert()
        .success()
        .stdout(predicate::str::contains("No changed files detected."));

    // still untracked
    let status = git(repo.path(), &["status", "--porcelain"]);
    assert!(status.starts_with("??"), "unexpected status: {status}");
}

#[test]
fn outside_repository_fails_with_exit_code_one() {
    if !git_available() {
        return;
    }
    let dir = TempDir::new().unwrap();

    commitgen(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Not a git repository"));
}

#[test]
fn unreadable_status_fails_with_exit_code_one() {
    if !git_available() {
        return;
    }
    let repo = init_repo();
    write_file(repo.path(), "a.txt", "one\n");
    commit_all(repo.path(), "initial");
    fs::write(repo.path().join(".git/index"), "not an index").unwrap();

    commitgen(repo.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot read git status"));
}

#[test]
fn staging_failure_warns_and_continues() {
    if !git_available() {
        return;
    }
    let repo = init_repo();
    write_file(repo.path(), "a.txt", "one\n");
    commit_all(repo.path(), "initial");

    write_file(repo.path(), "a.txt", "fix typo\n");
    write_file(repo.path(), "new.txt", "untracked\n");
    fs::write(repo.path().join(".git/index.lock"), "").unwrap();

    commitgen(repo.path())
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Failed to stage some files. Continuing anyway...",
        ))
        .stdout(predicate::str::contains("fix: update a.txt"));

    // nothing was staged
    let status = git(repo.path(), &["status", "--porcelain"]);
    assert!(status.contains("?? new.txt"), "unexpected status: {status}");
}

// ─── Message generation ──────────────────────────────────────────────────────

#[test]
fn new_file_is_staged_and_described_as_added() {
    if !git_available() {
        return;
    }
    let repo = init_repo();
    write_file(repo.path(), "scripts/new.js", "console.log('hi');\n");

    commitgen(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("chore: add new.js"))
        .stdout(predicate::str::contains(
            "git commit -m \"chore: add new.js\"",
        ))
        .stdout(predicate::str::contains("git commit -F").not());

    let status = git(repo.path(), &["status", "--porcelain"]);
    assert_eq!(status.trim(), "A  scripts/new.js");
    assert!(!repo.path().join(".git-commit-msg.txt").exists());
}

#[test]
fn multi_file_change_writes_message_file() {
    if !git_available() {
        return;
    }
    let repo = init_repo();
    write_file(repo.path(), "README.md", "# Demo\nhello\n");
    write_file(repo.path(), "src/app.ts", "export const x = 1;\n");
    commit_all(repo.path(), "initial");

    write_file(repo.path(), "README.md", "# Demo\nhello world\n");
    write_file(repo.path(), "src/api/route.ts", "export const y = 2;\n");
    fs::remove_file(repo.path().join("src/app.ts")).unwrap();

    let expected = "feat(api): remove route.ts\n\
                    \n\
                    Changes:\n  \
                    + src/api/route.ts\n  \
                    ~ README.md\n  \
                    - src/app.ts";

    commitgen(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(expected))
        .stdout(predicate::str::contains(
            "git commit -m \"feat(api): remove route.ts\"",
        ))
        .stdout(predicate::str::contains("git commit -F"));

    let written = fs::read_to_string(repo.path().join(".git-commit-msg.txt")).unwrap();
    assert_eq!(written, expected);
}

#[test]
fn dry_run_skips_message_file() {
    if !git_available() {
        return;
    }
    let repo = init_repo();
    write_file(repo.path(), "app/page.tsx", "export default 1;\n");
    write_file(repo.path(), "app/layout.tsx", "export default 2;\n");

    commitgen(repo.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("feat(ui): add layout.tsx"))
        .stdout(predicate::str::contains("Changes:"));

    assert!(!repo.path().join(".git-commit-msg.txt").exists());
}

#[test]
fn diff_keywords_drive_commit_type() {
    if !git_available() {
        return;
    }
    let repo = init_repo();
    write_file(repo.path(), "README.md", "# Demo\nteh typo\n");
    commit_all(repo.path(), "initial");
    write_file(repo.path(), "README.md", "# Demo\nfix typo\n");

    commitgen(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("fix: update README.md"));
}

#[test]
fn json_output_reports_classification() {
    if !git_available() {
        return;
    }
    let repo = init_repo();
    write_file(repo.path(), "src/api/route.ts", "export const y = 2;\n");

    let output = commitgen(repo.path())
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["commit_type"], "feat");
    assert_eq!(report["message"], "feat(api): add route.ts");
    assert_eq!(report["classification"]["feature"], true);
    assert_eq!(report["classification"]["areas"][0], "api");
    assert_eq!(report["changes"]["added"][0], "src/api/route.ts");
}

#[test]
fn exclude_patterns_from_project_config() {
    if !git_available() {
        return;
    }
    let repo = init_repo();
    write_file(repo.path(), ".commitgen.toml", "exclude = [\"docs/**\"]\n");
    write_file(repo.path(), "docs/guide.md", "v1\n");
    commit_all(repo.path(), "initial");

    write_file(repo.path(), "docs/guide.md", "v2\n");
    commitgen(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No changed files detected."));

    write_file(repo.path(), "src/main.rs", "fn main() {}\n");
    commitgen(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("chore: add main.rs"))
        .stdout(predicate::str::contains("guide.md").not());
}

#[test]
fn commit_flag_creates_commit() {
    if !git_available() {
        return;
    }
    let repo = init_repo();
    write_file(repo.path(), "scripts/new.js", "console.log('hi');\n");

    commitgen(repo.path())
        .args(["--commit", "--yes"])
        .assert()
        .success();

    let subject = git(repo.path(), &["log", "-1", "--format=%s"]);
    assert_eq!(subject.trim(), "chore: add new.js");
}

// ─── Subcommands ─────────────────────────────────────────────────────────────

#[test]
fn completions_subcommand_prints_script() {
    let dir = TempDir::new().unwrap();
    commitgen(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("commitgen"));
}

#[test]
fn config_subcommand_shows_effective_values() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), ".commitgen.toml", "message_file = \"DRAFT\"\n");

    commitgen(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Message file: DRAFT"))
        .stdout(predicate::str::contains("include_body: true"));
}

#[test]
fn invalid_project_config_fails() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), ".commitgen.toml", "message_file = \"a/b\"\n");

    commitgen(dir.path())
        .arg("config")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("message_file"));
}
