// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use crate::config::CommitFormat;
use crate::domain::{Area, ChangeSet, ClassificationResult, CommitMessage, CommitType};

pub struct MessageAssembler;

impl MessageAssembler {
    pub fn assemble(
        result: &ClassificationResult,
        changes: &ChangeSet,
        format: &CommitFormat,
    ) -> CommitMessage {
        let commit_type = Self::commit_type(result);
        let scope = if format.include_scope {
            Self::scope(result)
                .map(|area| format!("({area})"))
                .unwrap_or_default()
        } else {
            String::new()
        };
        let description = Self::description(changes);

        let mut message = CommitMessage::new(format!("{commit_type}{scope}: {description}"));

        if format.include_body && changes.len() > 1 {
            message.push_line("");
            message.push_line("Changes:");
            for (path, status) in changes.entries() {
                message.push_line(format!("  {} {}", status.marker(), path));
            }
        }

        message
    }

    /// Only one type is chosen; the order of the checks is the priority.
    pub fn commit_type(result: &ClassificationResult) -> CommitType {
        if result.fix {
            CommitType::Fix
        } else if result.feature {
            CommitType::Feat
        } else if result.test {
            CommitType::Test
        } else if result.docs {
            CommitType::Docs
        } else if result.config {
            CommitType::Config
        } else if result.refactor {
            CommitType::Refactor
        } else if result.style {
            CommitType::Style
        } else {
            CommitType::Chore
        }
    }

    pub fn scope(result: &ClassificationResult) -> Option<Area> {
        result.areas().first().copied()
    }

    /// The verb depends on the group sizes, the object is always the first
    /// combined file, even when that file is not the one being removed.
    pub fn description(changes: &ChangeSet) -> String {
        let Some(first) = changes.all_files().next().map(basename) else {
            return "update files".into();
        };

        if changes.is_all_added() {
            format!("add {first}")
        } else if !changes.deleted().is_empty() {
            format!("remove {first}")
        } else {
            format!("update {first}")
        }
    }
}

fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
