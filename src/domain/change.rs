// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeStatus {
    Added,
    Modified,
    Deleted,
}

impl ChangeStatus {
    /// Marker used in the itemized message body.
    pub fn marker(&self) -> char {
        match self {
            Self::Added => '+',
            Self::Modified => '~',
            Self::Deleted => '-',
        }
    }
}

/// Files touched in one invocation, split by status.
///
/// Each group keeps the order in which paths were supplied. A path lands in
/// exactly one group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChangeSet {
    added: Vec<String>,
    modified: Vec<String>,
    deleted: Vec<String>,
}

impl ChangeSet {
    pub fn new(added: Vec<String>, modified: Vec<String>, deleted: Vec<String>) -> Self {
        Self {
            added,
            modified,
            deleted,
        }
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, ChangeStatus)>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for (path, status) in entries {
            let path = path.into();
            match status {
                ChangeStatus::Added => set.added.push(path),
                ChangeStatus::Modified => set.modified.push(path),
                ChangeStatus::Deleted => set.deleted.push(path),
            }
        }
        set
    }

    pub fn added(&self) -> &[String] {
        &self.added
    }

    pub fn modified(&self) -> &[String] {
        &self.modified
    }

    pub fn deleted(&self) -> &[String] {
        &self.deleted
    }

    pub fn len(&self) -> usize {
        self.added.len() + self.modified.len() + self.deleted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when there are additions and nothing else.
    pub fn is_all_added(&self) -> bool {
        !self.added.is_empty() && self.modified.is_empty() && self.deleted.is_empty()
    }

    /// Added, then modified, then deleted.
    pub fn all_files(&self) -> impl Iterator<Item = &str> {
        self.added
            .iter()
            .chain(&self.modified)
            .chain(&self.deleted)
            .map(String::as_str)
    }

    /// Same order as [`all_files`](Self::all_files), paired with the status.
    pub fn entries(&self) -> impl Iterator<Item = (&str, ChangeStatus)> {
        let added = self.added.iter().map(|f| (f.as_str(), ChangeStatus::Added));
        let modified = self.modified.iter().map(|f| (f.as_str(), ChangeStatus::Modified));
        let deleted = self.deleted.iter().map(|f| (f.as_str(), ChangeStatus::Deleted));
        added.chain(modified).chain(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_entries_groups_and_keeps_order() {
        let set = ChangeSet::from_entries([
            ("b.rs", ChangeStatus::Modified),
            ("a.rs", ChangeStatus::Added),
            ("c.rs", ChangeStatus::Modified),
            ("gone.rs", ChangeStatus::Deleted),
        ]);

        assert_eq!(set.added(), ["a.rs"]);
        assert_eq!(set.modified(), ["b.rs", "c.rs"]);
        assert_eq!(set.deleted(), ["gone.rs"]);
        assert_eq!(
            set.all_files().collect::<Vec<_>>(),
            ["a.rs", "b.rs", "c.rs", "gone.rs"]
        );
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn all_added_requires_additions() {
        assert!(!ChangeSet::default().is_all_added());
        assert!(ChangeSet::from_entries([("x", ChangeStatus::Added)]).is_all_added());
        assert!(
            !ChangeSet::from_entries([("x", ChangeStatus::Added), ("y", ChangeStatus::Deleted)])
                .is_all_added()
        );
    }
}
