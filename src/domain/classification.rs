// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use serde::Serialize;

/// Project area a path belongs to, used as the commit scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Area {
    Api,
    Ui,
    Database,
    Ci,
}

impl Area {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Ui => "ui",
            Self::Database => "database",
            Self::Ci => "ci",
        }
    }
}

impl std::fmt::Display for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub feature: bool,
    pub fix: bool,
    pub config: bool,
    pub test: bool,
    pub docs: bool,
    pub style: bool,
    pub refactor: bool,
    areas: Vec<Area>,
}

impl ClassificationResult {
    /// Areas in first-seen order, without duplicates.
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub(crate) fn add_area(&mut self, area: Area) {
        if !self.areas.contains(&area) {
            self.areas.push(area);
        }
    }

    /// True when no flag is set and no area was recorded.
    pub fn is_unclassified(&self) -> bool {
        *self == Self::default()
    }
}
