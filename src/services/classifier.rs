// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use crate::domain::{Area, ClassificationResult};

/// What a single path says about the change, decided by its name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    Test,
    Docs,
    Config,
    Feature(Area),
    Ci,
    Unclassified,
}

impl PathClass {
    /// First matching rule wins. Matching is plain, case-sensitive substring
    /// search, so the order of the checks below decides ambiguous paths.
    pub fn from_path(path: &str) -> Self {
        if contains_any(path, &["__tests__", ".test.", ".spec."]) {
            return Self::Test;
        }

        if contains_any(path, &["README", ".md"]) {
            return Self::Docs;
        }

        if contains_any(path, &["config", ".json", ".yml", ".yaml"]) {
            return Self::Config;
        }

        if contains_any(path, &["api/", "route"]) {
            return Self::Feature(Area::Api);
        }

        if contains_any(path, &["component", "page.tsx", "layout.tsx"]) {
            return Self::Feature(Area::Ui);
        }

        if contains_any(path, &["prisma", "schema"]) {
            return Self::Feature(Area::Database);
        }

        if contains_any(path, &["workflow", ".github"]) {
            return Self::Ci;
        }

        Self::Unclassified
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

const FIX_KEYWORDS: &[&str] = &["fix", "bug", "error"];
const REFACTOR_KEYWORDS: &[&str] = &["refactor"];
const STYLE_KEYWORDS: &[&str] = &["style", "format"];

pub struct Classifier;

impl Classifier {
    pub fn classify<S: AsRef<str>>(files: &[S], diff: &str) -> ClassificationResult {
        let mut result = ClassificationResult::default();

        for file in files {
            Self::apply_path(&mut result, PathClass::from_path(file.as_ref()));
        }

        Self::apply_diff(&mut result, diff);
        result
    }

    fn apply_path(result: &mut ClassificationResult, class: PathClass) {
        match class {
            PathClass::Test => result.test = true,
            PathClass::Docs => result.docs = true,
            PathClass::Config => result.config = true,
            PathClass::Feature(area) => {
                result.feature = true;
                result.add_area(area);
            }
            PathClass::Ci => {
                result.config = true;
                result.add_area(Area::Ci);
            }
            PathClass::Unclassified => {}
        }
    }

    fn apply_diff(result: &mut ClassificationResult, diff: &str) {
        if diff.is_empty() {
            return;
        }

        let diff = diff.to_lowercase();

        if contains_any(&diff, FIX_KEYWORDS) {
            result.fix = true;
        }
        if contains_any(&diff, REFACTOR_KEYWORDS) {
            result.refactor = true;
        }
        if contains_any(&diff, STYLE_KEYWORDS) {
            result.style = true;
        }
    }
}
