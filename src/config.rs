// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::{Error, Result};

/// Commit message format configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitFormat {
    /// Append the itemized "Changes:" body when more than one file changed (default: true)
    #[serde(default = "default_true")]
    pub include_body: bool,

    /// Include scope in commit type, e.g., feat(api): (default: true)
    #[serde(default = "default_true")]
    pub include_scope: bool,
}

impl Default for CommitFormat {
    fn default() -> Self {
        Self {
            include_body: true,
            include_scope: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// File name, relative to the current directory, for multi-line messages
    #[serde(default = "default_message_file")]
    pub message_file: String,

    /// Stage untracked files before analysis
    #[serde(default = "default_true")]
    pub stage_untracked: bool,

    /// Glob patterns for paths left out of the analysis
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Commit message format options
    #[serde(default)]
    pub format: CommitFormat,
}

fn default_message_file() -> String {
    ".git-commit-msg.txt".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            message_file: default_message_file(),
            stage_untracked: true,
            exclude: Vec::new(),
            format: CommitFormat::default(),
        }
    }
}

impl Config {
    /// Load with priority: CLI > ENV > user config > project config > defaults
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Project-level config (.commitgen.toml in the current directory)
        if let Ok(cwd) = std::env::current_dir() {
            let project_config = cwd.join(".commitgen.toml");
            if project_config.exists() {
                figment = figment.merge(Toml::file(&project_config));
            }
        }

        // User-level config
        if let Some(path) = Self::config_path()
            && path.exists()
        {
            figment = figment.merge(Toml::file(&path));
        }

        // Environment variables (COMMITGEN_MESSAGE_FILE, COMMITGEN_FORMAT__INCLUDE_BODY, ...)
        figment = figment.merge(Env::prefixed("COMMITGEN_").split("__"));

        let mut config: Config = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "commitgen").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if cli.no_stage {
            self.stage_untracked = false;
        }
    }

    pub fn validate(&self) -> Result<()> {
        let name = self.message_file.as_str();
        if name.is_empty() {
            return Err(Error::Config("message_file cannot be empty".into()));
        }

        if name.contains(['/', '\\']) || matches!(name, "." | "..") {
            return Err(Error::Config(format!(
                "message_file must be a plain file name, got '{name}'"
            )));
        }

        self.exclude_set()?;
        Ok(())
    }

    /// Compile `exclude` into a matcher. An empty list matches nothing.
    pub fn exclude_set(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.exclude {
            let glob = Glob::new(pattern)
                .map_err(|e| Error::Config(format!("invalid exclude pattern '{pattern}': {e}")))?;
            builder.add(glob);
        }
        builder
            .build()
            .map_err(|e| Error::Config(format!("cannot build exclude patterns: {e}")))
    }

    /// Create default config file with secure permissions
    pub fn create_default() -> Result<PathBuf> {
        let Some(dir) = Self::config_dir() else {
            return Err(Error::Config("Cannot determine config directory".into()));
        };

        fs::create_dir_all(&dir)?;

        let path = dir.join("config.toml");
        let content = r#"# commitgen configuration

# File written in the current directory when the message has a body
message_file = ".git-commit-msg.txt"

# Stage untracked files (git add ./) before analysis
stage_untracked = true

# Paths to leave out of the analysis (glob syntax)
# exclude = ["*.lock", "dist/**"]

# Commit message format options
[format]
# List every changed file under a "Changes:" header
include_body = true

# Include scope in commit type, e.g., feat(api): subject
include_scope = true
"#;

        fs::write(&path, content)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&path, perms)?;
        }

        Ok(path)
    }
}
