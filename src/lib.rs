// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

//! Suggests a conventional commit message from the names of changed files
//! and keywords found in the diff.

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;

pub use app::App;
pub use cli::Cli;
pub use config::{CommitFormat, Config};
pub use error::{Error, Result};
pub use services::{assembler::MessageAssembler, classifier::Classifier};
