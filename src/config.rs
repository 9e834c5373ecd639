//! # Copyright Configuration
//!
//! Process-wide settings that decide whether documentation is exposed and
//! which defaults apply to documented routes. Loaded once at startup from a
//! YAML file and shared immutably (`Arc<CopyrightConfig>`) for the life of
//! the process.
//!
//! ```yaml
//! title: Pet Store
//! team: platform
//! version: "1.2.0"
//! online: false
//! ignore_url_set:
//!   - /internal/*
//!   - /users|delete
//! global_responses:
//!   - { code: 200, msg: success }
//!   - { code: 500, msg: server error }
//! return_record_level: true
//! comment_in_return_example: true
//! ```
//!
//! Note that `online: true` means "running in production": documentation is
//! switched off entirely.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// One entry of a response-code catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseCode {
    pub code: i32,
    #[serde(default)]
    pub msg: String,
}

impl ResponseCode {
    pub fn new(code: i32, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
        }
    }
}

/// Documentation switches and defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CopyrightConfig {
    pub title: String,
    pub team: String,
    pub version: String,
    pub copyright: String,
    pub contact: String,
    /// `true` disables every documentation endpoint.
    pub online: bool,
    /// Ignore rules: literal paths, `*` wildcards, and `path|METHOD` pairs.
    pub ignore_url_set: BTreeSet<String>,
    /// Fallback catalog for routes that declare no response codes.
    pub global_responses: Vec<ResponseCode>,
    /// Name nested return fields by their full path instead of the leaf name.
    pub return_record_level: bool,
    /// Default for `RouteDoc::comment_in_example` when a route declares no metadata.
    pub comment_in_return_example: bool,
}

impl CopyrightConfig {
    /// Parse a YAML document.
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        serde_yaml::from_str(source).context("invalid copyright config")
    }

    /// Load the configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_yaml_str(&source).with_context(|| format!("in {}", path.display()))
    }

    /// Whether documentation may be served at all.
    #[must_use]
    pub fn docs_enabled(&self) -> bool {
        !self.online
    }
}
