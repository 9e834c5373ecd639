//! Documentation model: the frozen artifact served to API consumers.
//!
//! Everything here serializes to camelCase JSON for browser front-ends.
//! Once a [`DocumentedModel`] is published it is shared behind `Arc` and
//! never mutated.

use crate::config::{CopyrightConfig, ResponseCode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Where a request parameter is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    Path,
    #[default]
    Query,
    Header,
    Cookie,
    Body,
    Form,
}

impl fmt::Display for ParamLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParamLocation::Path => "path",
            ParamLocation::Query => "query",
            ParamLocation::Header => "header",
            ParamLocation::Cookie => "cookie",
            ParamLocation::Body => "body",
            ParamLocation::Form => "form",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamDescriptor {
    pub name: String,
    #[serde(default = "default_type", rename = "type")]
    pub data_type: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub location: ParamLocation,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub example: String,
}

fn default_type() -> String {
    "string".to_string()
}

/// One flattened field of a route's return shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnFieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    pub description: String,
    /// Nesting depth, 0 for top-level fields.
    pub level: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDoc {
    pub id: String,
    pub urls: Vec<String>,
    pub methods: Vec<String>,
    pub params: Vec<ParamDescriptor>,
    pub responses: Vec<ResponseCode>,
    pub return_fields: Vec<ReturnFieldDescriptor>,
    /// Served by the example endpoint, not repeated in the listing.
    #[serde(skip)]
    pub return_example_json: String,
    pub title: String,
    pub description: String,
    pub develop_only: bool,
    pub index: i32,
    pub comment_in_example: bool,
    pub example_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDoc {
    pub name: String,
    pub index: i32,
    pub routes: Vec<Arc<RouteDoc>>,
}

impl ModuleDoc {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            index: 0,
            routes: Vec::new(),
        }
    }
}

/// The cached artifact: ordered modules plus an id index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentedModel {
    pub modules: Vec<ModuleDoc>,
    pub routes_by_id: HashMap<String, Arc<RouteDoc>>,
}

impl DocumentedModel {
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.modules.len()
    }

    /// Total routes across all modules; a fanned-out route counts once per module.
    #[must_use]
    pub fn api_count(&self) -> usize {
        self.modules.iter().map(|m| m.routes.len()).sum()
    }

    #[must_use]
    pub fn route(&self, id: &str) -> Option<&Arc<RouteDoc>> {
        self.routes_by_id.get(id)
    }
}

/// Body of the version endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub title: String,
    pub team: String,
    pub version: String,
    pub copyright: String,
    pub contact: String,
    pub global_responses: Vec<ResponseCode>,
    pub group_count: usize,
    pub api_count: usize,
}

impl VersionInfo {
    pub fn new(config: &CopyrightConfig, model: &DocumentedModel) -> Self {
        Self {
            title: config.title.clone(),
            team: config.team.clone(),
            version: config.version.clone(),
            copyright: config.copyright.clone(),
            contact: config.contact.clone(),
            global_responses: config.global_responses.clone(),
            group_count: model.group_count(),
            api_count: model.api_count(),
        }
    }
}

/// Outcome of a lookup by route id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}
