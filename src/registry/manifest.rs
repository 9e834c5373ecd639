//! YAML route manifest.
//!
//! Lets a service describe its controllers and handlers declaratively
//! instead of registering them in code:
//!
//! ```yaml
//! controllers:
//!   - name: UserController
//!     group: { names: [users], index: 2 }
//!     handlers:
//!       - name: get_user
//!         urls: ["/users/{id}"]
//!         methods: [GET]
//!         meta: { title: Get user, index: 1 }
//!         params:
//!           - { name: id, type: int, location: path, required: true }
//!         returns:
//!           - name: data
//!             type: object
//!             children:
//!               - { name: id, type: long }
//!               - { name: email, type: string, example: "a@b.c" }
//!   - name: PageController
//!     response: view
//!     handlers:
//!       - { name: home, urls: ["/"], methods: [GET] }
//! ```

use super::{
    ApiGroup, ApiMethod, ControllerDescriptor, HandlerDescriptor, Registry, ResponseKind,
    ReturnField,
};
use crate::config::ResponseCode;
use crate::model::ParamDescriptor;
use anyhow::{anyhow, Context, Result};
use http::Method;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    controllers: Vec<ControllerEntry>,
}

#[derive(Debug, Deserialize)]
struct ControllerEntry {
    name: String,
    #[serde(default)]
    response: ResponseKind,
    #[serde(default)]
    hidden: Option<bool>,
    #[serde(default)]
    group: Option<ApiGroup>,
    #[serde(default)]
    responses: Vec<ResponseCode>,
    #[serde(default)]
    handlers: Vec<HandlerEntry>,
}

#[derive(Debug, Deserialize)]
struct HandlerEntry {
    name: String,
    urls: Vec<String>,
    #[serde(default)]
    methods: Vec<String>,
    #[serde(default)]
    response: Option<ResponseKind>,
    #[serde(default)]
    hidden: Option<bool>,
    #[serde(default)]
    group: Option<ApiGroup>,
    #[serde(default)]
    meta: Option<ApiMethod>,
    #[serde(default)]
    responses: Vec<ResponseCode>,
    #[serde(default)]
    params: Vec<ParamDescriptor>,
    #[serde(default)]
    returns: Vec<ReturnField>,
}

fn parse_method(raw: &str, handler: &str) -> Result<Method> {
    Method::from_bytes(raw.trim().to_uppercase().as_bytes())
        .map_err(|_| anyhow!("handler '{}': invalid HTTP method '{}'", handler, raw))
}

impl Registry {
    /// Build a registry from a YAML manifest document.
    pub fn from_manifest_str(source: &str) -> Result<Self> {
        let manifest: Manifest = serde_yaml::from_str(source).context("invalid route manifest")?;
        let mut registry = Registry::new();

        for entry in manifest.controllers {
            let controller = Arc::new(ControllerDescriptor {
                name: entry.name,
                response: entry.response,
                hidden: entry.hidden,
                group: entry.group,
                responses: entry.responses,
            });
            for h in entry.handlers {
                if h.urls.is_empty() {
                    return Err(anyhow!("handler '{}' has no urls", h.name));
                }
                let methods = h
                    .methods
                    .iter()
                    .map(|m| parse_method(m, &h.name))
                    .collect::<Result<Vec<_>>>()?;
                let handler = HandlerDescriptor {
                    name: h.name,
                    controller: Arc::clone(&controller),
                    response: h.response,
                    hidden: h.hidden,
                    group: h.group,
                    meta: h.meta,
                    responses: h.responses,
                    params: h.params,
                    returns: h.returns,
                };
                registry.register(h.urls, methods, Arc::new(handler));
            }
        }
        Ok(registry)
    }

    /// Load a registry from a YAML manifest file.
    pub fn from_manifest_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest {}", path.display()))?;
        Self::from_manifest_str(&source).with_context(|| format!("in {}", path.display()))
    }
}
