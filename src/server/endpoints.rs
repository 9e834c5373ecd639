use super::response::DocReply;
use crate::docs::{DocumentModelCache, API_PREFIX, EXAMPLE_PATH};
use crate::error::BuildError;
use crate::model::Lookup;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error};

const HEALTH_PATH: &str = "/health";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Endpoint<'a> {
    Version,
    Info,
    Example(&'a str),
    Health,
}

/// Pure request dispatch for the documentation endpoints.
///
/// Kept free of socket types so routing and status mapping can be
/// exercised directly.
#[derive(Debug, Clone)]
pub struct DocEndpoints {
    cache: Arc<DocumentModelCache>,
}

impl DocEndpoints {
    pub fn new(cache: Arc<DocumentModelCache>) -> Self {
        Self { cache }
    }

    #[must_use]
    pub fn cache(&self) -> &Arc<DocumentModelCache> {
        &self.cache
    }

    pub fn handle(&self, method: &str, path: &str) -> DocReply {
        let path = path.split_once('?').map_or(path, |(p, _)| p);
        let Some(endpoint) = route(path) else {
            debug!(method, path, "No documentation endpoint");
            return DocReply::error(
                404,
                json!({ "error": "Not Found", "method": method, "path": path }),
            );
        };
        if method != "GET" {
            return DocReply::error(
                405,
                json!({ "error": "Method Not Allowed", "method": method, "path": path }),
            );
        }

        match endpoint {
            Endpoint::Health => DocReply::json(&json!({ "status": "ok" })),
            Endpoint::Version => match self.cache.version_info() {
                Ok(Some(info)) => DocReply::json(&info),
                Ok(None) => DocReply::empty(),
                Err(e) => build_failed(&e),
            },
            Endpoint::Info => match self.cache.modules() {
                Ok(modules) => DocReply::json(&modules),
                Err(e) => build_failed(&e),
            },
            Endpoint::Example(id) => match self.cache.example(id) {
                Ok(Some(Lookup::Found(body))) => DocReply::ok(body),
                Ok(Some(Lookup::NotFound)) => {
                    DocReply::error(404, json!({ "error": "Not Found", "id": id }))
                }
                Ok(None) => DocReply::empty(),
                Err(e) => build_failed(&e),
            },
        }
    }
}

fn build_failed(e: &BuildError) -> DocReply {
    error!(error = %e, "Documentation model build failed");
    DocReply::error(
        500,
        json!({ "error": "Internal Server Error", "reason": e.to_string() }),
    )
}

fn route(path: &str) -> Option<Endpoint<'_>> {
    if path == HEALTH_PATH {
        return Some(Endpoint::Health);
    }
    let rest = path.strip_prefix(API_PREFIX)?;
    match rest {
        "/version" => Some(Endpoint::Version),
        "/info" => Some(Endpoint::Info),
        _ => example_id(rest).map(Endpoint::Example),
    }
}

/// The `{id}` segment of an example path, if `path` matches the template.
fn example_id(path: &str) -> Option<&str> {
    let (head, tail) = EXAMPLE_PATH.split_once("{id}")?;
    let id = path.strip_prefix(head)?.strip_suffix(tail)?;
    if id.is_empty() || id.contains('/') {
        None
    } else {
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table() {
        assert_eq!(route("/api/version"), Some(Endpoint::Version));
        assert_eq!(route("/api/info"), Some(Endpoint::Info));
        assert_eq!(route("/health"), Some(Endpoint::Health));
        assert_eq!(
            route("/api/example/0a1b2c3d4e5f6a7b.json"),
            Some(Endpoint::Example("0a1b2c3d4e5f6a7b"))
        );
        assert_eq!(route("/api/example/.json"), None);
        assert_eq!(route("/api/example/a/b.json"), None);
        assert_eq!(route("/api/example/abc"), None);
        assert_eq!(route("/version"), None);
    }
}
