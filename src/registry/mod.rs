//! # Route Registry
//!
//! The registration layer the documentation engine reads from. Each
//! [`RegisteredRoute`] pairs the URL patterns and HTTP methods a handler is
//! mounted on with its [`HandlerDescriptor`], which in turn answers the
//! metadata lookups of [`RouteMetadataProvider`].
//!
//! Routes are registered in code through [`Registry::register`] or loaded
//! from a YAML manifest (see [`manifest`]). Enumeration preserves
//! registration order; the model's tie-breaks depend on it.

mod descriptor;
pub mod manifest;

pub use descriptor::{
    ApiGroup, ApiMethod, ControllerDescriptor, HandlerDescriptor, ResponseKind, ReturnField,
    RouteMetadataProvider,
};

use crate::error::BuildError;
use http::Method;
use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// One registration: patterns + methods mapped to a handler.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredRoute {
    pub urls: BTreeSet<String>,
    /// Empty means "any method".
    pub methods: Vec<Method>,
    pub handler: Arc<HandlerDescriptor>,
}

impl RegisteredRoute {
    #[must_use]
    pub fn url_list(&self) -> Vec<String> {
        self.urls.iter().cloned().collect()
    }

    #[must_use]
    pub fn method_names(&self) -> Vec<String> {
        self.methods.iter().map(|m| m.as_str().to_string()).collect()
    }
}

/// Enumerable source of registered routes.
pub trait RouteRegistry {
    /// All routes in discovery order.
    fn routes(&self) -> Result<Vec<RegisteredRoute>, BuildError>;
}

impl<T: RouteRegistry + ?Sized> RouteRegistry for Arc<T> {
    fn routes(&self) -> Result<Vec<RegisteredRoute>, BuildError> {
        (**self).routes()
    }
}

impl<T: RouteRegistry> RouteRegistry for RwLock<T> {
    fn routes(&self) -> Result<Vec<RegisteredRoute>, BuildError> {
        let guard = self
            .read()
            .map_err(|_| BuildError::registry("registry lock poisoned"))?;
        guard.routes()
    }
}

/// In-memory route registry.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    routes: Vec<RegisteredRoute>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler on the given patterns and methods.
    ///
    /// Duplicate methods are collapsed, keeping first-seen order.
    pub fn register<U, S, M>(&mut self, urls: U, methods: M, handler: Arc<HandlerDescriptor>)
    where
        U: IntoIterator<Item = S>,
        S: Into<String>,
        M: IntoIterator<Item = Method>,
    {
        let urls: BTreeSet<String> = urls.into_iter().map(Into::into).collect();
        let mut unique: Vec<Method> = Vec::new();
        for method in methods {
            if !unique.contains(&method) {
                unique.push(method);
            }
        }
        debug!(
            handler = %handler.name,
            urls = ?urls,
            methods = ?unique,
            "Route registered"
        );
        self.routes.push(RegisteredRoute {
            urls,
            methods: unique,
            handler,
        });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl RouteRegistry for Registry {
    fn routes(&self) -> Result<Vec<RegisteredRoute>, BuildError> {
        Ok(self.routes.clone())
    }
}
