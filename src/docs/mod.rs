//! # Documentation Engine
//!
//! Turns the routes of a [`RouteRegistry`](crate::registry::RouteRegistry)
//! into a browsable [`DocumentedModel`](crate::model::DocumentedModel).
//!
//! ## Pipeline
//!
//! Every registered route passes, in order, through
//!
//! 1. [`is_documentable`] - body-producing and not hidden;
//! 2. [`IgnoreMatcher`] - configured and built-in ignore rules;
//! 3. [`join_route`] - parameters, responses, return shape, display metadata
//!    and the [`ExampleUrlBuilder`] URL;
//! 4. [`ModuleAccumulator`] - module assignment and index tie-breaks.
//!
//! The result is sorted and published once by [`DocumentModelCache`].
//!
//! ```rust
//! use brrtdoc::config::CopyrightConfig;
//! use brrtdoc::docs::{DocumentModelCache, ExampleUrlBuilder};
//! use brrtdoc::registry::{ControllerDescriptor, HandlerDescriptor, Registry};
//! use http::Method;
//! use std::sync::Arc;
//!
//! let ctrl = Arc::new(ControllerDescriptor::new("UserController"));
//! let mut registry = Registry::new();
//! let list_users = HandlerDescriptor::new("list_users", ctrl);
//! registry.register(["/users"], [Method::GET], Arc::new(list_users));
//!
//! let cache = DocumentModelCache::new(
//!     Arc::new(registry),
//!     Some(Arc::new(CopyrightConfig::default())),
//!     ExampleUrlBuilder::for_domain("http://localhost:8080"),
//! );
//! let model = cache.model().unwrap().unwrap();
//! assert_eq!(model.modules[0].name, "User-UserController");
//! ```

mod cache;
mod classify;
mod example_url;
mod group;
mod ignore;
mod join;

pub use cache::{CacheState, DocumentModelCache};
pub use classify::is_documentable;
pub use example_url::{ExampleUrlBuilder, API_PREFIX, EXAMPLE_PATH};
pub use group::{default_group_name, ModuleAccumulator, CONTROLLER_SUFFIX};
pub use ignore::{IgnoreMatcher, BUILTIN_IGNORED};
pub use join::{join_route, Extractors};
