//! # brrtdoc
//!
//! **brrtdoc** builds browsable API documentation from the routes a service
//! has already registered, and serves it over a coroutine-powered
//! [`may_minihttp`] server.
//!
//! ## Overview
//!
//! Instead of maintaining a separate API description, the service
//! registers its handlers together with a few declarations (hidden flags,
//! module grouping, display metadata, response codes, return shapes). On
//! the first documentation request, brrtdoc walks the registry once,
//! produces an ordered, grouped, immutable model and publishes it. Every
//! later read is lock-free.
//!
//! ## Architecture
//!
//! - **[`config`]** - `CopyrightConfig`: the documentation switch, ignore rules and defaults
//! - **[`registry`]** - route registration, handler descriptors and the YAML manifest
//! - **[`extract`]** - parameter and return-shape extraction with example payloads
//! - **[`docs`]** - classification, ignore rules, metadata join, grouping and the model cache
//! - **[`model`]** - the published documentation types
//! - **[`server`]** - the read-only HTTP endpoints
//! - **[`cli`]** - `brrtdoc serve` and `brrtdoc dump`
//! - **[`logging`]** / **[`runtime_config`]** - environment-driven process setup
//!
//! ### Request Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Client
//!     participant Service as server::DocService
//!     participant Cache as docs::DocumentModelCache
//!     participant Registry as registry::RouteRegistry
//!
//!     Client->>Service: GET /api/info
//!     Service->>Cache: model()
//!     alt snapshot published
//!         Cache-->>Service: Arc<DocumentedModel>
//!     else first request
//!         Cache->>Cache: lock, re-check
//!         Cache->>Registry: routes()
//!         Registry-->>Cache: Vec<RegisteredRoute>
//!         Cache->>Cache: classify, ignore, join, group, sort
//!         Cache-->>Service: Arc<DocumentedModel>
//!     end
//!     Service-->>Client: 200 [ModuleDoc...]
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use brrtdoc::config::CopyrightConfig;
//! use brrtdoc::docs::{DocumentModelCache, ExampleUrlBuilder};
//! use brrtdoc::registry::Registry;
//! use brrtdoc::server::DocServer;
//! use std::sync::Arc;
//!
//! let registry = Registry::from_manifest_file("routes.yaml")?;
//! let config = CopyrightConfig::from_file("copyright.yaml")?;
//! let cache = DocumentModelCache::new(
//!     Arc::new(registry),
//!     Some(Arc::new(config)),
//!     ExampleUrlBuilder::for_domain("http://localhost:8080"),
//! );
//! let handle = DocServer::new(Arc::new(cache)).start("0.0.0.0:8080")?;
//! handle.join().ok();
//! ```
//!
//! ## Runtime Configuration
//!
//! - `BRRTDOC_STACK_SIZE` - coroutine stack size (default `0x4000`)
//! - `BRRTDOC_DOMAIN` - domain used in example URLs
//! - `BRRTDOC_LOG_LEVEL`, `BRRTDOC_LOG_FORMAT`, `BRRTDOC_LOG_TARGET_FILTER`,
//!   `BRRTDOC_LOG_ASYNC` - logging (see [`logging`])

pub mod cli;
pub mod config;
pub mod docs;
pub mod error;
pub mod extract;
pub mod ids;
pub mod logging;
pub mod model;
pub mod registry;
pub mod runtime_config;
pub mod server;

pub use config::{CopyrightConfig, ResponseCode};
pub use docs::{CacheState, DocumentModelCache, ExampleUrlBuilder, IgnoreMatcher};
pub use error::{BuildError, ExtractError};
pub use model::{DocumentedModel, Lookup, ModuleDoc, RouteDoc, VersionInfo};
pub use registry::{HandlerDescriptor, Registry, RouteMetadataProvider, RouteRegistry};
