//! # Documentation Server
//!
//! Serves the documentation model over [`may_minihttp`]:
//!
//! - `GET /api/version` - copyright summary with group and api counts
//! - `GET /api/info` - ordered module listing
//! - `GET /api/example/{id}.json` - canned example payload for one route
//! - `GET /health` - liveness
//!
//! [`DocEndpoints`] holds the routing and status mapping; [`DocService`]
//! adapts it to may_minihttp and [`DocServer`] binds it to a socket.

mod endpoints;
pub mod http_server;
pub mod response;
pub mod service;

pub use endpoints::DocEndpoints;
pub use http_server::{DocServer, ServerHandle};
pub use response::DocReply;
pub use service::DocService;
