//! # CLI Module
//!
//! Command-line entry points of the `brrtdoc` binary.
//!
//! ## Commands
//!
//! ### `serve`
//!
//! Serve the documentation endpoints for a route manifest:
//!
//! ```bash
//! brrtdoc serve --manifest routes.yaml --config copyright.yaml --addr 0.0.0.0:8080
//! ```
//!
//! Without `--config` the server still starts, but every documentation
//! endpoint answers with an empty result.
//!
//! ### `dump`
//!
//! Build the model once and print the module listing:
//!
//! ```bash
//! brrtdoc dump --manifest routes.yaml --config copyright.yaml --pretty
//! ```
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use brrtdoc::cli::{run_cli, Cli};
//! use clap::Parser;
//!
//! run_cli(Cli::parse())?;
//! ```

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{dump_modules, load_cache, run_cli, Cli, Commands};
