//! # Runtime Configuration Module
//!
//! Environment variable-based configuration for the documentation server.
//!
//! ## Environment Variables
//!
//! ### `BRRTDOC_STACK_SIZE`
//!
//! Stack size for the coroutines serving requests. Accepts decimal (`16384`)
//! or hexadecimal (`0x4000`). Default: `0x4000` (16 KB).
//!
//! ### `BRRTDOC_DOMAIN`
//!
//! Scheme and host used when building example URLs, e.g.
//! `https://api.example.com`. Must parse as an absolute URL; anything else
//! falls back to `http://127.0.0.1:8080`.
//!
//! ```rust
//! use brrtdoc::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! println!("Stack size: {} bytes", config.stack_size);
//! ```

use std::env;
use tracing::warn;

pub const DEFAULT_STACK_SIZE: usize = 0x4000;
pub const DEFAULT_DOMAIN: &str = "http://127.0.0.1:8080";

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Stack size for coroutines in bytes
    pub stack_size: usize,
    /// Domain prefixed to every example URL
    pub domain: String,
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let stack_size = env::var("BRRTDOC_STACK_SIZE")
            .map(|val| parse_stack_size(&val))
            .unwrap_or(DEFAULT_STACK_SIZE);
        let domain = env::var("BRRTDOC_DOMAIN")
            .map(|val| validate_domain(&val))
            .unwrap_or_else(|_| DEFAULT_DOMAIN.to_string());
        RuntimeConfig { stack_size, domain }
    }
}

fn parse_stack_size(val: &str) -> usize {
    if let Some(hex) = val.strip_prefix("0x") {
        usize::from_str_radix(hex, 16).unwrap_or(DEFAULT_STACK_SIZE)
    } else {
        val.parse().unwrap_or(DEFAULT_STACK_SIZE)
    }
}

/// Returns `val` if it is an absolute URL, otherwise the default domain.
pub fn validate_domain(val: &str) -> String {
    match url::Url::parse(val) {
        Ok(parsed) if parsed.has_host() => val.to_string(),
        _ => {
            warn!(domain = %val, fallback = DEFAULT_DOMAIN, "Invalid example domain");
            DEFAULT_DOMAIN.to_string()
        }
    }
}
