use std::fmt;

/// The documentation model could not be built.
///
/// Returned by a [`RouteRegistry`](crate::registry::RouteRegistry) that
/// cannot enumerate its routes. The build is abandoned and nothing is
/// published; the next reader retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Route enumeration failed
    Registry { reason: String },
}

impl BuildError {
    pub fn registry(reason: impl Into<String>) -> Self {
        BuildError::Registry {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::Registry { reason } => {
                write!(f, "route registry enumeration failed: {}", reason)
            }
        }
    }
}

impl std::error::Error for BuildError {}

/// Parameter or return-shape extraction failed for a single handler.
///
/// The affected route is left out of the model; the build continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// A declared field has no name
    UnnamedField { handler: String },
    /// Any other extractor-specific failure
    Other { handler: String, reason: String },
}

impl ExtractError {
    pub fn handler(&self) -> &str {
        match self {
            ExtractError::UnnamedField { handler } | ExtractError::Other { handler, .. } => handler,
        }
    }
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::UnnamedField { handler } => {
                write!(f, "handler '{}' declares a return field without a name", handler)
            }
            ExtractError::Other { handler, reason } => {
                write!(f, "extraction failed for handler '{}': {}", handler, reason)
            }
        }
    }
}

impl std::error::Error for ExtractError {}
