use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// Prefix every documentation endpoint is mounted under.
pub const API_PREFIX: &str = "/api";
/// Example endpoint path, relative to [`API_PREFIX`].
pub const EXAMPLE_PATH: &str = "/example/{id}.json";

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{.*?\}").expect("placeholder regex is valid"));

fn add_prefix(segment: &str) -> String {
    if segment.is_empty() || segment.starts_with('/') {
        segment.to_string()
    } else {
        format!("/{segment}")
    }
}

/// Builds the absolute URL that serves a route's canned example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleUrlBuilder {
    template: String,
}

impl ExampleUrlBuilder {
    /// `domain` loses one trailing `/`; `path` must hold a single `{...}` placeholder.
    pub fn new(domain: &str, prefix: &str, path: &str) -> Self {
        let domain = domain.strip_suffix('/').unwrap_or(domain);
        Self {
            template: format!("{domain}{}{}", add_prefix(prefix), add_prefix(path)),
        }
    }

    /// Builder for the standard `/api/example/{id}.json` endpoint.
    pub fn for_domain(domain: &str) -> Self {
        Self::new(domain, API_PREFIX, EXAMPLE_PATH)
    }

    /// Only the first placeholder is substituted.
    #[must_use]
    pub fn build(&self, id: &str) -> String {
        PLACEHOLDER
            .replacen(&self.template, 1, NoExpand(id))
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_strips_one_trailing_slash() {
        let b = ExampleUrlBuilder::new("http://host/", "/api", "/example/{id}.json");
        assert_eq!(b.build("abc123"), "http://host/api/example/abc123.json");
    }

    #[test]
    fn test_for_domain_without_slash() {
        let b = ExampleUrlBuilder::for_domain("https://docs.example.com");
        assert_eq!(b.build("f00"), "https://docs.example.com/api/example/f00.json");
    }

    #[test]
    fn test_segments_without_leading_slash() {
        let b = ExampleUrlBuilder::new("http://h", "api", "example/{id}.json");
        assert_eq!(b.build("x"), "http://h/api/example/x.json");
    }

    #[test]
    fn test_only_first_placeholder_replaced() {
        let b = ExampleUrlBuilder::new("http://h", "", "/{a}/{b}");
        assert_eq!(b.build("id"), "http://h/id/{b}");
    }

    #[test]
    fn test_id_is_inserted_literally() {
        let b = ExampleUrlBuilder::for_domain("http://h");
        assert_eq!(b.build("$1"), "http://h/api/example/$1.json");
    }
}
