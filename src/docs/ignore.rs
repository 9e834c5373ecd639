//! Ignore rules: which routes stay out of the documentation.
//!
//! A rule is one of
//!
//! - a literal path, `/users/{id}`, matched by string equality;
//! - a wildcard path, `/internal/*`, where `*` matches any substring and
//!   everything else matches literally over the whole URL, so template
//!   segments such as `/users/{id}/*` work as written;
//! - either of the above paired with a method, `/users|delete`, which also
//!   requires the route to expose that method (case-insensitive).
//!
//! Rules are compiled once. A wildcard rule whose compiled form exceeds
//! [`RULE_SIZE_LIMIT`] never matches.

use regex::{Regex, RegexBuilder};
use tracing::warn;

/// Always ignored regardless of configuration.
pub const BUILTIN_IGNORED: &str = "/error";

const METHOD_SEPARATOR: char = '|';
const WILDCARD: char = '*';

/// Upper bound on the compiled size of one wildcard rule.
pub const RULE_SIZE_LIMIT: usize = 1 << 16;

#[derive(Debug)]
enum Pattern {
    Literal(String),
    /// `None` when the rule failed to compile.
    Wildcard(Option<Regex>),
}

impl Pattern {
    fn matches(&self, url: &str) -> bool {
        match self {
            Pattern::Literal(path) => path == url,
            Pattern::Wildcard(Some(re)) => re.is_match(url),
            Pattern::Wildcard(None) => false,
        }
    }
}

#[derive(Debug)]
struct IgnoreRule {
    pattern: Pattern,
    /// Upper-cased method, when the rule is method-paired.
    method: Option<String>,
}

impl IgnoreRule {
    fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let normalized = if raw.starts_with('/') {
            raw.to_string()
        } else {
            format!("/{raw}")
        };

        let (path, method) = match normalized.split_once(METHOD_SEPARATOR) {
            Some((path, method))
                if !method.trim().is_empty() && !method.contains(METHOD_SEPARATOR) =>
            {
                (path.to_string(), Some(method.trim().to_uppercase()))
            }
            _ => (normalized.clone(), None),
        };

        let pattern = if path.contains(WILDCARD) {
            Pattern::Wildcard(compile_wildcard(raw, &path))
        } else {
            Pattern::Literal(path)
        };

        Self { pattern, method }
    }

    fn matches(&self, urls: &[String], methods: &[String]) -> bool {
        if let Some(method) = &self.method {
            if !methods.iter().any(|m| m.eq_ignore_ascii_case(method)) {
                return false;
            }
        }
        urls.iter().any(|url| self.pattern.matches(url))
    }
}

fn compile_wildcard(raw: &str, path: &str) -> Option<Regex> {
    let body: Vec<String> = path.split(WILDCARD).map(regex::escape).collect();
    let source = format!("^{}$", body.join(".*"));
    match RegexBuilder::new(&source).size_limit(RULE_SIZE_LIMIT).build() {
        Ok(re) => Some(re),
        Err(e) => {
            warn!(rule = %raw, error = %e, "Ignore rule cannot be compiled, it will never match");
            None
        }
    }
}

/// Compiled set of ignore rules, including [`BUILTIN_IGNORED`].
#[derive(Debug)]
pub struct IgnoreMatcher {
    rules: Vec<IgnoreRule>,
}

impl IgnoreMatcher {
    pub fn new<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled: Vec<IgnoreRule> = rules
            .into_iter()
            .filter(|r| !r.as_ref().trim().is_empty())
            .map(|r| IgnoreRule::parse(r.as_ref()))
            .collect();
        compiled.push(IgnoreRule::parse(BUILTIN_IGNORED));
        Self { rules: compiled }
    }

    /// True if any rule excludes a route with these patterns and methods.
    #[must_use]
    pub fn is_ignored(&self, urls: &[String], methods: &[String]) -> bool {
        self.rules.iter().any(|rule| rule.matches(urls, methods))
    }
}

impl Default for IgnoreMatcher {
    fn default() -> Self {
        Self::new(std::iter::empty::<&str>())
    }
}
