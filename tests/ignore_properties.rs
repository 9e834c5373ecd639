//! Property tests for ignore-rule matching.
//!
//! Rules are generated from a small alphabet of path segments so literal,
//! wildcard and method-paired rules (of both path kinds) collide with generated routes often.
//! Each route's exclusion is checked against a straightforward oracle.

use brrtdoc::IgnoreMatcher;
use proptest::prelude::*;

const METHODS: [&str; 4] = ["GET", "POST", "PUT", "DELETE"];

#[derive(Debug, Clone)]
enum Rule {
    Literal(String),
    /// `/{prefix}/*`
    Prefix(String),
    Paired(String, String),
    /// `/{prefix}/*|method`
    PairedPrefix(String, String),
}

impl Rule {
    fn render(&self) -> String {
        match self {
            Rule::Literal(path) => path.clone(),
            Rule::Prefix(seg) => format!("/{seg}/*"),
            // lower-case on purpose; pairing is case-insensitive
            Rule::Paired(path, method) => format!("{path}|{}", method.to_lowercase()),
            Rule::PairedPrefix(seg, method) => format!("/{seg}/*|{method}"),
        }
    }

    fn oracle(&self, urls: &[String], methods: &[String]) -> bool {
        match self {
            Rule::Literal(path) => urls.iter().any(|u| u == path),
            Rule::Prefix(seg) => under(seg, urls),
            Rule::Paired(path, method) => {
                methods.iter().any(|m| m == method) && urls.iter().any(|u| u == path)
            }
            Rule::PairedPrefix(seg, method) => {
                methods.iter().any(|m| m == method) && under(seg, urls)
            }
        }
    }
}

fn under(seg: &str, urls: &[String]) -> bool {
    let prefix = format!("/{seg}/");
    urls.iter().any(|u| u.starts_with(&prefix))
}

fn segment() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["users", "pets", "admin", "store"]).prop_map(str::to_string)
}

fn path() -> impl Strategy<Value = String> {
    (segment(), prop::option::of(segment())).prop_map(|(a, b)| match b {
        Some(b) => format!("/{a}/{b}"),
        None => format!("/{a}"),
    })
}

fn method() -> impl Strategy<Value = String> {
    prop::sample::select(METHODS.to_vec()).prop_map(str::to_string)
}

fn rule() -> impl Strategy<Value = Rule> {
    prop_oneof![
        path().prop_map(Rule::Literal),
        segment().prop_map(Rule::Prefix),
        (path(), method()).prop_map(|(p, m)| Rule::Paired(p, m)),
        (segment(), method()).prop_map(|(s, m)| Rule::PairedPrefix(s, m)),
    ]
}

proptest! {
    #[test]
    fn excluded_iff_some_rule_matches(
        rules in prop::collection::vec(rule(), 0..6),
        urls in prop::collection::vec(path(), 1..3),
        methods in prop::collection::vec(method(), 0..3),
    ) {
        let matcher = IgnoreMatcher::new(rules.iter().map(Rule::render));
        let expected = rules.iter().any(|r| r.oracle(&urls, &methods));
        prop_assert_eq!(matcher.is_ignored(&urls, &methods), expected);
    }

    #[test]
    fn paired_rule_needs_the_method(p in path(), m in method()) {
        let matcher = IgnoreMatcher::new([format!("{p}|{m}")]);
        prop_assert!(matcher.is_ignored(&[p.clone()], &[m.clone()]));
        prop_assert!(!matcher.is_ignored(&[p], &[]));
    }

    #[test]
    fn paired_wildcard_needs_prefix_and_method(
        seg in segment(),
        tail in segment(),
        m in method(),
        other in method(),
    ) {
        let matcher = IgnoreMatcher::new([format!("/{seg}/*|{m}")]);
        let url = format!("/{seg}/{tail}");
        prop_assert!(matcher.is_ignored(&[url.clone()], &[m.to_lowercase()]));
        prop_assert_eq!(matcher.is_ignored(&[url], &[other.clone()]), other == m);
        let bare = format!("/{seg}");
        prop_assert!(!matcher.is_ignored(&[bare], &[m]));
    }

    #[test]
    fn builtin_error_route_always_ignored(
        rules in prop::collection::vec(rule(), 0..4),
        methods in prop::collection::vec(method(), 0..3),
    ) {
        let matcher = IgnoreMatcher::new(rules.iter().map(Rule::render));
        prop_assert!(matcher.is_ignored(&["/error".to_string()], &methods));
    }
}
