use sha2::{Digest, Sha256};
use std::collections::HashSet;

/// Hex chars kept from the digest.
const ID_LEN: usize = 16;

/// Deterministic id for a route: a truncated SHA-256 over its methods and URLs.
///
/// Both inputs are expected in registry order; the same route always yields
/// the same id across builds.
#[must_use]
pub fn route_id(methods: &[String], urls: &[String]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(methods.join(",").as_bytes());
    hasher.update(b"|");
    hasher.update(urls.join(",").as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    digest.chars().take(ID_LEN).collect()
}

/// Hands out route ids that are unique within one model build.
///
/// Registrations with identical method/URL sets (for example routes that
/// differ only by header conditions) get `-2`, `-3`, ... in discovery order.
#[derive(Debug, Default)]
pub struct RouteIdAllocator {
    used: HashSet<String>,
}

impl RouteIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, methods: &[String], urls: &[String]) -> String {
        let base = route_id(methods, urls);
        if self.used.insert(base.clone()) {
            return base;
        }
        let mut n = 2usize;
        loop {
            let candidate = format!("{base}-{n}");
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}
