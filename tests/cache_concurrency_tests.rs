//! First-build coordination under contention.
//!
//! N threads released together by a barrier all miss the empty cache at
//! once. Exactly one of them may enumerate the registry; every thread must
//! observe the same published model.

use brrtdoc::config::CopyrightConfig;
use brrtdoc::docs::{CacheState, DocumentModelCache, ExampleUrlBuilder};
use brrtdoc::error::BuildError;
use brrtdoc::registry::{
    ControllerDescriptor, HandlerDescriptor, RegisteredRoute, Registry, RouteRegistry,
};
use http::Method;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

/// Counts enumerations and makes each one slow enough to overlap.
struct CountingRegistry {
    inner: Registry,
    calls: AtomicUsize,
}

impl RouteRegistry for CountingRegistry {
    fn routes(&self) -> Result<Vec<RegisteredRoute>, BuildError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        thread::sleep(Duration::from_millis(20));
        self.inner.routes()
    }
}

fn counting_registry(n: usize) -> Arc<CountingRegistry> {
    let ctrl = Arc::new(ControllerDescriptor::new("ItemController"));
    let mut inner = Registry::new();
    for i in 0..n {
        inner.register(
            [format!("/items/{i}")],
            [Method::GET],
            Arc::new(HandlerDescriptor::new(format!("item_{i}"), Arc::clone(&ctrl))),
        );
    }
    Arc::new(CountingRegistry {
        inner,
        calls: AtomicUsize::new(0),
    })
}

fn cache_over(registry: &Arc<CountingRegistry>) -> Arc<DocumentModelCache> {
    Arc::new(DocumentModelCache::new(
        Arc::clone(registry) as Arc<dyn RouteRegistry + Send + Sync>,
        Some(Arc::new(CopyrightConfig::default())),
        ExampleUrlBuilder::for_domain("http://localhost"),
    ))
}

#[test]
fn test_concurrent_first_readers_trigger_one_build() {
    const READERS: usize = 16;
    let registry = counting_registry(50);
    let cache = cache_over(&registry);
    let barrier = Arc::new(Barrier::new(READERS));

    let handles: Vec<_> = (0..READERS)
        .map(|_| {
            let cache = Arc::clone(&cache);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                cache.model().unwrap().unwrap()
            })
        })
        .collect();
    let models: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(registry.calls.load(Ordering::SeqCst), 1);
    assert_eq!(cache.build_count(), 1);
    assert_eq!(cache.state(), CacheState::Ready);
    assert!(models.iter().all(|m| Arc::ptr_eq(m, &models[0])));
    assert_eq!(models[0].routes_by_id.len(), 50);
}

#[test]
fn test_mixed_endpoints_share_one_build() {
    const READERS: usize = 8;
    let registry = counting_registry(5);
    let cache = cache_over(&registry);
    let barrier = Arc::new(Barrier::new(READERS));

    let handles: Vec<_> = (0..READERS)
        .map(|i| {
            let cache = Arc::clone(&cache);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                match i % 3 {
                    0 => assert_eq!(cache.version_info().unwrap().unwrap().api_count, 5),
                    1 => assert!(cache.example("missing").unwrap().is_some()),
                    _ => assert_eq!(cache.model().unwrap().unwrap().group_count(), 1),
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(registry.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_invalidate_during_reads_rebuilds_once() {
    let registry = counting_registry(3);
    let cache = cache_over(&registry);
    let first = cache.model().unwrap().unwrap();
    cache.invalidate();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || cache.model().unwrap().unwrap())
        })
        .collect();
    let models: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(registry.calls.load(Ordering::SeqCst), 2);
    assert!(!Arc::ptr_eq(&first, &models[0]));
    assert!(models.iter().all(|m| Arc::ptr_eq(m, &models[0])));
    assert_eq!(*first, *models[0]);
}
