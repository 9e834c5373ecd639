//! Lazily built, lock-free readable documentation snapshot.
//!
//! Readers first `load` the current snapshot without locking. Only on a
//! miss does a reader take the build lock, re-check, and build. Concurrent
//! first readers therefore trigger a single build and all observe the same
//! `Arc<DocumentedModel>`.

use super::classify::is_documentable;
use super::example_url::ExampleUrlBuilder;
use super::group::ModuleAccumulator;
use super::ignore::IgnoreMatcher;
use super::join::{join_route, Extractors};
use crate::config::CopyrightConfig;
use crate::error::BuildError;
use crate::ids::RouteIdAllocator;
use crate::model::{DocumentedModel, Lookup, ModuleDoc, VersionInfo};
use crate::registry::{RouteMetadataProvider, RouteRegistry};
use arc_swap::ArcSwapOption;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Lifecycle of the cached model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// Config absent or `online`; nothing is ever built.
    Disabled,
    Empty,
    Building,
    Ready,
}

/// Resets the building flag on every exit path, including unwinding.
struct BuildingFlag<'a>(&'a AtomicBool);

impl<'a> BuildingFlag<'a> {
    fn raise(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for BuildingFlag<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

pub struct DocumentModelCache {
    registry: Arc<dyn RouteRegistry + Send + Sync>,
    config: Option<Arc<CopyrightConfig>>,
    extractors: Extractors,
    example_urls: ExampleUrlBuilder,
    ignore: IgnoreMatcher,
    snapshot: ArcSwapOption<DocumentedModel>,
    build_lock: Mutex<()>,
    building: AtomicBool,
    builds: AtomicUsize,
}

impl DocumentModelCache {
    /// `config: None` means documentation is not configured and stays disabled.
    pub fn new(
        registry: Arc<dyn RouteRegistry + Send + Sync>,
        config: Option<Arc<CopyrightConfig>>,
        example_urls: ExampleUrlBuilder,
    ) -> Self {
        let ignore = match &config {
            Some(cfg) => IgnoreMatcher::new(&cfg.ignore_url_set),
            None => IgnoreMatcher::default(),
        };
        Self {
            registry,
            config,
            extractors: Extractors::default(),
            example_urls,
            ignore,
            snapshot: ArcSwapOption::empty(),
            build_lock: Mutex::new(()),
            building: AtomicBool::new(false),
            builds: AtomicUsize::new(0),
        }
    }

    /// Replace the default declared-shape extractors.
    pub fn with_extractors(mut self, extractors: Extractors) -> Self {
        self.extractors = extractors;
        self
    }

    fn enabled_config(&self) -> Option<&CopyrightConfig> {
        self.config.as_deref().filter(|cfg| cfg.docs_enabled())
    }

    #[must_use]
    pub fn state(&self) -> CacheState {
        if self.enabled_config().is_none() {
            CacheState::Disabled
        } else if self.snapshot.load().is_some() {
            CacheState::Ready
        } else if self.building.load(Ordering::SeqCst) {
            CacheState::Building
        } else {
            CacheState::Empty
        }
    }

    /// Number of completed or attempted builds since construction.
    #[must_use]
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }

    /// The published model, building it on first use.
    ///
    /// `Ok(None)` when documentation is disabled. A failed build publishes
    /// nothing; the next call retries.
    pub fn model(&self) -> Result<Option<Arc<DocumentedModel>>, BuildError> {
        let Some(config) = self.enabled_config() else {
            return Ok(None);
        };
        if let Some(model) = self.snapshot.load_full() {
            return Ok(Some(model));
        }

        let _guard = self.build_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(model) = self.snapshot.load_full() {
            return Ok(Some(model));
        }

        let model = {
            let _flag = BuildingFlag::raise(&self.building);
            Arc::new(self.build(config)?)
        };
        self.snapshot.store(Some(Arc::clone(&model)));
        Ok(Some(model))
    }

    /// Drop the published model so the next read rebuilds from the registry.
    ///
    /// Waits for an in-flight build to finish first.
    pub fn invalidate(&self) {
        let _guard = self.build_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if self.snapshot.swap(None).is_some() {
            info!("Documentation model invalidated");
        }
    }

    /// Ordered module listing; empty when documentation is disabled.
    pub fn modules(&self) -> Result<Vec<ModuleDoc>, BuildError> {
        Ok(self
            .model()?
            .map(|model| model.modules.clone())
            .unwrap_or_default())
    }

    /// Copyright summary with group and api counts.
    pub fn version_info(&self) -> Result<Option<VersionInfo>, BuildError> {
        let Some(config) = self.enabled_config() else {
            return Ok(None);
        };
        Ok(self.model()?.map(|model| VersionInfo::new(config, &model)))
    }

    /// Canned example JSON for a route id.
    pub fn example(&self, id: &str) -> Result<Option<Lookup<String>>, BuildError> {
        Ok(self.model()?.map(|model| match model.route(id) {
            Some(route) => Lookup::Found(route.return_example_json.clone()),
            None => {
                warn!(route_id = %id, "Example requested for unknown route");
                Lookup::NotFound
            }
        }))
    }

    fn build(&self, config: &CopyrightConfig) -> Result<DocumentedModel, BuildError> {
        let started = Instant::now();
        self.builds.fetch_add(1, Ordering::SeqCst);
        info!("Building documentation model");

        let routes = self.registry.routes()?;
        let mut ids = RouteIdAllocator::new();
        let mut modules = ModuleAccumulator::new();
        let mut routes_by_id = HashMap::new();
        let mut skipped = 0usize;

        for route in &routes {
            let handler = route.handler.as_ref();
            if !is_documentable(handler) {
                debug!(
                    handler = handler.handler_name(),
                    "Route is not a documentable JSON endpoint"
                );
                continue;
            }
            let urls = route.url_list();
            let methods = route.method_names();
            if self.ignore.is_ignored(&urls, &methods) {
                debug!(
                    handler = handler.handler_name(),
                    urls = ?urls,
                    methods = ?methods,
                    "Route ignored by rule"
                );
                continue;
            }

            let id = ids.allocate(&methods, &urls);
            let doc = match join_route(route, id, config, &self.extractors, &self.example_urls) {
                Ok(doc) => Arc::new(doc),
                Err(e) => {
                    warn!(
                        handler = handler.handler_name(),
                        error = %e,
                        "Skipping route, extraction failed"
                    );
                    skipped += 1;
                    continue;
                }
            };
            routes_by_id.insert(doc.id.clone(), Arc::clone(&doc));
            modules.assign(handler, &doc);
        }

        let model = DocumentedModel {
            modules: modules.finish(),
            routes_by_id,
        };
        info!(
            registered = routes.len(),
            documented = model.routes_by_id.len(),
            modules = model.group_count(),
            skipped,
            duration_us = started.elapsed().as_micros(),
            "Documentation model built"
        );
        Ok(model)
    }
}

impl std::fmt::Debug for DocumentModelCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentModelCache")
            .field("state", &self.state())
            .field("builds", &self.build_count())
            .finish_non_exhaustive()
    }
}
