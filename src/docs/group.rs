use crate::model::{ModuleDoc, RouteDoc};
use crate::registry::RouteMetadataProvider;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Token stripped from controller names when deriving a default module.
pub const CONTROLLER_SUFFIX: &str = "Controller";

/// Default module name for a controller without explicit grouping.
///
/// Everything before the first `Controller` token, then the full name:
/// `UserController` becomes `User-UserController`.
pub fn default_group_name(simple_name: &str) -> String {
    let stripped = match simple_name.find(CONTROLLER_SUFFIX) {
        Some(pos) => &simple_name[..pos],
        None => simple_name,
    };
    format!("{stripped}-{simple_name}")
}

/// Collects routes into modules in first-seen order.
#[derive(Debug, Default)]
pub struct ModuleAccumulator {
    modules: Vec<ModuleDoc>,
    positions: HashMap<String, usize>,
}

impl ModuleAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `route` to module `group`.
    ///
    /// A new module takes `index` only when it is positive. An existing
    /// module lowers its index to any smaller non-zero `index`; zero never
    /// overrides.
    pub fn add(&mut self, index: i32, group: &str, route: &Arc<RouteDoc>) {
        let position = match self.positions.get(group) {
            Some(&pos) => {
                let module = &mut self.modules[pos];
                if index != 0 && module.index > index {
                    module.index = index;
                }
                pos
            }
            None => {
                let mut module = ModuleDoc::new(group);
                if index > 0 {
                    module.index = index;
                }
                self.modules.push(module);
                self.positions.insert(group.to_string(), self.modules.len() - 1);
                self.modules.len() - 1
            }
        };
        self.modules[position].routes.push(Arc::clone(route));
    }

    /// Place a route according to its handler's grouping metadata.
    ///
    /// Declared groups fan out: the route joins every non-blank name.
    pub fn assign<P>(&mut self, handler: &P, route: &Arc<RouteDoc>)
    where
        P: RouteMetadataProvider + ?Sized,
    {
        match handler.api_group() {
            None => {
                let name = default_group_name(handler.owner_name());
                debug!(route_id = %route.id, module = %name, "Route grouped by controller name");
                self.add(0, &name, route);
            }
            Some(group) => {
                for name in group.names.iter().filter(|n| !n.trim().is_empty()) {
                    debug!(
                        route_id = %route.id,
                        module = %name,
                        index = group.index,
                        "Route grouped"
                    );
                    self.add(group.index, name, route);
                }
            }
        }
    }

    /// Modules sorted by index, each module's routes sorted by index.
    ///
    /// Both sorts are stable, so equal indices keep discovery order.
    pub fn finish(mut self) -> Vec<ModuleDoc> {
        for module in &mut self.modules {
            module.routes.sort_by_key(|r| r.index);
        }
        self.modules.sort_by_key(|m| m.index);
        self.modules
    }
}
