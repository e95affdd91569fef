//! Per-build-unit dependency registry

use crate::deps::ModDependency;
use parking_lot::Mutex;
use std::collections::HashMap;
use tracing::debug;

/// Declared dependencies keyed by build-unit path (e.g. `:fabric`).
///
/// Append-only per unit until reset. Shared by reference between the
/// components that declare dependencies and the ones that consume them;
/// appends from several threads are safe.
#[derive(Debug, Default)]
pub struct DependencyTracker {
    units: Mutex<HashMap<String, Vec<ModDependency>>>,
}

impl DependencyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a dependency to a unit's list
    pub fn record(&self, unit: &str, dependency: ModDependency) {
        debug!(
            "{}: {} {} >= {}",
            unit, dependency.kind, dependency.mod_id, dependency.version
        );
        self.units
            .lock()
            .entry(unit.to_string())
            .or_default()
            .push(dependency);
    }

    /// Snapshot of a unit's dependencies in declaration order
    pub fn fetch(&self, unit: &str) -> Vec<ModDependency> {
        self.units.lock().get(unit).cloned().unwrap_or_default()
    }

    /// Discard a unit's dependencies
    pub fn reset(&self, unit: &str) {
        self.units.lock().remove(unit);
    }

    /// Discard every unit's dependencies
    pub fn reset_all(&self) {
        self.units.lock().clear();
    }

    /// Units with at least one recorded dependency, sorted
    pub fn units(&self) -> Vec<String> {
        let mut units: Vec<String> = self.units.lock().keys().cloned().collect();
        units.sort();
        units
    }
}
