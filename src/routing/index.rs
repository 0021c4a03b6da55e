//! Priority-ordered route storage.
//!
//! # Responsibilities
//! - Hold (name, route, priority) entries
//! - Keep entries sorted for match iteration
//! - Replace entries on name collision
//!
//! # Design Decisions
//! - Descending priority, ascending insertion order on ties
//! - Re-registering a name replaces the entry and its priority; the
//!   replacement counts as a fresh insertion for tie-breaking
//! - Plain sorted Vec: route counts are small and iteration dominates

use std::sync::Arc;

use crate::routing::route::Route;

#[derive(Debug, Clone)]
struct RouteEntry {
    name: String,
    route: Arc<dyn Route>,
    priority: i32,
    serial: u64,
}

/// Ordered collection the stack iterates during matching.
#[derive(Debug, Default)]
pub struct PriorityIndex {
    entries: Vec<RouteEntry>,
    next_serial: u64,
}

impl PriorityIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a route, replacing any entry with the same name, and
    /// restore the iteration order.
    pub fn insert(&mut self, name: impl Into<String>, route: Arc<dyn Route>, priority: i32) {
        let name = name.into();
        self.entries.retain(|e| e.name != name);
        let serial = self.next_serial;
        self.next_serial += 1;
        self.entries.push(RouteEntry {
            name,
            route,
            priority,
            serial,
        });
        self.resort();
    }

    /// Remove an entry by name. Removing an absent name is a no-op.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.name != name);
        self.entries.len() != before
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Route>> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.route)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in match-attempt order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn Route>)> {
        self.entries.iter().map(|e| (e.name.as_str(), &e.route))
    }

    fn resort(&mut self) {
        self.entries
            .sort_by(|a, b| b.priority.cmp(&a.priority).then(a.serial.cmp(&b.serial)));
    }
}
