//! Per-target endpoint collection
//!
//! One collector lives for the whole run of a target: the live fetch and
//! every snapshot fetch insert into it, so duplicates are suppressed across
//! all of them.

use std::collections::HashSet;

/// Insertion-ordered set of endpoints for one target
#[derive(Debug, Clone, Default)]
pub struct EndpointCollector {
    /// Membership index
    seen: HashSet<String>,
    /// Endpoints in discovery order
    ordered: Vec<String>,
}

impl EndpointCollector {
    /// Creates an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an endpoint unless an identical one was already collected
    ///
    /// # Returns
    ///
    /// * `true` - The endpoint is new and was recorded
    /// * `false` - The endpoint was a duplicate
    pub fn insert(&mut self, endpoint: String) -> bool {
        if self.seen.contains(&endpoint) {
            return false;
        }
        self.seen.insert(endpoint.clone());
        self.ordered.push(endpoint);
        true
    }

    /// Returns true if the endpoint was already collected
    pub fn contains(&self, endpoint: &str) -> bool {
        self.seen.contains(endpoint)
    }

    /// Number of collected endpoints
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Returns true if nothing was collected
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Iterates endpoints in discovery order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    /// Consumes the collector, returning endpoints in discovery order
    pub fn into_endpoints(self) -> Vec<String> {
        self.ordered
    }
}
