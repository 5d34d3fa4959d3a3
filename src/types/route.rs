//! The tagged outcome of a shortest-route query.

use serde::{Deserialize, Serialize};

use crate::town::Town;

/// Result of a single-pair shortest-route query.
///
/// `NotFound` is a normal outcome, not an error: it means no sequence
/// of roads connects the two towns. Callers must branch on both
/// variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RouteResult {
    /// A connecting route exists.
    Found {
        /// Ordered towns from source to target, both inclusive. A
        /// query for a town to itself yields that single town.
        towns: Vec<Town>,

        /// Sum of the road weights along `towns`, accumulated in
        /// traversal order.
        total_weight: f32,
    },

    /// The two towns lie in different components of the network.
    NotFound {
        /// The queried source town.
        from: Town,
        /// The queried target town.
        to: Town,
    },
}

impl RouteResult {
    /// True if a connecting route was found.
    pub fn is_found(&self) -> bool {
        matches!(self, RouteResult::Found { .. })
    }
}
