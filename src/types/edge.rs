//! Definition of the `Edge` type.
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::town::Town;

/// An edge is a road between two towns.
/// The weight represents the cost of traversing it, e.g. miles.
///
/// The pair is unordered: an edge from `a` to `b` is the same road as
/// an edge from `b` to `a`. The `from`/`to` fields keep the
/// orientation the edge was loaded with so tabular output matches the
/// input data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// One end of the road.
    pub from: Town,

    /// The other end of the road.
    pub to: Town,

    /// The weight of the edge.
    pub weight: OrderedFloat<f32>,
}

impl Edge {
    /// True if this edge connects the given unordered pair of towns.
    pub fn joins(&self, a: &Town, b: &Town) -> bool {
        (&self.from == a && &self.to == b) || (&self.from == b && &self.to == a)
    }
}
