//! Error taxonomy for graph construction and route queries.

use ordered_float::OrderedFloat;
use thiserror::Error;

use crate::town::Town;

/// A malformed road supplied at construction time.
///
/// A single invalid entry aborts the whole build: the road list is
/// static data, so a bad entry is a programming error rather than a
/// runtime condition to mask.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidEdge {
    /// Both endpoints name the same town.
    #[error("self-loop on town \"{0}\"")]
    SelfLoop(Town),

    /// Road weights must be non-negative for the shortest-path search
    /// to be correct.
    #[error("negative weight {weight} on road \"{from}\" - \"{to}\"")]
    NegativeWeight {
        from: Town,
        to: Town,
        weight: OrderedFloat<f32>,
    },
}

/// Errors surfaced by the graph store and the route engine.
///
/// A no-route outcome is not in this taxonomy; it is reported as
/// [`RouteResult::NotFound`](crate::route::RouteResult::NotFound).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// A road failed validation while the graph was being built.
    #[error("invalid edge: {0}")]
    InvalidEdge(#[from] InvalidEdge),

    /// A query referenced a town absent from the graph. The payload
    /// names the offending endpoint.
    #[error("unknown town \"{0}\"")]
    UnknownVertex(Town),
}
