//! Helper functions for assembling road edge lists.

use ordered_float::OrderedFloat;

use crate::edge::Edge;
use crate::error::{GraphError, InvalidEdge};
use crate::town::Town;

/// Converts `(from, to, weight)` road triples into typed edges.
///
/// Entries keep their input order and duplicates are not collapsed
/// here; the store applies last-write-wins when the edges are loaded.
/// The first self-loop or negative weight aborts the conversion.
pub fn edges_from_triples(triples: &[(&str, &str, f32)]) -> Result<Vec<Edge>, GraphError> {
    let mut edges = Vec::with_capacity(triples.len());
    for (from, to, weight) in triples {
        let from = Town::from(*from);
        let to = Town::from(*to);
        if from == to {
            return Err(InvalidEdge::SelfLoop(from).into());
        }
        if *weight < 0.0 {
            return Err(InvalidEdge::NegativeWeight {
                from,
                to,
                weight: OrderedFloat(*weight),
            }
            .into());
        }
        edges.push(Edge {
            from,
            to,
            weight: OrderedFloat(*weight),
        });
    }
    Ok(edges)
}
