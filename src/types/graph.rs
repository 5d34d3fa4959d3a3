//! The core graph store of the library.
//!
//! The store module holds the authoritative set of towns and roads
//! and answers adjacency lookups. Path finding lives in the
//! [`dijkstra`](crate::shortest_path) engine and consumes the store
//! by reference.

/// The graph store module.
pub mod store {
    use std::collections::HashMap;

    use log::{debug, info};
    use ordered_float::OrderedFloat;
    use petgraph::stable_graph::{EdgeReference, NodeIndex, StableUnGraph};
    use petgraph::visit::EdgeRef;

    use crate::{
        algorithms::dijkstra,
        edge::Edge,
        error::{GraphError, InvalidEdge},
        route::RouteResult,
        town::Town,
    };

    /// A TownGraph contains an undirected weighted graph of towns and
    /// also a hashmap that maps a town to its index in the graph. The
    /// original road list is retained in load order so callers can
    /// render it as a table.
    ///
    /// The store is meant to be built once and then queried; all query
    /// paths take `&self`, so a built graph can be shared across
    /// readers freely.
    #[derive(Debug)]
    pub struct TownGraph {
        graph: StableUnGraph<Town, OrderedFloat<f32>>,
        town_indices: HashMap<Town, NodeIndex>,
        edges: Vec<Edge>,
    }

    impl TownGraph {
        /// Creates an empty graph.
        pub fn new() -> TownGraph {
            TownGraph {
                graph: StableUnGraph::with_capacity(0, 0),
                town_indices: HashMap::new(),
                edges: Vec::new(),
            }
        }

        /// Builds a graph from an ordered list of `(from, to, weight)`
        /// road triples.
        ///
        /// Entries are applied in order, so a later duplicate of the
        /// same town pair overrides the earlier weight. The first
        /// malformed entry aborts the whole build.
        pub fn from_triples(triples: &[(&str, &str, f32)]) -> Result<TownGraph, GraphError> {
            info!("Building town graph from {} road entries", triples.len());
            let mut graph = TownGraph::new();
            for (from, to, weight) in triples {
                graph.add_edge(*from, *to, *weight)?;
            }
            info!(
                "Town graph ready: {} towns, {} roads",
                graph.town_count(),
                graph.edge_count()
            );
            Ok(graph)
        }

        /// Builds a graph from typed edges, applying them in order
        /// with the same override semantics as [`from_triples`].
        ///
        /// [`from_triples`]: TownGraph::from_triples
        pub fn from_edges(edges: impl IntoIterator<Item = Edge>) -> Result<TownGraph, GraphError> {
            let mut graph = TownGraph::new();
            for edge in edges {
                graph.add_edge(edge.from, edge.to, edge.weight.into_inner())?;
            }
            Ok(graph)
        }

        /// Inserts a road between two towns, adding either endpoint to
        /// the town set if absent.
        ///
        /// Re-inserting an existing pair, in either orientation,
        /// replaces its weight (last write wins). Fails with
        /// [`InvalidEdge`] on a self-loop or a negative weight, in
        /// which case the graph is left untouched.
        pub fn add_edge(
            &mut self,
            from: impl Into<Town>,
            to: impl Into<Town>,
            weight: f32,
        ) -> Result<(), GraphError> {
            let from = from.into();
            let to = to.into();
            if from == to {
                return Err(InvalidEdge::SelfLoop(from).into());
            }
            if weight < 0.0 {
                return Err(InvalidEdge::NegativeWeight {
                    from,
                    to,
                    weight: OrderedFloat(weight),
                }
                .into());
            }

            let from_index = self.index_of_or_insert(&from);
            let to_index = self.index_of_or_insert(&to);
            match self.graph.find_edge(from_index, to_index) {
                Some(edge_index) => {
                    debug!("Overriding road {} - {} with weight {}", from, to, weight);
                    self.graph[edge_index] = OrderedFloat(weight);
                }
                None => {
                    self.graph.add_edge(from_index, to_index, OrderedFloat(weight));
                }
            }

            match self.edges.iter_mut().find(|edge| edge.joins(&from, &to)) {
                Some(edge) => edge.weight = OrderedFloat(weight),
                None => self.edges.push(Edge {
                    from,
                    to,
                    weight: OrderedFloat(weight),
                }),
            }
            Ok(())
        }

        /// Returns the adjacent towns of `town` with the weight of the
        /// connecting road.
        ///
        /// The order is stable for a given build sequence. Fails with
        /// [`GraphError::UnknownVertex`] if the town is not present.
        pub fn neighbors(&self, town: &Town) -> Result<Vec<(Town, f32)>, GraphError> {
            let index = self
                .index_of(town)
                .ok_or_else(|| GraphError::UnknownVertex(town.clone()))?;
            Ok(self
                .graph
                .edges(index)
                .map(|edge| {
                    let other = if edge.source() == index {
                        edge.target()
                    } else {
                        edge.source()
                    };
                    (self.graph[other].clone(), edge.weight().into_inner())
                })
                .collect())
        }

        /// Membership test, used to validate query endpoints before a
        /// search runs.
        pub fn contains(&self, town: &Town) -> bool {
            self.town_indices.contains_key(town)
        }

        /// All towns in the graph, sorted by name for stable listings.
        pub fn towns(&self) -> Vec<Town> {
            let mut towns: Vec<Town> = self.town_indices.keys().cloned().collect();
            towns.sort();
            towns
        }

        /// The road list in load order, for tabular display.
        pub fn edges(&self) -> &[Edge] {
            &self.edges
        }

        /// Returns the number of towns in the graph.
        pub fn town_count(&self) -> usize {
            self.graph.node_count()
        }

        /// Returns the number of roads in the graph.
        pub fn edge_count(&self) -> usize {
            self.graph.edge_count()
        }

        /// Finds the minimum-total-weight route between two towns.
        ///
        /// Convenience wrapper around
        /// [`shortest_path`](crate::shortest_path).
        pub fn shortest_route(
            &self,
            from: &Town,
            to: &Town,
        ) -> Result<RouteResult, GraphError> {
            dijkstra::shortest_path(self, from, to)
        }

        /// Get the NodeIndex for a given town. The NodeIndex is used
        /// to reference things in the backing graph.
        pub(crate) fn index_of(&self, town: &Town) -> Option<NodeIndex> {
            self.town_indices.get(town).cloned()
        }

        /// The town stored at a backing-graph index.
        pub(crate) fn town_at(&self, index: NodeIndex) -> Town {
            self.graph[index].clone()
        }

        /// Incident edges of a backing-graph index.
        pub(crate) fn adjacency(
            &self,
            index: NodeIndex,
        ) -> impl Iterator<Item = EdgeReference<'_, OrderedFloat<f32>>> {
            self.graph.edges(index)
        }

        fn index_of_or_insert(&mut self, town: &Town) -> NodeIndex {
            *self
                .town_indices
                .entry(town.clone())
                .or_insert_with(|| self.graph.add_node(town.clone()))
        }
    }

    impl Default for TownGraph {
        fn default() -> TownGraph {
            TownGraph::new()
        }
    }
}
