//! Single-pair shortest-path search over a [`TownGraph`].
//!
//! The search is a hand-rolled Dijkstra so the contract stays
//! explicit: the frontier is a min-heap ordered by tentative distance
//! with push order as tie-break, every town is settled at most once,
//! and the loop exits as soon as the target is settled. Exhausting the
//! frontier without reaching the target is reported as a
//! [`RouteResult::NotFound`] value, never as an error.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use log::{debug, info};
use ordered_float::OrderedFloat;
use petgraph::stable_graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::{error::GraphError, graph::store::TownGraph, route::RouteResult, town::Town};

/// A frontier entry: tentative distance first, then a monotonically
/// increasing push sequence so equal distances pop in insertion order.
type FrontierEntry = Reverse<(OrderedFloat<f32>, u64, NodeIndex)>;

/// Finds a minimum-total-weight route between two towns.
///
/// # Arguments
/// * `graph` - The graph to search.
/// * `from` - The town to start from.
/// * `to` - The town to end at.
///
/// # Returns
/// [`RouteResult::Found`] with the ordered towns and the total weight,
/// or [`RouteResult::NotFound`] when the towns are disconnected. A
/// query for a town to itself yields a single-town route of weight
/// zero without any traversal.
///
/// Fails with [`GraphError::UnknownVertex`] when either endpoint is
/// not in the graph; the error names the offending town.
pub fn shortest_path(
    graph: &TownGraph,
    from: &Town,
    to: &Town,
) -> Result<RouteResult, GraphError> {
    let source = graph
        .index_of(from)
        .ok_or_else(|| GraphError::UnknownVertex(from.clone()))?;
    let target = graph
        .index_of(to)
        .ok_or_else(|| GraphError::UnknownVertex(to.clone()))?;

    info!("Routing from \"{}\" to \"{}\"", from, to);

    if source == target {
        return Ok(RouteResult::Found {
            towns: vec![from.clone()],
            total_weight: 0.0,
        });
    }

    let mut distances: HashMap<NodeIndex, OrderedFloat<f32>> = HashMap::new();
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut settled: HashSet<NodeIndex> = HashSet::new();
    let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
    let mut sequence: u64 = 0;

    distances.insert(source, OrderedFloat(0.0));
    frontier.push(Reverse((OrderedFloat(0.0), sequence, source)));

    while let Some(Reverse((distance, _, current))) = frontier.pop() {
        if !settled.insert(current) {
            // Stale entry, a shorter route already settled this town.
            continue;
        }
        if current == target {
            let towns = reconstruct(graph, &predecessors, target);
            debug!(
                "Route found: {} towns, total weight {}",
                towns.len(),
                distance
            );
            return Ok(RouteResult::Found {
                towns,
                total_weight: distance.into_inner(),
            });
        }

        for edge in graph.adjacency(current) {
            let neighbor = if edge.source() == current {
                edge.target()
            } else {
                edge.source()
            };
            if settled.contains(&neighbor) {
                continue;
            }
            let tentative = distance + *edge.weight();
            let improves = match distances.get(&neighbor) {
                Some(best) => tentative < *best,
                None => true,
            };
            if improves {
                distances.insert(neighbor, tentative);
                predecessors.insert(neighbor, current);
                sequence += 1;
                frontier.push(Reverse((tentative, sequence, neighbor)));
            }
        }
    }

    debug!("No route between \"{}\" and \"{}\"", from, to);
    Ok(RouteResult::NotFound {
        from: from.clone(),
        to: to.clone(),
    })
}

/// Walks the predecessor chain back from the target and reverses it.
/// The source is the only visited town without a predecessor.
fn reconstruct(
    graph: &TownGraph,
    predecessors: &HashMap<NodeIndex, NodeIndex>,
    target: NodeIndex,
) -> Vec<Town> {
    let mut indices = vec![target];
    let mut current = target;
    while let Some(&previous) = predecessors.get(&current) {
        indices.push(previous);
        current = previous;
    }
    indices.reverse();
    indices.into_iter().map(|index| graph.town_at(index)).collect()
}

#[cfg(test)]
mod dijkstra_tests {
    use std::collections::HashMap;

    use ordered_float::OrderedFloat;
    use petgraph::algo::dijkstra as petgraph_dijkstra;
    use petgraph::graph::UnGraph;
    use rand::Rng;

    use super::shortest_path;
    use crate::error::GraphError;
    use crate::graph::store::TownGraph;
    use crate::route::RouteResult;
    use crate::town::Town;

    /// The fixed town network the library was written around.
    const TOWN_ROADS: [(&str, &str, f32); 12] = [
        ("Chicago", "Mclain", 40.0),
        ("Chicago", "Aurora", 60.0),
        ("Chicago", "Paker", 50.0),
        ("Mclain", "Aurora", 10.0),
        ("Mclain", "Smallville", 70.0),
        ("Aurora", "Paker", 20.0),
        ("Aurora", "Smallville", 55.0),
        ("Aurora", "Farmer", 40.0),
        ("Paker", "Farmer", 50.0),
        ("Smallville", "Farmer", 10.0),
        ("Smallville", "Bayview", 60.0),
        ("Farmer", "Bayview", 80.0),
    ];

    #[test]
    fn test_same_source_and_target() {
        let graph = TownGraph::from_triples(&TOWN_ROADS).unwrap();
        let chicago = Town::from("Chicago");

        assert_eq!(
            shortest_path(&graph, &chicago, &chicago).unwrap(),
            RouteResult::Found {
                towns: vec![chicago],
                total_weight: 0.0,
            }
        );
    }

    #[test]
    fn test_unknown_source_names_the_town() {
        let graph = TownGraph::from_triples(&TOWN_ROADS).unwrap();
        let err = shortest_path(&graph, &Town::from("Nowhere"), &Town::from("Bayview"))
            .unwrap_err();

        assert_eq!(err, GraphError::UnknownVertex(Town::from("Nowhere")));
    }

    #[test]
    fn test_unknown_target_names_the_town() {
        let graph = TownGraph::from_triples(&TOWN_ROADS).unwrap();
        let err = shortest_path(&graph, &Town::from("Chicago"), &Town::from("Atlantis"))
            .unwrap_err();

        assert_eq!(err, GraphError::UnknownVertex(Town::from("Atlantis")));
    }

    /// Chicago to Bayview over the fixed network. The minimum is 160
    /// and the minimizing route is unique, so the exact sequence can
    /// be asserted.
    #[test]
    fn test_town_network_route() {
        let graph = TownGraph::from_triples(&TOWN_ROADS).unwrap();

        match shortest_path(&graph, &Town::from("Chicago"), &Town::from("Bayview")).unwrap() {
            RouteResult::Found {
                towns,
                total_weight,
            } => {
                let names: Vec<&str> = towns.iter().map(|town| town.name()).collect();
                assert_eq!(
                    names,
                    ["Chicago", "Mclain", "Aurora", "Farmer", "Smallville", "Bayview"]
                );
                assert_eq!(total_weight, 160.0);
            }
            RouteResult::NotFound { .. } => panic!("expected a route"),
        }
    }

    /// The reported total must equal the re-summed weights of the
    /// consecutive roads along the returned route.
    #[test]
    fn test_total_weight_matches_edge_sum() {
        let graph = TownGraph::from_triples(&TOWN_ROADS).unwrap();

        let (towns, total_weight) =
            match shortest_path(&graph, &Town::from("Paker"), &Town::from("Bayview")).unwrap() {
                RouteResult::Found {
                    towns,
                    total_weight,
                } => (towns, total_weight),
                RouteResult::NotFound { .. } => panic!("expected a route"),
            };

        let mut sum = 0.0_f32;
        for pair in towns.windows(2) {
            let weight = graph
                .neighbors(&pair[0])
                .unwrap()
                .into_iter()
                .find(|(town, _)| town == &pair[1])
                .map(|(_, weight)| weight)
                .expect("consecutive route towns must be adjacent");
            sum += weight;
        }
        assert_eq!(sum, total_weight);
    }

    #[test]
    fn test_disconnected_towns_then_bridged() {
        let mut graph =
            TownGraph::from_triples(&[("a", "b", 1.0), ("c", "d", 1.0)]).unwrap();
        let a = Town::from("a");
        let d = Town::from("d");

        assert_eq!(
            shortest_path(&graph, &a, &d).unwrap(),
            RouteResult::NotFound {
                from: a.clone(),
                to: d.clone(),
            }
        );

        graph.add_edge("b", "c", 2.0).unwrap();
        match shortest_path(&graph, &a, &d).unwrap() {
            RouteResult::Found {
                towns,
                total_weight,
            } => {
                let names: Vec<&str> = towns.iter().map(|town| town.name()).collect();
                assert_eq!(names, ["a", "b", "c", "d"]);
                assert_eq!(total_weight, 4.0);
            }
            RouteResult::NotFound { .. } => panic!("expected a route after bridging"),
        }
    }

    /// Cross-checks route totals against petgraph's own dijkstra on
    /// random graphs. Weights are rounded to whole numbers so equal
    /// path sums compare exactly.
    #[test]
    fn test_matches_petgraph_dijkstra_on_random_graphs() {
        let mut rng = rand::thread_rng();

        for _ in 0..25 {
            let mut graph = TownGraph::new();
            let town_count: u32 = rng.gen_range(2..12);
            for _ in 0..rng.gen_range(1..30) {
                let from = rng.gen_range(0..town_count);
                let to = rng.gen_range(0..town_count);
                if from == to {
                    continue;
                }
                let weight = rng.gen_range(0.0..100.0_f32).round();
                graph
                    .add_edge(format!("t{from}"), format!("t{to}"), weight)
                    .unwrap();
            }

            let source = Town::from("t0");
            if !graph.contains(&source) {
                continue;
            }

            // Independent oracle rebuilt from the public road list.
            let mut oracle = UnGraph::<Town, OrderedFloat<f32>>::new_undirected();
            let mut indices = HashMap::new();
            for edge in graph.edges() {
                let from_index = *indices
                    .entry(edge.from.clone())
                    .or_insert_with(|| oracle.add_node(edge.from.clone()));
                let to_index = *indices
                    .entry(edge.to.clone())
                    .or_insert_with(|| oracle.add_node(edge.to.clone()));
                oracle.add_edge(from_index, to_index, edge.weight);
            }
            let costs = petgraph_dijkstra(&oracle, indices[&source], None, |e| *e.weight());

            for number in 0..town_count {
                let target = Town::from(format!("t{number}"));
                if !graph.contains(&target) {
                    continue;
                }
                match shortest_path(&graph, &source, &target).unwrap() {
                    RouteResult::Found { total_weight, .. } => {
                        assert_eq!(
                            OrderedFloat(total_weight),
                            costs[&indices[&target]],
                            "route total diverged from the oracle"
                        );
                    }
                    RouteResult::NotFound { .. } => {
                        assert!(!costs.contains_key(&indices[&target]));
                    }
                }
            }
        }
    }
}
