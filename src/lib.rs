//! Town Routing Library.
//! Holds a weighted road network between towns and answers
//! shortest-route queries against it.
//!
//! A [`TownGraph`] is built once from a list of road triples, then any
//! number of queries can be issued against it. A query yields a tagged
//! [`RouteResult`] value (`Found` or `NotFound`), or a [`GraphError`]
//! when a query names a town the graph has never seen.
//!
//! ```
//! use town_router::TownGraph;
//!
//! let graph = TownGraph::from_triples(&[("a", "b", 1.0), ("b", "c", 2.0)])?;
//! let route = graph.shortest_route(&"a".into(), &"c".into())?;
//! assert!(route.is_found());
//! # Ok::<(), town_router::GraphError>(())
//! ```

mod types {
    pub mod edge;
    pub mod error;
    pub mod graph;
    pub mod route;
    pub mod town;
}

mod algorithms {
    pub mod dijkstra;
}

pub mod utils {
    pub mod edges;
}

pub use types::{edge, error, graph, route, town};

pub use types::edge::Edge;
pub use types::error::{GraphError, InvalidEdge};
pub use types::graph::store::TownGraph;
pub use types::route::RouteResult;
pub use types::town::Town;

pub use algorithms::dijkstra::shortest_path;
