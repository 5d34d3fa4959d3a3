//! Prints the shortest route over the fixed town network.
//!
//! Plays the role of a display layer: builds the road network once,
//! asks the engine for the Chicago to Bayview route, and renders the
//! route, the total distance, and the road table.
//!
//! Run with `cargo run --example town_route`.

use town_router::utils::edges::edges_from_triples;
use town_router::{shortest_path, RouteResult, Town, TownGraph};

const ROADS: [(&str, &str, f32); 12] = [
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

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let edges = edges_from_triples(&ROADS)?;
    let graph = TownGraph::from_edges(edges)?;

    let from = Town::from("Chicago");
    let to = Town::from("Bayview");
    match shortest_path(&graph, &from, &to)? {
        RouteResult::Found {
            towns,
            total_weight,
        } => {
            let names: Vec<&str> = towns.iter().map(|town| town.name()).collect();
            println!("Shortest route: {}", names.join(" -> "));
            println!("Total distance: {total_weight} miles");
        }
        RouteResult::NotFound { from, to } => {
            println!("No route between {from} and {to}");
        }
    }

    println!();
    println!("{:<12} {:<12} {:>8}", "From", "To", "Miles");
    for edge in graph.edges() {
        println!(
            "{:<12} {:<12} {:>8}",
            edge.from.name(),
            edge.to.name(),
            edge.weight
        );
    }
    Ok(())
}
