use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader};

use clap::{Arg, Command};
use tracing_subscriber::EnvFilter;

use roadsandlibs::graph::AdjListGraph;
use roadsandlibs::mst::prim_mst;
use roadsandlibs::query::{parse_queries, Query, SYNTHETIC_ROOT};

fn print_info(index: usize, query: &Query, graph: &AdjListGraph) -> roadsandlibs::Result<()> {
    println!(
        "Query {}: {} cities, {} roads, library cost {}, road cost {}",
        index,
        query.cities,
        query.roads.len(),
        query.library_cost,
        query.road_cost
    );
    println!("Number of nodes: {}", graph.n());
    println!("Total edges: {}", graph.total_edges());
    println!("Maximum degree: {}", graph.max_degree());

    // Degree distribution over the real cities (limit to 10 most common degrees)
    let mut degree_distribution = HashMap::new();
    for i in 1..graph.n() as u32 {
        *degree_distribution.entry(graph.degree(i)).or_insert(0) += 1;
    }
    let mut distribution: Vec<_> = degree_distribution.into_iter().collect();
    distribution.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    println!("Degree distribution (top 10):");
    for (degree, count) in distribution.iter().take(10) {
        println!("  {} cities with degree {}", count, degree);
    }

    let result = prim_mst(graph, SYNTHETIC_ROOT)?;
    let libraries = result
        .tree_edges
        .iter()
        .filter(|&&(source, _, _)| source == SYNTHETIC_ROOT)
        .count();
    println!(
        "Minimum cost: {} ({} libraries, {} roads)",
        result.total_weight,
        libraries,
        result.tree_edges.len() - libraries
    );

    println!("Adjacency lists:");
    print!("{}", graph);
    println!();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let matches = Command::new("graph_info")
        .about("Prints the augmented graph and its spanning tree for each query")
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .value_name("FILE")
                .help("Input file path. Reads stdin if not provided."),
        )
        .arg(
            Arg::new("query")
                .long("query")
                .short('q')
                .value_name("INDEX")
                .value_parser(clap::value_parser!(usize))
                .help("Only describe the query at this 0-based position"),
        )
        .get_matches();

    let queries = match matches.get_one::<String>("input") {
        Some(path) => parse_queries(BufReader::new(File::open(path)?))?,
        None => parse_queries(io::stdin().lock())?,
    };

    let selected = matches.get_one::<usize>("query").copied();
    if let Some(index) = selected {
        if index >= queries.len() {
            eprintln!("Query {} does not exist; input has {} queries", index, queries.len());
            std::process::exit(1);
        }
    }

    for (i, query) in queries.iter().enumerate() {
        if selected.is_some_and(|index| index != i) {
            continue;
        }
        let graph = query.build_graph()?;
        print_info(i, query, &graph)?;
    }

    Ok(())
}
