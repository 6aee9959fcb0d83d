use lazy_dijkstra::graph::generators::{generate_random_graph, reference_graph};
use lazy_dijkstra::{Dijkstra, DirectedGraph, FrontierKind, ShortestPathAlgorithm};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;

/// Command line options for the demo
#[derive(Debug)]
struct Options {
    source: usize,
    frontier: FrontierKind,
    vertices: Option<usize>,
    edge_factor: f64,
    seed: u64,
    json: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            source: 0,
            frontier: FrontierKind::BinaryHeap,
            vertices: None,
            edge_factor: 2.0,
            seed: 42,
            json: false,
        }
    }
}

fn parse_args() -> Result<Options, Box<dyn std::error::Error>> {
    let mut options = Options::default();
    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        let mut value = || args.next().ok_or_else(|| format!("missing value for {}", arg));
        match arg.as_str() {
            "--source" => options.source = value()?.parse()?,
            "--frontier" => options.frontier = value()?.parse()?,
            "--vertices" => options.vertices = Some(value()?.parse()?),
            "--edge-factor" => options.edge_factor = value()?.parse()?,
            "--seed" => options.seed = value()?.parse()?,
            "--json" => options.json = true,
            other => return Err(format!("unknown argument: {}", other).into()),
        }
    }

    Ok(options)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let options = parse_args()?;
    info!("options: {:?}", options);

    let graph: DirectedGraph<f64> = match options.vertices {
        Some(n) => {
            let mut rng = StdRng::seed_from_u64(options.seed);
            generate_random_graph(n, options.edge_factor, &mut rng)
        }
        None => reference_graph(),
    };

    let dijkstra = Dijkstra::new().with_frontier(options.frontier);
    let result = dijkstra.compute_shortest_paths(&graph, options.source)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Shortest paths from vertex {}:", options.source);
    for line in result.path_lines() {
        println!("{}", line);
    }

    Ok(())
}
