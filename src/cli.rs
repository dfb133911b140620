use std::path::PathBuf;

use clap::{Parser, Subcommand};
use railnet_core::{Algorithm, DEFAULT_TOP_N, SpanningTreeAlgorithm, WeightDimension};

/// Railway network analytics: routes, spanning trees and hub rankings
#[derive(Parser, Debug)]
#[command(name = "railnet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// City table (CSV with id, longitude, latitude and optional category)
    #[arg(long, global = true, default_value = "data/cities.csv")]
    pub cities: PathBuf,

    /// Connection table (CSV with source, target, time, cost)
    #[arg(long, global = true, default_value = "data/connections.csv")]
    pub connections: PathBuf,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fastest and cheapest route between two cities
    Route {
        start: String,
        end: String,

        /// Intermediate stop, repeatable; routes through every stop in order
        #[arg(long = "via", action = clap::ArgAction::Append)]
        via: Vec<String>,

        /// bfs, dijkstra or astar; routes with --via always use dijkstra
        #[arg(long, short, default_value = "dijkstra")]
        algorithm: Algorithm,
    },

    /// Minimum spanning tree, step by step
    Mst {
        /// prim or kruskal
        #[arg(long, short, default_value = "prim")]
        algorithm: SpanningTreeAlgorithm,

        /// time or cost
        #[arg(long, short, default_value = "cost")]
        weight: WeightDimension,
    },

    /// Cities ranked by betweenness centrality
    Hubs {
        #[arg(long, short = 'n', default_value_t = DEFAULT_TOP_N)]
        top: usize,
    },

    /// Degree, closeness and clustering rankings
    Metrics {
        #[arg(long, short = 'n', default_value_t = DEFAULT_TOP_N)]
        top: usize,
    },

    /// Network summary
    Stats,

    /// City names in table order
    Cities,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_route_with_stops() {
        let cli = Cli::try_parse_from([
            "railnet", "--json", "route", "Beijing", "Shanghai", "--via", "Jinan", "--via",
            "Nanjing", "-a", "astar",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Route {
                start,
                via,
                algorithm,
                ..
            } => {
                assert_eq!(start, "Beijing");
                assert_eq!(via, vec!["Jinan", "Nanjing"]);
                assert_eq!(algorithm, Algorithm::AStar);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_algorithm_with_stops() {
        let parsed = Cli::try_parse_from([
            "railnet", "route", "Beijing", "Shanghai", "--via", "Jinan", "-a", "floyd",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn rejects_unknown_weight() {
        assert!(Cli::try_parse_from(["railnet", "mst", "--weight", "distance"]).is_err());
    }
}
