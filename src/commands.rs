use std::io::{self, Write};

use railnet_core::algo::tree_weight;
use railnet_core::prelude::*;
use railnet_core::{DualPathResult, ScoredNode, Segment};
use serde::Serialize;

use crate::cli::{Cli, Commands};

pub fn dispatch(cli: &Cli) -> Result<(), Error> {
    let graph = create_network(&NetworkConfig::new(&cli.cities, &cli.connections))?;
    let mut out = io::stdout().lock();

    match &cli.command {
        Commands::Route {
            start,
            end,
            via,
            algorithm,
        } => {
            let result = if via.is_empty() {
                plan_dual_path(&graph, start, end, *algorithm)?
            } else {
                plan_multi_stop_path(&graph, start, end, via)?
            };
            if cli.json {
                print_json(&mut out, &result)
            } else {
                print_route(&mut out, &result)
            }
        }
        Commands::Mst { algorithm, weight } => {
            let steps = build_spanning_tree(&graph, *algorithm, *weight);
            if cli.json {
                return print_json(&mut out, &serde_json::json!({ "steps": steps }));
            }
            for (i, step) in steps.iter().enumerate() {
                writeln!(
                    out,
                    "{:>3}. {} - {} ({})",
                    i + 1,
                    step.source,
                    step.target,
                    step.weight
                )?;
            }
            writeln!(out, "{algorithm} tree over {weight}: {}", tree_weight(&steps))?;
            Ok(())
        }
        Commands::Hubs { top } => {
            let hubs = top_betweenness(&graph, *top);
            if cli.json {
                print_json(&mut out, &hubs)
            } else {
                print_ranking(&mut out, "Betweenness", &hubs)
            }
        }
        Commands::Metrics { top } => {
            let metrics = top_advanced_metrics(&graph, *top);
            if cli.json {
                return print_json(&mut out, &metrics);
            }
            print_ranking(&mut out, "Degree", &metrics.degree)?;
            print_ranking(&mut out, "Closeness", &metrics.closeness)?;
            print_ranking(&mut out, "Clustering", &metrics.clustering)?;
            writeln!(out, "Average clustering: {:.4}", metrics.avg_clustering)?;
            Ok(())
        }
        Commands::Stats => {
            let stats = network_stats(&graph);
            if cli.json {
                return print_json(&mut out, &stats);
            }
            writeln!(out, "Cities:       {}", stats.node_count)?;
            writeln!(out, "Connections:  {}", stats.edge_count)?;
            writeln!(out, "Mean degree:  {:.2}", stats.avg_degree)?;
            if let Some(city) = &stats.max_degree_city {
                writeln!(out, "Busiest city: {city} ({} lines)", stats.max_degree)?;
            }
            writeln!(
                out,
                "Connected:    {} ({} components)",
                stats.is_connected, stats.component_count
            )?;
            Ok(())
        }
        Commands::Cities => {
            let names: Vec<&str> = graph.cities().map(|city| city.id.as_str()).collect();
            if cli.json {
                return print_json(&mut out, &names);
            }
            for name in names {
                writeln!(out, "{name}")?;
            }
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<(), Error> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn print_route(out: &mut impl Write, result: &DualPathResult) -> Result<(), Error> {
    writeln!(out, "{} -> {} ({})", result.start, result.end, result.algorithm)?;
    if !result.waypoints.is_empty() {
        writeln!(out, "via {}", result.waypoints.join(", "))?;
    }

    match (&result.time_path, result.total_time, result.time_path_cost) {
        (Some(path), Some(time), Some(cost)) => {
            writeln!(out, "\nFastest: {time} h, {cost} yuan")?;
            writeln!(out, "  {}", path.join(" -> "))?;
            print_segments(out, &result.time_details)?;
        }
        _ => writeln!(out, "\nFastest: no route")?,
    }

    match (&result.cost_path, result.total_cost, result.cost_path_time) {
        (Some(path), Some(cost), Some(time)) => {
            writeln!(out, "\nCheapest: {cost} yuan, {time} h")?;
            writeln!(out, "  {}", path.join(" -> "))?;
            print_segments(out, &result.cost_details)?;
        }
        _ => writeln!(out, "\nCheapest: no route")?,
    }

    if let (Some(time), Some(cost)) = (result.time_saved(), result.cost_saved()) {
        writeln!(out, "\nFastest saves {time:.2} h, cheapest saves {cost:.2} yuan")?;
    }
    Ok(())
}

fn print_segments(out: &mut impl Write, segments: &[Segment]) -> Result<(), Error> {
    for segment in segments {
        writeln!(
            out,
            "    {} - {}: {} h, {} yuan",
            segment.source, segment.target, segment.time, segment.cost
        )?;
    }
    Ok(())
}

fn print_ranking(out: &mut impl Write, title: &str, ranking: &[ScoredNode]) -> Result<(), Error> {
    writeln!(out, "{title}:")?;
    for (i, node) in ranking.iter().enumerate() {
        writeln!(out, "{:>3}. {:<16} {:.4}", i + 1, node.name, node.score)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use railnet_core::{CityRecord, ConnectionRecord};

    fn rendered(result: &DualPathResult) -> String {
        let mut buffer = Vec::new();
        print_route(&mut buffer, result).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn route_text_lists_both_objectives() {
        let cities = [
            CityRecord::new("A", 0.0, 0.0),
            CityRecord::new("B", 1.0, 0.0),
            CityRecord::new("C", 2.0, 0.0),
        ];
        let connections = [
            ConnectionRecord::new("A", "B", 1.0, 10.0),
            ConnectionRecord::new("B", "C", 1.0, 10.0),
            ConnectionRecord::new("A", "C", 5.0, 3.0),
        ];
        let graph = build_network(&cities, &connections).unwrap();
        let result = plan_dual_path(&graph, "A", "C", Algorithm::Dijkstra).unwrap();

        let text = rendered(&result);
        assert!(text.contains("Fastest: 2 h, 20 yuan"));
        assert!(text.contains("A -> B -> C"));
        assert!(text.contains("Cheapest: 3 yuan, 5 h"));
        assert!(text.contains("Fastest saves 3.00 h, cheapest saves 17.00 yuan"));
    }

    #[test]
    fn ranking_rows_are_numbered() {
        let mut buffer = Vec::new();
        let ranking = [ScoredNode {
            name: "Wuhan".into(),
            score: 0.25,
        }];
        print_ranking(&mut buffer, "Degree", &ranking).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("Degree:\n"));
        assert!(text.contains("1. Wuhan"));
        assert!(text.contains("0.2500"));
    }
}
