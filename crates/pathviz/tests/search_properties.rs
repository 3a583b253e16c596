// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Property-based cross-checks between the four algorithms on generated
//! geometric graphs.
//!
//! Every generated edge weighs at least the straight-line distance between
//! its endpoints (the distance scaled by a factor >= 1), which keeps the
//! Euclidean heuristic admissible and consistent. Under that premise A* must
//! agree with Dijkstra on cost and never settle nodes Dijkstra would not.

use std::collections::HashSet;

use proptest::{
    collection::vec,
    prelude::{Just, Strategy, prop_assert, prop_assert_eq},
    proptest,
    test_runner::Config as ProptestConfig,
};

use pathviz::{AlgorithmKind, DistanceMetric, Graph, GraphBuilder, Point, Search, StepLog};

const PROP_CASES: u32 = 128;

/// Nodes on distinct grid cells, directed edges with scaled-distance weights,
/// and a start/goal pick that may coincide or be mutually unreachable.
fn geometric_graph() -> impl Strategy<Value = (Graph, String, String)> {
    (2usize..=9)
        .prop_flat_map(|n| {
            let cells = Just((0..n).collect::<Vec<usize>>()).prop_shuffle();
            let edges = vec((0..n, 0..n, 1.0f64..2.5), 1..=n * 3);
            (cells, edges, 0..n, 0..n)
        })
        .prop_map(|(cells, edge_picks, start, goal)| {
            let positions: Vec<Point> = cells
                .iter()
                .map(|&c| Point::new((c % 4) as f64 * 150.0, (c / 4) as f64 * 150.0))
                .collect();

            let mut builder = GraphBuilder::new();
            for (i, &p) in positions.iter().enumerate() {
                builder = builder.node(format!("n{i}"), p);
            }
            let mut next_edge = 0;
            for (s, t, factor) in edge_picks {
                if s == t {
                    continue;
                }
                let base = DistanceMetric::Euclidean.between(positions[s], positions[t]);
                builder = builder.edge(
                    format!("e{next_edge}"),
                    format!("n{s}"),
                    format!("n{t}"),
                    base.max(1.0) * factor,
                );
                next_edge += 1;
            }
            (builder.build(), format!("n{start}"), format!("n{goal}"))
        })
}

fn run(g: &Graph, kind: AlgorithmKind, start: &str, goal: &str) -> pathviz::AlgorithmResult {
    Search::on(g).algorithm(kind).from(start).to(goal).run()
}

fn run_recorded(
    g: &Graph,
    kind: AlgorithmKind,
    start: &str,
    goal: &str,
) -> (pathviz::AlgorithmResult, StepLog) {
    Search::on(g)
        .algorithm(kind)
        .from(start)
        .to(goal)
        .run_recorded()
}

fn settled(log: &StepLog) -> HashSet<String> {
    log.iter()
        .filter_map(|s| s.current.as_ref())
        .map(|n| n.as_str().to_string())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: PROP_CASES,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_astar_matches_dijkstra_cost((g, start, goal) in geometric_graph()) {
        let dijkstra = run(&g, AlgorithmKind::Dijkstra, &start, &goal);
        let astar = run(&g, AlgorithmKind::AStar, &start, &goal);

        prop_assert_eq!(dijkstra.is_found(), astar.is_found());
        if dijkstra.is_found() {
            let allowed = 1e-6 * dijkstra.path_cost.abs().max(1.0);
            prop_assert!(
                (dijkstra.path_cost - astar.path_cost).abs() <= allowed,
                "dijkstra={} astar={}",
                dijkstra.path_cost,
                astar.path_cost
            );
        }
    }

    #[test]
    fn prop_astar_settles_no_more_than_dijkstra((g, start, goal) in geometric_graph()) {
        let (dijkstra, dijkstra_log) = run_recorded(&g, AlgorithmKind::Dijkstra, &start, &goal);
        let (astar, astar_log) = run_recorded(&g, AlgorithmKind::AStar, &start, &goal);

        prop_assert!(astar.nodes_visited <= dijkstra.nodes_visited);
        let astar_set = settled(&astar_log);
        let dijkstra_set = settled(&dijkstra_log);
        prop_assert!(
            astar_set.is_subset(&dijkstra_set),
            "astar settled {:?} outside dijkstra's {:?}",
            astar_set,
            dijkstra_set
        );
    }

    #[test]
    fn prop_bfs_is_hop_minimal((g, start, goal) in geometric_graph()) {
        let bfs = run(&g, AlgorithmKind::Bfs, &start, &goal);
        let dijkstra = run(&g, AlgorithmKind::Dijkstra, &start, &goal);
        let dfs = run(&g, AlgorithmKind::Dfs, &start, &goal);

        // Reachability never depends on the algorithm
        prop_assert_eq!(bfs.is_found(), dijkstra.is_found());
        prop_assert_eq!(bfs.is_found(), dfs.is_found());
        if bfs.is_found() {
            prop_assert!(bfs.path_length <= dijkstra.path_length);
            prop_assert!(bfs.path_length <= dfs.path_length);
        }
    }

    #[test]
    fn prop_result_fields_are_consistent((g, start, goal) in geometric_graph()) {
        for kind in [
            AlgorithmKind::Bfs,
            AlgorithmKind::Dfs,
            AlgorithmKind::Dijkstra,
            AlgorithmKind::AStar,
        ] {
            let result = run(&g, kind, &start, &goal);
            prop_assert_eq!(result.path_length, result.path.len());
            if !result.is_found() {
                prop_assert!(result.path_edges.is_empty());
                prop_assert_eq!(result.path_cost, 0.0);
                continue;
            }

            prop_assert_eq!(result.path.first().map(|n| n.as_str()), Some(start.as_str()));
            prop_assert_eq!(result.path.last().map(|n| n.as_str()), Some(goal.as_str()));
            prop_assert_eq!(result.path_edges.len() + 1, result.path.len());

            // Each reported edge really connects its two path nodes, and the
            // cost is the sum of the reported edge weights
            let mut walked = 0.0;
            for (i, edge_id) in result.path_edges.iter().enumerate() {
                let edge = g.edge(edge_id.as_str());
                prop_assert!(edge.is_some(), "unknown edge {edge_id}");
                let edge = edge.unwrap();
                prop_assert_eq!(edge.source.as_str(), result.path[i].as_str());
                prop_assert_eq!(edge.target.as_str(), result.path[i + 1].as_str());
                walked += edge.weight;
            }
            let allowed = 1e-6 * walked.abs().max(1.0);
            prop_assert!(
                (result.path_cost - walked).abs() <= allowed,
                "{kind}: reported {} vs walked {}",
                result.path_cost,
                walked
            );
        }
    }

    #[test]
    fn prop_runs_are_deterministic((g, start, goal) in geometric_graph()) {
        let (first, first_log) = run_recorded(&g, AlgorithmKind::Dijkstra, &start, &goal);
        let (second, second_log) = run_recorded(&g, AlgorithmKind::Dijkstra, &start, &goal);

        prop_assert_eq!(first.path, second.path);
        prop_assert_eq!(first.nodes_visited, second.nodes_visited);
        prop_assert_eq!(first_log, second_log);
    }
}
