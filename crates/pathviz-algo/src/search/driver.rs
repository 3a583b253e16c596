// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! The shared traversal loop.
//!
//! All four algorithms are instances of one driver: pop from a frontier,
//! lazily discard stale duplicates, settle, emit a step, stop on the goal,
//! expand neighbors under an admission policy. What varies is injected:
//! the frontier discipline, the admission policy and the priority key.

use crate::search::frontier::{Frontier, QueueItem};
use crate::search::index::GraphIndex;
use crate::search::result::AlgorithmResult;
use crate::search::step::{StepResult, StepSink};
use pathviz_common::core::id::NodeId;
use pathviz_common::graph::model::Graph;
use std::time::Instant;

/// Which discovered neighbors are admitted to the frontier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpandPolicy {
    /// Admit any neighbor not yet settled. BFS and DFS.
    UnvisitedOnly,
    /// Admit a neighbor whenever a strictly cheaper route to it is found,
    /// tracking the best known cost per node. Dijkstra and A*. Superseded
    /// queue entries stay in the frontier; they surface later and die on
    /// the settled check.
    CostRelax,
}

/// Runs one search to completion.
///
/// `priority` maps (index, node slot, goal slot, accumulated cost) to the
/// ordering key stored on pushed items; FIFO and LIFO frontiers ignore it.
///
/// Step protocol: one non-terminal step per settled node, emitted after
/// the settle and before neighbor expansion, then exactly one terminal
/// step. Settling happens before the goal check, so the goal itself is
/// counted and stepped; with `start == goal` the run settles exactly one
/// node. A missing start or goal short-circuits to the empty result
/// without touching the sink.
pub fn run_with_frontier<F, P>(
    graph: &Graph,
    start: &str,
    goal: &str,
    mut frontier: F,
    policy: ExpandPolicy,
    priority: P,
    sink: &mut dyn StepSink,
) -> AlgorithmResult
where
    F: Frontier,
    P: Fn(&GraphIndex<'_>, u32, u32, f64) -> f64,
{
    let started = Instant::now();
    let index = GraphIndex::build(graph);

    let (Some(start_slot), Some(goal_slot)) = (index.slot(start), index.slot(goal)) else {
        let mut result = AlgorithmResult::empty();
        result.elapsed = started.elapsed();
        return result;
    };

    let n = index.node_count();
    let mut settled = vec![false; n];
    let mut settle_order: Vec<u32> = Vec::new();
    let mut best_cost = vec![f64::INFINITY; n];

    best_cost[start_slot as usize] = 0.0;
    frontier.push(QueueItem {
        node: start_slot,
        path: vec![start_slot],
        path_edges: Vec::new(),
        cost: 0.0,
        priority: priority(&index, start_slot, goal_slot, 0.0),
    });

    while let Some(item) = frontier.pop() {
        if settled[item.node as usize] {
            // Stale duplicate superseded by an earlier, cheaper settle
            continue;
        }
        settled[item.node as usize] = true;
        settle_order.push(item.node);

        let path = index.node_path(&item.path);
        let path_edges = index.edge_path(&item.path_edges);

        sink.emit(StepResult {
            current: Some(index.node_id(item.node).clone()),
            visited: index.node_path(&settle_order),
            path: path.clone(),
            path_edges: path_edges.clone(),
            frontier: frontier_snapshot(&index, &frontier),
            complete: false,
        });

        if item.node == goal_slot {
            sink.emit(StepResult {
                current: None,
                visited: index.node_path(&settle_order),
                path: path.clone(),
                path_edges: path_edges.clone(),
                frontier: frontier_snapshot(&index, &frontier),
                complete: true,
            });
            return AlgorithmResult {
                path_length: path.len(),
                path,
                path_edges,
                path_cost: item.cost,
                nodes_visited: settle_order.len(),
                elapsed: started.elapsed(),
            };
        }

        for entry in index.neighbors(item.node) {
            let admitted = match policy {
                ExpandPolicy::UnvisitedOnly => !settled[entry.node as usize],
                ExpandPolicy::CostRelax => {
                    let tentative = item.cost + entry.weight;
                    if tentative < best_cost[entry.node as usize] {
                        best_cost[entry.node as usize] = tentative;
                        true
                    } else {
                        false
                    }
                }
            };
            if !admitted {
                continue;
            }

            let cost = item.cost + entry.weight;
            let mut path = item.path.clone();
            path.push(entry.node);
            let mut path_edges = item.path_edges.clone();
            path_edges.push(entry.edge);
            frontier.push(QueueItem {
                node: entry.node,
                path,
                path_edges,
                cost,
                priority: priority(&index, entry.node, goal_slot, cost),
            });
        }
    }

    // Frontier exhausted: the goal is unreachable from start
    sink.emit(StepResult {
        current: None,
        visited: index.node_path(&settle_order),
        path: Vec::new(),
        path_edges: Vec::new(),
        frontier: Vec::new(),
        complete: true,
    });
    AlgorithmResult {
        path: Vec::new(),
        path_edges: Vec::new(),
        path_length: 0,
        path_cost: 0.0,
        nodes_visited: settle_order.len(),
        elapsed: started.elapsed(),
    }
}

/// Deduplicated frontier contents, materialized in node order.
fn frontier_snapshot<F: Frontier>(index: &GraphIndex<'_>, frontier: &F) -> Vec<NodeId> {
    let mut slots = frontier.queued_nodes();
    slots.sort_unstable();
    slots.dedup();
    index.node_path(&slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::frontier::FifoFrontier;
    use crate::search::step::StepLog;
    use crate::search::test_utils::{line_graph, weighted_demo_graph};

    fn bfs_run(graph: &Graph, start: &str, goal: &str, sink: &mut dyn StepSink) -> AlgorithmResult {
        run_with_frontier(
            graph,
            start,
            goal,
            FifoFrontier::new(),
            ExpandPolicy::UnvisitedOnly,
            |_, _, _, cost| cost,
            sink,
        )
    }

    #[test]
    fn test_missing_start_no_steps() {
        let g = line_graph(3);
        let mut log = StepLog::new();
        let result = bfs_run(&g, "ghost", "a2", &mut log);
        assert!(!result.is_found());
        assert_eq!(result.nodes_visited, 0);
        assert!(log.is_empty());
    }

    #[test]
    fn test_missing_goal_no_steps() {
        let g = line_graph(3);
        let mut log = StepLog::new();
        let result = bfs_run(&g, "a0", "ghost", &mut log);
        assert!(!result.is_found());
        assert!(log.is_empty());
    }

    #[test]
    fn test_start_equals_goal() {
        let g = line_graph(3);
        let mut log = StepLog::new();
        let result = bfs_run(&g, "a1", "a1", &mut log);
        assert_eq!(result.path, [NodeId::from("a1")]);
        assert!(result.path_edges.is_empty());
        assert_eq!(result.path_cost, 0.0);
        assert_eq!(result.path_length, 1);
        assert_eq!(result.nodes_visited, 1);
        // One settle step plus the terminal step
        assert_eq!(log.len(), 2);
        assert!(log.is_complete());
    }

    #[test]
    fn test_unreachable_goal_emits_terminal_step() {
        // a2 is downstream of a0 in a directed line; a0 is unreachable from a2
        let g = line_graph(3);
        let mut log = StepLog::new();
        let result = bfs_run(&g, "a2", "a0", &mut log);
        assert!(!result.is_found());
        assert_eq!(result.path_cost, 0.0);
        // Only a2 itself is reachable from a2
        assert_eq!(result.nodes_visited, 1);
        let last = log.last().unwrap();
        assert!(last.complete);
        assert!(last.current.is_none());
        assert!(last.path.is_empty());
        assert!(last.frontier.is_empty());
    }

    #[test]
    fn test_step_count_matches_visited() {
        let g = weighted_demo_graph();
        let mut log = StepLog::new();
        let result = bfs_run(&g, "n0", "n5", &mut log);

        let non_terminal = log.iter().filter(|s| !s.complete).count();
        let terminal = log.iter().filter(|s| s.complete).count();
        assert_eq!(non_terminal, result.nodes_visited);
        assert_eq!(terminal, 1);
        assert!(log.last().unwrap().complete);
    }

    #[test]
    fn test_steps_emitted_before_expansion() {
        let g = line_graph(3);
        let mut log = StepLog::new();
        bfs_run(&g, "a0", "a2", &mut log);

        // First step settles the start; its successor is not yet discovered
        let first = &log[0];
        assert_eq!(first.current.as_ref().map(|n| n.as_str()), Some("a0"));
        assert!(first.frontier.is_empty());
        assert_eq!(first.visited.len(), 1);
    }

    #[test]
    fn test_visited_grows_in_settle_order() {
        let g = line_graph(4);
        let mut log = StepLog::new();
        bfs_run(&g, "a0", "a3", &mut log);

        let mut prev = 0;
        for step in log.iter().filter(|s| !s.complete) {
            assert_eq!(step.visited.len(), prev + 1);
            prev = step.visited.len();
        }
    }
}
