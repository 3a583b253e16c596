// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Frontier disciplines for the shared search driver.
//!
//! The four search algorithms differ only in how the frontier orders its
//! items: FIFO (BFS), LIFO (DFS) or minimum-priority (Dijkstra, A*). The
//! driver is generic over [`Frontier`], so each algorithm is a one-line
//! choice of discipline.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

/// A queued traversal candidate.
///
/// Slots are dense per-run indices assigned by the graph index. The item
/// carries the full path that discovered it, so settling a node needs no
/// separate predecessor reconstruction pass.
#[derive(Clone, Debug)]
pub struct QueueItem {
    /// Node slot this item would settle.
    pub node: u32,
    /// Node slots from start to `node`, inclusive.
    pub path: Vec<u32>,
    /// Edge slots walked, one fewer than `path`.
    pub path_edges: Vec<u32>,
    /// Accumulated cost along `path`.
    pub cost: f64,
    /// Ordering key for priority frontiers; FIFO/LIFO ignore it.
    pub priority: f64,
}

/// Ordering discipline of the not-yet-settled candidates.
pub trait Frontier {
    fn push(&mut self, item: QueueItem);

    fn pop(&mut self) -> Option<QueueItem>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Node slots currently queued, for step snapshots. May contain
    /// duplicates; callers own deduplication.
    fn queued_nodes(&self) -> Vec<u32>;
}

/// First-in-first-out frontier: breadth-first order.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<QueueItem>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, item: QueueItem) {
        self.queue.push_back(item);
    }

    fn pop(&mut self) -> Option<QueueItem> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn queued_nodes(&self) -> Vec<u32> {
        self.queue.iter().map(|i| i.node).collect()
    }
}

/// Last-in-first-out frontier: depth-first order.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<QueueItem>,
}

impl LifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoFrontier {
    fn push(&mut self, item: QueueItem) {
        self.stack.push(item);
    }

    fn pop(&mut self) -> Option<QueueItem> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn queued_nodes(&self) -> Vec<u32> {
        self.stack.iter().map(|i| i.node).collect()
    }
}

/// Heap entry ordered by (priority bits, insertion sequence).
///
/// Priorities are compared through `f64::to_bits`, which orders correctly
/// for the non-negative finite keys search produces (cost sums of positive
/// weights, plus non-negative heuristic estimates). The sequence number
/// makes equal-priority pops come out in insertion order.
#[derive(Debug)]
struct HeapEntry {
    key_bits: u64,
    seq: u64,
    item: QueueItem,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key_bits == other.key_bits && self.seq == other.seq
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.key_bits, self.seq).cmp(&(other.key_bits, other.seq))
    }
}

/// Minimum-priority frontier with stable ties: equal keys pop in the order
/// they were pushed. Used by Dijkstra (key = cost) and A* (key = cost +
/// heuristic).
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Reverse<HeapEntry>>,
    next_seq: u64,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, item: QueueItem) {
        let entry = HeapEntry {
            key_bits: item.priority.to_bits(),
            seq: self.next_seq,
            item,
        };
        self.next_seq += 1;
        self.heap.push(Reverse(entry));
    }

    fn pop(&mut self) -> Option<QueueItem> {
        self.heap.pop().map(|Reverse(entry)| entry.item)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn queued_nodes(&self) -> Vec<u32> {
        self.heap.iter().map(|Reverse(entry)| entry.item.node).collect()
    }
}
