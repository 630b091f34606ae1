//! Generic best-first search core with an observer hook.
//!
//! This module implements a variant of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
//! extended with a [SearchObserver] that is notified after every expansion and
//! for every reconstructed path node, and that can cooperatively cancel the
//! search. Frontier ties are broken by insertion sequence so that repeated
//! runs expand nodes in the same order regardless of node identity.

use fxhash::{FxBuildHasher, FxHashSet};
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Continue/cancel signal returned by [SearchObserver::expanded].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchFlow {
    Continue,
    Cancel,
}

/// Side-effect hook for presentation layers. The observer receives no search
/// state it could feed back into the algorithm; the only influence it has is
/// the coarse [SearchFlow] cancellation signal.
pub trait SearchObserver<N> {
    /// Called once after each node is popped and its successors relaxed,
    /// whether or not any relaxation happened.
    fn expanded(&mut self, _node: &N) -> SearchFlow {
        SearchFlow::Continue
    }

    /// Called during path reconstruction for each path node after the goal,
    /// in order from the goal-adjacent node back toward the start.
    fn path_node(&mut self, _node: &N) {}
}

/// No-op observer for searches that do not need progress reporting.
impl<N> SearchObserver<N> for () {}

/// Outcome of [astar_observed].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchStatus<N, C> {
    /// A goal node was reached. `path` runs from the goal back toward the
    /// start, excluding the start itself; `cost` is the goal's g-score.
    Found { path: Vec<N>, cost: C },
    /// The frontier emptied without reaching a goal.
    Exhausted,
    /// The observer cancelled the search.
    Cancelled,
}

struct FrontierEntry<K> {
    estimated_cost: K,
    sequence: usize,
    index: usize,
}

impl<K: PartialEq> Eq for FrontierEntry<K> {}

impl<K: PartialEq> PartialEq for FrontierEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.sequence == other.sequence
    }
}

impl<K: Ord> PartialOrd for FrontierEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for FrontierEntry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Orders by estimated cost first; equal estimates are won by the
        // entry inserted earliest. Node identity never enters the ordering.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// Walks parent indices from `goal_ix` back to the start (always index 0) and
/// yields the nodes in that order, excluding the start itself.
fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, goal_ix: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    itertools::unfold(goal_ix, |i| {
        if *i == 0 {
            return None;
        }
        parents.get_index(*i).map(|(node, value)| {
            *i = parent(value);
            node.clone()
        })
    })
    .collect()
}

/// Observed best-first search from `start` to any node satisfying `success`.
///
/// `successors` lists `(node, move_cost)` pairs, `heuristic` estimates the
/// remaining cost to a goal. Relaxation is strictly-better only; a node
/// already enqueued keeps its frontier entry (and thus its stale priority)
/// when its g-score improves, but the improved score is what its eventual
/// expansion uses. With an inadmissible heuristic the first goal expansion is
/// therefore not guaranteed cheapest; the search is still complete.
pub fn astar_observed<N, C, FN, IN, FH, FS, O>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
    observer: &mut O,
) -> SearchStatus<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
    O: SearchObserver<N>,
{
    let mut sequence: usize = 0;
    let mut frontier = BinaryHeap::new();
    frontier.push(FrontierEntry {
        estimated_cost: heuristic(start),
        sequence,
        index: 0,
    });
    // Maps each discovered node to (parent index, best known g-score); a
    // vacant entry stands for an infinite g-score. The start sits at index 0
    // with a sentinel parent.
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero()));
    // Mirrors the live frontier entries; the heap alone cannot answer
    // membership queries in sublinear time.
    let mut in_frontier: FxHashSet<usize> = FxHashSet::default();
    in_frontier.insert(0);

    while let Some(FrontierEntry { index, .. }) = frontier.pop() {
        in_frontier.remove(&index);
        let (cost, node_successors) = {
            let (node, &(_, g)) = parents.get_index(index).unwrap();
            if success(node) {
                let path = reverse_path(&parents, |&(p, _)| p, index);
                for node in path.iter().skip(1) {
                    observer.path_node(node);
                }
                return SearchStatus::Found { path, cost: g };
            }
            (g, successors(node))
        };
        for (successor, move_cost) in node_successors {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }
            // An enqueued node keeps its existing frontier entry; only nodes
            // absent from the frontier get a fresh sequence number and entry.
            if in_frontier.insert(n) {
                sequence += 1;
                frontier.push(FrontierEntry {
                    estimated_cost: new_cost + h,
                    sequence,
                    index: n,
                });
            }
        }
        let (node, _) = parents.get_index(index).unwrap();
        if observer.expanded(node) == SearchFlow::Cancel {
            return SearchStatus::Cancelled;
        }
    }
    SearchStatus::Exhausted
}
