//! Trunk route discovery
//!
//! Call setup only needs to know whether *some* chain of trunk links joins
//! two switchboards; no shortest-path or load guarantee is made. The search
//! is an iterative depth-first traversal with an explicit worklist, so large
//! trunk graphs cannot exhaust the call stack, and every unvisited neighbor
//! of a node is tried before the search gives up.

use std::collections::HashSet;

use tracing::trace;

use crate::network::Network;
use crate::types::AreaCode;

/// Whether a path of trunk links exists from `start` to `end`
///
/// `start == end` is trivially reachable with zero hops. An unregistered
/// `start` has no trunks and yields `false`. Read-only: never mutates the
/// network.
pub fn route_exists(network: &Network, start: &AreaCode, end: &AreaCode) -> bool {
    if start == end {
        return true;
    }

    let mut visited: HashSet<&AreaCode> = HashSet::new();
    visited.insert(start);
    let mut worklist = vec![start];

    while let Some(current) = worklist.pop() {
        let Ok(board) = network.board(current) else {
            continue;
        };
        if board.has_trunk_to(end) {
            trace!(from = %start, to = %end, via = %current, "route found");
            return true;
        }
        for neighbor in &board.trunks {
            if visited.insert(neighbor) {
                worklist.push(neighbor);
            }
        }
    }

    trace!(from = %start, to = %end, "no route");
    false
}
