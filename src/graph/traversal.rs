//! Graph traversal — depth-first path search.

use std::collections::{HashMap, HashSet};

use super::RouteMap;

/// Depth-first path search from `src` to `dst`.
///
/// Iterative DFS over an explicit growable stack. Neighbors are pushed
/// in insertion order, so the last-added neighbor is explored first
/// and the result is deterministic for a given construction sequence.
/// The returned path follows the tree edges the search actually took:
/// consecutive cities are linked, no city repeats, and the route is a
/// DFS discovery path — not necessarily the shortest one.
///
/// Returns None when `src` does not exist or `dst` is unreachable
/// (including a `dst` not present in the map at all). `src == dst` on
/// an existing city yields the single-element path.
pub fn dfs_path(map: &RouteMap, src: &str, dst: &str) -> Option<Vec<String>> {
    let start = map.position_of(src)?;

    // Visited state is scoped to this call; nothing lives on the records.
    let mut visited: HashSet<usize> = HashSet::new();
    let mut parent: HashMap<usize, usize> = HashMap::new();
    let mut stack: Vec<usize> = vec![start];

    while let Some(current) = stack.pop() {
        // A city can be pushed more than once before it is popped.
        if !visited.insert(current) {
            continue;
        }
        if map.city_at(current).name == dst {
            return Some(reconstruct(map, &parent, start, current));
        }
        for neighbor in &map.city_at(current).neighbors {
            let Some(pos) = map.position_of(neighbor) else {
                continue;
            };
            if !visited.contains(&pos) {
                parent.insert(pos, current);
                stack.push(pos);
            }
        }
    }

    None
}

/// Walk the parent chain from `end` back to `start`.
fn reconstruct(
    map: &RouteMap,
    parent: &HashMap<usize, usize>,
    start: usize,
    end: usize,
) -> Vec<String> {
    let mut path = vec![map.city_at(end).name.clone()];
    let mut current = end;
    while current != start {
        current = parent[&current];
        path.push(map.city_at(current).name.clone());
    }
    path.reverse();
    path
}
