//! Randomized depth-first maze carving.
//! This module exists to own the spanning-tree construction over the grid.
//! It does not own wall geometry or goal selection.

use crate::grid::{Grid, unvisited_neighbors};
use crate::rng::RandomSource;
use crate::types::CellPos;

/// Carves a perfect maze in place and returns the randomly chosen start
/// cell. Every cell ends up visited exactly once; exactly `len - 1` wall
/// pairs are removed, so the corridor graph is connected and acyclic.
pub fn carve_maze(grid: &mut Grid, rng: &mut dyn RandomSource) -> CellPos {
    let start = grid.pos_of_index(rng.pick_index(grid.len()));
    grid.mark_visited(start);

    let mut current = start;
    let mut stack: Vec<CellPos> = Vec::new();

    loop {
        let candidates = unvisited_neighbors(grid, current);
        if candidates.is_empty() {
            match stack.pop() {
                Some(previous) => current = previous,
                None => break,
            }
            continue;
        }

        let next = candidates[rng.pick_index(candidates.len())];
        stack.push(current);
        grid.remove_shared_wall(current, next);
        grid.mark_visited(next);
        current = next;
    }

    start
}
