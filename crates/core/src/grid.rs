//! Dense cell grid underlying maze generation.
//! This module exists to keep wall bookkeeping and sizing rules in one place.
//! It does not own the carving order; that belongs to `mazegen`.

use crate::types::{CellPos, Side, Viewport};

/// Cell size at depth 1, in pixels.
pub const BASE_CELL_SIZE: f32 = 115.0;
/// Floor the cell size never shrinks below.
pub const MIN_CELL_SIZE: f32 = 50.0;
/// Pixels removed from the cell size per depth step.
pub const CELL_SHRINK_PER_DEPTH: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub col: usize,
    pub row: usize,
    /// Wall presence in `Side` order: top, right, bottom, left.
    pub walls: [bool; 4],
    pub visited: bool,
}

impl Cell {
    fn sealed(col: usize, row: usize) -> Self {
        Self { col, row, walls: [true; 4], visited: false }
    }
}

/// Row-major grid of cells, rebuilt wholesale for every level.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a fully-sealed, unvisited grid. Dimensions clamp to 1 so a
    /// viewport smaller than one cell still yields a playable grid.
    pub fn new(cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        let mut cells = Vec::with_capacity(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell::sealed(col, row));
            }
        }
        Self { cols, rows, cells }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, pos: CellPos) -> &Cell {
        &self.cells[self.index(pos)]
    }

    pub fn pos_of_index(&self, index: usize) -> CellPos {
        CellPos { col: index % self.cols, row: index / self.cols }
    }

    pub fn mark_visited(&mut self, pos: CellPos) {
        let index = self.index(pos);
        self.cells[index].visited = true;
    }

    /// Neighbor coordinate one step toward `side`, bounds-checked.
    pub fn neighbor(&self, pos: CellPos, side: Side) -> Option<CellPos> {
        match side {
            Side::Top if pos.row > 0 => Some(CellPos { col: pos.col, row: pos.row - 1 }),
            Side::Right if pos.col + 1 < self.cols => {
                Some(CellPos { col: pos.col + 1, row: pos.row })
            }
            Side::Bottom if pos.row + 1 < self.rows => {
                Some(CellPos { col: pos.col, row: pos.row + 1 })
            }
            Side::Left if pos.col > 0 => Some(CellPos { col: pos.col - 1, row: pos.row }),
            _ => None,
        }
    }

    /// Clears the wall between two orthogonally adjacent cells on both
    /// sides. Reciprocity is the invariant the wall builder relies on.
    pub fn remove_shared_wall(&mut self, a: CellPos, b: CellPos) {
        let Some(side) = side_from_to(a, b) else {
            return;
        };
        let a_index = self.index(a);
        let b_index = self.index(b);
        self.cells[a_index].walls[side.index()] = false;
        self.cells[b_index].walls[side.opposite().index()] = false;
    }

    /// Count of wall pairs removed so far. A perfect maze over the whole
    /// grid removes exactly `len() - 1` pairs.
    pub fn removed_wall_pairs(&self) -> usize {
        let cleared: usize = self
            .cells
            .iter()
            .map(|cell| cell.walls.iter().filter(|present| !**present).count())
            .sum();
        cleared / 2
    }

    /// One byte of wall flags per cell, for fingerprinting and
    /// determinism comparisons.
    pub fn canonical_wall_bytes(&self) -> Vec<u8> {
        self.cells
            .iter()
            .map(|cell| {
                cell.walls
                    .iter()
                    .enumerate()
                    .fold(0_u8, |bits, (index, present)| bits | (u8::from(*present) << index))
            })
            .collect()
    }

    fn index(&self, pos: CellPos) -> usize {
        debug_assert!(pos.col < self.cols && pos.row < self.rows);
        pos.col + pos.row * self.cols
    }
}

/// Unvisited orthogonal neighbors of `pos`, in `Side` order. Behavior kept
/// as a free function so cells stay plain data.
pub fn unvisited_neighbors(grid: &Grid, pos: CellPos) -> Vec<CellPos> {
    Side::ALL
        .into_iter()
        .filter_map(|side| grid.neighbor(pos, side))
        .filter(|neighbor| !grid.cell(*neighbor).visited)
        .collect()
}

fn side_from_to(a: CellPos, b: CellPos) -> Option<Side> {
    if a.col == b.col && b.row + 1 == a.row {
        Some(Side::Top)
    } else if a.row == b.row && a.col + 1 == b.col {
        Some(Side::Right)
    } else if a.col == b.col && a.row + 1 == b.row {
        Some(Side::Bottom)
    } else if a.row == b.row && b.col + 1 == a.col {
        Some(Side::Left)
    } else {
        None
    }
}

/// Difficulty-scaled cell size: shrinks linearly with depth down to the
/// floor.
pub fn cell_size_for_depth(depth: u32) -> f32 {
    (BASE_CELL_SIZE - CELL_SHRINK_PER_DEPTH * (depth.saturating_sub(1)) as f32).max(MIN_CELL_SIZE)
}

/// Grid dimensions for a viewport at the given cell size, clamped to 1x1.
pub fn grid_dims(viewport: Viewport, cell_size: f32) -> (usize, usize) {
    let cols = ((viewport.width / cell_size).floor() as usize).max(1);
    let rows = ((viewport.height / cell_size).floor() as usize).max(1);
    (cols, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_sealed_and_unvisited() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.len(), 12);
        for cell in grid.cells() {
            assert_eq!(cell.walls, [true; 4]);
            assert!(!cell.visited);
        }
    }

    #[test]
    fn zero_dimensions_clamp_to_single_cell() {
        let grid = Grid::new(0, 0);
        assert_eq!((grid.cols(), grid.rows()), (1, 1));
    }

    #[test]
    fn wall_removal_is_reciprocal_for_every_direction() {
        let mut grid = Grid::new(3, 3);
        let center = CellPos { col: 1, row: 1 };
        for side in Side::ALL {
            let neighbor = grid.neighbor(center, side).expect("center has four neighbors");
            grid.remove_shared_wall(center, neighbor);
            assert!(!grid.cell(center).walls[side.index()]);
            assert!(!grid.cell(neighbor).walls[side.opposite().index()]);
        }
        assert_eq!(grid.removed_wall_pairs(), 4);
    }

    #[test]
    fn non_adjacent_removal_is_ignored() {
        let mut grid = Grid::new(3, 3);
        grid.remove_shared_wall(CellPos { col: 0, row: 0 }, CellPos { col: 2, row: 2 });
        assert_eq!(grid.removed_wall_pairs(), 0);
    }

    #[test]
    fn neighbors_are_bounds_checked_at_corners() {
        let grid = Grid::new(2, 2);
        let corner = CellPos { col: 0, row: 0 };
        assert_eq!(grid.neighbor(corner, Side::Top), None);
        assert_eq!(grid.neighbor(corner, Side::Left), None);
        assert!(grid.neighbor(corner, Side::Right).is_some());
        assert!(grid.neighbor(corner, Side::Bottom).is_some());
    }

    #[test]
    fn unvisited_neighbors_skips_visited_cells() {
        let mut grid = Grid::new(3, 3);
        let center = CellPos { col: 1, row: 1 };
        grid.mark_visited(CellPos { col: 1, row: 0 });
        grid.mark_visited(CellPos { col: 0, row: 1 });
        let neighbors = unvisited_neighbors(&grid, center);
        assert_eq!(
            neighbors,
            vec![CellPos { col: 2, row: 1 }, CellPos { col: 1, row: 2 }]
        );
    }

    #[test]
    fn cell_size_shrinks_per_depth_and_floors() {
        assert_eq!(cell_size_for_depth(1), 115.0);
        assert_eq!(cell_size_for_depth(2), 105.0);
        let mut previous = cell_size_for_depth(1);
        for depth in 2..20 {
            let size = cell_size_for_depth(depth);
            assert!(size <= previous, "cell size must never grow with depth");
            assert!(size >= MIN_CELL_SIZE);
            previous = size;
        }
        assert_eq!(cell_size_for_depth(50), MIN_CELL_SIZE);
    }

    #[test]
    fn grid_dims_clamp_tiny_viewports() {
        let viewport = Viewport { width: 10.0, height: 10.0 };
        assert_eq!(grid_dims(viewport, 115.0), (1, 1));
        let viewport = Viewport { width: 800.0, height: 600.0 };
        assert_eq!(grid_dims(viewport, 100.0), (8, 6));
    }

    #[test]
    fn canonical_bytes_track_wall_flags() {
        let mut grid = Grid::new(2, 1);
        let sealed = grid.canonical_wall_bytes();
        assert_eq!(sealed, vec![0b1111, 0b1111]);
        grid.remove_shared_wall(CellPos { col: 0, row: 0 }, CellPos { col: 1, row: 0 });
        let carved = grid.canonical_wall_bytes();
        assert_eq!(carved, vec![0b1101, 0b0111]);
    }
}
