use crate::*;
pub use random::*;

mod random;

/// Strategy for laying mines onto a fresh grid.
pub trait MineGenerator {
    /// Marks `mine_count` distinct cells as mines, never touching `exclude`.
    fn place_mines(&mut self, grid: &mut Grid, mine_count: CellCount, exclude: Coord2)
    -> Result<()>;
}

/// Sets every non-mine cell's `neighbor_mine_count` from the current mine layout.
pub fn compute_neighbor_counts(grid: &mut Grid) {
    for coords in grid.coords() {
        if grid[coords].is_mine {
            continue;
        }
        let count = grid
            .neighbors(coords)
            .filter(|&pos| grid[pos].is_mine)
            .count();
        // at most eight neighbors
        grid[coords].neighbor_mine_count = count as u8;
    }
}
