use rand::prelude::*;

use super::*;

/// Uniform placement by rejection sampling: draw a cell, retry when it is
/// already mined or is the excluded start cell.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator {
    rng: SmallRng,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn place_mines(
        &mut self,
        grid: &mut Grid,
        mine_count: CellCount,
        exclude: Coord2,
    ) -> Result<()> {
        let exclude = grid.check_bounds(exclude)?;
        let capacity = grid.total_cells() - 1;
        if mine_count > capacity {
            return Err(GameError::TooManyMines {
                requested: mine_count,
                capacity,
            });
        }

        let (rows, cols) = grid.size();
        let mut placed = 0;
        let mut attempts: u32 = 0;

        while placed < mine_count {
            attempts += 1;
            let coords = (self.rng.random_range(0..rows), self.rng.random_range(0..cols));
            if coords == exclude || grid[coords].is_mine {
                continue;
            }
            grid[coords].is_mine = true;
            placed += 1;
        }

        log::debug!(
            "Placed {} mines on {}x{} in {} draws, excluding {:?}",
            placed,
            rows,
            cols,
            attempts,
            exclude
        );
        Ok(())
    }
}
