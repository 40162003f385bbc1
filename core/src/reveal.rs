use alloc::vec::Vec;

use crate::*;

/// Result of a single [`reveal`] call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealResult {
    /// The cell was already revealed or is flagged; nothing changed.
    AlreadyDone,
    /// The cell held a mine. It is now revealed.
    HitMine,
    /// Number of cells newly revealed, flood fill included.
    Revealed(CellCount),
}

/// Reveals the cell at `coords`, flooding outwards through zero-count cells.
///
/// Uses an explicit work-list instead of recursion, so a blank region spanning
/// the whole board costs one stack entry per pending cell, not one frame.
/// Each cell is revealed at most once.
pub fn reveal(grid: &mut Grid, coords: Coord2) -> Result<RevealResult> {
    let coords = grid.check_bounds(coords)?;
    if !is_revealable(grid[coords]) {
        return Ok(RevealResult::AlreadyDone);
    }

    let mut revealed: CellCount = 0;
    let mut pending = Vec::from([coords]);

    while let Some(visit_coords) = pending.pop() {
        let cell = &mut grid[visit_coords];
        if !is_revealable(*cell) {
            continue;
        }

        cell.is_revealed = true;
        revealed += 1;

        if cell.is_mine {
            log::debug!("Mine hit at {:?}", visit_coords);
            return Ok(RevealResult::HitMine);
        }

        if cell.neighbor_mine_count == 0 {
            log::trace!("Flood fill through {:?}", visit_coords);
            pending.extend(
                grid.neighbors(visit_coords)
                    .filter(|&pos| is_revealable(grid[pos])),
            );
        }
    }

    log::debug!("Revealed {} cells from {:?}", revealed, coords);
    Ok(RevealResult::Revealed(revealed))
}

/// Uncovers every mine for the end-of-game display. Flagged mines keep their
/// flag. Returns how many mines were uncovered.
pub fn reveal_all_mines(grid: &mut Grid) -> CellCount {
    let mut uncovered = 0;
    for coords in grid.coords() {
        let cell = &mut grid[coords];
        if cell.is_mine && is_revealable(*cell) {
            cell.is_revealed = true;
            uncovered += 1;
        }
    }
    uncovered
}

/// True once every non-mine cell has been revealed. Flags play no part.
pub fn is_win(grid: &Grid, revealed_count: CellCount, mine_count: CellCount) -> bool {
    revealed_count == grid.total_cells().saturating_sub(mine_count)
}

const fn is_revealable(cell: Cell) -> bool {
    !cell.is_revealed && !cell.is_flagged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(rows: Coord, cols: Coord, mines: &[Coord2]) -> Grid {
        let mut grid = Grid::new(rows, cols);
        for &coords in mines {
            grid[coords].is_mine = true;
        }
        compute_neighbor_counts(&mut grid);
        grid
    }

    fn revealed_total(grid: &Grid) -> usize {
        grid.coords().filter(|&c| grid[c].is_revealed).count()
    }

    #[test]
    fn number_cell_stops_the_flood() {
        let mut grid = layout(3, 3, &[(0, 0)]);

        assert_eq!(reveal(&mut grid, (1, 1)), Ok(RevealResult::Revealed(1)));
        assert_eq!(grid[(1, 1)].view(), CellView::Number(1));
        assert_eq!(revealed_total(&grid), 1);
    }

    #[test]
    fn zero_cell_floods_to_the_numbered_border() {
        let mut grid = layout(3, 3, &[(2, 2)]);

        assert_eq!(reveal(&mut grid, (0, 0)), Ok(RevealResult::Revealed(8)));
        assert_eq!(grid[(1, 1)].view(), CellView::Number(1));
        assert_eq!(grid[(2, 2)].view(), CellView::Covered);
        assert!(is_win(&grid, 8, 1));
    }

    #[test]
    fn mine_is_revealed_and_reported() {
        let mut grid = layout(2, 2, &[(0, 0)]);

        assert_eq!(reveal(&mut grid, (0, 0)), Ok(RevealResult::HitMine));
        assert_eq!(grid[(0, 0)].view(), CellView::Mine);
    }

    #[test]
    fn second_reveal_is_a_no_op() {
        let mut grid = layout(3, 3, &[(2, 2)]);
        reveal(&mut grid, (0, 0)).unwrap();
        let before = grid.clone();

        assert_eq!(reveal(&mut grid, (0, 0)), Ok(RevealResult::AlreadyDone));
        assert_eq!(reveal(&mut grid, (1, 2)), Ok(RevealResult::AlreadyDone));
        assert_eq!(grid, before);
    }

    #[test]
    fn flagged_cells_are_skipped_by_click_and_flood() {
        let mut grid = layout(3, 3, &[(2, 2)]);
        grid[(0, 2)].is_flagged = true;

        assert_eq!(reveal(&mut grid, (0, 2)), Ok(RevealResult::AlreadyDone));
        assert_eq!(reveal(&mut grid, (0, 0)), Ok(RevealResult::Revealed(7)));
        assert!(grid[(0, 2)].is_flagged);
        assert!(!grid[(0, 2)].is_revealed);
    }

    #[test]
    fn empty_board_floods_every_cell() {
        let mut grid = layout(Coord::MAX, Coord::MAX, &[]);

        let total = grid.total_cells();
        assert_eq!(reveal(&mut grid, (100, 200)), Ok(RevealResult::Revealed(total)));
    }

    #[test]
    fn out_of_bounds_fails_fast() {
        let mut grid = layout(2, 2, &[]);

        assert_eq!(
            reveal(&mut grid, (0, 2)),
            Err(GameError::OutOfBounds { row: 0, col: 2 })
        );
    }

    #[test]
    fn reveal_all_mines_leaves_flags_alone() {
        let mut grid = layout(3, 3, &[(0, 0), (2, 2), (0, 2)]);
        grid[(2, 2)].is_flagged = true;

        assert_eq!(reveal_all_mines(&mut grid), 2);
        assert_eq!(grid[(0, 0)].view(), CellView::Mine);
        assert_eq!(grid[(0, 2)].view(), CellView::Mine);
        assert_eq!(grid[(2, 2)].view(), CellView::Flagged);
        assert_eq!(grid[(1, 1)].view(), CellView::Covered);
    }

    #[test]
    fn win_needs_every_safe_cell() {
        let grid = layout(9, 9, &[]);

        assert!(!is_win(&grid, 70, 10));
        assert!(is_win(&grid, 71, 10));
    }
}
