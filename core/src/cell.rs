use serde::{Deserialize, Serialize};

/// Ground truth for a single grid position.
///
/// `is_revealed` and `is_flagged` are never both set; the reveal engine skips
/// flagged cells and flag toggling skips revealed ones.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_mine: bool,
    pub neighbor_mine_count: u8,
    pub is_revealed: bool,
    pub is_flagged: bool,
}

impl Cell {
    /// What the player is allowed to see of this cell.
    pub const fn view(self) -> CellView {
        match (self.is_revealed, self.is_flagged, self.is_mine) {
            (false, true, _) => CellView::Flagged,
            (false, false, _) => CellView::Covered,
            (true, _, true) => CellView::Mine,
            (true, _, false) if self.neighbor_mine_count == 0 => CellView::Blank,
            (true, _, false) => CellView::Number(self.neighbor_mine_count),
        }
    }
}

/// Player-visible render state of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Covered,
    Flagged,
    Blank,
    Number(u8),
    Mine,
}

impl CellView {
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Blank | Self::Number(_) | Self::Mine)
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Covered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_follows_reveal_and_flag_state() {
        let mut cell = Cell {
            neighbor_mine_count: 3,
            ..Cell::default()
        };
        assert_eq!(cell.view(), CellView::Covered);

        cell.is_flagged = true;
        assert_eq!(cell.view(), CellView::Flagged);

        cell.is_flagged = false;
        cell.is_revealed = true;
        assert_eq!(cell.view(), CellView::Number(3));

        cell.neighbor_mine_count = 0;
        assert_eq!(cell.view(), CellView::Blank);

        cell.is_mine = true;
        assert_eq!(cell.view(), CellView::Mine);
        assert!(cell.view().is_open());
    }
}
