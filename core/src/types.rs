/// Single coordinate axis, used for row/column indices and grid dimensions.
pub type Coord = u8;

/// Count type used for mine counts, revealed counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Row/column offsets of the Moore neighborhood, row-major.
const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Iterates the in-bounds Moore neighbors of a cell. Edges clip, they never wrap.
#[derive(Clone, Debug)]
pub struct MooreNeighbors {
    center: Coord2,
    bounds: Coord2,
    next: usize,
}

impl MooreNeighbors {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            next: 0,
        }
    }

    fn offset(&self, (dr, dc): (i8, i8)) -> Option<Coord2> {
        let (row, col) = self.center;
        let (rows, cols) = self.bounds;

        let row = row.checked_add_signed(dr).filter(|&row| row < rows)?;
        let col = col.checked_add_signed(dc).filter(|&col| col < cols)?;
        Some((row, col))
    }
}

impl Iterator for MooreNeighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&delta) = OFFSETS.get(self.next) {
            self.next += 1;
            if let Some(coords) = self.offset(delta) {
                return Some(coords);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(OFFSETS.len() - self.next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = MooreNeighbors::new((0, 0), (3, 3)).collect();
        assert_eq!(neighbors, [(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn interior_has_eight_neighbors() {
        assert_eq!(MooreNeighbors::new((1, 1), (3, 3)).count(), 8);
    }

    #[test]
    fn far_edge_does_not_wrap() {
        let neighbors: Vec<_> = MooreNeighbors::new((2, 4), (3, 5)).collect();
        assert_eq!(neighbors, [(1, 3), (1, 4), (2, 3)]);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        assert_eq!(MooreNeighbors::new((0, 0), (1, 1)).next(), None);
    }

    #[test]
    fn mult_saturates() {
        assert_eq!(mult(16, 30), 480);
        assert_eq!(mult(Coord::MAX, Coord::MAX), 65025);
    }
}
