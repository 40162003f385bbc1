use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates ({row}, {col}) are outside the grid")]
    OutOfBounds { row: Coord, col: Coord },
    #[error("Too many mines, requested {requested} but at most {capacity} fit")]
    TooManyMines {
        requested: CellCount,
        capacity: CellCount,
    },
    #[error("Unknown difficulty")]
    UnknownDifficulty,
}

pub type Result<T> = core::result::Result<T, GameError>;
