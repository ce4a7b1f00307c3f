use thiserror::Error;

use crate::{CellCount, CellId};

/// Why a board configuration was refused.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board width must be at least 1")]
    ZeroWidth,
    #[error("Board height must be at least 1")]
    ZeroHeight,
    #[error("Too many mines: {mines} requested but the board has {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("Cell {id} is outside the board ({cells} cells)")]
    OutOfRange { id: CellId, cells: CellCount },
}

pub type Result<T> = core::result::Result<T, GameError>;
