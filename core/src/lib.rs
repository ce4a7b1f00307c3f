//! Game logic for a single-player minesweeper board.
//!
//! [`Board`] owns the mines, adjacency counts and per-cell state. [`GameSession`] drives a board
//! through reveal and flag moves and decides when the game is won or lost. Neither knows
//! anything about rendering: callers read [`RevealOutcome`]s, [`CellView`]s or a whole
//! [`Snapshot`] and draw whatever they like.

#![no_std]

extern crate alloc;

use serde::Serialize;

pub use board::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use snapshot::*;
pub use tile::*;
pub use types::*;

mod board;
mod error;
mod generator;
mod session;
mod snapshot;
mod tile;
mod types;

/// Validated board dimensions and mine count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    width: Coord,
    height: Coord,
    mines: CellCount,
}

impl GameConfig {
    /// Rejects empty boards and boards without a single safe cell.
    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        if width == 0 {
            return Err(ConfigError::ZeroWidth.into());
        }
        if height == 0 {
            return Err(ConfigError::ZeroHeight.into());
        }

        let cells = mult(width, height);
        if mines >= cells {
            return Err(ConfigError::TooManyMines { mines, cells }.into());
        }

        Ok(Self {
            width,
            height,
            mines,
        })
    }

    pub const fn width(&self) -> Coord {
        self.width
    }

    pub const fn height(&self) -> Coord {
        self.height
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn shape(&self) -> GridShape {
        GridShape::new(self.width, self.height)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}
