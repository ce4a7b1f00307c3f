use serde::{Deserialize, Serialize};

use crate::CellId;

/// Player-visible state of one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Hidden,
    Revealed,
    Flagged,
}

impl CellState {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Full record of a cell, mine bit included.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub id: CellId,
    pub is_mine: bool,
    pub state: CellState,
    pub adjacent_mine_count: u8,
}

/// What a renderer is allowed to know about a cell.
///
/// `adjacent_count` is only present on revealed cells and `is_mine` only once the cell is
/// revealed or the game is lost. `exploded` marks the mine that ended the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub state: CellState,
    pub adjacent_count: Option<u8>,
    pub is_mine: Option<bool>,
    pub exploded: bool,
}

impl CellView {
    /// Whether the cell shows a mine: exploded, or exposed after a loss without a flag on it.
    pub const fn shows_mine(&self) -> bool {
        matches!(self.is_mine, Some(true)) && !matches!(self.state, CellState::Flagged)
    }
}
