use alloc::{collections::VecDeque, vec, vec::Vec};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Active,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// One cell whose state changed during a move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellChange {
    pub id: CellId,
    pub new_state: CellState,
    /// Set for revealed safe cells.
    pub adjacent_count: Option<u8>,
}

/// Result of a reveal move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealOutcome {
    pub status: GameStatus,
    /// Cells that became revealed, in reveal order.
    pub changed: Vec<CellChange>,
    /// Unflagged mines other than the one that exploded; only filled by the losing move.
    pub exposed_mines: Vec<CellId>,
}

impl RevealOutcome {
    fn unchanged(status: GameStatus) -> Self {
        Self {
            status,
            changed: Vec::new(),
            exposed_mines: Vec::new(),
        }
    }

    pub fn has_update(&self) -> bool {
        !self.changed.is_empty()
    }
}

/// Result of a flag toggle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagOutcome {
    pub new_state: CellState,
    pub flag_count: CellCount,
    pub changed: bool,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        self.changed
    }
}

/// One game on one board, from the first move until it is won or lost.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSession {
    board: Board,
    status: GameStatus,
    flag_count: CellCount,
    revealed_count: CellCount,
    triggered_mine: Option<CellId>,
}

impl GameSession {
    /// Starts a game on a fresh random board.
    pub fn new_game(width: Coord, height: Coord, mines: CellCount, seed: u64) -> Result<Self> {
        let board = Board::create(width, height, mines, seed)?;
        log::debug!("New game {width}x{height} with {mines} mines, seed {seed}");
        Ok(Self::from_board(board))
    }

    /// Resumes from whatever state `board` holds; a fresh board starts an active game.
    pub fn from_board(board: Board) -> Self {
        let mut session = Self {
            board,
            status: GameStatus::Active,
            flag_count: 0,
            revealed_count: 0,
            triggered_mine: None,
        };

        for id in session.board.ids() {
            let cell = session.board.cell_unchecked(id);
            match (cell.state, cell.is_mine) {
                (CellState::Hidden, _) => {}
                (CellState::Flagged, _) => session.flag_count += 1,
                (CellState::Revealed, false) => session.revealed_count += 1,
                (CellState::Revealed, true) => {
                    session.triggered_mine = Some(id);
                    session.status = GameStatus::Lost;
                }
            }
        }
        if session.status.is_active() && session.all_safe_revealed() {
            session.status = GameStatus::Won;
        }

        session
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> GameConfig {
        self.board.config()
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    /// Mines minus flags. Negative once the player has placed more flags than there are mines.
    pub fn mines_left(&self) -> i64 {
        i64::from(self.board.mine_count()) - i64::from(self.flag_count)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    /// The mine whose reveal lost the game.
    pub fn triggered_mine(&self) -> Option<CellId> {
        self.triggered_mine
    }

    /// Reveals `id`, cascading through zero-count regions.
    ///
    /// Does nothing once the game is over or when the cell is already revealed or flagged.
    pub fn reveal(&mut self, id: CellId) -> Result<RevealOutcome> {
        let cell = self.board.cell_at(id)?;

        if self.status.is_finished() || cell.state != CellState::Hidden {
            return Ok(RevealOutcome::unchanged(self.status));
        }

        if cell.is_mine {
            return Ok(self.explode(id));
        }

        let changed = self.flood_reveal(id);
        if changed.len() > 1 {
            log::debug!("Reveal of {id} cascaded to {} cells", changed.len());
        }

        if self.all_safe_revealed() {
            log::debug!("Game won after revealing {id}");
            self.status = GameStatus::Won;
        }

        Ok(RevealOutcome {
            status: self.status,
            changed,
            exposed_mines: Vec::new(),
        })
    }

    /// Flags a hidden cell or unflags a flagged one. Revealed cells and finished games are left alone.
    pub fn toggle_flag(&mut self, id: CellId) -> Result<FlagOutcome> {
        let state = self.board.state(id)?;

        let new_state = match state {
            _ if self.status.is_finished() => state,
            CellState::Revealed => state,
            CellState::Hidden => {
                self.flag_count += 1;
                CellState::Flagged
            }
            CellState::Flagged => {
                self.flag_count -= 1;
                CellState::Hidden
            }
        };

        let changed = new_state != state;
        if changed {
            self.board.set_state(id, new_state);
            log::trace!("Cell {id} now {new_state:?}, {} flags", self.flag_count);
        }

        Ok(FlagOutcome {
            new_state,
            flag_count: self.flag_count,
            changed,
        })
    }

    /// What a renderer may show for `id`.
    pub fn cell_view(&self, id: CellId) -> Result<CellView> {
        let id = self.board.validate_id(id)?;
        Ok(self.view_of(id))
    }

    pub(crate) fn view_of(&self, id: CellId) -> CellView {
        let cell = self.board.cell_unchecked(id);
        let revealed = cell.state == CellState::Revealed;
        let lost = self.status == GameStatus::Lost;

        CellView {
            state: cell.state,
            adjacent_count: (revealed && !cell.is_mine).then_some(cell.adjacent_mine_count),
            is_mine: (revealed || lost).then_some(cell.is_mine),
            exploded: self.triggered_mine == Some(id),
        }
    }

    fn explode(&mut self, id: CellId) -> RevealOutcome {
        self.board.set_state(id, CellState::Revealed);
        self.triggered_mine = Some(id);
        self.status = GameStatus::Lost;
        log::debug!("Game lost on mine {id}");

        let exposed_mines = self
            .board
            .mine_ids()
            .filter(|&mine| mine != id)
            .filter(|&mine| self.board.cell_unchecked(mine).state != CellState::Flagged)
            .collect();

        RevealOutcome {
            status: self.status,
            changed: vec![CellChange {
                id,
                new_state: CellState::Revealed,
                adjacent_count: None,
            }],
            exposed_mines,
        }
    }

    /// Reveals the safe cell `start` and every cell reachable through zero-count cells.
    ///
    /// Cells are marked revealed as they are queued, so each one is queued at most once.
    fn flood_reveal(&mut self, start: CellId) -> Vec<CellChange> {
        let mut changed = Vec::new();
        let mut to_visit = VecDeque::new();

        if self.reveal_safe(start, &mut changed) == 0 {
            to_visit.push_back(start);
        }

        while let Some(id) = to_visit.pop_front() {
            for neighbor in self.board.shape().iter_neighbors(id) {
                if self.board.cell_unchecked(neighbor).state != CellState::Hidden {
                    continue;
                }
                if self.reveal_safe(neighbor, &mut changed) == 0 {
                    to_visit.push_back(neighbor);
                }
            }
        }

        changed
    }

    /// Caller guarantees `id` is hidden and not a mine. Returns its adjacency count.
    fn reveal_safe(&mut self, id: CellId, changed: &mut Vec<CellChange>) -> u8 {
        let count = self.board.cell_unchecked(id).adjacent_mine_count;
        self.board.set_state(id, CellState::Revealed);
        self.revealed_count += 1;
        changed.push(CellChange {
            id,
            new_state: CellState::Revealed,
            adjacent_count: Some(count),
        });
        count
    }

    fn all_safe_revealed(&self) -> bool {
        self.revealed_count == self.board.safe_cell_count()
    }
}
