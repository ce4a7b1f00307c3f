use ndarray::{Array2, ArrayView1, Axis};
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a renderer needs to redraw the whole board at once.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub status: GameStatus,
    pub flag_count: CellCount,
    pub mines_left: i64,
    /// Indexed `[row, col]`.
    pub cells: Array2<CellView>,
}

impl Snapshot {
    pub fn from_session(session: &GameSession) -> Self {
        let shape = session.board().shape();
        let cells = Array2::from_shape_fn(shape.nd_dim(), |(row, col)| {
            session.view_of(shape.id_of((row as Coord, col as Coord)))
        });

        Self {
            status: session.status(),
            flag_count: session.flag_count(),
            mines_left: session.mines_left(),
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    pub fn view(&self, id: CellId) -> Option<&CellView> {
        let width = self.width();
        if width == 0 {
            return None;
        }
        self.cells.get((id / width, id % width))
    }

    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, CellView>> {
        self.cells.axis_iter(Axis(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_session_maps_every_cell() {
        let board = Board::from_mine_ids(3, 2, &[0]).unwrap();
        let mut session = GameSession::from_board(board);
        session.reveal(5).unwrap();
        session.toggle_flag(0).unwrap();

        let snapshot = Snapshot::from_session(&session);

        assert_eq!((snapshot.width(), snapshot.height()), (3, 2));
        assert_eq!(snapshot.flag_count, 1);
        assert_eq!(snapshot.mines_left, 0);
        assert_eq!(snapshot.view(5).unwrap().adjacent_count, Some(0));
        assert_eq!(snapshot.view(4).unwrap().adjacent_count, Some(1));
        assert_eq!(snapshot.view(0).unwrap().state, CellState::Flagged);
        assert_eq!(snapshot.view(0).unwrap().is_mine, None);
        assert!(snapshot.view(6).is_none());
        assert_eq!(snapshot.rows().count(), 2);
    }

    #[test]
    fn snapshot_after_loss_exposes_mines() {
        let board = Board::from_mine_ids(2, 2, &[0, 3]).unwrap();
        let mut session = GameSession::from_board(board);
        session.reveal(3).unwrap();

        let snapshot = Snapshot::from_session(&session);

        assert_eq!(snapshot.status, GameStatus::Lost);
        assert!(snapshot.view(3).unwrap().exploded);
        assert!(snapshot.view(0).unwrap().shows_mine());
        assert!(!snapshot.view(0).unwrap().exploded);
        assert_eq!(snapshot.view(1).unwrap().is_mine, Some(false));
    }

    #[test]
    fn snapshot_serializes_for_remote_renderers() {
        let session = GameSession::new_game(4, 3, 2, 9).unwrap();
        let snapshot = Snapshot::from_session(&session);

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(back, snapshot);
    }
}
