use core::ops::Range;
use ndarray::Array2;

use crate::*;

/// The grid: mine positions and adjacency counts fixed at creation, plus mutable cell state.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    config: GameConfig,
    mines: Array2<bool>,
    adjacent: Array2<u8>,
    cells: Array2<CellState>,
}

impl Board {
    /// Builds a board with `mines` randomly placed mines, reproducible from `seed`.
    pub fn create(width: Coord, height: Coord, mines: CellCount, seed: u64) -> Result<Self> {
        let config = GameConfig::new(width, height, mines)?;
        Self::generate(config, RandomMinefieldGenerator::new(seed))
    }

    pub fn generate(config: GameConfig, generator: impl MinefieldGenerator) -> Result<Self> {
        let mut mine_mask = Array2::default(config.shape().nd_dim());
        generator.place_mines(config, &mut mine_mask);

        let board = Self::from_mine_mask(config.width(), config.height(), mine_mask)?;
        if board.mine_count() != config.mines() {
            log::warn!(
                "Generated minefield count mismatch, actual: {}, requested: {}",
                board.mine_count(),
                config.mines()
            );
        }
        Ok(board)
    }

    /// Builds a board with mines at exactly `mine_ids`; duplicates count once.
    pub fn from_mine_ids(width: Coord, height: Coord, mine_ids: &[CellId]) -> Result<Self> {
        let shape = GameConfig::new(width, height, 0)?.shape();
        let mut mine_mask: Array2<bool> = Array2::default(shape.nd_dim());

        for &id in mine_ids {
            if !shape.contains(id) {
                return Err(GameError::OutOfRange {
                    id,
                    cells: shape.total_cells(),
                });
            }
            mine_mask[shape.coords_of(id).to_nd_index()] = true;
        }

        Self::from_mine_mask(width, height, mine_mask)
    }

    fn from_mine_mask(width: Coord, height: Coord, mines: Array2<bool>) -> Result<Self> {
        let mine_count = mines.iter().filter(|&&is_mine| is_mine).count();
        let config = GameConfig::new(width, height, mine_count as CellCount)?;
        let shape = config.shape();

        let mut adjacent: Array2<u8> = Array2::zeros(shape.nd_dim());
        for ((row, col), count) in adjacent.indexed_iter_mut() {
            let id = shape.id_of((row as Coord, col as Coord));
            *count = shape
                .iter_neighbors(id)
                .filter(|&neighbor| mines[shape.coords_of(neighbor).to_nd_index()])
                .count() as u8;
        }

        Ok(Self {
            config,
            mines,
            adjacent,
            cells: Array2::default(shape.nd_dim()),
        })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn width(&self) -> Coord {
        self.config.width()
    }

    pub fn height(&self) -> Coord {
        self.config.height()
    }

    pub fn shape(&self) -> GridShape {
        self.config.shape()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines()
    }

    pub fn total_cells(&self) -> CellCount {
        self.config.total_cells()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.config.safe_cells()
    }

    /// All ids in row-major order.
    pub fn ids(&self) -> Range<CellId> {
        0..self.total_cells() as usize
    }

    pub fn validate_id(&self, id: CellId) -> Result<CellId> {
        if self.shape().contains(id) {
            Ok(id)
        } else {
            Err(GameError::OutOfRange {
                id,
                cells: self.total_cells(),
            })
        }
    }

    pub fn cell_at(&self, id: CellId) -> Result<Cell> {
        let id = self.validate_id(id)?;
        Ok(self.cell_unchecked(id))
    }

    pub fn is_mine(&self, id: CellId) -> Result<bool> {
        let id = self.validate_id(id)?;
        Ok(self.mines[self.nd_index(id)])
    }

    pub fn adjacent_count(&self, id: CellId) -> Result<u8> {
        let id = self.validate_id(id)?;
        Ok(self.adjacent[self.nd_index(id)])
    }

    pub fn state(&self, id: CellId) -> Result<CellState> {
        let id = self.validate_id(id)?;
        Ok(self.cells[self.nd_index(id)])
    }

    /// Up to 8 surrounding ids, clipped at the edges.
    pub fn neighbors(&self, id: CellId) -> Result<impl Iterator<Item = CellId> + use<>> {
        let id = self.validate_id(id)?;
        Ok(self.shape().iter_neighbors(id))
    }

    pub fn mine_ids(&self) -> impl Iterator<Item = CellId> + '_ {
        self.ids().filter(|&id| self.mines[self.nd_index(id)])
    }

    pub(crate) fn cell_unchecked(&self, id: CellId) -> Cell {
        let index = self.nd_index(id);
        Cell {
            id,
            is_mine: self.mines[index],
            state: self.cells[index],
            adjacent_mine_count: self.adjacent[index],
        }
    }

    pub(crate) fn set_state(&mut self, id: CellId, state: CellState) {
        let index = self.nd_index(id);
        self.cells[index] = state;
    }

    fn nd_index(&self, id: CellId) -> [usize; 2] {
        self.shape().coords_of(id).to_nd_index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute_force_count(board: &Board, id: CellId) -> u8 {
        let width = board.width() as isize;
        let height = board.height() as isize;
        let (row, col) = ((id as isize) / width, (id as isize) % width);
        let mut count = 0;
        for d_row in -1..=1 {
            for d_col in -1..=1 {
                let (r, c) = (row + d_row, col + d_col);
                if (d_row, d_col) == (0, 0) || r < 0 || c < 0 || r >= height || c >= width {
                    continue;
                }
                if board.is_mine((r * width + c) as usize).unwrap() {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn create_places_exact_mine_count() {
        for seed in 0..16 {
            let board = Board::create(10, 10, 20, seed).unwrap();

            assert_eq!(board.mine_count(), 20);
            assert_eq!(board.mine_ids().count(), 20);
            assert!(board.ids().all(|id| board.state(id) == Ok(CellState::Hidden)));
        }
    }

    #[test]
    fn create_handles_nearly_full_boards() {
        let board = Board::create(30, 30, 899, 3).unwrap();

        assert_eq!(board.mine_ids().count(), 899);
        assert_eq!(board.safe_cell_count(), 1);
    }

    #[test]
    fn create_rejects_bad_configuration_before_building() {
        assert_eq!(
            Board::create(1, 1, 1, 0),
            Err(GameError::InvalidConfiguration(ConfigError::TooManyMines {
                mines: 1,
                cells: 1
            }))
        );
        assert!(Board::create(0, 4, 0, 0).is_err());
    }

    #[test]
    fn adjacency_matches_brute_force_everywhere() {
        for (width, height, mines) in [(10, 10, 20), (7, 3, 10), (1, 9, 4), (12, 1, 5)] {
            for seed in 0..8 {
                let board = Board::create(width, height, mines, seed).unwrap();
                for id in board.ids() {
                    assert_eq!(board.adjacent_count(id).unwrap(), brute_force_count(&board, id));
                }
            }
        }
    }

    #[test]
    fn diagonal_neighbor_of_single_mine_counts_one() {
        let board = Board::from_mine_ids(2, 2, &[0]).unwrap();

        assert_eq!(board.adjacent_count(3), Ok(1));
        assert_eq!(board.adjacent_count(1), Ok(1));
        assert_eq!(board.adjacent_count(0), Ok(0));
        assert_eq!(board.is_mine(0), Ok(true));
    }

    #[test]
    fn cell_at_reports_full_record() {
        let board = Board::from_mine_ids(3, 3, &[4]).unwrap();

        assert_eq!(
            board.cell_at(0),
            Ok(Cell {
                id: 0,
                is_mine: false,
                state: CellState::Hidden,
                adjacent_mine_count: 1,
            })
        );
        assert!(board.cell_at(4).unwrap().is_mine);
    }

    #[test]
    fn queries_reject_ids_off_the_board() {
        let board = Board::from_mine_ids(3, 2, &[]).unwrap();
        let err = GameError::OutOfRange { id: 6, cells: 6 };

        assert_eq!(board.cell_at(6), Err(err));
        assert_eq!(board.is_mine(6), Err(err));
        assert_eq!(board.adjacent_count(6), Err(err));
        assert_eq!(board.state(6), Err(err));
        assert!(board.neighbors(6).is_err());
    }

    #[test]
    fn from_mine_ids_validates_layout() {
        assert_eq!(
            Board::from_mine_ids(2, 2, &[4]),
            Err(GameError::OutOfRange { id: 4, cells: 4 })
        );
        assert!(Board::from_mine_ids(2, 1, &[0, 1]).is_err());
        assert_eq!(Board::from_mine_ids(2, 2, &[1, 1]).unwrap().mine_count(), 1);
    }
}
