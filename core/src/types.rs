use core::ops::RangeInclusive;
use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Row-major cell index, `row * width + col`.
pub type CellId = usize;

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

/// Converts between row-major ids and `(row, col)` for a board `width` cells wide.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridShape {
    pub width: Coord,
    pub height: Coord,
}

impl GridShape {
    pub const fn new(width: Coord, height: Coord) -> Self {
        Self { width, height }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub const fn contains(&self, id: CellId) -> bool {
        id < self.total_cells() as usize
    }

    /// Caller guarantees `id` is on the board.
    pub const fn coords_of(&self, id: CellId) -> Coord2 {
        let width = self.width as usize;
        ((id / width) as Coord, (id % width) as Coord)
    }

    pub const fn id_of(&self, (row, col): Coord2) -> CellId {
        row as usize * self.width as usize + col as usize
    }

    /// Array dimensions in `(rows, cols)` order.
    pub const fn nd_dim(&self) -> [usize; 2] {
        [self.height as usize, self.width as usize]
    }

    /// 8-directional neighbors of `id` in row-major order, clipped at the edges with no
    /// wraparound.
    pub fn iter_neighbors(&self, id: CellId) -> impl Iterator<Item = CellId> + use<> {
        let shape = *self;
        let center = self.coords_of(id);
        let rows = clamped_span(center.0, self.height);
        let cols = clamped_span(center.1, self.width);

        rows.flat_map(move |row| cols.clone().map(move |col| (row, col)))
            .filter(move |&coords| coords != center)
            .map(move |coords| shape.id_of(coords))
    }
}

/// `at - 1 ..= at + 1`, cut down to `0..len`.
fn clamped_span(at: Coord, len: Coord) -> RangeInclusive<Coord> {
    at.saturating_sub(1)..=at.saturating_add(1).min(len.saturating_sub(1))
}
