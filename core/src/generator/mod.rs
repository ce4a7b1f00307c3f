use ndarray::Array2;

use crate::GameConfig;
pub use random::*;

mod random;

/// Decides where the mines of a new board go.
pub trait MinefieldGenerator {
    /// Marks mine cells in `mask`, a `(height, width)` array that starts out all `false`.
    fn place_mines(self, config: GameConfig, mask: &mut Array2<bool>);
}
