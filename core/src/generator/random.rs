use super::*;

/// Uniformly random placement, reproducible from `seed`.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn place_mines(self, config: GameConfig, mask: &mut Array2<bool>) {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines_left = config.mines();
        let mut cells_left = config.total_cells();

        // selection sampling: one pass, every cell is a mine with odds mines_left / cells_left
        for cell in mask.iter_mut() {
            if mines_left == 0 {
                break;
            }
            if rng.random_ratio(mines_left, cells_left) {
                *cell = true;
                mines_left -= 1;
            }
            cells_left -= 1;
        }

        log::debug!(
            "Placed {} mines on {}x{} with seed {}",
            config.mines() - mines_left,
            config.width(),
            config.height(),
            self.seed
        );
    }
}
