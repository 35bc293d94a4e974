use rand::{SeedableRng, rngs::SmallRng};

use super::*;

/// Rejection sampling past this density starts wasting a noticeable share of draws.
const DENSE_BOARD: f32 = 0.5;

/// Uniformly random placement driven by a seeded RNG, so a seed replays the same board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: &GameConfig) -> Result<Board> {
        config.validate()?;

        if config.density() > DENSE_BOARD {
            log::warn!(
                "Dense board requested, {} mines on {} cells, placement will need many redraws",
                config.mines,
                config.total_cells()
            );
        }
        log::debug!(
            "Generating {}x{} board with {} mines from seed {}",
            config.rows,
            config.cols,
            config.mines,
            self.seed
        );

        let mut rng = SmallRng::seed_from_u64(self.seed);
        Board::new(config, &mut rng)
    }
}
