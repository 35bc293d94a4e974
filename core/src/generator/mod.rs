use alloc::vec::Vec;

use crate::*;
pub use random::*;

mod random;

/// Produces a fully mined board for a configuration.
pub trait MineGenerator {
    fn generate(self, config: &GameConfig) -> Result<Board>;
}

/// Lays mines exactly where asked, used to replay or force a layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedMineGenerator {
    mines: Vec<Coord2>,
}

impl FixedMineGenerator {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl MineGenerator for FixedMineGenerator {
    fn generate(self, config: &GameConfig) -> Result<Board> {
        config.validate()?;
        let board = Board::from_mine_coords(config.size(), &self.mines)?
            .with_neighborhood(config.neighborhood);

        if board.mine_count() != config.mines {
            log::warn!(
                "Fixed layout has {} distinct mines, configuration asks for {}",
                board.mine_count(),
                config.mines
            );
            return Err(GameError::InvalidConfiguration {
                rows: config.rows,
                cols: config.cols,
                mines: board.mine_count(),
            });
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_generator_honors_config_rules() {
        let config = GameConfig::new(1, 2, 1)
            .unwrap()
            .with_neighborhood(Neighborhood::WithCenter);
        let board = FixedMineGenerator::new([(0, 1)]).generate(&config).unwrap();

        assert_eq!(board.neighborhood(), Neighborhood::WithCenter);
        assert_eq!(board.count_adjacent_mines((0, 1)), Ok(1));
        assert_eq!(board.count_adjacent_mines((0, 0)), Ok(1));
    }

    #[test]
    fn fixed_generator_rejects_count_mismatch() {
        let config = GameConfig::new(2, 2, 2).unwrap();

        assert_eq!(
            FixedMineGenerator::new([(0, 0)]).generate(&config),
            Err(GameError::InvalidConfiguration {
                rows: 2,
                cols: 2,
                mines: 1
            })
        );
    }
}
