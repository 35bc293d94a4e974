#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;
pub use view::*;

mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod types;
mod view;

/// Whether a flag protects its cell from being revealed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlagPolicy {
    /// Flags are a visual note only; revealing a flagged cell clears the flag.
    #[default]
    Cosmetic,
    /// Flagged cells ignore reveals and stop the cascade.
    BlockReveal,
}

/// Session parameters: board size, mine count and the two rule toggles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
    pub neighborhood: Neighborhood,
    pub flag_policy: FlagPolicy,
}

impl GameConfig {
    pub const CLASSIC: Self = Self::new_unchecked(8, 8, 10);

    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self {
            rows,
            cols,
            mines,
            neighborhood: Neighborhood::Moore,
            flag_policy: FlagPolicy::Cosmetic,
        }
    }

    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(rows, cols, mines);
        config.validate()?;
        Ok(config)
    }

    pub const fn with_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    pub const fn with_flag_policy(mut self, flag_policy: FlagPolicy) -> Self {
        self.flag_policy = flag_policy;
        self
    }

    /// At least one cell, and at least one cell left without a mine.
    pub fn validate(&self) -> Result<()> {
        check_fits(self.rows, self.cols, self.mines)
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }

    /// Fraction of the board covered by mines.
    pub fn density(&self) -> f32 {
        match self.total_cells() {
            0 => 0.0,
            total => f32::from(self.mines) / f32::from(total),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}

pub(crate) fn check_fits(rows: Coord, cols: Coord, mines: CellCount) -> Result<()> {
    if rows == 0 || cols == 0 || mines >= mult(rows, cols) {
        Err(GameError::InvalidConfiguration { rows, cols, mines })
    } else {
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::HitMine | Self::Won)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_classic_board() {
        let config = GameConfig::default();

        assert_eq!(config.size(), (8, 8));
        assert_eq!(config.mines, 10);
        assert_eq!(config.safe_cell_count(), 54);
        assert_eq!(config.neighborhood, Neighborhood::Moore);
        assert_eq!(config.flag_policy, FlagPolicy::Cosmetic);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_rejects_boards_without_safe_cells() {
        assert_eq!(
            GameConfig::new(3, 3, 9),
            Err(GameError::InvalidConfiguration {
                rows: 3,
                cols: 3,
                mines: 9
            })
        );
        assert!(GameConfig::new(3, 3, 8).is_ok());
        assert!(GameConfig::new(3, 3, 0).is_ok());
    }

    #[test]
    fn config_rejects_empty_boards() {
        assert!(GameConfig::new(0, 5, 0).is_err());
        assert!(GameConfig::new(5, 0, 0).is_err());
    }

    #[test]
    fn largest_board_does_not_saturate() {
        let config = GameConfig::new(Coord::MAX, Coord::MAX, 1).unwrap();

        assert_eq!(config.total_cells(), 65025);
    }

    #[test]
    fn config_fills_missing_fields_from_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"mines": 3}"#).unwrap();

        assert_eq!(config.size(), (8, 8));
        assert_eq!(config.mines, 3);
        assert_eq!(config.flag_policy, FlagPolicy::Cosmetic);

        let config: GameConfig =
            serde_json::from_str(r#"{"neighborhood": "with-center", "flag_policy": "block-reveal"}"#)
                .unwrap();
        assert_eq!(config.neighborhood, Neighborhood::WithCenter);
        assert_eq!(config.flag_policy, FlagPolicy::BlockReveal);
    }
}
