use alloc::collections::VecDeque;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameState {
    /// Indicates the game has ended and no moves are accepted anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A game session: the board plus every counter a frontend needs to render it.
///
/// Reaching [`GameState::Won`] or [`GameState::Lost`] is reported through the
/// returned [`RevealOutcome`] and [`Game::state`]; afterwards input is ignored
/// and it is up to the host to start a new session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    flag_policy: FlagPolicy,
    state: GameState,
    move_count: u32,
    revealed_count: CellCount,
    flagged_count: CellCount,
    detonated: Option<Coord2>,
}

impl Game {
    /// Starts a session on a random board built from `seed`.
    pub fn new(config: &GameConfig, seed: u64) -> Result<Self> {
        Self::from_generator(config, RandomMineGenerator::new(seed))
    }

    pub fn from_generator<G: MineGenerator>(config: &GameConfig, generator: G) -> Result<Self> {
        let board = generator.generate(config)?;
        Ok(Self::with_board(board, config.flag_policy))
    }

    /// Wraps an existing board, picking up whatever it already has revealed or flagged.
    ///
    /// A revealed mine resumes as [`GameState::Lost`], with the detonated cell
    /// recorded only when it is the single revealed mine. A board with every
    /// safe cell open resumes as [`GameState::Won`].
    pub fn with_board(board: Board, flag_policy: FlagPolicy) -> Self {
        let mut revealed_count = 0;
        let mut flagged_count = 0;
        let mut revealed_mines = 0;
        let mut last_revealed_mine = None;
        for coords in board.coords() {
            let cell = board[coords];
            if cell.is_revealed() {
                if cell.has_mine() {
                    revealed_mines += 1;
                    last_revealed_mine = Some(coords);
                } else {
                    revealed_count += 1;
                }
            }
            if cell.is_flagged() && cell.is_hidden() {
                flagged_count += 1;
            }
        }

        let (state, detonated) = if revealed_mines > 0 {
            let detonated = if revealed_mines == 1 {
                last_revealed_mine
            } else {
                None
            };
            (GameState::Lost, detonated)
        } else if revealed_count == board.safe_cell_count() {
            (GameState::Won, None)
        } else {
            (GameState::InProgress, None)
        };
        if state.is_finished() {
            log::debug!("Resumed a board that already ended: {:?}", state);
        }

        Self {
            board,
            flag_policy,
            state,
            move_count: 0,
            revealed_count,
            flagged_count,
            detonated,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn is_won(&self) -> bool {
        matches!(self.state, GameState::Won)
    }

    pub fn is_lost(&self) -> bool {
        matches!(self.state, GameState::Lost)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rows(&self) -> Coord {
        self.board.rows()
    }

    pub fn cols(&self) -> Coord {
        self.board.cols()
    }

    pub fn flag_policy(&self) -> FlagPolicy {
        self.flag_policy
    }

    /// Reveals that opened at least one hidden safe cell; this is the player's score.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Safe cells opened during play.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    /// How many mines have not been flagged yet, negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        (self.board.mine_count() as isize) - (self.flagged_count as isize)
    }

    pub fn detonated(&self) -> Option<Coord2> {
        self.detonated
    }

    pub fn cell_view(&self, coords: Coord2) -> Result<CellView> {
        let cell = self.board.cell(coords)?;
        Ok(CellView::of(cell, self.detonated == Some(coords)))
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.board.validate_coords(coords)?;

        if self.state.is_finished() {
            log::debug!("Ignoring flag at {:?}, game already ended", coords);
            return Ok(MarkOutcome::NoChange);
        }

        let cell = &mut self.board[coords];
        if cell.is_revealed() {
            return Ok(MarkOutcome::NoChange);
        }

        if cell.is_flagged() {
            cell.set_flagged(false);
            self.flagged_count -= 1;
        } else {
            cell.set_flagged(true);
            self.flagged_count += 1;
        }
        Ok(MarkOutcome::Changed)
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;

        if self.state.is_finished() {
            log::debug!("Ignoring reveal at {:?}, game already ended", coords);
            return Ok(RevealOutcome::NoChange);
        }

        let cell = self.board[coords];
        if cell.is_revealed() {
            return Ok(RevealOutcome::NoChange);
        }
        if cell.is_flagged() && self.flag_policy == FlagPolicy::BlockReveal {
            log::debug!("Reveal at {:?} blocked by flag", coords);
            return Ok(RevealOutcome::NoChange);
        }

        if cell.has_mine() {
            self.detonate(coords);
            return Ok(RevealOutcome::HitMine);
        }

        self.move_count += 1;
        self.flood_reveal(coords);

        if self.revealed_count == self.board.safe_cell_count() {
            self.state = GameState::Won;
            log::info!("Board cleared in {} moves", self.move_count);
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    /// Breadth-first disclosure starting at a safe cell.
    ///
    /// Zero cells enqueue their whole neighborhood; numbered cells stop the
    /// cascade. A zero cell has no mined neighbor, so mines are never reached.
    /// Revisits are possible through overlapping neighborhoods and are
    /// skipped by the already-revealed check in `open_cell`.
    fn flood_reveal(&mut self, start: Coord2) {
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            if !self.open_cell(coords) {
                continue;
            }

            if self.board[coords].adjacent_mine_count() == 0 {
                to_visit.extend(
                    self.board
                        .neighbors(coords)
                        .filter(|&pos| self.board[pos].is_hidden()),
                );
            }
        }
    }

    /// Marks one hidden safe cell revealed, returning whether anything changed.
    fn open_cell(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.board[coords];
        debug_assert!(!cell.has_mine(), "cascade reached a mine at {coords:?}");

        if cell.is_revealed() {
            return false;
        }
        if cell.is_flagged() {
            match self.flag_policy {
                FlagPolicy::BlockReveal => return false,
                FlagPolicy::Cosmetic => {
                    cell.set_flagged(false);
                    self.flagged_count -= 1;
                }
            }
        }

        cell.set_revealed(true);
        self.revealed_count += 1;
        log::trace!(
            "Opened {:?} with {} adjacent mines",
            coords,
            cell.adjacent_mine_count()
        );
        true
    }

    /// Loses the game and discloses the whole solution.
    fn detonate(&mut self, coords: Coord2) {
        self.state = GameState::Lost;
        self.detonated = Some(coords);

        for pos in self.board.coords() {
            self.board[pos].set_revealed(true);
        }
        log::info!(
            "Mine hit at {:?} after {} moves, game lost",
            coords,
            self.move_count
        );
    }
}
