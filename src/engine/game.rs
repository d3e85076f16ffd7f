use alloc::format;
use rand::Rng;

use crate::{
    engine::{
        common::{GameError, ShotResult},
        config::FLEET,
        grid::Grid,
    },
    player::{AiPlayer, Output, Player},
};

/// Current status of a game, from the human's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// One match between the human and the automated opponent.
///
/// The game owns both grids and the opponent's move queue; all mutation
/// happens through [`Game::human_turn`] and [`Game::opponent_turn`].
pub struct Game {
    player_grid: Grid,
    opponent_grid: Grid,
    opponent: AiPlayer,
    reveal_opponent: bool,
}

impl Game {
    /// Set up a new game: random fleets on both grids and a shuffled move
    /// queue for the opponent, all drawn from `rng`.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, GameError> {
        let mut player_grid = Grid::new();
        player_grid.place_fleet_randomly(rng, &FLEET)?;
        let mut opponent_grid = Grid::new();
        opponent_grid.place_fleet_randomly(rng, &FLEET)?;
        let opponent = AiPlayer::new(rng);
        Ok(Self::from_parts(player_grid, opponent_grid, opponent))
    }

    /// Assemble a game from prepared grids and an opponent.
    pub fn from_parts(player_grid: Grid, opponent_grid: Grid, opponent: AiPlayer) -> Self {
        Self {
            player_grid,
            opponent_grid,
            opponent,
            reveal_opponent: false,
        }
    }

    /// Show the opponent's undiscovered vessels when rendering.
    pub fn reveal_opponent(mut self, reveal: bool) -> Self {
        self.reveal_opponent = reveal;
        self
    }

    /// The human's own grid, fired at by the opponent.
    pub fn player_grid(&self) -> &Grid {
        &self.player_grid
    }

    /// The opponent's grid, fired at by the human.
    pub fn opponent_grid(&self) -> &Grid {
        &self.opponent_grid
    }

    /// Shots the opponent has not used yet.
    pub fn opponent_moves_remaining(&self) -> usize {
        self.opponent.moves_remaining()
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.opponent_grid.is_fleet_destroyed() {
            GameStatus::Won
        } else if self.player_grid.is_fleet_destroyed() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Both boards as shown to the human before each of their shots.
    pub fn render_boards(&self) -> alloc::string::String {
        format!(
            "Your board:\n{}\n\nOpponent's board:\n{}",
            self.player_grid.render(true),
            self.opponent_grid.render(self.reveal_opponent)
        )
    }

    /// Ask `human` for targets until one is accepted by the opponent's grid.
    /// Rejected shots are reported to `output` and do not end the turn.
    pub fn human_turn(
        &mut self,
        human: &mut dyn Player,
        output: &mut dyn Output,
    ) -> Result<ShotResult, GameError> {
        loop {
            let target = human.select_target()?;
            match self.opponent_grid.fire_at(target) {
                Ok(result) => {
                    log::debug!("human fired at {}: {:?}", target, result);
                    output.render(if result.is_hit() { "Hit!" } else { "Miss!" });
                    if result == ShotResult::Sunk {
                        output.render("Vessel destroyed!");
                    }
                    return Ok(result);
                }
                Err(err @ (GameError::OutOfBounds(_) | GameError::DuplicateShot(_))) => {
                    log::warn!("rejected human shot: {}", err);
                    output.render(&format!("{}", err));
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Fire the opponent's next queued shot at the human's grid.
    ///
    /// The queue only holds distinct in-bounds coordinates, so any error here
    /// is a bug and is returned rather than retried.
    pub fn opponent_turn(&mut self, output: &mut dyn Output) -> Result<ShotResult, GameError> {
        let target = self.opponent.select_target()?;
        let result = self.player_grid.fire_at(target)?;
        log::debug!("opponent fired at {}: {:?}", target, result);
        output.render(&format!("The opponent fires at {}", target));
        output.render(if result.is_hit() {
            "The opponent hit!"
        } else {
            "The opponent missed!"
        });
        if result == ShotResult::Sunk {
            output.render("Vessel destroyed!");
        }
        Ok(result)
    }

    /// Alternate human and opponent half-turns until one fleet is destroyed.
    pub fn play(
        &mut self,
        human: &mut dyn Player,
        output: &mut dyn Output,
    ) -> Result<GameStatus, GameError> {
        loop {
            match self.status() {
                GameStatus::InProgress => {}
                finished => return Ok(finished),
            }

            output.render(&self.render_boards());
            self.human_turn(human, output)?;
            if self.opponent_grid.is_fleet_destroyed() {
                log::info!("human won after {} shots", self.opponent_grid.shots_fired());
                output.render("You win!");
                return Ok(GameStatus::Won);
            }

            self.opponent_turn(output)?;
            if self.player_grid.is_fleet_destroyed() {
                log::info!("opponent won after {} shots", self.player_grid.shots_fired());
                output.render("The opponent wins!");
                return Ok(GameStatus::Lost);
            }
        }
    }
}
