//! Command execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. It never
//! mutates the state it is given: every command runs against a clone, and the
//! caller only ever sees the finished value or an error. A refused command
//! therefore leaves the caller's state exactly as it was.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::command::Command;
use crate::config::RulesConfig;
use crate::env::{DiceSource, GameEnv};
use crate::state::GameState;

/// Runs commands against game states with one rule set and die source.
pub struct GameEngine<'a> {
    env: GameEnv<'a>,
}

impl<'a> GameEngine<'a> {
    pub fn new(env: GameEnv<'a>) -> Self {
        Self { env }
    }

    /// Shorthand for `GameEngine::new(GameEnv::new(rules, dice))`.
    pub fn with_dice(rules: &'a RulesConfig, dice: &'a mut dyn DiceSource) -> Self {
        Self::new(GameEnv::new(rules, dice))
    }

    pub fn rules(&self) -> &RulesConfig {
        self.env.rules()
    }

    /// Executes `command` and returns the resulting state.
    pub fn execute(
        &mut self,
        state: &GameState,
        command: &Command,
    ) -> Result<GameState, ExecuteError> {
        let mut next = state.clone();
        match transition::execute_transition(command, &mut next, &mut self.env) {
            Ok(()) => {
                tracing::debug!(
                    command = %command.kind(),
                    phase = %next.at_bat_phase,
                    inning = %next.inning,
                    outs = next.outs,
                    home = next.score.home,
                    away = next.score.away,
                    "command executed"
                );
                Ok(next)
            }
            Err(error) => {
                tracing::debug!(command = %command.kind(), %error, "command rejected");
                Err(error)
            }
        }
    }

    pub fn roll_for_advantage(&mut self, state: &GameState) -> Result<GameState, ExecuteError> {
        self.execute(state, &Command::roll_for_advantage())
    }

    pub fn declare_steals(
        &mut self,
        state: &GameState,
        flags: crate::state::StealFlags,
    ) -> Result<GameState, ExecuteError> {
        self.execute(state, &Command::declare_steals(flags))
    }

    pub fn roll_for_at_bat_result(&mut self, state: &GameState) -> Result<GameState, ExecuteError> {
        self.execute(state, &Command::roll_for_at_bat_result())
    }

    pub fn advance_to_next_at_bat(&mut self, state: &GameState) -> Result<GameState, ExecuteError> {
        self.execute(state, &Command::advance_to_next_at_bat())
    }
}

impl std::fmt::Debug for GameEngine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine").field("env", &self.env).finish()
    }
}
