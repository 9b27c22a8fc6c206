//! At-bat commands.
//!
//! Each command is a small value implementing [`CommandTransition`]. The
//! engine drives every command through the same three stages:
//!
//! - `pre_validate`: phase and roster preconditions, checked on the state
//!   **before** mutation
//! - `apply`: rolls dice and rewrites the (cloned) state
//! - `post_validate`: state invariants, checked **after** mutation
//!
//! # Module Structure
//!
//! - `error`: [`AtBatError`], shared by every command
//! - `advantage`: [`RollForAdvantage`] (`firstRoll` → `secondRoll`)
//! - `steal`: [`DeclareSteals`], the optional pre-roll steal declaration
//! - `result`: [`RollForAtBatResult`] (`secondRoll` → `completed`)
//! - `advance`: [`AdvanceToNextAtBat`] (`completed` → `firstRoll`)

mod advance;
mod advantage;
mod error;
mod result;
mod steal;

pub use advance::AdvanceToNextAtBat;
pub use advantage::RollForAdvantage;
pub use error::AtBatError;
pub use result::RollForAtBatResult;
pub use steal::DeclareSteals;

use crate::card::{BatterStats, PitcherStats, Role};
use crate::config::RulesConfig;
use crate::env::GameEnv;
use crate::state::{AtBatPhase, GameState, LineupCard, PitcherCard, StealFlags};

/// Defines how a command rewrites the game state.
pub trait CommandTransition {
    type Error;

    fn kind(&self) -> CommandKind;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the command by mutating the game state directly. Implementations
    /// may assume that `pre_validate` has already run successfully.
    fn apply(&self, state: &mut GameState, env: &mut GameEnv<'_>) -> Result<(), Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Command discriminant, used in errors and traces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case")]
pub enum CommandKind {
    RollForAdvantage,
    DeclareSteals,
    RollForAtBatResult,
    AdvanceToNextAtBat,
}

/// Everything a driver can ask the engine to do.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    RollForAdvantage(RollForAdvantage),
    DeclareSteals(DeclareSteals),
    RollForAtBatResult(RollForAtBatResult),
    AdvanceToNextAtBat(AdvanceToNextAtBat),
}

impl Command {
    pub fn roll_for_advantage() -> Self {
        Self::RollForAdvantage(RollForAdvantage)
    }

    pub fn declare_steals(flags: StealFlags) -> Self {
        Self::DeclareSteals(DeclareSteals::new(flags))
    }

    pub fn roll_for_at_bat_result() -> Self {
        Self::RollForAtBatResult(RollForAtBatResult)
    }

    pub fn advance_to_next_at_bat() -> Self {
        Self::AdvanceToNextAtBat(AdvanceToNextAtBat)
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Command::RollForAdvantage(command) => command.kind(),
            Command::DeclareSteals(command) => command.kind(),
            Command::RollForAtBatResult(command) => command.kind(),
            Command::AdvanceToNextAtBat(command) => command.kind(),
        }
    }
}

/// Current batter and the pitcher facing them, with their ratings.
struct Matchup<'s> {
    batter: &'s LineupCard,
    batter_stats: &'s BatterStats,
    pitcher: &'s PitcherCard,
    pitcher_stats: &'s PitcherStats,
}

fn matchup(state: &GameState) -> Result<Matchup<'_>, AtBatError> {
    let side = state.batting_team;
    let batter = state.current_batter().ok_or(AtBatError::MissingBatter {
        side,
        index: state.current_batter_index,
    })?;
    let batter_stats = batter
        .card
        .batter_stats()
        .ok_or_else(|| AtBatError::RoleMismatch {
            id: batter.card.id.clone(),
            expected: Role::Batter,
        })?;

    let pitcher = state.current_pitcher().ok_or(AtBatError::MissingPitcher {
        side: side.opponent(),
    })?;
    let pitcher_stats = pitcher
        .card
        .pitcher_stats()
        .ok_or_else(|| AtBatError::RoleMismatch {
            id: pitcher.card.id.clone(),
            expected: Role::Pitcher,
        })?;

    Ok(Matchup {
        batter,
        batter_stats,
        pitcher,
        pitcher_stats,
    })
}

fn expect_phase(
    state: &GameState,
    command: CommandKind,
    allowed: &[AtBatPhase],
) -> Result<(), AtBatError> {
    if allowed.contains(&state.at_bat_phase) {
        Ok(())
    } else {
        Err(AtBatError::PhaseMismatch {
            command,
            actual: state.at_bat_phase,
        })
    }
}

/// Invariants every command must leave intact.
fn check_invariants(state: &GameState) -> Result<(), AtBatError> {
    if state.outs >= RulesConfig::OUTS_PER_HALF {
        return Err(AtBatError::OutsOverflow { outs: state.outs });
    }
    let side = state.batting_team;
    let len = state.batters(side).len();
    if len > 0 && state.current_batter_index >= len {
        return Err(AtBatError::BatterIndexOutOfRange {
            side,
            index: state.current_batter_index,
            len,
        });
    }
    Ok(())
}
