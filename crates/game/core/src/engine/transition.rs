//! Command transition dispatch and execution logic.

use crate::command::{Command, CommandTransition};
use crate::env::GameEnv;
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Roll and mutate the game state
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    env: &mut GameEnv<'_>,
) -> Result<(), TransitionPhaseError<T::Error>>
where
    T: CommandTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))
}

/// Routes each command to its transition.
///
/// This is the internal implementation used by `GameEngine::execute()`.
pub(super) fn execute_transition(
    command: &Command,
    state: &mut GameState,
    env: &mut GameEnv<'_>,
) -> Result<(), ExecuteError> {
    match command {
        Command::RollForAdvantage(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::RollForAdvantage)
        }
        Command::DeclareSteals(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::DeclareSteals)
        }
        Command::RollForAtBatResult(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::RollForAtBatResult)
        }
        Command::AdvanceToNextAtBat(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::AdvanceToNextAtBat)
        }
    }
}
