use crate::env::GameEnv;
use crate::rules::next_batter_index;
use crate::state::{AtBatPhase, GameState};

use super::{AtBatError, CommandKind, CommandTransition, check_invariants, expect_phase};

/// Clears the finished at-bat and brings up the next batter.
///
/// A no-op while the next at-bat has not started (`firstRoll`). When the play
/// closed the half-inning the lineup has already been reset, so the index is
/// left alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdvanceToNextAtBat;

impl CommandTransition for AdvanceToNextAtBat {
    type Error = AtBatError;

    fn kind(&self) -> CommandKind {
        CommandKind::AdvanceToNextAtBat
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        expect_phase(
            state,
            self.kind(),
            &[AtBatPhase::FirstRoll, AtBatPhase::Completed],
        )
    }

    fn apply(&self, state: &mut GameState, _env: &mut GameEnv<'_>) -> Result<(), Self::Error> {
        if state.at_bat_phase == AtBatPhase::FirstRoll {
            return Ok(());
        }

        let inning_ended = state
            .last_play
            .as_ref()
            .is_some_and(|play| play.inning_ended);
        if !inning_ended {
            let len = state.batters(state.batting_team).len();
            state.current_batter_index = next_batter_index(state.current_batter_index, len);
        }

        state.at_bat_phase = AtBatPhase::FirstRoll;
        state.current_advantage = None;
        state.last_roll1 = None;
        state.last_roll2 = None;
        state.last_play = None;
        state.pending_steals = Default::default();

        let line = state
            .current_batter()
            .map(|batter| format!("{} steps up to the plate.", batter.card.name));
        if let Some(line) = line {
            state.log(line);
        }
        Ok(())
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        check_invariants(state)
    }
}
