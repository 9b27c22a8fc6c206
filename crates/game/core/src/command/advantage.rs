use crate::env::GameEnv;
use crate::rules::{effective_control, pitcher_score, resolve_advantage};
use crate::state::{AtBatPhase, GameState};

use super::{AtBatError, CommandKind, CommandTransition, check_invariants, expect_phase, matchup};

/// Rolls the pitch: pitcher control plus a die against the batter's on-base.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollForAdvantage;

impl CommandTransition for RollForAdvantage {
    type Error = AtBatError;

    fn kind(&self) -> CommandKind {
        CommandKind::RollForAdvantage
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        expect_phase(state, self.kind(), &[AtBatPhase::FirstRoll])?;
        matchup(state).map(|_| ())
    }

    fn apply(&self, state: &mut GameState, env: &mut GameEnv<'_>) -> Result<(), Self::Error> {
        let matchup = matchup(state)?;
        let control = effective_control(
            matchup.pitcher_stats,
            matchup.pitcher.workload,
            env.rules(),
        );
        let on_base = matchup
            .batter_stats
            .on_base_against(matchup.pitcher.card.handedness);

        let roll = env.roll();
        let advantage = resolve_advantage(roll, control, on_base);
        let line = format!(
            "{} pitches to {}. You roll a {}. Pitcher's score: {}, Batter's On-Base: {}. It is a {}'s advantage!",
            matchup.pitcher.card.name,
            matchup.batter.card.name,
            roll,
            pitcher_score(roll, control),
            on_base,
            advantage,
        );

        tracing::debug!(roll, control, on_base, %advantage, "advantage rolled");

        state.at_bat_phase = AtBatPhase::SecondRoll;
        state.current_advantage = Some(advantage);
        state.last_roll1 = Some(roll);
        state.last_roll2 = None;
        state.last_play = None;
        state.log(line);
        Ok(())
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        check_invariants(state)
    }
}
