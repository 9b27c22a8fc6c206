//! Automated solo play.
//!
//! Drives a [`GameEngine`] through whole at-bats until the requested number
//! of half-innings has been completed.

use showdown_core::{ExecuteError, GameEngine, GameState, RulesConfig, Station, StealFlags};

/// Speed a runner needs above the rule set's default before the auto-steal
/// policy sends them.
const AUTO_STEAL_MARGIN: u32 = 3;

#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error(transparent)]
    Engine(#[from] ExecuteError),

    #[error("no half-inning ended after {at_bats} at-bats")]
    Stalled { at_bats: usize },
}

#[derive(Clone, Copy, Debug)]
pub struct SimOptions {
    pub half_innings: u32,
    pub auto_steal: bool,
    /// Hard stop for games whose charts never produce outs.
    pub max_at_bats: usize,
}

impl SimOptions {
    pub const DEFAULT_MAX_AT_BATS: usize = 2_000;

    pub fn new(half_innings: u32, auto_steal: bool) -> Self {
        Self {
            half_innings,
            auto_steal,
            max_at_bats: Self::DEFAULT_MAX_AT_BATS,
        }
    }
}

/// Plays at-bats until `options.half_innings` half-innings are over.
///
/// Every new game log line is handed to `on_line` as soon as it is written.
pub fn play(
    engine: &mut GameEngine<'_>,
    mut state: GameState,
    options: SimOptions,
    mut on_line: impl FnMut(&str),
) -> Result<GameState, SimError> {
    let mut printed = 0;
    let mut completed = 0;
    let mut at_bats = 0;

    let mut flush = |state: &GameState, printed: &mut usize| {
        for line in &state.game_log[*printed..] {
            on_line(line.as_str());
        }
        *printed = state.game_log.len();
    };
    flush(&state, &mut printed);

    while completed < options.half_innings {
        if at_bats >= options.max_at_bats {
            return Err(SimError::Stalled { at_bats });
        }

        if options.auto_steal {
            let flags = steal_policy(&state, engine.rules());
            if !flags.is_empty() {
                state = engine.declare_steals(&state, flags)?;
            }
        }
        state = engine.roll_for_advantage(&state)?;
        state = engine.roll_for_at_bat_result(&state)?;
        at_bats += 1;

        if let Some(play) = &state.last_play {
            tracing::info!(
                inning = %state.inning,
                batter = %play.batter,
                outcome = %play.outcome.outcome,
                runs = play.runs_scored,
                outs = play.outs_recorded,
                "at-bat complete"
            );
            if play.inning_ended {
                completed += 1;
            }
        }

        state = engine.advance_to_next_at_bat(&state)?;
        flush(&state, &mut printed);
    }

    Ok(state)
}

/// Runners quick enough to run, provided the bag ahead is open and fewer than
/// two are out.
pub fn steal_policy(state: &GameState, rules: &RulesConfig) -> StealFlags {
    if state.outs >= 2 {
        return StealFlags::empty();
    }
    let bases = state.batting_bases();
    let threshold = rules.default_speed + AUTO_STEAL_MARGIN;

    bases
        .runners()
        .filter(|(base, runner)| {
            let open = match base.next() {
                Station::Base(target) => !bases.is_occupied(target),
                _ => false,
            };
            open && runner.speed_or(rules.default_speed) >= threshold
        })
        .fold(StealFlags::empty(), |flags, (base, _)| flags | base.flag())
}
