use std::fmt::Write as _;

use crate::card::{PlayerCard, Side};
use crate::config::RulesConfig;
use crate::env::GameEnv;
use crate::rules::{
    Advantage, FieldingContext, OutKind, PlayKind, advance, charge_outs, close_half_inning,
    resolve_out, resolve_outcome, resolve_steals,
};
use crate::state::{
    AtBatPhase, Base, Bases, FieldingAttempt, GameState, LastPlay, Runner, RunnerMovement,
    StealAttempt,
};

use super::{AtBatError, CommandKind, CommandTransition, check_invariants, expect_phase, matchup};

/// Rolls against the card in use and plays the result out.
///
/// Order within the play: chart lookup, flagged steals (strikeouts only),
/// fielding or base running, scoring, stickers, pitcher workload, and finally
/// the half-inning check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollForAtBatResult;

/// Running totals while a play is resolved.
#[derive(Default)]
struct PlayTally {
    bases: Bases,
    outs_recorded: u8,
    runs: u32,
    movements: Vec<RunnerMovement>,
    steal_attempts: Vec<StealAttempt>,
    fielding_attempt: Option<FieldingAttempt>,
}

impl CommandTransition for RollForAtBatResult {
    type Error = AtBatError;

    fn kind(&self) -> CommandKind {
        CommandKind::RollForAtBatResult
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        expect_phase(state, self.kind(), &[AtBatPhase::SecondRoll])?;
        state
            .current_advantage
            .ok_or(AtBatError::MissingAdvantage)?;
        matchup(state).map(|_| ())
    }

    fn apply(&self, state: &mut GameState, env: &mut GameEnv<'_>) -> Result<(), Self::Error> {
        let advantage = state
            .current_advantage
            .ok_or(AtBatError::MissingAdvantage)?;
        let (batter, pitcher) = {
            let matchup = matchup(state)?;
            (matchup.batter.card.clone(), matchup.pitcher.card.clone())
        };
        let batting = state.batting_team;
        let fielding = batting.opponent();
        let outs_before = state.outs;
        let default_speed = env.rules().default_speed;

        let card_in_use = match advantage {
            Advantage::Pitcher => &pitcher,
            Advantage::Batter => &batter,
        };
        let roll = env.roll();
        let outcome = resolve_outcome(roll, &card_in_use.chart);
        let play_kind = outcome.play_kind();
        let mut line = format!(
            "{} rolls a {} against {}'s card ({}'s advantage). Result: {}",
            batter.name, roll, card_in_use.name, advantage, outcome.text
        );

        let mut tally = PlayTally {
            bases: state.bases[batting].clone(),
            ..PlayTally::default()
        };

        let steals = std::mem::take(&mut state.pending_steals);
        if !steals.is_empty() {
            if play_kind == PlayKind::Out(OutKind::Strikeout) {
                let stolen = resolve_steals(&tally.bases, steals, outs_before, env);
                for attempt in &stolen.attempts {
                    describe_steal(&mut line, &tally.bases, attempt);
                }
                tally.bases = stolen.bases;
                tally.outs_recorded += stolen.outs_recorded;
                tally.runs += stolen.runs;
                tally.movements.extend(stolen.movements);
                tally.steal_attempts = stolen.attempts;
            } else {
                line.push_str(" The runners hold.");
            }
        }

        let batter_runner = Runner::from_card(&batter);
        match play_kind {
            PlayKind::Advance(kind) => {
                let advanced = advance(&tally.bases, kind, batter_runner);
                tally.bases = advanced.bases;
                tally.runs += advanced.runs;
                tally.movements.extend(advanced.movements);
            }
            PlayKind::Out(kind) => {
                let ctx = FieldingContext {
                    outs: outs_before + tally.outs_recorded,
                    infield_sum: state.infield_fielding_sum(fielding),
                    batter_speed: batter_runner.speed_or(default_speed),
                };
                let forced = tally.bases.get(Base::First).map(|runner| runner.name.clone());
                let fielded = resolve_out(kind, &tally.bases, &batter_runner, ctx, env);
                if let Some(attempt) = &fielded.attempt {
                    describe_contest(&mut line, &batter, forced.as_deref(), attempt);
                }
                tally.bases = fielded.bases;
                tally.outs_recorded += fielded.outs_recorded;
                tally.runs += fielded.runs;
                tally.movements.extend(fielded.movements);
                tally.fielding_attempt = fielded.attempt;
            }
        }

        // Outs past the third are not recorded.
        let outs_after = (outs_before + tally.outs_recorded).min(RulesConfig::OUTS_PER_HALF);
        let outs_recorded = outs_after - outs_before;
        let inning_ending = outs_after >= RulesConfig::OUTS_PER_HALF;

        if inning_ending && tally.runs > 0 {
            line.push_str(" The third out comes first, no runs count.");
            tally.runs = 0;
        } else if tally.runs == 1 {
            line.push_str(" 1 run scores.");
        } else if tally.runs > 1 {
            let _ = write!(line, " {} runs score.", tally.runs);
        }

        state.score[batting] += tally.runs;
        state.bases[batting] = tally.bases;
        state.outs = outs_after;

        if let Some(sticker) = outcome.sticker.clone() {
            award_sticker(state, advantage, batting, sticker);
        }
        charge_outs(state, fielding, outs_recorded);

        let ended = close_half_inning(state);
        if let Some(side) = ended {
            let _ = write!(line, " Inning over! The {side} team is done batting.");
        }

        tracing::debug!(
            roll,
            %advantage,
            outcome = %outcome.outcome,
            outs_recorded,
            runs = tally.runs,
            inning_ended = ended.is_some(),
            "at-bat resolved"
        );

        state.at_bat_phase = AtBatPhase::Completed;
        state.last_roll2 = Some(roll);
        state.last_play = Some(LastPlay {
            batter: batter.id.clone(),
            advantage,
            card_in_use: card_in_use.id.clone(),
            outcome,
            runner_movements: tally.movements,
            steal_attempts: tally.steal_attempts,
            fielding_attempt: tally.fielding_attempt,
            outs_recorded,
            runs_scored: tally.runs,
            inning_ended: ended.is_some(),
        });
        state.log(line);
        Ok(())
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        check_invariants(state)
    }
}

/// Stickers go to whoever owns the card in use.
fn award_sticker(
    state: &mut GameState,
    advantage: Advantage,
    batting: Side,
    sticker: crate::card::Sticker,
) {
    match advantage {
        Advantage::Batter => {
            let index = state.current_batter_index;
            if let Some(slot) = state.batters_mut(batting).get_mut(index) {
                slot.stickers.push(sticker);
            }
        }
        Advantage::Pitcher => {
            if let Some(pitcher) = state.pitcher_mut(batting.opponent()) {
                pitcher.stickers.push(sticker);
            }
        }
    }
}

fn describe_steal(line: &mut String, bases: &Bases, attempt: &StealAttempt) {
    let name = bases
        .get(attempt.from)
        .map_or(attempt.runner.as_str(), |runner| runner.name.as_str());
    let target = attempt.from.next();
    if attempt.successful {
        let _ = write!(
            line,
            " {name} steals {target} with a roll of {} against speed {}!",
            attempt.roll, attempt.speed
        );
    } else {
        let _ = write!(
            line,
            " {name} is caught stealing {target} with a roll of {} against speed {}.",
            attempt.roll, attempt.speed
        );
    }
}

fn describe_contest(
    line: &mut String,
    batter: &PlayerCard,
    forced: Option<&str>,
    attempt: &FieldingAttempt,
) {
    let _ = write!(
        line,
        " The infield rolls a {} plus fielding {} against {}'s speed of {}.",
        attempt.roll, attempt.infield_sum, batter.name, attempt.batter_speed
    );
    let forced = forced.unwrap_or("The runner");
    if attempt.successful {
        let _ = write!(line, " Double play! {forced} and {} are both out.", batter.name);
    } else {
        let _ = write!(
            line,
            " {forced} is forced at second and {} reaches on a fielder's choice.",
            batter.name
        );
    }
}
