//! Outs: strikeouts, air outs, and ground balls with their double-play contest.

use crate::env::GameEnv;
use crate::state::{
    Base, Bases, FieldingAttempt, FieldingAttemptKind, Runner, RunnerMovement, Station,
};

use super::{AdvanceKind, OutKind, advance};

/// Inputs to a fielding contest that come from the surrounding state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldingContext {
    /// Outs before the play.
    pub outs: u8,
    /// Infield fielding sum of the team in the field.
    pub infield_sum: i32,
    pub batter_speed: u32,
}

/// Bases and outs after an out is fielded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldingResult {
    pub bases: Bases,
    pub outs_recorded: u8,
    pub runs: u32,
    pub movements: Vec<RunnerMovement>,
    pub attempt: Option<FieldingAttempt>,
}

impl FieldingResult {
    /// The batter is out and nobody moves.
    fn batter_out(bases: &Bases, batter: &Runner) -> Self {
        Self {
            bases: bases.clone(),
            outs_recorded: 1,
            runs: 0,
            movements: vec![RunnerMovement::new(
                batter.id.clone(),
                Station::Batter,
                Station::Out,
            )],
            attempt: None,
        }
    }
}

/// Resolves an out of the given contact type.
///
/// Only a ground ball with a runner on first and fewer than two outs rolls:
/// the runner from first is forced out at second, then `roll + infield_sum`
/// against the batter's speed decides between a double play and a fielder's
/// choice. Every other out retires the batter alone.
pub fn resolve_out(
    kind: OutKind,
    bases: &Bases,
    batter: &Runner,
    ctx: FieldingContext,
    env: &mut GameEnv<'_>,
) -> FieldingResult {
    let contested = kind == OutKind::GroundBall && bases.is_occupied(Base::First) && ctx.outs < 2;
    if !contested {
        return FieldingResult::batter_out(bases, batter);
    }

    // The batter reaching first forces runners exactly like a walk.
    let forced = advance(bases, AdvanceKind::Walk, batter.clone());
    let mut bases = forced.bases;
    let mut movements = forced.movements;
    let mut outs_recorded = 1;

    // The runner from first is out at second.
    if let Some(runner) = bases.take(Base::Second) {
        mark_out(&mut movements, &runner);
    }

    let roll = env.roll();
    let successful = i64::from(roll) + i64::from(ctx.infield_sum) > i64::from(ctx.batter_speed);
    if successful {
        if let Some(runner) = bases.take(Base::First) {
            mark_out(&mut movements, &runner);
        }
        outs_recorded += 1;
    }

    tracing::debug!(
        roll,
        infield_sum = ctx.infield_sum,
        batter_speed = ctx.batter_speed,
        successful,
        "double play contest"
    );

    FieldingResult {
        bases,
        outs_recorded,
        runs: forced.runs,
        movements,
        attempt: Some(FieldingAttempt {
            kind: FieldingAttemptKind::DoublePlay,
            successful,
            roll,
            infield_sum: ctx.infield_sum,
            batter_speed: ctx.batter_speed,
        }),
    }
}

fn mark_out(movements: &mut [RunnerMovement], runner: &Runner) {
    if let Some(movement) = movements.iter_mut().find(|m| m.runner == runner.id) {
        movement.to = Station::Out;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RulesConfig;
    use crate::env::ScriptedDice;

    fn runner(id: &str) -> Runner {
        Runner::new(id, id, None)
    }

    fn ctx(outs: u8) -> FieldingContext {
        FieldingContext {
            outs,
            infield_sum: 4,
            batter_speed: 15,
        }
    }

    fn run(kind: OutKind, bases: &Bases, outs: u8, rolls: Vec<u32>) -> FieldingResult {
        let rules = RulesConfig::default();
        let mut dice = ScriptedDice::new(rolls);
        let mut env = GameEnv::new(&rules, &mut dice);
        resolve_out(kind, bases, &runner("b"), ctx(outs), &mut env)
    }

    #[test]
    fn air_outs_and_strikeouts_retire_only_the_batter() {
        let bases = Bases::empty().with(Base::First, runner("r1"));
        for kind in [OutKind::Strikeout, OutKind::FlyOut, OutKind::PopUp, OutKind::Plain] {
            let result = run(kind, &bases, 0, vec![]);
            assert_eq!(result.outs_recorded, 1);
            assert_eq!(result.bases, bases);
            assert!(result.attempt.is_none());
        }
    }

    #[test]
    fn ground_ball_without_force_is_a_single_out() {
        let bases = Bases::empty().with(Base::Second, runner("r2"));
        let result = run(OutKind::GroundBall, &bases, 0, vec![20]);
        assert_eq!(result.outs_recorded, 1);
        assert_eq!(result.bases, bases);
        assert!(result.attempt.is_none());
    }

    #[test]
    fn ground_ball_with_two_outs_never_rolls() {
        let bases = Bases::empty().with(Base::First, runner("r1"));
        let result = run(OutKind::GroundBall, &bases, 2, vec![20]);
        assert_eq!(result.outs_recorded, 1);
        assert!(result.attempt.is_none());
    }

    #[test]
    fn double_play_clears_first() {
        // 12 + 4 > 15
        let bases = Bases::empty().with(Base::First, runner("r1"));
        let result = run(OutKind::GroundBall, &bases, 0, vec![12]);
        assert_eq!(result.outs_recorded, 2);
        assert!(result.bases.is_empty());
        let attempt = result.attempt.expect("contest recorded");
        assert!(attempt.successful);
        assert_eq!(attempt.roll, 12);
        assert!(result.movements.iter().all(|m| m.to == Station::Out));
    }

    #[test]
    fn fielders_choice_puts_batter_on_first() {
        // 11 + 4 == 15 is not enough.
        let bases = Bases::empty().with(Base::First, runner("r1"));
        let result = run(OutKind::GroundBall, &bases, 1, vec![11]);
        assert_eq!(result.outs_recorded, 1);
        assert_eq!(result.bases.get(Base::First).map(|r| r.id.as_str()), Some("b"));
        assert!(!result.bases.is_occupied(Base::Second));
        assert_eq!(result.runs, 0);
        assert!(!result.attempt.expect("contest recorded").successful);
    }

    #[test]
    fn forced_runners_advance_on_the_contest() {
        let bases = Bases::empty()
            .with(Base::First, runner("r1"))
            .with(Base::Second, runner("r2"))
            .with(Base::Third, runner("r3"));
        let result = run(OutKind::GroundBall, &bases, 0, vec![1]);
        assert_eq!(result.outs_recorded, 1);
        assert_eq!(result.runs, 1);
        assert_eq!(result.bases.get(Base::Third).map(|r| r.id.as_str()), Some("r2"));
        assert_eq!(result.bases.get(Base::First).map(|r| r.id.as_str()), Some("b"));
    }
}
