//! Stolen-base attempts.

use crate::env::GameEnv;
use crate::state::{Bases, RunnerMovement, Station, StealAttempt, StealFlags};

/// Bases and outs after every flagged runner has tried.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StealResolution {
    pub bases: Bases,
    pub outs_recorded: u8,
    pub runs: u32,
    pub attempts: Vec<StealAttempt>,
    pub movements: Vec<RunnerMovement>,
}

/// Rolls one steal per flagged runner, lead runner first.
///
/// A roll at or under the runner's speed takes the next base (a runner from
/// third scores); anything higher is caught stealing. Attempts stop once the
/// half-inning's third out is made. A runner whose target base is still held
/// does not go.
pub fn resolve_steals(
    bases: &Bases,
    flags: StealFlags,
    outs: u8,
    env: &mut GameEnv<'_>,
) -> StealResolution {
    let default_speed = env.rules().default_speed;
    let mut result = StealResolution {
        bases: bases.clone(),
        ..StealResolution::default()
    };

    for base in flags.bases() {
        if outs + result.outs_recorded >= crate::config::RulesConfig::OUTS_PER_HALF {
            break;
        }
        let target = base.next();
        let blocked = match target {
            Station::Base(next) => result.bases.is_occupied(next),
            _ => false,
        };
        if blocked {
            tracing::debug!(%base, "steal skipped, next base occupied");
            continue;
        }
        let Some(runner) = result.bases.take(base) else {
            tracing::debug!(%base, "steal skipped, base empty");
            continue;
        };

        let speed = runner.speed_or(default_speed);
        let roll = env.roll();
        let successful = roll <= speed;
        let to = if successful { target } else { Station::Out };

        result.attempts.push(StealAttempt {
            runner: runner.id.clone(),
            from: base,
            roll,
            speed,
            successful,
        });
        result
            .movements
            .push(RunnerMovement::new(runner.id.clone(), Station::Base(base), to));

        match to {
            Station::Base(next) => result.bases.set(next, Some(runner)),
            Station::Home => result.runs += 1,
            Station::Out => result.outs_recorded += 1,
            Station::Batter => {}
        }
    }

    result
}
