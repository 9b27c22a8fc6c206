use crate::env::GameEnv;
use crate::state::{AtBatPhase, GameState, StealFlags};

use super::{AtBatError, CommandKind, CommandTransition, check_invariants, expect_phase};

/// Flags runners to attempt a steal on the upcoming result roll.
///
/// Replaces any earlier declaration for the same at-bat. Flags on empty bases
/// are dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeclareSteals {
    pub flags: StealFlags,
}

impl DeclareSteals {
    pub fn new(flags: StealFlags) -> Self {
        Self { flags }
    }
}

impl CommandTransition for DeclareSteals {
    type Error = AtBatError;

    fn kind(&self) -> CommandKind {
        CommandKind::DeclareSteals
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        expect_phase(
            state,
            self.kind(),
            &[AtBatPhase::FirstRoll, AtBatPhase::SecondRoll],
        )
    }

    fn apply(&self, state: &mut GameState, _env: &mut GameEnv<'_>) -> Result<(), Self::Error> {
        let bases = state.batting_bases();
        let flags = self.flags.occupied_in(bases);
        let lines: Vec<String> = flags
            .bases()
            .filter_map(|base| {
                bases
                    .get(base)
                    .map(|runner| format!("{} will try to steal {}.", runner.name, base.next()))
            })
            .collect();

        if flags != self.flags {
            tracing::debug!(
                requested = ?self.flags,
                kept = ?flags,
                "dropped steal flags on empty bases"
            );
        }

        state.pending_steals = flags;
        if lines.is_empty() {
            state.log("No runners are going.");
        } else {
            for line in lines {
                state.log(line);
            }
        }
        Ok(())
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        check_invariants(state)
    }
}
