//! Error types for the command execution pipeline.

use crate::command::{
    AdvanceToNextAtBat, CommandTransition, DeclareSteals, RollForAdvantage, RollForAtBatResult,
};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing a command through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("roll for advantage failed: {0}")]
    RollForAdvantage(TransitionPhaseError<<RollForAdvantage as CommandTransition>::Error>),

    #[error("declare steals failed: {0}")]
    DeclareSteals(TransitionPhaseError<<DeclareSteals as CommandTransition>::Error>),

    #[error("roll for at-bat result failed: {0}")]
    RollForAtBatResult(TransitionPhaseError<<RollForAtBatResult as CommandTransition>::Error>),

    #[error("advance to next at-bat failed: {0}")]
    AdvanceToNextAtBat(TransitionPhaseError<<AdvanceToNextAtBat as CommandTransition>::Error>),
}

impl ExecuteError {
    /// Stage of the pipeline that failed.
    pub fn phase(&self) -> TransitionPhase {
        match self {
            ExecuteError::RollForAdvantage(inner)
            | ExecuteError::DeclareSteals(inner)
            | ExecuteError::RollForAtBatResult(inner)
            | ExecuteError::AdvanceToNextAtBat(inner) => inner.phase,
        }
    }

    /// The rule violation behind the failure.
    pub fn at_bat_error(&self) -> &crate::command::AtBatError {
        match self {
            ExecuteError::RollForAdvantage(inner)
            | ExecuteError::DeclareSteals(inner)
            | ExecuteError::RollForAtBatResult(inner)
            | ExecuteError::AdvanceToNextAtBat(inner) => &inner.error,
        }
    }
}
