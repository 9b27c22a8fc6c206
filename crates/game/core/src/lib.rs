//! Deterministic at-bat and inning resolution for the dice baseball showdown.
//!
//! `showdown-core` defines the canonical rules (cards, charts, base running,
//! fielding contests, steals, pitcher workload, inning flow) and exposes pure
//! APIs that drivers and offline tools can reuse. Every state change flows
//! through [`engine::GameEngine`], which consumes a [`GameState`] by reference
//! and hands back a fresh value; every die roll comes from an injected
//! [`DiceSource`].
pub mod card;
pub mod command;
pub mod config;
pub mod engine;
pub mod env;
pub mod rules;
pub mod state;

pub use card::{
    BatterStats, CardId, CardStats, Chart, ChartEntry, ChartIssue, FieldPosition, FieldingRating,
    Handedness, HittingSplit, OutcomeType, PitcherStats, PlayerCard, Role, RollRange, Side,
    Sticker,
};
pub use command::{
    AdvanceToNextAtBat, AtBatError, Command, CommandKind, CommandTransition, DeclareSteals,
    RollForAdvantage, RollForAtBatResult,
};
pub use config::RulesConfig;
pub use engine::{ExecuteError, GameEngine, TransitionPhase, TransitionPhaseError};
pub use env::{DiceSource, GameEnv, PcgDice, ScriptedDice};
pub use rules::{Advantage, AdvanceKind, OutKind, ResolvedOutcome};
pub use state::{
    AtBatPhase, Base, Bases, FieldingAttempt, FieldingAttemptKind, GameState, Half, Inning,
    InningsPitched, LastPlay, LineupCard, PerSide, PitcherCard, Runner, RunnerMovement, Station,
    StealAttempt, StealFlags, Team, Workload,
};
