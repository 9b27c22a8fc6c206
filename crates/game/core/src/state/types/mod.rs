pub mod bases;
pub mod common;
pub mod inning;
pub mod play;
pub mod roster;
pub mod workload;

// Re-export base running types
pub use bases::{Base, Bases, Runner, Station, StealFlags};

// Re-export common types
pub use common::{AtBatPhase, PerSide};

// Re-export inning types
pub use inning::{Half, Inning, InvalidInning};

// Re-export play summary types
pub use play::{FieldingAttempt, FieldingAttemptKind, LastPlay, RunnerMovement, StealAttempt};

// Re-export roster types
pub use roster::{LineupCard, PitcherCard, Team};

// Re-export workload types
pub use workload::{InningsPitched, Workload};
