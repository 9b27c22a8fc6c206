//! At-bat rule resolution.
//!
//! Each submodule resolves one rule subsystem. Resolvers take values and
//! return values; the only input that is not a plain value is the die source
//! carried by [`crate::env::GameEnv`].
//!
//! # Core Functions
//!
//! - `resolve_advantage`: pitcher score vs batter on-base
//! - `resolve_outcome`: chart lookup with the default-out fallback
//! - `advance`: base-state transition for walks and hits
//! - `resolve_out`: strikeouts, air outs, ground balls and double-play contests
//! - `resolve_steals`: flagged steal attempts on a strikeout
//! - `effective_control` / `charge_outs`: pitcher workload
//! - `close_half_inning`: outs, bases, lineup and inning flip on the third out

pub mod advantage;
pub mod baserunning;
pub mod fielding;
pub mod inning;
pub mod outcome;
pub mod steal;
pub mod workload;

pub use advantage::{Advantage, pitcher_score, resolve_advantage};
pub use baserunning::{BaseAdvance, advance};
pub use fielding::{FieldingContext, FieldingResult, resolve_out};
pub use inning::{close_half_inning, next_batter_index};
pub use outcome::{AdvanceKind, OutKind, PlayKind, ResolvedOutcome, resolve_outcome};
pub use steal::{StealResolution, resolve_steals};
pub use workload::{charge_outs, effective_control};
