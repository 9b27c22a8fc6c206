use crate::card::{CardId, Role, Side};
use crate::state::AtBatPhase;

use super::CommandKind;

/// Why a command was refused or left the state inconsistent.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AtBatError {
    #[error("{command} is not allowed in the {actual} phase")]
    PhaseMismatch {
        command: CommandKind,
        actual: AtBatPhase,
    },

    #[error("no batter at slot {index} of the {side} lineup")]
    MissingBatter { side: Side, index: usize },

    #[error("the {side} team has no pitcher")]
    MissingPitcher { side: Side },

    #[error("card {id} is not a {expected} card")]
    RoleMismatch { id: CardId, expected: Role },

    #[error("no advantage has been rolled for this at-bat")]
    MissingAdvantage,

    #[error("{outs} outs left on the board after the play")]
    OutsOverflow { outs: u8 },

    #[error("batter index {index} is outside the {side} lineup of {len}")]
    BatterIndexOutOfRange { side: Side, index: usize, len: usize },
}
