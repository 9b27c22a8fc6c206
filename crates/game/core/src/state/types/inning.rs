use std::fmt;

use crate::card::Side;

/// Top (away bats) or bottom (home bats) of an inning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Half {
    Top,
    Bottom,
}

impl Half {
    /// The club batting in this half.
    pub const fn batting(self) -> Side {
        match self {
            Half::Top => Side::Away,
            Half::Bottom => Side::Home,
        }
    }
}

/// Inning number plus half.
///
/// Serialised as a number whose integer part is the inning and whose `.5`
/// fraction marks the bottom half (`1`, `1.5`, `2`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "f64", try_from = "f64")
)]
pub struct Inning {
    number: u32,
    half: Half,
}

impl Inning {
    pub const FIRST: Self = Self {
        number: 1,
        half: Half::Top,
    };

    pub const fn new(number: u32, half: Half) -> Self {
        Self { number, half }
    }

    pub const fn number(&self) -> u32 {
        self.number
    }

    pub const fn half(&self) -> Half {
        self.half
    }

    pub fn as_f64(&self) -> f64 {
        match self.half {
            Half::Top => f64::from(self.number),
            Half::Bottom => f64::from(self.number) + 0.5,
        }
    }

    /// Inning that follows once `ended` has finished batting.
    ///
    /// The away half ends into the bottom of the same inning; the home half
    /// ends into the top of the next one.
    pub const fn after_half(self, ended: Side) -> Self {
        match ended {
            Side::Away => Self::new(self.number, Half::Bottom),
            Side::Home => Self::new(self.number + 1, Half::Top),
        }
    }
}

impl Default for Inning {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Inning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.half, self.number)
    }
}

impl From<Inning> for f64 {
    fn from(inning: Inning) -> Self {
        inning.as_f64()
    }
}

/// Rejected inning value.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[error("{0} is not a valid inning (expected n or n.5 with n >= 1)")]
pub struct InvalidInning(pub f64);

impl TryFrom<f64> for Inning {
    type Error = InvalidInning;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value < 1.0 || value > f64::from(u32::MAX) {
            return Err(InvalidInning(value));
        }
        let whole = value.floor();
        let fraction = value - whole;
        let half = if fraction == 0.0 {
            Half::Top
        } else if fraction == 0.5 {
            Half::Bottom
        } else {
            return Err(InvalidInning(value));
        };
        Ok(Self::new(whole as u32, half))
    }
}
