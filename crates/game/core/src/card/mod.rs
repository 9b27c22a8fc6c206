//! Player card definitions.
//!
//! A card is the immutable description of a participant: identity, role,
//! handedness, role-specific ratings and the roll chart that is consulted
//! whenever the card is "in use" for an at-bat. Cards never change during a
//! game; accreted stickers and pitcher workload live alongside them in
//! [`crate::state`].
mod chart;
mod stats;

use std::fmt;

pub use chart::{Chart, ChartEntry, ChartIssue, OutcomeType, RollRange, Sticker};
pub use stats::{BatterStats, FieldPosition, FieldingRating, HittingSplit, PitcherStats};

/// Stable identifier of a card within a roster.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct CardId(pub String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for CardId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Which kind of participant a card describes.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Role {
    Batter,
    Pitcher,
}

/// Batting or throwing hand.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Handedness {
    Left,
    #[default]
    Right,
    /// Bats from either side; only meaningful for batters.
    Switch,
}

/// One of the two clubs in a game.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    /// The club on the other side of the field.
    pub const fn opponent(self) -> Self {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

/// Role-specific ratings printed on a card.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CardStats {
    Batter(BatterStats),
    Pitcher(PitcherStats),
}

/// Immutable definition of a participant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct PlayerCard {
    pub id: CardId,
    pub name: String,
    pub role: Role,
    #[cfg_attr(feature = "serde", serde(default))]
    pub handedness: Handedness,
    pub team: Side,
    pub stats: CardStats,
    pub chart: Chart,
}

impl PlayerCard {
    /// Builds a batter card, right-handed unless overridden.
    pub fn batter(
        id: impl Into<CardId>,
        name: impl Into<String>,
        team: Side,
        stats: BatterStats,
        chart: Chart,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: Role::Batter,
            handedness: Handedness::Right,
            team,
            stats: CardStats::Batter(stats),
            chart,
        }
    }

    /// Builds a pitcher card, right-handed unless overridden.
    pub fn pitcher(
        id: impl Into<CardId>,
        name: impl Into<String>,
        team: Side,
        stats: PitcherStats,
        chart: Chart,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: Role::Pitcher,
            handedness: Handedness::Right,
            team,
            stats: CardStats::Pitcher(stats),
            chart,
        }
    }

    #[must_use]
    pub fn with_handedness(mut self, handedness: Handedness) -> Self {
        self.handedness = handedness;
        self
    }

    /// Batting ratings, if this card was printed as a batter.
    pub fn batter_stats(&self) -> Option<&BatterStats> {
        match (&self.role, &self.stats) {
            (Role::Batter, CardStats::Batter(stats)) => Some(stats),
            _ => None,
        }
    }

    /// Pitching ratings, if this card was printed as a pitcher.
    pub fn pitcher_stats(&self) -> Option<&PitcherStats> {
        match (&self.role, &self.stats) {
            (Role::Pitcher, CardStats::Pitcher(stats)) => Some(stats),
            _ => None,
        }
    }
}
