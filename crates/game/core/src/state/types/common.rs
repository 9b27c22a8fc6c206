use std::ops::{Index, IndexMut};

use crate::card::Side;

/// A value kept once per club (score, bases).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerSide<T> {
    pub home: T,
    pub away: T,
}

impl<T> PerSide<T> {
    pub const fn new(home: T, away: T) -> Self {
        Self { home, away }
    }

    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }
}

impl<T> Index<Side> for PerSide<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for PerSide<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        self.get_mut(side)
    }
}

/// Where the current at-bat stands.
///
/// Cycles `FirstRoll -> SecondRoll -> Completed -> FirstRoll`.
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
    serde(rename_all = "camelCase")
)]
#[strum(serialize_all = "camelCase")]
pub enum AtBatPhase {
    /// Waiting for the pitcher's advantage roll.
    #[default]
    FirstRoll,
    /// Advantage decided; waiting for the result roll.
    SecondRoll,
    /// Result applied; waiting to move on to the next batter.
    Completed,
}
