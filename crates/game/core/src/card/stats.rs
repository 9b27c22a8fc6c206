//! Role-specific card ratings.

use super::Handedness;

/// Pitching ratings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct PitcherStats {
    /// Added to the advantage roll.
    pub control: u32,
    /// Innings the card is rated to pitch before fatigue applies.
    pub rated_ip: u32,
}

impl PitcherStats {
    pub const fn new(control: u32, rated_ip: u32) -> Self {
        Self { control, rated_ip }
    }
}

/// Defensive position a fielder can hold.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
#[strum(ascii_case_insensitive)]
pub enum FieldPosition {
    #[strum(serialize = "C")]
    Catcher,
    #[strum(serialize = "1B")]
    FirstBase,
    #[strum(serialize = "2B")]
    SecondBase,
    #[strum(serialize = "3B")]
    ThirdBase,
    #[strum(serialize = "SS")]
    Shortstop,
    #[strum(serialize = "LF")]
    LeftField,
    #[strum(serialize = "CF")]
    CenterField,
    #[strum(serialize = "RF")]
    RightField,
    #[strum(serialize = "DH")]
    DesignatedHitter,
}

impl FieldPosition {
    /// True for 1B, 2B, SS and 3B.
    pub const fn is_infield(self) -> bool {
        matches!(
            self,
            Self::FirstBase | Self::SecondBase | Self::Shortstop | Self::ThirdBase
        )
    }
}

impl From<FieldPosition> for String {
    fn from(position: FieldPosition) -> Self {
        position.to_string()
    }
}

impl TryFrom<String> for FieldPosition {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A (position, rating) pair printed on a batter card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct FieldingRating {
    pub position: FieldPosition,
    pub rating: i32,
}

impl FieldingRating {
    pub const fn new(position: FieldPosition, rating: i32) -> Self {
        Self { position, rating }
    }
}

/// Handedness-keyed override of a batter's hitting ratings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct HittingSplit {
    pub on_base: u32,
    pub power: u32,
}

/// Batting ratings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct BatterStats {
    pub on_base: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub speed: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub power: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fielding: Vec<FieldingRating>,
    /// Used against left-handed pitching (switch-hitters bat right).
    #[cfg_attr(feature = "serde", serde(default))]
    pub vs_left: Option<HittingSplit>,
    /// Used against right-handed pitching (switch-hitters bat left).
    #[cfg_attr(feature = "serde", serde(default))]
    pub vs_right: Option<HittingSplit>,
}

impl BatterStats {
    pub fn new(on_base: u32) -> Self {
        Self {
            on_base,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_speed(mut self, speed: u32) -> Self {
        self.speed = Some(speed);
        self
    }

    #[must_use]
    pub fn with_power(mut self, power: u32) -> Self {
        self.power = power;
        self
    }

    #[must_use]
    pub fn with_fielding(mut self, position: FieldPosition, rating: i32) -> Self {
        self.fielding.push(FieldingRating::new(position, rating));
        self
    }

    #[must_use]
    pub fn with_splits(mut self, vs_left: HittingSplit, vs_right: HittingSplit) -> Self {
        self.vs_left = Some(vs_left);
        self.vs_right = Some(vs_right);
        self
    }

    fn split_against(&self, pitcher_hand: Handedness) -> Option<&HittingSplit> {
        match pitcher_hand {
            Handedness::Left => self.vs_left.as_ref(),
            Handedness::Right => self.vs_right.as_ref(),
            Handedness::Switch => None,
        }
    }

    /// On-base rating facing a pitcher who throws with `pitcher_hand`.
    pub fn on_base_against(&self, pitcher_hand: Handedness) -> u32 {
        self.split_against(pitcher_hand)
            .map_or(self.on_base, |split| split.on_base)
    }

    /// Power rating facing a pitcher who throws with `pitcher_hand`.
    pub fn power_against(&self, pitcher_hand: Handedness) -> u32 {
        self.split_against(pitcher_hand)
            .map_or(self.power, |split| split.power)
    }

    /// Speed, falling back to `default` when the card prints none.
    pub fn speed_or(&self, default: u32) -> u32 {
        self.speed.unwrap_or(default)
    }

    /// Rating at the first infield position listed on the card.
    ///
    /// A fielder contributes to the infield sum once, even when the card lists
    /// several infield positions.
    pub fn infield_rating(&self) -> Option<i32> {
        self.fielding
            .iter()
            .find(|entry| entry.position.is_infield())
            .map(|entry| entry.rating)
    }
}
