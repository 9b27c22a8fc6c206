//! Advantage resolution.

/// Whose chart is used for the result roll.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Advantage {
    Pitcher,
    Batter,
}

/// `roll + control`.
#[inline]
pub const fn pitcher_score(roll: u32, pitcher_control: u32) -> u32 {
    roll + pitcher_control
}

/// Pitcher holds the advantage only when the pitcher score strictly beats the
/// batter's on-base rating; ties go to the batter.
pub const fn resolve_advantage(roll: u32, pitcher_control: u32, batter_on_base: u32) -> Advantage {
    if pitcher_score(roll, pitcher_control) > batter_on_base {
        Advantage::Pitcher
    } else {
        Advantage::Batter
    }
}
