/// Rule constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RulesConfig {
    /// Faces on every die the engine rolls.
    pub die_sides: u32,
    /// Speed assumed for batters and runners whose card prints none.
    pub default_speed: u32,
    /// Reduce pitcher control once the rated innings are exceeded.
    pub fatigue: bool,
}

impl RulesConfig {
    // ===== compile-time constants =====
    /// Outs that close a half-inning.
    pub const OUTS_PER_HALF: u8 = 3;
    /// Lowest control a fatigued pitcher can fall to.
    pub const MIN_FATIGUED_CONTROL: u32 = 1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_DIE_SIDES: u32 = 20;
    pub const DEFAULT_SPEED: u32 = 15;

    pub fn new() -> Self {
        Self {
            die_sides: Self::DEFAULT_DIE_SIDES,
            default_speed: Self::DEFAULT_SPEED,
            fatigue: false,
        }
    }

    #[must_use]
    pub fn with_fatigue(mut self, fatigue: bool) -> Self {
        self.fatigue = fatigue;
        self
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::new()
    }
}
