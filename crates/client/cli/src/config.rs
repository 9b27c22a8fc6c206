//! Driver configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Configuration for one automated game.
#[derive(Clone, Debug)]
pub struct SimConfig {
    pub seed: Option<u64>,
    pub half_innings: u32,
    pub roster: Option<PathBuf>,
    pub rules: Option<PathBuf>,
    pub auto_steal: bool,
    pub log_dir: Option<PathBuf>,
    pub dump_state: bool,
}

impl SimConfig {
    /// Nine full innings.
    pub const DEFAULT_HALF_INNINGS: u32 = 18;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SHOWDOWN_SEED` - Die stream seed (default: derived from the clock)
    /// - `SHOWDOWN_HALF_INNINGS` - Half-innings to play (default: 18)
    /// - `SHOWDOWN_ROSTER` - RON deck file (default: bundled solo deck)
    /// - `SHOWDOWN_RULES` - TOML rules file (default: standard rules)
    /// - `SHOWDOWN_AUTO_STEAL` - Send fast runners on their own (default: false)
    /// - `SHOWDOWN_LOG_DIR` - Also write logs to this directory
    /// - `SHOWDOWN_DUMP_STATE` - Print the final state as JSON (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.seed = read_env::<u64>("SHOWDOWN_SEED");

        if let Some(half_innings) = read_env::<u32>("SHOWDOWN_HALF_INNINGS") {
            config.half_innings = half_innings.max(1);
        }

        config.roster = env::var("SHOWDOWN_ROSTER").ok().map(PathBuf::from);
        config.rules = env::var("SHOWDOWN_RULES").ok().map(PathBuf::from);

        config.auto_steal = read_flag("SHOWDOWN_AUTO_STEAL");
        config.dump_state = read_flag("SHOWDOWN_DUMP_STATE");

        config.log_dir = env::var("SHOWDOWN_LOG_DIR").ok().map(PathBuf::from);

        config
    }

    /// The configured seed, or one taken from the system clock.
    pub fn resolve_seed(&self) -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};

        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default()
        })
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            half_innings: Self::DEFAULT_HALF_INNINGS,
            roster: None,
            rules: None,
            auto_steal: false,
            log_dir: None,
            dump_state: false,
        }
    }
}

/// Parsed boolean, or `true` when the variable is set without a usable value.
fn read_flag(key: &str) -> bool {
    match read_env::<bool>(key) {
        Some(enabled) => enabled,
        None => env::var(key).is_ok(),
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
