//! Rule set loader.

use std::path::Path;

use showdown_core::RulesConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for rule sets from TOML files.
pub struct RulesLoader;

impl RulesLoader {
    /// Load a rule set from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<RulesConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<RulesConfig> {
        let rules: RulesConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rules TOML: {}", e))?;

        if rules.die_sides == 0 {
            anyhow::bail!("Invalid rules: die_sides must be at least 1");
        }
        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let rules = RulesLoader::parse("fatigue = true\n").unwrap();
        assert!(rules.fatigue);
        assert_eq!(rules.die_sides, RulesConfig::DEFAULT_DIE_SIDES);
        assert_eq!(rules.default_speed, RulesConfig::DEFAULT_SPEED);
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "die_sides = 20\ndefault_speed = 12").unwrap();
        let rules = RulesLoader::load(file.path()).unwrap();
        assert_eq!(rules.default_speed, 12);
        assert!(!rules.fatigue);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(RulesLoader::parse("die_sides = 0").is_err());
        assert!(RulesLoader::parse("die_sides = \"twenty\"").is_err());
        let missing = RulesLoader::load(Path::new("/nonexistent/rules.toml")).unwrap_err();
        assert!(missing.to_string().starts_with("Failed to read file"));
    }
}
