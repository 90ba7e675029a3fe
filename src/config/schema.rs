use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration.
///
/// Everything has a default, so the config file is optional.
///
/// Example YAML:
/// ```yaml
/// targets:
///   daily: 120
///   weekly: 600
///   monthly: 2500
/// store: /tmp/demo-chores.json
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Point targets the progress bars are drawn against
    #[serde(default)]
    pub targets: ProgressTargets,

    /// Override for the chore store location
    /// (default: ~/.config/chore-bro/chores.json)
    #[serde(default)]
    pub store: Option<PathBuf>,
}

/// Point targets per reporting window (defaults: 100 / 500 / 2000)
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct ProgressTargets {
    pub daily: u64,
    pub weekly: u64,
    pub monthly: u64,
}

impl Default for ProgressTargets {
    fn default() -> Self {
        Self {
            daily: 100,
            weekly: 500,
            monthly: 2000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets() {
        let targets = ProgressTargets::default();
        assert_eq!(targets.daily, 100);
        assert_eq!(targets.weekly, 500);
        assert_eq!(targets.monthly, 2000);
    }

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.store.is_none());
    }

    #[test]
    fn test_partial_targets_parse() {
        let yaml = r#"
targets:
  daily: 150
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.targets.daily, 150);
        assert_eq!(config.targets.weekly, 500);
        assert_eq!(config.targets.monthly, 2000);
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
targets:
  daily: 120
  weekly: 600
  monthly: 2500
store: /tmp/demo-chores.json
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.targets.daily, 120);
        assert_eq!(config.targets.weekly, 600);
        assert_eq!(config.targets.monthly, 2500);
        assert_eq!(config.store, Some(PathBuf::from("/tmp/demo-chores.json")));
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config::default();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }
}
