use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_SAMPLE_SIZE: usize = 10;
/// Largest sample the view will generate; the table renders every row.
pub const MAX_SAMPLE_SIZE: usize = 1_000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Settings for the customers view. Every field falls back to its default when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomersConfig {
    /// Number of generated sample customers
    pub sample_size: usize,
    /// Fixed seed for the sample generator; random when unset
    pub seed: Option<u64>,
    /// `tracing` filter directive, e.g. `debug` or `customers_shared=debug`
    pub log_level: String,
}

impl Default for CustomersConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl CustomersConfig {
    pub fn seed_or(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }

    /// `sample_size` capped at [`MAX_SAMPLE_SIZE`].
    pub fn capped_sample_size(&self) -> usize {
        if self.sample_size > MAX_SAMPLE_SIZE {
            warn!(
                requested = self.sample_size,
                max = MAX_SAMPLE_SIZE,
                "sample size too large, capping"
            );
            return MAX_SAMPLE_SIZE;
        }
        self.sample_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CustomersConfig::default();
        assert_eq!(config.sample_size, 10);
        assert_eq!(config.seed, None);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.seed_or(99), 99);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: CustomersConfig = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
        assert_eq!(config.seed_or(99), 7);
        assert_eq!(config.sample_size, DEFAULT_SAMPLE_SIZE);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_sample_size_is_capped() {
        let config: CustomersConfig =
            serde_json::from_str(r#"{"sample_size": 10000000}"#).unwrap();
        assert_eq!(config.capped_sample_size(), MAX_SAMPLE_SIZE);

        let config = CustomersConfig {
            sample_size: 25,
            ..CustomersConfig::default()
        };
        assert_eq!(config.capped_sample_size(), 25);
        assert_eq!(CustomersConfig::default().capped_sample_size(), DEFAULT_SAMPLE_SIZE);
    }
}
