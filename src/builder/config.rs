//! Declarative scheduler configuration.

use crate::core::ElapsedPolicy;
use serde::{Deserialize, Serialize};

/// Settings a host can load from its own configuration source.
///
/// # Example
///
/// ```rust
/// use stateful_loop::builder::SchedulerConfig;
/// use stateful_loop::core::ElapsedPolicy;
///
/// let config: SchedulerConfig =
///     serde_json::from_str(r#"{ "policy": "modular", "initial_delay_ms": 250 }"#).unwrap();
/// assert_eq!(config.policy, ElapsedPolicy::Modular);
/// assert_eq!(config.initial_delay_ms, 250);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchedulerConfig {
    /// Elapsed-time comparison used by every poll.
    pub policy: ElapsedPolicy,

    /// Delay before the initial state becomes current.
    pub initial_delay_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: SchedulerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SchedulerConfig::default());
        assert_eq!(config.policy, ElapsedPolicy::Legacy);
        assert_eq!(config.initial_delay_ms, 0);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<SchedulerConfig, _> = serde_json::from_str(r#"{ "tick_hz": 1000 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn config_serializes_correctly() {
        let config = SchedulerConfig {
            policy: ElapsedPolicy::Modular,
            initial_delay_ms: 5,
        };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SchedulerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
