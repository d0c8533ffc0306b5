//! Verifier configuration

use serde::{Deserialize, Serialize};

/// Extra knobs for ordered-delivery runs.
///
/// These are consumed by the external driver (how many partition keys to
/// spread produced events over, pacing between sends); the verification
/// core only cares about whether ordered mode is on at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderedConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_partition_keys: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u64>,
}

/// Configuration fixed for the lifetime of a state manager.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifierConfig {
    pub ordered: bool,
    #[serde(default)]
    pub ordered_config: OrderedConfig,
}

impl VerifierConfig {
    /// Build a config from an optional ordered-mode section: present means
    /// ordered mode is on, absent means unordered.
    pub fn from_ordered(ordered: Option<OrderedConfig>) -> Self {
        match ordered {
            Some(ordered_config) => Self {
                ordered: true,
                ordered_config,
            },
            None => Self {
                ordered: false,
                ordered_config: OrderedConfig::default(),
            },
        }
    }

    /// Config for an unordered (multiset-equality) run
    pub fn unordered() -> Self {
        Self::from_ordered(None)
    }
}
