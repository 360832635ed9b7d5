use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_LOCALE: &str = "pt-BR";

/// One attempt configuration for position acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierParams {
    pub high_accuracy: bool,
    pub timeout: Duration,
    pub max_cache_age: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionParams {
    pub high_accuracy: TierParams,
    pub low_accuracy: TierParams,

    /// Bounds both tiers together
    pub watchdog: Duration,
}

impl Default for PositionParams {
    fn default() -> Self {
        Self {
            high_accuracy: TierParams {
                high_accuracy: true,
                timeout: Duration::from_secs(20),
                max_cache_age: Duration::ZERO,
            },
            low_accuracy: TierParams {
                high_accuracy: false,
                timeout: Duration::from_secs(15),
                max_cache_age: Duration::ZERO,
            },
            watchdog: Duration::from_secs(25),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigatorParams {
    /// BCP 47 tag used for instructions, messages and narration
    pub locale: String,
    pub position: PositionParams,
    pub route_timeout: Duration,

    /// Fixes less precise than this still succeed but raise a warning
    pub low_accuracy_threshold_meters: f64,
}

impl Default for NavigatorParams {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            position: PositionParams::default(),
            route_timeout: Duration::from_secs(30),
            low_accuracy_threshold_meters: 100.0,
        }
    }
}
