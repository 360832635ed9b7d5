use jiff::Timestamp;
use schemars::JsonSchema;
use serde::Serialize;

use crate::{error::PositionError, geo::Coordinate, position::RawPosition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SourceTier {
    HighAccuracy,
    LowAccuracy,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct PositionFix {
    coordinate: Coordinate,
    accuracy_meters: f64,
    captured_at: Timestamp,
    source_tier: SourceTier,
}

impl PositionFix {
    /// Validates a platform reading. Anything unusable counts as `Unavailable`.
    pub fn from_raw(raw: RawPosition, source_tier: SourceTier) -> Result<Self, PositionError> {
        let coordinate = Coordinate::new(raw.latitude, raw.longitude)
            .map_err(|_| PositionError::Unavailable)?;

        if !raw.accuracy_meters.is_finite() || raw.accuracy_meters < 0.0 {
            return Err(PositionError::Unavailable);
        }

        let captured_at = Timestamp::from_millisecond(raw.captured_at_epoch_ms)
            .map_err(|_| PositionError::Unavailable)?;

        Ok(Self {
            coordinate,
            accuracy_meters: raw.accuracy_meters,
            captured_at,
            source_tier,
        })
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn accuracy_meters(&self) -> f64 {
        self.accuracy_meters
    }

    pub fn captured_at(&self) -> Timestamp {
        self.captured_at
    }

    pub fn captured_at_epoch_ms(&self) -> i64 {
        self.captured_at.as_millisecond()
    }

    pub fn source_tier(&self) -> SourceTier {
        self.source_tier
    }

    pub fn is_low_accuracy(&self, threshold_meters: f64) -> bool {
        self.accuracy_meters > threshold_meters
    }
}
