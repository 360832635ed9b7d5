use std::{future::Future, time::Duration};

use crate::params::TierParams;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,
    pub timeout: Duration,
    pub maximum_age: Duration,
}

impl From<&TierParams> for PositionOptions {
    fn from(tier: &TierParams) -> Self {
        Self {
            enable_high_accuracy: tier.high_accuracy,
            timeout: tier.timeout,
            maximum_age: tier.max_cache_age,
        }
    }
}

/// A reading as the platform reports it, before validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPosition {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy_meters: f64,
    pub captured_at_epoch_ms: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawPositionError {
    pub code: u16,
}

/// The platform geolocation capability.
pub trait PositionProvider {
    /// `false` when the platform has no geolocation at all.
    fn is_available(&self) -> bool;

    fn current_position(
        &self,
        options: PositionOptions,
    ) -> impl Future<Output = Result<RawPosition, RawPositionError>> + Send;
}

/// Stand-in for platforms without geolocation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPositionProvider;

impl PositionProvider for NoPositionProvider {
    fn is_available(&self) -> bool {
        false
    }

    async fn current_position(
        &self,
        _options: PositionOptions,
    ) -> Result<RawPosition, RawPositionError> {
        Err(RawPositionError { code: 2 })
    }
}
