use tracing::{debug, warn};

use crate::{
    error::PositionError,
    params::{PositionParams, TierParams},
};

use super::{PositionFix, PositionOptions, PositionProvider, SourceTier};

/// Two-tier position acquisition bounded by a watchdog.
///
/// The high accuracy tier runs first. Any failure there falls back once to the
/// low accuracy tier, whose error is the one reported if it fails too. The
/// watchdog covers both tiers and is dropped as soon as one of them resolves.
pub struct PositionAcquirer<P> {
    provider: P,
    params: PositionParams,
}

impl<P> PositionAcquirer<P>
where
    P: PositionProvider,
{
    pub fn new(provider: P, params: PositionParams) -> Self {
        Self { provider, params }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub async fn acquire_position(&self) -> Result<PositionFix, PositionError> {
        if !self.provider.is_available() {
            warn!("Position: geolocation is not supported");
            return Err(PositionError::Unsupported);
        }

        match tokio::time::timeout(self.params.watchdog, self.acquire_tiered()).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    watchdog = ?self.params.watchdog,
                    "Position: watchdog expired before any tier resolved"
                );
                Err(PositionError::TimedOut)
            }
        }
    }

    async fn acquire_tiered(&self) -> Result<PositionFix, PositionError> {
        match self
            .attempt(SourceTier::HighAccuracy, &self.params.high_accuracy)
            .await
        {
            Ok(fix) => return Ok(fix),
            Err(error) => {
                debug!(%error, "Position: high accuracy tier failed, retrying with low accuracy");
            }
        }

        self.attempt(SourceTier::LowAccuracy, &self.params.low_accuracy)
            .await
            .inspect_err(|error| warn!(%error, "Position: low accuracy tier failed"))
    }

    async fn attempt(
        &self,
        tier: SourceTier,
        tier_params: &TierParams,
    ) -> Result<PositionFix, PositionError> {
        let options = PositionOptions::from(tier_params);

        // The platform may ignore `options.timeout`, so the tier bounds it as well.
        let raw = match tokio::time::timeout(
            tier_params.timeout,
            self.provider.current_position(options),
        )
        .await
        {
            Ok(Ok(raw)) => raw,
            Ok(Err(error)) => return Err(PositionError::from_code(error.code)),
            Err(_) => return Err(PositionError::TimedOut),
        };

        let fix = PositionFix::from_raw(raw, tier)?;
        debug!(
            ?tier,
            accuracy = fix.accuracy_meters(),
            "Position: fix acquired"
        );

        Ok(fix)
    }
}
