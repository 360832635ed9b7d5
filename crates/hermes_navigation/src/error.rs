use std::fmt::Display;

use schemars::JsonSchema;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    #[error("latitude {0} is outside [-90, 90]")]
    Latitude(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    Longitude(f64),
}

/// Classified failure of the position provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PositionError {
    #[error("permission to read the position was denied")]
    PermissionDenied,

    #[error("position is unavailable")]
    Unavailable,

    #[error("position acquisition timed out")]
    TimedOut,

    #[error("geolocation is not supported")]
    Unsupported,
}

impl PositionError {
    /// Maps a platform error code (1 = denied, 2 = unavailable, 3 = timeout).
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => PositionError::PermissionDenied,
            2 => PositionError::Unavailable,
            3 => PositionError::TimedOut,
            _ => PositionError::Unavailable,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RoutingErrorKind {
    NetworkUnreachable,
    NoRouteFound,
    ServerError,
    Unknown,
}

impl Display for RoutingErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                RoutingErrorKind::NetworkUnreachable => "network unreachable",
                RoutingErrorKind::NoRouteFound => "no route found",
                RoutingErrorKind::ServerError => "server error",
                RoutingErrorKind::Unknown => "unknown error",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("route request failed: {kind} (provider status: {provider_status:?})")]
pub struct RoutingError {
    pub kind: RoutingErrorKind,
    pub provider_status: Option<u16>,
}

impl RoutingError {
    pub fn new(kind: RoutingErrorKind, provider_status: Option<u16>) -> Self {
        Self {
            kind,
            provider_status,
        }
    }

    pub fn timed_out() -> Self {
        Self::new(RoutingErrorKind::NetworkUnreachable, None)
    }

    /// Classifies an HTTP-like status. `None` means the service was never reached.
    pub fn from_status(status: Option<u16>) -> Self {
        let kind = match status {
            None => RoutingErrorKind::NetworkUnreachable,
            Some(404) => RoutingErrorKind::NoRouteFound,
            Some(500..=599) => RoutingErrorKind::ServerError,
            Some(_) => RoutingErrorKind::Unknown,
        };

        Self::new(kind, status)
    }
}

/// Reason a session ended in `Failed`. Raw provider codes never reach this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(tag = "source", content = "kind", rename_all = "snake_case")]
pub enum ErrorKind {
    Position(PositionError),
    Routing(RoutingErrorKind),
}

impl From<PositionError> for ErrorKind {
    fn from(error: PositionError) -> Self {
        ErrorKind::Position(error)
    }
}

impl From<RoutingError> for ErrorKind {
    fn from(error: RoutingError) -> Self {
        ErrorKind::Routing(error.kind)
    }
}
