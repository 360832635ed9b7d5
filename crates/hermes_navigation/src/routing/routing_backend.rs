use std::future::Future;

use thiserror::Error;

use crate::geo::Coordinate;

use super::{InstructionDescriptor, RouteRequest};

/// What goes over the wire: origin and destination, nothing else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteQuery {
    pub origin: Coordinate,
    pub destination: Coordinate,
}

impl From<&RouteRequest> for RouteQuery {
    fn from(request: &RouteRequest) -> Self {
        Self {
            origin: request.origin,
            destination: request.destination,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepResponse {
    pub distance_meters: f64,
    pub duration_seconds: f64,
    pub instruction: InstructionDescriptor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteResponse {
    pub steps: Vec<StepResponse>,
    pub total_distance_meters: f64,
    pub total_duration_seconds: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BackendError {
    /// The service could not be reached at all
    #[error("routing service unreachable: {0}")]
    Unreachable(String),

    #[error("routing service found no route")]
    NoRoute,

    #[error("routing service answered {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed routing response: {0}")]
    Malformed(String),
}

/// Transport to an external routing service.
pub trait RoutingBackend {
    fn fetch_route(
        &self,
        query: RouteQuery,
    ) -> impl Future<Output = Result<RouteResponse, BackendError>> + Send;
}
