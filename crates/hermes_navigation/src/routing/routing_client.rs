use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{RoutingError, RoutingErrorKind};

use super::{BackendError, RouteQuery, RouteRequest, RouteResult, RoutingBackend};

/// Single round-trip route requests with a caller-side timeout.
///
/// When the timeout expires the backend future is dropped, which aborts the
/// underlying request for async transports.
pub struct RoutingClient<B> {
    backend: B,
    timeout: Duration,
}

impl<B> RoutingClient<B>
where
    B: RoutingBackend,
{
    pub fn new(backend: B, timeout: Duration) -> Self {
        Self { backend, timeout }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub async fn request_route(&self, request: &RouteRequest) -> Result<RouteResult, RoutingError> {
        let query = RouteQuery::from(request);
        debug!(
            origin = ?query.origin,
            destination = ?query.destination,
            "Routing: requesting route"
        );

        match tokio::time::timeout(self.timeout, self.backend.fetch_route(query)).await {
            Ok(Ok(response)) => {
                let result = RouteResult::from_response(response);
                debug!(steps = result.steps.len(), "Routing: route found");
                Ok(result)
            }
            Ok(Err(error)) => {
                let classified = classify(&error);
                warn!(%error, kind = %classified.kind, "Routing: request failed");
                Err(classified)
            }
            Err(_) => {
                warn!(timeout = ?self.timeout, "Routing: request timed out");
                Err(RoutingError::timed_out())
            }
        }
    }
}

fn classify(error: &BackendError) -> RoutingError {
    match error {
        BackendError::Unreachable(_) => RoutingError::from_status(None),
        BackendError::NoRoute => RoutingError::new(RoutingErrorKind::NoRouteFound, None),
        BackendError::Status { status, .. } => RoutingError::from_status(Some(*status)),
        BackendError::Malformed(_) => RoutingError::new(RoutingErrorKind::Unknown, None),
    }
}
