use std::fmt::Display;

use schemars::JsonSchema;
use serde::Serialize;
use uuid::Uuid;

use crate::{
    error::ErrorKind,
    routing::{RouteRequest, RouteResult},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        SessionId(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum SessionState {
    Idle,
    AcquiringPosition,
    RequestingRoute,
    Ready,
    Failed(ErrorKind),
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Ready | SessionState::Failed(_))
    }
}

/// One user request for a route, from start to terminal outcome.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct RouteSession {
    pub id: SessionId,
    pub state: SessionState,
    pub request: Option<RouteRequest>,
    pub result: Option<RouteResult>,
    pub failure_reason: Option<ErrorKind>,
}

impl RouteSession {
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            state: SessionState::Idle,
            request: None,
            result: None,
            failure_reason: None,
        }
    }

    pub(crate) fn acquire_position(&mut self) {
        self.state = SessionState::AcquiringPosition;
    }

    pub(crate) fn request_route(&mut self, request: RouteRequest) {
        self.request = Some(request);
        self.state = SessionState::RequestingRoute;
    }

    pub(crate) fn complete(&mut self, result: RouteResult) {
        self.result = Some(result);
        self.state = SessionState::Ready;
    }

    pub(crate) fn fail(&mut self, reason: ErrorKind) {
        self.failure_reason = Some(reason);
        self.state = SessionState::Failed(reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PositionError;

    #[test]
    fn test_terminal_states() {
        assert!(!SessionState::Idle.is_terminal());
        assert!(!SessionState::AcquiringPosition.is_terminal());
        assert!(!SessionState::RequestingRoute.is_terminal());
        assert!(SessionState::Ready.is_terminal());
        assert!(SessionState::Failed(PositionError::TimedOut.into()).is_terminal());
    }

    #[test]
    fn test_fail_records_reason() {
        let mut session = RouteSession::new(SessionId::new());
        session.acquire_position();
        session.fail(PositionError::PermissionDenied.into());

        assert_eq!(
            session.failure_reason,
            Some(ErrorKind::Position(PositionError::PermissionDenied))
        );
        assert_eq!(
            session.state,
            SessionState::Failed(ErrorKind::Position(PositionError::PermissionDenied))
        );
    }

    #[test]
    fn test_state_serializes_with_reason() {
        let failed = SessionState::Failed(PositionError::Unsupported.into());

        assert_eq!(
            serde_json::to_value(failed).unwrap(),
            serde_json::json!({
                "state": "failed",
                "reason": { "source": "position", "kind": "unsupported" }
            })
        );
        assert_eq!(
            serde_json::to_value(SessionState::Ready).unwrap(),
            serde_json::json!({ "state": "ready" })
        );
    }
}
