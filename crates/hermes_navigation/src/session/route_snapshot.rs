use schemars::JsonSchema;
use serde::Serialize;

use crate::{
    error::ErrorKind,
    geo::{Coordinate, Destination},
    instructions::{NarratedInstruction, duration_minutes, format_total_distance},
    routing::RouteResult,
};

use super::{SessionId, SessionState};

/// Read-only view of the live session handed to presenters on every transition.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct RouteSnapshot {
    pub session_id: Option<SessionId>,
    pub state: SessionState,
    pub destination: Option<Destination>,
    pub instructions: Vec<NarratedInstruction>,
    pub summary: Option<RouteSummary>,

    /// A route was found but it has no steps
    pub no_instructions: bool,
    pub notice: Option<String>,
    pub warning: Option<SessionWarning>,
    pub error: Option<SessionFailure>,

    /// Set when no position could be found, the map centers on the destination instead
    pub fallback: Option<DestinationFallback>,
}

impl RouteSnapshot {
    pub fn idle() -> Self {
        Self {
            session_id: None,
            state: SessionState::Idle,
            destination: None,
            instructions: Vec::new(),
            summary: None,
            no_instructions: false,
            notice: None,
            warning: None,
            error: None,
            fallback: None,
        }
    }

    pub fn is_destination_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct RouteSummary {
    pub total_distance_label: String,
    pub total_duration_minutes: u32,
    pub step_count: usize,
}

impl From<&RouteResult> for RouteSummary {
    fn from(result: &RouteResult) -> Self {
        Self {
            total_distance_label: format_total_distance(result.total_distance_meters),
            total_duration_minutes: duration_minutes(result.total_duration_seconds),
            step_count: result.steps.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WarningKind {
    LowAccuracy { accuracy_meters: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct SessionWarning {
    pub kind: WarningKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct SessionFailure {
    pub kind: ErrorKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct DestinationFallback {
    pub label: String,
    pub coordinate: Coordinate,
    pub coordinate_text: String,
}

impl From<&Destination> for DestinationFallback {
    fn from(destination: &Destination) -> Self {
        Self {
            label: destination.label.clone(),
            coordinate: destination.coordinate,
            coordinate_text: destination.coordinate.to_display_string(),
        }
    }
}
