use schemars::JsonSchema;
use serde::Serialize;

use crate::geo::{Coordinate, Destination};

use super::{InstructionDescriptor, RouteResponse};

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct RouteRequest {
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub destination_label: String,
}

impl RouteRequest {
    pub fn new(origin: Coordinate, destination: &Destination) -> Self {
        Self {
            origin,
            destination: destination.coordinate,
            destination_label: destination.label.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct RouteStep {
    pub instruction: InstructionDescriptor,
    pub distance_meters: f64,
    pub duration_seconds: f64,

    /// 0-based, unique and strictly increasing within a route
    pub sequence_index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct RouteResult {
    pub steps: Vec<RouteStep>,
    pub total_distance_meters: f64,
    pub total_duration_seconds: f64,
}

impl RouteResult {
    /// Numbers the steps in provider order.
    pub fn from_response(response: RouteResponse) -> Self {
        let steps = response
            .steps
            .into_iter()
            .enumerate()
            .map(|(sequence_index, step)| RouteStep {
                instruction: step.instruction,
                distance_meters: non_negative(step.distance_meters),
                duration_seconds: non_negative(step.duration_seconds),
                sequence_index,
            })
            .collect();

        Self {
            steps,
            total_distance_meters: non_negative(response.total_distance_meters),
            total_duration_seconds: non_negative(response.total_duration_seconds),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
