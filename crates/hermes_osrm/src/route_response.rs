use hermes_navigation::routing::{
    InstructionDescriptor, ManeuverModifier, ManeuverType, RouteResponse, StepResponse,
};
use serde::Deserialize;

use crate::client::OsrmError;

#[derive(Deserialize)]
struct OsrmRouteResponse {
    code: String,

    #[serde(default)]
    message: Option<String>,

    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Deserialize)]
struct OsrmRoute {
    /// Meters
    distance: f64,

    /// Seconds
    duration: f64,

    #[serde(default)]
    legs: Vec<OsrmLeg>,
}

#[derive(Deserialize)]
struct OsrmLeg {
    #[serde(default)]
    steps: Vec<OsrmStep>,
}

#[derive(Deserialize)]
struct OsrmStep {
    distance: f64,
    duration: f64,

    #[serde(default)]
    name: String,
    maneuver: OsrmManeuver,
}

#[derive(Deserialize)]
struct OsrmManeuver {
    #[serde(rename = "type")]
    maneuver_type: String,
    modifier: Option<String>,
    exit: Option<u32>,
    bearing_after: Option<u16>,
}

impl From<OsrmStep> for StepResponse {
    fn from(step: OsrmStep) -> Self {
        let maneuver = step.maneuver;
        let mut instruction = InstructionDescriptor::new(ManeuverType::parse(&maneuver.maneuver_type))
            .with_road_name(step.name);

        if let Some(modifier) = maneuver.modifier.as_deref().and_then(ManeuverModifier::parse) {
            instruction = instruction.with_modifier(modifier);
        }
        if let Some(exit) = maneuver.exit {
            instruction = instruction.with_exit(exit);
        }
        if let Some(bearing_after) = maneuver.bearing_after {
            instruction = instruction.with_bearing_after(bearing_after);
        }

        StepResponse {
            distance_meters: step.distance,
            duration_seconds: step.duration,
            instruction,
        }
    }
}

/// Parses an OSRM `route` service answer. Steps of every leg of the first route are flattened in order.
pub fn parse_route_response(status: u16, body: &[u8]) -> Result<RouteResponse, OsrmError> {
    let response: OsrmRouteResponse = match serde_json::from_slice(body) {
        Ok(response) => response,
        Err(_) if !(200..300).contains(&status) => {
            return Err(OsrmError::Api {
                status,
                code: None,
                message: String::from_utf8_lossy(body).into_owned(),
            });
        }
        Err(err) => return Err(OsrmError::Deserialize(err)),
    };

    if response.code != "Ok" {
        return Err(OsrmError::Api {
            status,
            message: response.message.unwrap_or_else(|| response.code.clone()),
            code: Some(response.code),
        });
    }

    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or(OsrmError::IncompleteResponse)?;

    Ok(RouteResponse {
        steps: route
            .legs
            .into_iter()
            .flat_map(|leg| leg.steps)
            .map(StepResponse::from)
            .collect(),
        total_distance_meters: route.distance,
        total_duration_seconds: route.duration,
    })
}

#[cfg(test)]
mod tests {
    use hermes_navigation::routing::BackendError;

    use super::*;

    const ROUTE: &str = r#"{
        "code": "Ok",
        "routes": [{
            "distance": 1234.5,
            "duration": 181.2,
            "legs": [{
                "steps": [
                    {
                        "distance": 120.0,
                        "duration": 20.0,
                        "name": "Avenida Presidente Kennedy",
                        "maneuver": { "type": "depart", "bearing_after": 87, "location": [-46.4667, -24.0167] }
                    },
                    {
                        "distance": 1114.5,
                        "duration": 161.2,
                        "name": "",
                        "maneuver": { "type": "roundabout", "modifier": "right", "exit": 2, "bearing_after": 180, "location": [-46.467, -24.017] }
                    },
                    {
                        "distance": 0.0,
                        "duration": 0.0,
                        "name": "Rua Guaiaó",
                        "maneuver": { "type": "arrive", "modifier": "left", "location": [-46.468, -24.018] }
                    }
                ]
            }]
        }],
        "waypoints": []
    }"#;

    #[test]
    fn test_parse_route() {
        let response = parse_route_response(200, ROUTE.as_bytes()).unwrap();

        assert_eq!(response.total_distance_meters, 1234.5);
        assert_eq!(response.total_duration_seconds, 181.2);
        assert_eq!(response.steps.len(), 3);

        let depart = &response.steps[0].instruction;
        assert_eq!(depart.maneuver, ManeuverType::Depart);
        assert_eq!(depart.road_name.as_deref(), Some("Avenida Presidente Kennedy"));
        assert_eq!(depart.bearing_after, Some(87));
        assert_eq!(depart.modifier, None);

        let roundabout = &response.steps[1].instruction;
        assert_eq!(roundabout.maneuver, ManeuverType::Roundabout);
        assert_eq!(roundabout.modifier, Some(ManeuverModifier::Right));
        assert_eq!(roundabout.exit, Some(2));
        assert_eq!(roundabout.road_name, None);

        assert_eq!(response.steps[2].instruction.maneuver, ManeuverType::Arrive);
        assert_eq!(response.steps[1].distance_meters, 1114.5);
    }

    #[test]
    fn test_steps_of_all_legs_are_flattened() {
        let body = r#"{
            "code": "Ok",
            "routes": [{
                "distance": 20.0,
                "duration": 4.0,
                "legs": [
                    { "steps": [{ "distance": 10.0, "duration": 2.0, "name": "A", "maneuver": { "type": "depart" } }] },
                    { "steps": [{ "distance": 10.0, "duration": 2.0, "name": "B", "maneuver": { "type": "arrive" } }] }
                ]
            }]
        }"#;

        let response = parse_route_response(200, body.as_bytes()).unwrap();

        let names: Vec<_> = response
            .steps
            .iter()
            .map(|step| step.instruction.road_name.clone().unwrap_or_default())
            .collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_no_route() {
        let body = r#"{ "code": "NoRoute", "message": "Impossible route between points" }"#;

        let error = parse_route_response(400, body.as_bytes()).unwrap_err();

        assert!(matches!(
            &error,
            OsrmError::Api { status: 400, code: Some(code), message }
                if code == "NoRoute" && message == "Impossible route between points"
        ));
        assert_eq!(BackendError::from(error), BackendError::NoRoute);
    }

    #[test]
    fn test_non_json_error_page() {
        let error = parse_route_response(502, b"<html>Bad Gateway</html>").unwrap_err();

        assert_eq!(
            BackendError::from(error),
            BackendError::Status {
                status: 502,
                message: "<html>Bad Gateway</html>".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_success_body() {
        let error = parse_route_response(200, b"not json").unwrap_err();
        assert!(matches!(error, OsrmError::Deserialize(_)));

        let error = parse_route_response(200, br#"{ "code": "Ok", "routes": [] }"#).unwrap_err();
        assert!(matches!(error, OsrmError::IncompleteResponse));
    }
}
