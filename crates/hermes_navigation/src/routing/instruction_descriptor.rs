use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Maneuver vocabulary of OSRM-compatible routing services.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ManeuverType {
    Depart,
    Arrive,
    Turn,
    NewName,
    Continue,
    Merge,
    OnRamp,
    OffRamp,
    Fork,
    EndOfRoad,
    UseLane,
    Roundabout,
    Rotary,
    RoundaboutTurn,
    ExitRoundabout,
    ExitRotary,
    Notification,
    Other(String),
}

impl ManeuverType {
    /// Parses the provider's spelling (`"end of road"`, `"on ramp"`, ...).
    pub fn parse(value: &str) -> Self {
        match value {
            "depart" => ManeuverType::Depart,
            "arrive" => ManeuverType::Arrive,
            "turn" => ManeuverType::Turn,
            "new name" => ManeuverType::NewName,
            "continue" => ManeuverType::Continue,
            "merge" => ManeuverType::Merge,
            "on ramp" => ManeuverType::OnRamp,
            "off ramp" => ManeuverType::OffRamp,
            "fork" => ManeuverType::Fork,
            "end of road" => ManeuverType::EndOfRoad,
            "use lane" => ManeuverType::UseLane,
            "roundabout" => ManeuverType::Roundabout,
            "rotary" => ManeuverType::Rotary,
            "roundabout turn" => ManeuverType::RoundaboutTurn,
            "exit roundabout" => ManeuverType::ExitRoundabout,
            "exit rotary" => ManeuverType::ExitRotary,
            "notification" => ManeuverType::Notification,
            other => ManeuverType::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ManeuverModifier {
    UTurn,
    SharpRight,
    Right,
    SlightRight,
    Straight,
    SlightLeft,
    Left,
    SharpLeft,
}

impl ManeuverModifier {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "uturn" => Some(ManeuverModifier::UTurn),
            "sharp right" => Some(ManeuverModifier::SharpRight),
            "right" => Some(ManeuverModifier::Right),
            "slight right" => Some(ManeuverModifier::SlightRight),
            "straight" => Some(ManeuverModifier::Straight),
            "slight left" => Some(ManeuverModifier::SlightLeft),
            "left" => Some(ManeuverModifier::Left),
            "sharp left" => Some(ManeuverModifier::SharpLeft),
            _ => None,
        }
    }

    pub fn is_left(&self) -> bool {
        matches!(
            self,
            ManeuverModifier::SlightLeft | ManeuverModifier::Left | ManeuverModifier::SharpLeft
        )
    }

    pub fn is_right(&self) -> bool {
        matches!(
            self,
            ManeuverModifier::SlightRight | ManeuverModifier::Right | ManeuverModifier::SharpRight
        )
    }
}

/// Provider description of one maneuver. Only the instruction compiler looks inside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InstructionDescriptor {
    pub maneuver: ManeuverType,
    pub modifier: Option<ManeuverModifier>,
    pub road_name: Option<String>,

    /// Roundabout exit number, 1-based
    pub exit: Option<u32>,

    /// Heading after the maneuver in degrees, 0 = north
    pub bearing_after: Option<u16>,
}

impl InstructionDescriptor {
    pub fn new(maneuver: ManeuverType) -> Self {
        Self {
            maneuver,
            modifier: None,
            road_name: None,
            exit: None,
            bearing_after: None,
        }
    }

    pub fn with_modifier(mut self, modifier: ManeuverModifier) -> Self {
        self.modifier = Some(modifier);
        self
    }

    pub fn with_road_name(mut self, road_name: impl Into<String>) -> Self {
        let road_name = road_name.into();
        self.road_name = if road_name.trim().is_empty() {
            None
        } else {
            Some(road_name)
        };
        self
    }

    pub fn with_exit(mut self, exit: u32) -> Self {
        self.exit = Some(exit);
        self
    }

    pub fn with_bearing_after(mut self, bearing_after: u16) -> Self {
        self.bearing_after = Some(bearing_after);
        self
    }
}
