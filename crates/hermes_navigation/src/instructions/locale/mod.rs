mod english;
mod portuguese;

pub use english::ENGLISH;
pub use portuguese::BRAZILIAN_PORTUGUESE;

use crate::{
    error::{ErrorKind, PositionError, RoutingErrorKind},
    routing::{InstructionDescriptor, ManeuverModifier, ManeuverType},
};

/// Localized texts for instructions and user facing messages.
pub trait LocalizationTable: Send + Sync {
    /// BCP 47 tag the table is written for, e.g. `pt-BR`.
    fn locale_tag(&self) -> &str;

    /// `None` when the table cannot phrase this maneuver.
    fn instruction_text(&self, descriptor: &InstructionDescriptor) -> Option<String>;

    fn instruction_unavailable(&self) -> String;

    fn no_instructions(&self) -> String;

    fn error_message(&self, kind: ErrorKind) -> String;

    fn low_accuracy_warning(&self, accuracy_meters: f64) -> String;
}

#[derive(Debug, Clone, Copy)]
pub struct ModifierWords {
    pub uturn: &'static str,
    pub sharp_right: &'static str,
    pub right: &'static str,
    pub slight_right: &'static str,
    pub straight: &'static str,
    pub slight_left: &'static str,
    pub left: &'static str,
    pub sharp_left: &'static str,
}

/// Instruction templates. Placeholders: `{modifier}`, `{side}`, `{direction}`,
/// `{ordinal}`, `{road}` and `{instruction}`.
#[derive(Debug, Clone, Copy)]
pub struct Templates {
    pub head: &'static str,
    pub depart: &'static str,
    pub arrive: &'static str,
    pub arrive_side: &'static str,
    pub turn: &'static str,
    pub go_straight: &'static str,
    pub u_turn: &'static str,
    pub continue_ahead: &'static str,
    pub continue_modifier: &'static str,
    pub merge: &'static str,
    pub merge_modifier: &'static str,
    pub ramp: &'static str,
    pub ramp_side: &'static str,
    pub exit: &'static str,
    pub exit_side: &'static str,
    pub fork_side: &'static str,
    pub fork_straight: &'static str,
    pub end_of_road: &'static str,
    pub roundabout: &'static str,
    pub roundabout_exit: &'static str,
    pub exit_roundabout: &'static str,

    /// Appends a road name to a departure
    pub on_road: &'static str,

    /// Appends a road name to any other maneuver
    pub onto_road: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Messages {
    pub permission_denied: &'static str,
    pub position_unavailable: &'static str,
    pub position_timed_out: &'static str,
    pub unsupported: &'static str,
    pub network_unreachable: &'static str,
    pub no_route_found: &'static str,
    pub server_error: &'static str,
    pub routing_unknown: &'static str,

    /// `{accuracy}` is replaced by the rounded accuracy in meters
    pub low_accuracy: &'static str,
    pub no_instructions: &'static str,
    pub instruction_unavailable: &'static str,
}

/// Template driven [`LocalizationTable`].
#[derive(Debug, Clone, Copy)]
pub struct Phrasebook {
    pub locale_tag: &'static str,
    pub modifiers: ModifierWords,
    pub left_side: &'static str,
    pub right_side: &'static str,

    /// Compass words starting at north, clockwise, 45° apart
    pub directions: [&'static str; 8],
    pub ordinal: fn(u32) -> String,
    pub templates: Templates,
    pub messages: Messages,
}

impl Phrasebook {
    fn modifier_word(&self, modifier: ManeuverModifier) -> &'static str {
        let words = &self.modifiers;
        match modifier {
            ManeuverModifier::UTurn => words.uturn,
            ManeuverModifier::SharpRight => words.sharp_right,
            ManeuverModifier::Right => words.right,
            ManeuverModifier::SlightRight => words.slight_right,
            ManeuverModifier::Straight => words.straight,
            ManeuverModifier::SlightLeft => words.slight_left,
            ManeuverModifier::Left => words.left,
            ManeuverModifier::SharpLeft => words.sharp_left,
        }
    }

    fn side(&self, modifier: Option<ManeuverModifier>) -> Option<&'static str> {
        match modifier {
            Some(modifier) if modifier.is_left() => Some(self.left_side),
            Some(modifier) if modifier.is_right() => Some(self.right_side),
            _ => None,
        }
    }

    fn direction(&self, bearing: u16) -> &'static str {
        let sector = ((f64::from(bearing % 360) + 22.5) / 45.0).floor() as usize % 8;
        self.directions[sector]
    }

    fn turn_with(&self, template: &str, modifier: Option<ManeuverModifier>) -> String {
        let templates = &self.templates;
        match modifier {
            Some(ManeuverModifier::UTurn) => templates.u_turn.to_string(),
            Some(ManeuverModifier::Straight) => templates.go_straight.to_string(),
            Some(modifier) => fill(template, "{modifier}", self.modifier_word(modifier)),
            None => templates.continue_ahead.to_string(),
        }
    }

    fn continue_with(&self, modifier: Option<ManeuverModifier>) -> String {
        let templates = &self.templates;
        match modifier {
            Some(ManeuverModifier::UTurn) => templates.u_turn.to_string(),
            Some(ManeuverModifier::Straight) | None => templates.continue_ahead.to_string(),
            Some(modifier) => fill(
                templates.continue_modifier,
                "{modifier}",
                self.modifier_word(modifier),
            ),
        }
    }

    fn with_side(&self, plain: &str, sided: &str, modifier: Option<ManeuverModifier>) -> String {
        match self.side(modifier) {
            Some(side) => fill(sided, "{side}", side),
            None => plain.to_string(),
        }
    }

    fn append_road(template: &str, instruction: String, road: Option<&str>) -> String {
        match road {
            Some(road) => fill(&fill(template, "{instruction}", &instruction), "{road}", road),
            None => instruction,
        }
    }
}

impl LocalizationTable for Phrasebook {
    fn locale_tag(&self) -> &str {
        self.locale_tag
    }

    fn instruction_text(&self, descriptor: &InstructionDescriptor) -> Option<String> {
        let templates = &self.templates;
        let road = descriptor.road_name.as_deref();
        let modifier = descriptor.modifier;

        let instruction = match &descriptor.maneuver {
            ManeuverType::Depart => {
                let instruction = match descriptor.bearing_after {
                    Some(bearing) => fill(templates.head, "{direction}", self.direction(bearing)),
                    None => templates.depart.to_string(),
                };
                return Some(Self::append_road(templates.on_road, instruction, road));
            }
            ManeuverType::Arrive => {
                return Some(self.with_side(templates.arrive, templates.arrive_side, modifier));
            }
            ManeuverType::Turn | ManeuverType::RoundaboutTurn => {
                self.turn_with(templates.turn, modifier)
            }
            ManeuverType::EndOfRoad => self.turn_with(templates.end_of_road, modifier),
            ManeuverType::NewName => templates.continue_ahead.to_string(),
            ManeuverType::Continue | ManeuverType::UseLane | ManeuverType::Notification => {
                self.continue_with(modifier)
            }
            ManeuverType::Merge => match modifier {
                Some(modifier) if modifier != ManeuverModifier::Straight => fill(
                    templates.merge_modifier,
                    "{modifier}",
                    self.modifier_word(modifier),
                ),
                _ => templates.merge.to_string(),
            },
            ManeuverType::OnRamp => self.with_side(templates.ramp, templates.ramp_side, modifier),
            ManeuverType::OffRamp => self.with_side(templates.exit, templates.exit_side, modifier),
            ManeuverType::Fork => {
                self.with_side(templates.fork_straight, templates.fork_side, modifier)
            }
            ManeuverType::Roundabout | ManeuverType::Rotary => match descriptor.exit {
                Some(exit) if exit > 0 => {
                    fill(templates.roundabout_exit, "{ordinal}", &(self.ordinal)(exit))
                }
                _ => templates.roundabout.to_string(),
            },
            ManeuverType::ExitRoundabout | ManeuverType::ExitRotary => {
                templates.exit_roundabout.to_string()
            }
            ManeuverType::Other(_) => return None,
        };

        Some(Self::append_road(templates.onto_road, instruction, road))
    }

    fn instruction_unavailable(&self) -> String {
        self.messages.instruction_unavailable.to_string()
    }

    fn no_instructions(&self) -> String {
        self.messages.no_instructions.to_string()
    }

    fn error_message(&self, kind: ErrorKind) -> String {
        let messages = &self.messages;
        match kind {
            ErrorKind::Position(PositionError::PermissionDenied) => messages.permission_denied,
            ErrorKind::Position(PositionError::Unavailable) => messages.position_unavailable,
            ErrorKind::Position(PositionError::TimedOut) => messages.position_timed_out,
            ErrorKind::Position(PositionError::Unsupported) => messages.unsupported,
            ErrorKind::Routing(RoutingErrorKind::NetworkUnreachable) => {
                messages.network_unreachable
            }
            ErrorKind::Routing(RoutingErrorKind::NoRouteFound) => messages.no_route_found,
            ErrorKind::Routing(RoutingErrorKind::ServerError) => messages.server_error,
            ErrorKind::Routing(RoutingErrorKind::Unknown) => messages.routing_unknown,
        }
        .to_string()
    }

    fn low_accuracy_warning(&self, accuracy_meters: f64) -> String {
        let accuracy = accuracy_meters.max(0.0).round() as u64;
        fill(
            self.messages.low_accuracy,
            "{accuracy}",
            &accuracy.to_string(),
        )
    }
}

fn fill(template: &str, placeholder: &str, value: &str) -> String {
    template.replace(placeholder, value)
}
