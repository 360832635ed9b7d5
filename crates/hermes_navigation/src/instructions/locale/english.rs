use super::{Messages, ModifierWords, Phrasebook, Templates};

pub static ENGLISH: Phrasebook = Phrasebook {
    locale_tag: "en",
    modifiers: ModifierWords {
        uturn: "around",
        sharp_right: "sharp right",
        right: "right",
        slight_right: "slightly right",
        straight: "straight",
        slight_left: "slightly left",
        left: "left",
        sharp_left: "sharp left",
    },
    left_side: "left",
    right_side: "right",
    directions: [
        "north",
        "northeast",
        "east",
        "southeast",
        "south",
        "southwest",
        "west",
        "northwest",
    ],
    ordinal,
    templates: Templates {
        head: "Head {direction}",
        depart: "Start out",
        arrive: "You have arrived at your destination",
        arrive_side: "You have arrived at your destination, on the {side}",
        turn: "Turn {modifier}",
        go_straight: "Go straight",
        u_turn: "Make a U-turn",
        continue_ahead: "Continue",
        continue_modifier: "Continue {modifier}",
        merge: "Merge",
        merge_modifier: "Merge {modifier}",
        ramp: "Take the ramp",
        ramp_side: "Take the ramp on the {side}",
        exit: "Take the exit",
        exit_side: "Take the exit on the {side}",
        fork_side: "Keep {side} at the fork",
        fork_straight: "Keep straight at the fork",
        end_of_road: "Turn {modifier} at the end of the road",
        roundabout: "Enter the roundabout",
        roundabout_exit: "Enter the roundabout and take the {ordinal} exit",
        exit_roundabout: "Exit the roundabout",
        on_road: "{instruction} on {road}",
        onto_road: "{instruction} onto {road}",
    },
    messages: Messages {
        permission_denied: "Could not get your location. Location access was denied, check the browser permissions.",
        position_unavailable: "Could not get your location. Location information is unavailable.",
        position_timed_out: "Could not get your location. The location request timed out, please try again.",
        unsupported: "Your browser does not support geolocation or it is disabled.",
        network_unreachable: "Could not connect to the routing server. Check your internet connection.",
        no_route_found: "Could not find a route between the selected points.",
        server_error: "The routing server had an error. Please try again later.",
        routing_unknown: "Could not calculate the route. Check your connection and try again.",
        low_accuracy: "Your location has low accuracy (about {accuracy}m). The calculated route may not be accurate.",
        no_instructions: "No instructions available.",
        instruction_unavailable: "Instruction unavailable",
    },
};

fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };

    format!("{n}{suffix}")
}
