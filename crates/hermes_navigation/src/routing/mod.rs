mod instruction_descriptor;
mod route;
mod routing_backend;
mod routing_client;

pub use instruction_descriptor::{InstructionDescriptor, ManeuverModifier, ManeuverType};
pub use route::{RouteRequest, RouteResult, RouteStep};
pub use routing_backend::{BackendError, RouteQuery, RouteResponse, RoutingBackend, StepResponse};
pub use routing_client::RoutingClient;
