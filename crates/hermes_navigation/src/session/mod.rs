mod presenter;
mod route_session;
mod route_session_controller;
mod route_snapshot;

pub use presenter::{NoopPresenter, Presenter};
pub use route_session::{RouteSession, SessionId, SessionState};
pub use route_session_controller::RouteSessionController;
pub use route_snapshot::{
    DestinationFallback, RouteSnapshot, RouteSummary, SessionFailure, SessionWarning, WarningKind,
};
