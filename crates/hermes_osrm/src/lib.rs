mod client;
mod route_response;

pub use client::{
    OSRM_PROFILE_ENV_VAR, OSRM_ROUTE_API_PATH, OSRM_URL_ENV_VAR, OsrmError, OsrmRouteClient,
    OsrmRouteClientParams,
};
pub use route_response::parse_route_response;
