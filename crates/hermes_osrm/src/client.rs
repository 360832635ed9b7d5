use std::env::VarError;

use hermes_navigation::routing::{BackendError, RouteQuery, RouteResponse, RoutingBackend};
use thiserror::Error;
use tracing::debug;

use crate::route_response::parse_route_response;

#[derive(Debug, Error)]
pub enum OsrmError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Incomplete response")]
    IncompleteResponse,
}

impl From<OsrmError> for BackendError {
    fn from(error: OsrmError) -> Self {
        match error {
            OsrmError::Request(error) => match error.status() {
                Some(status) => BackendError::Status {
                    status: status.as_u16(),
                    message: error.to_string(),
                },
                None => BackendError::Unreachable(error.to_string()),
            },
            OsrmError::Api { code, .. }
                if matches!(code.as_deref(), Some("NoRoute") | Some("NoSegment")) =>
            {
                BackendError::NoRoute
            }
            OsrmError::Api {
                status, message, ..
            } => BackendError::Status { status, message },
            OsrmError::Deserialize(error) => BackendError::Malformed(error.to_string()),
            OsrmError::IncompleteResponse => {
                BackendError::Malformed("incomplete response".to_string())
            }
        }
    }
}

pub const OSRM_ROUTE_API_PATH: &str = "/route/v1/";
pub const OSRM_URL_ENV_VAR: &str = "OSRM_URL";
pub const OSRM_PROFILE_ENV_VAR: &str = "OSRM_PROFILE";

#[derive(Debug, Clone)]
pub struct OsrmRouteClientParams {
    pub osrm_url: String,
    pub profile: String,
}

impl Default for OsrmRouteClientParams {
    fn default() -> Self {
        Self {
            osrm_url: "https://router.project-osrm.org".to_string(),
            profile: "driving".to_string(),
        }
    }
}

impl OsrmRouteClientParams {
    /// Reads `OSRM_URL` and `OSRM_PROFILE`, keeping the defaults for unset variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|name| std::env::var(name))
    }

    fn from_vars<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let defaults = Self::default();

        let params = Self {
            osrm_url: var_or(&lookup, OSRM_URL_ENV_VAR, defaults.osrm_url)?,
            profile: var_or(&lookup, OSRM_PROFILE_ENV_VAR, defaults.profile)?,
        };

        anyhow::ensure!(
            !params.osrm_url.trim().is_empty(),
            "{} must not be empty",
            OSRM_URL_ENV_VAR
        );
        anyhow::ensure!(
            !params.profile.trim().is_empty(),
            "{} must not be empty",
            OSRM_PROFILE_ENV_VAR
        );

        Ok(params)
    }
}

fn var_or<F>(lookup: &F, name: &str, default: String) -> anyhow::Result<String>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(name) {
        Ok(value) => Ok(value),
        Err(VarError::NotPresent) => Ok(default),
        Err(err) => Err(anyhow::anyhow!("{}: {}", name, err)),
    }
}

pub struct OsrmRouteClient {
    params: OsrmRouteClientParams,
    client: reqwest::Client,
}

impl OsrmRouteClient {
    pub fn new(params: OsrmRouteClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    pub async fn fetch(&self, query: RouteQuery) -> Result<RouteResponse, OsrmError> {
        let url = self.route_url(&query);
        debug!(%url, "OSRM: requesting route");

        let response = self
            .client
            .get(url)
            .query(&[
                ("steps", "true"),
                ("overview", "false"),
                ("alternatives", "false"),
            ])
            .send()
            .await?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await?;

        parse_route_response(status, bytes.as_ref())
    }

    /// `{url}/route/v1/{profile}/{lng},{lat};{lng},{lat}`
    fn route_url(&self, query: &RouteQuery) -> String {
        let mut url = self.params.osrm_url.trim_end_matches('/').to_string();
        url.push_str(OSRM_ROUTE_API_PATH);
        url.push_str(&self.params.profile);
        url.push('/');

        for (i, coordinate) in [query.origin, query.destination].iter().enumerate() {
            let point: geo_types::Point = coordinate.into();
            url.push_str(&format!("{},{}", point.x(), point.y()));

            if i == 0 {
                url.push(';');
            }
        }

        url
    }
}

impl RoutingBackend for OsrmRouteClient {
    async fn fetch_route(&self, query: RouteQuery) -> Result<RouteResponse, BackendError> {
        Ok(self.fetch(query).await?)
    }
}

#[cfg(test)]
mod tests {
    use hermes_navigation::geo::Coordinate;

    use super::*;

    fn query() -> RouteQuery {
        RouteQuery {
            origin: Coordinate::new(-24.0167, -46.4667).unwrap(),
            destination: Coordinate::new(-24.018, -46.468).unwrap(),
        }
    }

    #[test]
    fn test_route_url() {
        let client = OsrmRouteClient::new(OsrmRouteClientParams {
            osrm_url: "http://localhost:5000/".to_string(),
            profile: "foot".to_string(),
        });

        assert_eq!(
            client.route_url(&query()),
            "http://localhost:5000/route/v1/foot/-46.4667,-24.0167;-46.468,-24.018"
        );
    }

    #[test]
    fn test_default_params() {
        let params = OsrmRouteClientParams::default();
        assert_eq!(params.osrm_url, "https://router.project-osrm.org");
        assert_eq!(params.profile, "driving");
    }

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, VarError> {
        let pairs: Vec<(String, String)> = pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        move |name| {
            pairs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn test_params_from_vars() {
        let params = OsrmRouteClientParams::from_vars(vars(&[])).unwrap();
        assert_eq!(params.osrm_url, "https://router.project-osrm.org");
        assert_eq!(params.profile, "driving");

        let params = OsrmRouteClientParams::from_vars(vars(&[
            (OSRM_URL_ENV_VAR, "http://localhost:5000"),
            (OSRM_PROFILE_ENV_VAR, "bike"),
        ]))
        .unwrap();
        assert_eq!(params.osrm_url, "http://localhost:5000");
        assert_eq!(params.profile, "bike");
    }

    #[test]
    fn test_params_reject_empty_values() {
        let error = OsrmRouteClientParams::from_vars(vars(&[(OSRM_URL_ENV_VAR, "  ")])).unwrap_err();
        assert!(error.to_string().contains(OSRM_URL_ENV_VAR));

        let error =
            OsrmRouteClientParams::from_vars(vars(&[(OSRM_PROFILE_ENV_VAR, "")])).unwrap_err();
        assert!(error.to_string().contains(OSRM_PROFILE_ENV_VAR));
    }

    #[test]
    fn test_params_reject_non_unicode_value() {
        let error = OsrmRouteClientParams::from_vars(|name| {
            if name == OSRM_URL_ENV_VAR {
                Err(VarError::NotUnicode("\u{fffd}".into()))
            } else {
                Err(VarError::NotPresent)
            }
        })
        .unwrap_err();

        assert!(error.to_string().starts_with(OSRM_URL_ENV_VAR));
    }

    #[test]
    fn test_backend_error_mapping() {
        let no_route = OsrmError::Api {
            status: 400,
            code: Some("NoRoute".to_string()),
            message: "Impossible route between points".to_string(),
        };
        assert_eq!(BackendError::from(no_route), BackendError::NoRoute);

        let no_segment = OsrmError::Api {
            status: 400,
            code: Some("NoSegment".to_string()),
            message: String::new(),
        };
        assert_eq!(BackendError::from(no_segment), BackendError::NoRoute);

        let busy = OsrmError::Api {
            status: 503,
            code: None,
            message: "busy".to_string(),
        };
        assert_eq!(
            BackendError::from(busy),
            BackendError::Status {
                status: 503,
                message: "busy".to_string()
            }
        );

        assert!(matches!(
            BackendError::from(OsrmError::IncompleteResponse),
            BackendError::Malformed(_)
        ));
    }
}
