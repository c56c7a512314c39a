use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;
use ureq::http::Response;
use ureq::{Agent, Body};

use crate::consts::{TRAFFIC_ACCEPT, TRAFFIC_RESOURCE};
use crate::error::AppError;
use crate::github::TrafficSource;
use crate::utils::debug_log;

/// Username/password pair for basic auth. The username also names the repo owner.
#[derive(Clone)]
pub(crate) struct Credentials {
    pub(crate) username: String,
    pub(crate) password: String,
}

impl Credentials {
    fn basic_auth(&self) -> String {
        let token = STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {token}")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

pub(crate) fn traffic_url(api_base: &str, owner: &str, repo: &str, op: &str) -> String {
    format!(
        "{}/repos/{owner}/{repo}/traffic/{op}",
        api_base.trim_end_matches('/')
    )
}

pub(crate) struct GitHubClient {
    agent: Agent,
    api_base: String,
    credentials: Credentials,
}

impl GitHubClient {
    pub(crate) fn new(api_base: &str, credentials: Credentials) -> Self {
        // Error statuses still carry a JSON body with a "message" worth showing.
        let agent: Agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();
        Self {
            agent,
            api_base: api_base.to_string(),
            credentials,
        }
    }

    /// Issue one authenticated GET for `resource`/`op` on `repo`.
    ///
    /// Returns the raw response whatever its status; only transport failures
    /// and unknown resource kinds are errors.
    pub(crate) fn send_request(
        &self,
        resource: &str,
        repo: &str,
        op: &str,
        headers: Option<&[(&str, &str)]>,
    ) -> Result<Response<Body>, AppError> {
        if resource != TRAFFIC_RESOURCE {
            return Err(AppError::UnsupportedResource {
                resource: resource.to_string(),
            });
        }

        let url = traffic_url(&self.api_base, &self.credentials.username, repo, op);
        debug_log(format_args!("GET {url}"));

        let mut request = self
            .agent
            .get(&url)
            .header("Authorization", self.credentials.basic_auth());
        for (name, value) in headers.unwrap_or_default() {
            request = request.header(*name, *value);
        }
        Ok(request.call()?)
    }
}

impl TrafficSource for GitHubClient {
    fn fetch(&self, resource: &str, repo: &str, op: &str) -> Result<Value, AppError> {
        let response = self.send_request(resource, repo, op, Some(&[("Accept", TRAFFIC_ACCEPT)][..]))?;
        debug_log(format_args!("HTTP {}", response.status()));
        let mut body = response.into_body();
        let text = body.read_to_string()?;
        Ok(serde_json::from_str(&text)?)
    }
}
