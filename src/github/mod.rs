//! GitHub traffic API access
//!
//! `client` sends the authenticated request, `reply` turns the JSON body into
//! either traffic data or the API's error message.

pub(crate) mod client;
pub(crate) mod reply;

use serde_json::Value;

use crate::error::AppError;

pub(crate) use client::{Credentials, GitHubClient};
pub(crate) use reply::ApiReply;

/// Anything that can answer a traffic query with a JSON body
pub(crate) trait TrafficSource {
    fn fetch(&self, resource: &str, repo: &str, op: &str) -> Result<Value, AppError>;
}
