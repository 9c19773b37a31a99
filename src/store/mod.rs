//! # Remote Store
//!
//! The HTTP API that persists categories and products, seen from the client.
//!
//! [`RemoteStore`] moves one [`StoreRequest`] to the server and hands back the raw
//! [`StoreReply`] (status + JSON body). Whether a reply counts as success is decided by
//! [`crate::framework::accept`].
//!
//! - [`http::HttpStore`] talks to a real server with `reqwest`.
//! - [`crate::framework::mock::MockStore`] answers from scripted expectations in tests.

pub mod http;

pub use http::HttpStore;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// HTTP verbs used by the catalog API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// One request against the API. `path` is absolute from the host root (`/api/...`).
#[derive(Debug, Clone, PartialEq)]
pub struct StoreRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl StoreRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: None }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self { method: Method::Post, path: path.into(), body: Some(body) }
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self { method: Method::Put, path: path.into(), body: Some(body) }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self { method: Method::Delete, path: path.into(), body: None }
    }
}

/// What came back from the server. A body that was not JSON is carried as `Value::Null`.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreReply {
    pub status: u16,
    pub body: Value,
}

impl StoreReply {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn ok(body: Value) -> Self {
        Self::new(200, body)
    }

    /// Transport-level success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decodes the `{ success, data?, id?, message? }` envelope, if the body has that shape.
    pub fn envelope(&self) -> Option<ApiEnvelope> {
        serde_json::from_value(self.body.clone()).ok()
    }
}

/// Response body contract shared by every endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_message")]
    pub message: Option<String>,
}

/// Accepts a number or a numeric string; anything else reads as absent.
fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Keeps string messages only.
fn lenient_message<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Failures below the HTTP status line: the request never produced a reply.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The HTTP client failed (connection refused, DNS, timeout, TLS...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server could not be reached for a reason reported as text.
    #[error("Server unreachable: {0}")]
    Unreachable(String),
}

/// The persistence collaborator of every entity manager.
#[async_trait]
pub trait RemoteStore: Send + Sync + 'static {
    async fn send(&self, request: StoreRequest) -> Result<StoreReply, StoreError>;
}
