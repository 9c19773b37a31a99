//! # Mock Framework
//!
//! Utilities for testing managers and views without a server.
//!
//! - [`MockStore`] is a [`RemoteStore`] answering from scripted expectations and recording
//!   every request it receives.
//! - [`ScriptedConfirm`] is a [`Confirm`] giving pre-recorded answers.
//!
//! # Example
//! ```ignore
//! let store = MockStore::new();
//! store
//!     .expect(Method::Get, "/api/categorias")
//!     .return_json(json!({ "success": true, "data": [{ "id": 1, "name": "Beverages" }] }));
//!
//! let mut manager = EntityManager::<Category, _>::new(store.clone(), confirm, messages);
//! manager.initial_load().await?;
//!
//! store.verify(); // Ensures all expectations were met
//! ```

use crate::framework::Confirm;
use crate::store::{Method, RemoteStore, StoreError, StoreReply, StoreRequest};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// One scripted reply, matched by method and path.
struct Expectation {
    method: Method,
    path: String,
    reply: Result<StoreReply, String>,
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    requests: Vec<StoreRequest>,
}

/// A scripted remote store.
///
/// Each incoming request consumes the first pending expectation with the same method
/// and path, so concurrently issued requests may arrive in any order. A request with no
/// matching expectation panics.
#[derive(Clone, Default)]
pub struct MockStore {
    state: Arc<Mutex<MockState>>,
}

impl MockStore {
    /// Creates a new mock store with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a request with this method and path.
    pub fn expect(&self, method: Method, path: impl Into<String>) -> ReplyBuilder {
        ReplyBuilder {
            method,
            path: path.into(),
            state: self.state.clone(),
        }
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<StoreRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.expectations.is_empty() {
            let pending: Vec<String> = state
                .expectations
                .iter()
                .map(|e| format!("{} {}", e.method, e.path))
                .collect();
            panic!("Not all expectations were met. Remaining: {:?}", pending);
        }
    }
}

#[async_trait]
impl RemoteStore for MockStore {
    async fn send(&self, request: StoreRequest) -> Result<StoreReply, StoreError> {
        let mut state = self.state.lock().unwrap();
        let position = state
            .expectations
            .iter()
            .position(|e| e.method == request.method && e.path == request.path);
        let Some(position) = position else {
            panic!("Unexpected request: {} {}", request.method, request.path);
        };
        let expectation = state.expectations.remove(position).unwrap();
        state.requests.push(request);
        drop(state);

        expectation.reply.map_err(StoreError::Unreachable)
    }
}

/// Builder for the reply to one expected request.
pub struct ReplyBuilder {
    method: Method,
    path: String,
    state: Arc<Mutex<MockState>>,
}

impl ReplyBuilder {
    fn push(self, reply: Result<StoreReply, String>) {
        let mut state = self.state.lock().unwrap();
        state.expectations.push_back(Expectation {
            method: self.method,
            path: self.path,
            reply,
        });
    }

    /// Replies 200 with `body`.
    pub fn return_json(self, body: Value) {
        self.push(Ok(StoreReply::ok(body)));
    }

    /// Replies with an arbitrary status and body.
    pub fn return_status(self, status: u16, body: Value) {
        self.push(Ok(StoreReply::new(status, body)));
    }

    /// Fails as if the server could not be reached.
    pub fn return_unreachable(self, reason: impl Into<String>) {
        self.push(Err(reason.into()));
    }
}

// =============================================================================
// CONFIRMATION
// =============================================================================

/// A confirmation provider answering from a script.
///
/// Answers are consumed in order; once the script is exhausted every prompt is declined.
#[derive(Clone, Default)]
pub struct ScriptedConfirm {
    answers: Arc<Mutex<VecDeque<bool>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedConfirm {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: Arc::new(Mutex::new(answers.into_iter().collect())),
            prompts: Arc::default(),
        }
    }

    /// Every prompt shown so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Confirm for ScriptedConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answers.lock().unwrap().pop_front().unwrap_or(false)
    }
}
