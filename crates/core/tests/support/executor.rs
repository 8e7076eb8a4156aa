//! Scripted `RequestExecutor` double

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use promohub_core::RequestExecutor;
use promohub_domain::{ApiError, RequestOptions};
use serde_json::Value;

/// Answers each path with a fixed outcome and records every call.
///
/// Paths without a scripted outcome fail with a plain 404.
#[derive(Default)]
pub struct ScriptedExecutor {
    responses: HashMap<String, Result<Value, ApiError>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful payload for `path`.
    pub fn ok(mut self, path: &str, value: Value) -> Self {
        self.responses.insert(path.to_string(), Ok(value));
        self
    }

    /// Script a failure for `path`.
    pub fn fail(mut self, path: &str, error: ApiError) -> Self {
        self.responses.insert(path.to_string(), Err(error));
        self
    }

    /// Script an HTTP failure for `path`.
    pub fn status(self, path: &str, status: u16, message: &str) -> Self {
        self.fail(path, ApiError::Http { status, message: message.to_string() })
    }

    /// Paths requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl RequestExecutor for ScriptedExecutor {
    async fn execute(&self, path: &str, _options: &RequestOptions) -> Result<Value, ApiError> {
        self.calls.lock().push(path.to_string());
        self.responses.get(path).cloned().unwrap_or_else(|| {
            Err(ApiError::Http { status: 404, message: "Not Found".to_string() })
        })
    }
}
