//! Request description handed to the executor

use serde_json::Value;

/// HTTP verbs used by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

crate::impl_wire_enum_conversions!(HttpMethod {
    Get => "GET",
    Post => "POST",
    Put => "PUT",
    Patch => "PATCH",
    Delete => "DELETE",
});

/// Options for a single logical request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
    /// Never attach credentials (login, register, public reads)
    pub skip_auth: bool,
    /// Do not attempt refresh-on-401 (set on the replayed request)
    pub skip_refresh: bool,
}

impl RequestOptions {
    /// Authenticated GET
    pub fn get() -> Self {
        Self::default()
    }

    /// Authenticated request with the given method and no body
    pub fn method(method: HttpMethod) -> Self {
        Self { method, ..Self::default() }
    }

    /// Authenticated POST without a body
    pub fn post() -> Self {
        Self::method(HttpMethod::Post)
    }

    /// Authenticated DELETE
    pub fn delete() -> Self {
        Self::method(HttpMethod::Delete)
    }

    /// Authenticated request carrying a JSON body
    pub fn with_json(method: HttpMethod, body: Value) -> Self {
        Self { method, body: Some(body), ..Self::default() }
    }

    /// Mark the request as public (no Authorization header)
    #[must_use]
    pub fn public(mut self) -> Self {
        self.skip_auth = true;
        self
    }

    /// Add an explicit header
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Copy of these options for the single post-refresh replay
    #[must_use]
    pub fn for_replay(&self) -> Self {
        Self { skip_refresh: true, ..self.clone() }
    }

    /// Whether an explicit `Content-Type` header was supplied
    pub fn has_content_type(&self) -> bool {
        self.headers.iter().any(|(name, _)| name.eq_ignore_ascii_case("content-type"))
    }
}
