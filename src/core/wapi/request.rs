//! WAPI request model.
//!
//! A `WapiRequest` describes exactly one HTTP call against the grid: the
//! verb, the object path (an object type, an object reference, or empty for
//! grid-wide queries), ordered query parameters and an optional JSON body.

use reqwest::Method;
use serde_json::Value;

use super::error::{WapiError, WapiResult};

/// A single WAPI call, independent of the HTTP client that sends it.
#[derive(Debug, Clone, PartialEq)]
pub struct WapiRequest {
    /// HTTP verb.
    pub method: Method,

    /// Object type (`record:a`), object reference, or empty.
    pub path: String,

    /// Query parameters in insertion order.
    pub query: Vec<(String, String)>,

    /// JSON body for POST/PUT requests.
    pub body: Option<Value>,
}

impl WapiRequest {
    /// Create a request with the given verb and path.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Schema query for an object type, or for WAPI itself when empty.
    pub fn schema(object_type: &str) -> Self {
        Self::get(object_type.trim()).query("_schema", 1)
    }

    /// Append a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Append a query parameter only when a value is present.
    pub fn query_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.query(key, v),
            None => self,
        }
    }

    /// Invoke a WAPI function on the target object (`_function=name`).
    pub fn function(self, name: &str) -> Self {
        self.query("_function", name)
    }

    /// Request extra fields on top of the object's defaults.
    ///
    /// Uses the `_return_fields+` form so the standard fields (including
    /// `_ref`) are still returned.
    pub fn return_fields(self, fields: Option<&[String]>) -> Self {
        match fields {
            Some(fields) if !fields.is_empty() => self.query("_return_fields+", fields.join(",")),
            _ => self,
        }
    }

    /// Cap the number of returned objects (`_max_results`).
    pub fn max_results(self, limit: Option<u32>) -> Self {
        self.query_opt("_max_results", limit)
    }

    /// Attach a JSON body.
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Render the full request URL against a base URL.
    ///
    /// The path is appended verbatim: object references already contain
    /// `:` and `/` separators that WAPI expects untouched.
    pub fn url(&self, base_url: &str) -> WapiResult<String> {
        let mut url = format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        );

        if !self.query.is_empty() {
            let encoded = serde_urlencoded::to_string(&self.query)
                .map_err(|e| WapiError::invalid_url(e.to_string()))?;
            url.push('?');
            url.push_str(&encoded);
        }

        Ok(url)
    }

    /// Short human-readable form used in logs.
    pub fn describe(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}
