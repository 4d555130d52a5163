//! Infoblox WAPI client layer.
//!
//! - `request.rs` - transport-independent description of one WAPI call
//! - `client.rs` - `WapiApi` trait and the reqwest-backed `WapiClient`
//! - `error.rs` - client error types

mod client;
mod error;
mod request;

pub use client::{WapiApi, WapiClient};
pub use error::{WapiError, WapiResult};
pub use request::WapiRequest;
