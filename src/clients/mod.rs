//! HTTP client functionality for the application backend.
//!
//! This module provides the async client used by the payment flows:
//!
//! - [`GatewayClient`]: thin POST wrappers over the configured backend paths
//! - [`RequestError`]: the failure taxonomy for those calls

mod errors;
mod gateway;

pub use errors::RequestError;
pub use gateway::{GatewayClient, SDK_VERSION};
