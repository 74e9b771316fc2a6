//! Error types for SDK configuration.
//!
//! This module contains error types used for configuration and
//! validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use paygate::{WechatAppId, ConfigError};
//!
//! let result = WechatAppId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyWechatAppId)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// WeChat app id cannot be empty.
    #[error("WeChat app id cannot be empty. Please provide a valid WeChat official account appid.")]
    EmptyWechatAppId,

    /// Alipay app id cannot be empty.
    #[error("Alipay app id cannot be empty. Please provide a valid Alipay open platform app_id.")]
    EmptyAlipayAppId,

    /// Environment name is not recognized.
    #[error("Unknown environment '{name}'. Expected 'development' or 'production'.")]
    UnknownEnvironment {
        /// The unrecognized environment name that was provided.
        name: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
