//! Configuration types for the payment SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for communication with the application backend and the
//! WeChat / Alipay authorization endpoints.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`PayConfig`]: The main configuration struct holding all SDK settings
//! - [`PayConfigBuilder`]: A builder for constructing [`PayConfig`] instances
//! - [`WechatAppId`] / [`AlipayAppId`]: Validated app identifier newtypes
//! - [`Environment`]: The deployment environment selector
//! - [`Endpoints`]: The static per-environment endpoint table
//!
//! # Example
//!
//! ```rust
//! use paygate::{PayConfig, WechatAppId, AlipayAppId, Environment};
//!
//! let config = PayConfig::builder()
//!     .wechat_app_id(WechatAppId::new("wx123").unwrap())
//!     .alipay_app_id(AlipayAppId::new("ali456").unwrap())
//!     .environment(Environment::Production)
//!     .build()
//!     .unwrap();
//! ```

mod environment;
mod newtypes;

pub use environment::{AlipayEndpoints, Endpoints, Environment, WechatEndpoints, ENV_VAR};
pub use newtypes::{AlipayAppId, WechatAppId};

use crate::error::ConfigError;

/// Configuration for the payment SDK.
///
/// This struct holds everything needed for SDK operations: the app
/// identifiers injected into authorization URLs, the deployment
/// environment that selects the backend endpoint table, and an optional
/// base URL override for self-hosted or test backends.
///
/// Configuration is instance-based and passed explicitly to whichever
/// component needs it; there is no process-wide state.
///
/// # Thread Safety
///
/// `PayConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use paygate::{PayConfig, WechatAppId, AlipayAppId};
///
/// let config = PayConfig::builder()
///     .wechat_app_id(WechatAppId::new("wx123").unwrap())
///     .alipay_app_id(AlipayAppId::new("ali456").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url(), "http://localhost:3000");
/// ```
#[derive(Clone, Debug)]
pub struct PayConfig {
    wechat_app_id: WechatAppId,
    alipay_app_id: AlipayAppId,
    environment: Environment,
    base_url: Option<String>,
    user_agent_prefix: Option<String>,
}

impl PayConfig {
    /// Creates a new builder for constructing a `PayConfig`.
    #[must_use]
    pub fn builder() -> PayConfigBuilder {
        PayConfigBuilder::new()
    }

    /// Returns the WeChat app id.
    #[must_use]
    pub const fn wechat_app_id(&self) -> &WechatAppId {
        &self.wechat_app_id
    }

    /// Returns the Alipay app id.
    #[must_use]
    pub const fn alipay_app_id(&self) -> &AlipayAppId {
        &self.alipay_app_id
    }

    /// Returns the configured environment.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Returns the endpoint table for the configured environment.
    #[must_use]
    pub const fn endpoints(&self) -> &'static Endpoints {
        Endpoints::for_env(self.environment)
    }

    /// Returns the backend base URL.
    ///
    /// This is the explicit override when one was configured, otherwise
    /// the environment's static base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(self.endpoints().base_url)
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify PayConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PayConfig>();
};

/// Builder for constructing [`PayConfig`] instances.
///
/// Required fields are `wechat_app_id` and `alipay_app_id`. All other
/// fields have sensible defaults.
///
/// # Defaults
///
/// - `environment`: [`Environment::Development`]
/// - `base_url`: `None` (the environment's static base URL is used)
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use paygate::{PayConfig, WechatAppId, AlipayAppId, Environment};
///
/// let config = PayConfig::builder()
///     .wechat_app_id(WechatAppId::new("wx123").unwrap())
///     .alipay_app_id(AlipayAppId::new("ali456").unwrap())
///     .environment(Environment::Production)
///     .base_url("https://api.my-shop.example")
///     .user_agent_prefix("MyShop/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct PayConfigBuilder {
    wechat_app_id: Option<WechatAppId>,
    alipay_app_id: Option<AlipayAppId>,
    environment: Option<Environment>,
    base_url: Option<String>,
    user_agent_prefix: Option<String>,
}

impl PayConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the WeChat app id (required).
    #[must_use]
    pub fn wechat_app_id(mut self, appid: WechatAppId) -> Self {
        self.wechat_app_id = Some(appid);
        self
    }

    /// Sets the Alipay app id (required).
    #[must_use]
    pub fn alipay_app_id(mut self, app_id: AlipayAppId) -> Self {
        self.alipay_app_id = Some(app_id);
        self
    }

    /// Sets the deployment environment.
    #[must_use]
    pub const fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Overrides the backend base URL.
    ///
    /// When set, this takes precedence over the environment's static
    /// base URL. Useful for self-hosted backends and for pointing the
    /// client at a mock server in tests.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`PayConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `wechat_app_id` or
    /// `alipay_app_id` are not set.
    pub fn build(self) -> Result<PayConfig, ConfigError> {
        let wechat_app_id = self.wechat_app_id.ok_or(ConfigError::MissingRequiredField {
            field: "wechat_app_id",
        })?;
        let alipay_app_id = self.alipay_app_id.ok_or(ConfigError::MissingRequiredField {
            field: "alipay_app_id",
        })?;

        Ok(PayConfig {
            wechat_app_id,
            alipay_app_id,
            environment: self.environment.unwrap_or_default(),
            base_url: self.base_url,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder_with_ids() -> PayConfigBuilder {
        PayConfig::builder()
            .wechat_app_id(WechatAppId::new("wx123").unwrap())
            .alipay_app_id(AlipayAppId::new("ali456").unwrap())
    }

    #[test]
    fn test_builder_requires_wechat_app_id() {
        let result = PayConfigBuilder::new()
            .alipay_app_id(AlipayAppId::new("ali456").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "wechat_app_id"
            })
        ));
    }

    #[test]
    fn test_builder_requires_alipay_app_id() {
        let result = PayConfigBuilder::new()
            .wechat_app_id(WechatAppId::new("wx123").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "alipay_app_id"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = builder_with_ids().build().unwrap();

        assert_eq!(config.environment(), Environment::Development);
        assert_eq!(config.base_url(), "http://localhost:3000");
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_base_url_follows_environment() {
        let config = builder_with_ids()
            .environment(Environment::Production)
            .build()
            .unwrap();

        assert_eq!(config.base_url(), "https://api.yourdomain.com");
    }

    #[test]
    fn test_base_url_override_takes_precedence() {
        let config = builder_with_ids()
            .environment(Environment::Production)
            .base_url("https://api.my-shop.example")
            .build()
            .unwrap();

        assert_eq!(config.base_url(), "https://api.my-shop.example");
    }

    #[test]
    fn test_endpoints_accessor_matches_environment() {
        let config = builder_with_ids()
            .environment(Environment::Production)
            .build()
            .unwrap();

        assert_eq!(config.endpoints(), Endpoints::for_env(Environment::Production));
    }

    #[test]
    fn test_config_is_clone_and_debug() {
        let config = builder_with_ids().build().unwrap();
        let cloned = config.clone();
        assert_eq!(cloned.wechat_app_id(), config.wechat_app_id());

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("PayConfig"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PayConfig>();
    }
}
