//! HTTP client for the application backend.
//!
//! This module provides the [`GatewayClient`] type for forwarding
//! identity-exchange and order-creation requests to the configured
//! backend paths.

use serde_json::Value;

use crate::clients::errors::RequestError;
use crate::config::{Endpoints, PayConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for the application backend.
///
/// The client resolves the backend base URL and endpoint paths from
/// [`PayConfig`] once at construction, then exposes one method per
/// backend operation. Every call is a single best-effort POST: no
/// retries, no backoff, no idempotency keys. Failures are logged once
/// and returned to the caller unchanged.
///
/// # Thread Safety
///
/// `GatewayClient` is `Send + Sync` and read-only after construction,
/// making it safe to share across async tasks; concurrent calls are
/// independent.
///
/// # Example
///
/// ```rust,no_run
/// use paygate::{GatewayClient, PayConfig, WechatAppId, AlipayAppId};
///
/// # async fn run() -> Result<(), paygate::RequestError> {
/// let config = PayConfig::builder()
///     .wechat_app_id(WechatAppId::new("wx123").unwrap())
///     .alipay_app_id(AlipayAppId::new("ali456").unwrap())
///     .build()
///     .unwrap();
///
/// let client = GatewayClient::new(&config);
/// let body = client.get_wechat_open_id("code-from-callback").await?;
/// println!("openid: {}", body["openid"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct GatewayClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Backend base URL (e.g., `http://localhost:3000`).
    base_url: String,
    /// Endpoint table for the configured environment.
    endpoints: &'static Endpoints,
}

// Verify GatewayClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GatewayClient>();
};

impl GatewayClient {
    /// Creates a new client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &PayConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Paygate SDK v{SDK_VERSION}");

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(user_agent)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url().to_string(),
            endpoints: config.endpoints(),
        }
    }

    /// Returns the backend base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Exchanges a WeChat authorization code for the user's openid.
    ///
    /// Issues `POST {get_open_id path}` with body `{"code": code}` and
    /// resolves to the backend's response body.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] on transport failure, a non-success
    /// backend status, or an unparsable response body.
    pub async fn get_wechat_open_id(&self, code: &str) -> Result<Value, RequestError> {
        self.post(
            self.endpoints.wechat.get_open_id,
            &serde_json::json!({ "code": code }),
        )
        .await
    }

    /// Exchanges an Alipay auth code for the user's buyer_id.
    ///
    /// Issues `POST {get_buyer_id path}` with body `{"auth_code": auth_code}`
    /// and resolves to the backend's response body.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] on transport failure, a non-success
    /// backend status, or an unparsable response body.
    pub async fn get_alipay_buyer_id(&self, auth_code: &str) -> Result<Value, RequestError> {
        self.post(
            self.endpoints.alipay.get_buyer_id,
            &serde_json::json!({ "auth_code": auth_code }),
        )
        .await
    }

    /// Creates a WeChat payment order.
    ///
    /// The `params` value is forwarded verbatim as the JSON body; its
    /// contents are interpreted by the backend, not by this SDK.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] on transport failure, a non-success
    /// backend status, or an unparsable response body.
    pub async fn create_wechat_order(&self, params: Value) -> Result<Value, RequestError> {
        self.post(self.endpoints.wechat.create_order, &params).await
    }

    /// Creates an Alipay payment order.
    ///
    /// The `params` value is forwarded verbatim as the JSON body; its
    /// contents are interpreted by the backend, not by this SDK.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] on transport failure, a non-success
    /// backend status, or an unparsable response body.
    pub async fn create_alipay_order(&self, params: Value) -> Result<Value, RequestError> {
        self.post(self.endpoints.alipay.create_order, &params).await
    }

    /// Sends a POST and unwraps the response body, logging any failure once.
    async fn post(&self, path: &str, body: &Value) -> Result<Value, RequestError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "dispatching backend request");

        match self.send(&url, body).await {
            Ok(value) => Ok(value),
            Err(error) => {
                tracing::error!(%url, %error, "backend request failed");
                Err(error)
            }
        }
    }

    async fn send(&self, url: &str, body: &Value) -> Result<Value, RequestError> {
        let response = self.client.post(url).json(body).send().await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(RequestError::Response {
                status: status.as_u16(),
                message: text,
            });
        }

        if text.is_empty() {
            return Ok(serde_json::json!({}));
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AlipayAppId, Environment, WechatAppId};

    fn create_test_config() -> PayConfig {
        PayConfig::builder()
            .wechat_app_id(WechatAppId::new("wx123").unwrap())
            .alipay_app_id(AlipayAppId::new("ali456").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_uses_environment_base_url() {
        let client = GatewayClient::new(&create_test_config());
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_client_uses_base_url_override() {
        let config = PayConfig::builder()
            .wechat_app_id(WechatAppId::new("wx123").unwrap())
            .alipay_app_id(AlipayAppId::new("ali456").unwrap())
            .environment(Environment::Production)
            .base_url("http://127.0.0.1:9999")
            .build()
            .unwrap();

        let client = GatewayClient::new(&config);
        assert_eq!(client.base_url(), "http://127.0.0.1:9999");
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GatewayClient>();
    }
}
