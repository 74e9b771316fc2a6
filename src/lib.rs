//! # Paygate SDK
//!
//! A Rust SDK for integrating WeChat and Alipay OAuth-based payment flows
//! into a web application, providing type-safe configuration, authorization
//! URL construction, and HTTP helpers for an application backend.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`PayConfig`] and [`PayConfigBuilder`]
//! - Validated newtypes for the WeChat and Alipay app identifiers
//! - Environment-keyed endpoint resolution via [`Environment`] and [`Endpoints`]
//! - OAuth authorization redirect URLs via [`auth`]
//! - Async backend calls (openid / buyer_id exchange, order creation) via
//!   [`GatewayClient`]
//!
//! Payment processing, signature verification, and token storage are the
//! backend's responsibility; this crate only builds redirect URLs and
//! forwards requests.
//!
//! ## Quick Start
//!
//! ```rust
//! use paygate::{PayConfig, WechatAppId, AlipayAppId, Environment};
//!
//! let config = PayConfig::builder()
//!     .wechat_app_id(WechatAppId::new("wx1234567890abcdef").unwrap())
//!     .alipay_app_id(AlipayAppId::new("2021000000000000").unwrap())
//!     .environment(Environment::Development)
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Authorization Redirect
//!
//! The payment flow starts by sending the user's browser to the provider's
//! authorization endpoint:
//!
//! ```rust
//! use paygate::{PayConfig, WechatAppId, AlipayAppId};
//! use paygate::auth::{wechat_auth_url, alipay_auth_url};
//!
//! # let config = PayConfig::builder()
//! #     .wechat_app_id(WechatAppId::new("wx123").unwrap())
//! #     .alipay_app_id(AlipayAppId::new("ali456").unwrap())
//! #     .build()
//! #     .unwrap();
//! let url = wechat_auth_url(&config, "https://app.example/pay/callback", "cart-42");
//! // Navigate the browser to `url`; the callback receives an authorization code
//! ```
//!
//! ## Backend Calls
//!
//! After the provider redirects back with a code, exchange it and create
//! the order through the backend:
//!
//! ```rust,no_run
//! use paygate::{GatewayClient, PayConfig, WechatAppId, AlipayAppId};
//!
//! # async fn run() -> Result<(), paygate::RequestError> {
//! # let config = PayConfig::builder()
//! #     .wechat_app_id(WechatAppId::new("wx123").unwrap())
//! #     .alipay_app_id(AlipayAppId::new("ali456").unwrap())
//! #     .build()
//! #     .unwrap();
//! let client = GatewayClient::new(&config);
//!
//! let identity = client.get_wechat_open_id("code-from-callback").await?;
//! let order = client
//!     .create_wechat_order(serde_json::json!({
//!         "openid": identity["openid"],
//!         "amount": 1280,
//!         "subject": "Order #42"
//!     }))
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Best-effort calls**: No retries or recovery; failures are logged once
//!   and propagated unchanged

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use clients::{GatewayClient, RequestError};
pub use config::{
    AlipayAppId, Endpoints, Environment, PayConfig, PayConfigBuilder, WechatAppId,
};
pub use error::ConfigError;

// Re-export the URL builders for convenience
pub use auth::{alipay_auth_url, wechat_auth_url};
