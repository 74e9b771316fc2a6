//! Authorization redirect URL construction.
//!
//! The payment flows begin with a browser navigation to the provider's
//! OAuth authorization endpoint, which redirects back to the application
//! with an authorization code. This module builds those redirect URLs;
//! the code exchange itself happens through
//! [`GatewayClient`](crate::clients::GatewayClient).

mod authorize;

pub use authorize::{alipay_auth_url, wechat_auth_url};
