//! OAuth authorization URL generation for WeChat and Alipay.
//!
//! Both builders are synchronous string construction over the active
//! environment's authorization endpoint and the configured app
//! identifier. The `redirect_uri` is percent-encoded; the `state` value
//! is passed through verbatim, so callers that need reserved characters
//! in `state` must encode it themselves.

use crate::config::PayConfig;

/// Builds the WeChat OAuth authorization redirect URL.
///
/// The user's browser should be navigated to the returned URL. After
/// consent, WeChat redirects back to `redirect_uri` with an authorization
/// code that can be exchanged for an openid via
/// [`GatewayClient::get_wechat_open_id`](crate::clients::GatewayClient::get_wechat_open_id).
///
/// The URL uses the `snsapi_base` scope (silent authorization, openid
/// only) and carries the `#wechat_redirect` fragment required by the
/// WeChat OAuth redirect contract.
///
/// # Arguments
///
/// * `config` - SDK configuration providing the WeChat app id
/// * `redirect_uri` - Callback address; percent-encoded into the URL as-is,
///   without validation
/// * `state` - Opaque value echoed back on the callback; may be empty
///
/// # Example
///
/// ```rust
/// use paygate::{PayConfig, WechatAppId, AlipayAppId};
/// use paygate::auth::wechat_auth_url;
///
/// let config = PayConfig::builder()
///     .wechat_app_id(WechatAppId::new("wx123").unwrap())
///     .alipay_app_id(AlipayAppId::new("ali456").unwrap())
///     .build()
///     .unwrap();
///
/// let url = wechat_auth_url(&config, "https://app.example/cb", "xyz");
/// assert_eq!(
///     url,
///     "https://open.weixin.qq.com/connect/oauth2/authorize\
///      ?appid=wx123&redirect_uri=https%3A%2F%2Fapp.example%2Fcb\
///      &response_type=code&scope=snsapi_base&state=xyz#wechat_redirect"
/// );
/// ```
#[must_use]
pub fn wechat_auth_url(config: &PayConfig, redirect_uri: &str, state: &str) -> String {
    format!(
        "{}?appid={}&redirect_uri={}&response_type=code&scope=snsapi_base&state={}#wechat_redirect",
        config.endpoints().wechat.auth_url,
        config.wechat_app_id().as_ref(),
        urlencoding::encode(redirect_uri),
        state
    )
}

/// Builds the Alipay OAuth authorization redirect URL.
///
/// The user's browser should be navigated to the returned URL. After
/// consent, Alipay redirects back to `redirect_uri` with an auth code
/// that can be exchanged for a buyer_id via
/// [`GatewayClient::get_alipay_buyer_id`](crate::clients::GatewayClient::get_alipay_buyer_id).
///
/// The URL uses the `auth_base` scope (silent authorization, buyer_id
/// only). Unlike WeChat, no URL fragment is required.
///
/// # Arguments
///
/// * `config` - SDK configuration providing the Alipay app id
/// * `redirect_uri` - Callback address; percent-encoded into the URL as-is,
///   without validation
/// * `state` - Opaque value echoed back on the callback; may be empty
///
/// # Example
///
/// ```rust
/// use paygate::{PayConfig, WechatAppId, AlipayAppId};
/// use paygate::auth::alipay_auth_url;
///
/// let config = PayConfig::builder()
///     .wechat_app_id(WechatAppId::new("wx123").unwrap())
///     .alipay_app_id(AlipayAppId::new("ali456").unwrap())
///     .build()
///     .unwrap();
///
/// let url = alipay_auth_url(&config, "https://app.example/cb", "");
/// assert_eq!(
///     url,
///     "https://openauth.alipay.com/oauth2/publicAppAuthorize.htm\
///      ?app_id=ali456&scope=auth_base\
///      &redirect_uri=https%3A%2F%2Fapp.example%2Fcb&state="
/// );
/// ```
#[must_use]
pub fn alipay_auth_url(config: &PayConfig, redirect_uri: &str, state: &str) -> String {
    format!(
        "{}?app_id={}&scope=auth_base&redirect_uri={}&state={}",
        config.endpoints().alipay.auth_url,
        config.alipay_app_id().as_ref(),
        urlencoding::encode(redirect_uri),
        state
    )
}
