//! Deployment environments and their endpoint tables.
//!
//! Each environment maps to a static [`Endpoints`] record holding the
//! backend base URL, the provider authorization endpoints, and the
//! backend paths used by the payment flows. The records are immutable
//! and selected once at configuration time.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Environment variable consulted by [`Environment::from_runtime_env`].
pub const ENV_VAR: &str = "PAYGATE_ENV";

/// The deployment environment the SDK is configured for.
///
/// Selects which static [`Endpoints`] record is used for backend and
/// authorization URLs. Defaults to [`Environment::Development`].
///
/// # Example
///
/// ```rust
/// use paygate::Environment;
///
/// let env: Environment = "production".parse().unwrap();
/// assert_eq!(env, Environment::Production);
/// assert_eq!(env.as_str(), "production");
///
/// // Unknown names are rejected, not silently defaulted
/// assert!("staging".parse::<Environment>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    /// Local development against a backend on `localhost`.
    #[default]
    Development,
    /// Production deployment.
    Production,
}

impl Environment {
    /// Returns the canonical environment name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    /// Resolves the environment from the `PAYGATE_ENV` process variable.
    ///
    /// An unset variable is the common case and resolves to
    /// [`Environment::Development`]. A set but unrecognized value is a
    /// configuration mistake and is reported instead of being defaulted.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownEnvironment`] if `PAYGATE_ENV` is set
    /// to a value other than `development` or `production`.
    pub fn from_runtime_env() -> Result<Self, ConfigError> {
        match std::env::var(ENV_VAR) {
            Ok(name) => name.parse(),
            Err(_) => Ok(Self::Development),
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            _ => Err(ConfigError::UnknownEnvironment {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// WeChat endpoints for one environment.
#[derive(Debug, PartialEq, Eq)]
pub struct WechatEndpoints {
    /// WeChat OAuth authorization endpoint (browser redirect target).
    pub auth_url: &'static str,
    /// Backend path that exchanges an authorization code for an openid.
    pub get_open_id: &'static str,
    /// Backend path that creates a WeChat payment order.
    pub create_order: &'static str,
}

/// Alipay endpoints for one environment.
#[derive(Debug, PartialEq, Eq)]
pub struct AlipayEndpoints {
    /// Alipay OAuth authorization endpoint (browser redirect target).
    pub auth_url: &'static str,
    /// Backend path that exchanges an auth code for a buyer_id.
    pub get_buyer_id: &'static str,
    /// Backend path that creates an Alipay payment order.
    pub create_order: &'static str,
}

/// The full endpoint table for one environment.
///
/// Two static instances exist, one per [`Environment`]. The provider
/// authorization URLs are identical across environments; only the backend
/// base URL differs.
///
/// # Example
///
/// ```rust
/// use paygate::{Endpoints, Environment};
///
/// let endpoints = Endpoints::for_env(Environment::Development);
/// assert_eq!(endpoints.base_url, "http://localhost:3000");
/// assert_eq!(endpoints.wechat.get_open_id, "/api/wechat/openid");
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Endpoints {
    /// Base URL of the application backend.
    pub base_url: &'static str,
    /// WeChat endpoints.
    pub wechat: WechatEndpoints,
    /// Alipay endpoints.
    pub alipay: AlipayEndpoints,
}

const WECHAT_AUTH_URL: &str = "https://open.weixin.qq.com/connect/oauth2/authorize";
const ALIPAY_AUTH_URL: &str = "https://openauth.alipay.com/oauth2/publicAppAuthorize.htm";

static DEVELOPMENT: Endpoints = Endpoints {
    base_url: "http://localhost:3000",
    wechat: WechatEndpoints {
        auth_url: WECHAT_AUTH_URL,
        get_open_id: "/api/wechat/openid",
        create_order: "/api/wechat/pay",
    },
    alipay: AlipayEndpoints {
        auth_url: ALIPAY_AUTH_URL,
        get_buyer_id: "/api/alipay/buyer-id",
        create_order: "/api/alipay/pay",
    },
};

static PRODUCTION: Endpoints = Endpoints {
    base_url: "https://api.yourdomain.com",
    wechat: WechatEndpoints {
        auth_url: WECHAT_AUTH_URL,
        get_open_id: "/api/wechat/openid",
        create_order: "/api/wechat/pay",
    },
    alipay: AlipayEndpoints {
        auth_url: ALIPAY_AUTH_URL,
        get_buyer_id: "/api/alipay/buyer-id",
        create_order: "/api/alipay/pay",
    },
};

impl Endpoints {
    /// Returns the endpoint table for the given environment.
    #[must_use]
    pub const fn for_env(env: Environment) -> &'static Self {
        match env {
            Environment::Development => &DEVELOPMENT,
            Environment::Production => &PRODUCTION,
        }
    }

    /// Looks up an endpoint table by environment name.
    ///
    /// Returns `None` for an unrecognized name. This is the string-keyed
    /// counterpart of [`Endpoints::for_env`] for callers that carry the
    /// environment as opaque text; an absent result here is an expected
    /// outcome, not a failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use paygate::Endpoints;
    ///
    /// assert!(Endpoints::lookup("production").is_some());
    /// assert!(Endpoints::lookup("staging").is_none());
    /// ```
    #[must_use]
    pub fn lookup(name: &str) -> Option<&'static Self> {
        name.parse().ok().map(Self::for_env)
    }
}
