//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A validated WeChat app identifier.
///
/// This newtype ensures the appid is non-empty and provides type safety
/// to prevent mixing it up with the Alipay app id in call sites.
///
/// # Example
///
/// ```rust
/// use paygate::WechatAppId;
///
/// let appid = WechatAppId::new("wx1234567890abcdef").unwrap();
/// assert_eq!(appid.as_ref(), "wx1234567890abcdef");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WechatAppId(String);

impl WechatAppId {
    /// Creates a new validated WeChat app id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyWechatAppId`] if the id is empty.
    pub fn new(appid: impl Into<String>) -> Result<Self, ConfigError> {
        let appid = appid.into();
        if appid.is_empty() {
            return Err(ConfigError::EmptyWechatAppId);
        }
        Ok(Self(appid))
    }
}

impl AsRef<str> for WechatAppId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for WechatAppId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for WechatAppId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated Alipay app identifier.
///
/// This newtype ensures the app_id is non-empty and provides type safety
/// to prevent mixing it up with the WeChat appid in call sites.
///
/// # Example
///
/// ```rust
/// use paygate::AlipayAppId;
///
/// let app_id = AlipayAppId::new("2021000000000000").unwrap();
/// assert_eq!(app_id.as_ref(), "2021000000000000");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlipayAppId(String);

impl AlipayAppId {
    /// Creates a new validated Alipay app id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAlipayAppId`] if the id is empty.
    pub fn new(app_id: impl Into<String>) -> Result<Self, ConfigError> {
        let app_id = app_id.into();
        if app_id.is_empty() {
            return Err(ConfigError::EmptyAlipayAppId);
        }
        Ok(Self(app_id))
    }
}

impl AsRef<str> for AlipayAppId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for AlipayAppId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AlipayAppId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wechat_app_id_rejects_empty_string() {
        let result = WechatAppId::new("");
        assert!(matches!(result, Err(ConfigError::EmptyWechatAppId)));
    }

    #[test]
    fn test_alipay_app_id_rejects_empty_string() {
        let result = AlipayAppId::new("");
        assert!(matches!(result, Err(ConfigError::EmptyAlipayAppId)));
    }

    #[test]
    fn test_wechat_app_id_preserves_value() {
        let appid = WechatAppId::new("wx123").unwrap();
        assert_eq!(appid.as_ref(), "wx123");
    }

    #[test]
    fn test_wechat_app_id_serde_round_trip() {
        let appid = WechatAppId::new("wx123").unwrap();
        let json = serde_json::to_string(&appid).unwrap();
        assert_eq!(json, r#""wx123""#);

        let parsed: WechatAppId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, appid);
    }

    #[test]
    fn test_alipay_app_id_deserialize_rejects_empty() {
        let result: Result<AlipayAppId, _> = serde_json::from_str(r#""""#);
        assert!(result.is_err());
    }
}
