//! Integration tests for configuration resolution and authorization URLs.
//!
//! These tests exercise the flow a frontend walks before any backend
//! call: resolve the environment, build the configuration, and produce
//! the provider redirect URLs.

use paygate::{
    alipay_auth_url, wechat_auth_url, AlipayAppId, Endpoints, Environment, PayConfig, WechatAppId,
};

fn create_config(environment: Environment) -> PayConfig {
    PayConfig::builder()
        .wechat_app_id(WechatAppId::new("wx123").unwrap())
        .alipay_app_id(AlipayAppId::new("ali456").unwrap())
        .environment(environment)
        .build()
        .unwrap()
}

#[test]
fn test_wechat_auth_url_matches_documented_contract() {
    let config = create_config(Environment::Development);

    let url = wechat_auth_url(&config, "https://app.example/cb", "xyz");

    assert_eq!(
        url,
        "https://open.weixin.qq.com/connect/oauth2/authorize\
         ?appid=wx123&redirect_uri=https%3A%2F%2Fapp.example%2Fcb\
         &response_type=code&scope=snsapi_base&state=xyz#wechat_redirect"
    );
}

#[test]
fn test_alipay_auth_url_matches_documented_contract() {
    let config = create_config(Environment::Development);

    let url = alipay_auth_url(&config, "https://app.example/cb", "");

    assert_eq!(
        url,
        "https://openauth.alipay.com/oauth2/publicAppAuthorize.htm\
         ?app_id=ali456&scope=auth_base\
         &redirect_uri=https%3A%2F%2Fapp.example%2Fcb&state="
    );
}

#[test]
fn test_auth_urls_do_not_depend_on_environment() {
    let dev = create_config(Environment::Development);
    let prod = create_config(Environment::Production);

    assert_eq!(
        wechat_auth_url(&dev, "https://app.example/cb", "s"),
        wechat_auth_url(&prod, "https://app.example/cb", "s"),
    );
    assert_eq!(
        alipay_auth_url(&dev, "https://app.example/cb", "s"),
        alipay_auth_url(&prod, "https://app.example/cb", "s"),
    );
}

#[test]
fn test_environment_selects_backend_base_url() {
    assert_eq!(
        create_config(Environment::Development).base_url(),
        "http://localhost:3000"
    );
    assert_eq!(
        create_config(Environment::Production).base_url(),
        "https://api.yourdomain.com"
    );
}

#[test]
fn test_string_keyed_lookup_mirrors_typed_resolution() {
    for env in [Environment::Development, Environment::Production] {
        assert_eq!(Endpoints::lookup(env.as_str()), Some(Endpoints::for_env(env)));
    }
    assert!(Endpoints::lookup("qa").is_none());
}

#[test]
fn test_query_round_trip_recovers_redirect_uri_and_state() {
    let config = create_config(Environment::Development);
    let redirect_uri = "https://app.example/cb?order=42&lang=zh";
    let state = "session-token";

    let url = wechat_auth_url(&config, redirect_uri, state);

    // Strip the fragment, then parse the query string back
    let without_fragment = url.split_once('#').unwrap().0;
    let query = without_fragment.split_once('?').unwrap().1;

    let mut recovered_uri = None;
    let mut recovered_state = None;
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap();
        match key {
            "redirect_uri" => {
                recovered_uri = Some(urlencoding::decode(value).unwrap().into_owned());
            }
            "state" => recovered_state = Some(value.to_string()),
            _ => {}
        }
    }

    assert_eq!(recovered_uri.as_deref(), Some(redirect_uri));
    assert_eq!(recovered_state.as_deref(), Some(state));
}
