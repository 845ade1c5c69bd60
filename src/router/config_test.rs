use super::*;

#[test]
fn default_config_matches_constants() {
    let cfg = RouterConfig::default();
    assert_eq!(cfg.login_path, DEFAULT_LOGIN_PATH);
    assert_eq!(cfg.token_key, DEFAULT_TOKEN_KEY);
    assert_eq!(cfg.validate(), Ok(()));
}

#[test]
fn from_json_fills_missing_fields() {
    let cfg = RouterConfig::from_json(r#"{"login_path":"/signin"}"#).unwrap();
    assert_eq!(cfg.login_path, "/signin");
    assert_eq!(cfg.token_key, DEFAULT_TOKEN_KEY);

    let cfg = RouterConfig::from_json("{}").unwrap();
    assert_eq!(cfg, RouterConfig::default());
}

#[test]
fn from_json_rejects_bad_json() {
    let err = RouterConfig::from_json("not json").unwrap_err();
    assert!(matches!(err, RouteError::Config(_)));
}

#[test]
fn from_json_rejects_relative_login_path() {
    let err = RouterConfig::from_json(r#"{"login_path":"login"}"#).unwrap_err().to_string();
    assert!(err.contains("login_path"));
    assert!(err.contains("must start with '/'"));
}

#[test]
fn from_lookup_defaults_when_unset() {
    let cfg = RouterConfig::from_lookup(|_| None).unwrap();
    assert_eq!(cfg, RouterConfig::default());
}

#[test]
fn from_lookup_applies_overrides() {
    let cfg = RouterConfig::from_lookup(|name| match name {
        LOGIN_PATH_VAR => Some("/auth/login".to_owned()),
        TOKEN_KEY_VAR => Some("jwt".to_owned()),
        _ => None,
    })
    .unwrap();
    assert_eq!(cfg.login_path, "/auth/login");
    assert_eq!(cfg.token_key, "jwt");
}

#[test]
fn from_lookup_rejects_blank_token_key() {
    let err = RouterConfig::from_lookup(|name| (name == TOKEN_KEY_VAR).then(|| "  ".to_owned())).unwrap_err();
    assert_eq!(err, RouteError::Config("token_key must not be empty".into()));
}
