//! Router configuration: login redirect path and credential storage key.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use super::error::RouteError;
use super::path::validate_pattern;

pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_TOKEN_KEY: &str = "access_token";

pub const LOGIN_PATH_VAR: &str = "EQUIPMENT_DESK_LOGIN_PATH";
pub const TOKEN_KEY_VAR: &str = "EQUIPMENT_DESK_TOKEN_KEY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Destination for blocked navigations.
    pub login_path: String,
    /// Credential store key holding the access token.
    pub token_key: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self { login_path: DEFAULT_LOGIN_PATH.to_owned(), token_key: DEFAULT_TOKEN_KEY.to_owned() }
    }
}

impl RouterConfig {
    /// Parse a JSON document; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `RouteError::Config` for invalid JSON or invalid values.
    pub fn from_json(raw: &str) -> Result<Self, RouteError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| RouteError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Build config from a variable lookup.
    ///
    /// Optional:
    /// - `EQUIPMENT_DESK_LOGIN_PATH`: default `/login`
    /// - `EQUIPMENT_DESK_TOKEN_KEY`: default `access_token`
    ///
    /// # Errors
    ///
    /// Returns `RouteError::Config` if a supplied value is invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RouteError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            login_path: lookup(LOGIN_PATH_VAR).unwrap_or_else(|| DEFAULT_LOGIN_PATH.to_owned()),
            token_key: lookup(TOKEN_KEY_VAR).unwrap_or_else(|| DEFAULT_TOKEN_KEY.to_owned()),
        };
        config.validate()?;
        Ok(config)
    }

    /// Config from variables captured at compile time. WASM builds have no
    /// process environment, so values are baked in with `option_env!`.
    ///
    /// # Errors
    ///
    /// Returns `RouteError::Config` if a captured value is invalid.
    pub fn from_build_env() -> Result<Self, RouteError> {
        let login_path = option_env!("EQUIPMENT_DESK_LOGIN_PATH");
        let token_key = option_env!("EQUIPMENT_DESK_TOKEN_KEY");
        Self::from_lookup(|name| match name {
            LOGIN_PATH_VAR => login_path.map(str::to_owned),
            TOKEN_KEY_VAR => token_key.map(str::to_owned),
            _ => None,
        })
    }

    /// # Errors
    ///
    /// Returns `RouteError::Config` for a malformed login path or empty token key.
    pub fn validate(&self) -> Result<(), RouteError> {
        validate_pattern(&self.login_path).map_err(|e| RouteError::Config(format!("login_path: {e}")))?;
        if self.token_key.trim().is_empty() {
            return Err(RouteError::Config("token_key must not be empty".into()));
        }
        Ok(())
    }
}
