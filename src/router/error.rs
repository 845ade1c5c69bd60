//! Construction-time errors for the route table and router config.
//!
//! Navigation itself never fails: the guard only ever proceeds or redirects.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("route path is empty")]
    EmptyPath,
    #[error("route path '{0}' must start with '/'")]
    MissingLeadingSlash(String),
    #[error("route path '{path}' contains invalid character {ch:?}")]
    InvalidCharacter { path: String, ch: char },
    #[error("route path '{0}' contains an empty segment")]
    EmptySegment(String),
    #[error("route path '{0}' uses a dynamic segment, which is not supported")]
    DynamicSegment(String),
    #[error("login route '{0}' cannot require authentication")]
    GuardedLoginRoute(String),
    #[error("invalid router config: {0}")]
    Config(String),
}
