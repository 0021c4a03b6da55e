//! Routing error definitions.

use thiserror::Error;

/// Errors surfaced by the route stack and its collaborators.
///
/// "No route matched" is deliberately not represented here: matching returns
/// `Option` and an empty or all-rejecting stack is a normal outcome.
#[derive(Debug, Error)]
pub enum RouteError {
    /// Malformed caller input, detected before any mutation takes place.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Assembly was requested for a name that is not registered.
    #[error("route with name \"{0}\" not found")]
    NotFound(String),

    /// The factory has no constructor for the requested route type.
    #[error("unknown route type \"{0}\"")]
    UnknownType(String),

    /// A declarative route set failed to parse.
    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),
}
