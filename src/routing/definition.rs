//! Route definition shapes accepted at registration.
//!
//! # Responsibilities
//! - Accept prebuilt route instances and declarative specs through one type
//! - Define the declarative boundary format (`type` / `options` / `priority`)
//!
//! # Design Decisions
//! - A sum type replaces the original's duck-typed argument: callers can
//!   only pass an instance or a spec, never something malformed
//! - `type` stays optional at the serde level so its absence is reported
//!   as an invalid definition rather than a parse failure

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::routing::route::Route;

/// What `add_route` accepts: either a constructed route or a declarative
/// spec to be resolved through the factory.
#[derive(Debug, Clone)]
pub enum RouteDefinition {
    Instance(Arc<dyn Route>),
    Spec(RouteSpec),
}

/// Declarative route definition.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RouteSpec {
    /// Route type identifier, resolved by the factory. Required; its
    /// absence is rejected at registration time.
    #[serde(rename = "type")]
    pub route_type: Option<String>,

    /// Constructor options, forwarded to the factory verbatim.
    pub options: RouteOptions,

    /// Match-attempt priority. Defaults to the instance priority (0 for
    /// factory-built routes) when absent.
    pub priority: Option<i32>,
}

impl RouteSpec {
    pub fn new(route_type: impl Into<String>) -> Self {
        Self {
            route_type: Some(route_type.into()),
            ..Self::default()
        }
    }
}

/// Options understood by the bundled route constructors. Constructors pick
/// the fields they need and ignore the rest.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RouteOptions {
    /// Path or path pattern to match.
    pub path: Option<String>,

    /// Hostname to match.
    pub host: Option<String>,

    /// Parameters the route itself reports on every match.
    pub defaults: HashMap<String, String>,
}

impl From<RouteSpec> for RouteDefinition {
    fn from(spec: RouteSpec) -> Self {
        RouteDefinition::Spec(spec)
    }
}

impl From<Arc<dyn Route>> for RouteDefinition {
    fn from(route: Arc<dyn Route>) -> Self {
        RouteDefinition::Instance(route)
    }
}

impl<R: Route + 'static> From<R> for RouteDefinition {
    fn from(route: R) -> Self {
        RouteDefinition::Instance(Arc::new(route))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_deserializes_from_toml() {
        let spec: RouteSpec = toml::from_str(
            r#"
            type = "literal"
            priority = 3

            [options]
            path = "/health"

            [options.defaults]
            action = "status"
            "#,
        )
        .unwrap();

        assert_eq!(spec.route_type.as_deref(), Some("literal"));
        assert_eq!(spec.priority, Some(3));
        assert_eq!(spec.options.path.as_deref(), Some("/health"));
        assert_eq!(spec.options.defaults.get("action").unwrap(), "status");
    }

    #[test]
    fn test_spec_without_type_still_parses() {
        // The missing type is reported by the stack, not by serde.
        let spec: RouteSpec = toml::from_str("priority = 1").unwrap();
        assert!(spec.route_type.is_none());
    }
}
