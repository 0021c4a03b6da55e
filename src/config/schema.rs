//! Declarative route set schema.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::definition::{RouteDefinition, RouteOptions, RouteSpec};

/// Root of a declarative route set.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// Route definitions in registration order.
    pub routes: Vec<RouteConfig>,
}

/// One named route definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Name the route is registered (and assembled) under.
    pub name: String,

    /// Route type identifier, resolved by the factory.
    #[serde(rename = "type")]
    pub route_type: String,

    /// Constructor options, forwarded to the factory verbatim.
    #[serde(default)]
    pub options: RouteOptions,

    /// Match-attempt priority (higher = tried first).
    #[serde(default)]
    pub priority: i32,
}

impl From<RouteConfig> for (String, RouteDefinition) {
    fn from(config: RouteConfig) -> Self {
        let spec = RouteSpec {
            route_type: Some(config.route_type),
            options: config.options,
            priority: Some(config.priority),
        };
        (config.name, RouteDefinition::Spec(spec))
    }
}
