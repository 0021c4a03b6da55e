//! Route factory: resolves type identifiers into constructed routes.
//!
//! # Responsibilities
//! - Map type identifiers to route constructors
//! - Build routes from declarative options
//!
//! # Design Decisions
//! - Constructors are plain closures over `RouteOptions`; registering a
//!   custom variant needs no new trait
//! - Constructor errors propagate to the caller unchanged

use std::collections::HashMap;
use std::sync::Arc;

use crate::routes::{HostnameRoute, LiteralRoute, SegmentRoute};
use crate::routing::definition::RouteOptions;
use crate::routing::error::RouteError;
use crate::routing::route::Route;

type Constructor = Box<dyn Fn(&RouteOptions) -> Result<Arc<dyn Route>, RouteError> + Send + Sync>;

/// Registry of route constructors keyed by type identifier.
pub struct RouteFactory {
    constructors: HashMap<String, Constructor>,
}

impl RouteFactory {
    /// An empty factory; every type must be registered explicitly.
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// A factory with the bundled route types registered: `literal`,
    /// `segment`, and `hostname`.
    pub fn with_default_routes() -> Self {
        let mut factory = Self::new();
        factory.register("literal", LiteralRoute::from_options);
        factory.register("segment", SegmentRoute::from_options);
        factory.register("hostname", HostnameRoute::from_options);
        factory
    }

    /// Register a constructor, replacing any previous one for the same
    /// type identifier.
    pub fn register<F>(&mut self, route_type: impl Into<String>, constructor: F)
    where
        F: Fn(&RouteOptions) -> Result<Arc<dyn Route>, RouteError> + Send + Sync + 'static,
    {
        self.constructors
            .insert(route_type.into(), Box::new(constructor));
    }

    /// Construct a route of the given type, forwarding the options
    /// verbatim.
    pub fn create(
        &self,
        route_type: &str,
        options: &RouteOptions,
    ) -> Result<Arc<dyn Route>, RouteError> {
        let constructor = self
            .constructors
            .get(route_type)
            .ok_or_else(|| RouteError::UnknownType(route_type.to_string()))?;
        constructor(options)
    }

    pub fn has(&self, route_type: &str) -> bool {
        self.constructors.contains_key(route_type)
    }
}

impl Default for RouteFactory {
    fn default() -> Self {
        Self::with_default_routes()
    }
}

impl std::fmt::Debug for RouteFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut types: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        types.sort_unstable();
        f.debug_struct("RouteFactory").field("types", &types).finish()
    }
}
