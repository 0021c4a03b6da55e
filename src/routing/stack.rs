//! The route stack: registration, matching, and assembly.
//!
//! # Responsibilities
//! - Own the priority index and per-route default parameters
//! - Normalize definitions (instances and declarative specs) on the way in
//! - Dispatch match attempts in priority order
//! - Reverse-resolve named routes into URL fragments
//!
//! # Design Decisions
//! - Mutation takes `&mut self`, matching and assembly take `&self`;
//!   callers that share a stack across threads serialize writers externally
//! - `set_routes` normalizes every definition before clearing, so a bad
//!   definition leaves the existing route set untouched
//! - Registration methods return the stack to keep chained setup readable

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;

use crate::factory::RouteFactory;
use crate::routing::definition::RouteDefinition;
use crate::routing::error::RouteError;
use crate::routing::index::PriorityIndex;
use crate::routing::route::{AssembleOptions, Route, RouteMatch, RouteParams};

/// Priority-ordered registry of named routes.
#[derive(Debug)]
pub struct RouteStack {
    routes: PriorityIndex,
    default_params: HashMap<String, RouteParams>,
    factory: Arc<RouteFactory>,
}

impl RouteStack {
    /// Create an empty stack with the default factory (bundled route
    /// types registered).
    pub fn new() -> Self {
        Self::with_factory(Arc::new(RouteFactory::with_default_routes()))
    }

    /// Create an empty stack resolving declarative specs through the
    /// given factory.
    pub fn with_factory(factory: Arc<RouteFactory>) -> Self {
        Self {
            routes: PriorityIndex::new(),
            default_params: HashMap::new(),
            factory,
        }
    }

    /// Swap the factory used for declarative definitions.
    pub fn set_factory(&mut self, factory: Arc<RouteFactory>) -> &mut Self {
        self.factory = factory;
        self
    }

    pub fn factory(&self) -> &Arc<RouteFactory> {
        &self.factory
    }

    /// Register a route under a name, replacing any previous entry with
    /// that name. Priority comes from the definition (spec field or
    /// instance property), defaulting to 0.
    pub fn add_route(
        &mut self,
        name: impl Into<String>,
        definition: impl Into<RouteDefinition>,
    ) -> Result<&mut Self, RouteError> {
        self.insert(name.into(), definition.into(), None)
    }

    /// Register a route with an explicit priority, overriding whatever
    /// the definition carries.
    pub fn add_route_with_priority(
        &mut self,
        name: impl Into<String>,
        definition: impl Into<RouteDefinition>,
        priority: i32,
    ) -> Result<&mut Self, RouteError> {
        self.insert(name.into(), definition.into(), Some(priority))
    }

    /// Register every (name, definition) pair in iteration order.
    pub fn add_routes<I, N, D>(&mut self, definitions: I) -> Result<&mut Self, RouteError>
    where
        I: IntoIterator<Item = (N, D)>,
        N: Into<String>,
        D: Into<RouteDefinition>,
    {
        for (name, definition) in definitions {
            self.insert(name.into(), definition.into(), None)?;
        }
        Ok(self)
    }

    /// Replace the whole route set. Every definition is normalized (and,
    /// for specs, constructed) before the current set is cleared, so an
    /// invalid definition leaves the stack unchanged.
    pub fn set_routes<I, N, D>(&mut self, definitions: I) -> Result<&mut Self, RouteError>
    where
        I: IntoIterator<Item = (N, D)>,
        N: Into<String>,
        D: Into<RouteDefinition>,
    {
        let mut normalized = Vec::new();
        for (name, definition) in definitions {
            let (route, spec_priority) = self.normalize(definition.into())?;
            normalized.push((name.into(), route, spec_priority));
        }

        self.routes.clear();
        for (name, route, spec_priority) in normalized {
            let priority = spec_priority.unwrap_or_else(|| route.priority());
            self.routes.insert(name, route, priority);
        }
        Ok(self)
    }

    /// Remove a route by name. Removing an absent name is a no-op.
    pub fn remove_route(&mut self, name: &str) -> &mut Self {
        if self.routes.remove(name) {
            tracing::debug!(route = %name, "route removed");
        }
        self
    }

    /// Set one default parameter for a route name. The name does not have
    /// to be registered yet.
    pub fn set_default_param(
        &mut self,
        route: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.default_params
            .entry(route.into())
            .or_default()
            .insert(key.into(), value.into());
        self
    }

    /// Merge a whole map of default parameters for a route name.
    pub fn set_default_params(
        &mut self,
        route: impl Into<String>,
        params: RouteParams,
    ) -> &mut Self {
        self.default_params
            .entry(route.into())
            .or_default()
            .extend(params);
        self
    }

    /// Try every route in priority order and return the first match,
    /// enriched with the route name and its default parameters. `None`
    /// means no route matched; that is not an error.
    pub fn match_request(&self, req: &Request<Body>) -> Option<RouteMatch> {
        for (name, route) in self.routes.iter() {
            if let Some(mut matched) = route.match_request(req) {
                tracing::debug!(route = %name, "request matched");
                matched.set_route_name(name);
                if let Some(defaults) = self.default_params.get(name) {
                    for (key, value) in defaults {
                        matched.set_default(key.clone(), value.clone());
                    }
                }
                return Some(matched);
            }
        }

        tracing::trace!("no route matched request");
        None
    }

    /// Assemble a URL fragment for the route named in `options`. Default
    /// parameters fill gaps in `params` without overwriting caller keys;
    /// the route receives the remaining options with `name` stripped.
    pub fn assemble(
        &self,
        params: &RouteParams,
        options: &AssembleOptions,
    ) -> Result<String, RouteError> {
        let name = options
            .name
            .as_deref()
            .ok_or_else(|| RouteError::InvalidArgument("missing \"name\" option".into()))?;

        let route = self
            .routes
            .get(name)
            .ok_or_else(|| RouteError::NotFound(name.to_string()))?;

        let mut merged = params.clone();
        if let Some(defaults) = self.default_params.get(name) {
            for (key, value) in defaults {
                merged.entry(key.clone()).or_insert_with(|| value.clone());
            }
        }

        let mut forwarded = options.clone();
        forwarded.name = None;
        route.assemble(&merged, &forwarded)
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    fn insert(
        &mut self,
        name: String,
        definition: RouteDefinition,
        priority: Option<i32>,
    ) -> Result<&mut Self, RouteError> {
        let (route, spec_priority) = self.normalize(definition)?;
        let priority = priority
            .or(spec_priority)
            .unwrap_or_else(|| route.priority());
        tracing::debug!(route = %name, priority, "route registered");
        self.routes.insert(name, route, priority);
        Ok(self)
    }

    /// Resolve a definition to a constructed route. Specs go through the
    /// factory; factory and constructor errors propagate unchanged.
    fn normalize(
        &self,
        definition: RouteDefinition,
    ) -> Result<(Arc<dyn Route>, Option<i32>), RouteError> {
        match definition {
            RouteDefinition::Instance(route) => Ok((route, None)),
            RouteDefinition::Spec(spec) => {
                let route_type = spec.route_type.ok_or_else(|| {
                    RouteError::InvalidArgument(
                        "missing \"type\" option in route definition".into(),
                    )
                })?;
                let route = self.factory.create(&route_type, &spec.options)?;
                Ok((route, spec.priority))
            }
        }
    }
}

impl Default for RouteStack {
    fn default() -> Self {
        Self::new()
    }
}
