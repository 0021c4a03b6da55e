//! Route capability contract.
//!
//! # Responsibilities
//! - Define the interface every pluggable route implements
//! - Carry match results (parameters plus match metadata)
//! - Carry assembly options between caller, stack, and route
//!
//! # Design Decisions
//! - Routes are trait objects; the stack never knows concrete variants
//! - Matching returns `Option`, never an error: a route that cannot
//!   match simply declines and the next one is tried
//! - Default parameters only fill gaps, they never overwrite

use std::collections::HashMap;

use axum::body::Body;
use axum::http::Request;

use crate::routing::error::RouteError;

/// Parameter bag shared by matching and assembly.
pub type RouteParams = HashMap<String, String>;

/// A pluggable route: can test a request against its pattern and can
/// produce a URL fragment from parameters.
pub trait Route: Send + Sync + std::fmt::Debug {
    /// Test the request. `None` means "this route declines"; only a
    /// `Some` result stops the stack's iteration.
    fn match_request(&self, req: &Request<Body>) -> Option<RouteMatch>;

    /// Produce a URL fragment from the merged parameters. Errors
    /// propagate to the caller unchanged.
    fn assemble(&self, params: &RouteParams, options: &AssembleOptions)
        -> Result<String, RouteError>;

    /// Match-attempt priority when none is given at registration.
    fn priority(&self) -> i32 {
        0
    }
}

/// Result of a successful match.
///
/// The route fills in parameters and consumed length; the stack adds the
/// matched route name and merges default parameters afterwards.
#[derive(Debug, Clone, Default)]
pub struct RouteMatch {
    route_name: Option<String>,
    params: RouteParams,
    length: usize,
}

impl RouteMatch {
    /// Create a match carrying the given parameters.
    pub fn new(params: RouteParams) -> Self {
        Self {
            route_name: None,
            params,
            length: 0,
        }
    }

    /// Record how much of the request path this match consumed.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Name of the route that produced this match, set by the stack.
    pub fn route_name(&self) -> Option<&str> {
        self.route_name.as_deref()
    }

    pub fn set_route_name(&mut self, name: impl Into<String>) {
        self.route_name = Some(name.into());
    }

    /// Look up a single matched parameter.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn params(&self) -> &RouteParams {
        &self.params
    }

    pub fn set_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    /// Insert a default value only when the key is still absent.
    pub fn set_default(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.entry(key.into()).or_insert_with(|| value.into());
    }

    /// Length of input consumed by the match.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Options accepted by assembly.
///
/// `name` selects the route; everything else is forwarded to the route
/// untouched. The stack strips `name` before delegating.
#[derive(Debug, Clone, Default)]
pub struct AssembleOptions {
    pub name: Option<String>,
    pub extras: HashMap<String, String>,
}

impl AssembleOptions {
    /// Options selecting a route by name, with no extras.
    pub fn for_route(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            extras: HashMap::new(),
        }
    }
}
