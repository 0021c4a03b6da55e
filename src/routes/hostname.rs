//! Host-header route.

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;

use crate::routing::definition::RouteOptions;
use crate::routing::error::RouteError;
use crate::routing::route::{AssembleOptions, Route, RouteMatch, RouteParams};

/// Matches the Host header exactly, case-insensitively. Consumes no path,
/// so it combines with path-based routes behind it in the stack.
#[derive(Debug, Clone)]
pub struct HostnameRoute {
    host: String,
    defaults: RouteParams,
    priority: i32,
}

impl HostnameRoute {
    /// The host is normalized to lowercase for case-insensitive matching.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into().to_lowercase(),
            defaults: RouteParams::new(),
            priority: 0,
        }
    }

    pub fn with_defaults(mut self, defaults: RouteParams) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Factory constructor for declarative definitions.
    pub(crate) fn from_options(options: &RouteOptions) -> Result<Arc<dyn Route>, RouteError> {
        let host = options.host.clone().ok_or_else(|| {
            RouteError::InvalidArgument("missing \"host\" option for hostname route".into())
        })?;
        Ok(Arc::new(
            Self::new(host).with_defaults(options.defaults.clone()),
        ))
    }
}

impl Route for HostnameRoute {
    fn match_request(&self, req: &Request<Body>) -> Option<RouteMatch> {
        let host = req.headers().get("host")?.to_str().ok()?;
        if host.to_lowercase() == self.host {
            Some(RouteMatch::new(self.defaults.clone()))
        } else {
            None
        }
    }

    fn assemble(
        &self,
        _params: &RouteParams,
        _options: &AssembleOptions,
    ) -> Result<String, RouteError> {
        Ok(self.host.clone())
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(host: &str) -> Request<Body> {
        Request::builder()
            .header("Host", host)
            .body(Body::default())
            .unwrap()
    }

    #[test]
    fn test_matches_host_case_insensitively() {
        let route = HostnameRoute::new("example.com");

        assert!(route.match_request(&request("example.com")).is_some());
        assert!(route.match_request(&request("EXAMPLE.COM")).is_some());
        assert!(route.match_request(&request("other.com")).is_none());
    }

    #[test]
    fn test_missing_host_header_declines() {
        let route = HostnameRoute::new("example.com");
        let req = Request::builder().body(Body::default()).unwrap();
        assert!(route.match_request(&req).is_none());
    }

    #[test]
    fn test_assemble_returns_hostname() {
        let route = HostnameRoute::new("Example.COM");
        let fragment = route
            .assemble(&RouteParams::new(), &AssembleOptions::default())
            .unwrap();
        assert_eq!(fragment, "example.com");
    }
}
