//! Exact-path route.

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;

use crate::routing::definition::RouteOptions;
use crate::routing::error::RouteError;
use crate::routing::route::{AssembleOptions, Route, RouteMatch, RouteParams};

/// Matches one fixed path, byte for byte, and assembles it back verbatim.
#[derive(Debug, Clone)]
pub struct LiteralRoute {
    path: String,
    defaults: RouteParams,
    priority: i32,
}

impl LiteralRoute {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            defaults: RouteParams::new(),
            priority: 0,
        }
    }

    /// Parameters reported on every match.
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
        let path = options.path.clone().ok_or_else(|| {
            RouteError::InvalidArgument("missing \"path\" option for literal route".into())
        })?;
        Ok(Arc::new(
            Self::new(path).with_defaults(options.defaults.clone()),
        ))
    }
}

impl Route for LiteralRoute {
    fn match_request(&self, req: &Request<Body>) -> Option<RouteMatch> {
        if req.uri().path() == self.path {
            Some(RouteMatch::new(self.defaults.clone()).with_length(self.path.len()))
        } else {
            None
        }
    }

    fn assemble(
        &self,
        _params: &RouteParams,
        _options: &AssembleOptions,
    ) -> Result<String, RouteError> {
        Ok(self.path.clone())
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(path: &str) -> Request<Body> {
        Request::builder()
            .uri(format!("http://example.com{path}"))
            .body(Body::default())
            .unwrap()
    }

    #[test]
    fn test_matches_exact_path_only() {
        let route = LiteralRoute::new("/health");

        assert!(route.match_request(&request("/health")).is_some());
        assert!(route.match_request(&request("/health/live")).is_none());
        assert!(route.match_request(&request("/healthz")).is_none());
    }

    #[test]
    fn test_match_reports_defaults_and_length() {
        let mut defaults = RouteParams::new();
        defaults.insert("action".into(), "status".into());
        let route = LiteralRoute::new("/health").with_defaults(defaults);

        let matched = route.match_request(&request("/health")).unwrap();
        assert_eq!(matched.param("action"), Some("status"));
        assert_eq!(matched.length(), "/health".len());
    }

    #[test]
    fn test_assemble_ignores_params() {
        let route = LiteralRoute::new("/health");
        let fragment = route
            .assemble(&RouteParams::new(), &AssembleOptions::default())
            .unwrap();
        assert_eq!(fragment, "/health");
    }

    #[test]
    fn test_from_options_requires_path() {
        let err = LiteralRoute::from_options(&RouteOptions::default()).unwrap_err();
        assert!(matches!(err, RouteError::InvalidArgument(_)));
    }
}
