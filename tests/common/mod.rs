//! Shared route assets for integration testing.

use axum::body::Body;
use axum::http::Request;
use route_stack::{AssembleOptions, Route, RouteError, RouteMatch, RouteParams};

/// Matches every request with no parameters; assembles an empty fragment.
#[derive(Debug, Default)]
pub struct DummyRoute;

impl Route for DummyRoute {
    fn match_request(&self, _req: &Request<Body>) -> Option<RouteMatch> {
        Some(RouteMatch::new(RouteParams::new()))
    }

    fn assemble(
        &self,
        _params: &RouteParams,
        _options: &AssembleOptions,
    ) -> Result<String, RouteError> {
        Ok(String::new())
    }
}

/// Matches every request with `foo = "bar"`; assembles whatever value
/// `foo` ends up with after merging.
#[derive(Debug, Default)]
pub struct DummyRouteWithParam {
    pub priority: i32,
}

impl Route for DummyRouteWithParam {
    fn match_request(&self, _req: &Request<Body>) -> Option<RouteMatch> {
        let mut params = RouteParams::new();
        params.insert("foo".into(), "bar".into());
        Some(RouteMatch::new(params))
    }

    fn assemble(
        &self,
        params: &RouteParams,
        _options: &AssembleOptions,
    ) -> Result<String, RouteError> {
        Ok(params.get("foo").cloned().unwrap_or_default())
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}

/// Matches every request, tagging the match so tests can tell which
/// registered route won.
#[derive(Debug)]
pub struct TaggedRoute {
    pub tag: &'static str,
}

impl Route for TaggedRoute {
    fn match_request(&self, _req: &Request<Body>) -> Option<RouteMatch> {
        let mut params = RouteParams::new();
        params.insert("route".into(), self.tag.into());
        Some(RouteMatch::new(params))
    }

    fn assemble(
        &self,
        _params: &RouteParams,
        _options: &AssembleOptions,
    ) -> Result<String, RouteError> {
        Ok(self.tag.to_string())
    }
}

/// A request with nothing notable about it.
pub fn request() -> Request<Body> {
    Request::builder()
        .uri("http://example.com/")
        .body(Body::default())
        .unwrap()
}
