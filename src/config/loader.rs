//! Route set loading.

use std::sync::Arc;

use crate::config::schema::RoutesConfig;
use crate::factory::RouteFactory;
use crate::routing::definition::RouteDefinition;
use crate::routing::error::RouteError;
use crate::routing::stack::RouteStack;

/// Parse a declarative route set from TOML.
pub fn parse_routes(toml_str: &str) -> Result<RoutesConfig, RouteError> {
    let config: RoutesConfig = toml::from_str(toml_str)?;
    Ok(config)
}

/// Build a stack from a parsed route set.
///
/// Uses `set_routes`, so every definition is constructed before any is
/// registered: a bad definition yields an error and no partially built
/// stack.
pub fn build_stack(
    config: &RoutesConfig,
    factory: Arc<RouteFactory>,
) -> Result<RouteStack, RouteError> {
    let mut stack = RouteStack::with_factory(factory);
    let definitions: Vec<(String, RouteDefinition)> =
        config.routes.iter().cloned().map(Into::into).collect();
    stack.set_routes(definitions)?;
    Ok(stack)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;

    const ROUTES: &str = r#"
        [[routes]]
        name = "home"
        type = "literal"
        [routes.options]
        path = "/"

        [[routes]]
        name = "blog-post"
        type = "segment"
        priority = 2
        [routes.options]
        path = "/blog/:slug"
        [routes.options.defaults]
        format = "html"
    "#;

    #[test]
    fn test_parse_and_build() {
        let config = parse_routes(ROUTES).unwrap();
        assert_eq!(config.routes.len(), 2);

        let stack = build_stack(&config, Arc::new(RouteFactory::with_default_routes())).unwrap();
        let req = Request::builder()
            .uri("http://example.com/blog/first")
            .body(Body::default())
            .unwrap();
        let matched = stack.match_request(&req).unwrap();
        assert_eq!(matched.route_name(), Some("blog-post"));
        assert_eq!(matched.param("slug"), Some("first"));
        assert_eq!(matched.param("format"), Some("html"));
    }

    #[test]
    fn test_parse_error_surfaces() {
        let err = parse_routes("routes = 42").unwrap_err();
        assert!(matches!(err, RouteError::Config(_)));
    }

    #[test]
    fn test_unknown_type_fails_build() {
        let config = parse_routes(
            r#"
            [[routes]]
            name = "x"
            type = "regex"
            "#,
        )
        .unwrap();

        let err = build_stack(&config, Arc::new(RouteFactory::with_default_routes())).unwrap_err();
        assert!(matches!(err, RouteError::UnknownType(_)));
    }
}
