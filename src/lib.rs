//! Priority-ordered route registry for HTTP request dispatch.

pub mod config;
pub mod factory;
pub mod routes;
pub mod routing;

pub use factory::RouteFactory;
pub use routing::{
    AssembleOptions, Route, RouteDefinition, RouteError, RouteMatch, RouteOptions, RouteParams,
    RouteSpec, RouteStack,
};
