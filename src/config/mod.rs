//! Declarative route set configuration.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → RoutesConfig (named specs with type/options/priority)
//!     → build_stack (all routes constructed, then registered at once)
//!     → RouteStack
//! ```
//!
//! # Design Decisions
//! - Syntactic validation is serde's job; the stack and factory do the
//!   semantic checks (known type, required options)
//! - Building is all-or-nothing: one bad definition aborts the whole set

pub mod loader;
pub mod schema;

pub use loader::{build_stack, parse_routes};
pub use schema::{RouteConfig, RoutesConfig};
