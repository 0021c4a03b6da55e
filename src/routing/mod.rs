//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration:
//!     (name, definition [instance | spec]) → stack.rs (normalize via factory)
//!     → index.rs (insert, re-sort by priority then insertion order)
//!
//! Incoming request:
//!     → stack.rs (iterate index in order)
//!     → Route::match_request (each pluggable variant decides)
//!     → First success: tag route name, merge default params (gaps only)
//!     → Return RouteMatch, or None when nothing matched
//!
//! Assembly:
//!     (params, options{name}) → stack.rs (lookup by name)
//!     → merge default params (gaps only)
//!     → Route::assemble → URL fragment
//! ```
//!
//! # Design Decisions
//! - Higher priority tried first; earlier registration wins ties
//! - First match wins, no backtracking
//! - "No match" is a `None`, never an error
//! - The stack depends on the `Route` trait only, never on a variant

pub mod definition;
pub mod error;
pub mod index;
pub mod route;
pub mod stack;

pub use definition::{RouteDefinition, RouteOptions, RouteSpec};
pub use error::RouteError;
pub use index::PriorityIndex;
pub use route::{AssembleOptions, Route, RouteMatch, RouteParams};
pub use stack::RouteStack;
