//! Bundled route variants.
//!
//! Each variant is an independent implementation of the `Route` trait; the
//! stack never depends on any of them concretely. Additional variants plug
//! in by implementing the trait and, for declarative use, registering a
//! constructor with the factory.

pub mod hostname;
pub mod literal;
pub mod segment;

pub use hostname::HostnameRoute;
pub use literal::LiteralRoute;
pub use segment::SegmentRoute;
