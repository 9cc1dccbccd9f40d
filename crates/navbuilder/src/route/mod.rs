//! Route string generation
//!
//! Two halves, both pure:
//! - [`template`] derives the pattern a navigation framework registers
//! - [`fill`] writes concrete, percent-encoded values into a route

pub mod fill;
pub mod template;

pub use fill::{assemble, encode_path, encode_query_component, encode_segment};
pub use template::{optional_query, required_path, route_template};
