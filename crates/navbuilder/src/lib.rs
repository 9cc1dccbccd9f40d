//! # navbuilder
//!
//! A small builder DSL for navigation destinations. Declare a destination
//! name and its arguments once, and get:
//! - a route template for pattern-based routers (`detail/{id}?tab={tab}`)
//! - argument records (name, type tag, nullability, default) for registering
//!   the destination with a navigation framework
//! - a validated way to fill the template with concrete values
//!   (`detail/42?tab=info`)
//!
//! Required arguments become path segments, optional arguments become query
//! parameters. An optional argument must be nullable or have a default value
//! so the framework can resolve it when it is left out.
//!
//! ## Example
//!
//! ```
//! use navbuilder::{nav, nav_args, NavType};
//!
//! let next = nav("next", |b| {
//!     b.arg("id", |a| a.nav_type(NavType::Int))?
//!         .optional_arg("option1", |a| a.nav_type(NavType::String).nullable(true))?
//!         .optional_arg("option2", |a| a.nav_type(NavType::Int).default_value(0))
//! })?;
//!
//! assert_eq!(next.route(), "next/{id}?option1={option1}&option2={option2}");
//! assert_eq!(next.argument_bindings().len(), 3);
//!
//! let route = next.build_route(nav_args!["id" => 123, "option1" => "abc"])?;
//! assert_eq!(route, "next/123?option1=abc");
//! # Ok::<(), navbuilder::NavError>(())
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod arg;
mod error;
mod nav;
mod nav_type;
pub mod route;
mod value;

pub use arg::{NamedNavArgument, NavArg, NavArgBuilder};
pub use error::{NavError, Result};
pub use nav::{Nav, NavBuilder};
pub use nav_type::NavType;
pub use value::NavValue;

/// Declares a destination called `name`, configured by `init`.
///
/// `init` receives an empty [`NavBuilder`] and returns it with the arguments
/// declared; the first declaration error is returned as is.
///
/// ```
/// use navbuilder::nav;
///
/// let start = nav("start", Ok)?;
/// assert_eq!(start.route(), "start");
/// # Ok::<(), navbuilder::NavError>(())
/// ```
pub fn nav<F>(name: impl Into<String>, init: F) -> Result<Nav>
where
    F: FnOnce(NavBuilder) -> Result<NavBuilder>,
{
    init(NavBuilder::new(name)).map(NavBuilder::build)
}

/// Builds a `Vec<(&str, NavValue)>` of route bindings from mixed value types.
///
/// ```
/// use navbuilder::{nav_args, NavValue};
///
/// let args = nav_args!["id" => 7, "name" => "abc", "flag" => true];
/// assert_eq!(args[0], ("id", NavValue::Int(7)));
///
/// let none = nav_args![];
/// assert!(none.is_empty());
/// ```
#[macro_export]
macro_rules! nav_args {
    () => {
        ::std::vec::Vec::<(&str, $crate::NavValue)>::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        ::std::vec![$(($key, $crate::NavValue::from($value))),+]
    };
}
