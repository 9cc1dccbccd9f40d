//! Route template derivation
//!
//! Pure functions: the same argument lists always give the same template.
//! Required arguments become `{name}` path segments, optional arguments
//! become `name={name}` query pairs.

use crate::NavArg;

/// `{a}/{b}` for the required arguments, empty when there are none
pub fn required_path(required: &[NavArg]) -> String {
    required
        .iter()
        .map(|arg| format!("{{{}}}", arg.name()))
        .collect::<Vec<_>>()
        .join("/")
}

/// `c={c}&d={d}` for the optional arguments, empty when there are none
pub fn optional_query(optional: &[NavArg]) -> String {
    optional
        .iter()
        .map(|arg| format!("{0}={{{0}}}", arg.name()))
        .collect::<Vec<_>>()
        .join("&")
}

/// Builds the full template: `name[/required_path][?optional_query]`
///
/// Separators are only emitted for non-empty groups, so a destination with
/// no arguments has a template equal to its name.
pub fn route_template(name: &str, required: &[NavArg], optional: &[NavArg]) -> String {
    let path = required_path(required);
    let query = optional_query(optional);

    let mut route = String::with_capacity(name.len() + path.len() + query.len() + 2);
    route.push_str(name);
    if !path.is_empty() {
        route.push('/');
        route.push_str(&path);
    }
    if !query.is_empty() {
        route.push('?');
        route.push_str(&query);
    }
    route
}
