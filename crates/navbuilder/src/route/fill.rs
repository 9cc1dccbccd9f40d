//! Concrete route assembly
//!
//! Takes already-validated values and writes them into `name/seg?k=v`
//! form. Every inserted key and value is percent-encoded, so the structural
//! characters `/ ? & = { }` only ever come from the skeleton.

use std::borrow::Cow;

use crate::NavValue;

/// Percent-encodes a value for use as one path segment
pub fn encode_segment(raw: &str) -> Cow<'_, str> {
    urlencoding::encode(raw)
}

/// Percent-encodes a multi-segment path, keeping `/` as the separator
pub fn encode_path(raw: &str) -> Cow<'_, str> {
    if raw.split('/').all(|segment| matches!(encode_segment(segment), Cow::Borrowed(_))) {
        return Cow::Borrowed(raw);
    }
    Cow::Owned(
        raw.split('/')
            .map(encode_segment)
            .collect::<Vec<_>>()
            .join("/"),
    )
}

/// Percent-encodes a query key or value
///
/// Spaces become `%20` rather than `+`.
pub fn encode_query_component(raw: &str) -> Cow<'_, str> {
    urlencoding::encode(raw)
}

/// Joins the root, the required segments (in order) and the query pairs
/// (in order) into a relative route.
///
/// The root is the destination name; it is encoded like a path, so a `/`
/// inside it still separates segments.
pub fn assemble<'a, S, Q>(root: &str, segments: S, query: Q) -> String
where
    S: IntoIterator<Item = &'a NavValue>,
    Q: IntoIterator<Item = (&'a str, &'a NavValue)>,
{
    let mut route = encode_path(root).into_owned();

    for value in segments {
        route.push('/');
        route.push_str(&encode_segment(&value.to_string()));
    }

    let mut separator = '?';
    for (key, value) in query {
        route.push(separator);
        route.push_str(&encode_query_component(key));
        route.push('=');
        route.push_str(&encode_query_component(&value.to_string()));
        separator = '&';
    }

    route
}
