//! Argument descriptors and their per-argument builder

use serde::{Deserialize, Deserializer, Serialize};

use crate::{NavType, NavValue};

/// Immutable metadata for one named argument of a destination
///
/// Created through [`NavBuilder::arg_with`](crate::NavBuilder::arg_with) and
/// friends; never constructed directly.
#[derive(Debug, Clone, PartialEq)]
pub struct NavArg {
    name: String,
    nav_type: Option<NavType>,
    optional: bool,
    nullable: bool,
    /// `Some(NavValue::Null)` is a present null default, `None` is no default
    default_value: Option<NavValue>,
}

impl NavArg {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nav_type(&self) -> Option<NavType> {
        self.nav_type
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn default_value(&self) -> Option<&NavValue> {
        self.default_value.as_ref()
    }

    pub fn has_default_value(&self) -> bool {
        self.default_value.is_some()
    }

    /// An optional argument must be resolvable when the caller leaves it out
    pub(crate) fn can_be_omitted(&self) -> bool {
        !self.optional || self.nullable || self.default_value.is_some()
    }
}

/// Configures a single argument inside a destination declaration
///
/// Setters consume and return the builder so they chain inside the
/// configuration closure:
///
/// ```
/// use navbuilder::{Nav, NavType};
///
/// let nav = Nav::builder("detail")
///     .optional_arg("page", |a| a.nav_type(NavType::Int).default_value(1))
///     .unwrap()
///     .build();
/// assert_eq!(nav.route(), "detail?page={page}");
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct NavArgBuilder {
    name: String,
    optional: bool,
    nav_type: Option<NavType>,
    nullable: bool,
    default_value: Option<NavValue>,
}

impl NavArgBuilder {
    pub(crate) fn new(name: String, optional: bool) -> Self {
        Self {
            name,
            optional,
            nav_type: None,
            nullable: false,
            default_value: None,
        }
    }

    /// Sets the semantic type tag
    pub fn nav_type(mut self, nav_type: NavType) -> Self {
        self.nav_type = Some(nav_type);
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Sets a default value; `NavValue::Null` counts as a default
    pub fn default_value(mut self, value: impl Into<NavValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub(crate) fn build(self) -> NavArg {
        NavArg {
            name: self.name,
            nav_type: self.nav_type,
            optional: self.optional,
            nullable: self.nullable,
            default_value: self.default_value,
        }
    }
}

/// The view of an argument handed to the host framework for registration
///
/// Serializes as `{"name", "type"?, "nullable", "default_value"?}`. On the
/// way back an explicit `"default_value": null` is a present null default,
/// and a numeric default is read as the kind `"type"` declares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "NamedNavArgumentRepr")]
pub struct NamedNavArgument {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub nav_type: Option<NavType>,
    pub nullable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<NavValue>,
}

impl From<&NavArg> for NamedNavArgument {
    fn from(arg: &NavArg) -> Self {
        Self {
            name: arg.name.clone(),
            nav_type: arg.nav_type,
            nullable: arg.nullable,
            default_value: arg.default_value.clone(),
        }
    }
}

/// Wire form of [`NamedNavArgument`] before the default is typed
#[derive(Deserialize)]
struct NamedNavArgumentRepr {
    name: String,
    #[serde(rename = "type", default)]
    nav_type: Option<NavType>,
    #[serde(default)]
    nullable: bool,
    #[serde(default, deserialize_with = "present_value")]
    default_value: Option<NavValue>,
}

impl From<NamedNavArgumentRepr> for NamedNavArgument {
    fn from(repr: NamedNavArgumentRepr) -> Self {
        Self {
            name: repr.name,
            nav_type: repr.nav_type,
            nullable: repr.nullable,
            default_value: repr.default_value.map(|value| value.conform_to(repr.nav_type)),
        }
    }
}

// Only called when the field is in the input, so a JSON null stays a value.
fn present_value<'de, D>(deserializer: D) -> Result<Option<NavValue>, D::Error>
where
    D: Deserializer<'de>,
{
    NavValue::deserialize(deserializer).map(Some)
}
