//! Semantic type tags for navigation arguments
//!
//! The tag is metadata only: this crate never checks bound values against
//! it. It is carried through to [`NamedNavArgument`](crate::NamedNavArgument)
//! so the host navigation framework can register a typed argument.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Argument kinds understood by the host navigation framework
///
/// Serialized using the framework's canonical type names.
///
/// # Examples
///
/// ```
/// use navbuilder::NavType;
///
/// assert_eq!(NavType::Int.name(), "integer");
/// assert_eq!(NavType::StringArray.name(), "string[]");
/// assert!(NavType::String.allows_nullable());
/// assert!(!NavType::Int.allows_nullable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavType {
    #[serde(rename = "integer")]
    Int,
    #[serde(rename = "long")]
    Long,
    #[serde(rename = "float")]
    Float,
    #[serde(rename = "boolean")]
    Bool,
    #[serde(rename = "string")]
    String,
    #[serde(rename = "integer[]")]
    IntArray,
    #[serde(rename = "long[]")]
    LongArray,
    #[serde(rename = "float[]")]
    FloatArray,
    #[serde(rename = "boolean[]")]
    BoolArray,
    #[serde(rename = "string[]")]
    StringArray,
}

impl NavType {
    /// Canonical type name
    pub fn name(self) -> &'static str {
        match self {
            NavType::Int => "integer",
            NavType::Long => "long",
            NavType::Float => "float",
            NavType::Bool => "boolean",
            NavType::String => "string",
            NavType::IntArray => "integer[]",
            NavType::LongArray => "long[]",
            NavType::FloatArray => "float[]",
            NavType::BoolArray => "boolean[]",
            NavType::StringArray => "string[]",
        }
    }

    /// Whether the framework accepts a null value for this kind.
    ///
    /// Primitive kinds cannot hold null; strings and arrays can.
    pub fn allows_nullable(self) -> bool {
        !matches!(
            self,
            NavType::Int | NavType::Long | NavType::Float | NavType::Bool
        )
    }
}

impl fmt::Display for NavType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
