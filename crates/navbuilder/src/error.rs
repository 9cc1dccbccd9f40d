// File: src/error.rs
// Purpose: Errors raised while declaring destinations and filling routes

use thiserror::Error;

/// Caller-input errors for navigation destinations.
///
/// The first two variants come from [`NavBuilder`](crate::NavBuilder) while
/// arguments are being declared, the last two from
/// [`Nav::build_route`](crate::Nav::build_route). The rendered messages are
/// stable and safe to match on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("Argument '{0}' has already been added to the builder.")]
    DuplicateArgument(String),

    #[error("Argument '{0}' is optional, but neither nullable nor has a default value.")]
    InvalidOptionalArgument(String),

    #[error(
        "Unknown argument key: {0}. \
         This key does not match any of the arguments defined in this navigation destination."
    )]
    UnknownArgument(String),

    #[error("{0} is not provided. This argument is required for this navigation destination.")]
    MissingRequiredArgument(String),
}

impl NavError {
    /// Name of the argument (or binding key) the error is about
    pub fn argument(&self) -> &str {
        match self {
            NavError::DuplicateArgument(name)
            | NavError::InvalidOptionalArgument(name)
            | NavError::UnknownArgument(name)
            | NavError::MissingRequiredArgument(name) => name,
        }
    }
}

pub type Result<T> = std::result::Result<T, NavError>;
