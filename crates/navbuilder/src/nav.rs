//! Navigation destinations and the builder that declares them

use tracing::{debug, trace};

use crate::arg::{NamedNavArgument, NavArg, NavArgBuilder};
use crate::error::{NavError, Result};
use crate::route;
use crate::NavValue;

/// A navigation destination: a name plus its declared arguments
///
/// Everything derived from the declaration (the route template and the
/// argument bindings) is computed once in [`NavBuilder::build`]. A `Nav` is
/// immutable afterwards and can be shared freely.
///
/// # Examples
///
/// ```
/// use navbuilder::{nav_args, Nav, NavType};
///
/// let nav = Nav::builder("test")
///     .arg("arg1", |a| a.nav_type(NavType::Int))?
///     .optional_arg("arg2", |a| a.nav_type(NavType::String).nullable(true))?
///     .optional_arg("arg3", |a| a.nav_type(NavType::Int).default_value(999))?
///     .build();
///
/// assert_eq!(nav.route(), "test/{arg1}?arg2={arg2}&arg3={arg3}");
/// assert_eq!(nav.build_route(nav_args!["arg1" => 123])?, "test/123");
/// # Ok::<(), navbuilder::NavError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Nav {
    name: String,
    required_args: Vec<NavArg>,
    optional_args: Vec<NavArg>,
    route: String,
    argument_bindings: Vec<NamedNavArgument>,
}

impl Nav {
    /// Starts declaring a destination called `name`
    pub fn builder(name: impl Into<String>) -> NavBuilder {
        NavBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Route template, e.g. `name/{req}?opt={opt}`
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Required arguments in declaration order
    pub fn required_args(&self) -> &[NavArg] {
        &self.required_args
    }

    /// Optional arguments in declaration order
    pub fn optional_args(&self) -> &[NavArg] {
        &self.optional_args
    }

    /// Argument records for registering this destination with a framework.
    ///
    /// Required arguments come first, then optional ones; declaration order
    /// is kept within each group.
    pub fn argument_bindings(&self) -> &[NamedNavArgument] {
        &self.argument_bindings
    }

    /// Fills the template with concrete values and returns the route to
    /// navigate to.
    ///
    /// Bindings are `(name, value)` pairs. Validation finishes before any
    /// output is produced:
    /// 1. the first key that matches no declared argument fails with
    ///    [`NavError::UnknownArgument`]
    /// 2. the first required argument (in declaration order) with no
    ///    binding fails with [`NavError::MissingRequiredArgument`]
    ///
    /// Required values become path segments in declaration order. Optional
    /// values become query parameters in the order they were supplied;
    /// optional arguments that are not supplied are left out entirely. When
    /// a key is repeated the last value wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use navbuilder::{nav_args, Nav, NavError};
    ///
    /// let nav = Nav::builder("user")
    ///     .arg("a", |a| a)?
    ///     .arg("b", |a| a)?
    ///     .build();
    ///
    /// assert_eq!(nav.build_route(nav_args!["b" => 2, "a" => 1])?, "user/1/2");
    /// assert_eq!(
    ///     nav.build_route(nav_args!["a" => 1]),
    ///     Err(NavError::MissingRequiredArgument("b".to_string()))
    /// );
    /// # Ok::<(), NavError>(())
    /// ```
    pub fn build_route<I, K, V>(&self, bindings: I) -> Result<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<NavValue>,
    {
        let mut required: Vec<Option<NavValue>> = vec![None; self.required_args.len()];
        let mut optional: Vec<(&str, NavValue)> = Vec::new();

        for (key, value) in bindings {
            let key = key.as_ref();

            if let Some(index) = self.required_args.iter().position(|arg| arg.name() == key) {
                required[index] = Some(value.into());
            } else if let Some(arg) = self.optional_args.iter().find(|arg| arg.name() == key) {
                let value = value.into();
                match optional.iter_mut().find(|(name, _)| *name == arg.name()) {
                    Some(slot) => slot.1 = value,
                    None => optional.push((arg.name(), value)),
                }
            } else {
                debug!("Rejected route for '{}': unknown argument '{}'", self.name, key);
                return Err(NavError::UnknownArgument(key.to_string()));
            }
        }

        let segments = self
            .required_args
            .iter()
            .zip(required)
            .map(|(arg, value)| {
                value.ok_or_else(|| {
                    debug!("Rejected route for '{}': missing '{}'", self.name, arg.name());
                    NavError::MissingRequiredArgument(arg.name().to_string())
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let filled = route::assemble(
            &self.name,
            &segments,
            optional.iter().map(|(key, value)| (*key, value)),
        );
        trace!("Filled route {} -> {}", self.route, filled);

        Ok(filled)
    }
}

/// Accumulates argument declarations for one destination
///
/// Each declaration consumes the builder and hands it back on success, so a
/// whole destination is one `?`-chained expression. Declarations are checked
/// as they are added; [`build`](Self::build) cannot fail.
#[derive(Debug, Clone)]
#[must_use]
pub struct NavBuilder {
    name: String,
    arguments: Vec<NavArg>,
}

impl NavBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    /// Declares an argument.
    ///
    /// `configure` receives a fresh [`NavArgBuilder`] and returns it with the
    /// type tag, nullability and default value set.
    ///
    /// # Errors
    ///
    /// - [`NavError::DuplicateArgument`] if `name` was already declared
    ///   (checked before `configure` runs)
    /// - [`NavError::InvalidOptionalArgument`] if the argument is optional
    ///   but ends up neither nullable nor defaulted
    pub fn arg_with<F>(mut self, name: impl Into<String>, optional: bool, configure: F) -> Result<Self>
    where
        F: FnOnce(NavArgBuilder) -> NavArgBuilder,
    {
        let name = name.into();

        if self.arguments.iter().any(|arg| arg.name() == name) {
            return Err(NavError::DuplicateArgument(name));
        }

        let arg = configure(NavArgBuilder::new(name, optional)).build();
        if !arg.can_be_omitted() {
            return Err(NavError::InvalidOptionalArgument(arg.name().to_string()));
        }

        self.arguments.push(arg);
        Ok(self)
    }

    /// Declares a required argument
    pub fn arg<F>(self, name: impl Into<String>, configure: F) -> Result<Self>
    where
        F: FnOnce(NavArgBuilder) -> NavArgBuilder,
    {
        self.arg_with(name, false, configure)
    }

    /// Declares an optional argument; it must be nullable or have a default
    pub fn optional_arg<F>(self, name: impl Into<String>, configure: F) -> Result<Self>
    where
        F: FnOnce(NavArgBuilder) -> NavArgBuilder,
    {
        self.arg_with(name, true, configure)
    }

    /// Freezes the declarations into a [`Nav`]
    pub fn build(self) -> Nav {
        let (optional_args, required_args): (Vec<NavArg>, Vec<NavArg>) =
            self.arguments.into_iter().partition(NavArg::is_optional);

        let route = route::route_template(&self.name, &required_args, &optional_args);
        let argument_bindings = required_args
            .iter()
            .chain(&optional_args)
            .map(NamedNavArgument::from)
            .collect();

        debug!("Built navigation destination '{}' with route {}", self.name, route);

        Nav {
            name: self.name,
            required_args,
            optional_args,
            route,
            argument_bindings,
        }
    }
}
