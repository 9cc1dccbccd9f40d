//! A minimal back stack standing in for the host navigation framework
//!
//! Entries record the filled route together with the argument values the
//! destination receives: the supplied bindings plus the declared fallback
//! (default value, or null for nullable arguments) for every omitted one.

use std::collections::HashMap;

use anyhow::{Context, Result};
use navbuilder::{Nav, NavValue};
use tracing::{debug, info};

/// One visited destination
#[derive(Debug, Clone, PartialEq)]
pub struct BackStackEntry {
    pub destination: String,
    pub route: String,
    arguments: HashMap<String, NavValue>,
}

impl BackStackEntry {
    /// Value received for an argument, after defaults are applied
    pub fn argument(&self, name: &str) -> Option<&NavValue> {
        self.arguments.get(name)
    }
}

#[derive(Debug)]
pub struct Navigator {
    back_stack: Vec<BackStackEntry>,
}

impl Navigator {
    /// Opens `start` as the root entry. The start destination takes no
    /// bindings, so every required argument it declares makes this fail.
    pub fn new(start: &Nav) -> Result<Self> {
        let mut navigator = Self {
            back_stack: Vec::new(),
        };
        navigator.navigate(start, Vec::<(&str, NavValue)>::new())?;
        Ok(navigator)
    }

    /// Fills `nav`'s route with `bindings` and pushes it on the stack
    pub fn navigate<'a, I>(&mut self, nav: &Nav, bindings: I) -> Result<&BackStackEntry>
    where
        I: IntoIterator<Item = (&'a str, NavValue)>,
    {
        let bindings: Vec<(&str, NavValue)> = bindings.into_iter().collect();
        let route = nav
            .build_route(bindings.iter().cloned())
            .with_context(|| format!("Failed to navigate to '{}'", nav.name()))?;

        let arguments = resolve_arguments(nav, bindings);
        info!("Navigate: {}", route);

        self.back_stack.push(BackStackEntry {
            destination: nav.name().to_string(),
            route,
            arguments,
        });
        self.current().context("Back stack is empty")
    }

    /// Pops the current entry. The root entry is never popped.
    pub fn navigate_back(&mut self) -> bool {
        if self.back_stack.len() <= 1 {
            return false;
        }
        if let Some(entry) = self.back_stack.pop() {
            debug!("Popped {}", entry.route);
        }
        true
    }

    pub fn current(&self) -> Option<&BackStackEntry> {
        self.back_stack.last()
    }

    pub fn depth(&self) -> usize {
        self.back_stack.len()
    }
}

fn resolve_arguments(nav: &Nav, bindings: Vec<(&str, NavValue)>) -> HashMap<String, NavValue> {
    let mut arguments: HashMap<String, NavValue> = bindings
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();

    for binding in nav.argument_bindings() {
        if arguments.contains_key(&binding.name) {
            continue;
        }
        let fallback = match &binding.default_value {
            Some(value) => value.clone(),
            None if binding.nullable => NavValue::Null,
            None => continue,
        };
        arguments.insert(binding.name.clone(), fallback);
    }

    arguments
}
