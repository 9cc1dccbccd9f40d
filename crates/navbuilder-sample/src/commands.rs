// File: src/commands.rs
// Purpose: CLI command bodies, each producing the text printed to stdout

use anyhow::{Context, Result};
use navbuilder::{NamedNavArgument, Nav};
use serde::Serialize;
use tracing::info;

use crate::config::ItemConfig;
use crate::navigator::Navigator;
use crate::ui::{detail, list};

/// Destinations of the app, declared once at startup
pub struct Destinations {
    pub list: Nav,
    pub detail: Nav,
}

impl Destinations {
    pub fn new() -> Result<Self> {
        Ok(Self {
            list: list::list_nav().context("Invalid list destination")?,
            detail: detail::detail_nav().context("Invalid detail destination")?,
        })
    }
}

#[derive(Serialize)]
struct RouteReport<'a> {
    route: &'a str,
    arguments: &'a [NamedNavArgument],
}

/// `routes`: every destination's template and argument bindings as JSON
pub fn routes(destinations: &Destinations) -> Result<String> {
    let report = [&destinations.list, &destinations.detail]
        .into_iter()
        .map(|nav| RouteReport {
            route: nav.route(),
            arguments: nav.argument_bindings(),
        })
        .collect::<Vec<_>>();
    Ok(serde_json::to_string_pretty(&report)?)
}

/// `open`: navigates from the list to one entry's detail screen and back
pub fn open(
    destinations: &Destinations,
    items: &[ItemConfig],
    index: usize,
    with_options: bool,
) -> Result<String> {
    let item = items
        .get(index)
        .with_context(|| format!("No list entry at index {}", index))?;

    let mut navigator = Navigator::new(&destinations.list)?;
    let entry = detail::navigate_to_detail(
        &mut navigator,
        &destinations.detail,
        &item.lang,
        &item.ja,
        with_options,
    )?;

    let out = format!(
        "route: {}\n{}",
        entry.route,
        detail::render(&detail::DetailArgs::from_entry(entry)?)
    );

    if navigator.navigate_back() {
        info!("Back stack depth after closing detail: {}", navigator.depth());
    }
    Ok(out)
}
