// File: src/ui/list.rs
// Purpose: List screen, the start destination

use navbuilder::{nav, Nav, Result};

use crate::config::ItemConfig;

const ROUTE: &str = "list";

/// The list destination takes no arguments
pub fn list_nav() -> Result<Nav> {
    nav(ROUTE, Ok)
}

/// Renders the list screen: one numbered line per entry
pub fn render(items: &[ItemConfig]) -> String {
    let mut out = String::from("== List ==\n");
    for (index, item) in items.iter().enumerate() {
        out.push_str(&format!("{:>3}  {}\n", index, item.lang));
    }
    out
}
