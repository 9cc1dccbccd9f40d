// File: src/ui/detail.rs
// Purpose: Detail screen destination, its typed arguments and rendering

use anyhow::{Context, Result};
use navbuilder::{nav, nav_args, Nav, NavType, NavValue};

use crate::navigator::{BackStackEntry, Navigator};

const ROUTE: &str = "detail";
const ARG_LANG: &str = "lang";
const ARG_JA: &str = "ja";
const ARG_OPTION1: &str = "option1";
const ARG_OPTION2: &str = "option2";

/// `detail/{lang}/{ja}?option1={option1}&option2={option2}`
pub fn detail_nav() -> navbuilder::Result<Nav> {
    nav(ROUTE, |b| {
        b.arg(ARG_LANG, |a| a.nav_type(NavType::String))?
            .arg(ARG_JA, |a| a.nav_type(NavType::String))?
            .optional_arg(ARG_OPTION1, |a| a.nav_type(NavType::String).nullable(true))?
            .optional_arg(ARG_OPTION2, |a| a.nav_type(NavType::Int).default_value(0))
    })
}

/// Opens the detail screen for one entry.
///
/// With `with_options` the optional arguments are passed explicitly,
/// otherwise the screen falls back to their declared defaults.
pub fn navigate_to_detail<'n>(
    navigator: &'n mut Navigator,
    detail: &Nav,
    lang: &str,
    ja: &str,
    with_options: bool,
) -> Result<&'n BackStackEntry> {
    let bindings = if with_options {
        nav_args![ARG_LANG => lang, ARG_JA => ja, ARG_OPTION1 => "abc", ARG_OPTION2 => 999]
    } else {
        nav_args![ARG_LANG => lang, ARG_JA => ja]
    };
    navigator.navigate(detail, bindings)
}

/// Arguments the detail screen reads from its back stack entry
#[derive(Debug, Clone, PartialEq)]
pub struct DetailArgs {
    pub lang: String,
    pub ja: String,
    pub option1: Option<String>,
    pub option2: i32,
}

impl DetailArgs {
    pub fn from_entry(entry: &BackStackEntry) -> Result<Self> {
        let string = |name: &str| -> Result<String> {
            entry
                .argument(name)
                .and_then(NavValue::as_str)
                .map(str::to_string)
                .with_context(|| format!("Missing string argument '{}'", name))
        };

        let option2 = entry
            .argument(ARG_OPTION2)
            .and_then(NavValue::as_i64)
            .with_context(|| format!("Missing integer argument '{}'", ARG_OPTION2))?;

        Ok(Self {
            lang: string(ARG_LANG)?,
            ja: string(ARG_JA)?,
            option1: entry
                .argument(ARG_OPTION1)
                .and_then(NavValue::as_str)
                .map(str::to_string),
            option2: i32::try_from(option2)
                .with_context(|| format!("'{}' out of range: {}", ARG_OPTION2, option2))?,
        })
    }
}

/// Renders the detail screen
pub fn render(args: &DetailArgs) -> String {
    let option1 = args.option1.as_deref().unwrap_or("null");
    format!(
        "== Detail ==\n{} ({})\nOption1: {}\nOption2: {}\n",
        args.lang, args.ja, option1, args.option2
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::list::list_nav;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn open(with_options: bool) -> (String, DetailArgs) {
        let detail = detail_nav().unwrap();
        let mut navigator = Navigator::new(&list_nav().unwrap()).unwrap();
        let entry = navigate_to_detail(&mut navigator, &detail, "Rust", "らすと", with_options).unwrap();
        (entry.route.clone(), DetailArgs::from_entry(entry).unwrap())
    }

    #[test]
    fn test_detail_route_template() {
        assert_eq!(
            detail_nav().unwrap().route(),
            "detail/{lang}/{ja}?option1={option1}&option2={option2}"
        );
    }

    #[rstest]
    #[case::defaults(false, "detail/Rust/%E3%82%89%E3%81%99%E3%81%A8", None, 0)]
    #[case::with_options(
        true,
        "detail/Rust/%E3%82%89%E3%81%99%E3%81%A8?option1=abc&option2=999",
        Some("abc"),
        999
    )]
    fn test_navigate_to_detail(
        #[case] with_options: bool,
        #[case] expected_route: &str,
        #[case] option1: Option<&str>,
        #[case] option2: i32,
    ) {
        let (route, args) = open(with_options);
        assert_eq!(route, expected_route);
        assert_eq!(
            args,
            DetailArgs {
                lang: "Rust".to_string(),
                ja: "らすと".to_string(),
                option1: option1.map(str::to_string),
                option2,
            }
        );
    }

    #[test]
    fn test_render() {
        let (_, args) = open(false);
        assert_eq!(render(&args), "== Detail ==\nRust (らすと)\nOption1: null\nOption2: 0\n");
    }
}
