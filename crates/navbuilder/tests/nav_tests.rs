//! Integration tests for navbuilder
//!
//! Organized by feature area:
//! - Route templates
//! - Argument bindings
//! - Declaration errors
//! - Route filling and its validation order

use navbuilder::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// `test` destination: arg1:int required, arg2:string? and arg3:int=999 optional
fn simple_nav() -> Nav {
    nav("test", |b| {
        b.arg("arg1", |a| a.nav_type(NavType::Int))?
            .optional_arg("arg2", |a| a.nav_type(NavType::String).nullable(true))?
            .optional_arg("arg3", |a| a.nav_type(NavType::Int).default_value(999))
    })
    .unwrap()
}

/// Two required arguments and one nullable optional one
fn two_required_nav() -> Nav {
    nav("test", |b| {
        b.arg("arg1", |a| a)?
            .arg("arg2", |a| a)?
            .optional_arg("arg3", |a| a.nullable(true))
    })
    .unwrap()
}

// ============================================================================
// Route templates
// ============================================================================

#[test]
fn test_no_args() {
    let nav = nav("test", Ok).unwrap();
    assert_eq!(nav.route(), "test");
    assert!(nav.argument_bindings().is_empty());
    assert_eq!(nav.build_route(nav_args![]).unwrap(), "test");
}

#[test]
fn test_simple_args_route() {
    assert_eq!(simple_nav().route(), "test/{arg1}?arg2={arg2}&arg3={arg3}");
}

#[rstest]
#[case::required_only(&["a", "b"], &[], "name/{a}/{b}")]
#[case::optional_only(&[], &["c"], "name?c={c}")]
#[case::both(&["a", "b"], &["c", "d"], "name/{a}/{b}?c={c}&d={d}")]
fn test_route_template_shape(
    #[case] required: &[&str],
    #[case] optional: &[&str],
    #[case] expected: &str,
) {
    let mut builder = Nav::builder("name");
    for name in required {
        builder = builder.arg(*name, |a| a).unwrap();
    }
    for name in optional {
        builder = builder.optional_arg(*name, |a| a.nullable(true)).unwrap();
    }
    assert_eq!(builder.build().route(), expected);
}

#[test]
fn test_interleaved_declaration_puts_required_first() {
    let nav = nav("mix", |b| {
        b.optional_arg("q", |a| a.nullable(true))?
            .arg("id", |a| a.nav_type(NavType::Long))
    })
    .unwrap();
    assert_eq!(nav.route(), "mix/{id}?q={q}");
}

// ============================================================================
// Argument bindings
// ============================================================================

#[test]
fn test_simple_args_bindings() {
    let nav = simple_nav();
    let bindings = nav.argument_bindings();

    assert_eq!(bindings.len(), 3);
    assert_eq!(
        bindings[0],
        NamedNavArgument {
            name: "arg1".to_string(),
            nav_type: Some(NavType::Int),
            nullable: false,
            default_value: None,
        }
    );
    assert_eq!(
        bindings[1],
        NamedNavArgument {
            name: "arg2".to_string(),
            nav_type: Some(NavType::String),
            nullable: true,
            default_value: None,
        }
    );
    assert_eq!(
        bindings[2],
        NamedNavArgument {
            name: "arg3".to_string(),
            nav_type: Some(NavType::Int),
            nullable: false,
            default_value: Some(NavValue::Int(999)),
        }
    );
}

#[test]
fn test_bindings_order_is_required_then_optional() {
    let nav = nav("mix", |b| {
        b.optional_arg("o1", |a| a.nullable(true))?
            .arg("r1", |a| a)?
            .optional_arg("o2", |a| a.default_value(NavValue::Null))?
            .arg("r2", |a| a)
    })
    .unwrap();

    let names: Vec<&str> = nav.argument_bindings().iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["r1", "r2", "o1", "o2"]);
    assert_eq!(nav.argument_bindings()[3].default_value, Some(NavValue::Null));
}

#[test]
fn test_bindings_json() {
    let json = serde_json::to_string(simple_nav().argument_bindings()).unwrap();
    assert_eq!(
        json,
        r#"[{"name":"arg1","type":"integer","nullable":false},{"name":"arg2","type":"string","nullable":true},{"name":"arg3","type":"integer","nullable":false,"default_value":999}]"#
    );
}

#[test]
fn test_bindings_json_keeps_long_default() {
    let nav = nav("p", |b| {
        b.optional_arg("o", |a| a.nav_type(NavType::Long).default_value(5_i64))
    })
    .unwrap();

    let json = serde_json::to_string(nav.argument_bindings()).unwrap();
    assert_eq!(
        json,
        r#"[{"name":"o","type":"long","nullable":false,"default_value":5}]"#
    );

    let back: Vec<NamedNavArgument> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, nav.argument_bindings());
    assert_eq!(back[0].default_value, Some(NavValue::Long(5)));
}

// ============================================================================
// Declaration errors
// ============================================================================

#[test]
fn test_duplicate_argument() {
    let err = nav("test", |b| b.arg("arg", |a| a)?.arg("arg", |a| a)).unwrap_err();
    assert_eq!(err, NavError::DuplicateArgument("arg".to_string()));
    assert_eq!(
        err.to_string(),
        "Argument 'arg' has already been added to the builder."
    );
}

#[test]
fn test_duplicate_argument_with_different_declaration() {
    let err = nav("test", |b| {
        b.arg("arg", |a| a.nav_type(NavType::Int))?
            .optional_arg("arg", |a| a.nav_type(NavType::String).nullable(true))
    })
    .unwrap_err();
    assert_eq!(err, NavError::DuplicateArgument("arg".to_string()));
}

#[test]
fn test_invalid_optional_argument() {
    let err = nav("test", |b| b.optional_arg("arg", |a| a)).unwrap_err();
    assert_eq!(err, NavError::InvalidOptionalArgument("arg".to_string()));
    assert_eq!(
        err.to_string(),
        "Argument 'arg' is optional, but neither nullable nor has a default value."
    );
}

#[rstest]
#[case::nullable(|a: NavArgBuilder| a.nullable(true))]
#[case::default(|a: NavArgBuilder| a.nav_type(NavType::Int).default_value(0))]
#[case::null_default(|a: NavArgBuilder| a.default_value(NavValue::Null))]
fn test_valid_optional_argument(#[case] configure: fn(NavArgBuilder) -> NavArgBuilder) {
    assert!(Nav::builder("test").optional_arg("arg", configure).is_ok());
}

#[test]
fn test_required_argument_needs_no_fallback() {
    assert!(Nav::builder("test").arg("arg", |a| a.nav_type(NavType::Int)).is_ok());
}

// ============================================================================
// Route filling
// ============================================================================

#[test]
fn test_simple_args_build_route() {
    let nav = simple_nav();
    assert_eq!(
        nav.build_route(nav_args!["arg1" => 123, "arg2" => "abc", "arg3" => 999]).unwrap(),
        "test/123?arg2=abc&arg3=999"
    );
    assert_eq!(nav.build_route(nav_args!["arg1" => 123]).unwrap(), "test/123");
}

#[test]
fn test_required_order_follows_declaration() {
    let nav = nav("name", |b| b.arg("a", |a| a)?.arg("b", |a| a)?.optional_arg("c", |a| a.nullable(true)))
        .unwrap();

    assert_eq!(nav.build_route(nav_args!["b" => 2, "a" => 1]).unwrap(), "name/1/2");
    assert_eq!(
        nav.build_route(nav_args!["a" => 1, "b" => 2, "c" => 3]).unwrap(),
        "name/1/2?c=3"
    );
}

#[test]
fn test_query_order_follows_bindings() {
    let nav = simple_nav();
    assert_eq!(
        nav.build_route(nav_args!["arg3" => 1, "arg1" => 5, "arg2" => "x"]).unwrap(),
        "test/5?arg3=1&arg2=x"
    );
}

#[test]
fn test_build_route_is_repeatable() {
    let nav = simple_nav();
    let args = nav_args!["arg1" => 1, "arg2" => "two"];
    let first = nav.build_route(args.clone()).unwrap();
    let second = nav.build_route(args).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_values_are_percent_encoded() {
    let nav = simple_nav();
    let route = nav
        .build_route(nav_args!["arg1" => "a/b?c", "arg2" => "x&y={z} w"])
        .unwrap();
    assert_eq!(route, "test/a%2Fb%3Fc?arg2=x%26y%3D%7Bz%7D%20w");
}

#[test]
fn test_accepts_owned_keys_and_plain_values() {
    let nav = simple_nav();
    let bindings = vec![("arg1".to_string(), 42), ("arg3".to_string(), 7)];
    assert_eq!(nav.build_route(bindings).unwrap(), "test/42?arg3=7");
}

#[test]
fn test_destination_name_is_encoded_as_path() {
    let nav = nav("a b/c?", |b| b.arg("id", |a| a)).unwrap();
    assert_eq!(nav.route(), "a b/c?/{id}");
    assert_eq!(nav.build_route(nav_args!["id" => 1]).unwrap(), "a%20b/c%3F/1");
}

#[test]
fn test_accepts_f64_value() {
    let ratio: f64 = 0.5;
    let nav = nav("zoom", |b| b.arg("ratio", |a| a.nav_type(NavType::Float))).unwrap();
    assert_eq!(nav.build_route(nav_args!["ratio" => ratio]).unwrap(), "zoom/0.5");
}

#[test]
fn test_null_value_renders_as_null() {
    let nav = simple_nav();
    let route = nav
        .build_route(nav_args!["arg1" => 1, "arg2" => None::<&str>])
        .unwrap();
    assert_eq!(route, "test/1?arg2=null");
}

// ============================================================================
// Route filling errors
// ============================================================================

#[test]
fn test_unknown_argument() {
    let err = two_required_nav().build_route(nav_args!["arg" => 123]).unwrap_err();
    assert_eq!(err, NavError::UnknownArgument("arg".to_string()));
    assert_eq!(
        err.to_string(),
        "Unknown argument key: arg. \
         This key does not match any of the arguments defined in this navigation destination."
    );
}

#[test]
fn test_missing_required_argument() {
    let err = two_required_nav().build_route(nav_args!["arg1" => 123]).unwrap_err();
    assert_eq!(err, NavError::MissingRequiredArgument("arg2".to_string()));
    assert_eq!(
        err.to_string(),
        "arg2 is not provided. This argument is required for this navigation destination."
    );
}

#[test]
fn test_unknown_argument_wins_over_missing() {
    let err = two_required_nav()
        .build_route(nav_args!["arg1" => 1, "bogus" => 2])
        .unwrap_err();
    assert_eq!(err, NavError::UnknownArgument("bogus".to_string()));
}

#[test]
fn test_first_unknown_key_in_supplied_order() {
    let err = two_required_nav()
        .build_route(nav_args!["arg1" => 1, "x" => 1, "y" => 2])
        .unwrap_err();
    assert_eq!(err.argument(), "x");
}

#[test]
fn test_first_missing_in_declaration_order() {
    let err = two_required_nav()
        .build_route(nav_args!["arg3" => "only optional"])
        .unwrap_err();
    assert_eq!(err, NavError::MissingRequiredArgument("arg1".to_string()));
}

#[test]
fn test_nav_is_shareable_across_threads() {
    let nav = std::sync::Arc::new(simple_nav());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let nav = nav.clone();
            std::thread::spawn(move || nav.build_route(nav_args!["arg1" => i]).unwrap())
        })
        .collect();

    let routes: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(routes, ["test/0", "test/1", "test/2", "test/3"]);
}
