//! Loading route tables from TOML files.

use view_router::config::{load_config, ConfigError, LogFormat, RouterConfig, ValidationError};
use view_router::routing::{Resolution, RouteTable, TableError, View};

mod common;

#[test]
fn test_shipped_config_matches_builtin_table() {
    let config = load_config(&common::shipped_config_path()).unwrap();
    assert_eq!(config.routes, RouterConfig::default().routes);

    let table = RouteTable::from_config(&config.routes).unwrap();
    assert_eq!(table.routes(), RouteTable::default().routes());
}

#[test]
fn test_empty_file_yields_builtin_table() {
    let file = common::write_config("");
    let config = load_config(file.path()).unwrap();

    let table = RouteTable::from_config(&config.routes).unwrap();
    assert_eq!(table.resolve("/"), Resolution::Redirect { to: "/sm3".into() });
    assert_eq!(config.observability.log_format, LogFormat::Pretty);
}

#[test]
fn test_custom_table() {
    let file = common::write_config(
        r#"
        [[routes]]
        path = "/"
        redirect = "/sm2"

        [[routes]]
        path = "/sm2"
        view = "SM2"

        [observability]
        log_format = "compact"
        "#,
    );
    let config = load_config(file.path()).unwrap();
    let table = RouteTable::from_config(&config.routes).unwrap();

    assert_eq!(table.resolve("/").redirect_target(), Some("/sm2"));
    assert_eq!(table.resolve("/sm2").view(), Some(View::Sm2));
    assert_eq!(table.resolve("/sm3"), Resolution::NoMatch);
    assert_eq!(config.observability.log_format, LogFormat::Compact);
}

#[test]
fn test_invalid_table_rejected_with_all_errors() {
    let file = common::write_config(
        r#"
        [[routes]]
        path = "/"
        view = "SM3"

        [[routes]]
        path = "/sm2"
        name = "dup"
        view = "SM2"

        [[routes]]
        path = "/sm4"
        name = "dup"
        redirect = "/sm2"
        "#,
    );

    let err = load_config(file.path()).unwrap_err();
    let ConfigError::Validation(errors) = &err else {
        panic!("expected validation error, got {err}");
    };

    assert_eq!(
        *errors,
        vec![
            ValidationError::Route(TableError::RootNotRedirect),
            ValidationError::Route(TableError::DuplicateName("dup".into())),
            ValidationError::Route(TableError::UnexpectedRedirect("/sm4".into())),
        ]
    );
}

#[test]
fn test_unknown_view_is_parse_error() {
    let file = common::write_config("[[routes]]\npath = \"/sm5\"\nview = \"SM5\"\n");
    assert!(matches!(load_config(file.path()), Err(ConfigError::Parse(_))));
}
