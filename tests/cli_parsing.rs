//! Tests for CLI subcommand parsing.

use clap::Parser;
use dl_headers::config::{Command, LogFormat, LogLevel, Opt};

#[test]
fn test_cli_defaults() {
    let opt = Opt::try_parse_from(["dl_headers", "no-store"]).expect("Should parse no-store");
    assert_eq!(opt.log_level, LogLevel::Warn);
    assert_eq!(opt.log_format, LogFormat::Plain);
    assert!(matches!(opt.command, Command::NoStore));
    assert_eq!(
        log::LevelFilter::from(opt.log_level),
        log::LevelFilter::Warn
    );
}

#[test]
fn test_cli_lookup_requires_name() {
    assert!(Opt::try_parse_from(["dl_headers", "lookup"]).is_err());

    let opt = Opt::try_parse_from(["dl_headers", "lookup", "content-type"])
        .expect("Should parse lookup");
    match opt.command {
        Command::Lookup { name } => assert_eq!(name, "content-type"),
        other => panic!("Unexpected command: {:?}", other),
    }
}

#[test]
fn test_cli_list_json_flag() {
    let opt = Opt::try_parse_from(["dl_headers", "list", "--json"]).expect("Should parse list");
    assert!(matches!(opt.command, Command::List { json: true }));
}

#[test]
fn test_cli_cache_control_flags() {
    let opt = Opt::try_parse_from([
        "dl_headers",
        "cache-control",
        "--no-cache",
        "--no-store",
        "--max-age",
        "60",
        "--min-fresh",
        "5",
        "--only-if-cached",
        "--no-transform",
        "--immutable",
    ])
    .expect("Should parse cache-control");

    match opt.command {
        Command::CacheControl(args) => {
            assert!(args.no_cache);
            assert!(args.no_store);
            assert_eq!(args.max_age, Some(60));
            assert_eq!(args.max_stale, None);
            assert_eq!(args.min_fresh, Some(5));
            assert!(args.only_if_cached);
            assert!(args.no_transform);
            assert!(args.immutable);
        }
        other => panic!("Unexpected command: {:?}", other),
    }
}

#[test]
fn test_cli_rejects_negative_seconds() {
    let result = Opt::try_parse_from(["dl_headers", "cache-control", "--max-age", "-1"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_rejects_unknown_log_level() {
    let result = Opt::try_parse_from(["dl_headers", "--log-level", "verbose", "no-store"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_parse_takes_raw_value() {
    let opt = Opt::try_parse_from(["dl_headers", "parse", "max-age=60, no-store"])
        .expect("Should parse parse");
    match opt.command {
        Command::Parse { value } => assert_eq!(value, "max-age=60, no-store"),
        other => panic!("Unexpected command: {:?}", other),
    }
}

#[test]
fn test_cli_requires_subcommand() {
    assert!(Opt::try_parse_from(["dl_headers"]).is_err());
}
