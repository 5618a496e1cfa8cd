// tests/cli_opts.rs
//
// Flag parsing and mode validation, offline via try_parse_from.
//
use std::path::PathBuf;

use clap::Parser;

use id_pools::cli::Args;
use id_pools::config::options::{EnumKind, OutputFormat};

#[test]
fn defaults_select_all_four_kinds() {
    let args = Args::try_parse_from(["id_pools"]).unwrap();
    assert_eq!(args.selected_kinds(), EnumKind::ALL.to_vec());
    assert_eq!(args.format, OutputFormat::Json);
    assert_eq!(args.out_dir, PathBuf::from("output"));
    assert_eq!(args.bundle_out, PathBuf::from("itemmap.js"));
    assert!(!args.stdout && !args.no_bundle && !args.split);
    assert!(args.validate().is_ok());
}

#[test]
fn kinds_accept_repeats_and_comma_lists() {
    let args = Args::try_parse_from(["id_pools", "-k", "trinkets", "-k", "cards"]).unwrap();
    assert_eq!(args.selected_kinds(), vec![EnumKind::Trinkets, EnumKind::Cards]);

    let args = Args::try_parse_from(["id_pools", "--kind", "pills,collectibles"]).unwrap();
    assert_eq!(
        args.selected_kinds(),
        vec![EnumKind::Pills, EnumKind::Collectibles]
    );
}

#[test]
fn stdout_with_default_selection_is_a_usage_error() {
    // No explicit kind means all four, which stdout mode rejects.
    let args = Args::try_parse_from(["id_pools", "--stdout"]).unwrap();
    assert!(args.validate().is_err());
}

#[test]
fn stdout_with_two_kinds_is_a_usage_error() {
    let args =
        Args::try_parse_from(["id_pools", "--stdout", "--kind", "pills,cards"]).unwrap();
    assert!(args.validate().is_err());
}

#[test]
fn stdout_with_one_kind_passes() {
    let args = Args::try_parse_from(["id_pools", "--stdout", "--kind", "pills"]).unwrap();
    assert!(args.validate().is_ok());

    let params = args.into_params();
    assert!(params.stdout);
    assert_eq!(params.kinds, vec![EnumKind::Pills]);
}

#[test]
fn stdout_conflicts_with_split() {
    assert!(Args::try_parse_from(["id_pools", "--stdout", "--split"]).is_err());
}

#[test]
fn var_override_and_js_format_parse() {
    let args = Args::try_parse_from([
        "id_pools", "--kind", "trinkets", "--format", "js", "--var", "MY_POOL",
    ])
    .unwrap();
    assert_eq!(args.format, OutputFormat::Js);
    assert_eq!(args.var_name.as_deref(), Some("MY_POOL"));
}

#[test]
fn unknown_kind_is_rejected() {
    assert!(Args::try_parse_from(["id_pools", "--kind", "runes"]).is_err());
}
