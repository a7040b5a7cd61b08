use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn defaults() {
    let options = parse_cli_options(&[]).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(options, CliOptions::default());
    assert_eq!(options.error_limit, 10);
    assert_eq!(options.color, ColorMode::Auto);
}

#[test]
fn color_and_limit() {
    let options = parse_cli_options(&args(&["--color=never", "--error-limit=0"]))
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(options.color, ColorMode::Never);
    assert_eq!(options.diagnostic_config().error_limit, 0);
    assert!(options.diagnostic_config().deduplicate);
}

#[test]
fn rejects_bad_values() {
    assert!(parse_cli_options(&args(&["--color=rainbow"])).is_err());
    assert!(parse_cli_options(&args(&["--error-limit=many"])).is_err());
    assert_eq!(
        parse_cli_options(&args(&["--verbose"])),
        Err("unknown option '--verbose'".to_string())
    );
}
