use bib_relink::config::LogLevel;

#[test]
fn parses_known_names_case_insensitively() {
    assert_eq!(LogLevel::parse("quiet"), Some(LogLevel::Quiet));
    assert_eq!(LogLevel::parse("ERROR"), Some(LogLevel::Quiet));
    assert_eq!(LogLevel::parse("Normal"), Some(LogLevel::Normal));
    assert_eq!(LogLevel::parse("verbose"), Some(LogLevel::Info));
    assert_eq!(LogLevel::parse("trace"), Some(LogLevel::Debug));
    assert_eq!(LogLevel::parse("nonsense"), None);
}

#[test]
fn display_round_trips_through_parse() {
    for level in [
        LogLevel::Quiet,
        LogLevel::Normal,
        LogLevel::Info,
        LogLevel::Debug,
    ] {
        assert_eq!(LogLevel::parse(&level.to_string()), Some(level));
    }
}

#[test]
fn from_str_reports_the_bad_input() {
    let err = "bogus".parse::<LogLevel>().unwrap_err();
    assert!(err.contains("bogus"));
}
