use std::path::PathBuf;

use clap::Parser;
use dropdown::config::LogLevel;
use dropdown::Config;
use log::LevelFilter;

#[test]
fn test_defaults() {
    let config = Config::try_parse_from(["sample-select"]).unwrap();

    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.log_file, None);
    assert!(!config.reduced_motion);
}

#[test]
fn test_all_flags() {
    let config = Config::try_parse_from([
        "sample-select",
        "--log-level",
        "trace",
        "--log-file",
        "/tmp/select.log",
        "--reduced-motion",
    ])
    .unwrap();

    assert_eq!(LevelFilter::from(config.log_level), LevelFilter::Trace);
    assert_eq!(config.log_file, Some(PathBuf::from("/tmp/select.log")));
    assert!(config.reduced_motion);
}

#[test]
fn test_unknown_level_rejected() {
    assert!(Config::try_parse_from(["sample-select", "--log-level", "loud"]).is_err());
}
