use super::*;
use log::{Level, Metadata, Record};
use serial_test::serial;

#[test]
fn parse_level_accepts_names_in_any_case() {
    let cases: &[(Option<&str>, Level)] = &[
        (None, Level::Warn),
        (Some("debug"), Level::Debug),
        (Some("DEBUG"), Level::Debug),
        (Some("info"), Level::Info),
        (Some(" info "), Level::Info),
        (Some("warn"), Level::Warn),
        (Some("error"), Level::Error),
        (Some("Trace"), Level::Trace),
        (Some("garbage"), Level::Warn),
        (Some(""), Level::Warn),
        (Some("off"), Level::Warn),
    ];

    for (value, expected) in cases {
        let lvl = parse_level(*value);
        assert_eq!(
            lvl, *expected,
            "value {:?} should yield level {:?}, got {:?}",
            value, expected, lvl
        );
    }
}

#[test]
#[serial]
fn level_from_env_reads_program_variable() {
    unsafe { std::env::set_var(PROGRAM_LOG_LEVEL, "info") };
    assert_eq!(level_from_env(), Level::Info);

    unsafe { std::env::remove_var(PROGRAM_LOG_LEVEL) };
    assert_eq!(level_from_env(), Level::Warn);
}

#[test]
fn enabled_respects_level_threshold() {
    let levels = [
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ];

    for logger_level in levels {
        let logger = StderrLogger::new(logger_level);

        for record_level in levels {
            let meta = Metadata::builder()
                .level(record_level)
                .target("dirlist")
                .build();

            assert_eq!(
                logger.enabled(&meta),
                record_level <= logger_level,
                "logger level {:?}, record level {:?}",
                logger_level,
                record_level
            );
        }
    }
}

#[test]
fn render_includes_level_target_and_message() {
    let logger = StderrLogger::new(Level::Trace);
    let line = logger.render(
        &Record::builder()
            .level(Level::Info)
            .target("dirlist_fs::dir")
            .args(format_args!("opened {}", "src"))
            .build(),
    );
    assert!(line.ends_with("INFO [dirlist_fs::dir] opened src"), "{line}");
}

#[test]
fn log_below_threshold_is_silent_and_does_not_panic() {
    let logger = StderrLogger::new(Level::Error);
    logger.log(
        &Record::builder()
            .level(Level::Debug)
            .target("t")
            .args(format_args!("hidden"))
            .build(),
    );
    logger.flush();
}
