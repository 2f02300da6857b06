//! Severity and tag filtering through the public logger API.

mod common;

use common::{RecordingPlatform, TAGS};
use rtlog::{
    log_at, loge, logi, logv, logw, ErrorCategory, LevelFilter, LogConfig, Logger, Severity, WILDCARD_TAG,
};

type TestLogger = Logger<RecordingPlatform>;

fn logger(config: LogConfig) -> TestLogger {
    let logger = TestLogger::new(RecordingPlatform::new(), config);
    assert!(logger.init());
    logger
}

#[test]
fn test_full_registry_with_wildcard() {
    let logger = logger(LogConfig::minimal());
    for &tag in &TAGS[..16] {
        logger.set_level(tag, LevelFilter::Verbose).unwrap();
    }
    logger.set_level(WILDCARD_TAG, LevelFilter::Error).unwrap();

    assert_eq!(logi!(logger, TAGS[5], "info\n"), 0);
    assert!(loge!(logger, TAGS[5], "error\n") > 0);

    let err = logger.set_level(TAGS[16], LevelFilter::Verbose).unwrap_err();
    assert_eq!(err.category, ErrorCategory::Capacity);
    assert_eq!(loge!(logger, TAGS[16], "never\n"), 0);
    assert_eq!(logger.level_of(TAGS[16]), None);

    assert_eq!(logger.platform().output(), "[ ERROR ] error\n");
    assert_eq!(logger.statistics().messages_filtered, 2);
    assert_eq!(logger.statistics().registered_tags, 16);
}

#[test]
fn test_unknown_tag_registered_at_default_level() {
    let logger = logger(LogConfig::minimal().with_default_level(LevelFilter::Warning));

    assert_eq!(logi!(logger, "net", "dropped\n"), 0);
    assert_eq!(logger.level_of("net"), Some(LevelFilter::Warning));
    assert!(logw!(logger, "net", "kept\n") > 0);

    logger.set_level("net", LevelFilter::Verbose).unwrap();
    assert!(logv!(logger, "net", "now kept\n") > 0);
    assert_eq!(logger.platform().output(), "[WARNING] kept\n[VERBOSE] now kept\n");
}

#[test]
fn test_empty_tag_never_registered() {
    let logger = logger(LogConfig::minimal());

    assert_eq!(
        logger.set_level("", LevelFilter::Verbose).unwrap_err().category,
        ErrorCategory::Configuration
    );
    assert!(!logger.is_printable(Some(""), Severity::Error));
    assert_eq!(loge!(logger, "", "nameless\n"), 0);
    assert_eq!(logger.level_of(""), None);
    assert_eq!(logger.statistics().registered_tags, 0);
    assert!(logger.platform().output().is_empty());
}

#[test]
fn test_filtered_message_takes_the_lock_once() {
    let logger = logger(LogConfig::minimal());
    logger.set_level("net", LevelFilter::Error).unwrap();
    let locks = logger.platform().locks();
    let prints = logger.platform().prints();

    assert_eq!(logi!(logger, "net", "filtered\n"), 0);
    assert_eq!(logger.platform().locks() - locks, 1);
    assert_eq!(logger.platform().prints(), prints);
    assert!(!logger.platform().is_locked());
}

#[test]
fn test_untagged_messages_skip_the_registry() {
    let logger = logger(LogConfig::minimal().with_default_level(LevelFilter::Off));
    logger.set_level(WILDCARD_TAG, LevelFilter::Off).unwrap();

    assert!(logv!(logger, None, "always\n") > 0);
    assert_eq!(logger.statistics().registered_tags, 0);
    assert!(logger.is_printable(None, Severity::Verbose));
}

#[test]
fn test_off_threshold_rejects_errors() {
    let logger = logger(LogConfig::minimal());
    logger.set_level("quiet", LevelFilter::Off).unwrap();

    assert_eq!(loge!(logger, "quiet", "nothing\n"), 0);
    assert!(!logger.is_printable(Some("quiet"), Severity::Error));
    assert!(logger.platform().output().is_empty());
}

#[test]
fn test_wildcard_leaves_default_and_later_tags_alone() {
    let logger = logger(LogConfig::minimal().with_default_level(LevelFilter::Info));
    logger.set_level("early", LevelFilter::Verbose).unwrap();
    logger.set_level(WILDCARD_TAG, LevelFilter::Error).unwrap();

    assert_eq!(logger.level_of("early"), Some(LevelFilter::Error));
    assert!(logger.is_printable(Some("late"), Severity::Info));
    assert_eq!(logger.level_of("late"), Some(LevelFilter::Info));
    assert_eq!(logger.level_of(WILDCARD_TAG), None);
}

#[test]
fn test_tag_names_in_prefix() {
    let logger = logger(LogConfig::minimal().with_tag_names(true));
    logw!(logger, "disk", "{} sectors remapped\n", 3);
    loge!(logger, None, "untagged\n");
    assert_eq!(logger.platform().output(), "[WARNING][disk] 3 sectors remapped\n[ ERROR ] untagged\n");
}

#[test]
fn test_runtime_severity() {
    let logger = logger(LogConfig::minimal());
    logger.set_level("rt", LevelFilter::Debug).unwrap();

    for level in Severity::ALL {
        log_at!(logger, level, "rt", "{}\n", level);
    }
    assert_eq!(
        logger.platform().output(),
        "[ ERROR ] error\n[WARNING] warning\n[ INFO  ] info\n[ DEBUG ] debug\n"
    );
}
