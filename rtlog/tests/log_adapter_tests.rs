//! The `log` facade routed through a logger.

#![cfg(feature = "log")]

mod common;

use common::RecordingPlatform;
use rtlog::{set_global_logger, ErrorCategory, LevelFilter, LogConfig, Logger};

static LOGGER: Logger<RecordingPlatform> =
    Logger::new(RecordingPlatform::new(), LogConfig::minimal().with_tag_names(true));

const MODULE: &str = module_path!();

#[test]
fn test_log_macros_use_module_path_as_tag() {
    set_global_logger(&LOGGER).unwrap();
    let err = set_global_logger(&LOGGER).unwrap_err();
    assert_eq!(err.category, ErrorCategory::InvalidState);

    log::info!("buffered {}", 1);
    assert!(LOGGER.platform().output().is_empty());
    assert!(LOGGER.init());
    assert_eq!(LOGGER.platform().take_output(), format!("[ INFO  ][{MODULE}] buffered 1\n"));

    LOGGER.set_level(MODULE, LevelFilter::Warning).unwrap();
    assert!(!log::log_enabled!(log::Level::Info));
    assert!(log::log_enabled!(log::Level::Warn));
    log::info!("filtered");
    log::warn!("kept");
    log::logger().flush();
    assert_eq!(LOGGER.platform().take_output(), format!("[WARNING][{MODULE}] kept\n"));

    // An explicit target is held to its own threshold.
    LOGGER.set_level("net", LevelFilter::Off).unwrap();
    assert!(!log::log_enabled!(target: "net", log::Level::Error));
    log::error!(target: "net", "silenced");
    assert!(LOGGER.platform().take_output().is_empty());

    LOGGER.set_level("net", LevelFilter::Error).unwrap();
    log::error!(target: "net", "link down");
    log::warn!(target: "net", "still filtered");
    assert_eq!(LOGGER.platform().take_output(), format!("[ ERROR ][{MODULE}] link down\n"));
}
