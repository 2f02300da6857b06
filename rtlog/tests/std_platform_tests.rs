//! Logging through the hosted platform.

#![cfg(feature = "std")]

use rtlog::{logd, loge, LogConfig, Logger, Output, StdPlatform, TimestampFormat};

static LOGGER: Logger<StdPlatform> = Logger::new(
    StdPlatform::with_output(Output::Stderr),
    LogConfig::verbose().with_timestamp(TimestampFormat::Raw),
);

#[test]
fn test_threads_log_through_std_platform() {
    assert!(LOGGER.init());
    let before = LOGGER.statistics().bytes_flushed;

    let written = std::thread::Builder::new()
        .name("sensor".into())
        .spawn(|| logd!(LOGGER, "std-test", "reading {}\n", 42))
        .unwrap()
        .join()
        .unwrap();

    // "[1800000000]" "[ DEBUG ]" "[std-test]" "[sensor]" " " "reading 42\n"
    assert_eq!(written, 12 + 9 + 10 + 8 + 1 + 11);
    assert_eq!(LOGGER.statistics().bytes_flushed - before, written);
    assert!(loge!(LOGGER, None, "main thread\n") > 0);
}

#[test]
fn test_try_new_rejects_tiny_buffers() {
    let result = Logger::<StdPlatform, 16, 16, 4>::try_new(StdPlatform::new(), LogConfig::DEFAULT);
    assert!(result.is_err());
    assert!(Logger::<StdPlatform>::try_new(StdPlatform::new(), LogConfig::DEFAULT).is_ok());
}
