// Mon Jan 19 2026 - Alex

use log::LevelFilter;

pub struct LoggingUtils;

impl LoggingUtils {
    /// Install an `env_logger` at the given level. Later calls are ignored.
    pub fn init_logger(level: LevelFilter) {
        let _ = env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .try_init();
    }

    /// Logger for unit tests; output is captured by the test harness.
    pub fn init_test_logger() {
        let _ = env_logger::Builder::new()
            .filter_level(LevelFilter::Trace)
            .format_timestamp(None)
            .is_test(true)
            .try_init();
    }
}
