use crate::config::GLOBAL_CONFIG;

/// Route `log` output through the test harness's captured output.
///
/// Safe to call from every test; only the first call installs the logger.
pub fn init_test_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(GLOBAL_CONFIG.get_log_level())
        .try_init();
}
