//! Command line tests
//!
//! Drive each tool through the parsed command line and check output files and exit codes.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

pub mod fetch_tests;

static INIT: Once = Once::new();

/// Initializes the global logger (only once).
pub fn init_logger() {
    INIT.call_once(|| {
        let filter = EnvFilter::from_default_env()
            .add_directive("gas_reports=info".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}
