pub mod builders;

use std::sync::Once;

use chrono::{NaiveDate, NaiveDateTime};
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=plandag=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Shorthand for a local calendar instant.
///
/// Panics on an invalid date; test inputs are literals.
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .unwrap_or_else(|| panic!("invalid test instant {year}-{month}-{day} {hour}:{minute}"))
}

/// Monday 2026-10-19, 09:00. Anchor for most tests.
pub fn monday_morning() -> NaiveDateTime {
    at(2026, 10, 19, 9, 0)
}
