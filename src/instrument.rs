//! Higher-order helpers that wrap an operation with call tracing and
//! wall-clock timing. The wrappers never touch the operation's inputs or
//! result; they only emit log lines around the call.

use std::time::Instant;
use tracing::info;

/// Wrap `op` so that each call logs an info line before and after execution.
///
/// The wrapped operation's return value comes back unchanged, `Err` values
/// included.
pub fn with_logging<T, F>(name: &'static str, op: F) -> impl FnOnce() -> T
where
    F: FnOnce() -> T,
{
    move || {
        info!("Calling {}", name);
        let value = op();
        info!("Finished {}", name);
        value
    }
}

/// Wrap `op` so that each call logs its elapsed wall-clock time in seconds.
///
/// Timing uses [`Instant`], so the measurement is monotonic. Nest this inside
/// [`with_logging`] to get the timing line between the call-tracing lines.
pub fn benchmark<T, F>(name: &'static str, op: F) -> impl FnOnce() -> T
where
    F: FnOnce() -> T,
{
    move || {
        let start = Instant::now();
        let value = op();
        let run_time = start.elapsed().as_secs_f64();
        info!("Execution of {} took {} seconds.", name, run_time);
        value
    }
}
