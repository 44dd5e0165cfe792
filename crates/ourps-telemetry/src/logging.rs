//! Round-scoped log helpers.

/// Log a line tagged with the round it belongs to.
///
/// # Example
///
/// ```rust,ignore
/// use ourps_telemetry::log_round_event;
///
/// log_round_event!(info, 7, "Keeper settled round", outcome = %outcome);
/// ```
#[macro_export]
macro_rules! log_round_event {
    ($level:ident, $round:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            subsystem = "ourps",
            round = $round,
            $($($field)*,)?
            $msg
        )
    };
}
