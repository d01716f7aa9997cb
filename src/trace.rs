//! Conditional tracing events (zero-cost when the feature is disabled).
//!
//! When the `tracing` feature is enabled, `trace_event!` emits a
//! `tracing::debug!` event; when disabled it compiles to nothing.

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::debug!(name: $name, $($key = $value),+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        // Evaluate expressions to silence unused warnings, but discard results
        let _ = ($($value,)+);
    };
}

pub(crate) use trace_event;
