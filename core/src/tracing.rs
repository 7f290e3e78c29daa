//! Tracing utilities for sort directive resolution.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level event for a parsed directive.
///
/// ```ignore
/// sort_trace_directive!(directive.field(), directive.order());
/// ```
#[macro_export]
macro_rules! sort_trace_directive {
    ($field:expr, $order:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(field = %$field, order = %$order, "drizzle.sort.directive");
    };
}

/// Emit a trace-level event for a join that was added or skipped.
///
/// ```ignore
/// sort_trace_join!("comments", "added");
/// sort_trace_join!("comments", "duplicate");
/// ```
#[macro_export]
macro_rules! sort_trace_join {
    ($table:expr, $outcome:literal) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(table = %$table, outcome = $outcome, "drizzle.sort.join");
    };
}

/// Emit a debug-level event when a model hook takes over a field.
#[macro_export]
macro_rules! sort_trace_hook {
    ($field:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(field = %$field, "drizzle.sort.hook");
    };
}

/// Emit a warn-level event for a directive skipped under the legacy policy.
#[macro_export]
macro_rules! sort_trace_skipped {
    ($field:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!(field = %$field, "drizzle.sort.unsupported_pattern_ignored");
    };
}
