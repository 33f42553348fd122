//! Trace text helpers

/// Inserted between the existing trace and newly appended text
pub const TRACE_SEPARATOR: &str = " \r\n ";

/// Extend `existing` with `addition`.
///
/// The separator is always inserted, even when `existing` is empty.
pub fn append_trace(existing: &str, addition: &str) -> String {
    let mut trace = String::with_capacity(existing.len() + TRACE_SEPARATOR.len() + addition.len());
    trace.push_str(existing);
    trace.push_str(TRACE_SEPARATOR);
    trace.push_str(addition);
    trace
}
