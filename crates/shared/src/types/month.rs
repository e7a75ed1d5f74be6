//! Short English month names.

/// Three-letter month abbreviations, indexed from 0 (January).
pub const SHORT_MONTH: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Looks up the abbreviation for a zero-based month index.
///
/// Returns `None` for indexes outside `0..12`.
#[must_use]
pub fn short_month(index: usize) -> Option<&'static str> {
    SHORT_MONTH.get(index).copied()
}
