//! Shared helper utilities for factory methods.

/// Counter for generating unique IDs in tests.
///
/// Starts high enough that generated governor IDs look like real five-digit ones.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(10_000);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}
