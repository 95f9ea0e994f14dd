//! Identifier allocation

use crate::domain::Record;

/// Next id for a collection: one past the largest id present, or 1 when empty.
///
/// Gaps are never filled, so ids stay unique as long as the caller passes
/// the collection exactly as it stands before the append. Returns `None`
/// once the largest id is `u64::MAX`.
pub fn next_id<T: Record>(records: &[T]) -> Option<u64> {
    match records.iter().map(Record::id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}
