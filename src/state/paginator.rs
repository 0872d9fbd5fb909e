//! Fixed-size batch reveal over the active result set.

/// Number of flights revealed per "load more".
pub const DEFAULT_BATCH_SIZE: usize = 3;

/// Result of one pagination step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch<'a, T> {
    /// Records newly revealed by this step.
    pub revealed: &'a [T],
    /// Cursor after this step.
    pub new_cursor: usize,
    /// No records remain past `new_cursor`.
    pub exhausted: bool,
}

/// Reveal up to `batch_size` records starting at `cursor`.
///
/// A cursor at or past the end is a no-op: nothing revealed, cursor unchanged,
/// `exhausted` true. This makes repeated calls after exhaustion harmless.
pub fn load_batch<T>(records: &[T], cursor: usize, batch_size: usize) -> Batch<'_, T> {
    let len = records.len();
    if cursor >= len {
        return Batch {
            revealed: &[],
            new_cursor: cursor,
            exhausted: true,
        };
    }

    let end = cursor.saturating_add(batch_size).min(len);
    Batch {
        revealed: &records[cursor..end],
        new_cursor: end,
        exhausted: end >= len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_batch_reveals_three() {
        let records = [1, 2, 3, 4, 5];
        let batch = load_batch(&records, 0, DEFAULT_BATCH_SIZE);
        assert_eq!(batch.revealed, &[1, 2, 3]);
        assert_eq!(batch.new_cursor, 3);
        assert!(!batch.exhausted);
    }

    #[test]
    fn last_batch_is_clipped_and_exhausted() {
        let records = [1, 2, 3, 4, 5];
        let batch = load_batch(&records, 3, DEFAULT_BATCH_SIZE);
        assert_eq!(batch.revealed, &[4, 5]);
        assert_eq!(batch.new_cursor, 5);
        assert!(batch.exhausted);
    }

    #[test]
    fn exact_multiple_exhausts_on_final_batch() {
        let records = [1, 2, 3];
        let batch = load_batch(&records, 0, 3);
        assert_eq!(batch.revealed.len(), 3);
        assert!(batch.exhausted);
    }

    #[test]
    fn empty_records_are_immediately_exhausted() {
        let records: [u8; 0] = [];
        let batch = load_batch(&records, 0, 3);
        assert!(batch.revealed.is_empty());
        assert_eq!(batch.new_cursor, 0);
        assert!(batch.exhausted);
    }

    #[test]
    fn call_after_exhaustion_is_noop() {
        let records = [1, 2];
        let first = load_batch(&records, 0, 3);
        assert!(first.exhausted);

        let again = load_batch(&records, first.new_cursor, 3);
        assert!(again.revealed.is_empty());
        assert_eq!(again.new_cursor, first.new_cursor);
        assert!(again.exhausted);
    }

    #[test]
    fn cursor_past_end_is_left_alone() {
        let records = [1, 2];
        let batch = load_batch(&records, 7, 3);
        assert!(batch.revealed.is_empty());
        assert_eq!(batch.new_cursor, 7);
        assert!(batch.exhausted);
    }

    #[test]
    fn zero_batch_size_reveals_nothing() {
        let records = [1, 2];
        let batch = load_batch(&records, 0, 0);
        assert!(batch.revealed.is_empty());
        assert_eq!(batch.new_cursor, 0);
        assert!(!batch.exhausted);
    }

    #[test]
    fn huge_batch_size_does_not_overflow() {
        let records = [1, 2];
        let batch = load_batch(&records, 1, usize::MAX);
        assert_eq!(batch.revealed, &[2]);
        assert!(batch.exhausted);
    }
}
