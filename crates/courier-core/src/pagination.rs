//! Incremental "load next page" pagination into a growing window.

use crate::error::{Error, Result};

/// Append the next page of `source` to `destination` and return the new offset.
///
/// Copies `source[from_offset..from_offset + count]` where
/// `count = min(page_size, source.len() - from_offset)`. An empty source
/// returns `0` without touching the destination. Calling again with the
/// returned offset continues where this call stopped; once the source is
/// exhausted the offset is returned unchanged.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`] when `from_offset` is past the end of a
/// non-empty source.
///
/// # Examples
///
/// ```
/// use courier_core::paginate;
///
/// let source = [1, 2, 3, 4, 5];
/// let mut shown: Vec<i32> = Vec::new();
/// let next = paginate(&source, &mut shown, 2, 0).unwrap();
/// assert_eq!((next, shown), (2, vec![1, 2]));
/// ```
pub fn paginate<T, D>(
    source: &[T],
    destination: &mut D,
    page_size: usize,
    from_offset: usize,
) -> Result<usize>
where
    T: Clone,
    D: Extend<T>,
{
    if source.is_empty() {
        return Ok(0);
    }

    let remaining = source
        .len()
        .checked_sub(from_offset)
        .ok_or(Error::IndexOutOfRange {
            offset: from_offset,
            len: source.len(),
        })?;

    let count = page_size.min(remaining);
    let end = from_offset + count;
    destination.extend(source[from_offset..end].iter().cloned());

    Ok(end)
}

/// Owns a source, the window shown so far, and the cursor between them.
#[derive(Debug, Clone)]
pub struct PageCursor<T> {
    source: Vec<T>,
    window: Vec<T>,
    page_size: usize,
    offset: usize,
}

impl<T: Clone> PageCursor<T> {
    /// Create a cursor with an empty window positioned at the start of `source`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for a zero page size, which could never
    /// make progress.
    pub fn new(source: Vec<T>, page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::InvalidInput(
                "page size must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            source,
            window: Vec::new(),
            page_size,
            offset: 0,
        })
    }

    /// Reveal the next page. Returns how many items were appended.
    pub fn load_next(&mut self) -> usize {
        let before = self.offset;
        // The cursor never moves past the source, so this cannot fail.
        match paginate(&self.source, &mut self.window, self.page_size, self.offset) {
            Ok(next) => self.offset = next,
            Err(error) => {
                tracing::warn!("Page cursor out of range: {error}");
                return 0;
            }
        }
        self.offset - before
    }

    /// Whether any source items are still hidden.
    pub fn has_more(&self) -> bool {
        self.offset < self.source.len()
    }

    /// Number of source items already in the window.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Items revealed so far, in source order.
    pub fn window(&self) -> &[T] {
        &self.window
    }

    /// Clear the window and rewind to the start.
    pub fn reset(&mut self) {
        self.window.clear();
        self.offset = 0;
    }

    /// Swap in a new source and start over.
    pub fn replace_source(&mut self, source: Vec<T>) {
        self.source = source;
        self.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    const SOURCE: [i32; 5] = [1, 2, 3, 4, 5];

    #[test]
    fn first_page() {
        let mut dest: Vec<i32> = Vec::new();
        assert_eq!(paginate(&SOURCE, &mut dest, 2, 0).unwrap(), 2);
        assert_eq!(dest, vec![1, 2]);
    }

    #[test]
    fn continues_from_offset() {
        let mut dest = vec![1, 2];
        assert_eq!(paginate(&SOURCE, &mut dest, 2, 2).unwrap(), 4);
        assert_eq!(dest, vec![1, 2, 3, 4]);
    }

    #[test]
    fn last_page_is_short() {
        let mut dest = vec![1, 2, 3, 4];
        assert_eq!(paginate(&SOURCE, &mut dest, 2, 4).unwrap(), 5);
        assert_eq!(dest, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn empty_source_returns_zero() {
        let source: [i32; 0] = [];
        let mut dest: Vec<i32> = Vec::new();
        assert_eq!(paginate(&source, &mut dest, 2, 0).unwrap(), 0);
        assert!(dest.is_empty());
    }

    #[test]
    fn exhausted_source_keeps_offset() {
        let mut dest = SOURCE.to_vec();
        assert_eq!(paginate(&SOURCE, &mut dest, 2, 5).unwrap(), 5);
        assert_eq!(dest.len(), 5);
    }

    #[test]
    fn offset_past_end_is_rejected() {
        let mut dest: Vec<i32> = Vec::new();
        let error = paginate(&SOURCE, &mut dest, 2, 6).unwrap_err();
        assert!(matches!(error, Error::IndexOutOfRange { offset: 6, len: 5 }));
        assert!(dest.is_empty());
    }

    #[test]
    fn zero_page_size_appends_nothing() {
        let mut dest: Vec<i32> = Vec::new();
        assert_eq!(paginate(&SOURCE, &mut dest, 0, 1).unwrap(), 1);
        assert!(dest.is_empty());
    }

    #[test]
    fn cursor_walks_whole_source() {
        let mut cursor = PageCursor::new(SOURCE.to_vec(), 2).unwrap();
        assert!(cursor.has_more());
        assert_eq!(cursor.load_next(), 2);
        assert_eq!(cursor.load_next(), 2);
        assert_eq!(cursor.load_next(), 1);
        assert!(!cursor.has_more());
        assert_eq!(cursor.load_next(), 0);
        assert_eq!(cursor.window(), &SOURCE);
        assert_eq!(cursor.offset(), 5);

        cursor.reset();
        assert_eq!(cursor.offset(), 0);
        assert!(cursor.window().is_empty());
    }

    #[test]
    fn cursor_replace_source_starts_over() {
        let mut cursor = PageCursor::new(vec!["a", "b"], 5).unwrap();
        cursor.load_next();
        cursor.replace_source(vec!["c"]);
        assert_eq!(cursor.load_next(), 1);
        assert_eq!(cursor.window(), &["c"]);
    }

    #[test]
    fn cursor_rejects_zero_page_size() {
        assert!(matches!(
            PageCursor::new(SOURCE.to_vec(), 0),
            Err(Error::InvalidInput(_))
        ));
    }

    proptest! {
        #[test]
        fn grows_by_min_of_page_and_remaining(
            len in 1usize..50,
            page_size in 0usize..20,
            offset_seed in 0usize..100,
        ) {
            let source: Vec<usize> = (0..len).collect();
            let from = offset_seed % (len + 1);
            let mut dest: Vec<usize> = Vec::new();

            let next = paginate(&source, &mut dest, page_size, from).unwrap();
            let expected = page_size.min(len - from);

            prop_assert_eq!(dest.len(), expected);
            prop_assert_eq!(next, from + expected);
            prop_assert_eq!(&dest[..], &source[from..from + expected]);
        }

        #[test]
        fn sequential_calls_copy_everything_once(len in 0usize..60, page_size in 1usize..10) {
            let source: Vec<usize> = (0..len).collect();
            let mut dest: Vec<usize> = Vec::new();
            let mut offset = 0;

            loop {
                let next = paginate(&source, &mut dest, page_size, offset).unwrap();
                if next == offset {
                    break;
                }
                offset = next;
            }

            prop_assert_eq!(offset, len);
            prop_assert_eq!(dest, source);
        }
    }
}
