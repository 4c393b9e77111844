//! Rendering of a sequence's contents at the moment a guard fails.

use core::fmt::{self, Debug, Write};
use core::ops::Range;

use crate::sequence::Sequence;
use crate::{String, Vec};

/// The rendered contents of a sequence, e.g. `[1, null, 3]`.
///
/// Present items are rendered with their `Debug` representation and absent
/// ones as `null`. Strings therefore keep their quotes:
/// `vec![Some("a"), None]` renders as `["a", null]`, not `[a, null]`.
/// The byte span of every rendered item is kept so a diagnostic can point
/// at a specific entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    text: String,
    spans: Vec<Range<usize>>,
    omitted: usize,
}

impl Snapshot {
    /// Renders at most `limit` items of `sequence`; the rest are summarized
    /// as `.. N more`.
    pub fn capture<S, T>(sequence: &S, limit: Option<usize>) -> Self
    where
        S: Sequence<Item = Option<T>> + ?Sized,
        T: Debug,
    {
        let len = sequence.len();
        let shown = limit.map_or(len, |limit| limit.min(len));
        let mut text = String::from("[");
        let mut spans = Vec::with_capacity(shown);
        for index in 0..shown {
            if index > 0 {
                text.push_str(", ");
            }
            let start = text.len();
            // Writing into a String cannot fail.
            let _ = match sequence.get(index) {
                Ok(Some(item)) => write!(text, "{item:?}"),
                Ok(None) => text.write_str("null"),
                Err(_) => text.write_str("?"),
            };
            spans.push(start..text.len());
        }
        let omitted = len - shown;
        if omitted > 0 {
            if shown > 0 {
                text.push_str(", ");
            }
            let _ = write!(text, ".. {omitted} more");
        }
        text.push(']');
        Self {
            text,
            spans,
            omitted,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Byte range of the item at `index` within [`as_str`](Self::as_str),
    /// or `None` if that item was not rendered.
    pub fn span(&self, index: usize) -> Option<Range<usize>> {
        self.spans.get(index).cloned()
    }

    /// Number of items left out because of the rendering limit.
    pub fn omitted(&self) -> usize {
        self.omitted
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SharedSequence;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_renders_absent_items_as_null() {
        let items = vec![Some(1), None, Some(3)];
        let snapshot = Snapshot::capture(&items, None);
        assert_eq!(snapshot.as_str(), "[1, null, 3]");
        assert_eq!(snapshot.span(1), Some(4..8));
        assert_eq!(&snapshot.as_str()[snapshot.span(2).unwrap()], "3");
        assert_eq!(snapshot.omitted(), 0);
    }

    #[test]
    fn test_empty_sequence() {
        let items: Vec<Option<i32>> = vec![];
        let snapshot = Snapshot::capture(&items, None);
        assert_eq!(snapshot.to_string(), "[]");
        assert_eq!(snapshot.span(0), None);
    }

    #[test]
    fn test_uses_debug_representation() {
        let items = vec![Some("a"), None];
        let snapshot = Snapshot::capture(&items, None);
        assert_eq!(snapshot.as_str(), r#"["a", null]"#);
    }

    #[test]
    fn test_limit_summarizes_the_rest() {
        let items = vec![Some(1), Some(2), None, Some(4), Some(5)];
        let snapshot = Snapshot::capture(&items, Some(2));
        assert_eq!(snapshot.as_str(), "[1, 2, .. 3 more]");
        assert_eq!(snapshot.omitted(), 3);
        assert_eq!(snapshot.span(2), None);

        let snapshot = Snapshot::capture(&items, Some(0));
        assert_eq!(snapshot.as_str(), "[.. 5 more]");
    }

    #[test]
    fn test_limit_larger_than_sequence() {
        let shared: SharedSequence<u8> = [Some(7), None].into_iter().collect();
        let snapshot = Snapshot::capture(&shared, Some(10));
        assert_eq!(snapshot.as_str(), "[7, null]");
        assert_eq!(snapshot.omitted(), 0);
    }
}
