//! Tests for `SharedSequence` and its cursor.

use super::*;
use pretty_assertions::assert_eq;

fn shared(items: &[Option<i32>]) -> SharedSequence<i32> {
    SharedSequence::new(items.to_vec())
}

#[test]
fn test_clones_share_storage() {
    let mut first = shared(&[Some(1), Some(2)]);
    let second = first.clone();
    first.set(0, None).unwrap();
    assert_eq!(second.get(0), Ok(None));
    assert_eq!(second.to_vec(), vec![None, Some(2)]);
}

#[test]
fn test_structural_changes_are_counted() {
    let mut sequence = shared(&[Some(1)]);
    assert_eq!(sequence.modifications(), 0);
    sequence.set(0, Some(5)).unwrap();
    assert_eq!(sequence.modifications(), 0);
    sequence.insert(1, None).unwrap();
    sequence.remove(0).unwrap();
    sequence.extend_from([Some(7)]).unwrap();
    assert_eq!(sequence.modifications(), 3);
    assert_eq!(sequence.to_vec(), vec![None, Some(7)]);
}

#[test]
fn test_failed_insert_is_not_counted() {
    let mut sequence = shared(&[]);
    assert_eq!(
        sequence.insert(1, Some(1)),
        Err(SequenceError::OutOfBounds { index: 1, len: 0 })
    );
    assert_eq!(sequence.modifications(), 0);
}

#[test]
fn test_cursor_sees_replacements_made_elsewhere() {
    let mut sequence = shared(&[Some(1), Some(2)]);
    let mut other = sequence.clone();
    let mut cursor = sequence.cursor(0).unwrap();
    assert_eq!(cursor.next(), Ok(Some(1)));
    other.set(0, None).unwrap();
    assert_eq!(cursor.previous(), Ok(None));
}

#[test]
fn test_cursor_detects_structural_changes_made_elsewhere() {
    let mut sequence = shared(&[Some(1), Some(2)]);
    let mut other = sequence.clone();
    let mut cursor = sequence.cursor(0).unwrap();
    assert_eq!(cursor.next(), Ok(Some(1)));
    other.remove(1).unwrap();
    assert_eq!(cursor.next(), Err(SequenceError::ConcurrentModification));
    assert_eq!(cursor.previous(), Err(SequenceError::ConcurrentModification));
    assert_eq!(cursor.add(Some(3)), Err(SequenceError::ConcurrentModification));
    // Position queries never fail.
    assert!(!cursor.has_next());
    assert_eq!(cursor.next_index(), 1);
}

#[test]
fn test_cursor_add_keeps_cursor_valid() {
    let mut sequence = shared(&[Some(1), Some(3)]);
    let handle = sequence.clone();
    let mut cursor = sequence.cursor(1).unwrap();
    cursor.add(Some(2)).unwrap();
    assert_eq!(cursor.next(), Ok(Some(3)));
    assert_eq!(cursor.set(Some(30)), Ok(()));
    assert_eq!(handle.to_vec(), vec![Some(1), Some(2), Some(30)]);
    assert_eq!(handle.modifications(), 1);
}

#[test]
fn test_collect_and_debug() {
    let sequence: SharedSequence<i32> = [Some(1), None].into_iter().collect();
    assert_eq!(sequence.len(), 2);
    assert_eq!(
        format!("{sequence:?}"),
        "SharedSequence { items: [Some(1), None], modifications: 0 }"
    );
}

#[test]
fn test_extend_from_iterator_reading_same_storage() {
    let mut sequence = shared(&[Some(1), Some(2)]);
    let handle = sequence.clone();
    let copies = (0..2).map(|index| handle.get(index).ok().flatten());
    assert_eq!(sequence.extend_from(copies), Ok(()));
    assert_eq!(
        sequence.to_vec(),
        vec![Some(1), Some(2), Some(1), Some(2)]
    );
}

#[derive(Debug, Clone)]
struct Reentrant {
    value: i32,
    other: Option<SharedSequence<Reentrant>>,
}

impl PartialEq for Reentrant {
    fn eq(&self, other: &Self) -> bool {
        // Reach back into the storage while it is being searched.
        for handle in [&self.other, &other.other].into_iter().flatten() {
            let _ = handle.clone().set(0, None);
        }
        self.value == other.value
    }
}

#[test]
fn test_search_tolerates_comparison_touching_storage() {
    let mut sequence: SharedSequence<Reentrant> = SharedSequence::default();
    let key = Reentrant {
        value: 2,
        other: Some(sequence.clone()),
    };
    sequence
        .extend_from([
            Some(Reentrant { value: 1, other: None }),
            Some(Reentrant { value: 2, other: None }),
        ])
        .unwrap();
    assert_eq!(sequence.index_of(&Some(key.clone())), Ok(Some(1)));
    assert_eq!(sequence.last_index_of(&Some(key)), Ok(Some(1)));
}
