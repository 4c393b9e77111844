//! The mutable, ordered, index-addressable capability set.
//!
//! [`Sequence`] and [`Cursor`] describe both sides of the guard: the raw
//! collaborators in this module store `Option<T>` and may hold absent
//! entries, while [`NullGuardedList`](crate::NullGuardedList) implements the
//! same traits with `Item = T`.

mod shared;
mod vec;

#[cfg(test)]
mod shared_test;

pub use shared::{SharedCursor, SharedSequence};
pub use vec::VecCursor;

use thiserror::Error;

/// Failures raised by a raw sequence or its cursor.
///
/// These belong to the collaborator's own contract. The guard passes them
/// through untouched as [`GuardError::Sequence`](crate::GuardError::Sequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// Index outside of `0..len` (or `0..=len` for insertion).
    #[error("Index {index} out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },

    /// The cursor has no element in the requested direction.
    #[error("No more items in this direction")]
    NoSuchElement,

    /// Cursor `set` without a preceding `next`/`previous`, or right after `add`.
    #[error("No current item: call next() or previous() first")]
    NoCurrentItem,

    /// The sequence was structurally modified through another handle while
    /// the cursor was open.
    #[error("Sequence was structurally modified outside of this cursor")]
    ConcurrentModification,
}

/// A mutable ordered sequence addressed by zero-based position.
pub trait Sequence {
    type Item;
    type Error;
    type Cursor<'a>: Cursor<Item = Self::Item, Error = Self::Error>
    where
        Self: 'a;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Result<Self::Item, Self::Error>;

    /// Replaces the item at `index`, returning the previous one.
    fn set(&mut self, index: usize, item: Self::Item) -> Result<Self::Item, Self::Error>;

    /// Inserts `item` at `index`, shifting later items up by one.
    fn insert(&mut self, index: usize, item: Self::Item) -> Result<(), Self::Error>;

    /// Removes the item at `index`, shifting later items down by one.
    fn remove(&mut self, index: usize) -> Result<Self::Item, Self::Error>;

    fn index_of(&self, item: &Self::Item) -> Result<Option<usize>, Self::Error>;

    fn last_index_of(&self, item: &Self::Item) -> Result<Option<usize>, Self::Error>;

    /// Appends every item in order.
    fn extend_from<I>(&mut self, items: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Item>;

    /// Opens a cursor positioned before the item at `index`.
    fn cursor(&mut self, index: usize) -> Result<Self::Cursor<'_>, Self::Error>;
}

/// A bidirectional cursor. It always sits between two items; `next_index`
/// is the position of the item `next` would return.
pub trait Cursor {
    type Item;
    type Error;

    fn has_next(&self) -> bool;

    fn has_previous(&self) -> bool;

    fn next(&mut self) -> Result<Self::Item, Self::Error>;

    fn previous(&mut self) -> Result<Self::Item, Self::Error>;

    fn next_index(&self) -> usize;

    /// `None` when the cursor is before the first item.
    fn previous_index(&self) -> Option<usize> {
        self.next_index().checked_sub(1)
    }

    /// Replaces the item last returned by `next` or `previous`.
    fn set(&mut self, item: Self::Item) -> Result<(), Self::Error>;

    /// Inserts `item` before the cursor. A following `next` is unaffected.
    fn add(&mut self, item: Self::Item) -> Result<(), Self::Error>;
}

impl<S: Sequence> Sequence for &mut S {
    type Item = S::Item;
    type Error = S::Error;
    type Cursor<'a>
        = S::Cursor<'a>
    where
        Self: 'a;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> Result<Self::Item, Self::Error> {
        (**self).get(index)
    }

    fn set(&mut self, index: usize, item: Self::Item) -> Result<Self::Item, Self::Error> {
        (**self).set(index, item)
    }

    fn insert(&mut self, index: usize, item: Self::Item) -> Result<(), Self::Error> {
        (**self).insert(index, item)
    }

    fn remove(&mut self, index: usize) -> Result<Self::Item, Self::Error> {
        (**self).remove(index)
    }

    fn index_of(&self, item: &Self::Item) -> Result<Option<usize>, Self::Error> {
        (**self).index_of(item)
    }

    fn last_index_of(&self, item: &Self::Item) -> Result<Option<usize>, Self::Error> {
        (**self).last_index_of(item)
    }

    fn extend_from<I>(&mut self, items: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Item>,
    {
        (**self).extend_from(items)
    }

    fn cursor(&mut self, index: usize) -> Result<Self::Cursor<'_>, Self::Error> {
        (**self).cursor(index)
    }
}

/// Checks `index < len` for reads, replacements and removals.
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), SequenceError> {
    if index < len {
        Ok(())
    } else {
        Err(SequenceError::OutOfBounds { index, len })
    }
}

/// Checks `index <= len` for insertions and cursor positions.
pub(crate) fn check_position(index: usize, len: usize) -> Result<(), SequenceError> {
    if index <= len {
        Ok(())
    } else {
        Err(SequenceError::OutOfBounds { index, len })
    }
}
