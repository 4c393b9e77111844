use core::fmt::Debug;
use core::iter::FusedIterator;

use super::NullGuardedList;
use super::list::present;
use crate::error::{GuardError, Operation};
use crate::sequence::{Cursor, Sequence, SequenceError};

/// A bidirectional cursor over a [`NullGuardedList`](super::NullGuardedList).
///
/// Position queries go straight to the underlying cursor. Every step that
/// hands an item to the caller fails with [`GuardError::AbsentValue`] if
/// that item is absent, and `set`/`add` reject absent arguments.
#[derive(Debug)]
pub struct GuardedIterator<C> {
    cursor: C,
    // Set once iteration hits a failure of the underlying cursor, which does
    // not advance it.
    stalled: bool,
}

impl<C> GuardedIterator<C> {
    pub(crate) fn new(cursor: C) -> Self {
        Self {
            cursor,
            stalled: false,
        }
    }

    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<T, C> GuardedIterator<C>
where
    C: Cursor<Item = Option<T>, Error = SequenceError>,
{
    pub fn has_next(&self) -> bool {
        self.cursor.has_next()
    }

    pub fn has_previous(&self) -> bool {
        self.cursor.has_previous()
    }

    pub fn next(&mut self) -> Result<T, GuardError> {
        self.cursor
            .next()?
            .ok_or_else(|| GuardError::absent_value(Operation::Next, None))
    }

    pub fn previous(&mut self) -> Result<T, GuardError> {
        self.cursor
            .previous()?
            .ok_or_else(|| GuardError::absent_value(Operation::Previous, None))
    }

    pub fn next_index(&self) -> usize {
        self.cursor.next_index()
    }

    pub fn previous_index(&self) -> Option<usize> {
        self.cursor.previous_index()
    }

    /// Replaces the item last returned by `next` or `previous`.
    pub fn set(&mut self, item: impl Into<Option<T>>) -> Result<(), GuardError> {
        let item = present(item, Operation::CursorSet)?;
        self.cursor.set(Some(item))?;
        Ok(())
    }

    /// Inserts `item` before the cursor.
    pub fn add(&mut self, item: impl Into<Option<T>>) -> Result<(), GuardError> {
        let item = present(item, Operation::CursorAdd)?;
        self.cursor.add(Some(item))?;
        Ok(())
    }
}

/// Walks forward, ending once `has_next` is false. An absent item is
/// yielded as `Err` and the walk continues past it; a failure of the
/// underlying cursor is yielded once and ends the walk.
impl<T, C> Iterator for GuardedIterator<C>
where
    C: Cursor<Item = Option<T>, Error = SequenceError>,
{
    type Item = Result<T, GuardError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stalled || !GuardedIterator::has_next(self) {
            return None;
        }
        let item = GuardedIterator::next(self);
        self.stalled = matches!(item, Err(GuardError::Sequence(_)));
        Some(item)
    }
}

impl<T, C> Cursor for GuardedIterator<C>
where
    C: Cursor<Item = Option<T>, Error = SequenceError>,
{
    type Item = T;
    type Error = GuardError;

    fn has_next(&self) -> bool {
        GuardedIterator::has_next(self)
    }

    fn has_previous(&self) -> bool {
        GuardedIterator::has_previous(self)
    }

    fn next(&mut self) -> Result<T, GuardError> {
        GuardedIterator::next(self)
    }

    fn previous(&mut self) -> Result<T, GuardError> {
        GuardedIterator::previous(self)
    }

    fn next_index(&self) -> usize {
        GuardedIterator::next_index(self)
    }

    fn previous_index(&self) -> Option<usize> {
        GuardedIterator::previous_index(self)
    }

    fn set(&mut self, item: T) -> Result<(), GuardError> {
        GuardedIterator::set(self, item)
    }

    fn add(&mut self, item: T) -> Result<(), GuardError> {
        GuardedIterator::add(self, item)
    }
}

/// Borrowing iterator returned by [`NullGuardedList::iter`].
///
/// Reads by index, so it never opens a cursor and needs no `&mut`. Ends at
/// the current length of the underlying sequence.
#[derive(Debug)]
pub struct Iter<'a, S> {
    list: &'a NullGuardedList<S>,
    front: usize,
    back: usize,
}

impl<'a, T, S> Iter<'a, S>
where
    S: Sequence<Item = Option<T>, Error = SequenceError>,
    T: Debug,
{
    pub(super) fn new(list: &'a NullGuardedList<S>) -> Self {
        Self {
            list,
            front: 0,
            back: list.len(),
        }
    }

    fn read(&self, index: usize, operation: Operation) -> Result<T, GuardError> {
        self.list
            .inner()
            .get(index)?
            .ok_or_else(|| GuardError::absent_value(operation, None))
    }
}

impl<T, S> Iterator for Iter<'_, S>
where
    S: Sequence<Item = Option<T>, Error = SequenceError>,
    T: Debug,
{
    type Item = Result<T, GuardError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let index = self.front;
        self.front += 1;
        Some(self.read(index, Operation::Next))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T, S> DoubleEndedIterator for Iter<'_, S>
where
    S: Sequence<Item = Option<T>, Error = SequenceError>,
    T: Debug,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.read(self.back, Operation::Previous))
    }
}

impl<T, S> ExactSizeIterator for Iter<'_, S>
where
    S: Sequence<Item = Option<T>, Error = SequenceError>,
    T: Debug,
{
}

impl<T, S> FusedIterator for Iter<'_, S>
where
    S: Sequence<Item = Option<T>, Error = SequenceError>,
    T: Debug,
{
}
