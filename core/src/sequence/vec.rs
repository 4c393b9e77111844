//! `Vec<Option<T>>` as a raw sequence.

use super::{Cursor, Sequence, SequenceError, check_index, check_position};
use crate::Vec;

impl<T: Clone + PartialEq> Sequence for Vec<Option<T>> {
    type Item = Option<T>;
    type Error = SequenceError;
    type Cursor<'a>
        = VecCursor<'a, T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Result<Option<T>, SequenceError> {
        check_index(index, Vec::len(self))?;
        Ok(self[index].clone())
    }

    fn set(&mut self, index: usize, item: Option<T>) -> Result<Option<T>, SequenceError> {
        check_index(index, Vec::len(self))?;
        Ok(core::mem::replace(&mut self[index], item))
    }

    fn insert(&mut self, index: usize, item: Option<T>) -> Result<(), SequenceError> {
        check_position(index, Vec::len(self))?;
        Vec::insert(self, index, item);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<Option<T>, SequenceError> {
        check_index(index, Vec::len(self))?;
        Ok(Vec::remove(self, index))
    }

    fn index_of(&self, item: &Option<T>) -> Result<Option<usize>, SequenceError> {
        Ok(self.iter().position(|candidate| candidate == item))
    }

    fn last_index_of(&self, item: &Option<T>) -> Result<Option<usize>, SequenceError> {
        Ok(self.iter().rposition(|candidate| candidate == item))
    }

    fn extend_from<I>(&mut self, items: I) -> Result<(), SequenceError>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        Extend::extend(self, items);
        Ok(())
    }

    fn cursor(&mut self, index: usize) -> Result<VecCursor<'_, T>, SequenceError> {
        check_position(index, Vec::len(self))?;
        Ok(VecCursor {
            items: self,
            next: index,
            last: None,
        })
    }
}

/// Cursor over a borrowed `Vec<Option<T>>`.
///
/// The exclusive borrow rules out modification through any other path while
/// the cursor is alive.
#[derive(Debug)]
pub struct VecCursor<'a, T> {
    items: &'a mut Vec<Option<T>>,
    next: usize,
    last: Option<usize>,
}

impl<T: Clone> Cursor for VecCursor<'_, T> {
    type Item = Option<T>;
    type Error = SequenceError;

    fn has_next(&self) -> bool {
        self.next < self.items.as_slice().len()
    }

    fn has_previous(&self) -> bool {
        self.next > 0
    }

    fn next(&mut self) -> Result<Option<T>, SequenceError> {
        let item = self
            .items
            .as_slice()
            .get(self.next)
            .ok_or(SequenceError::NoSuchElement)?
            .clone();
        self.last = Some(self.next);
        self.next += 1;
        Ok(item)
    }

    fn previous(&mut self) -> Result<Option<T>, SequenceError> {
        let index = self
            .next
            .checked_sub(1)
            .ok_or(SequenceError::NoSuchElement)?;
        let item = self.items[index].clone();
        self.next = index;
        self.last = Some(index);
        Ok(item)
    }

    fn next_index(&self) -> usize {
        self.next
    }

    fn set(&mut self, item: Option<T>) -> Result<(), SequenceError> {
        let index = self.last.ok_or(SequenceError::NoCurrentItem)?;
        self.items[index] = item;
        Ok(())
    }

    fn add(&mut self, item: Option<T>) -> Result<(), SequenceError> {
        Vec::insert(self.items, self.next, item);
        self.next += 1;
        self.last = None;
        Ok(())
    }
}
