//! A sequence shared between several handles.
//!
//! Every clone of a [`SharedSequence`] addresses the same storage, so a
//! change made through one handle is visible through all others, including
//! cursors that are already open. Cursors re-read the storage by index on
//! every step instead of iterating over a copy.

use core::cell::{Cell, RefCell};
use core::fmt;

use super::{Cursor, Sequence, SequenceError, check_index, check_position};
use crate::{Rc, Vec};

struct SharedState<T> {
    items: RefCell<Vec<Option<T>>>,
    // Bumped by insertions and removals, not by replacements.
    modifications: Cell<u64>,
}

/// A cloneable handle to one `Vec<Option<T>>`.
pub struct SharedSequence<T> {
    state: Rc<SharedState<T>>,
}

static_assertions::assert_not_impl_any!(SharedSequence<u8>: Send, Sync);
static_assertions::assert_not_impl_any!(SharedCursor<u8>: Send, Sync);

impl<T> SharedSequence<T> {
    pub fn new(items: Vec<Option<T>>) -> Self {
        Self {
            state: Rc::new(SharedState {
                items: RefCell::new(items),
                modifications: Cell::new(0),
            }),
        }
    }

    /// Number of structural modifications made so far through any handle.
    pub fn modifications(&self) -> u64 {
        self.state.modifications.get()
    }

    fn touch(&self) {
        self.state.modifications.set(self.state.modifications.get() + 1);
    }
}

impl<T: Clone> SharedSequence<T> {
    /// Copies the current contents, absent entries included.
    pub fn to_vec(&self) -> Vec<Option<T>> {
        self.state.items.borrow().clone()
    }
}

impl<T> Clone for SharedSequence<T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T> Default for SharedSequence<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> From<Vec<Option<T>>> for SharedSequence<T> {
    fn from(items: Vec<Option<T>>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<Option<T>> for SharedSequence<T> {
    fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSequence")
            .field("items", &self.state.items.borrow())
            .field("modifications", &self.state.modifications.get())
            .finish()
    }
}

impl<T: Clone + PartialEq> Sequence for SharedSequence<T> {
    type Item = Option<T>;
    type Error = SequenceError;
    type Cursor<'a>
        = SharedCursor<T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.state.items.borrow().len()
    }

    fn get(&self, index: usize) -> Result<Option<T>, SequenceError> {
        let items = self.state.items.borrow();
        check_index(index, items.len())?;
        Ok(items[index].clone())
    }

    fn set(&mut self, index: usize, item: Option<T>) -> Result<Option<T>, SequenceError> {
        let mut items = self.state.items.borrow_mut();
        check_index(index, items.len())?;
        Ok(core::mem::replace(&mut items[index], item))
    }

    fn insert(&mut self, index: usize, item: Option<T>) -> Result<(), SequenceError> {
        {
            let mut items = self.state.items.borrow_mut();
            check_position(index, items.len())?;
            items.insert(index, item);
        }
        self.touch();
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<Option<T>, SequenceError> {
        let removed = {
            let mut items = self.state.items.borrow_mut();
            check_index(index, items.len())?;
            items.remove(index)
        };
        self.touch();
        Ok(removed)
    }

    // Searches run over a copy: `PartialEq` is caller code and may reach the
    // storage through another handle.
    fn index_of(&self, item: &Option<T>) -> Result<Option<usize>, SequenceError> {
        Ok(self.to_vec().iter().position(|candidate| candidate == item))
    }

    fn last_index_of(&self, item: &Option<T>) -> Result<Option<usize>, SequenceError> {
        Ok(self.to_vec().iter().rposition(|candidate| candidate == item))
    }

    fn extend_from<I>(&mut self, items: I) -> Result<(), SequenceError>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        // The iterator may read this storage, so drain it before borrowing.
        let items: Vec<Option<T>> = items.into_iter().collect();
        self.state.items.borrow_mut().extend(items);
        self.touch();
        Ok(())
    }

    fn cursor(&mut self, index: usize) -> Result<SharedCursor<T>, SequenceError> {
        check_position(index, Sequence::len(self))?;
        Ok(SharedCursor {
            expected_modifications: self.modifications(),
            sequence: self.clone(),
            next: index,
            last: None,
        })
    }
}

/// Cursor over a [`SharedSequence`].
///
/// Fails with [`SequenceError::ConcurrentModification`] once another handle
/// has inserted or removed items since the cursor was opened (or since its
/// own last `add`). Replacements made elsewhere stay visible.
pub struct SharedCursor<T> {
    sequence: SharedSequence<T>,
    next: usize,
    last: Option<usize>,
    expected_modifications: u64,
}

impl<T> SharedCursor<T> {
    fn check_modifications(&self) -> Result<(), SequenceError> {
        if self.sequence.modifications() == self.expected_modifications {
            Ok(())
        } else {
            Err(SequenceError::ConcurrentModification)
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedCursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedCursor")
            .field("next", &self.next)
            .field("last", &self.last)
            .field("expected_modifications", &self.expected_modifications)
            .finish()
    }
}

impl<T: Clone> Cursor for SharedCursor<T> {
    type Item = Option<T>;
    type Error = SequenceError;

    fn has_next(&self) -> bool {
        self.next < self.sequence.state.items.borrow().len()
    }

    fn has_previous(&self) -> bool {
        self.next > 0
    }

    fn next(&mut self) -> Result<Option<T>, SequenceError> {
        self.check_modifications()?;
        let item = self
            .sequence
            .state
            .items
            .borrow()
            .as_slice()
            .get(self.next)
            .ok_or(SequenceError::NoSuchElement)?
            .clone();
        self.last = Some(self.next);
        self.next += 1;
        Ok(item)
    }

    fn previous(&mut self) -> Result<Option<T>, SequenceError> {
        self.check_modifications()?;
        let index = self
            .next
            .checked_sub(1)
            .ok_or(SequenceError::NoSuchElement)?;
        let item = self
            .sequence
            .state
            .items
            .borrow()
            .as_slice()
            .get(index)
            .ok_or(SequenceError::NoSuchElement)?
            .clone();
        self.next = index;
        self.last = Some(index);
        Ok(item)
    }

    fn next_index(&self) -> usize {
        self.next
    }

    fn set(&mut self, item: Option<T>) -> Result<(), SequenceError> {
        let index = self.last.ok_or(SequenceError::NoCurrentItem)?;
        self.check_modifications()?;
        let mut items = self.sequence.state.items.borrow_mut();
        let len = items.len();
        let slot = items
            .get_mut(index)
            .ok_or(SequenceError::OutOfBounds { index, len })?;
        *slot = item;
        Ok(())
    }

    fn add(&mut self, item: Option<T>) -> Result<(), SequenceError> {
        self.check_modifications()?;
        {
            let mut items = self.sequence.state.items.borrow_mut();
            check_position(self.next, items.len())?;
            items.insert(self.next, item);
        }
        self.sequence.touch();
        self.expected_modifications = self.sequence.modifications();
        self.next += 1;
        self.last = None;
        Ok(())
    }
}
