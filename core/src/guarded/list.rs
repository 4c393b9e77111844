use core::fmt::Debug;

use super::{GuardedIterator, Iter};
use crate::error::{GuardError, Operation};
use crate::options::GuardOptions;
use crate::sequence::{Sequence, SequenceError};
use crate::Vec;
use crate::snapshot::Snapshot;

/// A list view that never lets an absent element through.
///
/// Wraps a sequence of `Option<T>`, usually a `&mut Vec<Option<T>>` or a
/// [`SharedSequence`](crate::SharedSequence), and exposes its items as `T`.
/// Write arguments accept `impl Into<Option<T>>`, so both `list.add(0, 5)`
/// and `list.add(0, None)` compile; the latter is rejected before anything
/// is changed.
///
/// Every check happens before the underlying sequence is mutated: a failed
/// call leaves it as it was.
#[derive(Debug)]
pub struct NullGuardedList<S> {
    inner: S,
    options: GuardOptions,
}

impl<S> NullGuardedList<S> {
    pub fn new(inner: S) -> Self {
        Self::with_options(inner, GuardOptions::default())
    }

    pub fn with_options(inner: S, options: GuardOptions) -> Self {
        Self { inner, options }
    }

    pub fn options(&self) -> &GuardOptions {
        &self.options
    }

    /// The wrapped sequence, absent entries included.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<T, S> NullGuardedList<S>
where
    S: Sequence<Item = Option<T>, Error = SequenceError>,
    T: Debug,
{
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the item at `index`.
    ///
    /// An absent item fails with [`GuardError::AbsentValue`] carrying a
    /// snapshot of the whole sequence, e.g. `Item #1 of [1, null, 3] is NULL`.
    pub fn get(&self, index: usize) -> Result<T, GuardError> {
        match self.inner.get(index)? {
            Some(item) => Ok(item),
            None => Err(GuardError::absent_value(
                Operation::Get(index),
                self.snapshot(),
            )),
        }
    }

    /// Replaces the item at `index` and returns the previous one.
    ///
    /// Fails without replacing anything if `item` is absent or if the
    /// current item is absent.
    pub fn set(&mut self, index: usize, item: impl Into<Option<T>>) -> Result<T, GuardError> {
        let operation = Operation::Set(index);
        let item = present(item, operation)?;
        if self.inner.get(index)?.is_none() {
            return Err(GuardError::absent_value(operation, None));
        }
        self.inner
            .set(index, Some(item))?
            .ok_or_else(|| GuardError::absent_value(operation, None))
    }

    /// Inserts `item` at `index`, shifting later items up by one.
    pub fn add(&mut self, index: usize, item: impl Into<Option<T>>) -> Result<(), GuardError> {
        let item = present(item, Operation::Add(index))?;
        self.inner.insert(index, Some(item))?;
        Ok(())
    }

    /// Appends `item` at the end.
    pub fn push(&mut self, item: impl Into<Option<T>>) -> Result<(), GuardError> {
        let index = self.inner.len();
        self.add(index, item)
    }

    /// Removes and returns the item at `index`.
    ///
    /// An absent item fails with [`GuardError::AbsentValue`] and stays where
    /// it is.
    pub fn remove(&mut self, index: usize) -> Result<T, GuardError> {
        let operation = Operation::Remove(index);
        if self.inner.get(index)?.is_none() {
            return Err(GuardError::absent_value(operation, None));
        }
        self.inner
            .remove(index)?
            .ok_or_else(|| GuardError::absent_value(operation, None))
    }

    /// Position of the first item equal to `item`. Searching for an absent
    /// value is an invalid argument.
    pub fn index_of(&self, item: impl Into<Option<T>>) -> Result<Option<usize>, GuardError> {
        let item = present(item, Operation::IndexOf)?;
        Ok(self.inner.index_of(&Some(item))?)
    }

    /// Position of the last item equal to `item`.
    pub fn last_index_of(&self, item: impl Into<Option<T>>) -> Result<Option<usize>, GuardError> {
        let item = present(item, Operation::LastIndexOf)?;
        Ok(self.inner.last_index_of(&Some(item))?)
    }

    /// Whether some item equals `item`. Searching for an absent value is an
    /// invalid argument.
    pub fn contains(&self, item: impl Into<Option<T>>) -> Result<bool, GuardError> {
        let item = present(item, Operation::Contains)?;
        Ok(self.inner.index_of(&Some(item))?.is_some())
    }

    /// Appends every item of `other` in order.
    ///
    /// `other` is any sequence of present items, typically another
    /// `NullGuardedList`. It is read completely before anything is appended,
    /// so a failure while reading it leaves this list unchanged.
    pub fn add_all<O>(&mut self, other: &O) -> Result<(), GuardError>
    where
        O: Sequence<Item = T> + ?Sized,
        O::Error: Into<GuardError>,
    {
        let items = (0..other.len())
            .map(|index| other.get(index))
            .collect::<Result<Vec<T>, O::Error>>()
            .map_err(Into::<GuardError>::into)?;
        self.extend(items)
    }

    /// Appends present items in order.
    pub fn extend<I>(&mut self, items: I) -> Result<(), GuardError>
    where
        I: IntoIterator<Item = T>,
    {
        self.inner.extend_from(items.into_iter().map(Some))?;
        Ok(())
    }

    /// Opens a guarded cursor before the first item.
    pub fn list_iter(&mut self) -> Result<GuardedIterator<S::Cursor<'_>>, GuardError> {
        self.list_iter_at(0)
    }

    /// Opens a guarded cursor before the item at `index`.
    pub fn list_iter_at(
        &mut self,
        index: usize,
    ) -> Result<GuardedIterator<S::Cursor<'_>>, GuardError> {
        let cursor = self.inner.cursor(index)?;
        tracing::trace!(index, "guarded cursor opened");
        Ok(GuardedIterator::new(cursor))
    }

    /// Iterates over the items front to back without a cursor.
    ///
    /// Each step yields `Err` for an absent item instead of skipping it.
    pub fn iter(&self) -> Iter<'_, S> {
        Iter::new(self)
    }

    /// Copies every item, failing on the first absent one.
    pub fn to_vec(&self) -> Result<Vec<T>, GuardError> {
        (0..self.len()).map(|index| self.get(index)).collect()
    }

    fn snapshot(&self) -> Option<Snapshot> {
        self.options
            .capture_snapshot
            .then(|| Snapshot::capture(&self.inner, self.options.snapshot_limit))
    }
}

impl<T, S> Sequence for NullGuardedList<S>
where
    S: Sequence<Item = Option<T>, Error = SequenceError>,
    T: Clone + Debug,
{
    type Item = T;
    type Error = GuardError;
    type Cursor<'a>
        = GuardedIterator<S::Cursor<'a>>
    where
        Self: 'a;

    fn len(&self) -> usize {
        NullGuardedList::len(self)
    }

    fn get(&self, index: usize) -> Result<T, GuardError> {
        NullGuardedList::get(self, index)
    }

    fn set(&mut self, index: usize, item: T) -> Result<T, GuardError> {
        NullGuardedList::set(self, index, item)
    }

    fn insert(&mut self, index: usize, item: T) -> Result<(), GuardError> {
        self.add(index, item)
    }

    fn remove(&mut self, index: usize) -> Result<T, GuardError> {
        NullGuardedList::remove(self, index)
    }

    fn index_of(&self, item: &T) -> Result<Option<usize>, GuardError> {
        Ok(self.inner.index_of(&Some(item.clone()))?)
    }

    fn last_index_of(&self, item: &T) -> Result<Option<usize>, GuardError> {
        Ok(self.inner.last_index_of(&Some(item.clone()))?)
    }

    fn extend_from<I>(&mut self, items: I) -> Result<(), GuardError>
    where
        I: IntoIterator<Item = T>,
    {
        self.extend(items)
    }

    fn cursor(&mut self, index: usize) -> Result<Self::Cursor<'_>, GuardError> {
        self.list_iter_at(index)
    }
}

impl<'a, T, S> IntoIterator for &'a NullGuardedList<S>
where
    S: Sequence<Item = Option<T>, Error = SequenceError>,
    T: Debug,
{
    type Item = Result<T, GuardError>;
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Iter<'a, S> {
        self.iter()
    }
}

/// Unwraps a write argument or search key, rejecting absence.
pub(super) fn present<T>(
    item: impl Into<Option<T>>,
    operation: Operation,
) -> Result<T, GuardError> {
    item.into()
        .ok_or_else(|| GuardError::invalid_argument(operation))
}
