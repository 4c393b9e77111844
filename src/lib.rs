//! nonull - list views that never hand out or accept an absent element
//!
//! # Overview
//!
//! Code that consumes sequences produced elsewhere often has to cope with
//! absent entries (`None`) it never asked for. Left alone, they surface far
//! from where they were introduced. [`NullGuardedList`] wraps such a
//! sequence and turns every absent value crossing its boundary into an
//! immediate, typed error:
//!
//! - passing an absent value to a write or search is a
//!   [`GuardError::InvalidArgument`]
//! - reading an absent value already stored in the sequence is a
//!   [`GuardError::AbsentValue`]
//!
//! # Quick Start
//!
//! ```
//! use nonull::{GuardError, NullGuardedList, Operation};
//!
//! let mut items = vec![Some(1), None, Some(3)];
//! let mut list = NullGuardedList::new(&mut items);
//!
//! assert_eq!(list.get(2), Ok(3));
//! assert_eq!(list.set(0, 10), Ok(1));
//!
//! let err = list.get(1).unwrap_err();
//! assert_eq!(err.operation(), Some(Operation::Get(1)));
//! assert_eq!(err.to_string(), "Item #1 of [10, null, 3] is NULL");
//!
//! assert_eq!(
//!     list.index_of(None),
//!     Err(GuardError::InvalidArgument { operation: Operation::IndexOf }),
//! );
//! ```
//!
//! # Shared Sequences
//!
//! A [`SharedSequence`] lets other handles keep mutating the wrapped
//! storage. Open cursors see those changes:
//!
//! ```
//! use nonull::{NullGuardedList, Sequence, SharedSequence};
//!
//! let mut shared = SharedSequence::new(vec![Some(1), Some(2)]);
//! let mut list = NullGuardedList::new(shared.clone());
//! let mut iter = list.list_iter().unwrap();
//!
//! assert_eq!(iter.next(), Ok(1));
//! shared.set(0, None).unwrap();
//! assert_eq!(iter.previous().unwrap_err().to_string(), "Previous item is NULL");
//! ```

// Error rendering utilities
pub mod error_renderer;
pub use error_renderer::{CharSet, RenderConfig, render_error, render_error_to};

// Re-export public API from nonull_core
pub use nonull_core::{
    Cursor, GuardError, GuardOptions, GuardedIterator, Iter, NullGuardedList, Operation, Sequence,
    SequenceError, SharedCursor, SharedSequence, Snapshot, VecCursor,
};
