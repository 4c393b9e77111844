//! Null-guarded views over sequences that may store absent elements.
//!
//! The underlying storage is any [`Sequence`] whose items are `Option<T>`.
//! [`NullGuardedList`] wraps it and exposes the same capability set with
//! items typed as `T`: absent values are rejected on the way in and reported
//! on the way out.
//!
//! ```
//! use nonull_core::{GuardError, NullGuardedList};
//!
//! let mut items = vec![Some(1), None, Some(3)];
//! let mut list = NullGuardedList::new(&mut items);
//!
//! assert_eq!(list.get(0), Ok(1));
//! let err = list.get(1).unwrap_err();
//! assert_eq!(err.to_string(), "Item #1 of [1, null, 3] is NULL");
//!
//! assert!(matches!(list.add(0, None), Err(GuardError::InvalidArgument { .. })));
//! assert_eq!(list.len(), 3);
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

// This works on std and no_std and is harmless.
extern crate alloc;

#[doc(hidden)]
pub mod shim {
    pub use alloc::{format, rc::Rc, string::String, string::ToString, vec, vec::Vec};
}

#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod error;
pub mod guarded;
pub mod options;
pub mod sequence;
pub mod snapshot;

pub use error::{GuardError, Operation};
pub use guarded::{GuardedIterator, Iter, NullGuardedList};
pub use options::GuardOptions;
pub use sequence::{Cursor, Sequence, SequenceError, SharedCursor, SharedSequence, VecCursor};
pub use snapshot::Snapshot;
