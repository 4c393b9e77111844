//! The validating side of the boundary.

mod iter;
mod list;


pub use iter::{GuardedIterator, Iter};
pub use list::NullGuardedList;
