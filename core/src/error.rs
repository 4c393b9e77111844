//! Errors raised at the guard boundary.
//!
//! Two kinds are kept apart on purpose. [`GuardError::InvalidArgument`] means
//! the caller handed over an absent value; [`GuardError::AbsentValue`] means
//! an absent value was already stored in the underlying sequence and was
//! found on the way out.

use core::fmt;

use thiserror::Error;

use crate::sequence::SequenceError;
use crate::snapshot::Snapshot;
use crate::{String, ToString, format};

/// The guarded call that failed, with its arguments.
///
/// Displays as a call signature: `set(0,T)`, `remove(2)`, `next()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Get(usize),
    Set(usize),
    Add(usize),
    Remove(usize),
    IndexOf,
    LastIndexOf,
    Contains,
    /// Cursor `next`.
    Next,
    /// Cursor `previous`.
    Previous,
    /// Cursor `set`.
    CursorSet,
    /// Cursor `add`.
    CursorAdd,
}

impl Operation {
    pub fn index(&self) -> Option<usize> {
        match *self {
            Operation::Get(index)
            | Operation::Set(index)
            | Operation::Add(index)
            | Operation::Remove(index) => Some(index),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Get(index) => write!(f, "get({index})"),
            Operation::Set(index) => write!(f, "set({index},T)"),
            Operation::Add(index) => write!(f, "add({index},T)"),
            Operation::Remove(index) => write!(f, "remove({index})"),
            Operation::IndexOf => f.write_str("indexOf(T)"),
            Operation::LastIndexOf => f.write_str("lastIndexOf(T)"),
            Operation::Contains => f.write_str("contains(T)"),
            Operation::Next => f.write_str("next()"),
            Operation::Previous => f.write_str("previous()"),
            Operation::CursorSet => f.write_str("set(T)"),
            Operation::CursorAdd => f.write_str("add(T)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    /// An absent value was passed as a write argument or search key.
    #[error("Item can't be NULL in #{operation}")]
    InvalidArgument { operation: Operation },

    /// An absent value stored in the underlying sequence reached the boundary.
    ///
    /// `snapshot` is only captured for reads by index.
    #[error("{}", describe_absent(.operation, .snapshot))]
    AbsentValue {
        operation: Operation,
        snapshot: Option<Snapshot>,
    },

    /// Failure reported by the underlying sequence itself.
    #[error(transparent)]
    Sequence(#[from] SequenceError),
}

impl GuardError {
    pub(crate) fn invalid_argument(operation: Operation) -> Self {
        tracing::debug!(%operation, "absent argument rejected");
        GuardError::InvalidArgument { operation }
    }

    pub(crate) fn absent_value(operation: Operation, snapshot: Option<Snapshot>) -> Self {
        tracing::debug!(%operation, "absent value found in underlying sequence");
        GuardError::AbsentValue {
            operation,
            snapshot,
        }
    }

    /// The guarded call that failed. `None` for delegated failures.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            GuardError::InvalidArgument { operation }
            | GuardError::AbsentValue { operation, .. } => Some(*operation),
            GuardError::Sequence(_) => None,
        }
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            GuardError::AbsentValue { snapshot, .. } => snapshot.as_ref(),
            _ => None,
        }
    }
}

fn describe_absent(operation: &Operation, snapshot: &Option<Snapshot>) -> String {
    match (operation, snapshot) {
        (Operation::Get(index), Some(snapshot)) => format!("Item #{index} of {snapshot} is NULL"),
        (Operation::Get(index), None) => format!("Item #{index} is NULL"),
        (Operation::Next, _) => "Next item is NULL".to_string(),
        (Operation::Previous, _) => "Previous item is NULL".to_string(),
        (operation, _) => format!("Result of #{operation} is NULL"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;

    #[test]
    fn test_operation_signatures() {
        expect!["set(0,T)"].assert_eq(&Operation::Set(0).to_string());
        expect!["add(3,T)"].assert_eq(&Operation::Add(3).to_string());
        expect!["remove(1)"].assert_eq(&Operation::Remove(1).to_string());
        expect!["lastIndexOf(T)"].assert_eq(&Operation::LastIndexOf.to_string());
        expect!["set(T)"].assert_eq(&Operation::CursorSet.to_string());
    }

    #[test]
    fn test_operation_index() {
        assert_eq!(Operation::Get(4).index(), Some(4));
        assert_eq!(Operation::Remove(0).index(), Some(0));
        assert_eq!(Operation::Next.index(), None);
        assert_eq!(Operation::IndexOf.index(), None);
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = GuardError::InvalidArgument {
            operation: Operation::Add(0),
        };
        expect!["Item can't be NULL in #add(0,T)"].assert_eq(&err.to_string());
    }

    #[test]
    fn test_absent_value_messages() {
        let cases = [
            (Operation::Get(2), "Item #2 is NULL"),
            (Operation::Set(0), "Result of #set(0,T) is NULL"),
            (Operation::Remove(5), "Result of #remove(5) is NULL"),
            (Operation::Next, "Next item is NULL"),
            (Operation::Previous, "Previous item is NULL"),
        ];
        for (operation, message) in cases {
            let err = GuardError::AbsentValue {
                operation,
                snapshot: None,
            };
            assert_eq!(err.to_string(), message);
            assert_eq!(err.operation(), Some(operation));
        }
    }

    #[test]
    fn test_sequence_error_is_transparent() {
        let err = GuardError::from(SequenceError::OutOfBounds { index: 3, len: 1 });
        expect!["Index 3 out of bounds for length 1"].assert_eq(&err.to_string());
        assert_eq!(err.operation(), None);
        assert_eq!(err.snapshot(), None);
    }
}
