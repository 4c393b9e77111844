/// Options controlling how a [`NullGuardedList`](crate::NullGuardedList)
/// reports failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardOptions {
    /// Attach a [`Snapshot`](crate::Snapshot) of the sequence to absent
    /// values found by index.
    pub capture_snapshot: bool,
    /// Render at most this many items in a snapshot. `None` renders all.
    pub snapshot_limit: Option<usize>,
}

impl Default for GuardOptions {
    fn default() -> Self {
        GuardOptions::default()
    }
}

impl GuardOptions {
    const fn default() -> Self {
        Self {
            capture_snapshot: true,
            snapshot_limit: None,
        }
    }
}
