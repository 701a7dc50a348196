use crate::registry::Registry;

/// An independent deep copy of the whole registry at one instant.
///
/// A snapshot never shares storage with the live registry: mutating one
/// after taking the other can't bleed through. The name index and the move
/// queue are deliberately not captured; restore reverts directory and
/// entry state only.
#[derive(Debug, PartialEq, Clone)]
pub struct Snapshot(Registry);

impl Snapshot {
    /// Cost is proportional to total entries at the time of the call. That
    /// is the tradeoff that keeps restore trivial and self-contained.
    pub fn of(registry: &Registry) -> Self {
        Self(registry.clone())
    }

    pub fn registry(&self) -> &Registry {
        &self.0
    }
}

/// LIFO stack of snapshots in chronological order. Popping one undoes the
/// most recent mutation window; repeated pops walk further back.
#[derive(Debug, Default)]
pub struct BackupStack {
    stack: Vec<Snapshot>,
}

impl BackupStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, snap: Snapshot) {
        self.stack.push(snap);
    }

    pub fn pop(&mut self) -> Option<Snapshot> {
        self.stack.pop()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
