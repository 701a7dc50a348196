use crate::entry::Kind;
use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;

/// A deferred instruction to relocate one named entry between directories.
///
/// Immutable once enqueued, consumed exactly once at drain time. Nothing
/// is validated on the way in; directories and files may appear or vanish
/// between enqueue and drain, so every check waits until then.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct MoveRequest {
    pub source: String,
    pub destination: String,
    pub filename: String,
    pub kind: Kind,
}

/// FIFO queue of pending move requests.
#[derive(Debug, Default)]
pub struct MoveQueue {
    queue: VecDeque<MoveRequest>,
}

impl MoveQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, request: MoveRequest) {
        self.queue.push_back(request);
    }

    pub fn pop(&mut self) -> Option<MoveRequest> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// What became of one drained request. Failed requests are dropped, never
/// re-enqueued.
#[derive(Debug, PartialEq, Clone)]
pub enum MoveOutcome {
    Moved,
    /// Source or destination no longer resolves.
    DirectoryMissing,
    /// The filename isn't in the source directory.
    FileMissing,
    /// The destination already held the name. By then the entry had
    /// already been removed from its old home, so it is gone.
    DestinationOccupied,
}

#[derive(Debug, PartialEq, Clone)]
pub struct MoveReport {
    pub request: MoveRequest,
    pub outcome: MoveOutcome,
}

impl fmt::Display for MoveReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let r = &self.request;
        match self.outcome {
            MoveOutcome::Moved => write!(
                f,
                "Moved file '{}' from '{}' to '{}'",
                r.filename, r.source, r.destination
            ),
            MoveOutcome::DirectoryMissing => {
                write!(f, "Source or destination directory not found")
            }
            MoveOutcome::FileMissing => write!(
                f,
                "File '{}' not found in directory '{}'",
                r.filename, r.source
            ),
            MoveOutcome::DestinationOccupied => write!(
                f,
                "File '{}' already exists in directory '{}'; entry dropped",
                r.filename, r.destination
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn request(filename: &str) -> MoveRequest {
        MoveRequest {
            source: "src".into(),
            destination: "dest".into(),
            filename: filename.into(),
            kind: Kind::File,
        }
    }

    #[test]
    fn fifo_order() {
        let mut q = MoveQueue::new();
        assert!(q.is_empty());

        q.push(request("first"));
        q.push(request("second"));
        q.push(request("third"));
        assert_eq!(q.len(), 3);

        assert_eq!(q.pop().expect("queued").filename, "first");
        assert_eq!(q.pop().expect("queued").filename, "second");
        assert_eq!(q.pop().expect("queued").filename, "third");
        assert!(q.pop().is_none());
    }

    #[test]
    fn report_lines() {
        let report = |outcome| MoveReport {
            request: request("a.txt"),
            outcome: outcome,
        };
        assert_eq!(
            report(MoveOutcome::Moved).to_string(),
            "Moved file 'a.txt' from 'src' to 'dest'"
        );
        assert_eq!(
            report(MoveOutcome::DirectoryMissing).to_string(),
            "Source or destination directory not found"
        );
        assert_eq!(
            report(MoveOutcome::FileMissing).to_string(),
            "File 'a.txt' not found in directory 'src'"
        );
        assert_eq!(
            report(MoveOutcome::DestinationOccupied).to_string(),
            "File 'a.txt' already exists in directory 'dest'; entry dropped"
        );
    }
}
