use crate::backup::{BackupStack, Snapshot};
use crate::entry::{Entry, Kind};
use crate::error::FsError;
use crate::index::NameIndex;
use crate::queue::{MoveOutcome, MoveQueue, MoveReport, MoveRequest};
use crate::registry::{Directory, Registry};

/// The store itself: a registry of directories plus the services layered
/// on top of it. Single-threaded and synchronous; every call runs to
/// completion, and nothing here performs I/O.
#[derive(Debug, Default)]
pub struct FileSystem {
    registry: Registry,
    index: NameIndex,
    queue: MoveQueue,
    backups: BackupStack,
}

impl FileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn insert_directory(&mut self, name: &str) -> Result<(), FsError> {
        self.registry.insert_directory(name)
    }

    /// Insert an entry and record its name in the index. The index write
    /// is permanent: no later removal takes it back out.
    pub fn insert_file(&mut self, dir: &str, filename: &str, kind: Kind) -> Result<(), FsError> {
        let dir = self
            .registry
            .find_mut(dir)
            .ok_or_else(|| FsError::DirectoryNotFound(dir.into()))?;
        dir.insert(Entry::new(filename, kind))?;
        self.index.insert(filename);
        Ok(())
    }

    /// Answers "was a file with this name ever inserted", not "does it
    /// exist right now". The index is append-only and non-authoritative.
    pub fn search(&self, filename: &str) -> bool {
        self.index.contains(filename)
    }

    /// Remove the first match anywhere in registry order, nothing further.
    pub fn remove(&mut self, filename: &str) -> Result<(), FsError> {
        match self.registry.remove_first(filename) {
            true => Ok(()),
            false => Err(FsError::FileNotFound(filename.into())),
        }
    }

    pub fn rename_directory(&mut self, old: &str, new: &str) -> Result<(), FsError> {
        self.registry.rename_directory(old, new)
    }

    /// One directory's listing, or `DirectoryNotFound`.
    pub fn contents(&self, dir: &str) -> Result<&Directory, FsError> {
        self.registry
            .find(dir)
            .ok_or_else(|| FsError::DirectoryNotFound(dir.into()))
    }

    /// Duplicate the first entry named `filename` (registry order, first
    /// match wins) into `dest` under a collision-avoided name: `copy_<name>`,
    /// then `copy_1_<name>`, `copy_2_<name>`, ... until a free slot shows
    /// up. Returns the name chosen.
    ///
    /// The copy appends straight into the destination list; the name index
    /// never learns about copies.
    pub fn copy_file(&mut self, filename: &str, dest: &str) -> Result<String, FsError> {
        let kind = self
            .registry
            .find_entry(filename)
            .map(|(_, entry)| entry.kind)
            .ok_or_else(|| FsError::FileNotFound(filename.into()))?;
        let dest = self
            .registry
            .find_mut(dest)
            .ok_or_else(|| FsError::DirectoryNotFound(dest.into()))?;

        let mut copied = format!("copy_{}", filename);
        let mut n = 1;
        while dest.find(&copied).is_some() {
            copied = format!("copy_{}_{}", n, filename);
            n += 1;
        }
        dest.push(Entry::new(&copied, kind));
        Ok(copied)
    }

    pub fn sort_directory(&mut self, dir: &str) -> Result<(), FsError> {
        let dir = self
            .registry
            .find_mut(dir)
            .ok_or_else(|| FsError::DirectoryNotFound(dir.into()))?;
        dir.sort();
        Ok(())
    }

    /// Pure enqueue. Validation waits until drain time.
    pub fn enqueue_move(&mut self, source: &str, destination: &str, filename: &str, kind: Kind) {
        self.queue.push(MoveRequest {
            source: source.into(),
            destination: destination.into(),
            filename: filename.into(),
            kind: kind,
        });
    }

    pub fn pending_moves(&self) -> usize {
        self.queue.len()
    }

    /// Drain the queue exhaustively, in FIFO order, resolving each request
    /// against the registry as it stands now. Failed requests are dropped
    /// and don't affect the ones behind them.
    pub fn process_move_queue(&mut self) -> Vec<MoveReport> {
        let mut reports = vec![];
        while let Some(request) = self.queue.pop() {
            let outcome = self.resolve_move(&request);
            reports.push(MoveReport {
                request: request,
                outcome: outcome,
            });
        }
        reports
    }

    fn resolve_move(&mut self, request: &MoveRequest) -> MoveOutcome {
        if self.registry.find(&request.source).is_none()
            || self.registry.find(&request.destination).is_none()
        {
            return MoveOutcome::DirectoryMissing;
        }

        // The kind travels with the entry as found, not as enqueued.
        let kind = match self
            .registry
            .find(&request.source)
            .and_then(|d| d.find(&request.filename))
        {
            Some(entry) => entry.kind,
            None => return MoveOutcome::FileMissing,
        };

        // Removal is the registry-wide first match, not scoped to the
        // resolved source. With duplicate names, an earlier directory's
        // copy is the one that goes.
        self.registry.remove_first(&request.filename);
        match self.insert_file(&request.destination, &request.filename, kind) {
            Ok(()) => MoveOutcome::Moved,
            Err(_) => MoveOutcome::DestinationOccupied,
        }
    }

    /// Deep-copy the registry onto the backup stack. O(total entries),
    /// every time.
    pub fn backup(&mut self) {
        self.backups.push(Snapshot::of(&self.registry));
    }

    pub fn backup_count(&self) -> usize {
        self.backups.len()
    }

    /// Pop the latest snapshot, discard the live registry, and rebuild it
    /// by replaying inserts in stored order. The replay feeds the name
    /// index again; names only ever accumulate there.
    pub fn restore(&mut self) -> Result<(), FsError> {
        let snap = self.backups.pop().ok_or(FsError::EmptyBackupStack)?;
        self.registry.clear();
        for dir in snap.registry().directories() {
            self.registry.insert_directory(dir.name())?;
            for entry in dir.entries() {
                self.insert_file(dir.name(), &entry.name, entry.kind)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn names(dir: &Directory) -> Vec<&str> {
        dir.entries().iter().map(|e| e.name.as_str()).collect()
    }

    fn sample() -> FileSystem {
        let mut fs = FileSystem::new();
        fs.insert_directory("documents").expect("fresh");
        fs.insert_directory("pictures").expect("fresh");
        fs.insert_file("documents", "resume.docx", Kind::File)
            .expect("fresh");
        fs.insert_file("pictures", "vacation.jpg", Kind::File)
            .expect("fresh");
        fs
    }

    #[test]
    fn insert_file_errors() {
        let mut fs = sample();
        assert_eq!(
            fs.insert_file("missing", "x.txt", Kind::File),
            Err(FsError::DirectoryNotFound("missing".into()))
        );
        assert_eq!(
            fs.insert_file("documents", "resume.docx", Kind::File),
            Err(FsError::DuplicateFile {
                dir: "documents".into(),
                file: "resume.docx".into(),
            })
        );
    }

    #[test]
    fn index_is_append_only() {
        let mut fs = sample();
        assert!(fs.search("resume.docx"));
        fs.remove("resume.docx").expect("exists");

        // Gone from the directory, still in the index.
        assert!(fs
            .contents("documents")
            .expect("exists")
            .find("resume.docx")
            .is_none());
        assert!(fs.search("resume.docx"));
        assert!(!fs.search("never-inserted.txt"));
    }

    #[test]
    fn remove_reports_missing() {
        let mut fs = sample();
        assert_eq!(
            fs.remove("nope.txt"),
            Err(FsError::FileNotFound("nope.txt".into()))
        );
    }

    #[test]
    fn copy_collision_naming() {
        let mut fs = sample();
        assert_eq!(
            fs.copy_file("resume.docx", "pictures").expect("copies"),
            "copy_resume.docx"
        );
        assert_eq!(
            fs.copy_file("resume.docx", "pictures").expect("copies"),
            "copy_1_resume.docx"
        );
        assert_eq!(
            fs.copy_file("resume.docx", "pictures").expect("copies"),
            "copy_2_resume.docx"
        );

        // Copies bypass the index.
        assert!(!fs.search("copy_resume.docx"));

        assert_eq!(
            fs.copy_file("ghost.txt", "pictures"),
            Err(FsError::FileNotFound("ghost.txt".into()))
        );
        assert_eq!(
            fs.copy_file("resume.docx", "nowhere"),
            Err(FsError::DirectoryNotFound("nowhere".into()))
        );
    }

    #[test]
    fn copy_source_is_first_match() {
        let mut fs = sample();
        fs.insert_file("documents", "shared.txt", Kind::File)
            .expect("fresh");
        fs.insert_file("pictures", "shared.txt", Kind::Directory)
            .expect("fresh");
        fs.insert_directory("target").expect("fresh");

        fs.copy_file("shared.txt", "target").expect("copies");
        let copy = fs
            .contents("target")
            .expect("exists")
            .find("copy_shared.txt")
            .expect("copied");

        // "documents" holds the plain-file version and comes first.
        assert_eq!(copy.kind, Kind::File);
    }

    #[test]
    fn backup_restore_round_trip() {
        let mut fs = sample();
        fs.backup();

        fs.insert_directory("scratch").expect("fresh");
        fs.insert_file("documents", "draft.txt", Kind::File)
            .expect("fresh");
        fs.remove("vacation.jpg").expect("exists");

        fs.restore().expect("one snapshot");

        assert_eq!(
            fs.registry()
                .directories()
                .iter()
                .map(|d| d.name())
                .collect::<Vec<_>>(),
            vec!["documents", "pictures"]
        );
        assert_eq!(names(fs.contents("documents").expect("exists")), vec!["resume.docx"]);
        assert_eq!(names(fs.contents("pictures").expect("exists")), vec!["vacation.jpg"]);

        // The snapshot was consumed.
        assert_eq!(fs.restore(), Err(FsError::EmptyBackupStack));
    }

    #[test]
    fn restore_keeps_index_names() {
        let mut fs = sample();
        fs.backup();
        fs.insert_file("documents", "fleeting.txt", Kind::File)
            .expect("fresh");
        fs.restore().expect("one snapshot");

        // The restore replay re-feeds pre-backup names; the name inserted
        // after the backup also lingers, because nothing ever leaves.
        assert!(fs.search("resume.docx"));
        assert!(fs.search("fleeting.txt"));
    }

    #[test]
    fn multi_level_undo() {
        let mut fs = FileSystem::new();
        fs.backup(); // empty state
        fs.insert_directory("a").expect("fresh");
        fs.backup(); // one directory
        fs.insert_directory("b").expect("fresh");

        fs.restore().expect("snapshot");
        assert_eq!(fs.registry().directories().len(), 1);
        fs.restore().expect("snapshot");
        assert_eq!(fs.registry().directories().len(), 0);
    }

    #[test]
    fn drain_in_fifo_order() {
        let mut fs = sample();
        fs.insert_directory("inbox").expect("fresh");
        fs.enqueue_move("documents", "inbox", "resume.docx", Kind::File);
        fs.enqueue_move("pictures", "inbox", "vacation.jpg", Kind::File);
        assert_eq!(fs.pending_moves(), 2);

        let reports = fs.process_move_queue();
        assert_eq!(fs.pending_moves(), 0);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].request.filename, "resume.docx");
        assert_eq!(reports[0].outcome, MoveOutcome::Moved);
        assert_eq!(reports[1].request.filename, "vacation.jpg");
        assert_eq!(reports[1].outcome, MoveOutcome::Moved);

        assert_eq!(
            names(fs.contents("inbox").expect("exists")),
            vec!["resume.docx", "vacation.jpg"]
        );
        assert!(fs.contents("documents").expect("exists").is_empty());
    }

    #[test]
    fn drain_resolves_against_current_state() {
        let mut fs = sample();
        // Enqueued before "inbox" exists; created before the drain.
        fs.enqueue_move("documents", "inbox", "resume.docx", Kind::File);
        fs.insert_directory("inbox").expect("fresh");

        let reports = fs.process_move_queue();
        assert_eq!(reports[0].outcome, MoveOutcome::Moved);
        assert!(fs.contents("inbox").expect("exists").find("resume.docx").is_some());
    }

    #[test]
    fn failed_requests_are_dropped_not_retried() {
        let mut fs = sample();
        fs.enqueue_move("documents", "nowhere", "resume.docx", Kind::File);
        fs.enqueue_move("documents", "missing.txt", "x", Kind::File);
        fs.enqueue_move("pictures", "documents", "vacation.jpg", Kind::File);

        let reports = fs.process_move_queue();
        assert_eq!(reports[0].outcome, MoveOutcome::DirectoryMissing);
        assert_eq!(reports[1].outcome, MoveOutcome::DirectoryMissing);
        // A bad request in front doesn't block the one behind it.
        assert_eq!(reports[2].outcome, MoveOutcome::Moved);
        assert_eq!(fs.pending_moves(), 0);

        // Dropped requests stay dropped.
        assert!(fs.process_move_queue().is_empty());
    }

    #[test]
    fn drain_file_missing_in_source() {
        let mut fs = sample();
        fs.enqueue_move("documents", "pictures", "ghost.txt", Kind::File);
        let reports = fs.process_move_queue();
        assert_eq!(reports[0].outcome, MoveOutcome::FileMissing);
    }

    #[test]
    fn drain_removes_first_match_registry_wide() {
        // The same name in an earlier directory gets removed instead of
        // the source's copy.
        let mut fs = FileSystem::new();
        fs.insert_directory("early").expect("fresh");
        fs.insert_directory("source").expect("fresh");
        fs.insert_directory("dest").expect("fresh");
        fs.insert_file("early", "dup.txt", Kind::File).expect("fresh");
        fs.insert_file("source", "dup.txt", Kind::File).expect("fresh");

        fs.enqueue_move("source", "dest", "dup.txt", Kind::File);
        let reports = fs.process_move_queue();
        assert_eq!(reports[0].outcome, MoveOutcome::Moved);

        assert!(fs.contents("early").expect("exists").is_empty());
        assert!(fs.contents("source").expect("exists").find("dup.txt").is_some());
        assert!(fs.contents("dest").expect("exists").find("dup.txt").is_some());
    }

    #[test]
    fn drain_into_occupied_destination_loses_entry() {
        let mut fs = FileSystem::new();
        fs.insert_directory("src").expect("fresh");
        fs.insert_directory("dst").expect("fresh");
        fs.insert_file("src", "a.txt", Kind::File).expect("fresh");
        fs.insert_file("dst", "a.txt", Kind::File).expect("fresh");

        fs.enqueue_move("src", "dst", "a.txt", Kind::File);
        let reports = fs.process_move_queue();
        assert_eq!(reports[0].outcome, MoveOutcome::DestinationOccupied);

        // Removal had already happened; the moved entry is gone for good.
        assert!(fs.contents("src").expect("exists").is_empty());
        assert_eq!(names(fs.contents("dst").expect("exists")), vec!["a.txt"]);
    }

    #[test]
    fn sort_search_remove_scenario() {
        let mut fs = FileSystem::new();
        fs.insert_directory("documents").expect("fresh");
        fs.insert_directory("pictures").expect("fresh");
        fs.insert_file("documents", "b.txt", Kind::File).expect("fresh");
        fs.insert_file("documents", "a.txt", Kind::File).expect("fresh");

        fs.sort_directory("documents").expect("exists");
        assert_eq!(
            names(fs.contents("documents").expect("exists")),
            vec!["a.txt", "b.txt"]
        );

        assert!(fs.search("a.txt"));
        fs.remove("a.txt").expect("exists");
        assert!(fs.search("a.txt")); // still in the index

        assert_eq!(names(fs.contents("documents").expect("exists")), vec!["b.txt"]);
    }

    #[test]
    fn sort_missing_directory() {
        let mut fs = FileSystem::new();
        assert_eq!(
            fs.sort_directory("nope"),
            Err(FsError::DirectoryNotFound("nope".into()))
        );
    }
}
