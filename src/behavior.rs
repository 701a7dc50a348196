use crate::context::Context;
use crate::entry::Kind;
use crate::error::FsError;
use crate::fs::FileSystem;
use crate::op::Op;
use crate::queue::MoveOutcome;
use std::io::{Result, Write};

/// Steps that rewrite directory/entry state snapshot the store first, so
/// one `--undo` steps back over exactly one of them. `--mv` only queues a
/// request (snapshots don't capture the queue), and `--search`/listing
/// steps change nothing worth undoing.
fn mutates(op: &Op) -> bool {
    match op {
        Op::Seed
        | Op::Mkdir(_)
        | Op::Touch { .. }
        | Op::Rm(_)
        | Op::Drain
        | Op::Rename { .. }
        | Op::Cp { .. }
        | Op::Sort(_) => true,
        Op::Search(_) | Op::Mv { .. } | Op::Tree | Op::Ls(_) | Op::Undo | Op::Dump => false,
    }
}

/// The bootstrap data set: three directories, two files each.
fn seed(fs: &mut FileSystem) -> std::result::Result<(), FsError> {
    for (dir, files) in [
        ("documents", ["resume.docx", "presentation.pptx"]),
        ("pictures", ["vacation.jpg", "family.jpg"]),
        ("music", ["song1.mp3", "song2.mp3"]),
    ] {
        fs.insert_directory(dir)?;
        for file in files {
            fs.insert_file(dir, file, Kind::File)?;
        }
    }
    Ok(())
}

/// Run one step, narrating the outcome. Reported store conditions go to
/// stderr and never abort the pipeline; only I/O trouble on the logger
/// itself bubbles up.
pub fn exec_step(ctx: &mut Context, op: &Op) -> Result<()> {
    if mutates(op) {
        ctx.fs.backup();
    }
    match op {
        Op::Seed => match seed(&mut ctx.fs) {
            Ok(()) => writeln!(ctx.log.stdout, "Seeded sample directories.")?,
            Err(e) => writeln!(ctx.log.stderr, "{}", e)?,
        },
        Op::Mkdir(name) => match ctx.fs.insert_directory(name) {
            Ok(()) => writeln!(ctx.log.stdout, "Directory '{}' created.", name)?,
            Err(e) => writeln!(ctx.log.stderr, "{}", e)?,
        },
        Op::Touch { dir, file } => match ctx.fs.insert_file(dir, file, Kind::File) {
            Ok(()) => writeln!(ctx.log.stdout, "File '{}' added to '{}'.", file, dir)?,
            Err(e) => writeln!(ctx.log.stderr, "{}", e)?,
        },
        Op::Search(file) => match ctx.fs.search(file) {
            true => writeln!(ctx.log.stdout, "File found: {}", file)?,
            false => writeln!(ctx.log.stdout, "File not found: {}", file)?,
        },
        Op::Rm(file) => match ctx.fs.remove(file) {
            Ok(()) => writeln!(ctx.log.stdout, "File '{}' removed.", file)?,
            Err(e) => writeln!(ctx.log.stderr, "{}", e)?,
        },
        Op::Mv {
            source,
            destination,
            file,
        } => {
            ctx.fs.enqueue_move(source, destination, file, Kind::File);
            writeln!(
                ctx.log.stdout,
                "Queued move of '{}' from '{}' to '{}'.",
                file, source, destination
            )?;
        }
        Op::Drain => {
            for report in ctx.fs.process_move_queue() {
                match report.outcome {
                    MoveOutcome::Moved => writeln!(ctx.log.stdout, "{}", report)?,
                    _ => writeln!(ctx.log.stderr, "{}", report)?,
                }
            }
        }
        Op::Tree => {
            for dir in ctx.fs.registry().directories() {
                writeln!(ctx.log.stdout, "Directory: {}", dir.name())?;
                for entry in dir.entries() {
                    writeln!(ctx.log.stdout, "- {} ({})", entry.name, entry.kind.label())?;
                }
            }
        }
        Op::Ls(dir) => match ctx.fs.contents(dir) {
            Ok(listing) if listing.is_empty() => {
                writeln!(ctx.log.stdout, "Directory '{}' is empty.", dir)?
            }
            Ok(listing) => {
                writeln!(ctx.log.stdout, "Contents of directory '{}':", dir)?;
                for entry in listing.entries() {
                    writeln!(ctx.log.stdout, "- {} ({})", entry.name, entry.kind.label())?;
                }
            }
            Err(e) => writeln!(ctx.log.stderr, "{}", e)?,
        },
        Op::Rename { old, new } => match ctx.fs.rename_directory(old, new) {
            Ok(()) => writeln!(
                ctx.log.stdout,
                "Directory '{}' renamed to '{}'.",
                old, new
            )?,
            Err(e) => writeln!(ctx.log.stderr, "{}", e)?,
        },
        Op::Cp { file, destination } => match ctx.fs.copy_file(file, destination) {
            Ok(copied) => writeln!(ctx.log.stdout, "File copied as '{}'.", copied)?,
            Err(e) => writeln!(ctx.log.stderr, "{}", e)?,
        },
        Op::Sort(dir) => match ctx.fs.sort_directory(dir) {
            Ok(()) => writeln!(
                ctx.log.stdout,
                "Files in directory '{}' sorted successfully.",
                dir
            )?,
            Err(e) => writeln!(ctx.log.stderr, "{}", e)?,
        },
        Op::Undo => match ctx.fs.restore() {
            Ok(()) => writeln!(ctx.log.stdout, "Previous structure restored.")?,
            Err(e) => writeln!(ctx.log.stderr, "{}", e)?,
        },
        Op::Dump => {
            let json = serde_json::to_string_pretty(ctx.fs.registry())?;
            writeln!(ctx.log.stdout, "{}", json)?;
        }
    }
    Ok(())
}

// The flow API for contexts; the pipeline ops, chainable from test and
// driver code alike.
impl Context<'_> {
    pub fn seed(&mut self) -> Result<&mut Self> {
        self.apply(&Op::Seed)?;
        Ok(self)
    }

    pub fn mkdir(&mut self, name: impl AsRef<str>) -> Result<&mut Self> {
        self.apply(&Op::Mkdir(name.as_ref().into()))?;
        Ok(self)
    }

    pub fn touch(&mut self, dir: impl AsRef<str>, file: impl AsRef<str>) -> Result<&mut Self> {
        self.apply(&Op::Touch {
            dir: dir.as_ref().into(),
            file: file.as_ref().into(),
        })?;
        Ok(self)
    }

    pub fn search(&mut self, file: impl AsRef<str>) -> Result<&mut Self> {
        self.apply(&Op::Search(file.as_ref().into()))?;
        Ok(self)
    }

    pub fn rm(&mut self, file: impl AsRef<str>) -> Result<&mut Self> {
        self.apply(&Op::Rm(file.as_ref().into()))?;
        Ok(self)
    }

    pub fn mv(
        &mut self,
        source: impl AsRef<str>,
        destination: impl AsRef<str>,
        file: impl AsRef<str>,
    ) -> Result<&mut Self> {
        self.apply(&Op::Mv {
            source: source.as_ref().into(),
            destination: destination.as_ref().into(),
            file: file.as_ref().into(),
        })?;
        Ok(self)
    }

    pub fn drain(&mut self) -> Result<&mut Self> {
        self.apply(&Op::Drain)?;
        Ok(self)
    }

    pub fn tree(&mut self) -> Result<&mut Self> {
        self.apply(&Op::Tree)?;
        Ok(self)
    }

    pub fn ls(&mut self, dir: impl AsRef<str>) -> Result<&mut Self> {
        self.apply(&Op::Ls(dir.as_ref().into()))?;
        Ok(self)
    }

    pub fn rename(&mut self, old: impl AsRef<str>, new: impl AsRef<str>) -> Result<&mut Self> {
        self.apply(&Op::Rename {
            old: old.as_ref().into(),
            new: new.as_ref().into(),
        })?;
        Ok(self)
    }

    pub fn cp(&mut self, file: impl AsRef<str>, destination: impl AsRef<str>) -> Result<&mut Self> {
        self.apply(&Op::Cp {
            file: file.as_ref().into(),
            destination: destination.as_ref().into(),
        })?;
        Ok(self)
    }

    pub fn sort(&mut self, dir: impl AsRef<str>) -> Result<&mut Self> {
        self.apply(&Op::Sort(dir.as_ref().into()))?;
        Ok(self)
    }

    pub fn undo(&mut self) -> Result<&mut Self> {
        self.apply(&Op::Undo)?;
        Ok(self)
    }

    pub fn dump(&mut self) -> Result<&mut Self> {
        self.apply(&Op::Dump)?;
        Ok(self)
    }
}
