use crate::entry::Entry;
use crate::error::FsError;
use serde::{Deserialize, Serialize};

/// A named container of entries, unique by name within the registry.
///
/// Entries keep insertion order unless the directory is explicitly sorted.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Directory {
    name: String,
    entries: Vec<Entry>,
}

impl Directory {
    fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().into(),
            entries: vec![],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Linear scan within this directory only.
    pub fn find(&self, filename: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.name == filename)
    }

    /// Append without a duplicate check. The copy path relies on this: it
    /// has already picked a collision-free name, and appends done here
    /// never touch the name index.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Append with the uniqueness check that normal inserts go through.
    pub fn insert(&mut self, entry: Entry) -> Result<(), FsError> {
        if self.find(&entry.name).is_some() {
            return Err(FsError::DuplicateFile {
                dir: self.name.clone(),
                file: entry.name,
            });
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Reorder entries by name, ascending.
    pub fn sort(&mut self) {
        self.entries = crate::sort::quicksort(std::mem::take(&mut self.entries));
    }
}

/// The flat, ordered collection of directories. Directories are appended
/// in creation order and never explicitly deleted; they only go away when
/// the whole registry is torn down or replaced by a restore.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct Registry {
    directories: Vec<Directory>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn directories(&self) -> &[Directory] {
        &self.directories
    }

    pub fn find(&self, name: &str) -> Option<&Directory> {
        self.directories.iter().find(|d| d.name == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Directory> {
        self.directories.iter_mut().find(|d| d.name == name)
    }

    pub fn insert_directory(&mut self, name: &str) -> Result<(), FsError> {
        if self.find(name).is_some() {
            return Err(FsError::DuplicateDirectory(name.into()));
        }
        self.directories.push(Directory::new(name));
        Ok(())
    }

    /// Change a directory's key in place. Position and contents stay put.
    pub fn rename_directory(&mut self, old: &str, new: &str) -> Result<(), FsError> {
        if self.find(old).is_none() {
            return Err(FsError::DirectoryNotFound(old.into()));
        }
        if self.find(new).is_some() {
            return Err(FsError::DuplicateDirectory(new.into()));
        }
        if let Some(dir) = self.find_mut(old) {
            dir.name = new.into();
        }
        Ok(())
    }

    /// Remove the first entry named `filename` anywhere in registry order,
    /// then stop. Duplicates in later directories survive.
    pub fn remove_first(&mut self, filename: &str) -> bool {
        for dir in &mut self.directories {
            if let Some(pos) = dir.entries.iter().position(|e| e.name == filename) {
                dir.entries.remove(pos);
                return true;
            }
        }
        false
    }

    /// First entry matching `filename` across all directories, in registry
    /// order. First match wins.
    pub fn find_entry(&self, filename: &str) -> Option<(&Directory, &Entry)> {
        self.directories
            .iter()
            .find_map(|d| d.find(filename).map(|e| (d, e)))
    }

    pub fn clear(&mut self) {
        self.directories.clear();
    }
}
