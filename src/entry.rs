use serde::{Deserialize, Serialize};

/// Whether an entry stands for a plain file or a nested directory marker.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    File,
    Directory,
}

impl Kind {
    pub fn is_dir(&self) -> bool {
        match self {
            Self::File => false,
            Self::Directory => true,
        }
    }

    /// Human-facing label, as shown in directory listings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::File => "File",
            Self::Directory => "Directory",
        }
    }
}

/// A named file-or-marker, owned by exactly one directory at a time.
///
/// Names are unique within one directory but not across the registry: the
/// same filename may live in two directories at once.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub kind: Kind,
}

impl Entry {
    pub fn new(name: impl AsRef<str>, kind: Kind) -> Self {
        Self {
            name: name.as_ref().into(),
            kind: kind,
        }
    }
}
