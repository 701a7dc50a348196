use std::fmt;

/// Reported, non-fatal conditions. The store stays usable after any of
/// these; nothing is retried automatically.
#[derive(Debug, PartialEq, Clone)]
pub enum FsError {
    DuplicateDirectory(String),
    DuplicateFile { dir: String, file: String },
    DirectoryNotFound(String),
    FileNotFound(String),
    EmptyBackupStack,
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::DuplicateDirectory(name) => {
                write!(f, "Directory '{}' already exists.", name)
            }
            Self::DuplicateFile { dir, file } => {
                write!(f, "File '{}' already exists in directory '{}'.", file, dir)
            }
            Self::DirectoryNotFound(name) => write!(f, "Directory '{}' not found.", name),
            Self::FileNotFound(name) => write!(f, "File '{}' not found.", name),
            Self::EmptyBackupStack => write!(f, "No backup available."),
        }
    }
}

impl std::error::Error for FsError {}

impl From<FsError> for std::io::Error {
    fn from(e: FsError) -> Self {
        Self::other(e)
    }
}
