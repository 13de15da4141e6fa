use std::{fmt, path::PathBuf};

#[derive(Debug)]
pub enum DetectionError {
    /// The classifier file is missing, unreadable, or not a cascade.
    ClassifierLoad { path: PathBuf, reason: String },
}

impl fmt::Display for DetectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClassifierLoad { path, reason } => {
                write!(f, "Failed to load classifier {}: {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for DetectionError {}
