//! Error types for the generation pipeline.

use crate::hierarchy::ResolveError;
use std::path::PathBuf;

/// A fatal generation failure. Filesystem and configuration errors are
/// propagated unrecovered; unsupported annotation kinds are not errors at
/// all (they are silently skipped during conversion).
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("custom annotation '{annotation}' names decorator '{decorator}' which is not present under the custom decorator root")]
    UnknownCustomDecorator {
        annotation: String,
        decorator: String,
    },

    #[error("custom decorator '{name}' source file {path} does not exist")]
    MissingDecoratorSource { name: String, path: PathBuf },

    #[error("filesystem operation failed at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenerateError::Io {
            path: path.into(),
            source,
        }
    }
}
