//! Error types for the gittraining core library
//!
//! Errors are split by the stage that produces them: file access,
//! course resolution, and local git invocations. Remote HTTP failures
//! are deliberately *not* represented here; they travel as data inside
//! [`crate::store::RemoteResult`] so one failing student never aborts
//! the rest of a batch.

use thiserror::Error;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the gittraining core library
#[derive(Error, Debug)]
pub enum Error {
    /// Course resolution errors
    #[error(transparent)]
    Course(#[from] CourseError),

    /// Local git command errors
    #[error(transparent)]
    Store(#[from] StoreError),

    /// File access errors
    #[error(transparent)]
    FileOps(#[from] FileOpsError),
}

/// Errors raised by the file access collaborator
#[derive(Error, Debug)]
pub enum FileOpsError {
    /// The requested file does not exist
    #[error("file not found: {path}")]
    NotFound { path: String },

    /// The file exists but could not be read or written
    #[error("could not access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FileOpsError {
    pub fn from_std(path: &str, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound {
                path: path.to_string(),
            },
            _ => Self::Io {
                path: path.to_string(),
                source,
            },
        }
    }
}

/// Errors raised while resolving a course descriptor into a [`crate::Course`]
///
/// Every variant carries the file it relates to so the user sees a
/// single actionable message rather than a bare cause.
#[derive(Error, Debug)]
pub enum CourseError {
    /// A course or emails file could not be loaded.
    ///
    /// The message names the file and the init command that creates it,
    /// so a fresh checkout gets a recipe instead of a raw I/O error.
    #[error(
        "could not load {file}\n\nyou can create a new {file} using the command: gittraining {context} init\n\ncause: {cause}"
    )]
    FileAccess {
        context: String,
        file: String,
        cause: String,
    },

    /// A `${env.NAME}` placeholder referenced a variable that is not set
    #[error("{file}: cannot resolve placeholder ${{{placeholder}}}")]
    Dereference { file: String, placeholder: String },

    /// The course file is not structurally valid JSON
    #[error("{file}: invalid course file: {message}")]
    Parse { file: String, message: String },

    /// One or more required course fields are missing or empty.
    ///
    /// All offending fields are aggregated into one error.
    #[error("course file {file} is invalid, missing or empty: {}", .fields.join(", "))]
    Validation { file: String, fields: Vec<String> },
}

impl CourseError {
    pub fn file_access(context: &str, file: &str, cause: impl std::fmt::Display) -> Self {
        Self::FileAccess {
            context: context.to_string(),
            file: file.to_string(),
            cause: cause.to_string(),
        }
    }

    pub fn parse(file: &str, message: impl std::fmt::Display) -> Self {
        Self::Parse {
            file: file.to_string(),
            message: message.to_string(),
        }
    }
}

/// Errors raised by the remote store adapter
#[derive(Error, Debug)]
pub enum StoreError {
    /// A local git invocation exited non-zero or produced no output
    #[error("{command} failed with code {code} and stderr {stderr}")]
    GitCommand {
        command: String,
        code: i32,
        stderr: String,
    },

    /// The HTTP transport failed before a status code was available
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
}
