//! Core library for the gittraining tool
//!
//! Resolves a course descriptor and its email list into a roster of
//! per-student repository names, and drives bulk GitHub operations
//! (fork listing, fork creation, status polling) across that roster.
//!
//! The library owns no I/O of its own: file access, the outbound HTTP
//! transport, and local process execution are all consumed through
//! injectable traits so every piece can be exercised without touching
//! the network or the disk.

pub mod course;
pub mod error;
pub mod fileops;
pub mod roster;
pub mod sanitize;
pub mod store;

// Re-export main types
pub use course::{
    Course, CourseOptions, DEFAULT_COURSE_FILE, DEFAULT_EMAILS_FILE, EmailSource, EnvLookup,
    FileEmailSource, ProcessEnv, RawCourse, RawCourseSource, ValidatedCourseSource,
    course_file_name, emails_file_name, resolve_course, resolve_course_with_env,
};
pub use error::{CourseError, Error, FileOpsError, Result, StoreError};
pub use fileops::{DiskFileOps, FileOps};
pub use roster::for_each_student;
pub use sanitize::{EmailRecord, clean, repo_name};
pub use store::{
    ExecOutput, Executor, ForkResult, GitStore, GithubStore, HttpRequest, HttpResponse,
    HttpTransport, ListForksResult, Method, RemoteResult, ReqwestTransport, StatusResult,
    TokioExecutor,
};
