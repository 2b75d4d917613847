//! Test utilities for gittraining
//!
//! Mock implementations of the injectable collaborators (file access,
//! HTTP transport, process execution) plus small builders for course
//! fixtures.

pub mod builders;
pub mod mocks;

// Re-export commonly used types
pub use builders::CourseFileBuilder;
pub use mocks::{MockExecutor, MockFileOps, MockTransport};
