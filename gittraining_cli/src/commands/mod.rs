//! Command orchestrators
//!
//! One module per command family. Each orchestrator resolves the
//! course through the core pipeline, runs its operation, and prints
//! the outcome; all wiring (file ops, store, options) arrives through
//! [`CommandContext`].

pub mod course;
pub mod emails;
pub mod git;
pub mod local;

use std::sync::Arc;

use anyhow::Result;
use gittraining_core::{Course, CourseOptions, FileOps, GitStore, ProcessEnv};

/// Everything a command needs to run.
pub struct CommandContext {
    pub file_ops: Arc<dyn FileOps>,
    pub store: Arc<dyn GitStore>,
    pub opts: CourseOptions,
}

/// Resolve the course with the default pipeline and the process
/// environment.
pub async fn resolve(context: &CommandContext) -> Result<Course> {
    let course = gittraining_core::resolve_course_with_env(
        context.file_ops.as_ref(),
        ProcessEnv,
        &context.opts,
    )
    .await?;
    Ok(course)
}
