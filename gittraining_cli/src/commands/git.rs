//! `git listforks`, `git fork` and `git status`
//!
//! Fork and status fan out over the whole roster concurrently; the
//! printed JSON carries one entry per student in roster order, with
//! per-student failures inline next to the successes.

use anyhow::Result;
use gittraining_core::for_each_student;

use crate::commands::{CommandContext, resolve};

/// List all forks of the root repo.
pub async fn list_forks(context: &CommandContext) -> Result<()> {
    let course = resolve(context).await?;
    let forks = context
        .store
        .list_forks(&course.root_owner, &course.root_repo)
        .await;
    println!("{}", serde_json::to_string(&forks)?);
    Ok(())
}

/// Fork the root repo once per student.
pub async fn fork(context: &CommandContext) -> Result<()> {
    let course = resolve(context).await?;
    let results = for_each_student(&course, |record| {
        context.store.fork(
            &course.root_owner,
            &course.root_repo,
            &course.organisation,
            &record.clean,
            &course.token,
        )
    })
    .await;
    println!("{}", serde_json::to_string(&results)?);
    Ok(())
}

/// Report the status of each student's repo.
pub async fn status(context: &CommandContext) -> Result<()> {
    let course = resolve(context).await?;
    let results = for_each_student(&course, |record| {
        context.store.status(&course.organisation, &record.clean)
    })
    .await;
    println!("{}", serde_json::to_string(&results)?);
    Ok(())
}
