//! `local branch` and `local repo`

use anyhow::Result;

use crate::commands::CommandContext;

/// Print the current branch of the local checkout.
pub async fn branch(context: &CommandContext) -> Result<()> {
    let branch = context.store.current_branch().await?;
    println!("{branch}");
    Ok(())
}

/// Print the origin URL of the local checkout.
pub async fn repo(context: &CommandContext) -> Result<()> {
    let repo = context.store.current_repo().await?;
    println!("{repo}");
    Ok(())
}
