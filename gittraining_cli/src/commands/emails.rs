//! `emails list`, `emails add` and `emails remove`
//!
//! Add and remove go through full course resolution first, so the
//! organisation is known and the write targets the same file the read
//! used. The file stores raw addresses only, one per line.

use anyhow::Result;
use gittraining_core::Course;
use log::debug;

use crate::commands::{CommandContext, resolve};

/// Print each roster entry as one JSON line.
pub async fn list(context: &CommandContext) -> Result<()> {
    let course = resolve(context).await?;
    for record in &course.emails {
        println!("{}", serde_json::to_string(record)?);
    }
    Ok(())
}

/// Add an email to the list; a duplicate is a no-op.
pub async fn add(context: &CommandContext, email: &str) -> Result<()> {
    let course = resolve(context).await?;
    let mut emails: Vec<String> = course.emails.iter().map(|e| e.email.clone()).collect();
    if emails.iter().any(|e| e == email) {
        debug!("{email} already present, leaving the list unchanged");
    } else {
        emails.push(email.to_string());
    }
    save_emails(context, &course, &emails).await
}

/// Remove an email from the list; an absent email is a no-op.
pub async fn remove(context: &CommandContext, email: &str) -> Result<()> {
    let course = resolve(context).await?;
    let emails: Vec<String> = course
        .emails
        .iter()
        .map(|e| e.email.clone())
        .filter(|e| e != email)
        .collect();
    save_emails(context, &course, &emails).await
}

async fn save_emails(context: &CommandContext, course: &Course, emails: &[String]) -> Result<()> {
    let contents = emails
        .iter()
        .filter(|e| !e.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join("\n");
    context.file_ops.save(&course.email_file, &contents).await?;
    Ok(())
}
