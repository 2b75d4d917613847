//! `course init` and `course list`

use anyhow::{Result, bail};
use gittraining_core::course::{RawCourse, course_file_name, emails_file_name};

use crate::commands::{CommandContext, resolve};

/// Create a template course file plus an empty emails file.
///
/// The template carries a literal `${env.GITHUB_TOKEN}` placeholder so
/// the token never lands on disk; it is resolved from the environment
/// on every load.
pub async fn init(context: &CommandContext, force: bool) -> Result<()> {
    create_course_file(context, force).await?;
    create_emails_file(context, force).await
}

async fn create_course_file(context: &CommandContext, force: bool) -> Result<()> {
    let file = course_file_name(&context.opts);
    if context.file_ops.exists(&file).await && !force {
        bail!("{file} already exists. Use --force to overwrite");
    }
    println!("creating {file}");
    let template = RawCourse {
        title: Some("Untitled".to_string()),
        organisation: Some("training-demo-for-phil".to_string()),
        root_owner: Some("phil-rice".to_string()),
        root_repo: Some("javaoptics".to_string()),
        token: Some("${env.GITHUB_TOKEN}".to_string()),
        email_file: Some(emails_file_name(&RawCourse::default(), &context.opts)),
    };
    let contents = serde_json::to_string_pretty(&template)?;
    context.file_ops.save(&file, &contents).await?;
    Ok(())
}

async fn create_emails_file(context: &CommandContext, force: bool) -> Result<()> {
    let file = emails_file_name(&RawCourse::default(), &context.opts);
    if context.file_ops.exists(&file).await && !force {
        bail!("{file} already exists. Use --force to overwrite");
    }
    println!("creating {file}");
    context.file_ops.save(&file, "").await?;
    Ok(())
}

/// Print the fully-resolved course as JSON.
pub async fn list(context: &CommandContext) -> Result<()> {
    let course = resolve(context).await?;
    println!("{}", serde_json::to_string(&course)?);
    Ok(())
}
