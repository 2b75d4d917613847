//! Course resolution pipeline
//!
//! Turns a raw course descriptor file plus an email list into one
//! fully-resolved [`Course`]:
//!
//! 1. load the course file (explicit override or `course.json`)
//! 2. dereference `${env.NAME}` placeholders against an injected lookup
//! 3. parse the JSON into [`RawCourse`]
//! 4. validate required fields, aggregating every violation
//! 5. derive the roster from the email list (in-memory list wins over
//!    any file), preserving line order
//!
//! The two halves, "load and validate the raw course" and "derive the
//! email list", are injectable via [`RawCourseSource`] and
//! [`EmailSource`] so either can be substituted without touching the
//! composition in [`resolve_course`].

use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::CourseError;
use crate::fileops::FileOps;
use crate::sanitize::EmailRecord;

/// Default course descriptor file name.
pub const DEFAULT_COURSE_FILE: &str = "course.json";
/// Default email list file name. One raw email per line, blank lines
/// ignored; not actually CSV despite the extension.
pub const DEFAULT_EMAILS_FILE: &str = "emails.csv";

/// Read-only key/value lookup used to dereference placeholders.
///
/// Production code passes [`ProcessEnv`]; tests pass a fixed map.
pub trait EnvLookup: Send + Sync {
    fn get(&self, name: &str) -> Option<String>;
}

/// [`EnvLookup`] over the process environment.
#[derive(Debug, Default, Clone)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvLookup for std::collections::HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        std::collections::HashMap::get(self, name).cloned()
    }
}

/// Options handed down from the command line.
#[derive(Debug, Default, Clone)]
pub struct CourseOptions {
    /// Course file override; default is [`DEFAULT_COURSE_FILE`].
    pub course: Option<String>,
    /// Email file override; default is the course's own `emailFile`.
    pub email_file: Option<String>,
    /// Explicit in-memory email list. When present no email file is
    /// read at all.
    pub emails: Option<Vec<String>>,
}

/// The course descriptor as it appears on disk, before validation.
///
/// Field names mirror the JSON file (`rootOwner`, `emailFile`, ...).
/// Any field may still be absent at this stage.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RawCourse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organisation: Option<String>,
    #[serde(rename = "rootOwner", skip_serializing_if = "Option::is_none")]
    pub root_owner: Option<String>,
    #[serde(rename = "rootRepo", skip_serializing_if = "Option::is_none")]
    pub root_repo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(rename = "emailFile", skip_serializing_if = "Option::is_none")]
    pub email_file: Option<String>,
}

/// A fully-resolved course: every field present and non-empty, plus the
/// derived roster. Immutable after resolution.
#[derive(Debug, Clone, Serialize)]
pub struct Course {
    pub title: String,
    pub organisation: String,
    #[serde(rename = "rootOwner")]
    pub root_owner: String,
    #[serde(rename = "rootRepo")]
    pub root_repo: String,
    pub token: String,
    #[serde(rename = "emailFile")]
    pub email_file: String,
    pub emails: Vec<EmailRecord>,
}

/// Course file to read: explicit override, else the default.
pub fn course_file_name(opts: &CourseOptions) -> String {
    opts.course
        .clone()
        .unwrap_or_else(|| DEFAULT_COURSE_FILE.to_string())
}

/// Email file to read: explicit override, else the course's own
/// reference, else the default.
pub fn emails_file_name(raw: &RawCourse, opts: &CourseOptions) -> String {
    opts.email_file
        .clone()
        .or_else(|| raw.email_file.clone())
        .unwrap_or_else(|| DEFAULT_EMAILS_FILE.to_string())
}

/// Load a file, wrapping any failure in the user-actionable
/// [`CourseError::FileAccess`] message for `context` ("course" or
/// "emails").
pub async fn load_file(
    file_ops: &dyn FileOps,
    context: &str,
    file: &str,
) -> Result<String, CourseError> {
    file_ops
        .load(file)
        .await
        .map_err(|cause| CourseError::file_access(context, file, cause))
}

/// Substitute every `${env.NAME}` placeholder in `text`.
///
/// An unresolved placeholder is an error, never left as literal text.
/// `${` without a closing brace is not treated as a placeholder.
pub fn deref(file: &str, text: &str, env: &dyn EnvLookup) -> Result<String, CourseError> {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            out.push_str("${");
            rest = after;
            continue;
        };
        let placeholder = &after[..end];
        let value = placeholder
            .strip_prefix("env.")
            .and_then(|name| env.get(name));
        match value {
            Some(value) => out.push_str(&value),
            None => {
                return Err(CourseError::Dereference {
                    file: file.to_string(),
                    placeholder: placeholder.to_string(),
                });
            }
        }
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

fn missing(name: &'static str, value: &Option<String>, errors: &mut Vec<String>) {
    if value.as_deref().is_none_or(|v| v.is_empty()) {
        errors.push(name.to_string());
    }
}

/// Names of every missing or empty required field, in a fixed order.
pub fn validate_raw_course(raw: &RawCourse) -> Vec<String> {
    let mut errors = Vec::new();
    missing("emailFile", &raw.email_file, &mut errors);
    missing("rootOwner", &raw.root_owner, &mut errors);
    missing("rootRepo", &raw.root_repo, &mut errors);
    missing("title", &raw.title, &mut errors);
    missing("token", &raw.token, &mut errors);
    missing("organisation", &raw.organisation, &mut errors);
    errors
}

/// First pipeline step: produce a validated [`RawCourse`].
#[async_trait]
pub trait RawCourseSource: Send + Sync {
    async fn load_raw(
        &self,
        file_ops: &dyn FileOps,
        opts: &CourseOptions,
    ) -> Result<RawCourse, CourseError>;
}

/// Second pipeline step: derive the roster for a validated course.
#[async_trait]
pub trait EmailSource: Send + Sync {
    async fn emails(
        &self,
        file_ops: &dyn FileOps,
        raw: &RawCourse,
        opts: &CourseOptions,
        organisation: &str,
    ) -> Result<Vec<EmailRecord>, CourseError>;
}

/// Default [`RawCourseSource`]: load, dereference, parse, validate.
pub struct ValidatedCourseSource<E> {
    env: E,
}

impl<E: EnvLookup> ValidatedCourseSource<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }
}

#[async_trait]
impl<E: EnvLookup> RawCourseSource for ValidatedCourseSource<E> {
    async fn load_raw(
        &self,
        file_ops: &dyn FileOps,
        opts: &CourseOptions,
    ) -> Result<RawCourse, CourseError> {
        let file = course_file_name(opts);
        debug!("loading course file {file}");
        let text = load_file(file_ops, "course", &file).await?;
        let text = deref(&file, &text, &self.env)?;
        let raw: RawCourse =
            serde_json::from_str(&text).map_err(|e| CourseError::parse(&file, e))?;
        let errors = validate_raw_course(&raw);
        if !errors.is_empty() {
            return Err(CourseError::Validation {
                file,
                fields: errors,
            });
        }
        Ok(raw)
    }
}

/// Default [`EmailSource`]: an explicit in-memory list wins; otherwise
/// the email file is read, split into lines, blanks dropped, and each
/// line sanitized into an [`EmailRecord`] in file order.
#[derive(Debug, Default)]
pub struct FileEmailSource;

#[async_trait]
impl EmailSource for FileEmailSource {
    async fn emails(
        &self,
        file_ops: &dyn FileOps,
        raw: &RawCourse,
        opts: &CourseOptions,
        organisation: &str,
    ) -> Result<Vec<EmailRecord>, CourseError> {
        if let Some(emails) = &opts.emails {
            return Ok(emails
                .iter()
                .filter(|email| !email.is_empty())
                .map(|email| EmailRecord::derive(organisation, email))
                .collect());
        }
        let file = emails_file_name(raw, opts);
        debug!("loading emails file {file}");
        let text = load_file(file_ops, "emails", &file).await?;
        Ok(text
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| EmailRecord::derive(organisation, line))
            .collect())
    }
}

/// Compose the two pipeline steps into a resolved [`Course`].
pub async fn resolve_course(
    raw_source: &dyn RawCourseSource,
    email_source: &dyn EmailSource,
    file_ops: &dyn FileOps,
    opts: &CourseOptions,
) -> Result<Course, CourseError> {
    let raw = raw_source.load_raw(file_ops, opts).await?;
    // Validation in the raw source guarantees the defaults below never fire.
    let organisation = raw.organisation.clone().unwrap_or_default();
    let email_file = emails_file_name(&raw, opts);
    let emails = email_source
        .emails(file_ops, &raw, opts, &organisation)
        .await?;
    Ok(Course {
        title: raw.title.unwrap_or_default(),
        organisation,
        root_owner: raw.root_owner.unwrap_or_default(),
        root_repo: raw.root_repo.unwrap_or_default(),
        token: raw.token.unwrap_or_default(),
        email_file,
        emails,
    })
}

/// Resolve with the default pipeline steps.
pub async fn resolve_course_with_env(
    file_ops: &dyn FileOps,
    env: impl EnvLookup,
    opts: &CourseOptions,
) -> crate::Result<Course> {
    let course = resolve_course(
        &ValidatedCourseSource::new(env),
        &FileEmailSource,
        file_ops,
        opts,
    )
    .await?;
    Ok(course)
}
