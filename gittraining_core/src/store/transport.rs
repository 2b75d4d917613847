//! Injectable collaborators for the store adapter
//!
//! [`HttpTransport`] issues one HTTP request; [`Executor`] runs one
//! external command. Production implementations sit on reqwest and
//! `tokio::process`; tests substitute scripted mocks.

use async_trait::async_trait;

use crate::error::StoreError;

/// HTTP method subset the adapter needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One outbound HTTP request, fully described by data.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Status code plus body text. The body is kept as text so callers can
/// defer JSON parsing to the success branch only.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Issues a single HTTP request.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, StoreError>;
}

/// Production transport over a shared [`reqwest::Client`].
#[derive(Debug, Default, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, StoreError> {
        let transport_error = |url: &str, e: reqwest::Error| StoreError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        };
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        let response = builder
            .send()
            .await
            .map_err(|e| transport_error(&request.url, e))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(&request.url, e))?;
        Ok(HttpResponse { status, body })
    }
}

/// Captured output of one external command. Failure is reported through
/// `code`, never through a Rust-level error.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecOutput {
    pub stdout: String,
    pub stderr: String,
    pub code: i32,
}

/// Runs an external command and captures its output.
#[async_trait]
pub trait Executor: Send + Sync {
    async fn run(&self, command: &str, args: &[&str]) -> ExecOutput;
}

/// Production executor over `tokio::process::Command`.
///
/// A command that cannot be spawned at all is reported with code -1 and
/// the spawn failure in stderr.
#[derive(Debug, Default, Clone)]
pub struct TokioExecutor;

#[async_trait]
impl Executor for TokioExecutor {
    async fn run(&self, command: &str, args: &[&str]) -> ExecOutput {
        match tokio::process::Command::new(command)
            .args(args)
            .output()
            .await
        {
            Ok(output) => ExecOutput {
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                code: output.status.code().unwrap_or(-1),
            },
            Err(e) => ExecOutput {
                stdout: String::new(),
                stderr: e.to_string(),
                code: -1,
            },
        }
    }
}
