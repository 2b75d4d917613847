//! GitHub-backed [`GitStore`] implementation
//!
//! Success is classified purely by status code (< 300); the response
//! body is only parsed as JSON on the success branch, so a non-JSON
//! error body can never turn into a parse failure.

use async_trait::async_trait;
use log::debug;

use crate::error::StoreError;
use crate::store::transport::{Executor, HttpRequest, HttpResponse, HttpTransport};
use crate::store::{ForkResult, GitStore, ListForksResult, RemoteResult, StatusResult};

/// Base URL of the GitHub REST API.
pub const GITHUB_API: &str = "https://api.github.com";

/// [`GitStore`] over an HTTP transport and a process executor.
pub struct GithubStore<T, E> {
    pub transport: T,
    executor: E,
}

impl<T: HttpTransport, E: Executor> GithubStore<T, E> {
    pub fn new(transport: T, executor: E) -> Self {
        Self {
            transport,
            executor,
        }
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, StoreError> {
        debug!("{:?} {}", request.method, request.url);
        self.transport.send(request).await
    }

    /// Run a git command expected to print one meaningful line.
    async fn git_line(&self, args: &[&str]) -> Result<String, StoreError> {
        let output = self.executor.run("git", args).await;
        let command = format!("git {}", args.join(" "));
        if output.code != 0 || output.stdout.trim().is_empty() {
            return Err(StoreError::GitCommand {
                command,
                code: output.code,
                stderr: output.stderr,
            });
        }
        Ok(output.stdout.trim().to_string())
    }
}

#[async_trait]
impl<T: HttpTransport, E: Executor> GitStore for GithubStore<T, E> {
    async fn list_forks(&self, owner: &str, repo: &str) -> ListForksResult {
        // Failures still carry an empty fork list so consumers always
        // see a forks collection, populated or not.
        let failed = |status: u16, error: String| ListForksResult {
            status_code: status,
            payload: Some(Vec::new()),
            error: Some(error),
        };
        let url = format!("{GITHUB_API}/repos/{owner}/{repo}/forks");
        let response = match self.send(HttpRequest::get(url)).await {
            Ok(response) => response,
            Err(e) => return failed(0, e.to_string()),
        };
        if response.status >= 300 {
            return failed(response.status, response.body);
        }
        match serde_json::from_str::<Vec<serde_json::Value>>(&response.body) {
            Ok(items) => RemoteResult::success(
                response.status,
                items
                    .iter()
                    .filter_map(|item| item.get("full_name").and_then(|n| n.as_str()))
                    .map(String::from)
                    .collect(),
            ),
            Err(e) => failed(response.status, format!("unexpected forks body: {e}")),
        }
    }

    async fn fork(
        &self,
        owner: &str,
        repo: &str,
        organisation: &str,
        new_repo: &str,
        token: &str,
    ) -> ForkResult {
        let url = format!("{GITHUB_API}/repos/{owner}/{repo}/forks");
        let body = serde_json::json!({
            "organisation": organisation,
            "name": new_repo,
            "default_branch_only": false,
        });
        let request = HttpRequest::post(url)
            .header("Authorization", format!("Bearer {token}"))
            .header("Content-Type", "application/json")
            .header("Accept", "application/vnd.github+json")
            .body(body.to_string());
        let result = match self.send(request).await {
            Err(e) => RemoteResult::failure(0, e.to_string()),
            Ok(response) if response.status < 300 => {
                match serde_json::from_str(&response.body) {
                    Ok(data) => RemoteResult::success(response.status, data),
                    Err(e) => RemoteResult::failure(
                        response.status,
                        format!("unexpected fork body: {e}"),
                    ),
                }
            }
            Ok(response) => RemoteResult::failure(response.status, response.body),
        };
        ForkResult {
            new_repo: new_repo.to_string(),
            result,
        }
    }

    async fn status(&self, organisation: &str, repo: &str) -> StatusResult {
        let url = format!("{GITHUB_API}/repos/{organisation}/{repo}");
        match self.send(HttpRequest::get(url)).await {
            Err(e) => RemoteResult::failure(0, e.to_string()),
            Ok(response) if response.status < 300 => match serde_json::from_str(&response.body) {
                Ok(data) => RemoteResult::success(response.status, data),
                Err(e) => {
                    RemoteResult::failure(response.status, format!("unexpected status body: {e}"))
                }
            },
            Ok(response) => RemoteResult::failure(response.status, response.body),
        }
    }

    async fn current_branch(&self) -> Result<String, StoreError> {
        self.git_line(&["branch", "--show-current"]).await
    }

    async fn current_repo(&self) -> Result<String, StoreError> {
        self.git_line(&["config", "--get", "remote.origin.url"]).await
    }
}
