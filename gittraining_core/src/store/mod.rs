//! Remote store adapter
//!
//! Wraps the GitHub REST API and the two local git invocations behind
//! the [`GitStore`] capability. Remote HTTP calls never raise: each
//! returns a [`RemoteResult`] whose `error` field carries any failure,
//! so batch callers get per-item failure isolation for free. The two
//! local git calls do raise, since there is exactly one of them per
//! invocation and no batch to protect.

mod github;
mod transport;

pub use github::{GITHUB_API, GithubStore};
pub use transport::{
    ExecOutput, Executor, HttpRequest, HttpResponse, HttpTransport, Method, ReqwestTransport,
    TokioExecutor,
};

use async_trait::async_trait;
use serde::Serialize;

use crate::error::StoreError;

/// Outcome of one remote call: exactly one of `payload`/`error` is
/// meaningful, decided by whether `status_code` is below 300.
///
/// A transport-level failure (connection refused, DNS) is reported with
/// `status_code` 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteResult<T> {
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> RemoteResult<T> {
    pub fn success(status_code: u16, payload: T) -> Self {
        Self {
            status_code,
            payload: Some(payload),
            error: None,
        }
    }

    pub fn failure(status_code: u16, error: impl Into<String>) -> Self {
        Self {
            status_code,
            payload: None,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code < 300
    }
}

/// Result of a forks listing: the full name of every fork.
pub type ListForksResult = RemoteResult<Vec<String>>;

/// Result of a status query: the repository metadata as opaque JSON.
/// The core never inspects it; only the reporting layer does.
pub type StatusResult = RemoteResult<serde_json::Value>;

/// Result of a fork creation, tagged with the repository name that was
/// requested so batch output stays attributable per student.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForkResult {
    #[serde(rename = "newRepo")]
    pub new_repo: String,
    #[serde(flatten)]
    pub result: RemoteResult<serde_json::Value>,
}

/// Capability interface over GitHub plus the local git checkout.
#[async_trait]
pub trait GitStore: Send + Sync {
    /// List all forks of `owner/repo`.
    async fn list_forks(&self, owner: &str, repo: &str) -> ListForksResult;

    /// Fork `owner/repo` into `organisation` under the name `new_repo`.
    async fn fork(
        &self,
        owner: &str,
        repo: &str,
        organisation: &str,
        new_repo: &str,
        token: &str,
    ) -> ForkResult;

    /// Fetch the repository metadata for `organisation/repo`.
    async fn status(&self, organisation: &str, repo: &str) -> StatusResult;

    /// Current branch of the local checkout.
    async fn current_branch(&self) -> Result<String, StoreError>;

    /// Origin URL of the local checkout.
    async fn current_repo(&self) -> Result<String, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_below_300_is_success() {
        assert!(RemoteResult::success(200, ()).is_success());
        assert!(RemoteResult::success(204, ()).is_success());
        assert!(!RemoteResult::<()>::failure(300, "redirect").is_success());
        assert!(!RemoteResult::<()>::failure(404, "missing").is_success());
    }

    #[test]
    fn serializes_with_camel_case_and_without_empty_fields() {
        let ok = RemoteResult::success(200, vec!["a/b".to_string()]);
        let json = serde_json::to_string(&ok).unwrap();
        assert_eq!(json, r#"{"statusCode":200,"payload":["a/b"]}"#);

        let failed = ForkResult {
            new_repo: "org/student".to_string(),
            result: RemoteResult::failure(403, "forbidden"),
        };
        let json = serde_json::to_string(&failed).unwrap();
        assert_eq!(
            json,
            r#"{"newRepo":"org/student","statusCode":403,"error":"forbidden"}"#
        );
    }
}
