//! [`GithubStore`] behaviour over scripted mock collaborators.
//!
//! These live in `tests/` (not as unit modules) because the mocks come
//! from `gittraining-test-utils`, which itself depends on
//! `gittraining_core`: a unit-test build would see two incompatible
//! copies of the core crate.

use gittraining_core::error::StoreError;
use gittraining_core::store::{ExecOutput, GitStore, GithubStore, HttpResponse, Method};
use gittraining_test_utils::mocks::{MockExecutor, MockTransport};

fn store(transport: MockTransport) -> GithubStore<MockTransport, MockExecutor> {
    GithubStore::new(transport, MockExecutor::new())
}

#[tokio::test]
async fn list_forks_extracts_full_names() {
    let transport = MockTransport::new().with_response(
        "https://api.github.com/repos/phil-rice/javaoptics/forks",
        HttpResponse {
            status: 200,
            body: r#"[{"full_name":"org/a","id":1},{"full_name":"org/b","id":2}]"#.to_string(),
        },
    );
    let result = store(transport).list_forks("phil-rice", "javaoptics").await;
    assert_eq!(result.status_code, 200);
    assert_eq!(
        result.payload,
        Some(vec!["org/a".to_string(), "org/b".to_string()])
    );
    assert_eq!(result.error, None);
}

#[tokio::test]
async fn list_forks_keeps_raw_body_and_empty_list_on_failure() {
    let transport = MockTransport::new().with_response(
        "https://api.github.com/repos/phil-rice/javaoptics/forks",
        HttpResponse {
            status: 404,
            body: "this is not json".to_string(),
        },
    );
    let result = store(transport).list_forks("phil-rice", "javaoptics").await;
    assert_eq!(result.status_code, 404);
    assert_eq!(result.payload, Some(Vec::new()));
    assert_eq!(result.error.as_deref(), Some("this is not json"));

    // The empty list survives into the JSON output.
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(
        json,
        r#"{"statusCode":404,"payload":[],"error":"this is not json"}"#
    );
}

#[tokio::test]
async fn list_forks_transport_failure_also_carries_an_empty_list() {
    // No scripted response: the mock reports a transport error.
    let result = store(MockTransport::new())
        .list_forks("phil-rice", "javaoptics")
        .await;
    assert_eq!(result.status_code, 0);
    assert_eq!(result.payload, Some(Vec::new()));
    assert!(result.error.is_some());
}

#[tokio::test]
async fn fork_sends_auth_headers_and_body() {
    let transport = MockTransport::new().with_response(
        "https://api.github.com/repos/phil-rice/javaoptics/forks",
        HttpResponse {
            status: 202,
            body: r#"{"id": 99}"#.to_string(),
        },
    );
    let store = store(transport);
    let result = store
        .fork("phil-rice", "javaoptics", "org", "org-student", "tok123")
        .await;

    assert_eq!(result.new_repo, "org-student");
    assert_eq!(result.result.status_code, 202);
    assert_eq!(result.result.payload, Some(serde_json::json!({"id": 99})));

    let requests = store.transport.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, Method::Post);
    assert!(
        request
            .headers
            .contains(&("Authorization".to_string(), "Bearer tok123".to_string()))
    );
    assert!(request.headers.contains(&(
        "Accept".to_string(),
        "application/vnd.github+json".to_string()
    )));
    let body: serde_json::Value =
        serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "organisation": "org",
            "name": "org-student",
            "default_branch_only": false,
        })
    );
}

#[tokio::test]
async fn fork_failure_still_carries_new_repo() {
    let transport = MockTransport::new().with_response(
        "https://api.github.com/repos/phil-rice/javaoptics/forks",
        HttpResponse {
            status: 403,
            body: "forbidden".to_string(),
        },
    );
    let result = store(transport)
        .fork("phil-rice", "javaoptics", "org", "org-student", "tok")
        .await;
    assert_eq!(result.new_repo, "org-student");
    assert_eq!(result.result.error.as_deref(), Some("forbidden"));
}

#[tokio::test]
async fn status_returns_opaque_metadata() {
    let transport = MockTransport::new().with_response(
        "https://api.github.com/repos/org/student",
        HttpResponse {
            status: 200,
            body: r#"{"name":"student","private":false}"#.to_string(),
        },
    );
    let result = store(transport).status("org", "student").await;
    assert!(result.is_success());
    assert_eq!(
        result.payload.unwrap()["name"],
        serde_json::json!("student")
    );
}

#[tokio::test]
async fn transport_failure_becomes_a_zero_status_result() {
    // No scripted response: the mock reports a transport error.
    let result = store(MockTransport::new()).status("org", "student").await;
    assert_eq!(result.status_code, 0);
    assert!(result.error.is_some());
}

#[tokio::test]
async fn current_branch_trims_stdout() {
    let executor = MockExecutor::new().with_output(
        "git branch --show-current",
        ExecOutput {
            stdout: "main\n".to_string(),
            stderr: String::new(),
            code: 0,
        },
    );
    let store = GithubStore::new(MockTransport::new(), executor);
    assert_eq!(store.current_branch().await.unwrap(), "main");
}

#[tokio::test]
async fn current_branch_fails_on_non_zero_exit() {
    let executor = MockExecutor::new().with_output(
        "git branch --show-current",
        ExecOutput {
            stdout: String::new(),
            stderr: "not a git repository".to_string(),
            code: 128,
        },
    );
    let store = GithubStore::new(MockTransport::new(), executor);
    match store.current_branch().await {
        Err(StoreError::GitCommand { command, code, .. }) => {
            assert_eq!(command, "git branch --show-current");
            assert_eq!(code, 128);
        }
        other => panic!("expected GitCommand error, got {other:?}"),
    }
}

#[tokio::test]
async fn current_repo_fails_on_empty_stdout() {
    let executor = MockExecutor::new().with_output(
        "git config --get remote.origin.url",
        ExecOutput {
            stdout: "  \n".to_string(),
            stderr: String::new(),
            code: 0,
        },
    );
    let store = GithubStore::new(MockTransport::new(), executor);
    assert!(store.current_repo().await.is_err());
}
