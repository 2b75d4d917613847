//! Bulk roster orchestration behaviour.
//!
//! These live in `tests/` (not as unit modules) because the mocks come
//! from `gittraining-test-utils`, which itself depends on
//! `gittraining_core`: a unit-test build would see two incompatible
//! copies of the core crate.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use gittraining_core::course::Course;
use gittraining_core::roster::for_each_student;
use gittraining_core::sanitize::EmailRecord;

fn course_with_emails(emails: &[&str]) -> Course {
    Course {
        title: "t".to_string(),
        organisation: "org".to_string(),
        root_owner: "owner".to_string(),
        root_repo: "repo".to_string(),
        token: "tok".to_string(),
        email_file: "emails.csv".to_string(),
        emails: emails
            .iter()
            .map(|e| EmailRecord::derive("org", e))
            .collect(),
    }
}

#[tokio::test]
async fn results_match_roster_order_even_when_completion_order_differs() {
    let course = course_with_emails(&["a@x.com", "b@x.com", "c@x.com"]);
    // First entry finishes last; order must still be a, b, c.
    let results = for_each_student(&course, |record| {
        let delay = if record.email.starts_with('a') { 30 } else { 1 };
        let clean = record.clean.clone();
        async move {
            tokio::time::sleep(Duration::from_millis(delay)).await;
            clean
        }
    })
    .await;
    assert_eq!(results, vec!["a_at_x.com", "b_at_x.com", "c_at_x.com"]);
}

#[tokio::test]
async fn one_failing_entry_does_not_disturb_the_others() {
    use gittraining_core::store::RemoteResult;

    let course = course_with_emails(&["a@x.com", "b@x.com", "c@x.com"]);
    let results = for_each_student(&course, |record| {
        let failing = record.email.starts_with('b');
        async move {
            if failing {
                RemoteResult::<String>::failure(404, "no such repo")
            } else {
                RemoteResult::success(200, "ok".to_string())
            }
        }
    })
    .await;

    assert_eq!(results.len(), 3);
    assert!(results[0].is_success());
    assert_eq!(results[1].status_code, 404);
    assert_eq!(results[1].payload, None);
    assert_eq!(results[1].error.as_deref(), Some("no such repo"));
    assert!(results[2].is_success());
}

#[tokio::test]
async fn every_entry_is_dispatched_exactly_once() {
    let course = course_with_emails(&["a@x.com", "b@x.com", "c@x.com", "d@x.com"]);
    let calls = Arc::new(AtomicUsize::new(0));
    let results = for_each_student(&course, |record| {
        let calls = Arc::clone(&calls);
        let repo = record.repo.clone();
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            repo
        }
    })
    .await;
    assert_eq!(calls.load(Ordering::SeqCst), 4);
    assert_eq!(results.len(), 4);
}

#[tokio::test]
async fn status_batch_isolates_the_failing_student() {
    use gittraining_core::store::{GitStore, GithubStore, HttpResponse};
    use gittraining_test_utils::mocks::{MockExecutor, MockTransport};

    let course = course_with_emails(&["a@x.com", "b@x.com", "c@x.com"]);
    let transport = MockTransport::new()
        .with_response(
            "https://api.github.com/repos/org/a_at_x.com",
            HttpResponse {
                status: 200,
                body: r#"{"name":"a_at_x.com"}"#.to_string(),
            },
        )
        .with_response(
            "https://api.github.com/repos/org/b_at_x.com",
            HttpResponse {
                status: 404,
                body: "Not Found".to_string(),
            },
        )
        .with_response(
            "https://api.github.com/repos/org/c_at_x.com",
            HttpResponse {
                status: 200,
                body: r#"{"name":"c_at_x.com"}"#.to_string(),
            },
        );
    let store = GithubStore::new(transport, MockExecutor::new());

    let results = for_each_student(&course, |record| {
        store.status(&course.organisation, &record.clean)
    })
    .await;

    assert_eq!(results.len(), 3);
    assert!(results[0].is_success());
    assert_eq!(results[1].status_code, 404);
    assert_eq!(results[1].payload, None);
    assert_eq!(results[1].error.as_deref(), Some("Not Found"));
    assert!(results[2].is_success());
}

#[tokio::test]
async fn empty_roster_yields_empty_results() {
    let course = course_with_emails(&[]);
    let results = for_each_student(&course, |record| async move { record.repo.clone() }).await;
    assert!(results.is_empty());
}
