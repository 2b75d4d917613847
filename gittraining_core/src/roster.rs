//! Bulk roster orchestrator
//!
//! Applies one remote operation to every student concurrently. The
//! per-entry operations already report failure as data, so the only
//! obligations here are: dispatch every entry without waiting on its
//! predecessors, join the whole batch, and keep the output in roster
//! order regardless of completion order. Nothing here can cancel a
//! sibling entry.

use std::future::Future;

use futures::future;

use crate::course::Course;
use crate::sanitize::EmailRecord;

/// Run `op` once per roster entry, concurrently, returning one result
/// per entry in roster order.
pub async fn for_each_student<'a, R, F, Fut>(course: &'a Course, op: F) -> Vec<R>
where
    F: Fn(&'a EmailRecord) -> Fut,
    Fut: Future<Output = R>,
{
    future::join_all(course.emails.iter().map(op)).await
}
