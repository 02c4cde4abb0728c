//! Fire-and-forget schedule mutations
//!
//! Update and delete are dispatched onto their own tokio task so the HTTP
//! response goes out before the write lands. Nothing flows back to the
//! request: a failed write is only logged, and the client has already been
//! told it succeeded.

use tokio::task::JoinHandle;

use crate::db::Repository;
use crate::models::Schedule;

/// Persist `schedule`'s title and day in the background
///
/// Handlers drop the returned handle; it exists so tests can wait for the
/// write.
pub fn spawn_update(repo: Repository, schedule: Schedule) -> JoinHandle<()> {
    tokio::spawn(async move {
        match repo
            .update_schedule(schedule.id, &schedule.title, schedule.day)
            .await
        {
            Ok(()) => tracing::debug!("Schedule {} updated", schedule.id),
            Err(e) => tracing::error!("Background update of schedule {} failed: {}", schedule.id, e),
        }
    })
}

/// Delete schedule `id` in the background
pub fn spawn_delete(repo: Repository, id: i64) -> JoinHandle<()> {
    tokio::spawn(async move {
        match repo.delete_schedule(id).await {
            Ok(()) => tracing::debug!("Schedule {} deleted", id),
            Err(e) => tracing::error!("Background delete of schedule {} failed: {}", id, e),
        }
    })
}
