//! Queue mutation handlers: join, advance, remove.
//!
//! Every mutation re-reads the beeper's active queue and publishes the full
//! list on that beeper's queue topic, so subscribers always hold the latest
//! state without diffing.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use domain::events::{Event, Topic};
use domain::models::queue::{JoinQueueRequest, QueueEntry, QueueStatus, UpdateQueueEntryRequest};
use persistence::repositories::{QueueRepository, UserRepository};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_event_published;
use crate::middleware::user_auth::UserAuth;

/// Join a beeper's queue.
///
/// POST /api/v1/queue
pub async fn join_queue(
    State(state): State<AppState>,
    Extension(auth): Extension<UserAuth>,
    Json(request): Json<JoinQueueRequest>,
) -> Result<Json<QueueEntry>, ApiError> {
    request.validate()?;

    let user_repo = UserRepository::new(state.pool.clone());
    let beeper = user_repo
        .find_by_id(request.beeper_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Beeper not found".into()))?;

    if !beeper.is_beeping {
        return Err(ApiError::Conflict("Beeper is not currently beeping".into()));
    }

    if request.group_size > beeper.capacity {
        return Err(ApiError::Validation(format!(
            "Group size {} exceeds beeper capacity {}",
            request.group_size, beeper.capacity
        )));
    }

    let queue_repo = QueueRepository::new(state.pool.clone());
    if queue_repo
        .rider_has_active_entry(request.beeper_id, auth.user_id)
        .await?
    {
        return Err(ApiError::Conflict("Already in this beeper's queue".into()));
    }

    let entry_id = queue_repo
        .insert_entry(
            request.beeper_id,
            auth.user_id,
            &request.origin,
            &request.destination,
            request.group_size,
        )
        .await?;

    let queue = publish_queue(&state, &queue_repo, request.beeper_id).await?;

    info!(
        rider_id = %auth.user_id,
        beeper_id = %request.beeper_id,
        entry_id = %entry_id,
        "Rider joined queue"
    );

    queue
        .into_iter()
        .find(|entry| entry.id == entry_id)
        .map(Json)
        .ok_or_else(|| ApiError::Internal("Created queue entry missing".into()))
}

/// Advance a queue entry's status. Only the owning beeper may do this, and
/// only while the entry is still active: a completed, canceled or denied
/// entry never re-enters the queue.
///
/// PATCH /api/v1/queue/:id
pub async fn update_queue_entry(
    State(state): State<AppState>,
    Extension(auth): Extension<UserAuth>,
    Path(entry_id): Path<Uuid>,
    Json(request): Json<UpdateQueueEntryRequest>,
) -> Result<Json<QueueEntry>, ApiError> {
    let queue_repo = QueueRepository::new(state.pool.clone());
    let entity = queue_repo
        .find_by_id(entry_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Queue entry not found".into()))?;

    if entity.beeper_id != auth.user_id {
        return Err(ApiError::Forbidden(
            "Only the beeper can update this entry".into(),
        ));
    }

    let current: QueueStatus = entity.status.parse().map_err(ApiError::Internal)?;
    if !current.is_active() {
        return Err(ApiError::Conflict(format!(
            "Cannot update a {} entry",
            current
        )));
    }

    queue_repo
        .update_status(entry_id, request.status.as_str())
        .await?;

    publish_queue(&state, &queue_repo, entity.beeper_id).await?;

    info!(
        entry_id = %entry_id,
        status = %request.status,
        "Queue entry status updated"
    );

    let entity = queue_repo
        .find_by_id(entry_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Queue entry not found".into()))?;

    Ok(Json(entity.into()))
}

/// Remove a queue entry. The rider cancels, or the beeper removes.
///
/// DELETE /api/v1/queue/:id
pub async fn leave_queue(
    State(state): State<AppState>,
    Extension(auth): Extension<UserAuth>,
    Path(entry_id): Path<Uuid>,
) -> Result<Json<bool>, ApiError> {
    let queue_repo = QueueRepository::new(state.pool.clone());
    let entity = queue_repo
        .find_by_id(entry_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Queue entry not found".into()))?;

    if entity.rider_id != auth.user_id && entity.beeper_id != auth.user_id {
        return Err(ApiError::Forbidden(
            "Only the rider or the beeper can remove this entry".into(),
        ));
    }

    let removed = queue_repo.delete_entry(entry_id).await?;
    if removed == 0 {
        return Err(ApiError::NotFound("Queue entry not found".into()));
    }

    publish_queue(&state, &queue_repo, entity.beeper_id).await?;

    info!(
        entry_id = %entry_id,
        removed_by = %auth.user_id,
        "Queue entry removed"
    );

    Ok(Json(true))
}

/// Re-read a beeper's active queue and push it to that beeper's topic.
pub(crate) async fn publish_queue(
    state: &AppState,
    queue_repo: &QueueRepository,
    beeper_id: Uuid,
) -> Result<Vec<QueueEntry>, ApiError> {
    let queue: Vec<QueueEntry> = queue_repo
        .find_active_by_beeper(beeper_id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let subscribers = state
        .events
        .publish(Topic::Queue(beeper_id), Event::Queue(queue.clone()));
    record_event_published("queue", subscribers);

    Ok(queue)
}
