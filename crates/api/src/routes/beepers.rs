//! Beeper endpoint handlers: availability, discovery, and the queue stream.

use axum::{
    extract::{Query, State, WebSocketUpgrade},
    response::Response,
    Extension, Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use domain::events::{Event, Topic};
use domain::models::location::Point;
use domain::models::queue::QueueEntry;
use domain::models::user::{BeeperCandidate, BeeperListQuery, BeeperSettings, BeeperSettingsInput};
use persistence::repositories::{LocationRepository, QueueRepository, UserRepository};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::{
    record_event_published, record_subscription_closed, record_subscription_opened,
};
use crate::middleware::user_auth::{authenticate_ws_token, UserAuth};
use crate::routes::stream_events;

/// Toggle the caller's beeper availability and rates.
///
/// PUT /api/v1/beeper/status
///
/// Going available requires a coordinate: either one supplied in the body
/// (upserted and published exactly like a location update) or one already
/// stored. With neither, the request fails validation and `is_beeping` is
/// left untouched.
pub async fn set_beeper_status(
    State(state): State<AppState>,
    Extension(auth): Extension<UserAuth>,
    Json(input): Json<BeeperSettingsInput>,
) -> Result<Json<BeeperSettings>, ApiError> {
    input.validate()?;

    let location_repo = LocationRepository::new(state.pool.clone());

    let provided = match (input.latitude, input.longitude) {
        (Some(latitude), Some(longitude)) => Some(Point {
            latitude,
            longitude,
        }),
        (None, None) => None,
        _ => {
            return Err(ApiError::Validation(
                "latitude and longitude must be provided together".into(),
            ))
        }
    };

    let mut location = provided;
    if location.is_none() {
        location = location_repo
            .find_by_user_id(auth.user_id)
            .await?
            .map(|entity| Point {
                latitude: entity.latitude,
                longitude: entity.longitude,
            });
    }

    if input.is_beeping && location.is_none() {
        return Err(ApiError::Validation(
            "location required to start beeping".into(),
        ));
    }

    if let Some(point) = provided {
        let subscribers = state
            .events
            .publish(Topic::Location(auth.user_id), Event::Location(point));
        record_event_published("location", subscribers);
        location_repo
            .upsert_location(auth.user_id, point.latitude, point.longitude)
            .await?;
    }

    let user_repo = UserRepository::new(state.pool.clone());
    let entity = user_repo
        .update_beeper_settings(
            auth.user_id,
            input.is_beeping,
            input.singles_rate,
            input.group_rate,
            input.capacity,
        )
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;

    let queue_repo = QueueRepository::new(state.pool.clone());
    let queue_size = queue_repo.count_active_for_beeper(auth.user_id).await?;

    info!(
        user_id = %auth.user_id,
        is_beeping = entity.is_beeping,
        "Beeper status updated"
    );

    Ok(Json(BeeperSettings {
        id: entity.id,
        is_beeping: entity.is_beeping,
        singles_rate: entity.singles_rate,
        group_rate: entity.group_rate,
        capacity: entity.capacity,
        queue_size,
        location,
    }))
}

/// List currently-beeping users near a coordinate.
///
/// GET /api/v1/beepers?latitude&longitude&radius
///
/// Candidates outside the radius are filtered out. A candidate with no
/// stored location is retained with a distance of zero. No beepers in range
/// is an empty list, not an error.
pub async fn get_beeper_list(
    State(state): State<AppState>,
    Query(query): Query<BeeperListQuery>,
) -> Result<Json<Vec<BeeperCandidate>>, ApiError> {
    query.validate()?;

    let origin = Point {
        latitude: query.latitude,
        longitude: query.longitude,
    };
    let radius_miles = query.radius_miles();

    let repo = UserRepository::new(state.pool.clone());
    let candidates = repo
        .find_beeping_candidates()
        .await?
        .into_iter()
        .filter_map(|entity| {
            let distance_miles = entity
                .point()
                .map(|point| origin.distance_miles(&point))
                .unwrap_or(0.0);
            if distance_miles <= radius_miles {
                Some(entity.into_candidate(distance_miles))
            } else {
                None
            }
        })
        .collect();

    Ok(Json(candidates))
}

/// Query parameter naming the beeper whose queue is requested.
#[derive(Debug, Deserialize)]
pub struct QueueQuery {
    pub id: Uuid,
}

/// Active queue entries for a beeper, oldest first.
///
/// GET /api/v1/beeper/queue?id=
pub async fn get_queue(
    State(state): State<AppState>,
    Query(query): Query<QueueQuery>,
) -> Result<Json<Vec<QueueEntry>>, ApiError> {
    let repo = QueueRepository::new(state.pool.clone());
    let entries: Vec<QueueEntry> = repo
        .find_active_by_beeper(query.id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(entries))
}

/// Query parameters for the queue subscription upgrade.
#[derive(Debug, Deserialize)]
pub struct QueueSubscribeQuery {
    pub id: Uuid,
    pub token: Option<String>,
}

/// Stream a beeper's queue changes over a WebSocket.
///
/// GET /api/v1/beeper/queue/subscribe?id=&token=
pub async fn subscribe_queue(
    State(state): State<AppState>,
    Query(query): Query<QueueSubscribeQuery>,
    ws: WebSocketUpgrade,
) -> Result<Response, ApiError> {
    let auth = authenticate_ws_token(&state.config.jwt, query.token.as_deref())?;

    info!(
        subscriber = %auth.user_id,
        beeper = %query.id,
        "Queue subscription opened"
    );

    let rx = state.events.subscribe(Topic::Queue(query.id));
    Ok(ws.on_upgrade(move |socket| async move {
        record_subscription_opened("queue");
        stream_events(socket, rx).await;
        record_subscription_closed("queue");
    }))
}
