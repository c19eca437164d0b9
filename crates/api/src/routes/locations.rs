//! Location endpoint handlers: coordinate updates and the live stream.

use axum::{
    extract::{Path, Query, State, WebSocketUpgrade},
    response::Response,
    Extension, Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use domain::events::{Event, Topic};
use domain::models::location::{LocationInput, Point};
use persistence::repositories::LocationRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::{
    record_event_published, record_subscription_closed, record_subscription_opened,
};
use crate::middleware::user_auth::{authenticate_ws_token, UserAuth};
use crate::routes::stream_events;

/// Record a coordinate update for the authenticated user.
///
/// POST /api/v1/location
///
/// The payload is pushed to the user's location topic before the database
/// write is awaited: subscribers see the coordinate immediately and the
/// flush settles behind it. The user's single location row is then upserted
/// in place, keeping its id stable across updates.
pub async fn insert_location(
    State(state): State<AppState>,
    Extension(auth): Extension<UserAuth>,
    Json(input): Json<LocationInput>,
) -> Result<Json<bool>, ApiError> {
    input.validate()?;

    let point = Point {
        latitude: input.latitude,
        longitude: input.longitude,
    };

    let subscribers = state
        .events
        .publish(Topic::Location(auth.user_id), Event::Location(point));
    record_event_published("location", subscribers);

    let repo = LocationRepository::new(state.pool.clone());
    repo.upsert_location(auth.user_id, input.latitude, input.longitude)
        .await?;

    info!(
        user_id = %auth.user_id,
        latitude = input.latitude,
        longitude = input.longitude,
        "Location updated"
    );

    Ok(Json(true))
}

/// Auth query parameter for WebSocket upgrades.
#[derive(Debug, Deserialize)]
pub struct WsAuthQuery {
    pub token: Option<String>,
}

/// Stream one user's location updates over a WebSocket.
///
/// GET /api/v1/location/:user_id/subscribe?token=
pub async fn subscribe_location(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<WsAuthQuery>,
    ws: WebSocketUpgrade,
) -> Result<Response, ApiError> {
    let auth = authenticate_ws_token(&state.config.jwt, query.token.as_deref())?;

    info!(
        subscriber = %auth.user_id,
        target = %user_id,
        "Location subscription opened"
    );

    let rx = state.events.subscribe(Topic::Location(user_id));
    Ok(ws.on_upgrade(move |socket| async move {
        record_subscription_opened("location");
        stream_events(socket, rx).await;
        record_subscription_closed("location");
    }))
}
