//! Rating endpoint handlers.

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use tracing::info;
use validator::Validate;

use domain::models::rating::{Rating, RatingInput};
use persistence::repositories::RatingRepository;
use shared::pagination::{Paginated, PaginationArgs};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::user_auth::UserAuth;

/// Rate another user after a ride. Ratings are immutable once created.
///
/// POST /api/v1/ratings
pub async fn create_rating(
    State(state): State<AppState>,
    Extension(auth): Extension<UserAuth>,
    Json(input): Json<RatingInput>,
) -> Result<Json<bool>, ApiError> {
    input.validate()?;

    if input.user_id == auth.user_id {
        return Err(ApiError::Validation("Cannot rate yourself".into()));
    }

    let repo = RatingRepository::new(state.pool.clone());
    let rating_id = repo
        .insert_rating(
            auth.user_id,
            input.user_id,
            input.stars,
            input.message.as_deref(),
            input.beep_id,
        )
        .await?;

    info!(
        rating_id = %rating_id,
        rater_id = %auth.user_id,
        rated_id = %input.user_id,
        stars = input.stars,
        "Rating created"
    );

    Ok(Json(true))
}

/// One page of ratings, newest first.
///
/// GET /api/v1/admin/ratings?offset&show
pub async fn list_ratings(
    State(state): State<AppState>,
    Query(args): Query<PaginationArgs>,
) -> Result<Json<Paginated<Rating>>, ApiError> {
    let repo = RatingRepository::new(state.pool.clone());
    let items: Vec<Rating> = repo
        .list(args.offset(), args.limit())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    let count = repo.count().await?;

    Ok(Json(Paginated::new(items, count)))
}
