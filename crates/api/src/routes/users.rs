//! User profile endpoint handlers.

use axum::{extract::State, Extension, Json};

use domain::models::user::User;
use persistence::repositories::UserRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::user_auth::UserAuth;

/// The authenticated caller's profile.
///
/// GET /api/v1/users/me
pub async fn me(
    State(state): State<AppState>,
    Extension(auth): Extension<UserAuth>,
) -> Result<Json<User>, ApiError> {
    let repo = UserRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(auth.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;

    Ok(Json(entity.into()))
}
