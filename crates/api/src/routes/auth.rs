//! Auth endpoint handlers: signup and login.

use axum::{extract::State, Json};
use tracing::info;
use validator::Validate;

use domain::models::user::{AuthResponse, LoginRequest, SignupRequest, TokenBundle, User};
use persistence::repositories::{NewUser, UserRepository};
use shared::jwt::JwtConfig;
use shared::password;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::user_auth::UserAuth;

/// Create a user account.
///
/// POST /api/v1/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    request.validate()?;

    let password_hash = password::hash_password(&request.password)?;

    let repo = UserRepository::new(state.pool.clone());
    let entity = repo
        .insert_user(NewUser {
            first: request.first,
            last: request.last,
            username: request.username,
            email: request.email,
            phone: request.phone,
            venmo: request.venmo,
            cashapp: request.cashapp,
            password_hash,
        })
        .await
        .map_err(|e| match ApiError::from(e) {
            ApiError::Conflict(_) => ApiError::Conflict("Username or email already taken".into()),
            other => other,
        })?;

    let user: User = entity.into();
    let tokens = issue_tokens(&state, &user)?;

    info!(user_id = %user.id, username = %user.username, "User signed up");

    Ok(Json(AuthResponse { user, tokens }))
}

/// Log in with username and password.
///
/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    request.validate()?;

    let repo = UserRepository::new(state.pool.clone());
    let entity = repo
        .find_by_username(&request.username)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid username or password".into()))?;

    let verified = password::verify_password(&request.password, &entity.password_hash)?;
    if !verified {
        return Err(ApiError::Unauthorized("Invalid username or password".into()));
    }

    let user: User = entity.into();
    let tokens = issue_tokens(&state, &user)?;

    info!(user_id = %user.id, "User logged in");

    Ok(Json(AuthResponse { user, tokens }))
}

/// Generate the access/refresh token pair for a user.
fn issue_tokens(state: &AppState, user: &User) -> Result<TokenBundle, ApiError> {
    let jwt_config = jwt_config(state)?;
    let (access_token, _) = jwt_config.generate_access_token(user.id)?;
    let (refresh_token, _) = jwt_config.generate_refresh_token(user.id)?;
    Ok(TokenBundle {
        access_token,
        refresh_token,
    })
}

fn jwt_config(state: &AppState) -> Result<JwtConfig, ApiError> {
    UserAuth::create_jwt_config(&state.config.jwt).map_err(|e| {
        tracing::error!("Failed to create JWT config: {}", e);
        ApiError::Internal("Authentication service unavailable".into())
    })
}
