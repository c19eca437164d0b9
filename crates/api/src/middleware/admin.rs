//! Admin role middleware.
//!
//! Runs inside `require_user_auth`: the authenticated user's role is looked
//! up in the database so a revoked admin loses access immediately, not at
//! token expiry.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use persistence::repositories::UserRepository;

use crate::app::AppState;
use crate::middleware::user_auth::UserAuth;

/// Middleware that requires the authenticated user to be an admin.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let auth = match req.extensions().get::<UserAuth>() {
        Some(auth) => auth.clone(),
        None => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": "unauthorized",
                    "message": "Authentication required"
                })),
            )
                .into_response();
        }
    };

    let repo = UserRepository::new(state.pool.clone());
    let user = match repo.find_by_id(auth.user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => return forbidden_response(),
        Err(e) => {
            tracing::error!("Failed to load user for admin check: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An internal error occurred"
                })),
            )
                .into_response();
        }
    };

    if user.role != "admin" {
        return forbidden_response();
    }

    next.run(req).await
}

fn forbidden_response() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(json!({
            "error": "forbidden",
            "message": "Admin access required"
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_response() {
        let response = forbidden_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
