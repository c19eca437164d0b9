//! Payment endpoint handlers (admin listing only).

use axum::{
    extract::{Query, State},
    Json,
};

use domain::models::payment::Payment;
use persistence::repositories::PaymentRepository;
use shared::pagination::{Paginated, PaginationArgs};

use crate::app::AppState;
use crate::error::ApiError;

/// One page of payments, newest first.
///
/// GET /api/v1/admin/payments?offset&show
pub async fn list_payments(
    State(state): State<AppState>,
    Query(args): Query<PaginationArgs>,
) -> Result<Json<Paginated<Payment>>, ApiError> {
    let repo = PaymentRepository::new(state.pool.clone());
    let items: Vec<Payment> = repo
        .list(args.offset(), args.limit())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    let count = repo.count().await?;

    Ok(Json(Paginated::new(items, count)))
}
