//! Car endpoint handlers (admin listing only).

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use domain::models::Car;
use persistence::repositories::CarRepository;
use shared::pagination::Paginated;

use crate::app::AppState;
use crate::error::ApiError;

/// Query parameters for the car listing: pagination plus an optional owner
/// filter.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarListQuery {
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub offset: i64,
    pub show: Option<i64>,
}

impl CarListQuery {
    fn pagination(&self) -> shared::pagination::PaginationArgs {
        shared::pagination::PaginationArgs {
            offset: self.offset,
            show: self.show,
        }
    }
}

/// One page of cars, newest first, optionally for one owner.
///
/// GET /api/v1/admin/cars?userId&offset&show
pub async fn list_cars(
    State(state): State<AppState>,
    Query(query): Query<CarListQuery>,
) -> Result<Json<Paginated<Car>>, ApiError> {
    let args = query.pagination();

    let repo = CarRepository::new(state.pool.clone());
    let items: Vec<Car> = repo
        .list(query.user_id, args.offset(), args.limit())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    let count = repo.count(query.user_id).await?;

    Ok(Json(Paginated::new(items, count)))
}
