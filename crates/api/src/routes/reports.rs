//! Report endpoint handlers: filing plus the admin moderation surface.

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use domain::models::report::{Report, ReportInput, UpdateReportInput};
use persistence::repositories::ReportRepository;
use shared::pagination::{Paginated, PaginationArgs};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::user_auth::UserAuth;

/// File a report against another user.
///
/// POST /api/v1/reports
pub async fn create_report(
    State(state): State<AppState>,
    Extension(auth): Extension<UserAuth>,
    Json(input): Json<ReportInput>,
) -> Result<Json<bool>, ApiError> {
    input.validate()?;

    if input.user_id == auth.user_id {
        return Err(ApiError::Validation("Cannot report yourself".into()));
    }

    let repo = ReportRepository::new(state.pool.clone());
    let report_id = repo
        .insert_report(auth.user_id, input.user_id, &input.reason, input.beep_id)
        .await?;

    info!(
        report_id = %report_id,
        reporter_id = %auth.user_id,
        reported_id = %input.user_id,
        "Report filed"
    );

    Ok(Json(true))
}

/// One page of reports, newest first.
///
/// GET /api/v1/admin/reports?offset&show
pub async fn list_reports(
    State(state): State<AppState>,
    Query(args): Query<PaginationArgs>,
) -> Result<Json<Paginated<Report>>, ApiError> {
    let repo = ReportRepository::new(state.pool.clone());
    let items: Vec<Report> = repo
        .list(args.offset(), args.limit())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    let count = repo.count().await?;

    Ok(Json(Paginated::new(items, count)))
}

/// A single report.
///
/// GET /api/v1/admin/reports/:id
pub async fn get_report(
    State(state): State<AppState>,
    Path(report_id): Path<Uuid>,
) -> Result<Json<Report>, ApiError> {
    let repo = ReportRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(report_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Report not found".into()))?;

    Ok(Json(entity.into()))
}

/// Update a report's reason, notes, or handled flag.
///
/// PATCH /api/v1/admin/reports/:id
///
/// `handled=true` attaches the acting admin as handler; `handled=false`
/// clears it. Omitted fields keep their current values. A missing id is a
/// 404 with no write.
pub async fn update_report(
    State(state): State<AppState>,
    Extension(auth): Extension<UserAuth>,
    Path(report_id): Path<Uuid>,
    Json(input): Json<UpdateReportInput>,
) -> Result<Json<Report>, ApiError> {
    input.validate()?;

    let repo = ReportRepository::new(state.pool.clone());
    let current = repo
        .find_by_id(report_id)
        .await?
        .map(Report::from)
        .ok_or_else(|| ApiError::NotFound("Report not found".into()))?;

    let reason = input.reason.unwrap_or(current.reason);
    let notes = input.notes.or(current.notes);
    let handled_by = match input.handled {
        Some(true) => Some(auth.user_id),
        Some(false) => None,
        None => current.handled_by.map(|handler| handler.id),
    };

    let updated = repo
        .update_report(report_id, &reason, notes.as_deref(), handled_by)
        .await?;
    if updated == 0 {
        return Err(ApiError::NotFound("Report not found".into()));
    }

    info!(report_id = %report_id, admin_id = %auth.user_id, "Report updated");

    let entity = repo
        .find_by_id(report_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Report not found".into()))?;

    Ok(Json(entity.into()))
}

/// Delete a report.
///
/// DELETE /api/v1/admin/reports/:id
pub async fn delete_report(
    State(state): State<AppState>,
    Path(report_id): Path<Uuid>,
) -> Result<Json<bool>, ApiError> {
    let repo = ReportRepository::new(state.pool.clone());
    let deleted = repo.delete_report(report_id).await?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Report not found".into()));
    }

    info!(report_id = %report_id, "Report deleted");

    Ok(Json(true))
}
