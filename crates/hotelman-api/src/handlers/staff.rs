//! Staff directory handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use hotelman_core::error::AppError;
use hotelman_core::types::StaffRecord;

use crate::dto::request::CreateStaffRequest;
use crate::dto::response::{ApiResponse, StaffResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/staff
pub async fn list_staff(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<StaffResponse>>>, ApiError> {
    let staff: Vec<StaffResponse> = state
        .directory
        .list()
        .into_iter()
        .map(StaffResponse::from)
        .collect();

    Ok(Json(ApiResponse::ok(staff)))
}

/// POST /api/admin/staff
pub async fn create_staff(
    State(state): State<AppState>,
    Json(req): Json<CreateStaffRequest>,
) -> Result<(StatusCode, Json<ApiResponse<StaffResponse>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let record = StaffRecord {
        email: req.email,
        employee_id: req.employee_id,
        full_name: req.full_name,
        role: req.role,
        password_hash: state.verifier.hash(&req.password)?,
    };

    state.directory.insert(record.clone())?;
    tracing::info!(email = %record.email, role = %record.role, "Staff account created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(record.into())),
    ))
}
