//! Role API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use super::metrics_handler::record_role_operation;
use crate::application::message;
use crate::application::{ResultVO, RoleError, RoleService, RoleVO, RolesVO};
use crate::domain::role::RoleParam;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub role_service: RoleService,
}

impl AppState {
    pub fn new(role_service: RoleService) -> Self {
        Self { role_service }
    }
}

/// Delete response
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub id: i64,
    pub deleted: bool,
}

/// Role error rendered as a failure envelope
#[derive(Debug)]
pub struct ApiError(pub RoleError);

impl From<RoleError> for ApiError {
    fn from(err: RoleError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            RoleError::InvalidParam(_) => StatusCode::BAD_REQUEST,
            RoleError::NoRolesFound | RoleError::RoleNotFound(_) => StatusCode::NOT_FOUND,
            RoleError::DuplicateName(_) => StatusCode::CONFLICT,
            RoleError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("API: {}", self.0);
        } else {
            warn!("API: {}", self.0);
        }
        let body: ResultVO<()> = ResultVO::failure(self.0.code(), self.0.to_string());
        (status, Json(body)).into_response()
    }
}

/// Record the outcome of `operation` and convert errors for the response
fn track<T>(operation: &'static str, result: Result<T, RoleError>) -> Result<T, ApiError> {
    match &result {
        Ok(_) => record_role_operation(operation, "success"),
        Err(err) => record_role_operation(operation, err.code()),
    }
    result.map_err(ApiError::from)
}

/// Create a new role
pub async fn create_role(
    State(state): State<AppState>,
    Json(param): Json<RoleParam>,
) -> Result<(StatusCode, Json<ResultVO<RoleVO>>), ApiError> {
    info!("API: Creating role {:?}", param.name);

    let result = track("create", state.role_service.create(param).await)?;
    Ok((StatusCode::CREATED, Json(result)))
}

/// List all roles
pub async fn list_roles(
    State(state): State<AppState>,
) -> Result<Json<ResultVO<RolesVO>>, ApiError> {
    info!("API: Listing roles");

    let result = track("index", state.role_service.get_all_roles().await)?;
    Ok(Json(result))
}

/// Get role by ID
pub async fn get_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ResultVO<RoleVO>>, ApiError> {
    info!("API: Getting role ID: {}", id);

    let result = track(
        "show",
        state.role_service.get_role_by_id(RoleParam::with_id(id)).await,
    )?;
    Ok(Json(result))
}

/// Update role, the path ID wins over any ID in the body
pub async fn update_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(mut param): Json<RoleParam>,
) -> Result<Json<ResultVO<RoleVO>>, ApiError> {
    info!("API: Updating role ID: {}", id);

    param.id = Some(id);
    let result = track("update", state.role_service.update(param).await)?;
    Ok(Json(result))
}

/// Delete role
pub async fn delete_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ResultVO<DeleteResponse>>, ApiError> {
    info!("API: Deleting role ID: {}", id);

    track(
        "delete",
        state.role_service.delete(RoleParam::with_id(id)).await,
    )?;

    let mut result = ResultVO::success(DeleteResponse { id, deleted: true });
    result.message = Some(message::success(message::DELETE, message::ROLE));
    Ok(Json(result))
}

/// Health check
pub async fn health_check() -> Json<ResultVO<&'static str>> {
    Json(ResultVO::success("OK"))
}
