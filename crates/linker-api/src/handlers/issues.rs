//! Issue handlers

use axum::{extract::State, Json};
use linker_service::dto::{CreateIssueRequest, IssueEnvelope, IssuesResponse, UpdateIssueRequest};
use linker_service::IssueService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /api/issues
pub async fn list_issues(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<IssuesResponse>> {
    let service = IssueService::new(state.service_context());
    let response = service.list_issues().await?;
    Ok(Json(response))
}

/// POST /api/issues
pub async fn create_issue(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateIssueRequest>,
) -> ApiResult<Created<Json<IssueEnvelope>>> {
    let service = IssueService::new(state.service_context());
    let response = service.create_issue(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// GET /api/issues/{id}
pub async fn get_issue(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(issue_id): IdPath,
) -> ApiResult<Json<IssueEnvelope>> {
    let service = IssueService::new(state.service_context());
    let response = service.get_issue(issue_id).await?;
    Ok(Json(response))
}

/// PUT /api/issues/{id}
pub async fn update_issue(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(issue_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateIssueRequest>,
) -> ApiResult<Json<IssueEnvelope>> {
    let service = IssueService::new(state.service_context());
    let response = service.update_issue(issue_id, request).await?;
    Ok(Json(response))
}
