use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::approval::{ApprovalDecisionRecord, ApprovalRequest};
use crate::state_machine;
use crate::store::NewApprovalRequest;
use crate::AppState;

// ── Request DTOs ─────────────────────────────────────────────

/// Body of `POST /approval_requests`. Unknown fields are ignored, so a
/// client sending a full record is fine — id, status, archived and
/// decisions are always assigned by the store, never taken from input.
#[derive(Deserialize)]
pub struct CreateApprovalRequest {
    pub requester: String,
    pub subject: String,
}

// The decision body `{approver, decision}` deserializes directly into
// `ApprovalDecisionRecord`; an unrecognized decision value fails there.

// ── Handlers ─────────────────────────────────────────────────

/// POST /approval_requests — create a new request in the pending state.
pub async fn request_approval(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateApprovalRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApprovalRequest>), AppError> {
    let Json(payload) = body.map_err(|e| AppError::MalformedBody(e.body_text()))?;

    let record = state
        .store
        .create(NewApprovalRequest {
            requester: payload.requester,
            subject: payload.subject,
        })
        .await;

    tracing::info!(id = record.id, requester = %record.requester, "approval request created");
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /approval_requests — list all requests (unspecified order).
pub async fn list_approval_requests(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<ApprovalRequest>> {
    Json(state.store.list().await)
}

/// GET /approval_requests/:id — fetch a single request.
pub async fn get_approval_request(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<ApprovalRequest>, AppError> {
    state
        .store
        .get(id)
        .await
        .map(Json)
        .ok_or(AppError::RequestNotFound(id))
}

/// DELETE /approval_requests/:id — archive (soft delete). Idempotent:
/// archiving an already-archived request succeeds and changes nothing.
pub async fn archive_approval_request(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<ApprovalRequest>, AppError> {
    let record = state
        .store
        .mutate(id, |record| record.archived = true)
        .await
        .ok_or(AppError::RequestNotFound(id))?;

    tracing::info!(id, "approval request archived");
    Ok(Json(record))
}

/// POST /approval_requests/:id/decisions — record one approver's decision
/// and recompute the derived status in the same atomic mutation.
pub async fn decide_on_approval_request(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    body: Result<Json<ApprovalDecisionRecord>, JsonRejection>,
) -> Result<(StatusCode, Json<ApprovalRequest>), AppError> {
    // Unknown id is reported before body problems, so a bad body against a
    // missing record still reads as 404.
    if state.store.get(id).await.is_none() {
        return Err(AppError::RequestNotFound(id));
    }

    let Json(decision) = body.map_err(|e| AppError::MalformedBody(e.body_text()))?;

    let record = state
        .store
        .mutate(id, |record| state_machine::record_decision(record, decision))
        .await
        .ok_or(AppError::RequestNotFound(id))?;

    tracing::info!(id, status = ?record.status, "decision recorded");
    Ok((StatusCode::CREATED, Json(record)))
}
