use axum::{extract::State, http::StatusCode, Json};
use models::{MaintenanceRecord, RecordInput, RecordPatch};
use service::records::Replaced;
use uuid::Uuid;

use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::ServerState;

/// List every record in insertion order
#[utoipa::path(get, path = "/records", tag = "records", responses((status = 200, description = "OK", body = [MaintenanceRecord])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<MaintenanceRecord>>, JsonApiError> {
    Ok(Json(state.records.list().await?))
}

/// Create a record; id and timestamps are assigned by the server
#[utoipa::path(
    post,
    path = "/records",
    tag = "records",
    request_body = RecordInput,
    responses(
        (status = 201, description = "Created", body = MaintenanceRecord),
        (status = 422, description = "Validation Error", body = crate::errors::ErrorBody)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(input): ApiJson<RecordInput>,
) -> Result<(StatusCode, Json<MaintenanceRecord>), JsonApiError> {
    let record = state.records.create(input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    get,
    path = "/records/{id}",
    tag = "records",
    params(("id" = Uuid, Path, description = "Record id")),
    responses(
        (status = 200, description = "OK", body = MaintenanceRecord),
        (status = 404, description = "Not Found", body = crate::errors::ErrorBody)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<MaintenanceRecord>, JsonApiError> {
    Ok(Json(state.records.get(id).await?))
}

/// Replace a record, creating it under the given id when absent.
/// Answers 200 for an overwrite and 201 for a creation.
#[utoipa::path(
    put,
    path = "/records/{id}",
    tag = "records",
    params(("id" = Uuid, Path, description = "Record id")),
    request_body = RecordInput,
    responses(
        (status = 200, description = "Replaced", body = MaintenanceRecord),
        (status = 201, description = "Created", body = MaintenanceRecord),
        (status = 422, description = "Validation Error", body = crate::errors::ErrorBody)
    )
)]
pub async fn replace(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(input): ApiJson<RecordInput>,
) -> Result<(StatusCode, Json<MaintenanceRecord>), JsonApiError> {
    let outcome = state.records.replace(id, input).await?;
    let status = match outcome {
        Replaced::Created(_) => StatusCode::CREATED,
        Replaced::Updated(_) => StatusCode::OK,
    };
    Ok((status, Json(outcome.into_record())))
}

/// Update only the fields present in the body
#[utoipa::path(
    patch,
    path = "/records/{id}",
    tag = "records",
    params(("id" = Uuid, Path, description = "Record id")),
    request_body = RecordPatch,
    responses(
        (status = 200, description = "OK", body = MaintenanceRecord),
        (status = 404, description = "Not Found", body = crate::errors::ErrorBody),
        (status = 422, description = "Validation Error", body = crate::errors::ErrorBody)
    )
)]
pub async fn patch(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(patch): ApiJson<RecordPatch>,
) -> Result<Json<MaintenanceRecord>, JsonApiError> {
    Ok(Json(state.records.patch(id, patch).await?))
}

#[utoipa::path(
    delete,
    path = "/records/{id}",
    tag = "records",
    params(("id" = Uuid, Path, description = "Record id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::errors::ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, JsonApiError> {
    state.records.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
