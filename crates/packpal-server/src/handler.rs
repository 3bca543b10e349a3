use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use packpal_merge::MergeOutcome;
use packpal_types::{ItemId, ShareToken, TripId};

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// Health check handler.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Info handler.
pub async fn info_handler() -> Json<Value> {
    Json(json!({
        "name": "packpal-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// ---------------------------------------------------------------------------
// Trips
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct TripNameRequest {
    pub name: Option<String>,
}

impl TripNameRequest {
    fn required_name(&self) -> ServerResult<&str> {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(ServerError::BadRequest("name required".into())),
        }
    }
}

pub async fn list_trips(State(state): State<AppState>) -> ServerResult<Json<Value>> {
    let trips = state.store.list_trips()?;
    Ok(Json(json!({ "trips": trips })))
}

pub async fn create_trip(
    State(state): State<AppState>,
    Json(req): Json<TripNameRequest>,
) -> ServerResult<(StatusCode, Json<Value>)> {
    let name = req.required_name()?;
    let trip = state.store.create_trip(name)?;
    tracing::info!(trip = %trip.id, "created trip");
    Ok((StatusCode::CREATED, Json(json!({ "trip": trip }))))
}

pub async fn get_trip(
    State(state): State<AppState>,
    Path(id): Path<TripId>,
) -> ServerResult<Json<Value>> {
    let trip = state.store.get_trip(&id)?.ok_or(ServerError::NotFound)?;
    Ok(Json(json!({ "trip": trip })))
}

pub async fn rename_trip(
    State(state): State<AppState>,
    Path(id): Path<TripId>,
    Json(req): Json<TripNameRequest>,
) -> ServerResult<Json<Value>> {
    let name = req.required_name()?;
    let trip = state.store.rename_trip(&id, name)?;
    Ok(Json(json!({ "trip": trip })))
}

pub async fn delete_trip(
    State(state): State<AppState>,
    Path(id): Path<TripId>,
) -> ServerResult<StatusCode> {
    if state.store.delete_trip(&id)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ServerError::NotFound)
    }
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct AddItemsRequest {
    pub items: Option<Vec<String>>,
    pub text: Option<String>,
    pub added_by: Option<String>,
}

impl AddItemsRequest {
    /// The candidate batch: an explicit array, or a single text value.
    ///
    /// A present `items` field wins even when empty; `text` is only
    /// consulted when `items` is absent.
    fn candidates(&self) -> ServerResult<Vec<String>> {
        if let Some(items) = &self.items {
            if items.is_empty() {
                return Err(ServerError::BadRequest("items or text required".into()));
            }
            return Ok(items.clone());
        }
        if let Some(text) = &self.text {
            return Ok(vec![text.clone()]);
        }
        Err(ServerError::BadRequest("items or text required".into()))
    }
}

pub async fn list_items(
    State(state): State<AppState>,
    Path(id): Path<TripId>,
) -> ServerResult<Json<Value>> {
    let trip = state.store.get_trip(&id)?.ok_or(ServerError::NotFound)?;
    Ok(Json(json!({ "items": trip.items })))
}

pub async fn add_items(
    State(state): State<AppState>,
    Path(id): Path<TripId>,
    Json(req): Json<AddItemsRequest>,
) -> ServerResult<(StatusCode, Json<MergeOutcome>)> {
    let candidates = req.candidates()?;
    let outcome = state
        .store
        .add_items(&id, &candidates, req.added_by.as_deref())?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

#[derive(Debug, Default, Deserialize)]
pub struct PatchItemRequest {
    pub done: Option<bool>,
    pub text: Option<String>,
}

pub async fn patch_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(TripId, ItemId)>,
    Json(req): Json<PatchItemRequest>,
) -> ServerResult<Json<Value>> {
    // Text edit applies before the done flag.
    let item = match &req.text {
        Some(text) => {
            let updated = state.store.update_item_text(&id, &item_id, text)?;
            match req.done {
                Some(done) => state.store.set_item_done(&id, &item_id, Some(done))?,
                None => updated,
            }
        }
        None => state.store.set_item_done(&id, &item_id, req.done)?,
    };
    Ok(Json(json!({ "item": item })))
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(TripId, ItemId)>,
) -> ServerResult<Json<Value>> {
    if state.store.delete_item(&id, &item_id)? {
        Ok(Json(json!({ "ok": true })))
    } else {
        Err(ServerError::NotFound)
    }
}

// ---------------------------------------------------------------------------
// Share links
// ---------------------------------------------------------------------------

pub async fn share_link(
    State(state): State<AppState>,
    Path(id): Path<TripId>,
) -> ServerResult<Json<Value>> {
    let trip = state.store.get_trip(&id)?.ok_or(ServerError::NotFound)?;
    let url = format!("{}/trips/share/{}", state.base_url, trip.share_token);
    Ok(Json(json!({ "token": trip.share_token, "url": url })))
}

pub async fn resolve_share(
    State(state): State<AppState>,
    Path(token): Path<ShareToken>,
) -> ServerResult<Json<Value>> {
    let trip = state
        .store
        .resolve_token(&token)?
        .ok_or(ServerError::NotFound)?;
    Ok(Json(json!({ "trip": trip })))
}

pub async fn submit_via_share(
    State(state): State<AppState>,
    Path(token): Path<ShareToken>,
    Json(req): Json<AddItemsRequest>,
) -> ServerResult<(StatusCode, Json<MergeOutcome>)> {
    let candidates = req.candidates()?;
    let trip = state
        .store
        .resolve_token(&token)?
        .ok_or(ServerError::NotFound)?;
    let outcome = state
        .store
        .add_items(&trip.id, &candidates, Some("shared-link"))?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

// ---------------------------------------------------------------------------
// Chat import
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ChatImportRequest {
    pub text: String,
}

/// Import assistant-generated text: extract list lines, then merge them
/// into the trip with `added_by = "ai"`. Text below the list-line
/// threshold yields an empty batch and `added = 0, skipped = 0`.
pub async fn chat_import(
    State(state): State<AppState>,
    Path(id): Path<TripId>,
    Json(req): Json<ChatImportRequest>,
) -> ServerResult<(StatusCode, Json<MergeOutcome>)> {
    let candidates = state.extractor.extract(&req.text);
    let outcome = state.store.add_items(&id, &candidates, Some("ai"))?;
    Ok((StatusCode::CREATED, Json(outcome)))
}
