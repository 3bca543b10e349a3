//! HTTP server for PackPal.
//!
//! Exposes trips and their packing lists over a REST API: trip CRUD, item
//! add/toggle/edit/delete, share-link resolution and anonymous submission,
//! and chat import (assistant text through the extractor into the merge
//! engine). All mutating item routes funnel through the same
//! [`packpal_store::TripStore`] merge path, so duplicate suppression
//! behaves identically for typed input, shared links, and chat imports.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use router::build_router;
pub use server::PackpalServer;
pub use state::AppState;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn app() -> Router {
        build_router(AppState::in_memory())
    }

    async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn create_trip(app: &Router, name: &str) -> Value {
        let (status, body) = call(app, "POST", "/v1/trips", Some(json!({ "name": name }))).await;
        assert_eq!(status, StatusCode::CREATED);
        body["trip"].clone()
    }

    #[tokio::test]
    async fn health_endpoint() {
        let (status, body) = call(&app(), "GET", "/v1/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn info_endpoint() {
        let (status, body) = call(&app(), "GET", "/v1/info", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "packpal-server");
    }

    #[tokio::test]
    async fn trip_lifecycle() {
        let app = app();
        let trip = create_trip(&app, "Beach Week").await;
        let id = trip["id"].as_str().unwrap().to_string();

        let (status, body) = call(&app, "GET", &format!("/v1/trips/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["trip"]["name"], "Beach Week");

        let (status, body) = call(
            &app,
            "PATCH",
            &format!("/v1/trips/{id}"),
            Some(json!({ "name": " Lake Week " })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["trip"]["name"], "Lake Week");

        let (status, _) = call(&app, "DELETE", &format!("/v1/trips/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = call(&app, "GET", &format!("/v1/trips/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not found");
    }

    #[tokio::test]
    async fn create_trip_requires_name() {
        let (status, body) = call(&app(), "POST", "/v1/trips", Some(json!({ "name": "  " }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "name required");
    }

    #[tokio::test]
    async fn list_trips_in_creation_order() {
        let app = app();
        create_trip(&app, "first").await;
        create_trip(&app, "second").await;

        let (status, body) = call(&app, "GET", "/v1/trips", None).await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body["trips"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn add_items_deduplicates() {
        let app = app();
        let trip = create_trip(&app, "Camping").await;
        let id = trip["id"].as_str().unwrap().to_string();
        let uri = format!("/v1/trips/{id}/items");

        let (status, body) = call(
            &app,
            "POST",
            &uri,
            Some(json!({ "items": ["Tent", "Stove", "tent."], "added_by": "me" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["added"], 2);
        assert_eq!(body["skipped"], 1);

        // Resubmitting the same batch is all duplicates.
        let (_, body) = call(&app, "POST", &uri, Some(json!({ "items": ["Tent", "Stove"] }))).await;
        assert_eq!(body["added"], 0);
        assert_eq!(body["skipped"], 2);

        let (_, body) = call(&app, "GET", &uri, None).await;
        let texts: Vec<&str> = body["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["text"].as_str().unwrap())
            .collect();
        assert_eq!(texts, vec!["Tent", "Stove"]);
    }

    #[tokio::test]
    async fn single_text_body_is_accepted() {
        let app = app();
        let trip = create_trip(&app, "t").await;
        let id = trip["id"].as_str().unwrap();

        let (status, body) = call(
            &app,
            "POST",
            &format!("/v1/trips/{id}/items"),
            Some(json!({ "text": "Jacket (warm" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["created"][0]["text"], "Jacket (warm)");
    }

    #[tokio::test]
    async fn add_items_requires_payload() {
        let app = app();
        let trip = create_trip(&app, "t").await;
        let id = trip["id"].as_str().unwrap();

        let (status, body) = call(
            &app,
            "POST",
            &format!("/v1/trips/{id}/items"),
            Some(json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "items or text required");
    }

    #[tokio::test]
    async fn empty_items_array_is_rejected_even_with_text() {
        let app = app();
        let trip = create_trip(&app, "t").await;
        let id = trip["id"].as_str().unwrap();
        let uri = format!("/v1/trips/{id}/items");

        let (status, body) = call(&app, "POST", &uri, Some(json!({ "items": [] }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "items or text required");

        // A present items field wins over text, even when empty.
        let (status, _) = call(
            &app,
            "POST",
            &uri,
            Some(json!({ "items": [], "text": "Towel" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = call(&app, "GET", &uri, None).await;
        assert!(body["items"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_items_to_unknown_trip_is_404() {
        let id = packpal_types::TripId::new();
        let (status, _) = call(
            &app(),
            "POST",
            &format!("/v1/trips/{id}/items"),
            Some(json!({ "items": ["x"] })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn item_toggle_edit_delete() {
        let app = app();
        let trip = create_trip(&app, "t").await;
        let id = trip["id"].as_str().unwrap().to_string();

        let (_, body) = call(
            &app,
            "POST",
            &format!("/v1/trips/{id}/items"),
            Some(json!({ "items": ["Towel"] })),
        )
        .await;
        let item_id = body["created"][0]["id"].as_str().unwrap().to_string();
        let item_uri = format!("/v1/trips/{id}/items/{item_id}");

        // Explicit done.
        let (status, body) = call(&app, "PATCH", &item_uri, Some(json!({ "done": true }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["item"]["done"], true);

        // No done value toggles.
        let (_, body) = call(&app, "PATCH", &item_uri, Some(json!({}))).await;
        assert_eq!(body["item"]["done"], false);

        // Text edit re-balances brackets.
        let (_, body) = call(&app, "PATCH", &item_uri, Some(json!({ "text": "Towel (big" }))).await;
        assert_eq!(body["item"]["text"], "Towel (big)");

        let (status, body) = call(&app, "DELETE", &item_uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);

        let (status, _) = call(&app, "DELETE", &item_uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn share_link_flow() {
        let app = app();
        let trip = create_trip(&app, "Shared").await;
        let id = trip["id"].as_str().unwrap().to_string();

        let (status, body) = call(&app, "GET", &format!("/v1/trips/{id}/share"), None).await;
        assert_eq!(status, StatusCode::OK);
        let token = body["token"].as_str().unwrap().to_string();
        assert_eq!(
            body["url"],
            format!("http://127.0.0.1:8080/trips/share/{token}")
        );

        let (status, body) = call(&app, "GET", &format!("/v1/trips/token/{token}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["trip"]["id"].as_str().unwrap(), id);

        let (status, body) = call(
            &app,
            "POST",
            &format!("/v1/trips/token/{token}"),
            Some(json!({ "items": ["Snacks"] })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["added"], 1);
        assert_eq!(body["created"][0]["added_by"], "shared-link");
    }

    #[tokio::test]
    async fn unknown_share_token_is_404() {
        let token = packpal_types::ShareToken::new();
        let (status, _) = call(&app(), "GET", &format!("/v1/trips/token/{token}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn chat_import_respects_threshold() {
        let app = app();
        let trip = create_trip(&app, "AI Trip").await;
        let id = trip["id"].as_str().unwrap().to_string();
        let uri = format!("/v1/trips/{id}/chat");

        // Two bullets inside prose: not a list, nothing added.
        let (status, body) = call(
            &app,
            "POST",
            &uri,
            Some(json!({ "text": "Maybe bring:\n- Sunscreen\n- Towel" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["added"], 0);
        assert_eq!(body["skipped"], 0);

        let (_, body) = call(
            &app,
            "POST",
            &uri,
            Some(json!({
                "text": "Packing list:\n- Sunscreen\n- Towel — for the beach\n- Hat"
            })),
        )
        .await;
        assert_eq!(body["added"], 3);
        assert_eq!(body["created"][1]["text"], "Towel");
        assert_eq!(body["created"][0]["added_by"], "ai");
    }
}
