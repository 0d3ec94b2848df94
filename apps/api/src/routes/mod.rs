pub mod health;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::document::handlers as document;
use crate::render::handlers as render;
use crate::scoring::handlers as scoring;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Document API
        .route("/api/v1/resume", get(document::handle_get_resume))
        .route(
            "/api/v1/resume/sections/:section",
            put(document::handle_replace_section),
        )
        .route(
            "/api/v1/resume/sections/:section/:field",
            patch(document::handle_merge_field),
        )
        .route(
            "/api/v1/resume/lists/:list",
            post(document::handle_append_item),
        )
        .route(
            "/api/v1/resume/lists/:list/:index",
            put(document::handle_update_item).delete(document::handle_remove_item),
        )
        .route(
            "/api/v1/resume/skills/suggest",
            post(document::handle_suggest_skills),
        )
        .route(
            "/api/v1/resume/skills/:category",
            post(document::handle_add_skill),
        )
        .route(
            "/api/v1/resume/skills/:category/:index",
            delete(document::handle_remove_skill),
        )
        .route(
            "/api/v1/resume/projects/:index/tech-stack",
            post(document::handle_add_tech_tag),
        )
        .route(
            "/api/v1/resume/projects/:index/tech-stack/:tag",
            delete(document::handle_remove_tech_tag),
        )
        .route("/api/v1/resume/preset", post(document::handle_load_preset))
        // Scoring API
        .route("/api/v1/resume/score", get(scoring::handle_get_score))
        // Render API
        .route(
            "/api/v1/preferences",
            get(render::handle_get_preferences).put(render::handle_update_preferences),
        )
        .route("/api/v1/preferences/palette", get(render::handle_palette))
        .route("/api/v1/render", get(render::handle_render))
        .route("/api/v1/export/text", get(render::handle_export_text))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::session::Session;
    use crate::storage::{KeyValueStore, MemoryStore};

    async fn test_app() -> Router {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::default());
        let session = Session::restore(store).await;
        let config = Config {
            port: 0,
            rust_log: "debug".into(),
            storage_path: None,
        };
        build_router(AppState::new(session, config))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };
        app.clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app().await;
        let response = send(&app, Method::GET, "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["storage"], "memory");
    }

    #[tokio::test]
    async fn test_get_resume_starts_empty() {
        let app = test_app().await;
        let json = body_json(send(&app, Method::GET, "/api/v1/resume", None).await).await;
        assert_eq!(json["document"]["personal"]["name"], "");
        assert_eq!(json["score"]["score"], 0);
        assert_eq!(json["score"]["improvements"].as_array().unwrap().len(), 11);
    }

    #[tokio::test]
    async fn test_merge_field_rescores() {
        let app = test_app().await;
        let response = send(
            &app,
            Method::PATCH,
            "/api/v1/resume/sections/personal/name",
            Some(json!("Ira Quinn")),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["document"]["personal"]["name"], "Ira Quinn");
        assert_eq!(json["score"]["score"], 10);

        let json = body_json(send(&app, Method::GET, "/api/v1/resume", None).await).await;
        assert_eq!(json["document"]["personal"]["name"], "Ira Quinn");
    }

    #[tokio::test]
    async fn test_append_project_assigns_id() {
        let app = test_app().await;
        let response = send(
            &app,
            Method::POST,
            "/api/v1/resume/lists/projects",
            Some(json!({ "title": "Ledger", "techStack": ["Rust"] })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let project = &json["document"]["projects"][0];
        assert_eq!(project["title"], "Ledger");
        assert!(!project["id"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_out_of_range_is_noop() {
        let app = test_app().await;
        send(&app, Method::POST, "/api/v1/resume/preset", None).await;

        let response = send(&app, Method::DELETE, "/api/v1/resume/lists/experience/9", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["document"]["experience"].as_array().unwrap().len(), 2);
        assert_eq!(json["score"]["score"], 100);
    }

    #[tokio::test]
    async fn test_unknown_section_is_bad_request() {
        let app = test_app().await;
        let response = send(
            &app,
            Method::PUT,
            "/api/v1/resume/sections/hobbies",
            Some(json!("chess")),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["message"], "unknown section 'hobbies'");
    }

    #[tokio::test]
    async fn test_skills_and_suggestions() {
        let app = test_app().await;
        send(
            &app,
            Method::POST,
            "/api/v1/resume/skills/technical",
            Some(json!({ "value": " Rust " })),
        )
        .await;
        let response = send(&app, Method::POST, "/api/v1/resume/skills/suggest", None).await;
        let json = body_json(response).await;
        let technical = json["document"]["skills"]["technical"].as_array().unwrap();
        assert_eq!(technical[0], "Rust");
        assert!(technical.len() > 1);
    }

    #[tokio::test]
    async fn test_score_report() {
        let app = test_app().await;
        send(&app, Method::POST, "/api/v1/resume/preset", None).await;

        let json = body_json(send(&app, Method::GET, "/api/v1/resume/score", None).await).await;
        assert_eq!(json["score"], 100);
        assert_eq!(json["band_label"], "Strong Resume");
        assert_eq!(json["complete"], true);
    }

    #[tokio::test]
    async fn test_render_with_overrides() {
        let app = test_app().await;
        send(&app, Method::POST, "/api/v1/resume/preset", None).await;

        let uri = "/api/v1/render?template=modern&color=navy";
        let response = send(&app, Method::GET, uri, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["template"], "modern");
        assert_eq!(json["accent_color"], "hsl(220, 60%, 35%)");

        let response = send(&app, Method::GET, "/api/v1/render?template=fancy", None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_preferences_partial_update() {
        let app = test_app().await;
        let response = send(
            &app,
            Method::PUT,
            "/api/v1/preferences",
            Some(json!({ "templateId": "minimal" })),
        )
        .await;
        let json = body_json(response).await;
        assert_eq!(json["templateId"], "minimal");
        assert_eq!(json["accentColor"], "hsl(168, 60%, 40%)");

        let response = send(
            &app,
            Method::PUT,
            "/api/v1/preferences",
            Some(json!({ "accentColor": "" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_export_text() {
        let app = test_app().await;
        let response = send(&app, Method::GET, "/api/v1/export/text", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8(bytes.to_vec()).unwrap().starts_with("NAME"));
    }

    #[tokio::test]
    async fn test_unknown_template_in_preferences_is_validation_error() {
        let app = test_app().await;
        let response = send(
            &app,
            Method::PUT,
            "/api/v1/preferences",
            Some(json!({ "templateId": "fancy" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["message"], "unknown template 'fancy'");
    }

    #[tokio::test]
    async fn test_malformed_tag_body_is_invalid_document() {
        let app = test_app().await;
        for uri in [
            "/api/v1/resume/skills/technical",
            "/api/v1/resume/projects/0/tech-stack",
        ] {
            let response = send(&app, Method::POST, uri, Some(json!({ "val": "x" }))).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");

            let json = body_json(response).await;
            assert_eq!(json["error"]["code"], "INVALID_DOCUMENT", "{uri}");
        }
    }

    #[tokio::test]
    async fn test_update_project_without_id_keeps_generated_id() {
        let app = test_app().await;
        let json = body_json(
            send(
                &app,
                Method::POST,
                "/api/v1/resume/lists/projects",
                Some(json!({ "title": "Draft" })),
            )
            .await,
        )
        .await;
        let id = json["document"]["projects"][0]["id"].clone();

        let response = send(
            &app,
            Method::PUT,
            "/api/v1/resume/lists/projects/0",
            Some(json!({ "title": "Ledger" })),
        )
        .await;
        let json = body_json(response).await;
        assert_eq!(json["document"]["projects"][0]["title"], "Ledger");
        assert_eq!(json["document"]["projects"][0]["id"], id);
    }
}
