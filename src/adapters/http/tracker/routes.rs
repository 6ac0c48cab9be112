//! HTTP routes for tracker endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{create_session, get_session, record_kpi, record_savings, TrackerAppState};

/// Creates the tracker router.
pub fn tracker_router() -> Router<TrackerAppState> {
    Router::new()
        // POST /api/tracker/sessions
        .route("/api/tracker/sessions", post(create_session))
        // GET /api/tracker/sessions/:id
        .route("/api/tracker/sessions/:id", get(get_session))
        // POST /api/tracker/sessions/:id/kpis
        .route("/api/tracker/sessions/:id/kpis", post(record_kpi))
        // POST /api/tracker/sessions/:id/savings
        .route("/api/tracker/sessions/:id/savings", post(record_savings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::adapters::{InMemorySessionLogStore, SystemClock};
    use crate::domain::foundation::SessionId;

    fn app() -> Router {
        tracker_router().with_state(TrackerAppState::new(
            Arc::new(InMemorySessionLogStore::new()),
            Arc::new(SystemClock),
        ))
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn session_lifecycle() {
        let app = app();

        let response = app
            .clone()
            .oneshot(post_json("/api/tracker/sessions", ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = json_body(response).await;
        let id = created["id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(post_json(
                &format!("/api/tracker/sessions/{}/kpis", id),
                r#"{"metric": "Store uptime", "value": 99.9, "unit": "%"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .clone()
            .oneshot(post_json(
                &format!("/api/tracker/sessions/{}/savings", id),
                r#"{"initiative": "WAN consolidation", "amount": 4200.0}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let recorded = json_body(response).await;
        assert_eq!(recorded["entry"]["category"], "Uncategorized");

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/tracker/sessions/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let log = json_body(response).await;
        assert_eq!(log["kpis"][0]["metric"], "Store uptime");
        assert_eq!(log["summary"]["total_savings"], 4200.0);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/tracker/sessions/{}", SessionId::new()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = json_body(response).await;
        assert_eq!(json["code"], "SESSION_NOT_FOUND");
    }

    #[tokio::test]
    async fn malformed_session_id_is_bad_request() {
        let response = app()
            .oneshot(post_json(
                "/api/tracker/sessions/not-a-uuid/kpis",
                r#"{"metric": "Uptime", "value": 1.0}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn negative_savings_is_bad_request() {
        let app = app();
        let response = app
            .clone()
            .oneshot(post_json("/api/tracker/sessions", ""))
            .await
            .unwrap();
        let id = json_body(response).await["id"].as_str().unwrap().to_string();

        let response = app
            .oneshot(post_json(
                &format!("/api/tracker/sessions/{}/savings", id),
                r#"{"initiative": "Refund", "amount": -10.0}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await;
        assert_eq!(json["details"]["field"], "amount");
    }
}
