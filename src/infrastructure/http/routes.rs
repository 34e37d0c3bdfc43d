//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping          GET   健康检查
//! - /api/team/{id}     GET   根据 ID 获取球队（不存在返回 null）
//! - /api/teams         GET   分页列出球队（sort / page / size）
//! - /api/team          POST  新增球队（含名单）

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/team", post(handlers::add_team))
        .route("/team/:id", get(handlers::get_team))
        .route("/teams", get(handlers::list_teams))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use crate::infrastructure::memory::InMemoryTeamRepository;

    fn app() -> Router {
        let state = AppState::new(Arc::new(InMemoryTeamRepository::new()));
        create_routes().with_state(Arc::new(state))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn add(app: &Router, name: &str, acronym: &str) -> Value {
        let (status, body) = send(
            app,
            Method::POST,
            "/api/team",
            Some(json!({ "name": name, "acronym": acronym, "budget": 100 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body
    }

    #[tokio::test]
    async fn test_ping() {
        let (status, body) = send(&app(), Method::GET, "/api/ping", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_add_then_get_round_trip() {
        let app = app();
        let (status, saved) = send(
            &app,
            Method::POST,
            "/api/team",
            Some(json!({
                "name": "Real Madrid",
                "acronym": "RMA",
                "budget": 1500,
                "players": [
                    { "name": "Courtois", "position": "GK" },
                    { "name": "Vinicius", "position": "LW" }
                ]
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let id = saved["id"].as_i64().unwrap();
        assert!(id > 0);
        assert!(saved["players"][0]["id"].as_i64().unwrap() > 0);
        assert!(saved["players"][1]["id"].as_i64().unwrap() > 0);

        let (status, fetched) = send(&app, Method::GET, &format!("/api/team/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, saved);
        assert_eq!(fetched["players"][1]["position"], "LW");
    }

    #[tokio::test]
    async fn test_get_missing_team_returns_null() {
        let (status, body) = send(&app(), Method::GET, "/api/team/-1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::Null);
    }

    #[tokio::test]
    async fn test_add_invalid_team_reports_each_field() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/team",
            Some(json!({ "name": "", "budget": 0, "players": [{ "name": "X" }] })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "name": "Please provide a team name",
                "acronym": "Please provide a team acronym",
                "budget": "Team budget must be greater than 0",
                "players[0].position": "Please provide a player position"
            })
        );
    }

    #[tokio::test]
    async fn test_list_pagination() {
        let app = app();
        for name in ["a", "b", "c", "d", "e"] {
            add(&app, name, "X").await;
        }

        let (status, first) = send(&app, Method::GET, "/api/teams?page=0&size=2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first["content"].as_array().unwrap().len(), 2);
        assert_eq!(first["totalElements"], 5);
        assert_eq!(first["totalPages"], 3);
        assert_eq!(first["first"], true);
        assert_eq!(first["last"], false);

        let (_, last) = send(&app, Method::GET, "/api/teams?page=2&size=2", None).await;
        assert_eq!(last["content"].as_array().unwrap().len(), 1);
        assert_eq!(last["first"], false);
        assert_eq!(last["last"], true);
    }

    #[tokio::test]
    async fn test_list_default_page_size() {
        let app = app();
        add(&app, "a", "A").await;

        let (_, page) = send(&app, Method::GET, "/api/teams", None).await;
        assert_eq!(page["size"], 20);
        assert_eq!(page["number"], 0);
    }

    #[tokio::test]
    async fn test_list_sorted() {
        let app = app();
        add(&app, "Lazio", "LAZ").await;
        add(&app, "Atalanta", "ATA").await;
        add(&app, "Lazio", "SSL").await;

        let (_, page) = send(&app, Method::GET, "/api/teams?sort=name:1,acronym:-1", None).await;
        let keys: Vec<(String, String)> = page["content"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| {
                (
                    t["name"].as_str().unwrap().to_string(),
                    t["acronym"].as_str().unwrap().to_string(),
                )
            })
            .collect();
        assert_eq!(
            keys,
            vec![
                ("Atalanta".to_string(), "ATA".to_string()),
                ("Lazio".to_string(), "SSL".to_string()),
                ("Lazio".to_string(), "LAZ".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_malformed_sort_is_bad_request() {
        let (status, body) = send(&app(), Method::GET, "/api/teams?sort=name", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errno"], 400);
        assert!(body["error"].as_str().unwrap().contains("name"));
    }

    #[tokio::test]
    async fn test_unknown_sort_field_is_bad_request() {
        let (status, _) = send(&app(), Method::GET, "/api/teams?sort=color:1", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
