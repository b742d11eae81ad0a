pub mod api;
pub mod auth;
pub mod dashboard;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let auth_route = state.config.auth_route.clone();

    Router::new()
        .route("/health", get(health::health_handler))
        // Gated dashboard
        .route("/", get(dashboard::handle_dashboard))
        // Sign-in flow
        .route(&auth_route, get(auth::handle_sign_in_page))
        .route(&format!("{auth_route}/login"), post(auth::handle_login))
        .route(&format!("{auth_route}/logout"), post(auth::handle_logout))
        // JSON API
        .route("/api/v1/session", get(api::handle_get_session))
        .route("/api/v1/resumes", get(api::handle_list_resumes))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::config::Config;
    use crate::errors::AppError;
    use crate::models::resume::summary;
    use crate::models::ResumeCollection;
    use crate::resumes::{MockResumeSource, ResumeSource, StaticSource};

    fn state_with(collection: ResumeCollection) -> AppState {
        AppState::new(Config::default(), Arc::new(StaticSource::new(collection)))
    }

    fn two_resumes() -> ResumeCollection {
        ResumeCollection::new(vec![summary("r1"), summary("r2")]).unwrap()
    }

    fn signed_in(state: &AppState) -> String {
        let token: Uuid = state.sessions.create("ada");
        format!("session={token}")
    }

    async fn get(state: &AppState, uri: &str, cookie: Option<&str>) -> Response {
        let mut req = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }
        build_router(state.clone())
            .oneshot(req.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_form(state: &AppState, uri: &str, body: &str, cookie: Option<&str>) -> Response {
        let mut req = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }
        build_router(state.clone())
            .oneshot(req.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(resp: Response) -> String {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn location(resp: &Response) -> &str {
        resp.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_health() {
        let resp = get(&state_with(ResumeCollection::empty()), "/health", None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let json: Value = serde_json::from_str(&body_text(resp).await).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_anonymous_root_redirects_to_auth_with_next() {
        let resp = get(&state_with(two_resumes()), "/", None).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/auth?next=/");
    }

    #[tokio::test]
    async fn test_stale_cookie_redirects() {
        let cookie = format!("session={}", Uuid::new_v4());
        let resp = get(&state_with(two_resumes()), "/", Some(&cookie)).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn test_signed_in_root_renders_cards_in_order() {
        let state = state_with(two_resumes());
        let cookie = signed_in(&state);

        let resp = get(&state, "/", Some(&cookie)).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let html = body_text(resp).await;

        assert_eq!(html.matches("class=\"resume-card\"").count(), 2);
        assert!(html.find("data-key=\"r1\"").unwrap() < html.find("data-key=\"r2\"").unwrap());
    }

    #[tokio::test]
    async fn test_signed_in_empty_collection_has_heading_only() {
        let state = state_with(ResumeCollection::empty());
        let cookie = signed_in(&state);

        let html = body_text(get(&state, "/", Some(&cookie)).await).await;
        assert!(html.contains("page-heading"));
        assert!(html.contains("navbar"));
        assert!(!html.contains("resumes-section"));
    }

    #[tokio::test]
    async fn test_repeat_visits_are_stable() {
        let state = state_with(two_resumes());
        let cookie = signed_in(&state);

        let first = body_text(get(&state, "/", Some(&cookie)).await).await;
        let second = body_text(get(&state, "/", Some(&cookie)).await).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_source_failure_is_bad_gateway() {
        let mut source = MockResumeSource::new();
        source
            .expect_snapshot()
            .returning(|| Err(AppError::Source("unreachable".into())));
        source.expect_describe().return_const("mock".to_string());
        let source: Arc<dyn ResumeSource> = Arc::new(source);
        let state = AppState::new(Config::default(), source);
        let cookie = signed_in(&state);

        let resp = get(&state, "/", Some(&cookie)).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_anonymous_visit_never_reads_collection() {
        let mut source = MockResumeSource::new();
        source.expect_snapshot().times(0);
        let state = AppState::new(Config::default(), Arc::new(source));

        let resp = get(&state, "/", None).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn test_sign_in_page_sanitizes_next() {
        let state = state_with(ResumeCollection::empty());
        let resp = get(&state, "/auth?next=https://evil.example", None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let html = body_text(resp).await;
        assert!(html.contains("name=\"next\" value=\"/\""));
        assert!(html.contains("action=\"/auth/login\""));
    }

    #[tokio::test]
    async fn test_sign_in_page_bounces_authenticated_viewer() {
        let state = state_with(ResumeCollection::empty());
        let cookie = signed_in(&state);
        let resp = get(&state, "/auth?next=/upload", Some(&cookie)).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/upload");
    }

    #[tokio::test]
    async fn test_login_sets_cookie_and_returns_to_next() {
        let state = state_with(two_resumes());
        let resp = post_form(&state, "/auth/login", "username=ada&next=%2F%3Ftab%3D1", None).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/?tab=1");
        let cookie = resp
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .to_string();
        assert!(cookie.starts_with("session="));

        let resp = get(&state, "/", Some(&cookie)).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_login_requires_username() {
        let state = state_with(ResumeCollection::empty());
        let resp = post_form(&state, "/auth/login", "username=+&next=%2F", None).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(state.sessions.is_empty());
    }

    #[tokio::test]
    async fn test_logout_ends_session() {
        let state = state_with(two_resumes());
        let cookie = signed_in(&state);

        let resp = post_form(&state, "/auth/logout", "", Some(&cookie)).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/auth?next=/");

        let resp = get(&state, "/", Some(&cookie)).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn test_api_resumes_requires_session() {
        let state = state_with(two_resumes());
        let resp = get(&state, "/api/v1/resumes", None).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let cookie = signed_in(&state);
        let resp = get(&state, "/api/v1/resumes", Some(&cookie)).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let json: Value = serde_json::from_str(&body_text(resp).await).unwrap();
        assert_eq!(json[0]["id"], "r1");
        assert_eq!(json[1]["id"], "r2");
    }

    #[tokio::test]
    async fn test_api_session_reflects_cookie() {
        let state = state_with(ResumeCollection::empty());
        let json: Value =
            serde_json::from_str(&body_text(get(&state, "/api/v1/session", None).await).await)
                .unwrap();
        assert_eq!(json["isAuthenticated"], false);
        assert_eq!(json["isLoading"], false);

        let cookie = signed_in(&state);
        let json: Value = serde_json::from_str(
            &body_text(get(&state, "/api/v1/session", Some(&cookie)).await).await,
        )
        .unwrap();
        assert_eq!(json["isAuthenticated"], true);
    }
}
