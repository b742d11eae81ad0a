use axum::{
    extract::{Query, State},
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap, StatusCode,
    },
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::gate::{auth_redirect, sanitize_return_to};
use crate::state::AppState;
use crate::view::html::render_sign_in;

/// Session token carried in the request's cookies, if any parses.
pub(crate) fn session_token(headers: &HeaderMap, cookie_name: &str) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

fn session_cookie(name: &str, token: Uuid) -> String {
    format!("{name}={token}; Path=/; HttpOnly; SameSite=Lax")
}

fn cleared_cookie(name: &str) -> String {
    format!("{name}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

fn login_action(state: &AppState) -> String {
    format!("{}/login", state.config.auth_route)
}

#[derive(Deserialize)]
pub struct AuthQuery {
    pub next: Option<String>,
}

/// GET /auth
pub async fn handle_sign_in_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<AuthQuery>,
) -> Response {
    let next = sanitize_return_to(query.next.as_deref().unwrap_or("/"));
    let token = session_token(&headers, &state.config.session_cookie);

    if state.sessions.session_for(token).is_authenticated {
        return Redirect::to(&next).into_response();
    }

    Html(render_sign_in(&login_action(&state), &next, None)).into_response()
}

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    pub next: Option<String>,
}

/// POST /auth/login
pub async fn handle_login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    let next = sanitize_return_to(form.next.as_deref().unwrap_or("/"));
    let username = form.username.trim();

    if username.is_empty() {
        warn!("Login rejected: empty username");
        return (
            StatusCode::BAD_REQUEST,
            Html(render_sign_in(
                &login_action(&state),
                &next,
                Some("Name is required"),
            )),
        )
            .into_response();
    }

    let token = state.sessions.create(username);
    info!("Signed in {username}, returning to {next}");

    (
        [(SET_COOKIE, session_cookie(&state.config.session_cookie, token))],
        Redirect::to(&next),
    )
        .into_response()
}

/// POST /auth/logout
pub async fn handle_logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(token) = session_token(&headers, &state.config.session_cookie) {
        state.sessions.end(token);
    }

    let target = auth_redirect(&state.config.auth_route, "/");
    (
        [(SET_COOKIE, cleared_cookie(&state.config.session_cookie))],
        Redirect::to(&target.href()),
    )
        .into_response()
}
