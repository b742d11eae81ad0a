use std::sync::Mutex;

use axum::{
    extract::State,
    http::{HeaderMap, Uri},
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::errors::AppError;
use crate::gate::{AccessGate, GateDecision, NavigationTarget, Navigator};
use crate::routes::auth::session_token;
use crate::state::AppState;
use crate::view::html::{render_dashboard, render_pending};
use crate::view::DashboardView;

/// Navigator for a single HTTP visit: the navigation becomes a 303 response.
#[derive(Default)]
struct ResponseNavigator {
    target: Mutex<Option<NavigationTarget>>,
}

impl Navigator for ResponseNavigator {
    fn navigate(&self, target: &NavigationTarget) {
        *self.target.lock().unwrap_or_else(|e| e.into_inner()) = Some(target.clone());
    }
}

impl ResponseNavigator {
    fn into_redirect(self, fallback: &str) -> Response {
        let target = self.target.into_inner().unwrap_or_else(|e| e.into_inner());
        match target {
            Some(target) => Redirect::to(&target.href()).into_response(),
            None => Redirect::to(fallback).into_response(),
        }
    }
}

/// GET /
/// Gated dashboard. Every request is a fresh visit with its own gate.
pub async fn handle_dashboard(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let location = uri.path_and_query().map_or("/", |pq| pq.as_str());
    let token = session_token(&headers, &state.config.session_cookie);
    let session = state.sessions.session_for(token);

    let mut gate = AccessGate::with_auth_route(&state.config.auth_route, location);
    let navigator = ResponseNavigator::default();

    match gate.on_render(session, &navigator) {
        GateDecision::Pending => Ok(Html(render_pending()).into_response()),
        GateDecision::Proceed => {
            let collection = state.resumes.snapshot().await?;
            let view = DashboardView::render(&collection);
            debug!(
                "Rendering dashboard with {} cards from {}",
                view.card_count(),
                state.resumes.describe()
            );
            Ok(Html(render_dashboard(&view)).into_response())
        }
        GateDecision::Redirect(_) | GateDecision::Redirected => {
            Ok(navigator.into_redirect(&state.config.auth_route))
        }
    }
}
