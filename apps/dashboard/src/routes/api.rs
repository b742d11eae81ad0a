use axum::{extract::State, http::HeaderMap, Json};

use crate::errors::AppError;
use crate::models::{ResumeCollection, Session};
use crate::routes::auth::session_token;
use crate::state::AppState;

fn caller_session(state: &AppState, headers: &HeaderMap) -> Session {
    let token = session_token(headers, &state.config.session_cookie);
    state.sessions.session_for(token)
}

/// GET /api/v1/session
pub async fn handle_get_session(State(state): State<AppState>, headers: HeaderMap) -> Json<Session> {
    Json(caller_session(&state, &headers))
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ResumeCollection>, AppError> {
    if !caller_session(&state, &headers).is_authenticated {
        return Err(AppError::Unauthorized);
    }
    Ok(Json(state.resumes.snapshot().await?))
}
