//! Session snapshot handler.

use axum::extract::State;
use axum::Json;

use crate::session::SessionSnapshot;
use crate::state::AppState;

/// Return the current session state.
pub async fn get_session(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.session.snapshot())
}
