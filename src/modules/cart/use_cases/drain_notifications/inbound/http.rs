use axum::{Json, extract::State};

use crate::shared::infrastructure::notifier::Notification;
use crate::shell::state::AppState;

/// Hands pending notifications to the UI, oldest first, and clears them.
pub async fn handle(State(state): State<AppState>) -> Json<Vec<Notification>> {
    Json(state.notifications.drain())
}
