use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/calendar/prev", post(handlers::prev_month))
        .route("/calendar/next", post(handlers::next_month))
        .route("/api/calendar", get(handlers::get_calendar))
        .route("/api/calendar/navigate", post(handlers::navigate))
        .route("/api/calendar/reset", post(handlers::reset_month))
        .route("/api/modal/open", post(handlers::open_day))
        .route("/api/modal/select", post(handlers::select_activity))
        .route("/api/modal/save", post(handlers::save_entry))
        .route("/api/modal/delete", post(handlers::delete_entry))
        .route("/api/modal/close", post(handlers::close_modal))
        .with_state(state)
}
