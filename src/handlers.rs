use crate::calendar::YearMonth;
use crate::errors::AppError;
use crate::models::{
    NavigateRequest, OpenDayRequest, ResetRequest, SaveRequest, SelectActivityRequest,
    ViewResponse,
};
use crate::modal::ModalState;
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Json,
};
use tracing::{debug, info};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock().await;
    Html(render_index(&session.view()))
}

pub async fn get_calendar(State(state): State<AppState>) -> Json<ViewResponse> {
    let session = state.session.lock().await;
    Json(session.view())
}

pub async fn navigate(
    State(state): State<AppState>,
    Json(payload): Json<NavigateRequest>,
) -> Result<Json<ViewResponse>, AppError> {
    let response = advance_month(&state, payload.delta).await?;
    Ok(Json(response))
}

pub async fn prev_month(State(state): State<AppState>) -> Result<Redirect, AppError> {
    advance_month(&state, -1).await?;
    Ok(Redirect::to("/"))
}

pub async fn next_month(State(state): State<AppState>) -> Result<Redirect, AppError> {
    advance_month(&state, 1).await?;
    Ok(Redirect::to("/"))
}

async fn advance_month(state: &AppState, delta: i32) -> Result<ViewResponse, AppError> {
    let mut session = state.session.lock().await;
    let month = session
        .month
        .advance(delta)
        .ok_or_else(|| AppError::bad_request("month is outside the supported range"))?;
    session.month = month;
    debug!(%month, "displayed month changed");
    Ok(session.view())
}

pub async fn reset_month(
    State(state): State<AppState>,
    Json(payload): Json<ResetRequest>,
) -> Result<Json<ViewResponse>, AppError> {
    if !payload.confirmed {
        return Err(AppError::bad_request("resetting a month must be confirmed"));
    }

    let mut guard = state.session.lock().await;
    let session = &mut *guard;
    let month = match (payload.year, payload.month) {
        (Some(year), Some(month)) => YearMonth::new(year, month)
            .ok_or_else(|| AppError::bad_request("invalid year or month"))?,
        (None, None) => session.month,
        _ => return Err(AppError::bad_request("year and month must be given together")),
    };

    let mut store = session.store.clone();
    let removed = store.remove_month(month);
    persist_data(&state.data_path, &store).await?;
    session.store = store;
    info!(%month, removed = removed.len(), "month reset");

    Ok(Json(session.view()))
}

pub async fn open_day(
    State(state): State<AppState>,
    Json(payload): Json<OpenDayRequest>,
) -> Result<Json<ViewResponse>, AppError> {
    let month = YearMonth::new(payload.year, payload.month)
        .ok_or_else(|| AppError::bad_request("invalid year or month"))?;
    if !month.contains_day(payload.day) {
        return Err(AppError::bad_request(format!(
            "{month} has no day {}",
            payload.day
        )));
    }

    let mut guard = state.session.lock().await;
    let session = &mut *guard;
    session.modal = ModalState::open(month.date_key(payload.day), &session.store);
    Ok(Json(session.view()))
}

pub async fn select_activity(
    State(state): State<AppState>,
    Json(payload): Json<SelectActivityRequest>,
) -> Result<Json<ViewResponse>, AppError> {
    let mut session = state.session.lock().await;
    let modal = open_modal(&session.modal)?;
    session.modal = modal.select_activity_type(payload.activity_type);
    Ok(Json(session.view()))
}

pub async fn save_entry(
    State(state): State<AppState>,
    Json(payload): Json<SaveRequest>,
) -> Result<Json<ViewResponse>, AppError> {
    let mut guard = state.session.lock().await;
    let session = &mut *guard;
    let mut modal = open_modal(&session.modal)?;
    if let Some(cost_draft) = payload.cost_draft {
        modal = modal.edit_cost(cost_draft);
    }

    let date_key = modal.date_key().map(str::to_string);
    let mut store = session.store.clone();
    let (next, saved) = modal.save(&mut store);
    persist_data(&state.data_path, &store).await?;
    session.store = store;
    session.modal = next;
    if let (Some(date_key), Some(entry)) = (date_key, saved) {
        debug!(%date_key, ?entry, "log saved");
    }

    Ok(Json(session.view()))
}

pub async fn delete_entry(State(state): State<AppState>) -> Result<Json<ViewResponse>, AppError> {
    let mut guard = state.session.lock().await;
    let session = &mut *guard;
    let modal = open_modal(&session.modal)?;

    let date_key = modal.date_key().map(str::to_string);
    let mut store = session.store.clone();
    let (next, removed) = modal.delete(&mut store);
    if removed.is_some() {
        persist_data(&state.data_path, &store).await?;
        session.store = store;
        debug!(date_key = ?date_key, "log deleted");
    }
    session.modal = next;

    Ok(Json(session.view()))
}

pub async fn close_modal(State(state): State<AppState>) -> Json<ViewResponse> {
    let mut session = state.session.lock().await;
    session.modal = std::mem::take(&mut session.modal).close();
    Json(session.view())
}

/// Copy of the open modal; the session keeps its own until the action commits.
fn open_modal(modal: &ModalState) -> Result<ModalState, AppError> {
    if !modal.is_open() {
        return Err(AppError::conflict("no day is open for editing"));
    }
    Ok(modal.clone())
}
