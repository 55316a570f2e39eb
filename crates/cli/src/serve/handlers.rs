//! Route handlers. Every action posts a form and is answered with a
//! redirect back to `/`, which renders the resulting state.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Form, Json};
use hawks_core::{HawkField, HawkId, SortField};
use serde::Deserialize;

use super::json_error;
use super::render::render_page;
use super::state::AppState;

#[derive(Debug, Deserialize)]
pub(crate) struct FilterForm {
    #[serde(default)]
    filter: String,
}

fn back() -> Response {
    Redirect::to("/").into_response()
}

fn not_found() -> Response {
    json_error(StatusCode::NOT_FOUND, "not found").into_response()
}

/// Fallback handler for unmatched routes.
pub(crate) async fn handle_not_found() -> impl IntoResponse {
    json_error(StatusCode::NOT_FOUND, "not found")
}

/// GET /health
pub(crate) async fn handle_health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}

/// GET /
pub(crate) async fn handle_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let list = state.list.lock().await;
    Html(render_page(&list))
}

/// POST /filter
pub(crate) async fn handle_filter(
    State(state): State<Arc<AppState>>,
    Form(form): Form<FilterForm>,
) -> Response {
    let ticket = state.list.lock().await.submit_filter(form.filter);
    state.run_fetch(ticket).await;
    back()
}

/// POST /sort/{field}
pub(crate) async fn handle_sort(
    State(state): State<Arc<AppState>>,
    Path(field): Path<String>,
) -> Response {
    let Ok(field) = field.parse::<SortField>() else {
        return not_found();
    };
    let ticket = state.list.lock().await.sort_by(field);
    state.run_fetch(ticket).await;
    back()
}

/// POST /hawks/new
pub(crate) async fn handle_new(State(state): State<Arc<AppState>>) -> Response {
    state.list.lock().await.open_create();
    back()
}

/// POST /hawks/{id}/edit
pub(crate) async fn handle_edit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = id.parse::<HawkId>() else {
        return not_found();
    };
    if state.list.lock().await.open_edit(id) {
        back()
    } else {
        not_found()
    }
}

/// POST /hawks/{id}/view
pub(crate) async fn handle_view(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = id.parse::<HawkId>() else {
        return not_found();
    };
    if state.list.lock().await.view(id) {
        back()
    } else {
        not_found()
    }
}

/// POST /editor
///
/// Unknown form keys are ignored. A value that does not fit its field
/// leaves the editor open with an alert and skips the save.
pub(crate) async fn handle_editor_submit(
    State(state): State<Arc<AppState>>,
    Form(entries): Form<Vec<(String, String)>>,
) -> Response {
    let applied = {
        let mut list = state.list.lock().await;
        list.edit_fields(
            entries
                .iter()
                .filter(|(key, _)| key.parse::<HawkField>().is_ok())
                .map(|(key, value)| (key.as_str(), value.as_str())),
        )
    };
    if applied.is_ok() {
        state.run_save().await;
    }
    back()
}

/// POST /editor/cancel
pub(crate) async fn handle_editor_cancel(State(state): State<Arc<AppState>>) -> Response {
    state.list.lock().await.cancel_editor();
    back()
}

/// POST /details/delete
pub(crate) async fn handle_request_delete(State(state): State<Arc<AppState>>) -> Response {
    state.list.lock().await.request_delete();
    back()
}

/// POST /details/confirm
pub(crate) async fn handle_confirm_delete(State(state): State<Arc<AppState>>) -> Response {
    state.run_delete().await;
    back()
}

/// POST /details/dismiss
pub(crate) async fn handle_dismiss_delete(State(state): State<Arc<AppState>>) -> Response {
    state.list.lock().await.cancel_delete();
    back()
}

/// POST /details/close
pub(crate) async fn handle_close_details(State(state): State<Arc<AppState>>) -> Response {
    state.list.lock().await.close_details();
    back()
}

/// POST /alert/dismiss
pub(crate) async fn handle_dismiss_alert(State(state): State<Arc<AppState>>) -> Response {
    state.list.lock().await.dismiss_alert();
    back()
}
