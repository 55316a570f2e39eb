//! `hawks serve`: the catalog pages over HTTP.
//!
//! The page is rendered on the server from one [`ListOrchestrator`]; every
//! button is a form post that drives the orchestrator and redirects back
//! to `/`.
//!
//! Endpoints:
//! - GET  /                    - The list page with any open dialog
//! - GET  /health              - Server status
//! - POST /filter              - Apply the filter text
//! - POST /sort/{field}        - Header click (name, size, gender)
//! - POST /hawks/new           - Open the editor on a blank record
//! - POST /hawks/{id}/edit     - Open the editor on a row
//! - POST /hawks/{id}/view     - Open the detail dialog on a row
//! - POST /editor              - Save the editor form
//! - POST /editor/cancel       - Close the editor
//! - POST /details/delete      - Ask for delete confirmation
//! - POST /details/confirm     - Delete the shown record
//! - POST /details/dismiss     - Dismiss the confirmation
//! - POST /details/close       - Close the detail dialog
//! - POST /alert/dismiss       - Clear the list alert
//!
//! [`ListOrchestrator`]: hawks_core::ListOrchestrator

mod handlers;
mod render;
mod state;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use hawks_gateway::HttpGateway;
use tower_http::trace::TraceLayer;

use self::handlers::{
    handle_close_details, handle_confirm_delete, handle_dismiss_alert, handle_dismiss_delete,
    handle_edit, handle_editor_cancel, handle_editor_submit, handle_filter, handle_health,
    handle_new, handle_not_found, handle_page, handle_request_delete, handle_sort, handle_view,
};
use self::state::AppState;
use crate::config::Settings;

/// Construct a JSON error response with the given status code and message.
fn json_error(status: StatusCode, message: &str) -> impl IntoResponse {
    (status, Json(serde_json::json!({"error": message})))
}

/// Build the router over `state`.
pub(crate) fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handle_page))
        .route("/health", get(handle_health))
        .route("/filter", post(handle_filter))
        .route("/sort/{field}", post(handle_sort))
        .route("/hawks/new", post(handle_new))
        .route("/hawks/{id}/edit", post(handle_edit))
        .route("/hawks/{id}/view", post(handle_view))
        .route("/editor", post(handle_editor_submit))
        .route("/editor/cancel", post(handle_editor_cancel))
        .route("/details/delete", post(handle_request_delete))
        .route("/details/confirm", post(handle_confirm_delete))
        .route("/details/dismiss", post(handle_dismiss_delete))
        .route("/details/close", post(handle_close_details))
        .route("/alert/dismiss", post(handle_dismiss_alert))
        .fallback(handle_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Fetch the first page of hawks, then serve until Ctrl+C.
pub(crate) async fn start_server(settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    let gateway = HttpGateway::new(&settings.gateway_url, settings.timeout);
    tracing::info!(gateway = %gateway.base_url(), "using hawk catalog service");
    let state = Arc::new(AppState::new(Arc::new(gateway)));

    let ticket = state.list.lock().await.mount();
    if let hawks_core::FetchOutcome::Applied(count) = state.run_fetch(ticket).await {
        tracing::info!(count, "initial list loaded");
    }

    let app = router(state);
    let addr = format!("{}:{}", settings.bind, settings.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("hawks listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shut down");
    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("received shutdown signal"),
        Err(e) => {
            tracing::error!(error = %e, "could not install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    }
}
