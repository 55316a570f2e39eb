//! Shared page state and the bridge from async handlers to the blocking
//! catalog client.

use std::sync::Arc;

use hawks_core::{Completion, FetchOutcome, FetchTicket, GatewayError, HawkGateway, ListOrchestrator};
use tokio::sync::Mutex;

/// Application state shared across request handlers.
///
/// One orchestrator serves every browser tab: the page is a single-user
/// console, not a multi-tenant site.
pub(crate) struct AppState {
    pub(crate) list: Mutex<ListOrchestrator>,
    pub(crate) gateway: Arc<dyn HawkGateway>,
}

impl AppState {
    pub(crate) fn new(gateway: Arc<dyn HawkGateway>) -> Self {
        Self {
            list: Mutex::new(ListOrchestrator::new()),
            gateway,
        }
    }

    /// Run `call` on the blocking pool. The orchestrator lock must not be
    /// held across this await.
    async fn blocking<T, F>(&self, call: F) -> Result<T, GatewayError>
    where
        T: Send + 'static,
        F: FnOnce(&dyn HawkGateway) -> Result<T, GatewayError> + Send + 'static,
    {
        let gateway = Arc::clone(&self.gateway);
        match tokio::task::spawn_blocking(move || call(gateway.as_ref())).await {
            Ok(result) => result,
            Err(e) => Err(GatewayError::Transport(format!("request task failed: {}", e))),
        }
    }

    /// Perform a dispatched list fetch and apply it.
    pub(crate) async fn run_fetch(&self, ticket: FetchTicket) -> FetchOutcome {
        let request = ticket.clone();
        let result = self.blocking(move |gateway| request.run(gateway)).await;
        let outcome = self.list.lock().await.complete_fetch(&ticket, result);
        if let FetchOutcome::Applied(count) = &outcome {
            tracing::debug!(seq = ticket.seq(), count, "list updated");
        }
        outcome
    }

    /// Submit the open editor, then refresh on success.
    ///
    /// The editor may be cancelled or reopened while the request is in
    /// flight; the orchestrator then leaves the newer session untouched.
    pub(crate) async fn run_save(&self) -> Option<Completion> {
        let request = self.list.lock().await.begin_save()?;
        let sent = request.clone();
        let result = self.blocking(move |gateway| sent.send(gateway)).await;
        let completion = self.list.lock().await.finish_save(&request, result);
        self.follow_up(&completion).await;
        Some(completion)
    }

    /// Perform a confirmed delete, then refresh on success.
    pub(crate) async fn run_delete(&self) -> Option<Completion> {
        let request = self.list.lock().await.confirm_delete()?;
        let id = request.id;
        let result = self.blocking(move |gateway| gateway.delete(id)).await;
        let completion = self.list.lock().await.finish_delete(&request, result);
        self.follow_up(&completion).await;
        Some(completion)
    }

    async fn follow_up(&self, completion: &Completion) {
        if let Completion::Refresh(ticket) = completion {
            self.run_fetch(ticket.clone()).await;
        }
    }
}
