//! The list page's state container.
//!
//! [`ListOrchestrator`] owns the query parameters, the displayed collection,
//! the editor session and the detail dialog. It performs no I/O: every
//! operation that needs the catalog hands back a request value (a
//! [`FetchTicket`], a [`SaveRequest`], a [`DeleteRequest`]) and a matching
//! `finish_*` method consumes the gateway's answer. Callers that may run
//! several requests at once (the page server) release their lock between
//! the two halves; single-threaded callers use the one-step helpers.
//!
//! List fetches are numbered when dispatched. Only the completion of the
//! most recently dispatched fetch is applied, so a slow response to an old
//! filter can never overwrite the result of a newer one.
//!
//! Every time the editor or the detail dialog is opened on a record it gets a
//! fresh session number, which travels in its [`SaveRequest`] or
//! [`DeleteRequest`]. A save or delete that finishes after its session was
//! cancelled or replaced still refreshes the list but leaves the dialogs
//! alone.

use crate::alert::{Alert, AlertScope};
use crate::details::{DeleteOutcome, DeleteRequest, DetailDialog};
use crate::editor::{EditorDialog, SaveOutcome, SaveRequest};
use crate::error::GatewayError;
use crate::filter::FilterControl;
use crate::gateway::HawkGateway;
use crate::model::{Hawk, HawkId};
use crate::query::{QueryParams, SortField};
use crate::view::TableView;

/// A dispatched list fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    params: QueryParams,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Run the fetch against `gateway`.
    pub fn run(&self, gateway: &dyn HawkGateway) -> Result<Vec<Hawk>, GatewayError> {
        gateway.list(&self.params)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The collection was replaced; holds the new row count.
    Applied(usize),
    /// The fetch failed; a list alert was raised.
    Failed(Alert),
    /// A newer fetch has been dispatched since; nothing changed.
    Stale,
}

/// What finishing an editor submit or a delete produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The list must be refreshed with this ticket. The dialog that sent
    /// the request has closed, or had already moved on to another session.
    Refresh(FetchTicket),
    /// The dialog stays open with this alert.
    Failed(Alert),
}

#[derive(Debug, Clone)]
pub struct ListOrchestrator {
    params: QueryParams,
    filter: FilterControl,
    hawks: Vec<Hawk>,
    issued_seq: u64,
    sessions: u64,
    editor: EditorDialog,
    details: DetailDialog,
    alert: Option<Alert>,
}

impl Default for ListOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl ListOrchestrator {
    pub fn new() -> Self {
        Self {
            params: QueryParams::default(),
            filter: FilterControl::new(),
            hawks: Vec::new(),
            issued_seq: 0,
            sessions: 0,
            editor: EditorDialog::closed(),
            details: DetailDialog::new(),
            alert: None,
        }
    }

    /// Start with `params` instead of the defaults.
    pub fn with_params(params: QueryParams) -> Self {
        let mut filter = FilterControl::new();
        filter.set_text(params.filter.clone());
        Self {
            params,
            filter,
            ..Self::new()
        }
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    pub fn filter(&self) -> &FilterControl {
        &self.filter
    }

    pub fn hawks(&self) -> &[Hawk] {
        &self.hawks
    }

    pub fn editor(&self) -> &EditorDialog {
        &self.editor
    }

    pub fn details(&self) -> &DetailDialog {
        &self.details
    }

    /// The list-scoped alert, if the last list fetch failed.
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn table(&self) -> TableView {
        TableView::build(&self.params, &self.hawks)
    }

    // ── List fetch ──────────────────────────────────────────────────────────

    /// The fetch issued when the page first appears.
    pub fn mount(&mut self) -> FetchTicket {
        self.dispatch()
    }

    /// Re-fetch with unchanged parameters.
    pub fn refresh(&mut self) -> FetchTicket {
        self.dispatch()
    }

    /// Filter Control submission.
    pub fn submit_filter(&mut self, text: impl Into<String>) -> FetchTicket {
        self.filter.set_text(text);
        let params = self.filter.submit(|text| self.params.with_filter(text));
        self.replace_params(params)
    }

    /// Column header click.
    pub fn sort_by(&mut self, field: SortField) -> FetchTicket {
        let params = self.params.toggled_sort(field);
        self.replace_params(params)
    }

    fn replace_params(&mut self, params: QueryParams) -> FetchTicket {
        self.params = params;
        self.dispatch()
    }

    fn dispatch(&mut self) -> FetchTicket {
        self.issued_seq += 1;
        let ticket = FetchTicket {
            seq: self.issued_seq,
            params: self.params.clone(),
        };
        tracing::debug!(
            seq = ticket.seq,
            filter = %ticket.params.filter,
            sort_field = %ticket.params.sort_field,
            sort_dir = %ticket.params.sort_dir,
            "list fetch dispatched"
        );
        ticket
    }

    /// Apply the answer to `ticket`, unless a newer fetch has been issued.
    pub fn complete_fetch(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<Hawk>, GatewayError>,
    ) -> FetchOutcome {
        if ticket.seq != self.issued_seq {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.issued_seq,
                "discarding superseded list response"
            );
            return FetchOutcome::Stale;
        }
        match result {
            Ok(hawks) => {
                let count = hawks.len();
                self.hawks = hawks;
                self.alert = None;
                FetchOutcome::Applied(count)
            }
            Err(err) => {
                let alert = Alert::from_gateway(AlertScope::List, &err);
                self.alert = Some(alert.clone());
                FetchOutcome::Failed(alert)
            }
        }
    }

    /// Run `ticket` against `gateway` and apply the result.
    pub fn execute(&mut self, ticket: &FetchTicket, gateway: &dyn HawkGateway) -> FetchOutcome {
        let result = ticket.run(gateway);
        self.complete_fetch(ticket, result)
    }

    // ── Row actions ─────────────────────────────────────────────────────────

    fn row(&self, id: HawkId) -> Option<&Hawk> {
        self.hawks.iter().find(|hawk| hawk.id == Some(id))
    }

    fn next_session(&mut self) -> u64 {
        self.sessions += 1;
        self.sessions
    }

    /// "Add": open the editor in create mode.
    pub fn open_create(&mut self) {
        let session = self.next_session();
        self.editor = EditorDialog::open(None).in_session(session);
    }

    /// "Edit": open the editor on the displayed row `id`.
    /// Returns `false` when no such row is displayed.
    pub fn open_edit(&mut self, id: HawkId) -> bool {
        match self.row(id).cloned() {
            Some(hawk) => {
                let session = self.next_session();
                self.editor = EditorDialog::open(Some(hawk)).in_session(session);
                true
            }
            None => false,
        }
    }

    /// "View": show the displayed row `id` in the detail dialog.
    pub fn view(&mut self, id: HawkId) -> bool {
        match self.row(id).cloned() {
            Some(hawk) if self.details.show(hawk.clone()) => {
                let session = self.next_session();
                self.details.set_session(session);
                true
            }
            _ => false,
        }
    }

    // ── Editor session ──────────────────────────────────────────────────────

    /// Apply posted form values to the editor's draft.
    pub fn edit_fields<'a, I>(&mut self, entries: I) -> Result<(), Alert>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        self.editor.apply_form(entries)
    }

    pub fn begin_save(&self) -> Option<SaveRequest> {
        self.editor.begin_submit()
    }

    /// Finish `request`. Success closes the editor session and asks for a
    /// refresh; failure keeps the session and its draft. A result for a
    /// session that is no longer open only asks for a refresh.
    pub fn finish_save(
        &mut self,
        request: &SaveRequest,
        result: Result<(), GatewayError>,
    ) -> Completion {
        match self.editor.finish_submit(request, result) {
            SaveOutcome::Saved | SaveOutcome::Superseded => Completion::Refresh(self.refresh()),
            SaveOutcome::Rejected(alert) => Completion::Failed(alert),
        }
    }

    pub fn cancel_editor(&mut self) {
        self.editor.cancel();
    }

    /// Save against `gateway` and, on success, refresh the list.
    pub fn save(&mut self, gateway: &dyn HawkGateway) -> Option<Completion> {
        let request = self.begin_save()?;
        let result = request.send(gateway);
        let completion = self.finish_save(&request, result);
        if let Completion::Refresh(ticket) = &completion {
            self.execute(ticket, gateway);
        }
        Some(completion)
    }

    // ── Detail dialog ───────────────────────────────────────────────────────

    pub fn request_delete(&mut self) {
        self.details.request_delete();
    }

    pub fn cancel_delete(&mut self) {
        self.details.cancel_delete();
    }

    pub fn confirm_delete(&mut self) -> Option<DeleteRequest> {
        self.details.confirm_delete()
    }

    /// Finish `request`. Success closes the detail dialog and asks for a
    /// refresh, as does any result for a details session that has ended.
    pub fn finish_delete(
        &mut self,
        request: &DeleteRequest,
        result: Result<(), GatewayError>,
    ) -> Completion {
        match self.details.finish_delete(request, result) {
            DeleteOutcome::Deleted | DeleteOutcome::Superseded => {
                Completion::Refresh(self.refresh())
            }
            DeleteOutcome::Failed(alert) => Completion::Failed(alert),
        }
    }

    pub fn close_details(&mut self) {
        self.details.close();
    }

    /// Confirm the pending delete against `gateway` and, on success,
    /// refresh the list.
    pub fn delete(&mut self, gateway: &dyn HawkGateway) -> Option<Completion> {
        let request = self.confirm_delete()?;
        let result = gateway.delete(request.id);
        let completion = self.finish_delete(&request, result);
        if let Completion::Refresh(ticket) = &completion {
            self.execute(ticket, gateway);
        }
        Some(completion)
    }
}
