//! Read-only record view with a guarded delete.

use crate::alert::{Alert, AlertScope};
use crate::confirm::ConfirmModal;
use crate::error::GatewayError;
use crate::model::{Hawk, HawkId};

pub const DELETE_TITLE: &str = "Are you sure?";
pub const DELETE_DESCRIPTION: &str = "Your hawk will be permanently removed from our servers forever. This action cannot be undone.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteRequest {
    pub id: HawkId,
    /// Details session the confirmation was given in.
    pub session: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Removed; the dialog has closed.
    Deleted,
    /// Still stored; the dialog stays open showing this alert.
    Failed(Alert),
    /// The dialog moved on before the result arrived and was left as is.
    Superseded,
}

/// The details slide-over.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailDialog {
    record: Option<Hawk>,
    confirm: ConfirmModal,
    alert: Option<Alert>,
    session: u64,
}

impl Default for DetailDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailDialog {
    pub fn new() -> Self {
        Self {
            record: None,
            confirm: ConfirmModal::new(DELETE_TITLE, DELETE_DESCRIPTION),
            alert: None,
            session: 0,
        }
    }

    /// Show `hawk`. Records without an id are ignored and leave the dialog
    /// as it was; returns whether the dialog is now showing `hawk`.
    pub fn show(&mut self, hawk: Hawk) -> bool {
        if hawk.id.is_none() {
            return false;
        }
        self.record = Some(hawk);
        self.confirm.dismiss();
        self.alert = None;
        true
    }

    /// Tag the dialog with `session`; see [`finish_delete`](Self::finish_delete).
    pub fn set_session(&mut self, session: u64) {
        self.session = session;
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn is_open(&self) -> bool {
        self.record.is_some()
    }

    pub fn record(&self) -> Option<&Hawk> {
        self.record.as_ref()
    }

    pub fn confirm(&self) -> &ConfirmModal {
        &self.confirm
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// `(label, value)` rows of the information list.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let Some(hawk) = &self.record else {
            return Vec::new();
        };
        vec![
            ("Name", hawk.name.clone()),
            ("Size", hawk.size.label().to_string()),
            ("Gender", hawk.gender.label().to_string()),
            ("Length", hawk.length().to_string()),
            ("Wingspan", hawk.wingspan().to_string()),
            ("Weight", hawk.weight().to_string()),
            ("Color Description", hawk.color_description.clone()),
            ("Behavior Description", hawk.behavior_description.clone()),
            ("Habitat Description", hawk.habitat_description.clone()),
            ("Picture Url", hawk.picture_url.clone()),
        ]
    }

    /// The Delete button: ask for confirmation first.
    pub fn request_delete(&mut self) {
        if self.is_open() {
            self.confirm.open();
        }
    }

    pub fn cancel_delete(&mut self) {
        self.confirm.dismiss();
    }

    /// The confirmation's yes button. Yields the delete to perform, or
    /// `None` if no confirmation was pending.
    pub fn confirm_delete(&mut self) -> Option<DeleteRequest> {
        let id = self.record.as_ref().and_then(|hawk| hawk.id)?;
        let session = self.session;
        self.confirm.confirm(|| DeleteRequest { id, session })
    }

    /// Record the result of `request`, taken from
    /// [`confirm_delete`](Self::confirm_delete).
    ///
    /// The result only applies while the dialog still shows the same record
    /// in the same session.
    pub fn finish_delete(
        &mut self,
        request: &DeleteRequest,
        result: Result<(), GatewayError>,
    ) -> DeleteOutcome {
        let shown = self.record.as_ref().and_then(|hawk| hawk.id);
        if shown != Some(request.id) || self.session != request.session {
            tracing::debug!(
                id = ?request.id,
                session = request.session,
                current = self.session,
                ok = result.is_ok(),
                "delete result for a closed details session"
            );
            return DeleteOutcome::Superseded;
        }
        match result {
            Ok(()) => {
                if let Some(hawk) = &self.record {
                    tracing::info!(id = ?hawk.id, name = %hawk.name, "hawk deleted");
                }
                self.close();
                DeleteOutcome::Deleted
            }
            Err(err) => {
                let alert = Alert::from_gateway(AlertScope::Details, &err);
                self.alert = Some(alert.clone());
                DeleteOutcome::Failed(alert)
            }
        }
    }

    pub fn close(&mut self) {
        *self = Self::new();
    }
}
