//! The single way a failed action is surfaced to the user.
//!
//! Every failure (list fetch, save, delete, bad form input) becomes one
//! [`Alert`] tagged with the surface that triggered it. The list banner,
//! the editor and the detail dialog each show the alert of their own scope.

use serde::Serialize;

use crate::error::{FieldError, GatewayError};

/// Where an alert is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertScope {
    List,
    Editor,
    Details,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub scope: AlertScope,
    pub message: String,
}

impl Alert {
    pub fn new(scope: AlertScope, message: impl Into<String>) -> Self {
        Self {
            scope,
            message: message.into(),
        }
    }

    pub fn from_gateway(scope: AlertScope, err: &GatewayError) -> Self {
        let alert = Self::new(scope, err.user_message());
        tracing::warn!(scope = ?scope, error = %err, "action failed");
        alert
    }

    pub fn from_field(err: &FieldError) -> Self {
        Self::new(AlertScope::Editor, err.to_string())
    }
}
