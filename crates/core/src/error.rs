/// Errors a [`HawkGateway`](crate::HawkGateway) implementation can return.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    /// The request never produced a response (connection refused, DNS,
    /// timeout, broken pipe).
    #[error("could not reach the hawk service: {0}")]
    Transport(String),

    /// The service answered with a status other than the one the call
    /// expects. `message` is the service's `error` text when it sent one.
    #[error("hawk service returned {status}{}", detail(.message))]
    Rejected { status: u16, message: String },

    /// The service answered successfully but the body was not the expected
    /// JSON shape.
    #[error("unexpected response from the hawk service: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Text shown to the user for this failure.
    ///
    /// A rejection carries the service's own wording; everything else is
    /// described by the error itself.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Rejected { message, .. } if !message.trim().is_empty() => {
                message.clone()
            }
            other => other.to_string(),
        }
    }
}

fn detail(message: &str) -> String {
    if message.trim().is_empty() {
        String::new()
    } else {
        format!(": {}", message)
    }
}

/// A form value that could not be turned into a record field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("{field} must be a number, got '{value}'")]
    NotANumber { field: &'static str, value: String },

    #[error("'{value}' is not a valid {field}")]
    UnknownOption { field: &'static str, value: String },

    #[error("unknown field '{0}'")]
    UnknownField(String),
}
