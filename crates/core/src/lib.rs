//! hawks-core: the state behind the hawk catalog interface.
//!
//! Everything here is plain data and state transitions; nothing performs
//! I/O. The catalog service is reached only through the [`HawkGateway`]
//! trait, which `hawks-gateway` implements over HTTP.
//!
//! # Public API
//!
//! - [`ListOrchestrator`] -- query parameters, the displayed collection and
//!   both dialogs, with sequence-checked list fetches
//! - [`EditorDialog`] / [`DetailDialog`] / [`ConfirmModal`] /
//!   [`FilterControl`] -- the individual surfaces
//! - [`TableView`] -- markup-free projection of the list table
//! - [`Hawk`], [`Size`], [`Gender`], [`QueryParams`] -- the data model
//! - [`Alert`] -- how every failure is reported

pub mod alert;
pub mod confirm;
pub mod details;
pub mod editor;
pub mod error;
pub mod filter;
pub mod gateway;
pub mod model;
pub mod orchestrator;
pub mod query;
pub mod view;

pub use alert::{Alert, AlertScope};
pub use confirm::ConfirmModal;
pub use details::{DeleteOutcome, DeleteRequest, DetailDialog};
pub use editor::{EditorDialog, EditorMode, FieldKind, HawkField, SaveOutcome, SaveRequest};
pub use error::{FieldError, GatewayError};
pub use filter::FilterControl;
pub use gateway::HawkGateway;
pub use model::{ErrorBody, Gender, Hawk, HawkId, HawkList, Size, Span};
pub use orchestrator::{Completion, FetchOutcome, FetchTicket, ListOrchestrator};
pub use query::{QueryParams, SortDirection, SortField};
pub use view::{HeaderCell, RowView, TableBody, TableView, COLUMN_COUNT, EMPTY_MESSAGE};
