//! The create/edit slide-over form.
//!
//! The dialog works on a private copy of the record. Field edits change only
//! that copy; the catalog is touched when the form is submitted. Whether the
//! submit creates or updates is decided once, when the dialog opens.

use std::str::FromStr;

use crate::alert::{Alert, AlertScope};
use crate::error::{FieldError, GatewayError};
use crate::gateway::HawkGateway;
use crate::model::{Gender, Hawk, HawkId, Size};

/// One input of the editor form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HawkField {
    Name,
    Size,
    Gender,
    LengthBegin,
    LengthEnd,
    WingspanBegin,
    WingspanEnd,
    WeightBegin,
    WeightEnd,
    ColorDescription,
    BehaviorDescription,
    HabitatDescription,
    PictureUrl,
}

/// How a field is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    LongText,
    Choice,
}

impl HawkField {
    /// Inputs in form order.
    pub const ALL: [HawkField; 13] = [
        HawkField::Name,
        HawkField::Size,
        HawkField::Gender,
        HawkField::LengthBegin,
        HawkField::LengthEnd,
        HawkField::WingspanBegin,
        HawkField::WingspanEnd,
        HawkField::WeightBegin,
        HawkField::WeightEnd,
        HawkField::ColorDescription,
        HawkField::BehaviorDescription,
        HawkField::HabitatDescription,
        HawkField::PictureUrl,
    ];

    /// Input id and form key; identical to the record's JSON key.
    pub fn key(self) -> &'static str {
        match self {
            HawkField::Name => "name",
            HawkField::Size => "size",
            HawkField::Gender => "gender",
            HawkField::LengthBegin => "lengthBegin",
            HawkField::LengthEnd => "lengthEnd",
            HawkField::WingspanBegin => "wingspanBegin",
            HawkField::WingspanEnd => "wingspanEnd",
            HawkField::WeightBegin => "weightBegin",
            HawkField::WeightEnd => "weightEnd",
            HawkField::ColorDescription => "colorDescription",
            HawkField::BehaviorDescription => "behaviorDescription",
            HawkField::HabitatDescription => "habitatDescription",
            HawkField::PictureUrl => "pictureUrl",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HawkField::Name => "Name",
            HawkField::Size => "Size",
            HawkField::Gender => "Gender",
            HawkField::LengthBegin => "Length Begin",
            HawkField::LengthEnd => "Length End",
            HawkField::WingspanBegin => "Wingspan Begin",
            HawkField::WingspanEnd => "Wingspan End",
            HawkField::WeightBegin => "Weight Begin",
            HawkField::WeightEnd => "Weight End",
            HawkField::ColorDescription => "Color Description",
            HawkField::BehaviorDescription => "Behavior Description",
            HawkField::HabitatDescription => "Habitat Description",
            HawkField::PictureUrl => "Picture Url",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            HawkField::Name | HawkField::PictureUrl => FieldKind::Text,
            HawkField::Size | HawkField::Gender => FieldKind::Choice,
            HawkField::LengthBegin
            | HawkField::LengthEnd
            | HawkField::WingspanBegin
            | HawkField::WingspanEnd
            | HawkField::WeightBegin
            | HawkField::WeightEnd => FieldKind::Number,
            HawkField::ColorDescription
            | HawkField::BehaviorDescription
            | HawkField::HabitatDescription => FieldKind::LongText,
        }
    }

    /// `(value, label)` pairs for choice fields; empty for the rest.
    pub fn options(self) -> Vec<(&'static str, &'static str)> {
        match self {
            HawkField::Size => Size::ALL.iter().map(|s| (s.wire_name(), s.label())).collect(),
            HawkField::Gender => Gender::ALL
                .iter()
                .map(|g| (g.wire_name(), g.label()))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// The field's current value in `hawk`, as an input would show it.
    pub fn value_in(self, hawk: &Hawk) -> String {
        match self {
            HawkField::Name => hawk.name.clone(),
            HawkField::Size => hawk.size.wire_name().to_string(),
            HawkField::Gender => hawk.gender.wire_name().to_string(),
            HawkField::LengthBegin => hawk.length_begin.to_string(),
            HawkField::LengthEnd => hawk.length_end.to_string(),
            HawkField::WingspanBegin => hawk.wingspan_begin.to_string(),
            HawkField::WingspanEnd => hawk.wingspan_end.to_string(),
            HawkField::WeightBegin => hawk.weight_begin.to_string(),
            HawkField::WeightEnd => hawk.weight_end.to_string(),
            HawkField::ColorDescription => hawk.color_description.clone(),
            HawkField::BehaviorDescription => hawk.behavior_description.clone(),
            HawkField::HabitatDescription => hawk.habitat_description.clone(),
            HawkField::PictureUrl => hawk.picture_url.clone(),
        }
    }

    /// Parse `value` and store it in `hawk`.
    pub fn apply(self, hawk: &mut Hawk, value: &str) -> Result<(), FieldError> {
        match self {
            HawkField::Name => hawk.name = value.to_string(),
            HawkField::Size => hawk.size = value.parse()?,
            HawkField::Gender => hawk.gender = value.parse()?,
            HawkField::LengthBegin => hawk.length_begin = self.number(value)?,
            HawkField::LengthEnd => hawk.length_end = self.number(value)?,
            HawkField::WingspanBegin => hawk.wingspan_begin = self.number(value)?,
            HawkField::WingspanEnd => hawk.wingspan_end = self.number(value)?,
            HawkField::WeightBegin => hawk.weight_begin = self.number(value)?,
            HawkField::WeightEnd => hawk.weight_end = self.number(value)?,
            HawkField::ColorDescription => hawk.color_description = value.to_string(),
            HawkField::BehaviorDescription => hawk.behavior_description = value.to_string(),
            HawkField::HabitatDescription => hawk.habitat_description = value.to_string(),
            HawkField::PictureUrl => hawk.picture_url = value.to_string(),
        }
        Ok(())
    }

    fn number(self, value: &str) -> Result<f64, FieldError> {
        value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| FieldError::NotANumber {
                field: self.key(),
                value: value.to_string(),
            })
    }
}

impl FromStr for HawkField {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HawkField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| FieldError::UnknownField(s.to_string()))
    }
}

/// Whether a submit stores a new record or replaces an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(HawkId),
}

/// A save the dialog wants performed against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    pub mode: EditorMode,
    pub hawk: Hawk,
    /// Editor session the request was taken from.
    pub session: u64,
}

impl SaveRequest {
    pub fn send(&self, gateway: &dyn HawkGateway) -> Result<(), GatewayError> {
        match self.mode {
            EditorMode::Create => gateway.create(&self.hawk),
            EditorMode::Edit(id) => gateway.update(id, &self.hawk),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// Stored; the dialog has reset and closed.
    Saved,
    /// Not stored; the dialog stays open with the draft and this alert.
    Rejected(Alert),
    /// The session that sent the request is gone; the dialog was left as is.
    Superseded,
}

/// The editor slide-over.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorDialog {
    open: bool,
    mode: EditorMode,
    draft: Hawk,
    alert: Option<Alert>,
    session: u64,
}

impl Default for EditorDialog {
    fn default() -> Self {
        Self::closed()
    }
}

impl EditorDialog {
    pub fn closed() -> Self {
        Self {
            open: false,
            mode: EditorMode::Create,
            draft: Hawk::default(),
            alert: None,
            session: 0,
        }
    }

    /// Open on a copy of `record`, or on a blank record when `None`.
    ///
    /// A record without an id has nowhere to be updated, so it opens in
    /// create mode with its values as the starting draft.
    pub fn open(record: Option<Hawk>) -> Self {
        let (mode, draft) = match record {
            Some(hawk) => match hawk.id {
                Some(id) => (EditorMode::Edit(id), hawk),
                None => (EditorMode::Create, hawk),
            },
            None => (EditorMode::Create, Hawk::default()),
        };
        Self {
            open: true,
            mode,
            draft,
            alert: None,
            session: 0,
        }
    }

    /// Tag this dialog with `session`. Results of requests taken under
    /// another session are not applied to it.
    pub fn in_session(mut self, session: u64) -> Self {
        self.session = session;
        self
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn draft(&self) -> &Hawk {
        &self.draft
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            EditorMode::Create => "Save",
            EditorMode::Edit(_) => "Update",
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            EditorMode::Create => "New Hawk",
            EditorMode::Edit(_) => "Edit Hawk",
        }
    }

    /// Value currently shown in `field`'s input.
    pub fn value(&self, field: HawkField) -> String {
        field.value_in(&self.draft)
    }

    /// Controlled-input change. A bad value leaves the draft untouched.
    pub fn set_field(&mut self, field: HawkField, value: &str) -> Result<(), FieldError> {
        field.apply(&mut self.draft, value)
    }

    /// Apply every posted `(key, value)` pair to the draft.
    ///
    /// Stops at the first bad value and raises an editor alert for it; the
    /// fields applied before it keep their new values, matching what the
    /// user sees in the form.
    pub fn apply_form<'a, I>(&mut self, entries: I) -> Result<(), Alert>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (key, value) in entries {
            let applied = key
                .parse::<HawkField>()
                .and_then(|field| self.set_field(field, value));
            if let Err(err) = applied {
                let alert = Alert::from_field(&err);
                self.alert = Some(alert.clone());
                return Err(alert);
            }
        }
        Ok(())
    }

    /// The save to perform, or `None` when the dialog is closed.
    pub fn begin_submit(&self) -> Option<SaveRequest> {
        self.open.then(|| SaveRequest {
            mode: self.mode,
            hawk: self.draft.clone(),
            session: self.session,
        })
    }

    /// Record the result of `request`, taken from
    /// [`begin_submit`](Self::begin_submit).
    ///
    /// Once the dialog has been closed or reopened the result no longer
    /// belongs to it and is only logged.
    pub fn finish_submit(
        &mut self,
        request: &SaveRequest,
        result: Result<(), GatewayError>,
    ) -> SaveOutcome {
        if !self.open || self.session != request.session {
            tracing::debug!(
                mode = ?request.mode,
                session = request.session,
                current = self.session,
                ok = result.is_ok(),
                "save result for a closed editor session"
            );
            return SaveOutcome::Superseded;
        }
        match result {
            Ok(()) => {
                tracing::info!(mode = ?self.mode, name = %self.draft.name, "hawk saved");
                *self = Self::closed();
                SaveOutcome::Saved
            }
            Err(err) => {
                let alert = Alert::from_gateway(AlertScope::Editor, &err);
                self.alert = Some(alert.clone());
                SaveOutcome::Rejected(alert)
            }
        }
    }

    /// Discard the draft and close.
    pub fn cancel(&mut self) {
        *self = Self::closed();
    }
}
