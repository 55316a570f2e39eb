//! Catalog record types and their JSON wire shape.
//!
//! A [`Hawk`] travels as a flat camelCase object. Size and gender are
//! closed enumerations carried as upper-case names; both expose a display
//! label and an `ALL` list so forms and tables share one source of truth.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// Server-assigned record identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HawkId(pub i64);

impl fmt::Display for HawkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HawkId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(HawkId)
    }
}

/// Body size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Size {
    #[default]
    Small,
    Medium,
    Large,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    /// Name used on the wire and as the form option value.
    pub fn wire_name(self) -> &'static str {
        match self {
            Size::Small => "SMALL",
            Size::Medium => "MEDIUM",
            Size::Large => "LARGE",
        }
    }

    /// Capitalized label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Size {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Size::ALL
            .into_iter()
            .find(|size| size.wire_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FieldError::UnknownOption {
                field: "size",
                value: s.to_string(),
            })
    }
}

/// Recorded gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn wire_name(self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|gender| gender.wire_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FieldError::UnknownOption {
                field: "gender",
                value: s.to_string(),
            })
    }
}

/// A begin/end pair of measurements.
///
/// Ordering of the two ends is not checked here; the catalog service owns
/// that rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub begin: f64,
    pub end: f64,
    pub unit: &'static str,
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "From {} To {} {}", self.begin, self.end, self.unit)
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hawk {
    /// Absent until the catalog service has stored the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<HawkId>,
    pub name: String,
    pub size: Size,
    pub gender: Gender,
    pub length_begin: f64,
    pub length_end: f64,
    pub wingspan_begin: f64,
    pub wingspan_end: f64,
    pub weight_begin: f64,
    pub weight_end: f64,
    pub color_description: String,
    pub behavior_description: String,
    pub habitat_description: String,
    pub picture_url: String,
}

impl Default for Hawk {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            size: Size::Small,
            gender: Gender::Male,
            length_begin: 0.0,
            length_end: 0.0,
            wingspan_begin: 0.0,
            wingspan_end: 0.0,
            weight_begin: 0.0,
            weight_end: 0.0,
            color_description: String::new(),
            behavior_description: String::new(),
            habitat_description: String::new(),
            picture_url: String::new(),
        }
    }
}

impl Hawk {
    pub fn length(&self) -> Span {
        Span {
            begin: self.length_begin,
            end: self.length_end,
            unit: "cm",
        }
    }

    pub fn wingspan(&self) -> Span {
        Span {
            begin: self.wingspan_begin,
            end: self.wingspan_end,
            unit: "cm",
        }
    }

    pub fn weight(&self) -> Span {
        Span {
            begin: self.weight_begin,
            end: self.weight_end,
            unit: "grams",
        }
    }
}

/// Body of a successful list call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HawkList {
    #[serde(default)]
    pub hawks: Vec<Hawk>,
}

/// Error body the catalog service sends with a rejected write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_serializes_without_id() {
        let json = serde_json::to_value(Hawk::default()).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["size"], "SMALL");
        assert_eq!(json["gender"], "MALE");
        assert_eq!(json["pictureUrl"], "");
    }

    #[test]
    fn stored_record_round_trips_wire_names() {
        let json = serde_json::json!({
            "id": 7,
            "name": "Red-tailed Hawk",
            "size": "LARGE",
            "gender": "FEMALE",
            "lengthBegin": 45,
            "lengthEnd": 65,
            "wingspanBegin": 114,
            "wingspanEnd": 133,
            "weightBegin": 690,
            "weightEnd": 1600,
            "colorDescription": "brown",
            "behaviorDescription": "soars",
            "habitatDescription": "open country",
            "pictureUrl": "https://example.org/rth.jpg"
        });
        let hawk: Hawk = serde_json::from_value(json).unwrap();
        assert_eq!(hawk.id, Some(HawkId(7)));
        assert_eq!(hawk.size, Size::Large);
        assert_eq!(hawk.gender, Gender::Female);
        assert_eq!(hawk.length().to_string(), "From 45 To 65 cm");
        assert_eq!(hawk.weight().to_string(), "From 690 To 1600 grams");
    }

    #[test]
    fn enumerations_reject_values_outside_the_set() {
        assert!("HUGE".parse::<Size>().is_err());
        assert!("OTHER".parse::<Gender>().is_err());
        assert!(serde_json::from_str::<Size>("\"TINY\"").is_err());
        assert_eq!("medium".parse::<Size>().unwrap(), Size::Medium);
        assert_eq!(Gender::Female.label(), "Female");
    }
}
