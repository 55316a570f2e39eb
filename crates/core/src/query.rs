//! Filter and sort parameters that drive the list fetch.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A sortable table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Name,
    Size,
    Gender,
}

impl SortField {
    /// Columns in table order.
    pub const ALL: [SortField; 3] = [SortField::Name, SortField::Size, SortField::Gender];

    /// Lower-case name the catalog service expects in `sortField`.
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Size => "size",
            SortField::Gender => "gender",
        }
    }

    /// Column header text.
    pub fn header(self) -> &'static str {
        match self {
            SortField::Name => "Name",
            SortField::Size => "Size",
            SortField::Gender => "Gender",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown sort field '{}' (expected name, size or gender)", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(format!("unknown sort direction '{}' (expected asc or desc)", s)),
        }
    }
}

/// The filter/sort state of the list.
///
/// Values are never edited in place: every change produces a new
/// `QueryParams` that replaces the previous one wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    pub filter: String,
    pub sort_field: SortField,
    pub sort_dir: SortDirection,
}

impl QueryParams {
    /// Same sort, new filter text.
    pub fn with_filter(&self, filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            ..self.clone()
        }
    }

    /// Parameters after a click on the `field` column header.
    ///
    /// Only a click on the active, ascending column flips to descending;
    /// every other click sorts `field` ascending.
    pub fn toggled_sort(&self, field: SortField) -> Self {
        let sort_dir = if field == self.sort_field && self.sort_dir == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        Self {
            filter: self.filter.clone(),
            sort_field: field,
            sort_dir,
        }
    }

    /// Query-string pairs for the list endpoint, in a stable order.
    pub fn query_pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("filter", self.filter.as_str()),
            ("sortField", self.sort_field.as_str()),
            ("sortDir", self.sort_dir.as_str()),
        ]
    }

    /// Direction shown on `field`'s header, if it is the active column.
    pub fn indicator_for(&self, field: SortField) -> Option<SortDirection> {
        (self.sort_field == field).then_some(self.sort_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_sort_by_name_ascending_without_filter() {
        let params = QueryParams::default();
        assert_eq!(params.filter, "");
        assert_eq!(params.sort_field, SortField::Name);
        assert_eq!(params.sort_dir, SortDirection::Asc);
    }

    #[test]
    fn clicking_an_inactive_column_sorts_it_ascending() {
        let params = QueryParams::default().toggled_sort(SortField::Size);
        assert_eq!(params.sort_field, SortField::Size);
        assert_eq!(params.sort_dir, SortDirection::Asc);
    }

    #[test]
    fn clicking_the_ascending_column_flips_to_descending() {
        let params = QueryParams::default().toggled_sort(SortField::Name);
        assert_eq!(params.sort_field, SortField::Name);
        assert_eq!(params.sort_dir, SortDirection::Desc);
    }

    #[test]
    fn clicking_the_descending_column_returns_to_ascending() {
        let params = QueryParams::default()
            .toggled_sort(SortField::Name)
            .toggled_sort(SortField::Name);
        assert_eq!(params.sort_dir, SortDirection::Asc);
    }

    #[test]
    fn switching_columns_resets_direction_regardless_of_prior_state() {
        let descending = QueryParams::default().toggled_sort(SortField::Name);
        assert_eq!(descending.sort_dir, SortDirection::Desc);

        let params = descending.toggled_sort(SortField::Gender);
        assert_eq!(params.sort_field, SortField::Gender);
        assert_eq!(params.sort_dir, SortDirection::Asc);
    }

    #[test]
    fn sorting_keeps_the_filter_and_filtering_keeps_the_sort() {
        let params = QueryParams::default()
            .with_filter("red")
            .toggled_sort(SortField::Size);
        assert_eq!(params.filter, "red");

        let params = params.with_filter("");
        assert_eq!(params.sort_field, SortField::Size);
        assert_eq!(params.filter, "");
    }

    #[test]
    fn query_pairs_use_service_names() {
        let params = QueryParams {
            filter: "cooper".to_string(),
            sort_field: SortField::Gender,
            sort_dir: SortDirection::Desc,
        };
        assert_eq!(
            params.query_pairs(),
            [("filter", "cooper"), ("sortField", "gender"), ("sortDir", "desc")]
        );
    }

    #[test]
    fn parses_route_segments() {
        assert_eq!("Size".parse::<SortField>().unwrap(), SortField::Size);
        assert!("wingspan".parse::<SortField>().is_err());
        assert_eq!("DESC".parse::<SortDirection>().unwrap(), SortDirection::Desc);
    }
}
