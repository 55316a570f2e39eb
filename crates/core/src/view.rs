//! Table projection of the current list, independent of any markup.

use crate::model::{Hawk, HawkId};
use crate::query::{QueryParams, SortDirection, SortField};

/// Text of the single row shown for an empty collection.
pub const EMPTY_MESSAGE: &str = "No Data Found.";

/// Data columns plus the actions column.
pub const COLUMN_COUNT: usize = SortField::ALL.len() + 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub field: SortField,
    pub label: &'static str,
    /// Set on the active sort column only.
    pub indicator: Option<SortDirection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: Option<HawkId>,
    pub name: String,
    pub size: &'static str,
    pub gender: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Rows(Vec<RowView>),
    /// Render one row spanning [`COLUMN_COUNT`] columns with this text.
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub headers: Vec<HeaderCell>,
    pub body: TableBody,
}

impl TableView {
    /// Rows in the order given; no client-side sorting.
    pub fn build(params: &QueryParams, hawks: &[Hawk]) -> Self {
        let headers = SortField::ALL
            .into_iter()
            .map(|field| HeaderCell {
                field,
                label: field.header(),
                indicator: params.indicator_for(field),
            })
            .collect();

        let body = if hawks.is_empty() {
            TableBody::Empty(EMPTY_MESSAGE)
        } else {
            TableBody::Rows(
                hawks
                    .iter()
                    .map(|hawk| RowView {
                        id: hawk.id,
                        name: hawk.name.clone(),
                        size: hawk.size.label(),
                        gender: hawk.gender.label(),
                    })
                    .collect(),
            )
        };

        Self { headers, body }
    }

    pub fn row_count(&self) -> usize {
        match &self.body {
            TableBody::Rows(rows) => rows.len(),
            TableBody::Empty(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Size;

    #[test]
    fn empty_collection_is_one_placeholder_row() {
        let view = TableView::build(&QueryParams::default(), &[]);
        assert_eq!(view.body, TableBody::Empty("No Data Found."));
        assert_eq!(view.row_count(), 1);
        assert_eq!(COLUMN_COUNT, 4);
    }

    #[test]
    fn only_the_active_column_has_an_indicator() {
        let params = QueryParams::default().toggled_sort(SortField::Size);
        let view = TableView::build(&params, &[]);
        let indicators: Vec<_> = view.headers.iter().map(|h| h.indicator).collect();
        assert_eq!(indicators, vec![None, Some(SortDirection::Asc), None]);
        assert_eq!(view.headers[0].label, "Name");
    }

    #[test]
    fn rows_keep_service_order_and_show_labels() {
        let hawks = vec![
            Hawk {
                id: Some(HawkId(2)),
                name: "Zone-tailed Hawk".to_string(),
                size: Size::Large,
                ..Hawk::default()
            },
            Hawk {
                id: Some(HawkId(1)),
                name: "Broad-winged Hawk".to_string(),
                ..Hawk::default()
            },
        ];
        let view = TableView::build(&QueryParams::default(), &hawks);
        let TableBody::Rows(rows) = view.body else {
            panic!("expected rows");
        };
        assert_eq!(rows[0].name, "Zone-tailed Hawk");
        assert_eq!(rows[0].size, "Large");
        assert_eq!(rows[1].name, "Broad-winged Hawk");
        assert_eq!(rows[1].gender, "Male");
    }
}
