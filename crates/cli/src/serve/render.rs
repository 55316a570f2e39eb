//! HTML for the list page and its dialogs.

use std::fmt::Write as _;

use hawks_core::{
    Alert, DetailDialog, EditorDialog, FieldKind, HawkField, ListOrchestrator, SortDirection,
    TableBody, TableView, COLUMN_COUNT,
};

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;color:#1f2937}\
main{max-width:56rem;margin:2rem auto;padding:0 1rem}\
header{display:flex;gap:1rem;align-items:center;justify-content:space-between}\
form.inline{display:inline}\
table{width:100%;border-collapse:collapse;margin-top:1rem}\
th,td{text-align:left;padding:.5rem;border-bottom:1px solid #e5e7eb}\
th button{background:none;border:0;font-weight:600;cursor:pointer}\
.alert{background:#fef2f2;color:#991b1b;padding:.75rem;margin:.75rem 0;border-radius:.25rem}\
.panel{position:fixed;top:0;right:0;bottom:0;width:28rem;overflow-y:auto;background:#fff;\
box-shadow:-4px 0 16px rgba(0,0,0,.15);padding:1.5rem}\
.panel label{display:block;margin-top:.75rem;font-size:.875rem}\
.panel input,.panel select,.panel textarea{width:100%;box-sizing:border-box}\
.actions{display:flex;gap:.5rem;justify-content:flex-end;margin-top:1.5rem}\
.modal{position:fixed;inset:0;background:rgba(107,114,128,.75);display:flex;\
align-items:center;justify-content:center}\
.modal>div{background:#fff;padding:1.5rem;border-radius:.5rem;max-width:28rem}\
dt{font-weight:600;margin-top:.5rem}dd{margin:0}\
img{max-width:100%}";

/// Escape text for use in element content and quoted attribute values.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// A form holding one submit button that posts to `action`.
fn post_button(action: &str, label: &str, testid: Option<&str>) -> String {
    let testid = testid
        .map(|id| format!(r#" data-testid="{}""#, id))
        .unwrap_or_default();
    format!(
        r#"<form class="inline" method="post" action="{}"><button type="submit"{}>{}</button></form>"#,
        escape(action),
        testid,
        escape(label)
    )
}

fn alert_banner(alert: &Alert, testid: &str, dismiss: Option<&str>) -> String {
    let mut html = format!(
        r#"<div class="alert" role="alert" data-testid="{}">{}"#,
        testid,
        escape(&alert.message)
    );
    if let Some(action) = dismiss {
        html.push(' ');
        html.push_str(&post_button(action, "Dismiss", None));
    }
    html.push_str("</div>");
    html
}

/// The whole page for the current state.
pub(crate) fn render_page(list: &ListOrchestrator) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Hawks</title>\n");
    let _ = writeln!(html, "<style>{}</style>", STYLE);
    html.push_str("</head>\n<body>\n<main>\n<header>\n<h1>Hawks</h1>\n");

    let _ = writeln!(
        html,
        r#"<form method="post" action="/filter"><input type="text" name="filter" value="{}" placeholder="Filter by name" aria-label="Filter" data-testid="filterInput"> <button type="submit" data-testid="filterButton">Filter</button></form>"#,
        escape(list.filter().text())
    );
    html.push_str(&post_button("/hawks/new", "Add Hawk", Some("addButton")));
    html.push_str("\n</header>\n");

    if let Some(alert) = list.alert() {
        html.push_str(&alert_banner(alert, "listAlert", Some("/alert/dismiss")));
        html.push('\n');
    }

    html.push_str(&render_table(&list.table()));
    html.push_str("</main>\n");

    if list.editor().is_open() {
        html.push_str(&render_editor(list.editor()));
    }
    if list.details().is_open() {
        html.push_str(&render_details(list.details()));
    }
    html.push_str("</body>\n</html>\n");
    html
}

fn arrow(dir: SortDirection) -> &'static str {
    match dir {
        SortDirection::Asc => " ↑",
        SortDirection::Desc => " ↓",
    }
}

pub(crate) fn render_table(table: &TableView) -> String {
    let mut html = String::from("<table data-testid=\"hawkTable\">\n<thead><tr>");
    for cell in &table.headers {
        let label = format!("{}{}", cell.label, cell.indicator.map(arrow).unwrap_or(""));
        let _ = write!(
            html,
            "<th scope=\"col\">{}</th>",
            post_button(&format!("/sort/{}", cell.field), &label, None)
        );
    }
    html.push_str("<th scope=\"col\"><span hidden>Actions</span></th></tr></thead>\n<tbody>\n");

    match &table.body {
        TableBody::Empty(message) => {
            let _ = writeln!(
                html,
                "<tr><td colspan=\"{}\">{}</td></tr>",
                COLUMN_COUNT,
                escape(message)
            );
        }
        TableBody::Rows(rows) => {
            for row in rows {
                let actions = match row.id {
                    Some(id) => format!(
                        "{} {}",
                        post_button(&format!("/hawks/{}/edit", id), "Edit", None),
                        post_button(&format!("/hawks/{}/view", id), "View", None)
                    ),
                    None => String::new(),
                };
                let _ = writeln!(
                    html,
                    "<tr data-testid=\"hawkRow\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                    escape(&row.name),
                    row.size,
                    row.gender,
                    actions
                );
            }
        }
    }
    html.push_str("</tbody>\n</table>\n");
    html
}

fn render_field(editor: &EditorDialog, field: HawkField) -> String {
    let key = field.key();
    let value = escape(&editor.value(field));
    let testid = if field == HawkField::Name {
        r#" data-testid="nameInput""#
    } else {
        ""
    };
    let control = match field.kind() {
        FieldKind::Text => format!(
            r#"<input type="text" id="{key}" name="{key}" value="{value}" required{testid}>"#
        ),
        FieldKind::Number => format!(
            r#"<input type="number" step="any" id="{key}" name="{key}" value="{value}" required{testid}>"#
        ),
        FieldKind::LongText => format!(
            r#"<textarea id="{key}" name="{key}" rows="3" required{testid}>{value}</textarea>"#
        ),
        FieldKind::Choice => {
            let current = editor.value(field);
            let options: String = field
                .options()
                .into_iter()
                .map(|(wire, label)| {
                    let selected = if wire == current { " selected" } else { "" };
                    format!(r#"<option value="{wire}"{selected}>{label}</option>"#)
                })
                .collect();
            format!(r#"<select id="{key}" name="{key}"{testid}>{options}</select>"#)
        }
    };
    format!(
        "<label for=\"{}\">{}</label>{}\n",
        key,
        field.label(),
        control
    )
}

pub(crate) fn render_editor(editor: &EditorDialog) -> String {
    let mut html = String::from("<aside class=\"panel\" aria-label=\"Hawk editor\" data-testid=\"hawkEditor\">\n");
    let _ = writeln!(html, "<h2>{}</h2>", editor.title());
    if let Some(alert) = editor.alert() {
        html.push_str(&alert_banner(alert, "editorAlert", None));
        html.push('\n');
    }
    html.push_str("<form method=\"post\" action=\"/editor\">\n");
    for field in HawkField::ALL {
        html.push_str(&render_field(editor, field));
    }
    let _ = writeln!(
        html,
        r#"<div class="actions"><button type="submit" formaction="/editor/cancel" formnovalidate>Cancel</button><button type="submit" data-testid="saveButton">{}</button></div>"#,
        editor.submit_label()
    );
    html.push_str("</form>\n</aside>\n");
    html
}

pub(crate) fn render_details(details: &DetailDialog) -> String {
    let mut html = String::from(
        "<aside class=\"panel\" aria-label=\"Hawk details\" data-testid=\"hawkDetails\">\n<h2>Hawk Details</h2>\n",
    );
    if let Some(hawk) = details.record() {
        if !hawk.picture_url.is_empty() {
            let _ = writeln!(
                html,
                r#"<img src="{}" alt="{}">"#,
                escape(&hawk.picture_url),
                escape(&hawk.name)
            );
        }
    }

    html.push_str("<dl>\n");
    for (label, value) in details.rows() {
        let _ = writeln!(html, "<dt>{}</dt><dd>{}</dd>", label, escape(&value));
    }
    html.push_str("</dl>\n");

    if let Some(alert) = details.alert() {
        html.push_str(&alert_banner(alert, "detailsAlert", None));
        html.push('\n');
    }
    let _ = writeln!(
        html,
        "<div class=\"actions\">{}{}</div>",
        post_button("/details/close", "Cancel", None),
        post_button("/details/delete", "Delete", Some("deleteButton"))
    );

    let confirm = details.confirm();
    if confirm.is_open() {
        let _ = writeln!(
            html,
            "<div class=\"modal\" role=\"dialog\" aria-modal=\"true\" data-testid=\"confirmModal\"><div><h3>{}</h3><p>{}</p><div class=\"actions\">{}{}</div></div></div>",
            escape(confirm.title()),
            escape(confirm.description()),
            post_button("/details/dismiss", "Cancel", None),
            post_button("/details/confirm", "Delete", Some("confirmDeleteButton"))
        );
    }
    html.push_str("</aside>\n");
    html
}
