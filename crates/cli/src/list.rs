//! `hawks list`: one fetch through the list orchestrator, printed to stdout.

use std::process;

use hawks_core::{
    FetchOutcome, HawkList, ListOrchestrator, QueryParams, SortDirection, TableBody, TableView,
};
use hawks_gateway::HttpGateway;

use crate::config::Settings;
use crate::{report_error, OutputFormat};

pub(crate) fn cmd_list(settings: &Settings, params: QueryParams, output: OutputFormat, quiet: bool) {
    let gateway = HttpGateway::new(&settings.gateway_url, settings.timeout);
    let mut list = ListOrchestrator::with_params(params);
    let ticket = list.mount();

    if let FetchOutcome::Failed(alert) = list.execute(&ticket, &gateway) {
        report_error(&alert.message, output, quiet);
        process::exit(1);
    }

    match output {
        OutputFormat::Json => {
            let body = HawkList {
                hawks: list.hawks().to_vec(),
            };
            match serde_json::to_string_pretty(&body) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    report_error(&format!("could not serialize hawks: {}", e), output, quiet);
                    process::exit(1);
                }
            }
        }
        OutputFormat::Text => print!("{}", render_table(&list.table())),
    }
}

fn arrow(dir: SortDirection) -> &'static str {
    match dir {
        SortDirection::Asc => "↑",
        SortDirection::Desc => "↓",
    }
}

/// Plain-text table: an ID column followed by the sortable columns.
pub(crate) fn render_table(table: &TableView) -> String {
    let mut header = vec!["ID".to_string()];
    header.extend(table.headers.iter().map(|cell| match cell.indicator {
        Some(dir) => format!("{} {}", cell.label, arrow(dir)),
        None => cell.label.to_string(),
    }));

    let rows: Vec<Vec<String>> = match &table.body {
        TableBody::Empty(message) => return format!("{}\n{}\n", header.join("  "), message),
        TableBody::Rows(rows) => rows
            .iter()
            .map(|row| {
                vec![
                    row.id.map(|id| id.to_string()).unwrap_or_default(),
                    row.name.clone(),
                    row.size.to_string(),
                    row.gender.to_string(),
                ]
            })
            .collect(),
    };

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for line in std::iter::once(&header).chain(rows.iter()) {
        let cells: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let pad = width - cell.chars().count();
                format!("{}{}", cell, " ".repeat(pad))
            })
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }
    out
}
