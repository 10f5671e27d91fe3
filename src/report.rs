//! Rendering of a finished allocation.
//!
//! One row per placed product, grouped by shelf in catalog order and,
//! within a shelf, by product catalog order. Empty shelves produce no rows.

use crate::catalog::Catalog;
use crate::config::ReportFormat;
use crate::error::Result;
use crate::shelf::{Allocation, Rule};
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;
use std::path::Path;
use tracing::info;

const COLUMNS: [&str; 8] = [
    "Shelf ID",
    "Shelf Name",
    "Shelf Type",
    "Shelf Capacity",
    "Product ID",
    "Product Name",
    "Product Weight",
    "Category",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub shelf_id: String,
    pub shelf_name: String,
    pub shelf_type: String,
    pub shelf_capacity: f64,
    pub product_id: String,
    pub product_name: String,
    pub product_weight: f64,
    pub category: String,
}

#[derive(Debug, Clone, Serialize)]
struct RuleSummary {
    rule: Rule,
    violations: usize,
    penalty: f64,
}

#[derive(Debug, Clone, Serialize)]
struct JsonReport<'r> {
    penalty: f64,
    generations: usize,
    converged: bool,
    violations: Vec<RuleSummary>,
    rows: &'r [ReportRow],
}

/// Builds the report rows for `allocation`.
pub fn rows(allocation: &Allocation, catalog: &Catalog) -> Vec<ReportRow> {
    let mut rows = Vec::with_capacity(catalog.products().len());
    for (s, shelf) in catalog.shelves().iter().enumerate() {
        for (p, product) in catalog.products().iter().enumerate() {
            if allocation.best.shelf_of(p) != s {
                continue;
            }
            rows.push(ReportRow {
                shelf_id: shelf.id.clone(),
                shelf_name: shelf.name.clone(),
                shelf_type: shelf.shelf_type.to_string(),
                shelf_capacity: shelf.capacity,
                product_id: product.id.clone(),
                product_name: product.name.clone(),
                product_weight: product.weight,
                category: product.category.clone(),
            });
        }
    }
    rows
}

impl ReportRow {
    fn cells(&self) -> [String; 8] {
        [
            self.shelf_id.clone(),
            self.shelf_name.clone(),
            self.shelf_type.clone(),
            self.shelf_capacity.to_string(),
            self.product_id.clone(),
            self.product_name.clone(),
            self.product_weight.to_string(),
            self.category.clone(),
        ]
    }
}

/// Renders the rows as a text table followed by a penalty summary.
pub fn render_table(allocation: &Allocation, rows: &[ReportRow]) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(COLUMNS);
    for row in rows {
        table.add_row(row.cells());
    }

    let mut out = format!("{table}\n");
    out.push_str(&format!(
        "Best penalty: {} after {} generation(s)\n",
        allocation.penalty, allocation.generations
    ));
    for (rule, count, penalty) in allocation.breakdown.violated() {
        out.push_str(&format!("  {rule}: {count} violation(s), penalty {penalty}\n"));
    }
    out
}

/// Renders the rows and penalty summary as pretty-printed JSON.
pub fn render_json(allocation: &Allocation, rows: &[ReportRow]) -> Result<String> {
    let report = JsonReport {
        penalty: allocation.penalty,
        generations: allocation.generations,
        converged: allocation.converged,
        violations: allocation
            .breakdown
            .violated()
            .map(|(rule, violations, penalty)| RuleSummary {
                rule,
                violations,
                penalty,
            })
            .collect(),
        rows,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Renders the rows as CSV with a header line, suitable for spreadsheets.
///
/// The penalty summary is not included.
pub fn render_csv(rows: &[ReportRow]) -> String {
    let mut out = COLUMNS.join(",");
    out.push('\n');
    for row in rows {
        let cells: Vec<String> = row.cells().iter().map(|c| csv_field(c)).collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

pub fn render(format: ReportFormat, allocation: &Allocation, rows: &[ReportRow]) -> Result<String> {
    match format {
        ReportFormat::Table => Ok(render_table(allocation, rows)),
        ReportFormat::Json => render_json(allocation, rows),
        ReportFormat::Csv => Ok(render_csv(rows)),
    }
}

/// Writes an already rendered report to `path`.
pub fn write_report(path: impl AsRef<Path>, rendered: &str) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, rendered)?;
    info!(path = %path.display(), bytes = rendered.len(), "report written");
    Ok(())
}
