/*!
 * Reporting functionality for projdump
 *
 * Writes the inventory artifacts (JSON report and plain-text summary) and
 * renders the end-of-run console table with the tabled library.
 */

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde_json::Value;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};
use tracing::info;

use crate::error::{ProjDumpError, Result};
use crate::types::ProjectReport;
use crate::utils::format_file_size;

fn create_output(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| ProjDumpError::Output {
            path: path.to_path_buf(),
            source,
        })
}

/// Summary file that accompanies an inventory JSON file: `<stem>_summary.txt`
pub fn summary_path_for(json_path: &Path) -> PathBuf {
    let stem = json_path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    json_path.with_file_name(format!("{}_summary.txt", stem))
}

/// Write the report as pretty-printed JSON
pub fn write_inventory(report: &ProjectReport, json_path: &Path) -> Result<()> {
    let mut writer = create_output(json_path)?;
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;

    info!(path = %json_path.display(), "inventory written");
    Ok(())
}

/// Manifest value as shown in the summary: strings unquoted, other JSON as text
fn display_field(value: &Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => "None".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Render the plain-text summary of a report
pub fn render_summary(report: &ProjectReport) -> String {
    let frontend = &report.frontend;
    let backend = &report.backend;

    let mut out = String::new();
    out.push_str("Project Analysis Summary\n");
    out.push_str(&format!("Generated on: {}\n\n", report.timestamp));

    out.push_str("Frontend Summary:\n");
    out.push_str(&format!(
        "- Package Name: {}\n",
        display_field(&frontend.package_info.name)
    ));
    out.push_str(&format!(
        "- Version: {}\n",
        display_field(&frontend.package_info.version)
    ));
    out.push_str(&format!(
        "- Number of Components: {}\n",
        frontend.components.len()
    ));
    out.push_str("\nComponents:\n");
    for component in &frontend.components {
        out.push_str(&format!("  - {}\n", component.name));
    }

    out.push_str("\nBackend Summary:\n");
    out.push_str(&format!(
        "- Package Name: {}\n",
        display_field(&backend.package_info.name)
    ));
    out.push_str(&format!(
        "- Version: {}\n",
        display_field(&backend.package_info.version)
    ));
    out.push_str(&format!("- Number of Routes: {}\n", backend.routes.len()));
    out.push_str(&format!("- Number of Models: {}\n", backend.models.len()));
    out.push_str("\nRoutes:\n");
    for route in &backend.routes {
        out.push_str(&format!("  - {}\n", route.name));
    }

    out
}

/// Write the summary derived from an in-memory report
pub fn write_summary(report: &ProjectReport, summary_path: &Path) -> Result<()> {
    let mut writer = create_output(summary_path)?;
    writer.write_all(render_summary(report).as_bytes())?;
    writer.flush()?;

    info!(path = %summary_path.display(), "summary written");
    Ok(())
}

/// Outcome of a whole run, for the console
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Artifacts written, in order
    pub outputs: Vec<PathBuf>,
    /// Time taken by the run
    pub duration: Duration,
    /// Component count, when the inventory ran
    pub components: Option<usize>,
    /// Route count, when the inventory ran
    pub routes: Option<usize>,
    /// Model count, when the inventory ran
    pub models: Option<usize>,
}

impl RunReport {
    /// Record the counts of an inventory report
    pub fn with_inventory(mut self, report: &ProjectReport) -> Self {
        self.components = Some(report.frontend.components.len());
        self.routes = Some(report.backend.routes.len());
        self.models = Some(report.backend.models.len());
        self
    }
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Report generator for run results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Generate a report string for a finished run
    pub fn generate_report(&self, report: &RunReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &RunReport) {
        println!("\n{}", self.generate_report(report));
    }

    fn create_outputs_table(&self, report: &RunReport) -> String {
        #[derive(Tabled)]
        struct OutputRow {
            #[tabled(rename = "Output File")]
            path: String,

            #[tabled(rename = "Size")]
            size: String,
        }

        let rows: Vec<OutputRow> = report
            .outputs
            .iter()
            .map(|path| OutputRow {
                path: path.display().to_string(),
                size: fs::metadata(path)
                    .map(|m| format_file_size(m.len()))
                    .unwrap_or_else(|_| "-".to_string()),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn create_summary_table(&self, report: &RunReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let mut rows = vec![SummaryRow {
            key: "⏱️ Process Time".to_string(),
            value: format!("{:.4?}", report.duration),
        }];

        let counts = [
            ("🧩 Components", report.components),
            ("🛣️ Routes", report.routes),
            ("🗃️ Models", report.models),
        ];
        for (key, count) in counts {
            if let Some(count) = count {
                rows.push(SummaryRow {
                    key: key.to_string(),
                    value: count.to_string(),
                });
            }
        }

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn generate_console_report(&self, report: &RunReport) -> String {
        format!(
            "📋  OUTPUT FILES\n{}\n\n✅  ANALYSIS COMPLETE\n{}",
            self.create_outputs_table(report),
            self.create_summary_table(report)
        )
    }
}
