//! Result rendering for the CLI

use clap::ValueEnum;
use probabilistic_serial_core_rs::RunReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Utility vector as a list, optional extras on following lines
    Text,
    /// Full run report as JSON
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub show_matrix: bool,
    pub show_profile: bool,
}

/// Render a report in the requested format
pub fn render(report: &RunReport, options: &RenderOptions) -> Result<String, serde_json::Error> {
    match options.format {
        OutputFormat::Json => serde_json::to_string_pretty(report),
        OutputFormat::Text => Ok(render_text(report, options)),
    }
}

fn render_text(report: &RunReport, options: &RenderOptions) -> String {
    let mut lines = Vec::new();

    if options.show_profile {
        lines.push("profile:".to_string());
        for (agent, ranking) in report.profile.rankings().iter().enumerate() {
            lines.push(format!("  agent {}: {:?}", agent, ranking));
        }
    }

    if options.show_matrix {
        lines.push("matrix:".to_string());
        for (agent, row) in report.matrix.rows().iter().enumerate() {
            let cells: Vec<String> = row.iter().map(|share| format!("{:.4}", share)).collect();
            lines.push(format!("  agent {}: [{}]", agent, cells.join(", ")));
        }
    }

    // Last line is always the utility vector
    lines.push(format!("{:?}", report.utilities.as_slice()));
    lines.join("\n")
}
