//! Export formats for a record sequence.
//!
//! All three renderers are pure: the same sequence always produces the same
//! bytes. JSON is lossless; CSV keeps seven scalar columns with the narrative
//! truncated; the HTML report is presentational only.

use std::str::FromStr;

use crate::constants::CSV_NARRATIVE_LIMIT;
use crate::error::SessionError;
use crate::format::{escape_html, format_file_size};
use crate::sequence::REMSequence;
use crate::stats::aggregate;
use crate::time::unix_millis_to_date;

pub const CSV_HEADER: [&str; 7] = [
    "rem_id",
    "timestamp",
    "narrative",
    "affective_valence",
    "spatial_horizon",
    "intentional_mode",
    "dominant_modality",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Report,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Json, ExportFormat::Csv, ExportFormat::Report];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Report => "report",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
            ExportFormat::Report => "text/html",
        }
    }

    /// Download name for an artifact produced at `unix_millis`.
    pub fn file_name(&self, unix_millis: u64) -> String {
        let date = unix_millis_to_date(unix_millis);
        match self {
            ExportFormat::Json => format!("remforge_data_{date}.json"),
            ExportFormat::Csv => format!("remforge_data_{date}.csv"),
            ExportFormat::Report => format!("remforge_report_{date}.html"),
        }
    }

    pub fn render(&self, seq: &REMSequence) -> Result<String, SessionError> {
        match self {
            ExportFormat::Json => Ok(to_json(seq)?),
            ExportFormat::Csv => Ok(to_csv(seq)),
            ExportFormat::Report => Ok(to_report(seq)),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "report" | "html" => Ok(ExportFormat::Report),
            other => Err(SessionError::UnknownFormat(other.to_string())),
        }
    }
}

/// Pretty-printed JSON in declared field order.
pub fn to_json(seq: &REMSequence) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(seq)
}

/// Parse a JSON export back into a sequence.
pub fn from_json(json: &str) -> Result<REMSequence, serde_json::Error> {
    serde_json::from_str(json)
}

/// One header row plus one row per record, joined by `\n` with no trailing
/// newline. The narrative is always quoted; other text fields are quoted
/// only when they contain a delimiter, quote or line break.
pub fn to_csv(seq: &REMSequence) -> String {
    let mut lines = Vec::with_capacity(seq.len() + 1);
    lines.push(CSV_HEADER.join(","));

    for rem in seq.records() {
        let dominant = rem
            .sensorium
            .dominant_modality()
            .map(|m| m.as_str())
            .unwrap_or("unknown");
        let row = [
            csv_field(&rem.rem_id),
            csv_field(&rem.timestamp),
            quote_csv(&truncate_chars(&rem.narrative_stream, CSV_NARRATIVE_LIMIT)),
            rem.sensorium.affective_valence.to_string(),
            csv_field(&rem.sensorium.spatial_horizon),
            rem.intentional_act.mode.as_str().to_string(),
            dominant.to_string(),
        ];
        lines.push(row.join(","));
    }

    lines.join("\n")
}

fn truncate_chars(s: &str, limit: usize) -> String {
    s.chars().take(limit).collect()
}

/// Wrap in double quotes, doubling any embedded quote.
fn quote_csv(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// RFC 4180: quote only when the field would otherwise break the row.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        quote_csv(field)
    } else {
        field.to_string()
    }
}

const REPORT_STYLE: &str = "\
body { font-family: Arial, sans-serif; margin: 40px; }
.header { background: linear-gradient(135deg, #2C5530, #8B7355); color: white; padding: 30px; border-radius: 10px; }
.stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 20px; margin: 30px 0; }
.stat-card { background: white; padding: 20px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); text-align: center; }
.rem-item { background: #f8f9fa; padding: 15px; margin: 10px 0; border-radius: 8px; border-left: 4px solid #2C5530; }
.qualia-badge { display: inline-block; background: #E24A8B; color: white; padding: 2px 6px; border-radius: 10px; font-size: 0.8em; margin: 2px; }";

/// Self-contained HTML report: summary cards followed by one entry per
/// record in sequence order.
pub fn to_report(seq: &REMSequence) -> String {
    let stats = aggregate(&seq.sequence);
    let avg = stats
        .avg_valence
        .map(|v| format!("{v:.3}"))
        .unwrap_or_else(|| "n/a".to_string());

    let mut lines: Vec<String> = vec![
        "<!DOCTYPE html>".to_string(),
        "<html>".to_string(),
        "<head>".to_string(),
        "<meta charset=\"utf-8\">".to_string(),
        "<title>REMForge Report</title>".to_string(),
        format!("<style>\n{REPORT_STYLE}\n</style>"),
        "</head>".to_string(),
        "<body>".to_string(),
        "<div class=\"header\">".to_string(),
        "<h1>REMForge Analysis Report</h1>".to_string(),
        format!(
            "<p>Generated on {} &middot; {} files, {}</p>",
            escape_html(&seq.metadata.processed_at),
            seq.metadata.total_files,
            format_file_size(seq.metadata.total_size)
        ),
        "</div>".to_string(),
        "<div class=\"stats\">".to_string(),
    ];

    for (value, label) in [
        (stats.total_experiences.to_string(), "Total Experiences"),
        (stats.total_qualia.to_string(), "Qualia Detected"),
        (stats.total_anchors.to_string(), "Semantic Anchors"),
        (avg, "Average Valence"),
    ] {
        lines.push(format!(
            "<div class=\"stat-card\"><h3>{value}</h3><p>{label}</p></div>"
        ));
    }
    lines.push("</div>".to_string());
    lines.push("<h2>Experiences</h2>".to_string());

    for rem in seq.records() {
        let qualia = if rem.semantic_contamination.qualia_tokens.is_empty() {
            "None".to_string()
        } else {
            rem.semantic_contamination
                .qualia_tokens
                .iter()
                .map(|q| format!("<span class=\"qualia-badge\">{}</span>", escape_html(&q.token)))
                .collect::<String>()
        };
        lines.push("<div class=\"rem-item\">".to_string());
        lines.push(format!("<h4>{}</h4>", escape_html(&rem.rem_id)));
        lines.push(format!(
            "<p><strong>Narrative:</strong> {}</p>",
            escape_html(&rem.narrative_stream)
        ));
        lines.push(format!(
            "<p><strong>Intentional Mode:</strong> {}</p>",
            rem.intentional_act.mode.as_str()
        ));
        lines.push(format!(
            "<p><strong>Affective Valence:</strong> {:.3}</p>",
            rem.sensorium.affective_valence
        ));
        lines.push(format!("<p><strong>Qualia:</strong> {qualia}</p>"));
        lines.push("</div>".to_string());
    }

    lines.push("</body>".to_string());
    lines.push("</html>".to_string());
    lines.join("\n")
}
