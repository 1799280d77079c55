use chrono::{DateTime, SecondsFormat};
use colored::*;
use recency::RecencyError;
use recency::ranking::{RecencyScore, RecencySource};
use serde_json::{Value, json};
use std::io::Write;
use std::str::FromStr;

/// Widest record preview shown in table output.
const PREVIEW_WIDTH: usize = 72;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Ndjson,
}

impl FromStr for OutputFormat {
    type Err = RecencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            _ => Err(RecencyError::Other(format!(
                "Invalid output format: {} (expected table, json or ndjson)",
                s
            ))),
        }
    }
}

impl OutputFormat {
    pub fn is_machine(self) -> bool {
        !matches!(self, Self::Table)
    }
}

pub struct CliColors;

impl CliColors {
    pub fn success() -> Color {
        Color::TrueColor {
            r: 34,
            g: 197,
            b: 94,
        }
    }

    pub fn error() -> Color {
        Color::TrueColor {
            r: 239,
            g: 68,
            b: 68,
        }
    }

    pub fn warning() -> Color {
        Color::TrueColor {
            r: 245,
            g: 158,
            b: 11,
        }
    }

    pub fn info() -> Color {
        Color::TrueColor {
            r: 59,
            g: 130,
            b: 246,
        }
    }

    pub fn muted() -> Color {
        Color::TrueColor {
            r: 148,
            g: 163,
            b: 184,
        }
    }
}

/// Output a RecencyError in structured JSON or coloured text, on stderr
pub fn output_error_json(error: &RecencyError, format: OutputFormat) {
    if format.is_machine() {
        let code = match error {
            RecencyError::Configuration(_) => "CONFIGURATION_ERROR",
            RecencyError::Logging(_) => "LOGGING_ERROR",
            RecencyError::Input(_) => "INPUT_ERROR",
            RecencyError::Io(_) => "IO_ERROR",
            RecencyError::Other(_) => "OTHER_ERROR",
        };

        let error_response = json!({
            "error": true,
            "code": code,
            "message": error.to_string(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        });

        eprintln!(
            "{}",
            serde_json::to_string_pretty(&error_response).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        eprintln!("{}", format_error(&error.to_string()));
    }
}

pub fn format_error(msg: &str) -> String {
    format!(
        "{} {}",
        "✗".color(CliColors::error()).bold(),
        msg.color(CliColors::error())
    )
}

pub fn format_warning(msg: &str) -> String {
    format!(
        "{} {}",
        "⚠".color(CliColors::warning()).bold(),
        msg.color(CliColors::warning())
    )
}

pub fn format_info(msg: &str) -> String {
    format!(
        "{} {}",
        "ℹ".color(CliColors::info()).bold(),
        msg.color(CliColors::info())
    )
}

/// Render a recency value for humans: an RFC 3339 time for timestamps,
/// the id for the id fallback, a dash otherwise.
pub fn format_recency(score: &RecencyScore) -> String {
    match &score.source {
        RecencySource::PriorityField(_) | RecencySource::ScannedField(_) => {
            DateTime::from_timestamp_millis(score.value as i64)
                .map(|time| time.to_rfc3339_opts(SecondsFormat::Secs, true))
                .unwrap_or_else(|| score.value.to_string())
        }
        RecencySource::Id => format!("id {}", score.value),
        RecencySource::Fallback => "-".to_string(),
    }
}

pub fn format_source(source: &RecencySource) -> ColoredString {
    match source {
        RecencySource::PriorityField(name) => name.as_str().color(CliColors::success()),
        RecencySource::ScannedField(name) => {
            format!("{} (scan)", name).color(CliColors::info())
        }
        RecencySource::Id => "id".color(CliColors::warning()),
        RecencySource::Fallback => "none".color(CliColors::muted()),
    }
}

/// Compact one-line preview of a record, truncated on a char boundary.
pub fn preview(record: &Value) -> String {
    let text = record.to_string();
    if text.chars().count() <= PREVIEW_WIDTH {
        return text;
    }
    let mut cut: String = text.chars().take(PREVIEW_WIDTH - 1).collect();
    cut.push('…');
    cut
}

fn id_cell(record: &Value, id_field: &str) -> String {
    match recency::record::id_text(record, id_field) {
        Some(id) => id,
        None => "-".to_string(),
    }
}

/// Print ranked records in the requested format.
pub fn print_records(
    out: &mut dyn Write,
    records: &[&Value],
    scores: &[RecencyScore],
    id_field: &str,
    format: OutputFormat,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)
        }
        OutputFormat::Ndjson => {
            for record in records {
                serde_json::to_writer(&mut *out, record)?;
                writeln!(out)?;
            }
            Ok(())
        }
        OutputFormat::Table => {
            if records.is_empty() {
                return writeln!(out, "{}", format_info("No records"));
            }
            writeln!(
                out,
                "{:>4}  {:<12}  {:<24}  {}",
                "#".bold(),
                "ID".bold(),
                "RECENCY".bold(),
                "RECORD".bold()
            )?;
            for (rank, (record, score)) in records.iter().zip(scores).enumerate() {
                writeln!(
                    out,
                    "{:>4}  {:<12}  {:<24}  {}",
                    rank + 1,
                    id_cell(record, id_field),
                    format_recency(score),
                    preview(record).color(CliColors::muted())
                )?;
            }
            Ok(())
        }
    }
}

/// Print per-record scoring details in the requested format.
pub fn print_explanations(
    out: &mut dyn Write,
    records: &[&Value],
    scores: &[RecencyScore],
    id_field: &str,
    format: OutputFormat,
) -> std::io::Result<()> {
    let entries: Vec<Value> = records
        .iter()
        .zip(scores)
        .enumerate()
        .map(|(rank, (record, score))| {
            json!({
                "rank": rank + 1,
                "id": recency::record::field(record, id_field).cloned().unwrap_or(Value::Null),
                "value": score.value,
                "recency": format_recency(score),
                "source": score.source,
            })
        })
        .collect();

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &entries)?;
            writeln!(out)
        }
        OutputFormat::Ndjson => {
            for entry in &entries {
                serde_json::to_writer(&mut *out, entry)?;
                writeln!(out)?;
            }
            Ok(())
        }
        OutputFormat::Table => {
            if records.is_empty() {
                return writeln!(out, "{}", format_info("No records"));
            }
            writeln!(
                out,
                "{:>4}  {:<12}  {:<24}  {}",
                "#".bold(),
                "ID".bold(),
                "RECENCY".bold(),
                "DECIDED BY".bold()
            )?;
            for (rank, (record, score)) in records.iter().zip(scores).enumerate() {
                writeln!(
                    out,
                    "{:>4}  {:<12}  {:<24}  {}",
                    rank + 1,
                    id_cell(record, id_field),
                    format_recency(score),
                    format_source(&score.source)
                )?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_output_formats() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::Ndjson);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn formats_recency_by_source() {
        let stamp = RecencyScore {
            value: 1_717_200_000_000.0,
            source: RecencySource::PriorityField("updatedAt".into()),
        };
        assert_eq!(format_recency(&stamp), "2024-06-01T00:00:00Z");

        let id = RecencyScore {
            value: 12.0,
            source: RecencySource::Id,
        };
        assert_eq!(format_recency(&id), "id 12");

        let none = RecencyScore {
            value: 0.0,
            source: RecencySource::Fallback,
        };
        assert_eq!(format_recency(&none), "-");
    }

    #[test]
    fn previews_are_truncated() {
        let short = json!({"id": 1});
        assert_eq!(preview(&short), r#"{"id":1}"#);

        let long = json!({"note": "é".repeat(200)});
        let cut = preview(&long);
        assert_eq!(cut.chars().count(), PREVIEW_WIDTH);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn ndjson_records_one_per_line() {
        let a = json!({"id": 1});
        let b = json!({"id": 2});
        let scores = vec![
            RecencyScore {
                value: 1.0,
                source: RecencySource::Id,
            },
            RecencyScore {
                value: 2.0,
                source: RecencySource::Id,
            },
        ];
        let mut buffer = Vec::new();
        print_records(&mut buffer, &[&a, &b], &scores, "id", OutputFormat::Ndjson).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "{\"id\":1}\n{\"id\":2}\n");
    }
}
