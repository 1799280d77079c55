use crate::args::InputArgs;
use recency::RecencyError;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Wrapper keys under which APIs commonly nest their result arrays.
const ENVELOPE_KEYS: &[&str] = &["data", "items", "results"];

/// Read records from the file named in `input`, or from stdin.
pub fn read_records(input: &InputArgs) -> recency::Result<Vec<Value>> {
    let (text, ndjson) = match input.file.as_deref() {
        Some(path) if path != Path::new("-") => {
            let text = std::fs::read_to_string(path).map_err(|e| {
                RecencyError::Input(format!("cannot read {}: {}", path.display(), e))
            })?;
            (text, input.ndjson || is_ndjson_path(path))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            (text, input.ndjson)
        }
    };

    let records = parse_records(&text, ndjson)?;
    tracing::debug!(count = records.len(), ndjson, "Read input records");
    Ok(records)
}

/// Whether a path's extension marks it as newline-delimited JSON.
pub fn is_ndjson_path(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("ndjson") | Some("jsonl")
    )
}

/// Parse a document into records.
///
/// Plain JSON must be an array, or an object wrapping an array under `data`,
/// `items` or `results`. NDJSON takes one value per non-blank line.
pub fn parse_records(text: &str, ndjson: bool) -> recency::Result<Vec<Value>> {
    if ndjson {
        return text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                serde_json::from_str(line)
                    .map_err(|e| RecencyError::Input(format!("line {}: {}", index + 1, e)))
            })
            .collect();
    }

    match serde_json::from_str::<Value>(text)? {
        Value::Array(records) => Ok(records),
        Value::Object(mut map) => ENVELOPE_KEYS
            .iter()
            .find_map(|key| match map.remove(*key) {
                Some(Value::Array(records)) => Some(records),
                _ => None,
            })
            .ok_or_else(|| {
                RecencyError::Input(
                    "expected a JSON array, or an object with a data/items/results array"
                        .to_string(),
                )
            }),
        other => Err(RecencyError::Input(format!(
            "expected a JSON array, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
