//! Audit record input: a JSON array, a single object, or JSON Lines.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use movehist_core::AuditRecord;
use movehist_schema::SchemaRegistry;
use serde_json::Value;

/// Read the whole input, `-` meaning stdin.
pub fn read_source(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read audit records from stdin")?;
        return Ok(text);
    }

    let path = Path::new(source);
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read audit records from {}", path.display()))
}

/// Split input into raw JSON values.
///
/// A leading `[` is read as one array; anything else as a stream of
/// whitespace-separated JSON values, which covers JSON Lines.
pub fn parse_values(text: &str) -> anyhow::Result<Vec<Value>> {
    if text.trim_start().starts_with('[') {
        return serde_json::from_str(text).context("input is not a valid JSON array");
    }

    serde_json::Deserializer::from_str(text)
        .into_iter::<Value>()
        .enumerate()
        .map(|(index, value)| value.with_context(|| format!("invalid JSON value #{}", index + 1)))
        .collect()
}

/// Decoded records plus the count of rows that were dropped.
#[derive(Debug, Default)]
pub struct Decoded {
    pub records: Vec<AuditRecord>,
    pub rejected: usize,
}

/// Decode raw values, optionally validating each against the `audit_record`
/// schema. Rows that fail are logged and skipped.
pub fn decode_records(values: Vec<Value>, schemas: Option<&SchemaRegistry>) -> Decoded {
    let mut decoded = Decoded::default();
    for (index, value) in values.into_iter().enumerate() {
        let result = match schemas {
            Some(registry) => registry.validate_record(value).map_err(anyhow::Error::from),
            None => AuditRecord::from_value(value).map_err(anyhow::Error::from),
        };
        match result {
            Ok(record) => decoded.records.push(record),
            Err(error) => {
                tracing::warn!(row = index + 1, %error, "skipping audit record");
                decoded.rejected += 1;
            }
        }
    }
    decoded
}

/// Read, parse, and decode in one step.
pub fn load_records(source: &str, validate: bool) -> anyhow::Result<Decoded> {
    let text = read_source(source)?;
    let values = parse_values(&text)?;
    let schemas = validate.then(SchemaRegistry::new);
    Ok(decode_records(values, schemas.as_ref()))
}
