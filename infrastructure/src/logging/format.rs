//! Record formatters for the structured backend.
//!
//! Both formatters write exactly one line per record. Field names that collide
//! with the built-in keys (`time`, `level`, `msg`) are written as
//! `fields.<name>` so they never shadow the record's own metadata.

use chrono::{DateTime, Local, SecondsFormat};
use logswitch_domain::{Level, OutFormat};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Timestamp layout of the text format
pub const TEXT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const RESERVED_KEYS: [&str; 3] = ["time", "level", "msg"];

/// A single record ready to be rendered.
#[derive(Debug)]
pub struct Record<'a> {
    pub time: DateTime<Local>,
    pub level: Level,
    pub message: &'a str,
    pub fields: &'a BTreeMap<String, Value>,
}

/// Renders a [`Record`] as one line.
pub trait Formatter: Send + Sync {
    fn format(&self, out: &mut dyn Write, record: &Record<'_>) -> io::Result<()>;
}

/// Build the formatter for a configured output format.
pub fn formatter_for(format: OutFormat) -> Box<dyn Formatter> {
    match format {
        OutFormat::Json => Box::new(JsonFormatter),
        OutFormat::Text => Box::new(TextFormatter::default()),
    }
}

fn field_key(name: &str) -> String {
    if RESERVED_KEYS.contains(&name) {
        format!("fields.{}", name)
    } else {
        name.to_string()
    }
}

/// Line-delimited JSON with fields flattened next to `time`, `level`, `msg`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, out: &mut dyn Write, record: &Record<'_>) -> io::Result<()> {
        let mut map = Map::with_capacity(record.fields.len() + RESERVED_KEYS.len());
        for (name, value) in record.fields {
            map.insert(field_key(name), value.clone());
        }
        map.insert(
            "time".to_string(),
            Value::String(record.time.to_rfc3339_opts(SecondsFormat::Secs, true)),
        );
        map.insert(
            "level".to_string(),
            Value::String(record.level.as_str().to_string()),
        );
        map.insert("msg".to_string(), Value::String(record.message.to_string()));

        serde_json::to_writer(&mut *out, &map)?;
        writeln!(out)
    }
}

/// `time="..." level=info msg=... key=value` lines, keys sorted.
#[derive(Debug, Clone)]
pub struct TextFormatter {
    timestamp_format: String,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self {
            timestamp_format: TEXT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl TextFormatter {
    pub fn with_timestamp_format(format: impl Into<String>) -> Self {
        Self {
            timestamp_format: format.into(),
        }
    }

    fn write_pair(out: &mut dyn Write, key: &str, value: &str) -> io::Result<()> {
        if needs_quoting(value) {
            write!(out, " {}={:?}", key, value)
        } else {
            write!(out, " {}={}", key, value)
        }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, out: &mut dyn Write, record: &Record<'_>) -> io::Result<()> {
        let time = record.time.format(&self.timestamp_format).to_string();
        write!(out, "time={:?}", time)?;
        Self::write_pair(out, "level", record.level.as_str())?;
        Self::write_pair(out, "msg", record.message)?;

        for (name, value) in record.fields {
            let rendered = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            Self::write_pair(out, &field_key(name), &rendered)?;
        }
        writeln!(out)
    }
}

fn needs_quoting(value: &str) -> bool {
    value.is_empty()
        || !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '/' | '@' | '^' | '+'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap()
    }

    fn render(formatter: &dyn Formatter, fields: &BTreeMap<String, Value>) -> String {
        let record = Record {
            time: fixed_time(),
            level: Level::Info,
            message: "service started",
            fields,
        };
        let mut out = Vec::new();
        formatter.format(&mut out, &record).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_json_flattens_fields() {
        let fields = BTreeMap::from([
            ("port".to_string(), json!(8080)),
            ("pkg".to_string(), json!("app/src/main")),
        ]);
        let line = render(&JsonFormatter, &fields);
        assert!(line.ends_with('\n'));
        assert_eq!(line.matches('\n').count(), 1);

        let value: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["msg"], "service started");
        assert_eq!(value["level"], "info");
        assert_eq!(value["port"], 8080);
        assert_eq!(value["pkg"], "app/src/main");
        assert!(value["time"].as_str().unwrap().starts_with("2024-03-09T07:05:01"));
    }

    #[test]
    fn test_json_reserved_field_names_are_prefixed() {
        let fields = BTreeMap::from([("msg".to_string(), json!("shadow"))]);
        let value: Value = serde_json::from_str(&render(&JsonFormatter, &fields)).unwrap();

        assert_eq!(value["msg"], "service started");
        assert_eq!(value["fields.msg"], "shadow");
    }

    #[test]
    fn test_text_line_layout() {
        let fields = BTreeMap::from([
            ("user".to_string(), json!("bob")),
            ("attempt".to_string(), json!(2)),
            ("src".to_string(), json!("main.rs:12")),
        ]);
        let line = render(&TextFormatter::default(), &fields);

        assert_eq!(
            line,
            "time=\"2024-03-09 07:05:01\" level=info msg=\"service started\" \
             attempt=2 src=\"main.rs:12\" user=bob\n"
        );
    }

    #[test]
    fn test_text_renders_structured_values_as_json() {
        let fields = BTreeMap::from([("peer".to_string(), json!({"host": "db"}))]);
        let line = render(&TextFormatter::default(), &fields);
        assert!(line.contains(r#"peer="{\"host\":\"db\"}""#));
    }

    #[test]
    fn test_custom_timestamp_format() {
        let line = render(&TextFormatter::with_timestamp_format("%H:%M"), &BTreeMap::new());
        assert!(line.starts_with("time=\"07:05\" level=info"));
    }

    #[test]
    fn test_needs_quoting() {
        assert!(!needs_quoting("plain-value_1.0"));
        assert!(needs_quoting(""));
        assert!(needs_quoting("two words"));
        assert!(needs_quoting("a=b"));
        assert!(needs_quoting("say \"hi\""));
    }

    #[test]
    fn test_formatter_for_selects_by_format() {
        let fields = BTreeMap::new();
        let json = render(formatter_for(OutFormat::Json).as_ref(), &fields);
        let text = render(formatter_for(OutFormat::Text).as_ref(), &fields);

        assert!(json.starts_with('{'));
        assert!(text.starts_with("time="));
    }
}
