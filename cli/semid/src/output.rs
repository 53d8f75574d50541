//! Output formatting for CLI commands.

use std::fmt::Display;
use std::str::FromStr;

use serde::Serialize;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain value on a single line.
    #[default]
    Text,
    /// JSON object.
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(anyhow::anyhow!(
                "unknown output format '{other}' (expected text or json)"
            )),
        }
    }
}

/// An encoded ID paired with the value it stands for.
#[derive(Debug, Serialize)]
pub struct IdRecord<V: Serialize> {
    pub id: String,
    pub value: V,
}

/// Print the part of `record` a text user asked for, or the whole record as
/// JSON.
pub fn print_record<V: Serialize + Display>(
    record: &IdRecord<V>,
    format: OutputFormat,
    show_id: bool,
) {
    match format {
        OutputFormat::Text if show_id => println!("{}", record.id),
        OutputFormat::Text => println!("{}", record.value),
        OutputFormat::Json => println!("{}", format_json(record)),
    }
}

fn format_json<T: Serialize + ?Sized>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string())
}
