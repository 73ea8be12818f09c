use nest_proxy_lib::LandingStats;
use serde::Serialize;
use serde_json::Value;
use tabled::settings::Style;
use tabled::{Table, Tabled};

const MAX_CELL_CHARS: usize = 60;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Markdown,
}

impl OutputFormat {
    /// Unknown names fall back to a table.
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "URL")]
    url: String,
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct StatsRow {
    #[tabled(rename = "Projects")]
    projects: u64,
    #[tabled(rename = "Members")]
    members: u64,
    #[tabled(rename = "Chapters")]
    chapters: u64,
}

// -- Row builders --

fn first_str<'a>(record: &'a Value, keys: &[&str]) -> &'a str {
    keys.iter()
        .find_map(|k| record.get(*k).and_then(Value::as_str))
        .unwrap_or("")
}

fn build_item_rows(items: &[Value]) -> Vec<ItemRow> {
    items
        .iter()
        .map(|item| ItemRow {
            name: first_str(item, &["name", "title", "login", "key"]).to_string(),
            description: truncate(first_str(item, &["description", "summary"]), MAX_CELL_CHARS),
            url: first_str(item, &["url", "html_url"]).to_string(),
        })
        .collect()
}

fn build_field_rows(record: &Value) -> Vec<FieldRow> {
    match record {
        Value::Object(map) => map
            .iter()
            .map(|(field, value)| FieldRow {
                field: field.clone(),
                value: truncate(&cell_text(value), MAX_CELL_CHARS),
            })
            .collect(),
        other => vec![FieldRow {
            field: "value".to_string(),
            value: cell_text(other),
        }],
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}

// -- Printing --

fn print_rows<R: Tabled>(rows: Vec<R>, format: &OutputFormat) {
    let mut table = Table::new(rows);
    if *format == OutputFormat::Markdown {
        table.with(Style::markdown());
    }
    println!("{}", table);
}

pub fn print_items(items: &[Value], format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&items),
        _ => print_rows(build_item_rows(items), format),
    }
}

pub fn print_record(record: &Value, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(record),
        _ => print_rows(build_field_rows(record), format),
    }
}

pub fn print_stats(stats: &LandingStats, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(stats),
        _ => print_rows(
            vec![StatsRow {
                projects: stats.projects,
                members: stats.members,
                chapters: stats.chapters,
            }],
            format,
        ),
    }
}

pub fn print_json<T: Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
