//! Output formatting: text, table, JSON, YAML.
//!
//! Renders decoded entities in the format selected by `--output`. Tables
//! use `tabled`, structured formats serialize the whole page via serde so
//! `links` and `included` survive.

use std::fmt::Write as _;
use std::io::{self, Write};

use lingo_api::Page;
use serde::Serialize;
use serde_json::Value;
use tabled::{Table, Tabled, settings::Style};

use crate::cli::OutputFormat;
use crate::error::CliError;

// ── Generic row ──────────────────────────────────────────────────────

/// Table row shared by most list commands.
#[derive(Tabled)]
pub struct EntityRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Type")]
    pub kind: String,
    #[tabled(rename = "Name")]
    pub name: String,
}

impl EntityRow {
    pub fn new(id: &str, kind: &str, name: impl Into<String>) -> Self {
        Self {
            id: id.to_owned(),
            kind: kind.to_owned(),
            name: name.into(),
        }
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render one page (or several merged pages) of entities.
pub fn render_page<T, R>(
    format: OutputFormat,
    page: &Page<T>,
    to_row: impl Fn(&T) -> R,
) -> Result<String, CliError>
where
    T: Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = page.data.iter().map(to_row).collect();
            Ok(render_table(&rows))
        }
        OutputFormat::Text => {
            let mut blocks = Vec::with_capacity(page.data.len());
            for item in &page.data {
                blocks.push(render_text(item)?);
            }
            Ok(blocks.join("\n"))
        }
        OutputFormat::Json => render_json(page, false),
        OutputFormat::JsonCompact => render_json(page, true),
        OutputFormat::Yaml => render_yaml(page),
    }
}

/// Render a single entity or document. Table mode falls back to the
/// key/value tree.
pub fn render_single<T: Serialize>(format: OutputFormat, data: &T) -> Result<String, CliError> {
    match format {
        OutputFormat::Table | OutputFormat::Text => render_text(data),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

/// Tell the user how to fetch the next page.
pub fn print_cursor_hint(cursor: Option<String>, quiet: bool) {
    if quiet {
        return;
    }
    if let Some(cursor) = cursor {
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "More results: --cursor {cursor} (or --all)");
    }
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn render_json<T: Serialize + ?Sized>(data: &T, compact: bool) -> Result<String, CliError> {
    let result = if compact {
        serde_json::to_string(data)
    } else {
        serde_json::to_string_pretty(data)
    };
    result.map_err(|e| CliError::Output {
        message: e.to_string(),
    })
}

fn render_yaml<T: Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    serde_yaml::to_string(data).map_err(|e| CliError::Output {
        message: e.to_string(),
    })
}

/// Indented `key: value` tree. Nulls and empty containers are skipped.
pub(crate) fn render_text<T: Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    let value = serde_json::to_value(data).map_err(|e| CliError::Output {
        message: e.to_string(),
    })?;
    let mut out = String::new();
    match &value {
        Value::Object(_) | Value::Array(_) => write_tree(&mut out, &value, 0),
        scalar => out.push_str(&scalar_text(scalar)),
    }
    Ok(out.trim_end().to_owned())
}

fn write_tree(out: &mut String, value: &Value, depth: usize) {
    let pad = "  ".repeat(depth);
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                if is_blank(child) {
                    continue;
                }
                if is_leaf(child) {
                    let _ = writeln!(out, "{pad}{key}: {}", scalar_text(child));
                } else {
                    let _ = writeln!(out, "{pad}{key}:");
                    write_tree(out, child, depth + 1);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                if is_leaf(item) {
                    let _ = writeln!(out, "{pad}- {}", scalar_text(item));
                } else {
                    let _ = writeln!(out, "{pad}-");
                    write_tree(out, item, depth + 1);
                }
            }
        }
        scalar => {
            let _ = writeln!(out, "{pad}{}", scalar_text(scalar));
        }
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.values().all(is_blank),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Scalars and arrays of scalars print on one line.
fn is_leaf(value: &Value) -> bool {
    match value {
        Value::Object(_) => false,
        Value::Array(items) => items.iter().all(|v| !v.is_object() && !v.is_array()),
        _ => true,
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(scalar_text).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn text_tree_skips_nulls_and_nests_objects() {
        let value = json!({
            "id": "o:acme",
            "attributes": { "name": "Acme", "logo_url": null, "tags": ["a", "b"] },
            "links": { "self": null }
        });
        let text = render_text(&value).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines.contains(&"id: o:acme"));
        assert!(lines.contains(&"attributes:"));
        assert!(lines.contains(&"  name: Acme"));
        assert!(lines.contains(&"  tags: a, b"));
        assert!(!text.contains("logo_url"));
        assert!(!text.contains("links"));
    }

    #[test]
    fn table_renders_rows() {
        let page: Page<Value> = serde_json::from_value(json!({
            "data": [{ "id": "o:acme", "type": "organizations" }],
            "links": {}
        }))
        .unwrap();
        let out = render_page(OutputFormat::Table, &page, |v| {
            EntityRow::new(v["id"].as_str().unwrap_or_default(), "organizations", "Acme")
        })
        .unwrap();
        assert!(out.contains("o:acme"));
        assert!(out.contains("Name"));
    }

    #[test]
    fn json_keeps_page_links() {
        let page: Page<Value> = serde_json::from_value(json!({
            "data": [],
            "links": { "next": "https://x/projects?page[cursor]=abc" }
        }))
        .unwrap();
        let out = render_page(OutputFormat::JsonCompact, &page, |_| {
            EntityRow::new("", "", "")
        })
        .unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["links"]["next"], "https://x/projects?page[cursor]=abc");
    }
}
