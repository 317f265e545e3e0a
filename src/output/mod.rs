//! Output formatting module
//!
//! Renders the context list as a table, JSON, YAML or bare names.

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::context::Kubeconfig;
use crate::error::Result;

/// Flattened context data for output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextRow {
    pub current: bool,
    pub name: String,
    pub cluster: String,
    pub server: String,
    pub namespace: String,
}

/// Build rows for every context, sorted by name
pub fn context_rows(config: &Kubeconfig) -> Vec<ContextRow> {
    let mut rows: Vec<ContextRow> = config
        .contexts
        .iter()
        .map(|named| ContextRow {
            current: named.name == config.current_context(),
            name: named.name.clone(),
            cluster: named.context.cluster.clone(),
            server: config
                .cluster(&named.context.cluster)
                .map(|c| c.server.clone())
                .unwrap_or_default(),
            namespace: named.context.namespace.clone(),
        })
        .collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name));
    rows
}

/// Render rows in the requested format
pub fn format_contexts(rows: &[ContextRow], format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Table => format_table(rows),
        OutputFormat::Json => serde_json::to_string_pretty(rows)?,
        OutputFormat::Yaml => serde_yml::to_string(rows)?,
        OutputFormat::Name => rows
            .iter()
            .map(|r| r.name.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(rendered)
}

/// Print the context list
pub fn output_contexts(config: &Kubeconfig, format: OutputFormat) -> Result<()> {
    let rows = context_rows(config);
    let rendered = format_contexts(&rows, format)?;
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
    Ok(())
}

fn format_table(rows: &[ContextRow]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("CURRENT"),
            Cell::new("NAME"),
            Cell::new("CLUSTER"),
            Cell::new("SERVER"),
            Cell::new("NAMESPACE"),
        ]);

    for row in rows {
        let current_marker = if row.current { "*" } else { "" };
        let server = if row.server.is_empty() {
            "<unknown>"
        } else {
            row.server.as_str()
        };
        let namespace = if row.namespace.is_empty() {
            "<not set>"
        } else {
            row.namespace.as_str()
        };

        table.add_row(vec![
            Cell::new(current_marker),
            Cell::new(&row.name),
            Cell::new(&row.cluster),
            Cell::new(server),
            Cell::new(namespace),
        ]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::NewContext;

    fn sample_config() -> Kubeconfig {
        let mut config = Kubeconfig::empty();
        for (name, server) in [
            ("prod", "https://prod.example.com:6443"),
            ("dev", "https://10.0.0.1:6443"),
        ] {
            config
                .add_context(NewContext {
                    name: name.to_string(),
                    server: server.to_string(),
                    ..Default::default()
                })
                .unwrap();
        }
        config.switch_context("prod").unwrap();
        config.set_namespace("dev", "web").unwrap();
        config
    }

    #[test]
    fn test_rows_sorted_with_current_marker() {
        let rows = context_rows(&sample_config());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "dev");
        assert!(!rows[0].current);
        assert_eq!(rows[0].namespace, "web");
        assert_eq!(rows[1].name, "prod");
        assert!(rows[1].current);
        assert_eq!(rows[1].server, "https://prod.example.com:6443");
    }

    #[test]
    fn test_row_with_missing_cluster_has_empty_server() {
        let mut config = sample_config();
        config.clusters.clear();
        let rows = context_rows(&config);
        assert!(rows.iter().all(|r| r.server.is_empty()));
        let table = format_contexts(&rows, OutputFormat::Table).unwrap();
        assert!(table.contains("<unknown>"));
    }

    #[test]
    fn test_table_format() {
        let rows = context_rows(&sample_config());
        let table = format_contexts(&rows, OutputFormat::Table).unwrap();
        assert!(table.contains("CURRENT"));
        assert!(table.contains("NAMESPACE"));
        assert!(table.contains("prod"));
        assert!(table.contains("<not set>"));
        assert!(table.contains('*'));
    }

    #[test]
    fn test_json_format() {
        let rows = context_rows(&sample_config());
        let json = format_contexts(&rows, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert_eq!(parsed[1]["name"], "prod");
        assert_eq!(parsed[1]["current"], true);
    }

    #[test]
    fn test_yaml_format() {
        let rows = context_rows(&sample_config());
        let yaml = format_contexts(&rows, OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("name: dev"));
        assert!(yaml.contains("namespace: web"));
    }

    #[test]
    fn test_name_format() {
        let rows = context_rows(&sample_config());
        assert_eq!(format_contexts(&rows, OutputFormat::Name).unwrap(), "dev\nprod");
    }

    #[test]
    fn test_output_contexts_reports_success() {
        let config = sample_config();
        for format in [
            OutputFormat::Table,
            OutputFormat::Json,
            OutputFormat::Yaml,
            OutputFormat::Name,
        ] {
            assert!(output_contexts(&config, format).is_ok());
        }
    }
}
