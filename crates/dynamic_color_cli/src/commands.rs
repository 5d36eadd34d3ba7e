//! Command implementations

use std::path::Path;

use anyhow::{bail, Context, Result};
use dynamic_color::{Brightness, Dispatcher, MethodCall, ResourceId, ResourceTable};

/// Load the resource table, or an unavailable one when no path is given
pub fn load_table(path: Option<&Path>) -> Result<ResourceTable> {
    match path {
        Some(path) => ResourceTable::load(path)
            .with_context(|| format!("Failed to load resource table {}", path.display())),
        None => {
            tracing::debug!("no resource table given, dynamic color unavailable");
            Ok(ResourceTable::unavailable())
        }
    }
}

/// Dispatch one call and render the result as pretty JSON
pub fn call(
    table: ResourceTable,
    method: &str,
    brightness: Option<&str>,
    envelope: bool,
) -> Result<String> {
    let mut call = MethodCall::new(method);
    if let Some(brightness) = brightness {
        call = call.with_argument("brightness", brightness);
    }

    let dispatcher = Dispatcher::new(table);
    let response = dispatcher.handle(&call);

    if envelope {
        return serde_json::to_string_pretty(&response).context("Failed to serialize response");
    }

    let Some(result) = response.result_json() else {
        bail!("Method not implemented: {}", method);
    };
    serde_json::to_string_pretty(&result).context("Failed to serialize result")
}

/// Resource names grouped by the table that requests them
pub fn resources(table: &ResourceTable, missing_only: bool) -> Vec<String> {
    let missing = table.missing();
    let groups = [
        ("palette", ResourceId::palette()),
        ("light", ResourceId::base_roles(Brightness::Light)),
        ("dark", ResourceId::base_roles(Brightness::Dark)),
        ("fixed", ResourceId::fixed_roles()),
    ];

    let mut lines = Vec::new();
    for (group, ids) in groups {
        let mut seen = Vec::new();
        let names: Vec<String> = ids
            .into_iter()
            .filter(|id| !missing_only || missing.contains(id))
            .filter(|id| {
                if seen.contains(id) {
                    false
                } else {
                    seen.push(*id);
                    true
                }
            })
            .map(|id| id.to_string())
            .collect();
        if names.is_empty() {
            continue;
        }
        lines.push(format!("# {}", group));
        lines.extend(names);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynamic_color::ColorValue;

    fn full_table() -> ResourceTable {
        let mut table = ResourceTable::new();
        for id in ResourceId::all() {
            table.insert(id, ColorValue::BLACK);
        }
        table
    }

    #[test]
    fn test_call_without_table_prints_null() {
        let output = call(ResourceTable::unavailable(), "getCorePalette", None, false).unwrap();
        assert_eq!(output, "null");
    }

    #[test]
    fn test_call_unknown_method_fails() {
        let err = call(full_table(), "getAccentColor", None, false).unwrap_err();
        assert!(err.to_string().contains("getAccentColor"));
    }

    #[test]
    fn test_call_envelope() {
        let output = call(full_table(), "getAccentColor", None, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["status"], "notImplemented");
    }

    #[test]
    fn test_call_system_colors() {
        let output = call(full_table(), "getSystemColors", Some("dark"), false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 49);
        assert_eq!(value["primary"], -16777216);
    }

    #[test]
    fn test_resources_groups() {
        let lines = resources(&ResourceTable::new(), false);
        assert_eq!(lines[0], "# palette");
        assert_eq!(lines[1], "system_accent1_1000");
        assert!(lines.contains(&"# fixed".to_string()));
        // shadow and scrim share one resource, listed once per group
        let light_start = lines.iter().position(|l| l == "# light").unwrap();
        let dark_start = lines.iter().position(|l| l == "# dark").unwrap();
        let neutral = lines[light_start..dark_start]
            .iter()
            .filter(|l| *l == "system_neutral1_1000")
            .count();
        assert_eq!(neutral, 1);
    }

    #[test]
    fn test_resources_missing_only() {
        let mut table = full_table();
        table.remove(&ResourceId::Named("system_tertiary_fixed"));
        assert_eq!(
            resources(&table, true),
            vec!["# fixed".to_string(), "system_tertiary_fixed".to_string()]
        );
    }

    #[test]
    fn test_load_without_path_is_unavailable() {
        use dynamic_color::AvailabilityCheck;
        let table = load_table(None).unwrap();
        assert!(!table.is_dynamic_color_available());
    }

    #[test]
    fn test_load_table_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.toml");
        std::fs::write(&path, "[colors]\nsystem_accent1_0 = \"#FF000000\"\n").unwrap();

        let table = load_table(Some(&path)).unwrap();
        assert_eq!(table.len(), 1);
        assert!(!resources(&table, true).contains(&"system_accent1_0".to_string()));
    }

    #[test]
    fn test_load_nonexistent_table_fails_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = load_table(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to load resource table"));
        assert!(err.to_string().contains("missing.toml"));
    }
}
