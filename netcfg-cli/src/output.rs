//! Output formatting for parsed configs.

use std::fmt::Write;

use anyhow::Result;
use serde::Serialize;

use netcfg_core::{ArchitectureDocument, FlatConfig, Value};

use crate::Format;

pub fn render_architecture(doc: &ArchitectureDocument, format: Format) -> Result<String> {
    match format {
        Format::Summary => Ok(architecture_summary(doc)),
        Format::Json => to_json(doc),
        Format::Yaml => Ok(serde_yaml::to_string(doc)?),
    }
}

pub fn render_flat(cfg: &FlatConfig, format: Format) -> Result<String> {
    match format {
        Format::Summary => {
            let width = cfg.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
            let mut out = String::new();
            for (key, value) in cfg.iter() {
                writeln!(out, "{:<width$} = {}", key, value, width = width)?;
            }
            Ok(out)
        }
        Format::Json => to_json(cfg),
        Format::Yaml => Ok(serde_yaml::to_string(cfg)?),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

/// One line per module: index, kind, then its attributes.
fn architecture_summary(doc: &ArchitectureDocument) -> String {
    let mut out = String::new();
    for (i, module) in doc.iter().enumerate() {
        let attrs: Vec<String> = module
            .attrs()
            .skip(1)
            .map(|(k, v)| format!("{}={}", k, short_value(v)))
            .collect();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{:>4}  {:<15} {}", i, module.kind(), attrs.join(" "));
    }
    let layers = doc.layers().len();
    let _ = writeln!(
        out,
        "{} modules ({} layers{})",
        doc.len(),
        layers,
        if doc.hyperparameters().is_some() { ", net" } else { "" }
    );
    out
}

fn short_value(value: &Value) -> String {
    match value {
        Value::Text(s) => s.clone(),
        Value::Integer(i) => i.to_string(),
        Value::Anchors(pairs) => format!("<{} anchors>", pairs.len()),
    }
}
