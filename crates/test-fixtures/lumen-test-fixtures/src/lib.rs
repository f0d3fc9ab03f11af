use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    configs: HashMap<String, String>,
    submissions: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let raw = read_to_string(rel)?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse fixture {rel}"))
}

/// Raw JSON for a named engine config fixture.
pub fn config_json(name: &str) -> Result<String> {
    let rel = MANIFEST
        .configs
        .get(name)
        .ok_or_else(|| anyhow!("unknown config fixture {name}"))?;
    read_to_string(rel)
}

/// Field pairs for a named submission fixture, in form order.
pub fn submission(name: &str) -> Result<Vec<(String, String)>> {
    let rel = MANIFEST
        .submissions
        .get(name)
        .ok_or_else(|| anyhow!("unknown submission fixture {name}"))?;
    load_json(rel)
}

/// Names of every config fixture in the manifest.
pub fn config_names() -> Vec<String> {
    MANIFEST.configs.keys().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_entries_resolve() {
        for name in config_names() {
            assert!(config_json(&name).is_ok(), "config fixture {name}");
        }
        assert!(submission("contact-basic").is_ok());
    }
}
