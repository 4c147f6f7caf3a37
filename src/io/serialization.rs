// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Session export.
//!
//! Writes the current image and its recorded points as YAML or JSON.

use crate::models::session::Session;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Export a session to YAML format.
pub fn export_yaml(session: &Session, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(session)?;
    std::fs::write(path, yaml).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Export a session to JSON format.
pub fn export_json(session: &Session, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(session)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Export a session, choosing the format from the file extension.
pub fn export(session: &Session, path: &Path) -> Result<()> {
    let extension = path.extension().and_then(|s| s.to_str());
    match extension {
        Some("yaml") | Some("yml") => export_yaml(session, path),
        Some("json") => export_json(session, path),
        _ => bail!("Unsupported file extension: {:?}", extension),
    }
}
