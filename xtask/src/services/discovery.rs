//! Schema discovery: enumerates proto files per subdomain group.

use crate::models::error::CodegenError;
use crate::models::target::PROTO_PACKAGE;
use std::fs;
use std::path::{Path, PathBuf};

/// One subdomain group's discovered schema files, sorted for reproducible
/// builds. An empty file set is legal; the dispatcher skips such groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaGroup {
    pub name: &'static str,
    pub files: Vec<PathBuf>,
}

/// Discovers schema files for each group under `<proto_root>/fmesh/<group>/`.
///
/// Groups come back in the order given; files within a group are sorted by
/// path, so two runs against an unchanged tree yield identical results.
///
/// # Errors
/// Returns [`CodegenError::Discovery`] when the schema root itself is missing
/// or unreadable. A missing group subdirectory is not an error.
pub fn discover_schemas(
    proto_root: &Path,
    groups: &[&'static str],
) -> Result<Vec<SchemaGroup>, CodegenError> {
    // Probe the root eagerly so a bad root fails before any compiler runs.
    fs::read_dir(proto_root).map_err(|source| CodegenError::Discovery {
        root: proto_root.to_path_buf(),
        source,
    })?;

    let mut discovered = Vec::with_capacity(groups.len());
    for &group in groups {
        let group_dir = proto_root.join(PROTO_PACKAGE).join(group);
        discovered.push(SchemaGroup { name: group, files: read_proto_files(&group_dir) });
    }

    Ok(discovered)
}

fn read_proto_files(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "proto"))
        .collect();
    files.sort();
    files
}
