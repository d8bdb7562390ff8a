//! Import rewriting for generated Python artifacts.
//!
//! protoc emits cross-references in the flat `fmesh.<group>` namespace, but
//! the SDK ships the bindings under `fmesh.protos.fmesh.<group>`. Rewriting
//! is whole-content textual substitution; the replacement text no longer
//! matches the search pattern, so a second pass over the same tree is a no-op.

use crate::models::error::CodegenError;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// One search/replace pair, derived from a subdomain group name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRule {
    search: String,
    replace: String,
}

impl RewriteRule {
    fn for_group(group: &str) -> Self {
        Self {
            search: format!("from fmesh.{group}"),
            replace: format!("from fmesh.protos.fmesh.{group}"),
        }
    }
}

/// Builds one rule per group, in the given order. Each pattern is specific to
/// its group name, so application order does not change the result.
#[must_use]
pub fn rewrite_rules(groups: &[&str]) -> Vec<RewriteRule> {
    groups.iter().map(|group| RewriteRule::for_group(group)).collect()
}

/// Applies every rule to `content`.
///
/// Returns `None` when no rule matched, so callers can skip the write and
/// leave the file's timestamp alone.
#[must_use]
pub fn apply_rules(content: &str, rules: &[RewriteRule]) -> Option<String> {
    let mut rewritten = content.to_owned();
    for rule in rules {
        if rewritten.contains(&rule.search) {
            rewritten = rewritten.replace(&rule.search, &rule.replace);
        }
    }

    (rewritten != content).then_some(rewritten)
}

/// Rewrites every generated file under `out_root` in place, returning how
/// many files actually changed.
///
/// # Errors
/// Returns [`CodegenError::Rewrite`] for the first artifact that cannot be
/// walked, read, or written back.
pub fn rewrite_tree(out_root: &Path, rules: &[RewriteRule]) -> Result<usize, CodegenError> {
    let mut rewritten = 0;

    for entry in WalkDir::new(out_root) {
        let entry = entry.map_err(|err| {
            let path = err.path().map_or_else(|| out_root.to_path_buf(), Path::to_path_buf);
            CodegenError::Rewrite {
                path,
                source: err.into_io_error().unwrap_or_else(|| std::io::Error::other("walk cycle")),
            }
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let content = fs::read_to_string(path)
            .map_err(|source| CodegenError::Rewrite { path: path.to_path_buf(), source })?;

        if let Some(updated) = apply_rules(&content, rules) {
            fs::write(path, updated)
                .map_err(|source| CodegenError::Rewrite { path: path.to_path_buf(), source })?;
            rewritten += 1;
        }
    }

    Ok(rewritten)
}
