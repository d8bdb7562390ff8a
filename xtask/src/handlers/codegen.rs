//! Proto codegen pipeline: discovery, per-target compiler invocation, and the
//! Python import rewrite pass.
//!
//! The pipeline is fully sequential. Groups run in the fixed subdomain order
//! within a target, and targets run one after another; the rewrite pass needs
//! the Python tree to be complete, and concurrent protoc runs over the same
//! include path can interleave partial writes.

use crate::models::error::CodegenError;
use crate::models::target::{
    PROTO_DIR, PROTO_SUBDIRS, TargetBinding, TargetKind, target_bindings,
};
use crate::services::discovery::{SchemaGroup, discover_schemas};
use crate::services::protoc::{CompilerInvoker, GrpcToolsProtoc};
use crate::services::rewrite::{rewrite_rules, rewrite_tree};
use crate::services::utils::get_project_root;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

// --- Public API ---

/// Builds protobuf bindings for every target, Python SDK first.
///
/// # Errors
/// Returns an error if discovery, any compiler invocation, or the import
/// rewrite pass fails. The first failure aborts the run; artifacts already
/// written stay on disk and the whole run is repeated from a clean state.
pub fn codegen_protos() -> Result<()> {
    run_codegen(None)
}

/// Builds only the Python SDK bindings (messages, gRPC stubs, mypy stubs).
///
/// # Errors
/// Same failure modes as [`codegen_protos`], limited to the Python target.
pub fn codegen_python_protos() -> Result<()> {
    run_codegen(Some(TargetKind::Python))
}

/// Builds only the Go bindings.
///
/// # Errors
/// Same failure modes as [`codegen_protos`], limited to the Go target.
pub fn codegen_go_protos() -> Result<()> {
    run_codegen(Some(TargetKind::Go))
}

// --- Pipeline ---

fn run_codegen(only: Option<TargetKind>) -> Result<()> {
    let project_root = get_project_root()?;
    let invoker = GrpcToolsProtoc;

    let proto_root = project_root.join(PROTO_DIR);
    let groups = discover_schemas(&proto_root, &PROTO_SUBDIRS)?;
    let populated = groups.iter().filter(|group| !group.files.is_empty()).count();

    for binding in target_bindings() {
        if only.is_some_and(|kind| kind != binding.kind) {
            continue;
        }

        let out_root = project_root.join(binding.out_dir);
        if binding.create_out_dir {
            fs::create_dir_all(&out_root).with_context(|| {
                format!("Failed to create output directory {}", out_root.display())
            })?;
        }

        generate_target(&binding, &proto_root, &out_root, &groups, &invoker)?;
        println!("✅ Generated {} bindings for {populated} schema groups.", binding.name);

        if binding.rewrite_imports {
            let rules = rewrite_rules(&PROTO_SUBDIRS);
            let rewritten = rewrite_tree(&out_root, &rules)?;
            println!("🔧 Rewrote imports in {rewritten} files under {}", out_root.display());
        }
    }

    Ok(())
}

/// Invokes the compiler once per non-empty group, in fixed order, aborting on
/// the first failure. Partial artifacts from a failed invocation are left
/// as-is; there is no rollback.
fn generate_target(
    binding: &TargetBinding,
    proto_root: &Path,
    out_root: &Path,
    groups: &[SchemaGroup],
    invoker: &impl CompilerInvoker,
) -> Result<(), CodegenError> {
    for group in groups {
        if group.files.is_empty() {
            continue;
        }

        let command = binding.command(proto_root, out_root, &group.files);
        let output = match invoker.invoke(&command) {
            Ok(output) => output,
            Err(err) => {
                return Err(CodegenError::Compilation {
                    target: binding.name,
                    group: group.name,
                    status: None,
                    stderr: err.to_string(),
                });
            },
        };

        if !output.success() {
            return Err(CodegenError::Compilation {
                target: binding.name,
                group: group.name,
                status: output.status,
                stderr: output.stderr,
            });
        }
    }

    Ok(())
}
