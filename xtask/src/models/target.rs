//! Static registry of binding targets.
//!
//! One [`TargetBinding`] per supported ecosystem, constructed once at process
//! start and never mutated. The table also fixes the generation order.

use std::path::{Path, PathBuf};

/// Fixed, ordered list of schema subdomains. Groups are generated and
/// import-rewritten in this order.
pub const PROTO_SUBDIRS: [&str; 4] = ["core", "serving", "types", "storage"];

/// Protobuf package root; schema files live at `protos/fmesh/<group>/`.
pub const PROTO_PACKAGE: &str = "fmesh";

/// Workspace-relative root of the schema tree.
pub const PROTO_DIR: &str = "protos";

/// The supported output ecosystems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Python,
    Go,
}

/// A fully assembled compiler invocation: program plus arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerCommand {
    pub program: String,
    pub args: Vec<String>,
}

/// One binding target: where its artifacts go and how protoc is invoked.
#[derive(Debug)]
pub struct TargetBinding {
    pub kind: TargetKind,
    pub name: &'static str,
    /// Output flags, each paired with the output root when the command is
    /// assembled (e.g. `--python_out <out>`).
    pub out_flags: &'static [&'static str],
    /// Workspace-relative output root.
    pub out_dir: &'static str,
    /// Go's output root is created on demand; Python's belongs to the SDK
    /// package layout and must already exist.
    pub create_out_dir: bool,
    /// Whether generated artifacts are import-rewritten after this target.
    pub rewrite_imports: bool,
}

/// The static two-target table, in generation order. Python runs first so the
/// rewrite pass sees a complete output tree before the Go pass starts.
#[must_use]
pub const fn target_bindings() -> [TargetBinding; 2] {
    [
        TargetBinding {
            kind: TargetKind::Python,
            name: "python",
            out_flags: &["--python_out", "--grpc_python_out", "--mypy_out"],
            out_dir: "sdk/python/fmesh/protos",
            create_out_dir: false,
            rewrite_imports: true,
        },
        TargetBinding {
            kind: TargetKind::Go,
            name: "go",
            out_flags: &["--go_out"],
            out_dir: "go/protos",
            create_out_dir: true,
            rewrite_imports: false,
        },
    ]
}

impl TargetBinding {
    /// Assembles the protoc invocation for one group's schema files.
    #[must_use]
    pub fn command(&self, proto_root: &Path, out_root: &Path, files: &[PathBuf]) -> CompilerCommand {
        let mut args = vec!["-m".to_owned(), "grpc_tools.protoc".to_owned()];
        args.push("-I".to_owned());
        args.push(proto_root.display().to_string());
        for flag in self.out_flags {
            args.push((*flag).to_owned());
            args.push(out_root.display().to_string());
        }
        args.extend(files.iter().map(|file| file.display().to_string()));

        CompilerCommand { program: "python".to_owned(), args }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn python_runs_before_go() {
        let [first, second] = target_bindings();
        assert_eq!(first.kind, TargetKind::Python);
        assert_eq!(second.kind, TargetKind::Go);
        assert!(first.rewrite_imports);
        assert!(!second.rewrite_imports);
    }

    #[test]
    fn python_command_carries_all_stub_outputs() {
        let [python, _] = target_bindings();
        let files = vec![PathBuf::from("protos/fmesh/core/registry.proto")];
        let command = python.command(Path::new("protos"), Path::new("sdk/python/fmesh/protos"), &files);

        assert_eq!(command.program, "python");
        assert_eq!(command.args[0], "-m");
        assert_eq!(command.args[1], "grpc_tools.protoc");
        assert_eq!(command.args[2], "-I");
        assert_eq!(command.args[3], "protos");
        for flag in ["--python_out", "--grpc_python_out", "--mypy_out"] {
            let pos = command.args.iter().position(|a| a == flag).expect(flag);
            assert_eq!(command.args[pos + 1], "sdk/python/fmesh/protos");
        }
        assert_eq!(command.args.last().map(String::as_str), Some("protos/fmesh/core/registry.proto"));
    }

    #[test]
    fn go_command_is_single_pass() {
        let [_, go] = target_bindings();
        let files = vec![PathBuf::from("protos/fmesh/types/value.proto")];
        let command = go.command(Path::new("protos"), Path::new("go/protos"), &files);

        assert_eq!(command.args.iter().filter(|a| a.ends_with("_out")).count(), 1);
        assert!(command.args.contains(&"--go_out".to_owned()));
    }
}
