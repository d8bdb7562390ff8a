//! # CLI Argument Definitions
//!
//! This module defines the command-line interface (CLI) structure using the `clap` crate.
//! It specifies the available subcommands, arguments, and flags for the application.

use clap::{Parser, Subcommand};

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "cargo xtask")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Developer toolkit for the FeatureMesh workspace")]
pub struct Cli {
    /// The main subcommand to execute.
    #[command(subcommand)]
    pub command: AppCommands,
}

/// Enumeration of available application subcommands.
#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Generate code artifacts
    #[command(alias = "protos")]
    Codegen {
        #[command(subcommand)]
        action: CodegenAction,
    },
}

/// Enumeration of codegen commands.
#[derive(Debug, Subcommand)]
pub enum CodegenAction {
    /// Build protobuf bindings for every target (Python SDK first, then Go)
    Protos {},
    /// Build only the Python SDK bindings (messages, gRPC stubs, mypy stubs)
    PythonProtos {},
    /// Build only the Go bindings
    GoProtos {},
}
