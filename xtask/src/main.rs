#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::disallowed_methods,
    clippy::disallowed_types
)]

pub mod handlers;
pub mod models;
pub mod services;

use crate::handlers::codegen;
use crate::models::args::{AppCommands, Cli, CodegenAction};

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        AppCommands::Codegen { action } => match action {
            CodegenAction::Protos {} => codegen::codegen_protos()?,
            CodegenAction::PythonProtos {} => codegen::codegen_python_protos()?,
            CodegenAction::GoProtos {} => codegen::codegen_go_protos()?,
        },
    }

    Ok(())
}
