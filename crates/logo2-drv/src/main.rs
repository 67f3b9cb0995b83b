//! Logo2 CLI - parse and run a script, then drop into the REPL.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Logo2 - a turtle-graphics scripting language
#[derive(Parser, Debug)]
#[command(name = "logo2")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interpreter for the Logo2 scripting language", long_about = None)]
struct Cli {
    /// Script file to run before the REPL starts
    script: Option<PathBuf>,

    /// Dump the token stream of each input
    #[arg(long)]
    emit_tokens: bool,

    /// Dump the AST of each input
    #[arg(long)]
    emit_ast: bool,

    /// Do not start the REPL after running the script
    #[arg(long)]
    no_repl: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let options = logo2_drv::Options {
        emit_tokens: cli.emit_tokens,
        emit_ast: cli.emit_ast,
    };
    match logo2_drv::run(cli.script.as_deref(), cli.no_repl, options) {
        Ok(code) => ExitCode::from(code.clamp(0, 255) as u8),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
