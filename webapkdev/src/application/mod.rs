pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use clap::Parser;
use webapk_core::error::Result;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            project,
            build_delay_ms,
            sign_delay_ms,
        } => handlers::handle_generate(project, build_delay_ms, sign_delay_ms),
        Commands::Scaffold { project } => handlers::handle_scaffold(project),
        Commands::List { apk } => handlers::handle_list(apk),
        Commands::Verify { project } => handlers::handle_verify(project),
    }
}
