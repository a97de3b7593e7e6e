use crate::prelude::*;
use clap::Parser;

mod error;
mod forms;
mod http;
mod keepalive;
mod logging;
mod prelude;
mod release;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Release and Standard Forms lookups for the Pat release automation. \
                  Each command prints a single JSON record on stdout."
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Enable debug logging (honours RUST_LOG)
    #[clap(long, env = "PATWATCH_DEBUG", global = true, default_value = "false")]
    debug: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Print the latest GitHub release of a repository
    Release(crate::release::ReleaseOptions),

    /// Download, validate and save the latest Winlink Standard Forms archive
    Forms(crate::forms::FormsOptions),

    /// Print this month's keep-alive token
    Keepalive,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = App::parse();
    crate::logging::init_logging(app.global.debug);

    match app.command {
        SubCommands::Release(options) => crate::release::run(options, app.global).await,
        SubCommands::Forms(options) => crate::forms::run(options, app.global).await,
        SubCommands::Keepalive => crate::keepalive::run(app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
