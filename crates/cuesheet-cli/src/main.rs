use crate::actions::{print_info, print_json, print_timeline, validate, write_cue};
use crate::commands::{Cli, Commands};
use anyhow::Result;
use clap::Parser;

mod actions;
mod commands;
mod error;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Info(cmd) => print_info(&cmd.input).await?,
        Commands::Json(cmd) => print_json(&cmd.input).await?,
        Commands::Cue(cmd) => write_cue(&cmd).await?,
        Commands::Timeline(cmd) => print_timeline(&cmd.input).await?,
        Commands::Validate(cmd) => validate(&cmd.input).await?,
    }

    Ok(())
}
