//! Planline CLI Application
//!
//! Command-line interface for the planline timeline planner.

mod args;
mod cli;
mod handlers;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use handlers::Cli;
use log::info;
use planline_core::store;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        plan_file,
        no_color,
        command,
    } = Args::parse();

    let plan_file = match plan_file {
        Some(path) => path,
        None => store::default_plan_path().context("Failed to locate the default plan file")?,
    };

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(plan_file, renderer);

    info!("Planline started");

    match command {
        Some(Init(args)) => cli.init(args).await,
        Some(Show) | None => cli.show().await,
        Some(Config(args)) => cli.config(args).await,
        Some(Resource { command }) => cli.handle_resource_command(command).await,
        Some(Task { command }) => cli.handle_task_command(command).await,
        Some(Milestone { command }) => cli.handle_milestone_command(command).await,
        Some(Vline { command }) => cli.handle_vertical_line_command(command).await,
        Some(Load(args)) => cli.load(&args).await,
        Some(Render(args)) => cli.render(args).await,
        Some(Export(args)) => cli.export(args).await,
    }
}
