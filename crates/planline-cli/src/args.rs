use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    ConfigArgs, ExportArgs, InitArgs, LoadArgs, MilestoneCommands, RenderArgs, ResourceCommands,
    TaskCommands, VerticalLineCommands,
};

/// Week-based timeline planner
///
/// Planline keeps one plan per file: resources, task bars, milestones and
/// vertical date lines on a week-indexed timeline with stacked lanes. Edit
/// it with the subcommands below and render it as SVG.
#[derive(Parser)]
#[command(version, about, name = "planline")]
pub struct Args {
    /// Path to the plan file. Defaults to $XDG_DATA_HOME/planline/plan.json
    #[arg(long, global = true)]
    pub plan_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the planline CLI
///
/// Without a command the current plan is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Create a fresh plan file
    Init(InitArgs),
    /// Show the current plan
    #[command(alias = "s")]
    Show,
    /// Change the plan name, start date, weeks or lines
    #[command(alias = "c")]
    Config(ConfigArgs),
    /// Manage resources
    #[command(alias = "r")]
    Resource {
        #[command(subcommand)]
        command: ResourceCommands,
    },
    /// Manage tasks
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Manage milestones
    #[command(alias = "m")]
    Milestone {
        #[command(subcommand)]
        command: MilestoneCommands,
    },
    /// Manage vertical lines
    #[command(alias = "v")]
    Vline {
        #[command(subcommand)]
        command: VerticalLineCommands,
    },
    /// Merge a saved plan document into the current plan
    Load(LoadArgs),
    /// Render the timeline as SVG (or the laid-out scene as JSON)
    Render(RenderArgs),
    /// Write a dated JSON or SVG copy of the plan
    Export(ExportArgs),
}
