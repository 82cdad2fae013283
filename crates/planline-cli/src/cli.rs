//! Command-line argument wrappers using clap
//!
//! Each command's arguments live in a clap `Args` struct that converts into
//! the matching `planline_core::params` or update patch type, keeping clap
//! out of the core crate:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use jiff::civil::Date;
use planline_core::{
    params::{ConfigurePlan, CreateMilestone, CreateResource, CreateTask, CreateVerticalLine},
    Color, Locale, MilestoneKind, MilestoneUpdate, ResourceUpdate, TaskUpdate, VerticalLineUpdate,
};

/// Create a fresh plan file
///
/// Starts a plan with 12 weeks, 5 lanes and three resources unless told
/// otherwise. An existing plan file is only replaced with --force.
#[derive(Args)]
pub struct InitArgs {
    #[arg(short, long, help = "Name of the plan")]
    pub name: Option<String>,
    #[arg(short, long, help = "First day of the timeline (YYYY-MM-DD), defaults to today")]
    pub start_date: Option<Date>,
    #[arg(short, long, help = "Number of weeks on the timeline")]
    pub weeks: Option<u32>,
    #[arg(short, long, help = "Number of lanes")]
    pub lines: Option<u32>,
    #[arg(long, help = "Start without the three default resources")]
    pub empty: bool,
    #[arg(long, help = "Replace an existing plan file")]
    pub force: bool,
}

/// Change the timeline configuration
///
/// Only the given options change. Weeks and lines must be at least 1; if any
/// value is invalid nothing is changed.
#[derive(Args)]
pub struct ConfigArgs {
    #[arg(short, long, help = "New plan name")]
    pub name: Option<String>,
    #[arg(short, long, help = "New first day of the timeline (YYYY-MM-DD)")]
    pub start_date: Option<Date>,
    #[arg(short, long, help = "New number of weeks")]
    pub weeks: Option<u32>,
    #[arg(short, long, help = "New number of lanes")]
    pub lines: Option<u32>,
}

impl From<ConfigArgs> for ConfigurePlan {
    fn from(val: ConfigArgs) -> Self {
        ConfigurePlan {
            name: val.name,
            start_date: val.start_date,
            num_weeks: val.weeks,
            num_lines: val.lines,
        }
    }
}

/// Add a resource (at most 5 per plan)
#[derive(Args)]
pub struct AddResourceArgs {
    #[arg(help = "Name shown in the legend")]
    pub name: Option<String>,
    #[arg(short, long, help = "Color as #rrggbb, defaults to #cccccc")]
    pub color: Option<Color>,
}

impl From<AddResourceArgs> for CreateResource {
    fn from(val: AddResourceArgs) -> Self {
        CreateResource {
            name: val.name,
            color: val.color,
        }
    }
}

#[derive(Args)]
pub struct UpdateResourceArgs {
    #[arg(help = "ID of the resource to update")]
    pub id: u64,
    #[arg(short, long, help = "New name")]
    pub name: Option<String>,
    #[arg(short, long, help = "New color as #rrggbb")]
    pub color: Option<Color>,
}

impl From<UpdateResourceArgs> for ResourceUpdate {
    fn from(val: UpdateResourceArgs) -> Self {
        ResourceUpdate {
            name: val.name,
            color: val.color,
        }
    }
}

/// Identifies an entity to delete
#[derive(Args)]
pub struct DeleteArgs {
    #[arg(help = "ID of the entry to delete")]
    pub id: u64,
}

#[derive(Subcommand)]
pub enum ResourceCommands {
    /// Add a resource
    #[command(alias = "a")]
    Add(AddResourceArgs),
    /// Update a resource's name or color
    #[command(alias = "u")]
    Update(UpdateResourceArgs),
    /// Delete a resource; its tasks fall back to the default color
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
}

/// Add a task bar
///
/// Dates default to the plan start, the resource to the first one and the
/// lane to 1. Lanes outside the plan are clamped when rendering.
#[derive(Args)]
pub struct AddTaskArgs {
    #[arg(help = "Task name")]
    pub name: Option<String>,
    #[arg(short, long, help = "Start date (YYYY-MM-DD)")]
    pub start: Option<Date>,
    #[arg(short, long, help = "End date (YYYY-MM-DD)")]
    pub end: Option<Date>,
    #[arg(short, long, help = "ID of the resource coloring the bar")]
    pub resource: Option<u64>,
    #[arg(short, long, allow_negative_numbers = true, help = "Lane, 1 is the bottom one")]
    pub line: Option<i64>,
}

impl From<AddTaskArgs> for CreateTask {
    fn from(val: AddTaskArgs) -> Self {
        CreateTask {
            name: val.name,
            start_date: val.start,
            end_date: val.end,
            resource_id: val.resource,
            line: val.line,
        }
    }
}

#[derive(Args)]
pub struct UpdateTaskArgs {
    #[arg(help = "ID of the task to update")]
    pub id: u64,
    #[arg(short, long, help = "New name")]
    pub name: Option<String>,
    #[arg(short, long, help = "New start date (YYYY-MM-DD)")]
    pub start: Option<Date>,
    #[arg(short, long, help = "New end date (YYYY-MM-DD)")]
    pub end: Option<Date>,
    #[arg(
        short,
        long,
        conflicts_with = "no_resource",
        help = "ID of the new resource"
    )]
    pub resource: Option<u64>,
    #[arg(long, help = "Detach the task from its resource")]
    pub no_resource: bool,
    #[arg(short, long, allow_negative_numbers = true, help = "New lane")]
    pub line: Option<i64>,
}

impl From<UpdateTaskArgs> for TaskUpdate {
    fn from(val: UpdateTaskArgs) -> Self {
        let resource_id = if val.no_resource {
            Some(None)
        } else {
            val.resource.map(Some)
        };
        TaskUpdate {
            name: val.name,
            start_date: val.start,
            end_date: val.end,
            resource_id,
            line: val.line,
        }
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// Update a task
    #[command(alias = "u")]
    Update(UpdateTaskArgs),
    /// Delete a task
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
}

/// Milestone kinds accepted on the command line
///
/// Loaded plans may carry other kinds; those are kept and drawn with a
/// generic calendar glyph.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum MilestoneKindArg {
    /// 👥
    Meeting,
    /// 📄
    Document,
    /// 📱
    App,
    /// Star marker
    Production,
    /// Diamond marker
    Divers,
}

impl From<MilestoneKindArg> for MilestoneKind {
    fn from(val: MilestoneKindArg) -> Self {
        match val {
            MilestoneKindArg::Meeting => MilestoneKind::Meeting,
            MilestoneKindArg::Document => MilestoneKind::Document,
            MilestoneKindArg::App => MilestoneKind::App,
            MilestoneKindArg::Production => MilestoneKind::Production,
            MilestoneKindArg::Divers => MilestoneKind::Divers,
        }
    }
}

/// Add a milestone
#[derive(Args)]
pub struct AddMilestoneArgs {
    #[arg(help = "Milestone name")]
    pub name: Option<String>,
    #[arg(short, long, help = "Date (YYYY-MM-DD), defaults to the plan start")]
    pub date: Option<Date>,
    #[arg(short, long, value_enum, help = "Kind of milestone")]
    pub kind: Option<MilestoneKindArg>,
    #[arg(short, long, allow_negative_numbers = true, help = "Lane, 1 is the bottom one")]
    pub line: Option<i64>,
}

impl From<AddMilestoneArgs> for CreateMilestone {
    fn from(val: AddMilestoneArgs) -> Self {
        CreateMilestone {
            name: val.name,
            date: val.date,
            kind: val.kind.map(Into::into),
            line: val.line,
        }
    }
}

#[derive(Args)]
pub struct UpdateMilestoneArgs {
    #[arg(help = "ID of the milestone to update")]
    pub id: u64,
    #[arg(short, long, help = "New name")]
    pub name: Option<String>,
    #[arg(short, long, help = "New date (YYYY-MM-DD)")]
    pub date: Option<Date>,
    #[arg(short, long, value_enum, help = "New kind")]
    pub kind: Option<MilestoneKindArg>,
    #[arg(
        short,
        long,
        allow_negative_numbers = true,
        conflicts_with = "no_line",
        help = "New lane"
    )]
    pub line: Option<i64>,
    #[arg(long, help = "Unset the lane so the milestone sits on lane 1")]
    pub no_line: bool,
}

impl From<UpdateMilestoneArgs> for MilestoneUpdate {
    fn from(val: UpdateMilestoneArgs) -> Self {
        let line = if val.no_line {
            Some(None)
        } else {
            val.line.map(Some)
        };
        MilestoneUpdate {
            name: val.name,
            date: val.date,
            kind: val.kind.map(Into::into),
            line,
        }
    }
}

#[derive(Subcommand)]
pub enum MilestoneCommands {
    /// Add a milestone
    #[command(alias = "a")]
    Add(AddMilestoneArgs),
    /// Update a milestone
    #[command(alias = "u")]
    Update(UpdateMilestoneArgs),
    /// Delete a milestone
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
}

#[derive(Args)]
pub struct AddVerticalLineArgs {
    #[arg(help = "Date of the line (YYYY-MM-DD), defaults to the plan start")]
    pub date: Option<Date>,
}

impl From<AddVerticalLineArgs> for CreateVerticalLine {
    fn from(val: AddVerticalLineArgs) -> Self {
        CreateVerticalLine { date: val.date }
    }
}

#[derive(Args)]
pub struct UpdateVerticalLineArgs {
    #[arg(help = "ID of the vertical line to update")]
    pub id: u64,
    #[arg(short, long, help = "New date (YYYY-MM-DD)")]
    pub date: Option<Date>,
}

impl From<UpdateVerticalLineArgs> for VerticalLineUpdate {
    fn from(val: UpdateVerticalLineArgs) -> Self {
        VerticalLineUpdate { date: val.date }
    }
}

#[derive(Subcommand)]
pub enum VerticalLineCommands {
    /// Add a vertical line
    #[command(alias = "a")]
    Add(AddVerticalLineArgs),
    /// Move a vertical line
    #[command(alias = "u")]
    Update(UpdateVerticalLineArgs),
    /// Delete a vertical line
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
}

/// Merge a plan document into the current plan
///
/// Fields present in the document replace the current ones; absent or
/// malformed fields are left alone. Collections are replaced as a whole.
#[derive(Args)]
pub struct LoadArgs {
    #[arg(help = "Path of the JSON document to merge")]
    pub file: PathBuf,
}

/// Languages for month names and fixed labels
#[derive(Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum LocaleArg {
    #[default]
    En,
    Fr,
}

impl From<LocaleArg> for Locale {
    fn from(val: LocaleArg) -> Self {
        match val {
            LocaleArg::En => Locale::English,
            LocaleArg::Fr => Locale::French,
        }
    }
}

/// Render the timeline
///
/// Writes SVG to stdout unless --output is given. With --export the lane
/// grid and lane labels are left out and the background is painted white,
/// as in saved images.
#[derive(Args)]
pub struct RenderArgs {
    #[arg(short, long, help = "Write to this file instead of stdout")]
    pub output: Option<PathBuf>,
    #[arg(short, long, help = "Leave out lane guides, as in exported images")]
    pub export: bool,
    #[arg(long, value_enum, default_value_t, help = "Label language")]
    pub locale: LocaleArg,
    #[arg(long, help = "Print the laid-out scene as JSON instead of SVG")]
    pub json: bool,
}

/// Export formats for dated copies
#[derive(Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Json,
    Svg,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Svg => "svg",
        }
    }
}

/// Write a dated copy of the plan
///
/// The file is named after the plan and today's date, e.g.
/// `Roadmap_2024-07-01.json`.
#[derive(Args)]
pub struct ExportArgs {
    #[arg(short, long, help = "Directory to write into, defaults to the current one")]
    pub dir: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t, help = "Output format")]
    pub format: ExportFormat,
    #[arg(long, value_enum, default_value_t, help = "Label language for SVG")]
    pub locale: LocaleArg,
}
