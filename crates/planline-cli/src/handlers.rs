//! Command handlers for the CLI.
//!
//! Every editing command opens the plan file, applies one planner
//! operation, saves the file and prints the result as markdown.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use jiff::{Timestamp, Zoned};
use log::info;
use planline_core::{
    display::SavedAt,
    layout::LayoutConfig,
    models::MAX_RESOURCES,
    render::{export, Surface, SvgSurface},
    store, Color, CreateResult, DeleteResult, Locale, MilestoneUpdate, Planner, PlannerBuilder,
    ResourceUpdate, Scene, TaskUpdate, UpdateResult, VerticalLineUpdate,
};

use crate::{
    cli::{
        ConfigArgs, ExportArgs, ExportFormat, InitArgs, LoadArgs, MilestoneCommands, RenderArgs,
        ResourceCommands, TaskCommands, VerticalLineCommands,
    },
    renderer::TerminalRenderer,
};

/// Runs CLI commands against one plan file.
pub struct Cli {
    plan_file: PathBuf,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(plan_file: PathBuf, renderer: TerminalRenderer) -> Self {
        Self {
            plan_file,
            renderer,
        }
    }

    async fn open(&self) -> Result<Planner> {
        PlannerBuilder::new()
            .with_plan_file(Some(&self.plan_file))
            .build()
            .await
            .with_context(|| format!("Failed to open plan {}", self.plan_file.display()))
    }

    async fn save(&self, planner: &Planner) -> Result<Timestamp> {
        let saved_at = store::save(&self.plan_file, planner.plan())
            .await
            .with_context(|| format!("Failed to save plan {}", self.plan_file.display()))?;
        info!("Saved plan to {} at {saved_at}", self.plan_file.display());
        Ok(saved_at)
    }

    pub async fn init(&self, args: InitArgs) -> Result<()> {
        if !args.force && store::exists(&self.plan_file).await? {
            bail!(
                "Plan file {} already exists, use --force to replace it",
                self.plan_file.display()
            );
        }

        let mut builder = PlannerBuilder::new();
        if let Some(name) = args.name {
            builder = builder.with_name(name);
        }
        if let Some(start_date) = args.start_date {
            builder = builder.with_start_date(start_date);
        }
        if let Some(weeks) = args.weeks {
            builder = builder.with_weeks(weeks);
        }
        if let Some(lines) = args.lines {
            builder = builder.with_lines(lines);
        }
        if args.empty {
            builder = builder.without_default_resources();
        }

        let planner = builder.build().await?;
        let saved_at = self.save(&planner).await?;
        self.renderer.render(&format!(
            "Created plan file {} at {}\n\n{}",
            self.plan_file.display(),
            SavedAt(&saved_at),
            planner.plan()
        ))
    }

    pub async fn show(&self) -> Result<()> {
        let planner = self.open().await?;
        self.renderer.render(&planner.plan().to_string())
    }

    pub async fn config(&self, args: ConfigArgs) -> Result<()> {
        let mut planner = self.open().await?;
        let changes = planner.configure(&args.into())?;
        if changes.is_empty() {
            bail!("Nothing to change, pass at least one option");
        }
        self.save(&planner).await?;

        let mut output = String::from("Updated plan\n\nChanges made:\n");
        for change in changes {
            output.push_str(&format!("- {change}\n"));
        }
        output.push('\n');
        output.push_str(&planner.plan().to_string());
        self.renderer.render(&output)
    }

    pub async fn handle_resource_command(&self, command: ResourceCommands) -> Result<()> {
        let mut planner = self.open().await?;
        let output = match command {
            ResourceCommands::Add(args) => match planner.add_resource(&args.into()) {
                Some(resource) => CreateResult::new(resource).to_string(),
                None => bail!("A plan holds at most {MAX_RESOURCES} resources"),
            },
            ResourceCommands::Update(args) => {
                let id = args.id;
                let update: ResourceUpdate = args.into();
                let changes = changed(&update, ResourceUpdate::changed_fields)?;
                let resource = planner
                    .update_resource(id, update)
                    .cloned()
                    .with_context(|| not_found("Resource", id))?;
                UpdateResult::with_changes(resource, changes).to_string()
            }
            ResourceCommands::Delete(args) => {
                let resource = planner
                    .delete_resource(args.id)
                    .with_context(|| not_found("Resource", args.id))?;
                DeleteResult::new(resource).to_string()
            }
        };
        self.save(&planner).await?;
        self.renderer.render(&output)
    }

    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        let mut planner = self.open().await?;
        let output = match command {
            TaskCommands::Add(args) => {
                CreateResult::new(planner.add_task(&args.into())).to_string()
            }
            TaskCommands::Update(args) => {
                let id = args.id;
                let update: TaskUpdate = args.into();
                let changes = changed(&update, TaskUpdate::changed_fields)?;
                let task = planner
                    .update_task(id, update)
                    .cloned()
                    .with_context(|| not_found("Task", id))?;
                UpdateResult::with_changes(task, changes).to_string()
            }
            TaskCommands::Delete(args) => {
                let task = planner
                    .delete_task(args.id)
                    .with_context(|| not_found("Task", args.id))?;
                DeleteResult::new(task).to_string()
            }
        };
        self.save(&planner).await?;
        self.renderer.render(&output)
    }

    pub async fn handle_milestone_command(&self, command: MilestoneCommands) -> Result<()> {
        let mut planner = self.open().await?;
        let output = match command {
            MilestoneCommands::Add(args) => {
                CreateResult::new(planner.add_milestone(&args.into())).to_string()
            }
            MilestoneCommands::Update(args) => {
                let id = args.id;
                let update: MilestoneUpdate = args.into();
                let changes = changed(&update, MilestoneUpdate::changed_fields)?;
                let milestone = planner
                    .update_milestone(id, update)
                    .cloned()
                    .with_context(|| not_found("Milestone", id))?;
                UpdateResult::with_changes(milestone, changes).to_string()
            }
            MilestoneCommands::Delete(args) => {
                let milestone = planner
                    .delete_milestone(args.id)
                    .with_context(|| not_found("Milestone", args.id))?;
                DeleteResult::new(milestone).to_string()
            }
        };
        self.save(&planner).await?;
        self.renderer.render(&output)
    }

    pub async fn handle_vertical_line_command(&self, command: VerticalLineCommands) -> Result<()> {
        let mut planner = self.open().await?;
        let output = match command {
            VerticalLineCommands::Add(args) => {
                CreateResult::new(planner.add_vertical_line(&args.into())).to_string()
            }
            VerticalLineCommands::Update(args) => {
                let id = args.id;
                let update: VerticalLineUpdate = args.into();
                let changes = changed(&update, VerticalLineUpdate::changed_fields)?;
                let line = planner
                    .update_vertical_line(id, update)
                    .cloned()
                    .with_context(|| not_found("Vertical line", id))?;
                UpdateResult::with_changes(line, changes).to_string()
            }
            VerticalLineCommands::Delete(args) => {
                let line = planner
                    .delete_vertical_line(args.id)
                    .with_context(|| not_found("Vertical line", args.id))?;
                DeleteResult::new(line).to_string()
            }
        };
        self.save(&planner).await?;
        self.renderer.render(&output)
    }

    pub async fn load(&self, args: &LoadArgs) -> Result<()> {
        let mut planner = self.open().await?;
        let patch = store::load_patch(&args.file)
            .await
            .with_context(|| format!("Failed to load {}", args.file.display()))?;

        let fields = patch.present_fields();
        let written_at = patch.saved_at;
        planner.apply_patch(patch);
        self.save(&planner).await?;

        let mut output = format!("Loaded {}", args.file.display());
        if let Some(written_at) = written_at {
            output.push_str(&format!(" (saved {})", SavedAt(&written_at)));
        }
        output.push_str("\n\n");
        if fields.is_empty() {
            output.push_str("No usable fields found; plan unchanged.\n");
        } else {
            output.push_str(&format!("Replaced: {}\n", fields.join(", ")));
        }
        output.push('\n');
        output.push_str(&planner.plan().to_string());
        self.renderer.render(&output)
    }

    pub async fn render(&self, args: RenderArgs) -> Result<()> {
        let planner = self.open().await?;
        let config = LayoutConfig::default().with_locale(args.locale.into());
        let scene = planner.layout(&config);

        let content = if args.json {
            let scene = if args.export {
                scene.without_guides()
            } else {
                scene
            };
            serde_json::to_string_pretty(&scene)?
        } else {
            draw_svg(&scene, args.export)?
        };

        match args.output {
            Some(path) => {
                store::write_output(&path, content).await?;
                self.renderer.render(&format!("Wrote {}\n", path.display()))
            }
            None => self.renderer.raw(&content),
        }
    }

    pub async fn export(&self, args: ExportArgs) -> Result<()> {
        let planner = self.open().await?;
        let today = Zoned::now().date();
        let file_name =
            store::export_file_name(&planner.plan().name, today, args.format.extension());
        let path = args.dir.unwrap_or_default().join(file_name);

        match args.format {
            ExportFormat::Json => {
                store::save(&path, planner.plan()).await?;
            }
            ExportFormat::Svg => {
                let locale: Locale = args.locale.into();
                let scene = planner.layout(&LayoutConfig::default().with_locale(locale));
                store::write_output(&path, draw_svg(&scene, true)?).await?;
            }
        }
        self.renderer.render(&format!("Exported plan to {}\n", path.display()))
    }
}

/// SVG text for `scene`; exported images skip guides and get a white
/// background.
fn draw_svg(scene: &Scene, exported: bool) -> Result<String> {
    if exported {
        let mut surface = SvgSurface::new().with_background(Color::WHITE);
        export(scene, Some(&mut surface))?;
        Ok(surface.into_string())
    } else {
        let mut surface = SvgSurface::new();
        surface.draw(scene)?;
        Ok(surface.into_string())
    }
}

/// Field names an update would change; an empty update is an error.
fn changed<U>(update: &U, fields: fn(&U) -> Vec<String>) -> Result<Vec<String>> {
    let changes = fields(update);
    if changes.is_empty() {
        bail!("Nothing to update, pass at least one field to change");
    }
    Ok(changes)
}

fn not_found(kind: &str, id: u64) -> String {
    format!("{kind} with ID {id} not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        assert_eq!(not_found("Task", 4), "Task with ID 4 not found");
    }

    #[test]
    fn test_empty_update_is_rejected() {
        let err = changed(&TaskUpdate::default(), TaskUpdate::changed_fields).unwrap_err();
        assert!(err.to_string().contains("Nothing to update"));
    }

    #[test]
    fn test_exported_svg_has_background() {
        let plan = planline_core::Plan::new("Test", jiff::civil::date(2024, 1, 1));
        let scene = planline_core::layout(&plan, &LayoutConfig::default());
        let svg = draw_svg(&scene, true).unwrap();
        assert!(svg.contains(r##"fill="#ffffff""##));
        assert!(!svg.contains("lane-guide"));
        assert!(draw_svg(&scene, false).unwrap().contains("lane-guide"));
    }
}
