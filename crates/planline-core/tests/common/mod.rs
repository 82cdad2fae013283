use jiff::civil::date;
use planline_core::{
    params::{CreateMilestone, CreateTask, CreateVerticalLine},
    MilestoneKind, Planner, PlannerBuilder,
};
use tempfile::TempDir;

/// Helper function to create a planner with a temporary plan file path
pub async fn create_test_planner() -> (TempDir, std::path::PathBuf, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let plan_path = temp_dir.path().join("plans").join("plan.json");
    let planner = PlannerBuilder::new()
        .with_name("Integration")
        .with_start_date(date(2024, 1, 1))
        .with_weeks(4)
        .with_plan_file(Some(&plan_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, plan_path, planner)
}

/// Adds one entity of each kind inside a 4-week window starting 2024-01-01.
#[allow(dead_code)]
pub fn populate(planner: &mut Planner) {
    planner.add_task(&CreateTask {
        name: Some("Design".to_string()),
        end_date: Some(date(2024, 1, 8)),
        ..Default::default()
    });
    planner.add_task(&CreateTask {
        name: Some("Build".to_string()),
        start_date: Some(date(2024, 1, 8)),
        end_date: Some(date(2024, 1, 22)),
        line: Some(2),
        ..Default::default()
    });
    planner.add_milestone(&CreateMilestone {
        name: Some("Launch".to_string()),
        date: Some(date(2024, 1, 22)),
        kind: Some(MilestoneKind::Production),
        line: Some(3),
    });
    planner.add_vertical_line(&CreateVerticalLine {
        date: Some(date(2024, 1, 15)),
    });
}
