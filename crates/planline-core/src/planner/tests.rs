//! Tests for the planner module.

use jiff::civil::date;
use tempfile::TempDir;

use super::*;
use crate::{
    error::PlanlineError,
    models::{MilestoneKind, MilestoneUpdate, ResourceUpdate, TaskUpdate, VerticalLineUpdate},
    params::{ConfigurePlan, CreateMilestone, CreateResource, CreateTask, CreateVerticalLine},
};

/// Helper function to create a test planner with the three default resources
async fn create_test_planner() -> Planner {
    PlannerBuilder::new()
        .with_name("Test Plan")
        .with_start_date(date(2024, 1, 1))
        .build()
        .await
        .expect("Failed to create planner")
}

#[tokio::test]
async fn test_fresh_plan_defaults() {
    let planner = create_test_planner().await;
    let plan = planner.plan();

    assert_eq!(plan.name, "Test Plan");
    assert_eq!(plan.num_weeks, 12);
    assert_eq!(plan.num_lines, 5);
    assert_eq!(plan.resources.len(), 3);
    assert_eq!(plan.resources[0].name, "Resource 1");
    assert_eq!(plan.resources[2].color.to_string(), "#d8d8d8");
    assert!(plan.tasks.is_empty());
}

#[tokio::test]
async fn test_resource_cap_from_empty() {
    let mut planner = PlannerBuilder::new()
        .with_start_date(date(2024, 1, 1))
        .without_default_resources()
        .build()
        .await
        .unwrap();

    for n in 1..=5 {
        let resource = planner.add_resource(&CreateResource::default()).unwrap();
        assert_eq!(resource.name, format!("Resource {n}"));
        assert_eq!(resource.color.to_string(), "#cccccc");
    }

    let before = planner.plan().clone();
    assert!(planner.add_resource(&CreateResource::default()).is_none());
    assert_eq!(planner.plan(), &before);
}

#[tokio::test]
async fn test_ids_are_unique_and_increasing() {
    let mut planner = create_test_planner().await;

    let task = planner.add_task(&CreateTask::default());
    let milestone = planner.add_milestone(&CreateMilestone::default());
    let line = planner.add_vertical_line(&CreateVerticalLine::default());
    let resource = planner.add_resource(&CreateResource::default()).unwrap();

    // Default resources use 1..=3.
    assert_eq!(task.id, 4);
    assert!(milestone.id > task.id);
    assert!(line.id > milestone.id);
    assert!(resource.id > line.id);
}

#[tokio::test]
async fn test_add_task_defaults() {
    let mut planner = create_test_planner().await;
    let task = planner.add_task(&CreateTask::default());

    assert_eq!(task.name, "New task");
    assert_eq!(task.start_date, date(2024, 1, 1));
    assert_eq!(task.end_date, date(2024, 1, 1));
    assert_eq!(task.resource_id, Some(1));
    assert_eq!(task.line, 1);

    let task = planner.add_task(&CreateTask {
        start_date: Some(date(2024, 2, 5)),
        ..Default::default()
    });
    assert_eq!(task.end_date, date(2024, 2, 5));
}

#[tokio::test]
async fn test_task_without_resources_is_unassigned() {
    let mut planner = PlannerBuilder::new()
        .with_start_date(date(2024, 1, 1))
        .without_default_resources()
        .build()
        .await
        .unwrap();
    assert_eq!(planner.add_task(&CreateTask::default()).resource_id, None);
}

#[tokio::test]
async fn test_add_milestone_defaults() {
    let mut planner = create_test_planner().await;
    let milestone = planner.add_milestone(&CreateMilestone::default());

    assert_eq!(milestone.name, "New milestone");
    assert_eq!(milestone.kind, MilestoneKind::Meeting);
    assert_eq!(milestone.line, Some(1));
    assert_eq!(milestone.date, date(2024, 1, 1));
}

#[tokio::test]
async fn test_partial_update_keeps_other_fields() {
    let mut planner = create_test_planner().await;
    let task = planner.add_task(&CreateTask {
        name: Some("Build".to_string()),
        end_date: Some(date(2024, 1, 20)),
        line: Some(3),
        ..Default::default()
    });

    let updated = planner
        .update_task(
            task.id,
            TaskUpdate {
                name: Some("Ship".to_string()),
                ..Default::default()
            },
        )
        .cloned()
        .unwrap();

    assert_eq!(updated.name, "Ship");
    assert_eq!(updated.end_date, date(2024, 1, 20));
    assert_eq!(updated.line, 3);
    assert_eq!(planner.plan().tasks[0], updated);
}

#[tokio::test]
async fn test_updates_and_deletes_of_unknown_ids_are_noops() {
    let mut planner = create_test_planner().await;
    planner.add_task(&CreateTask::default());
    let before = planner.plan().clone();

    assert!(planner
        .update_resource(
            99,
            ResourceUpdate {
                name: Some("Ghost".to_string()),
                ..Default::default()
            }
        )
        .is_none());
    assert!(planner
        .update_milestone(
            99,
            MilestoneUpdate {
                kind: Some(MilestoneKind::App),
                ..Default::default()
            }
        )
        .is_none());
    assert!(planner.update_vertical_line(99, VerticalLineUpdate::default()).is_none());
    assert!(planner.delete_task(99).is_none());
    assert!(planner.delete_vertical_line(99).is_none());

    assert_eq!(planner.plan(), &before);
}

#[tokio::test]
async fn test_delete_resource_leaves_tasks_dangling() {
    let mut planner = create_test_planner().await;
    let task = planner.add_task(&CreateTask::default());

    let removed = planner.delete_resource(1).unwrap();
    assert_eq!(removed.name, "Resource 1");
    assert_eq!(planner.plan().resources.len(), 2);
    assert_eq!(planner.plan().tasks[0].resource_id, Some(1));
    assert_eq!(planner.delete_task(task.id).unwrap().id, task.id);
    assert!(planner.plan().tasks.is_empty());
}

#[tokio::test]
async fn test_milestone_line_can_be_cleared() {
    let mut planner = create_test_planner().await;
    let milestone = planner.add_milestone(&CreateMilestone {
        line: Some(4),
        ..Default::default()
    });

    let updated = planner
        .update_milestone(
            milestone.id,
            MilestoneUpdate {
                line: Some(None),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.line, None);
    assert_eq!(updated.requested_line(), 1);
}

#[tokio::test]
async fn test_zero_weeks_or_lines_rejected() {
    let mut planner = create_test_planner().await;

    let err = planner.set_num_weeks(0).unwrap_err();
    assert!(matches!(err, PlanlineError::InvalidInput { ref field, .. } if field == "num_weeks"));
    assert!(planner.set_num_lines(0).is_err());
    assert_eq!(planner.plan().num_weeks, 12);
    assert_eq!(planner.plan().num_lines, 5);

    planner.set_num_weeks(26).unwrap();
    assert_eq!(planner.plan().num_weeks, 26);
}

#[tokio::test]
async fn test_configure_is_all_or_nothing() {
    let mut planner = create_test_planner().await;

    let result = planner.configure(&ConfigurePlan {
        name: Some("Renamed".to_string()),
        num_lines: Some(0),
        ..Default::default()
    });
    assert!(result.is_err());
    assert_eq!(planner.plan().name, "Test Plan");

    let changes = planner
        .configure(&ConfigurePlan {
            name: Some("Renamed".to_string()),
            start_date: Some(date(2024, 3, 4)),
            num_weeks: Some(8),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(changes, vec!["name", "start date", "weeks"]);
    assert_eq!(planner.plan().start_date, date(2024, 3, 4));
    assert_eq!(planner.plan().num_weeks, 8);
}

#[tokio::test]
async fn test_apply_patch_reseeds_ids() {
    let mut planner = create_test_planner().await;
    planner
        .load_json(r#"{"tasks": [{"id": 500, "name": "Imported", "startDate": "2024-01-01", "endDate": "2024-01-08"}]}"#)
        .unwrap();

    assert_eq!(planner.plan().tasks.len(), 1);
    assert_eq!(planner.plan().resources.len(), 3);
    let next = planner.add_vertical_line(&CreateVerticalLine::default());
    assert_eq!(next.id, 501);
}

#[tokio::test]
async fn test_load_with_largest_id_keeps_ids_unique() {
    let mut planner = create_test_planner().await;
    planner
        .load_json(r#"{"verticalLines": [{"id": 18446744073709551615, "date": "2024-01-02"}]}"#)
        .unwrap();
    assert_eq!(planner.plan().vertical_lines[0].id, u64::MAX);

    // Ids 1..=3 belong to the default resources.
    let first = planner.add_task(&CreateTask::default());
    let second = planner.add_milestone(&CreateMilestone::default());
    assert_eq!(first.id, 4);
    assert_eq!(second.id, 5);

    let mut ids: Vec<u64> = planner.plan().resources.iter().map(|r| r.id).collect();
    ids.extend(planner.plan().tasks.iter().map(|t| t.id));
    ids.extend(planner.plan().milestones.iter().map(|m| m.id));
    ids.extend(planner.plan().vertical_lines.iter().map(|v| v.id));
    let count = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), count);
}

#[tokio::test]
async fn test_failed_load_keeps_state() {
    let mut planner = create_test_planner().await;
    planner.add_task(&CreateTask::default());
    let before = planner.plan().clone();

    let err = planner.load_json("[]").unwrap_err();
    assert!(matches!(err, PlanlineError::InvalidFormat { .. }));
    assert_eq!(planner.plan(), &before);
}

#[tokio::test]
async fn test_build_from_missing_file_starts_fresh() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let planner = PlannerBuilder::new()
        .with_start_date(date(2024, 1, 1))
        .with_plan_file(Some(temp_dir.path().join("absent.json")))
        .build()
        .await
        .unwrap();
    assert_eq!(planner.plan().resources.len(), 3);
}

#[tokio::test]
async fn test_build_merges_existing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("plan.json");
    std::fs::write(&path, r#"{"name": "From disk", "numWeeks": 6}"#).unwrap();

    let planner = PlannerBuilder::new()
        .with_start_date(date(2024, 1, 1))
        .with_plan_file(Some(&path))
        .build()
        .await
        .unwrap();

    assert_eq!(planner.plan().name, "From disk");
    assert_eq!(planner.plan().num_weeks, 6);
    assert_eq!(planner.plan().num_lines, 5);
    assert_eq!(planner.plan().start_date, date(2024, 1, 1));
}
