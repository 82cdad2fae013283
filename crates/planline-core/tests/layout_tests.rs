mod common;

use planline_core::{
    layout::{NodeRole, Shape},
    render::{export, Surface, SvgSurface},
    LayoutConfig, Locale, PlanlineError,
};

#[tokio::test]
async fn test_populated_plan_scene() {
    let (_temp_dir, _path, mut planner) = common::create_test_planner().await;
    common::populate(&mut planner);
    let scene = planner.layout(&LayoutConfig::default());

    assert_eq!(scene.width, 1200.0);
    let bars: Vec<_> = scene
        .nodes_where(|role| matches!(role, NodeRole::TaskBar { .. }))
        .collect();
    assert_eq!(bars.len(), 2);

    // Design spans exactly one week.
    let design = planner.plan().tasks[0].id;
    assert_eq!(scene.task_bar(design).unwrap().width(), 275.0);

    let launch = planner.plan().milestones[0].id;
    assert!(matches!(
        scene.shape_for(NodeRole::MilestoneMarker { milestone_id: launch }),
        Some(Shape::Polygon { .. })
    ));
    assert_eq!(
        scene.texts_where(|role| matches!(role, NodeRole::LegendLabel { .. })),
        vec!["Resource 1", "Resource 2", "Resource 3"]
    );
}

#[tokio::test]
async fn test_svg_export_hides_lane_guides() {
    let (_temp_dir, _path, mut planner) = common::create_test_planner().await;
    common::populate(&mut planner);
    let scene = planner.layout(&LayoutConfig::default().with_locale(Locale::French));

    let mut full = SvgSurface::new();
    full.draw(&scene).unwrap();
    let full = full.into_string();
    assert!(full.contains(r#"class="lane-guide""#));
    assert!(full.contains(">L1</text>"));

    let mut exported = SvgSurface::new();
    export(&scene, Some(&mut exported)).unwrap();
    let exported = exported.into_string();
    assert!(!exported.contains(r#"class="lane-guide""#));
    assert!(!exported.contains(">L1</text>"));
    assert!(exported.contains(r#"class="milestone-guide""#));
    assert!(exported.contains("Légende :"));
    assert!(exported.contains(">Launch</text>"));
}

#[tokio::test]
async fn test_export_requires_surface() {
    let (_temp_dir, _path, planner) = common::create_test_planner().await;
    let scene = planner.layout(&LayoutConfig::default());
    assert!(matches!(
        export(&scene, None),
        Err(PlanlineError::MissingCollaborator { .. })
    ));
}
