use std::time::{Duration, Instant};

use glam::DVec2;
use region_draw::{AppIntent, EditorOptions, ToolEvent, ToolState};

use super::{
    draw_with, ensure_tool, loaded_session, loaded_session_with, rect, selected_codes, send,
};

#[test]
fn test_activating_active_tool_again_returns_to_idle() {
    let (mut controller, mut state) = loaded_session();

    send(
        &mut controller,
        &mut state,
        AppIntent::ActivateToolRequested {
            tool: ToolState::DrawUnion,
        },
    );
    assert_eq!(state.tool_state(), ToolState::DrawUnion);
    assert!(!state.editor.actions_enabled());

    send(
        &mut controller,
        &mut state,
        AppIntent::ActivateToolRequested {
            tool: ToolState::DrawUnion,
        },
    );
    assert_eq!(state.tool_state(), ToolState::Idle);
    assert!(state.editor.actions_enabled());
}

#[test]
fn test_only_one_tool_is_active_at_a_time() {
    let (mut controller, mut state) = loaded_session();

    for tool in [
        ToolState::DrawCut,
        ToolState::DrawLineCut,
        ToolState::Modify,
        ToolState::DragDropImport,
    ] {
        send(
            &mut controller,
            &mut state,
            AppIntent::ActivateToolRequested { tool },
        );
        assert_eq!(state.tool_state(), tool);
    }

    send(&mut controller, &mut state, AppIntent::ToolCancelled);
    assert_eq!(state.tool_state(), ToolState::Idle);
}

#[test]
fn test_event_for_other_tool_is_ignored() {
    let (mut controller, mut state) = loaded_session();
    ensure_tool(&mut controller, &mut state, ToolState::DrawPolygon);

    send(
        &mut controller,
        &mut state,
        AppIntent::ToolEvent {
            event: ToolEvent::LineEnd {
                points: vec![DVec2::new(-1.0, 5.0), DVec2::new(40.0, 5.0)],
            },
        },
    );

    assert!(!state.has_drawn_features());
    assert_eq!(state.tool_state(), ToolState::DrawPolygon);
}

#[test]
fn test_sketch_points_build_polygon_feature() {
    let (mut controller, mut state) = loaded_session();
    ensure_tool(&mut controller, &mut state, ToolState::DrawPolygon);

    for (x, y) in [(12.0, 2.0), (18.0, 2.0), (18.0, 8.0), (12.0, 8.0)] {
        send(
            &mut controller,
            &mut state,
            AppIntent::SketchPointAdded {
                world_pos: DVec2::new(x, y),
            },
        );
    }
    send(&mut controller, &mut state, AppIntent::SketchFinished);

    assert_eq!(state.drawn.len(), 1);
    assert_eq!(selected_codes(&state), vec!["B"]);
    assert!(state.editor.session.sketch.is_empty());
    approx::assert_relative_eq!(super::total_drawn_area(&state), 36.0, epsilon = 1e-9);
}

#[test]
fn test_sketch_with_two_points_is_discarded() {
    let (mut controller, mut state) = loaded_session();
    ensure_tool(&mut controller, &mut state, ToolState::DrawPolygon);

    for x in [1.0, 2.0] {
        send(
            &mut controller,
            &mut state,
            AppIntent::SketchPointAdded {
                world_pos: DVec2::new(x, 1.0),
            },
        );
    }
    send(&mut controller, &mut state, AppIntent::SketchFinished);

    assert!(!state.has_drawn_features());
}

#[test]
fn test_line_cut_sketch_finishes_after_second_point() {
    let (mut controller, mut state) = loaded_session();
    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawPolygon,
        rect(2.0, 2.0, 8.0, 8.0),
    );
    ensure_tool(&mut controller, &mut state, ToolState::DrawLineCut);

    send(
        &mut controller,
        &mut state,
        AppIntent::SketchPointAdded {
            world_pos: DVec2::new(5.0, -1.0),
        },
    );
    assert_eq!(state.drawn.len(), 1);
    send(
        &mut controller,
        &mut state,
        AppIntent::SketchPointAdded {
            world_pos: DVec2::new(5.0, 11.0),
        },
    );

    assert_eq!(state.drawn.len(), 2);
    assert!(state.editor.session.sketch.is_empty());
}

#[test]
fn test_actions_stay_suppressed_until_settle_delay_elapsed() {
    let (mut controller, mut state) = loaded_session_with(EditorOptions::default());
    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawPolygon,
        rect(2.0, 2.0, 8.0, 8.0),
    );

    assert!(!state.editor.actions_enabled());
    assert!(state.editor.reenable_at.is_some());

    state.editor.settle(Instant::now() + Duration::from_secs(5));
    assert!(state.editor.actions_enabled());
    assert_eq!(state.tool_state(), ToolState::DrawPolygon);
}

#[test]
fn test_zero_settle_delay_reenables_immediately_after_drawing() {
    let (mut controller, mut state) = loaded_session();
    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawPolygon,
        rect(2.0, 2.0, 8.0, 8.0),
    );

    assert!(state.editor.actions_enabled());
    send(
        &mut controller,
        &mut state,
        AppIntent::RegionClicked {
            world_pos: DVec2::new(25.0, 5.0),
        },
    );
    assert_eq!(selected_codes(&state), vec!["C", "A"]);
}

#[test]
fn test_modify_reselects_under_new_geometry() {
    let (mut controller, mut state) = loaded_session();
    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawPolygon,
        rect(2.0, 2.0, 8.0, 8.0),
    );
    let id = state.drawn.ids()[0];

    ensure_tool(&mut controller, &mut state, ToolState::Modify);
    send(
        &mut controller,
        &mut state,
        AppIntent::ToolEvent {
            event: ToolEvent::ModifyStart { id },
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::ToolEvent {
            event: ToolEvent::ModifyEnd {
                id,
                shape: rect(12.0, 2.0, 18.0, 8.0),
            },
        },
    );

    assert_eq!(selected_codes(&state), vec!["B"]);
    assert!(state.editor.session.previous_geometry.is_none());
}

#[test]
fn test_translate_moves_feature_and_selection() {
    let (mut controller, mut state) = loaded_session();
    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawPolygon,
        rect(2.0, 2.0, 8.0, 8.0),
    );
    let id = state.drawn.ids()[0];

    ensure_tool(&mut controller, &mut state, ToolState::Transform);
    send(
        &mut controller,
        &mut state,
        AppIntent::ToolEvent {
            event: ToolEvent::TranslateStart { id },
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::ToolEvent {
            event: ToolEvent::TranslateEnd {
                id,
                delta: DVec2::new(20.0, 0.0),
            },
        },
    );

    assert_eq!(selected_codes(&state), vec!["C"]);
    let (min, _) = state
        .drawn
        .get(id)
        .and_then(|f| f.geometry.bounds())
        .expect("Feature sollte existieren");
    approx::assert_relative_eq!(min.x, 22.0);
}

#[test]
fn test_drop_imports_valid_shapes_only() {
    let (mut controller, mut state) = loaded_session();
    ensure_tool(&mut controller, &mut state, ToolState::DragDropImport);

    let broken: region_draw::Shape =
        region_draw::Polygon::new(vec![vec![DVec2::ZERO, DVec2::X]]).into();
    send(
        &mut controller,
        &mut state,
        AppIntent::ToolEvent {
            event: ToolEvent::Drop {
                shapes: vec![rect(12.0, 2.0, 14.0, 4.0), broken],
            },
        },
    );

    assert_eq!(state.drawn.len(), 1);
    let feature = state.drawn_features().next().expect("Feature erwartet");
    assert_eq!(feature.style.as_deref(), Some("import"));
    assert_eq!(selected_codes(&state), vec!["B"]);
}

#[test]
fn test_removing_feature_restores_viewport_snapshot() {
    let (mut controller, mut state) = loaded_session();
    let before = state.view.camera.position;

    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawPolygon,
        rect(2.0, 2.0, 8.0, 8.0),
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::CameraPan {
            delta: DVec2::new(3.0, 1.0),
        },
    );
    send(&mut controller, &mut state, AppIntent::ZoomInRequested);

    let id = state.drawn.ids()[0];
    send(
        &mut controller,
        &mut state,
        AppIntent::RemoveFeatureRequested { id },
    );

    approx::assert_relative_eq!(state.view.camera.position.x, before.x);
    approx::assert_relative_eq!(state.view.camera.position.y, before.y);
    assert!(state.view.viewport_snapshot.is_none());
}
