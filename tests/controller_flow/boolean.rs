use approx::assert_relative_eq;
use glam::DVec2;
use region_draw::{AppIntent, ToolEvent, ToolState};

use super::{
    codes_in_order, draw_with, ensure_tool, loaded_session, rect, selected_codes, send,
    total_drawn_area,
};

fn line_cut(
    controller: &mut region_draw::AppController,
    state: &mut region_draw::AppState,
    a: DVec2,
    b: DVec2,
) {
    ensure_tool(controller, state, ToolState::DrawLineCut);
    send(
        controller,
        state,
        AppIntent::ToolEvent {
            event: ToolEvent::LineEnd { points: vec![a, b] },
        },
    );
}

#[test]
fn test_overlap_cut_trims_feature_and_deselects_uncovered_region() {
    let (mut controller, mut state) = loaded_session();
    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawPolygon,
        rect(2.0, 2.0, 18.0, 8.0),
    );
    assert_eq!(selected_codes(&state), vec!["A", "B"]);

    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawCut,
        rect(8.0, -1.0, 25.0, 11.0),
    );

    assert_eq!(state.drawn.len(), 1);
    assert_relative_eq!(total_drawn_area(&state), 36.0, epsilon = 1e-6);
    assert_eq!(selected_codes(&state), vec!["A"]);
    assert_eq!(codes_in_order(&state), vec!["A", "C", "B"]);
}

#[test]
fn test_overlap_cut_leaves_enclosed_feature_untouched() {
    let (mut controller, mut state) = loaded_session();
    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawPolygon,
        rect(3.0, 3.0, 6.0, 6.0),
    );

    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawCut,
        rect(1.0, 1.0, 9.0, 9.0),
    );

    assert_eq!(state.drawn.len(), 1);
    assert_relative_eq!(total_drawn_area(&state), 9.0, epsilon = 1e-9);
}

#[test]
fn test_contain_cut_turns_enclosed_feature_into_ring() {
    let (mut controller, mut state) = loaded_session();
    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawPolygon,
        rect(3.0, 3.0, 6.0, 6.0),
    );

    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawContainCut,
        rect(1.0, 1.0, 9.0, 9.0),
    );

    assert_eq!(state.drawn.len(), 1);
    assert_relative_eq!(total_drawn_area(&state), 64.0 - 9.0, epsilon = 1e-6);
    let feature = state.drawn_features().next().expect("Feature erwartet");
    let polygons = feature.geometry.polygons();
    assert_eq!(polygons[0].holes().len(), 1);
    assert_eq!(selected_codes(&state), vec!["A"]);
}

#[test]
fn test_contain_cut_punches_hole_into_enclosing_feature() {
    let (mut controller, mut state) = loaded_session();
    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawPolygon,
        rect(1.0, 1.0, 9.0, 9.0),
    );

    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawContainCut,
        rect(3.0, 3.0, 6.0, 6.0),
    );

    assert_eq!(state.drawn.len(), 1);
    assert_relative_eq!(total_drawn_area(&state), 55.0, epsilon = 1e-6);
}

#[test]
fn test_disjoint_cut_is_noop() {
    let (mut controller, mut state) = loaded_session();
    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawPolygon,
        rect(2.0, 2.0, 4.0, 4.0),
    );

    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawContainCut,
        rect(22.0, 2.0, 24.0, 4.0),
    );

    assert_eq!(state.drawn.len(), 1);
    assert_relative_eq!(total_drawn_area(&state), 4.0, epsilon = 1e-9);
    assert_eq!(selected_codes(&state), vec!["A"]);
}

#[test]
fn test_union_merges_features_and_extends_selection() {
    let (mut controller, mut state) = loaded_session();
    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawPolygon,
        rect(2.0, 2.0, 6.0, 6.0),
    );
    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawPolygon,
        rect(14.0, 2.0, 18.0, 6.0),
    );
    assert_eq!(state.drawn.len(), 2);

    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawUnion,
        rect(5.0, 3.0, 15.0, 5.0),
    );

    assert_eq!(state.drawn.len(), 1);
    // 16 + 16 + Brücke 10x2 minus Überlappungen 1x2 und 1x2
    assert_relative_eq!(total_drawn_area(&state), 48.0, epsilon = 1e-6);
    // Netto unveränderte Selektion behält die Reihenfolge (B zuletzt selektiert)
    assert_eq!(codes_in_order(&state), vec!["B", "A", "C"]);
    assert_eq!(selected_codes(&state), vec!["B", "A"]);
}

#[test]
fn test_union_touching_feature_only_at_corner_discards_drawing() {
    let (mut controller, mut state) = loaded_session();
    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawPolygon,
        rect(2.0, 2.0, 4.0, 4.0),
    );

    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawUnion,
        rect(4.0, 4.0, 6.0, 6.0),
    );

    assert_eq!(state.drawn.len(), 1);
    assert_relative_eq!(total_drawn_area(&state), 4.0, epsilon = 1e-9);
}

#[test]
fn test_cut_touching_feature_edge_changes_nothing() {
    let (mut controller, mut state) = loaded_session();
    let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawPolygon,
        rect(2.0, 2.0, 4.0, 4.0),
    );
    let sink = std::rc::Rc::clone(&seen);
    controller.subscribe(move |change| sink.borrow_mut().push(*change));

    for tool in [ToolState::DrawCut, ToolState::DrawContainCut] {
        draw_with(&mut controller, &mut state, tool, rect(4.0, 2.0, 6.0, 4.0));
    }

    assert_eq!(state.drawn.len(), 1);
    assert_relative_eq!(total_drawn_area(&state), 4.0, epsilon = 1e-9);
    assert!(!seen
        .borrow()
        .contains(&region_draw::StateChange::DrawnFeaturesUpdated));
}

#[test]
fn test_cut_on_one_feature_keeps_order_of_still_selected_regions() {
    let (mut controller, mut state) = loaded_session();
    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawPolygon,
        rect(2.0, 2.0, 6.0, 6.0),
    );
    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawPolygon,
        rect(12.0, 2.0, 16.0, 6.0),
    );
    assert_eq!(codes_in_order(&state), vec!["B", "A", "C"]);

    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawCut,
        rect(4.0, 0.0, 8.0, 10.0),
    );

    assert_relative_eq!(total_drawn_area(&state), 8.0 + 16.0, epsilon = 1e-6);
    assert_eq!(codes_in_order(&state), vec!["B", "A", "C"]);
    assert_eq!(selected_codes(&state), vec!["B", "A"]);
}

#[test]
fn test_union_without_intersection_discards_drawing() {
    let (mut controller, mut state) = loaded_session();
    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawPolygon,
        rect(2.0, 2.0, 4.0, 4.0),
    );

    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawUnion,
        rect(22.0, 2.0, 24.0, 4.0),
    );

    assert_eq!(state.drawn.len(), 1);
    assert_eq!(selected_codes(&state), vec!["A"]);
}

#[test]
fn test_line_through_feature_splits_it_into_two() {
    let (mut controller, mut state) = loaded_session();
    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawPolygon,
        rect(2.0, 2.0, 18.0, 8.0),
    );
    let original = state.drawn.ids()[0];

    line_cut(
        &mut controller,
        &mut state,
        DVec2::new(10.0, -1.0),
        DVec2::new(10.0, 11.0),
    );

    let ids = state.drawn.ids();
    assert_eq!(ids.len(), 2);
    assert_eq!(ids[0], original);
    assert_relative_eq!(total_drawn_area(&state), 96.0, epsilon = 0.1);
    assert_eq!(selected_codes(&state), vec!["A", "B"]);
}

#[test]
fn test_line_with_endpoint_inside_feature_changes_nothing() {
    let (mut controller, mut state) = loaded_session();
    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawPolygon,
        rect(2.0, 2.0, 18.0, 8.0),
    );

    line_cut(
        &mut controller,
        &mut state,
        DVec2::new(10.0, -1.0),
        DVec2::new(10.0, 5.0),
    );

    assert_eq!(state.drawn.len(), 1);
    assert_relative_eq!(total_drawn_area(&state), 96.0, epsilon = 1e-9);
}

#[test]
fn test_line_missing_feature_changes_nothing() {
    let (mut controller, mut state) = loaded_session();
    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawPolygon,
        rect(2.0, 2.0, 8.0, 8.0),
    );

    line_cut(
        &mut controller,
        &mut state,
        DVec2::new(15.0, -1.0),
        DVec2::new(15.0, 11.0),
    );

    assert_eq!(state.drawn.len(), 1);
}
