use glam::DVec2;
use region_draw::{AppIntent, ToolState};

use super::{codes_in_order, draw_with, loaded_session, rect, selected_codes, send};

#[test]
fn test_drawing_inside_region_moves_it_to_front_and_removal_moves_it_back() {
    let (mut controller, mut state) = loaded_session();

    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawPolygon,
        rect(12.0, 2.0, 18.0, 8.0),
    );
    assert_eq!(codes_in_order(&state), vec!["B", "A", "C"]);
    assert_eq!(selected_codes(&state), vec!["B"]);

    let id = state.drawn.ids()[0];
    send(
        &mut controller,
        &mut state,
        AppIntent::RemoveFeatureRequested { id },
    );

    assert_eq!(codes_in_order(&state), vec!["A", "C", "B"]);
    assert!(selected_codes(&state).is_empty());
    assert!(state.regions.is_ordered());
}

#[test]
fn test_polygon_spanning_regions_selects_all_of_them_in_list_order() {
    let (mut controller, mut state) = loaded_session();

    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawPolygon,
        rect(5.0, 2.0, 25.0, 8.0),
    );

    assert_eq!(selected_codes(&state), vec!["A", "B", "C"]);
    assert!(state
        .command_log
        .entries()
        .iter()
        .any(|entry| entry.contains("ApplyToolEvent")));
}

#[test]
fn test_polygon_over_island_selects_multipolygon_region() {
    let (mut controller, mut state) = loaded_session();

    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawPolygon,
        rect(31.0, -1.0, 35.0, 3.0),
    );

    assert_eq!(codes_in_order(&state), vec!["C", "A", "B"]);
    assert_eq!(selected_codes(&state), vec!["C"]);
}

#[test]
fn test_map_click_toggles_region_and_deselect_moves_it_to_tail() {
    let (mut controller, mut state) = loaded_session();

    send(
        &mut controller,
        &mut state,
        AppIntent::RegionClicked {
            world_pos: DVec2::new(15.0, 5.0),
        },
    );
    assert_eq!(codes_in_order(&state), vec!["B", "A", "C"]);

    send(
        &mut controller,
        &mut state,
        AppIntent::RegionClicked {
            world_pos: DVec2::new(15.0, 5.0),
        },
    );
    assert_eq!(codes_in_order(&state), vec!["A", "C", "B"]);
    assert!(selected_codes(&state).is_empty());
}

#[test]
fn test_map_click_is_ignored_while_drawing_tool_is_active() {
    let (mut controller, mut state) = loaded_session();
    send(
        &mut controller,
        &mut state,
        AppIntent::ActivateToolRequested {
            tool: ToolState::DrawPolygon,
        },
    );

    send(
        &mut controller,
        &mut state,
        AppIntent::RegionClicked {
            world_pos: DVec2::new(5.0, 5.0),
        },
    );

    assert!(selected_codes(&state).is_empty());
    assert!(!state
        .command_log
        .entries()
        .iter()
        .any(|entry| entry.contains("ToggleRegionAt")));
}

#[test]
fn test_list_toggle_works_while_drawing_tool_is_active() {
    let (mut controller, mut state) = loaded_session();
    send(
        &mut controller,
        &mut state,
        AppIntent::ActivateToolRequested {
            tool: ToolState::DrawCut,
        },
    );

    send(
        &mut controller,
        &mut state,
        AppIntent::RegionToggleRequested { code: "C".into() },
    );

    assert_eq!(codes_in_order(&state), vec!["C", "A", "B"]);
}

#[test]
fn test_hover_tracks_region_under_cursor() {
    let (mut controller, mut state) = loaded_session();

    send(
        &mut controller,
        &mut state,
        AppIntent::RegionHovered {
            world_pos: Some(DVec2::new(25.0, 5.0)),
        },
    );
    assert_eq!(state.ui.hovered_region.as_deref(), Some("C"));

    send(
        &mut controller,
        &mut state,
        AppIntent::RegionHovered { world_pos: None },
    );
    assert_eq!(state.ui.hovered_region, None);
}

#[test]
fn test_recompute_restores_selection_under_features() {
    let (mut controller, mut state) = loaded_session();
    draw_with(
        &mut controller,
        &mut state,
        ToolState::DrawPolygon,
        rect(1.0, 1.0, 4.0, 4.0),
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::RegionToggleRequested { code: "A".into() },
    );
    assert!(selected_codes(&state).is_empty());

    send(
        &mut controller,
        &mut state,
        AppIntent::RecomputeSelectionsRequested,
    );

    assert_eq!(selected_codes(&state), vec!["A"]);
}
