//! Gemeinsame Helfer für die Controller-Ablauftests.

use std::path::PathBuf;

use glam::DVec2;
use region_draw::{
    AppController, AppIntent, AppState, EditorOptions, Polygon, Shape, ToolEvent, ToolState,
};

mod boolean;
mod selection;
mod tools;

/// Pfad einer Test-Fixture.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Sitzung mit geladenen Regionen A, B, C (Wartezeit 0 ms).
pub fn loaded_session() -> (AppController, AppState) {
    let options = EditorOptions {
        settle_delay_ms: 0,
        ..EditorOptions::default()
    };
    loaded_session_with(options)
}

/// Sitzung mit geladenen Regionen und eigenen Optionen.
pub fn loaded_session_with(options: EditorOptions) -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::with_options(options);
    controller
        .handle_intent(
            &mut state,
            AppIntent::LoadBoundariesRequested {
                path: fixture("three_counties.geojson"),
            },
        )
        .expect("Fixture sollte laden");
    (controller, state)
}

pub fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Shape {
    Polygon::rectangle(DVec2::new(x0, y0), DVec2::new(x1, y1)).into()
}

/// Regions-Codes in Listen-Reihenfolge.
pub fn codes_in_order(state: &AppState) -> Vec<String> {
    state.regions.iter().map(|r| r.code.clone()).collect()
}

/// Selektierte Regions-Codes in Listen-Reihenfolge.
pub fn selected_codes(state: &AppState) -> Vec<String> {
    state
        .regions
        .iter()
        .filter(|r| r.selected)
        .map(|r| r.code.clone())
        .collect()
}

pub fn total_drawn_area(state: &AppState) -> f64 {
    state.drawn_features().map(|f| f.geometry.area()).sum()
}

pub fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

/// Stellt sicher, dass `tool` aktiv ist (ohne es versehentlich abzuschalten).
pub fn ensure_tool(controller: &mut AppController, state: &mut AppState, tool: ToolState) {
    if state.tool_state() != tool {
        send(controller, state, AppIntent::ActivateToolRequested { tool });
    }
}

/// Schließt mit dem gegebenen Werkzeug eine Polygon-Zeichnung ab.
pub fn draw_with(
    controller: &mut AppController,
    state: &mut AppState,
    tool: ToolState,
    shape: Shape,
) {
    ensure_tool(controller, state, tool);
    send(
        controller,
        state,
        AppIntent::ToolEvent {
            event: ToolEvent::DrawEnd { shape },
        },
    );
}
