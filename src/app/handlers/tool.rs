//! Handler für Werkzeug-Wechsel, Skizzen und Werkzeug-Events.

use glam::DVec2;

use crate::app::state::ToolState;
use crate::app::tools::{self, ToolEvent};
use crate::app::use_cases;
use crate::app::AppState;

/// Aktiviert ein Werkzeug (erneut = zurück zu Idle).
pub fn activate(state: &mut AppState, tool: ToolState) {
    tools::activate(state, tool);
}

/// Bricht das aktive Werkzeug ab.
pub fn cancel(state: &mut AppState) {
    tools::cancel(state);
}

/// Fügt einen Skizzen-Punkt hinzu.
pub fn add_sketch_point(state: &mut AppState, world_pos: DVec2) {
    tools::add_sketch_point(state, world_pos);
}

/// Schließt die laufende Skizze ab.
pub fn finish_sketch(state: &mut AppState) {
    tools::finish_sketch(state);
}

/// Leitet ein Werkzeug-Event an den Automaten weiter.
pub fn apply_event(state: &mut AppState, event: ToolEvent) {
    tools::handle_tool_event(state, event);
}

/// Entfernt ein gezeichnetes Feature.
pub fn remove_feature(state: &mut AppState, id: u64) {
    use_cases::feature_edit::remove_feature(state, id);
}
