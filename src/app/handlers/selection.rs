//! Handler für Regions-Selektion, Hover und Vergleich.

use glam::DVec2;

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Shape;

/// Schaltet eine Region per Code um.
pub fn toggle_region(state: &mut AppState, code: &str) {
    use_cases::region_selection::toggle_region(state, code);
}

/// Schaltet die Region unter einem Kartenpunkt um.
pub fn toggle_region_at(state: &mut AppState, world_pos: DVec2, tolerance: f64) {
    use_cases::region_selection::toggle_region_at(state, world_pos, tolerance);
}

/// Setzt die Region unter dem Mauszeiger.
pub fn set_hovered(state: &mut AppState, world_pos: Option<DVec2>, tolerance: f64) {
    use_cases::region_selection::set_hovered_region(state, world_pos, tolerance);
}

/// (De)selektiert alle Regionen unter einer Geometrie.
pub fn select_by_polygon(state: &mut AppState, shape: &Shape, active: bool) {
    use_cases::region_selection::select_regions_by_polygon(state, shape, active);
}

/// Baut die Selektion aus allen Features neu auf.
pub fn recompute(state: &mut AppState) {
    use_cases::region_selection::recompute_all_selections(state);
}

/// Stellt die selektierten Regionen gegenüber.
pub fn compare_selected(state: &mut AppState) {
    use_cases::comparison::compare_selected(state);
}
