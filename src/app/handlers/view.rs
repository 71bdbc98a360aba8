//! Handler für Kamera und Viewport.

use glam::DVec2;

use crate::app::use_cases;
use crate::app::AppState;

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f64; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Verschiebt die Kamera um ein Weltkoordinaten-Delta.
pub fn pan(state: &mut AppState, delta: DVec2) {
    use_cases::viewport::pan(state, delta);
}

/// Zoomt mit optionalem Fokuspunkt im Weltkoordinatensystem.
pub fn zoom_towards(state: &mut AppState, factor: f64, focus_world: Option<DVec2>) {
    use_cases::viewport::zoom_towards(state, factor, focus_world);
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    use_cases::viewport::zoom_in(state);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    use_cases::viewport::zoom_out(state);
}

/// Passt die Kamera auf alle Regionen an.
pub fn fit_to_regions(state: &mut AppState) {
    use_cases::viewport::fit_to_regions(state);
}
