//! Use-Case-Funktionen für Kamera und Viewport.

use glam::DVec2;

use crate::app::AppState;

/// Aktualisiert die Viewport-Größe (Pixel). Nicht-positive Werte werden ignoriert.
pub fn resize(state: &mut AppState, size: [f64; 2]) {
    let size = DVec2::from(size);
    if size.x <= 0.0 || size.y <= 0.0 {
        log::debug!("Viewport-Größe {:?} ignoriert", size);
        return;
    }
    state.view.viewport_size = size;
}

/// Verschiebt die Kamera um ein Welt-Delta.
pub fn pan(state: &mut AppState, delta: DVec2) {
    state.view.camera.pan(delta);
}

/// Zoomt auf einen optionalen Fokuspunkt hin.
///
/// Falls `focus_world` angegeben ist, bleibt der Welt-Punkt unter
/// der Maus nach dem Zoom an derselben Bildschirmposition.
pub fn zoom_towards(state: &mut AppState, factor: f64, focus_world: Option<DVec2>) {
    let old_zoom = state.view.camera.zoom;
    state.view.camera.zoom_by(factor);
    if let Some(focus) = focus_world {
        let scale = old_zoom / state.view.camera.zoom;
        state.view.camera.position = focus + (state.view.camera.position - focus) * scale;
    }
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    let step = state.options.camera_zoom_step;
    state.view.camera.zoom_by(step);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    let step = state.options.camera_zoom_step;
    state.view.camera.zoom_by(1.0 / step);
}

/// Passt die Kamera auf die Ausdehnung aller Regionen an.
///
/// Keine Operation ohne geladene Regionen.
pub fn fit_to_regions(state: &mut AppState) {
    let bounds = state
        .regions
        .iter()
        .filter_map(|r| r.boundary().bounds())
        .reduce(|(amin, amax), (bmin, bmax)| (amin.min(bmin), amax.max(bmax)));

    let Some((min, max)) = bounds else {
        log::debug!("Keine Regionen geladen, Einpassen übersprungen");
        return;
    };
    let size = state.view.viewport_size;
    state.view.camera.fit_bounds(min, max, size);
    log::info!(
        "Kamera eingepasst auf ({:.3}, {:.3})..({:.3}, {:.3})",
        min.x,
        min.y,
        max.x,
        max.y
    );
}

/// Pick-Toleranz in Welteinheiten aus der Pixel-Option.
pub fn pick_tolerance_world(state: &AppState) -> f64 {
    state.options.region_pick_tolerance_px
        * state.view.camera.world_per_pixel(state.view.viewport_size.y)
}
