//! Use-Cases für das Anlegen, Bearbeiten und Entfernen gezeichneter Features.

use glam::DVec2;

use super::region_selection::{resync_after_change, select_regions_by_polygon};
use crate::app::notifications::StateChange;
use crate::app::AppState;
use crate::core::Shape;

/// Legt ein neues Feature an und selektiert alle geschnittenen Regionen.
pub fn add_drawn_feature(state: &mut AppState, shape: Shape, style: Option<String>) -> Option<u64> {
    let id = state.drawn.add_with_style(shape.clone(), style)?;
    state.notify(StateChange::DrawnFeaturesUpdated);
    select_regions_by_polygon(state, &shape, true);
    Some(id)
}

/// Merkt die Geometrie vor einer Bearbeitung (Modify/Translate).
pub fn begin_edit(state: &mut AppState, id: u64) {
    match state.drawn.get(id) {
        Some(feature) => {
            state.editor.session.previous_geometry = Some((id, feature.geometry.clone()));
        }
        None => log::warn!("Feature {} nicht gefunden, Bearbeitung nicht gestartet", id),
    }
}

/// Übernimmt die bearbeitete Geometrie eines Features.
///
/// Deselektiert unter der alten Geometrie, selektiert unter der neuen und
/// gleicht danach alle Features ab.
pub fn end_modify(state: &mut AppState, id: u64, shape: Shape) -> bool {
    let previous = take_previous(state, id);
    if !state.drawn.set_geometry(id, shape) {
        return false;
    }
    state.notify(StateChange::DrawnFeaturesUpdated);
    resync_after_change(state, previous.as_slice());
    log::info!("Feature {} bearbeitet", id);
    true
}

/// Verschiebt ein Feature um `delta` und gleicht die Selektion ab.
pub fn end_translate(state: &mut AppState, id: u64, delta: DVec2) -> bool {
    let Some(mut shape) = state.drawn.get(id).map(|f| f.geometry.clone()) else {
        log::warn!("Feature {} nicht gefunden, Verschieben ignoriert", id);
        state.editor.session.previous_geometry = None;
        return false;
    };
    let previous = take_previous(state, id).unwrap_or_else(|| shape.clone());
    shape.translate(delta);
    if !state.drawn.set_geometry(id, shape) {
        return false;
    }
    state.notify(StateChange::DrawnFeaturesUpdated);
    resync_after_change(state, std::slice::from_ref(&previous));
    log::info!("Feature {} verschoben um ({:.4}, {:.4})", id, delta.x, delta.y);
    true
}

/// Entfernt ein Feature, gleicht die Selektion ab und stellt einen gemerkten
/// Kartenausschnitt wieder her.
pub fn remove_feature(state: &mut AppState, id: u64) -> bool {
    let Some(removed) = state.drawn.remove(id) else {
        return false;
    };
    state.notify(StateChange::DrawnFeaturesUpdated);
    resync_after_change(state, std::slice::from_ref(&removed.geometry));

    if let Some(snapshot) = state.view.viewport_snapshot.take() {
        state.view.camera.restore(snapshot);
        log::debug!("Kartenausschnitt wiederhergestellt");
    }
    log::info!("Feature {} entfernt", id);
    true
}

/// Importiert abgelegte Geometrien als neue Features. Ungültige werden übersprungen.
pub fn import_features(state: &mut AppState, shapes: Vec<Shape>) -> Vec<u64> {
    let total = shapes.len();
    let ids: Vec<u64> = shapes
        .into_iter()
        .filter_map(|shape| add_drawn_feature(state, shape, Some("import".to_string())))
        .collect();
    if ids.len() < total {
        log::warn!("{} von {} importierten Geometrien verworfen", total - ids.len(), total);
    }
    log::info!("{} Feature(s) importiert", ids.len());
    ids
}

/// Entnimmt die gemerkte Geometrie, wenn sie zum Feature gehört.
fn take_previous(state: &mut AppState, id: u64) -> Option<Shape> {
    match state.editor.session.previous_geometry.take() {
        Some((stored, shape)) if stored == id => Some(shape),
        Some((stored, _)) => {
            log::debug!("Gemerkte Geometrie gehört zu {} statt {}", stored, id);
            None
        }
        None => None,
    }
}
