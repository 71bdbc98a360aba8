//! Use-Cases für Boolesche Operationen auf den gezeichneten Features.
//!
//! Jede Operation iteriert über einen Schnappschuss der Feature-IDs und ist
//! pro Aufruf alles-oder-nichts: liefert die Engine für kein Feature ein
//! Ergebnis, bleiben Store und Selektion unverändert.

use glam::DVec2;

use super::region_selection::resync_after_change;
use crate::app::notifications::StateChange;
use crate::app::AppState;
use crate::core::predicates::contains;
use crate::core::{CutMode, Polygon, Shape};

/// Geplante Änderung an einem Feature.
enum Edit {
    Replace(u64, Vec<Polygon>),
    Remove(u64),
}

/// Vereinigt das gezeichnete Polygon mit allen Features, die es schneidet.
///
/// Das Ergebnis ersetzt das erste beteiligte Feature, die übrigen werden
/// entfernt. Schneidet das Polygon nichts, wird es verworfen.
pub fn union_with_polygon(state: &mut AppState, drawn: Shape) -> bool {
    let engine = state.boolean_engine();
    let mut merged = drawn;
    let mut merged_ids = Vec::new();

    for id in state.drawn.ids() {
        let Some(feature) = state.drawn.get(id) else {
            continue;
        };
        if let Some(union) = engine.union(&merged, &feature.geometry) {
            merged = union;
            merged_ids.push(id);
        }
    }

    let Some((&first, rest)) = merged_ids.split_first() else {
        log::info!("Vereinigung ohne Wirkung: kein Feature geschnitten");
        return false;
    };

    let mut edits = vec![Edit::Replace(first, merged.into_polygons())];
    edits.extend(rest.iter().map(|&id| Edit::Remove(id)));
    apply_edits(state, edits);
    log::info!("{} Feature(s) vereinigt", merged_ids.len());
    true
}

/// Schneidet ein gezeichnetes Polygon aus den Features heraus.
///
/// `OverlapOnly` verändert nur echt teilweise überlappte Features.
/// `PermitContainment` verändert zusätzlich Features, die den Schnitt
/// vollständig enthalten (Loch) oder von ihm enthalten sind: diese werden
/// durch den Ring `Schnitt − Feature(s)` ersetzt.
pub fn cut_with_polygon(state: &mut AppState, cutter: &Shape, mode: CutMode) -> bool {
    let engine = state.boolean_engine();
    let mut edits = Vec::new();
    let mut ring: Option<(u64, Shape)> = None;
    let mut swallowed = Vec::new();

    for id in state.drawn.ids() {
        let Some(feature) = state.drawn.get(id) else {
            continue;
        };
        let geometry = &feature.geometry;

        if mode == CutMode::PermitContainment && contains(cutter, geometry) {
            let outer = ring.as_ref().map_or(cutter, |(_, shape)| shape);
            let Some(pieces) = engine.cut(geometry, outer, mode) else {
                log::warn!("Feature {} nicht mehr im Ring enthalten, übersprungen", id);
                continue;
            };
            let Some(shape) = Shape::from_polygons(pieces) else {
                continue;
            };
            match ring {
                Some((first, _)) => {
                    ring = Some((first, shape));
                    swallowed.push(id);
                }
                None => ring = Some((id, shape)),
            }
            continue;
        }

        if let Some(pieces) = engine.cut(geometry, cutter, mode) {
            edits.push(Edit::Replace(id, pieces));
        }
    }

    if let Some((id, shape)) = ring {
        edits.push(Edit::Replace(id, shape.into_polygons()));
        edits.extend(swallowed.into_iter().map(Edit::Remove));
    }

    if edits.is_empty() {
        log::info!("Schnitt ohne Wirkung ({:?})", mode);
        return false;
    }
    log::info!("Schnitt ändert {} Feature(s)", edits.len());
    apply_edits(state, edits);
    true
}

/// Teilt alle vollständig durchquerten Features entlang einer Linie.
///
/// Erwartet genau zwei Punkte; beide müssen außerhalb des jeweiligen
/// Features liegen.
pub fn split_with_line(state: &mut AppState, points: &[DVec2]) -> bool {
    let &[a, b] = points else {
        log::warn!("Linien-Schnitt braucht genau 2 Punkte, erhalten: {}", points.len());
        return false;
    };
    let engine = state.boolean_engine();

    let edits: Vec<Edit> = state
        .drawn
        .ids()
        .into_iter()
        .filter_map(|id| {
            let feature = state.drawn.get(id)?;
            engine
                .line_split(&feature.geometry, [a, b])
                .map(|pieces| Edit::Replace(id, pieces))
        })
        .collect();

    if edits.is_empty() {
        log::info!("Linien-Schnitt ohne Wirkung");
        return false;
    }
    log::info!("Linien-Schnitt teilt {} Feature(s)", edits.len());
    apply_edits(state, edits);
    true
}

/// Wendet alle Änderungen an und gleicht die Selektion ab.
fn apply_edits(state: &mut AppState, edits: Vec<Edit>) {
    let mut old_shapes = Vec::with_capacity(edits.len());

    for edit in edits {
        match edit {
            Edit::Replace(id, pieces) => {
                let Some(old) = state.drawn.get(id).map(|f| f.geometry.clone()) else {
                    continue;
                };
                if state.drawn.replace(id, pieces).is_some() {
                    old_shapes.push(old);
                }
            }
            Edit::Remove(id) => {
                if let Some(removed) = state.drawn.remove(id) {
                    old_shapes.push(removed.geometry);
                }
            }
        }
    }

    if old_shapes.is_empty() {
        return;
    }
    state.notify(StateChange::DrawnFeaturesUpdated);
    resync_after_change(state, &old_shapes);
}
