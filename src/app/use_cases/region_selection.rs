//! Use-Cases für die Regions-Selektion aus Geometrie und Klicks.

use std::collections::HashSet;

use glam::DVec2;

use crate::app::notifications::StateChange;
use crate::app::AppState;
use crate::core::predicates::{intersects, point_in_shape};
use crate::core::{Polygon, RegionList, Shape};

/// Setzt `selected = active` für jede Region, deren Grenze die Shape schneidet.
///
/// Nur Regionen mit tatsächlicher Zustandsänderung gelten als umgeschaltet
/// und werden neu einsortiert. Gibt deren Codes zurück.
pub fn select_regions_by_polygon(state: &mut AppState, shape: &Shape, active: bool) -> Vec<String> {
    let hits = regions_intersecting(&state.regions, shape);
    set_selection(state, &hits, active)
}

fn set_selection(state: &mut AppState, codes: &[String], active: bool) -> Vec<String> {
    let toggled = state.regions.apply_selection(codes, active);

    if !toggled.is_empty() {
        log::info!(
            "{} Region(en) {}: {}",
            toggled.len(),
            if active { "selektiert" } else { "deselektiert" },
            toggled.join(", ")
        );
        state.notify(StateChange::RegionListUpdated);
    }
    toggled
}

/// Selektiert erneut alle Regionen unter allen gezeichneten Features.
///
/// Iteriert über einen Schnappschuss der Features; idempotent.
pub fn recompute_all_selections(state: &mut AppState) {
    let shapes: Vec<Shape> = state.drawn.all().map(|f| f.geometry.clone()).collect();
    for shape in &shapes {
        select_regions_by_polygon(state, shape, true);
    }
}

/// Gleicht die Selektion nach einer Geometrie-Änderung ab.
///
/// Deselektiert werden nur Regionen unter den alten Geometrien, die kein
/// verbleibendes Feature mehr bedeckt; selektiert werden nur neu bedeckte.
/// Regionen ohne Netto-Änderung behalten ihren Listenplatz.
pub fn resync_after_change(state: &mut AppState, old_shapes: &[Shape]) {
    let covered: HashSet<String> = state
        .drawn
        .all()
        .flat_map(|feature| regions_intersecting(&state.regions, &feature.geometry))
        .collect();

    let released: Vec<String> = old_shapes
        .iter()
        .flat_map(|shape| regions_intersecting(&state.regions, shape))
        .filter(|code| !covered.contains(code))
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    let released = in_list_order(&state.regions, released);
    set_selection(state, &released, false);

    let gained = in_list_order(&state.regions, covered.into_iter().collect());
    set_selection(state, &gained, true);
}

fn in_list_order(regions: &RegionList, mut codes: Vec<String>) -> Vec<String> {
    codes.sort_by_key(|code| regions.position(code));
    codes
}

/// Schaltet eine einzelne Region um (Listen-Klick).
pub fn toggle_region(state: &mut AppState, code: &str) {
    match state.regions.toggle(code) {
        Some(selected) => {
            log::info!(
                "Region {} {}",
                code,
                if selected { "selektiert" } else { "deselektiert" }
            );
            state.notify(StateChange::RegionListUpdated);
        }
        None => log::warn!("Region {} nicht gefunden", code),
    }
}

/// Schaltet die Region unter einem Kartenpunkt um.
pub fn toggle_region_at(state: &mut AppState, world_pos: DVec2, tolerance: f64) {
    match region_at_point(&state.regions, world_pos, tolerance) {
        Some(code) => toggle_region(state, &code),
        None => log::debug!("Keine Region an ({:.4}, {:.4})", world_pos.x, world_pos.y),
    }
}

/// Merkt die Region unter dem Mauszeiger für den Tooltip.
pub fn set_hovered_region(state: &mut AppState, world_pos: Option<DVec2>, tolerance: f64) {
    state.ui.hovered_region =
        world_pos.and_then(|pos| region_at_point(&state.regions, pos, tolerance));
}

/// Region unter einem Punkt. Bei Überlappung gewinnt die kleinste Fläche.
///
/// Mit `tolerance > 0` zählen auch Regionen, die ein Quadrat dieser halben
/// Kantenlänge um den Punkt berühren.
pub fn region_at_point(regions: &RegionList, point: DVec2, tolerance: f64) -> Option<String> {
    let reach = DVec2::splat(tolerance.max(0.0));
    let probe: Option<Shape> =
        (tolerance > 0.0).then(|| Polygon::rectangle(point - reach, point + reach).into());

    regions
        .spatial_index()
        .candidates_in_rect(point - reach, point + reach)
        .into_iter()
        .filter_map(|code| regions.get(code))
        .filter(|region| {
            point_in_shape(point, region.boundary())
                || probe
                    .as_ref()
                    .is_some_and(|p| intersects(region.boundary(), p))
        })
        .min_by(|a, b| a.boundary().area().total_cmp(&b.boundary().area()))
        .map(|region| region.code.clone())
}

/// Codes aller Regionen, deren Grenze die Shape schneidet (Listenreihenfolge).
fn regions_intersecting(regions: &RegionList, shape: &Shape) -> Vec<String> {
    let mut hits: Vec<String> = regions
        .spatial_index()
        .candidates_for(shape)
        .into_iter()
        .filter(|code| {
            regions
                .get(code)
                .is_some_and(|region| intersects(region.boundary(), shape))
        })
        .map(str::to_string)
        .collect();
    hits.sort_by_key(|code| regions.position(code));
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Region;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Shape {
        Polygon::rectangle(DVec2::new(x0, y0), DVec2::new(x1, y1)).into()
    }

    fn state() -> AppState {
        let mut state = AppState::new();
        state.regions = RegionList::from_regions([
            Region::new("A", "Alpha", rect(0.0, 0.0, 10.0, 10.0)),
            Region::new("B", "Beta", rect(10.0, 0.0, 20.0, 10.0)),
            Region::new("C", "Gamma", rect(20.0, 0.0, 30.0, 10.0)),
            Region::new("S", "Small", rect(2.0, 2.0, 4.0, 4.0)),
        ])
        .expect("Liste erwartet");
        state
    }

    #[test]
    fn only_changed_regions_count_as_toggled() {
        let mut state = state();
        let first = select_regions_by_polygon(&mut state, &rect(12.0, 2.0, 22.0, 4.0), true);
        assert_eq!(first, vec!["B", "C"]);

        let second = select_regions_by_polygon(&mut state, &rect(15.0, 2.0, 25.0, 4.0), true);
        assert!(second.is_empty());
        assert!(state.regions.is_ordered());
    }

    #[test]
    fn smallest_region_wins_on_overlap() {
        let state = state();
        assert_eq!(
            region_at_point(&state.regions, DVec2::new(3.0, 3.0), 0.0),
            Some("S".to_string())
        );
        assert_eq!(
            region_at_point(&state.regions, DVec2::new(7.0, 7.0), 0.0),
            Some("A".to_string())
        );
        assert_eq!(region_at_point(&state.regions, DVec2::new(50.0, 5.0), 0.0), None);
    }

    #[test]
    fn tolerance_reaches_nearby_region() {
        let state = state();
        assert_eq!(region_at_point(&state.regions, DVec2::new(30.5, 5.0), 0.0), None);
        assert_eq!(
            region_at_point(&state.regions, DVec2::new(30.5, 5.0), 1.0),
            Some("C".to_string())
        );
    }

    #[test]
    fn resync_keeps_order_of_regions_still_covered() {
        let mut state = state();
        let on_a = state.drawn.add(rect(2.0, 6.0, 5.0, 8.0)).expect("ID erwartet");
        select_regions_by_polygon(&mut state, &rect(2.0, 6.0, 5.0, 8.0), true);
        state.drawn.add(rect(12.0, 2.0, 14.0, 4.0));
        select_regions_by_polygon(&mut state, &rect(12.0, 2.0, 14.0, 4.0), true);
        assert_eq!(state.regions.selected_codes(), vec!["B", "A"]);

        let old = state.drawn.get(on_a).expect("Feature erwartet").geometry.clone();
        state
            .drawn
            .replace(on_a, rect(2.0, 6.0, 3.0, 8.0).into_polygons())
            .expect("Ersatz erwartet");
        state.pending_changes.drain();
        resync_after_change(&mut state, &[old]);

        assert_eq!(state.regions.selected_codes(), vec!["B", "A"]);
        assert!(state.pending_changes.is_empty());
    }

    #[test]
    fn resync_releases_only_uncovered_regions() {
        let mut state = state();
        let id = state.drawn.add(rect(2.0, 6.0, 5.0, 8.0)).expect("ID erwartet");
        select_regions_by_polygon(&mut state, &rect(2.0, 6.0, 5.0, 8.0), true);
        toggle_region(&mut state, "C");

        let removed = state.drawn.remove(id).expect("Feature erwartet");
        resync_after_change(&mut state, &[removed.geometry]);

        assert_eq!(state.regions.selected_codes(), vec!["C"]);
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut state = state();
        state.drawn.add(rect(12.0, 2.0, 14.0, 4.0));
        recompute_all_selections(&mut state);
        let before: Vec<String> = state.regions.codes().iter().map(|c| c.to_string()).collect();
        recompute_all_selections(&mut state);
        let after: Vec<String> = state.regions.codes().iter().map(|c| c.to_string()).collect();
        assert_eq!(before, after);
        assert_eq!(state.regions.selected_codes(), vec!["B"]);
    }
}
