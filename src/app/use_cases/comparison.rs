//! Use-Case: Gegenüberstellung der selektierten Regionen.

use crate::app::AppState;
use crate::core::ComparisonSummary;

/// Berechnet Fall- und Hospitalisierungs-Prozente der selektierten Regionen.
///
/// Das Ergebnis liegt danach in `state.ui.comparison`.
pub fn compare_selected(state: &mut AppState) {
    let summary = ComparisonSummary::build(
        state
            .regions
            .iter()
            .filter(|r| r.selected)
            .map(|r| (r.code.as_str(), r.name.as_str(), r.attributes.as_ref())),
    );
    log::info!("{} Region(en) verglichen", summary.entries.len());
    state.ui.comparison = Some(summary);
}
