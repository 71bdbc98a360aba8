//! Reihenfolge der Regionsliste: selektierte Regionen vor unselektierten.
//!
//! Invariante: Es gibt einen Index `k`, sodass `L[0..k)` selektiert und
//! `L[k..)` unselektiert ist. Zuletzt aktivierte Regionen stehen vorne.

use std::collections::HashSet;

use indexmap::IndexMap;

use super::Region;

/// Richtung des auslösenden Umschaltens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleDirection {
    /// Regionen wurden selektiert
    Select,
    /// Regionen wurden deselektiert
    Deselect,
}

impl ToggleDirection {
    /// Richtung aus dem gewünschten Zielzustand.
    pub fn from_active(active: bool) -> Self {
        if active {
            Self::Select
        } else {
            Self::Deselect
        }
    }
}

/// Ordnet die Liste nach einem Umschalten neu.
///
/// - `Select`: `[umgeschaltete, übrige selektierte, unselektierte]`
/// - `Deselect`: `[selektierte, übrige unselektierte, umgeschaltete]`
///
/// Innerhalb jeder Gruppe bleibt die bisherige Reihenfolge erhalten.
pub fn reorder(
    regions: IndexMap<String, Region>,
    toggled: &[String],
    direction: ToggleDirection,
) -> IndexMap<String, Region> {
    let toggled: HashSet<&str> = toggled.iter().map(String::as_str).collect();

    let mut front = Vec::new();
    let mut selected = Vec::new();
    let mut unselected = Vec::new();
    let mut back = Vec::new();

    for (code, region) in regions {
        let is_toggled = toggled.contains(code.as_str());
        match (direction, is_toggled, region.selected) {
            (ToggleDirection::Select, true, true) => front.push((code, region)),
            (ToggleDirection::Deselect, true, false) => back.push((code, region)),
            (_, _, true) => selected.push((code, region)),
            (_, _, false) => unselected.push((code, region)),
        }
    }

    front
        .into_iter()
        .chain(selected)
        .chain(unselected)
        .chain(back)
        .collect()
}

/// Prüft die Selektions-Invariante (kein selektierter Eintrag nach einem unselektierten).
pub fn is_selection_ordered<'a>(regions: impl IntoIterator<Item = &'a Region>) -> bool {
    let mut seen_unselected = false;
    for region in regions {
        if region.selected && seen_unselected {
            return false;
        }
        seen_unselected |= !region.selected;
    }
    true
}
