//! Geordnete Regionsliste mit Selektions-Invariante.

use indexmap::IndexMap;

use super::selection_order::{is_selection_ordered, reorder, ToggleDirection};
use super::{Region, RegionIndex};

/// Fehler beim Aufbau einer Regionsliste.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Regions-Code '{0}' ist doppelt vergeben")]
pub struct DuplicateRegionCode(pub String);

/// Alle Regionen der Basis-Ebene in Anzeige-Reihenfolge.
///
/// Die Reihenfolge hält stets: selektierte vor unselektierten, zuletzt
/// selektierte zuerst. Die Grenzen sind nach dem Laden unveränderlich.
#[derive(Debug, Clone, Default)]
pub struct RegionList {
    regions: IndexMap<String, Region>,
    index: RegionIndex,
}

impl RegionList {
    /// Erstellt eine leere Liste.
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut die Liste aus geladenen Regionen in Eingabereihenfolge.
    ///
    /// Bereits selektierte Regionen werden stabil nach vorne sortiert.
    pub fn from_regions(
        regions: impl IntoIterator<Item = Region>,
    ) -> Result<Self, DuplicateRegionCode> {
        let mut map = IndexMap::new();
        for region in regions {
            if map.contains_key(&region.code) {
                return Err(DuplicateRegionCode(region.code));
            }
            map.insert(region.code.clone(), region);
        }
        let map = reorder(map, &[], ToggleDirection::Select);
        let index =
            RegionIndex::from_boundaries(map.values().map(|r| (r.code.as_str(), r.boundary())));
        Ok(Self {
            regions: map,
            index,
        })
    }

    /// Anzahl der Regionen.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Gibt `true` zurück, wenn keine Regionen geladen sind.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Iteriert in Anzeige-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.values()
    }

    /// Codes in Anzeige-Reihenfolge.
    pub fn codes(&self) -> Vec<&str> {
        self.regions.keys().map(String::as_str).collect()
    }

    /// Region per Code.
    pub fn get(&self, code: &str) -> Option<&Region> {
        self.regions.get(code)
    }

    /// Veränderlicher Zugriff; nur Attribute sind von außen sinnvoll änderbar.
    pub fn get_mut(&mut self, code: &str) -> Option<&mut Region> {
        self.regions.get_mut(code)
    }

    /// Position einer Region in der Anzeige-Reihenfolge.
    pub fn position(&self, code: &str) -> Option<usize> {
        self.regions.get_index_of(code)
    }

    /// Codes aller selektierten Regionen (Anzeige-Reihenfolge).
    pub fn selected_codes(&self) -> Vec<&str> {
        self.regions
            .values()
            .filter(|r| r.selected)
            .map(|r| r.code.as_str())
            .collect()
    }

    /// Anzahl selektierter Regionen.
    pub fn selected_count(&self) -> usize {
        self.regions.values().filter(|r| r.selected).count()
    }

    /// Spatial-Index über den Grenzen.
    pub fn spatial_index(&self) -> &RegionIndex {
        &self.index
    }

    /// Setzt das Selektionsflag für `codes` und ordnet die Liste neu.
    ///
    /// Nur Regionen, deren Flag sich tatsächlich ändert, gelten als umgeschaltet.
    /// Gibt deren Codes zurück (leer = keine Änderung, keine Neuordnung).
    pub fn apply_selection<S: AsRef<str>>(&mut self, codes: &[S], active: bool) -> Vec<String> {
        let mut toggled = Vec::new();
        for code in codes {
            let code = code.as_ref();
            match self.regions.get_mut(code) {
                Some(region) if region.selected != active => {
                    region.selected = active;
                    toggled.push(region.code.clone());
                }
                Some(_) => {}
                None => log::warn!("Unbekannter Regions-Code {} ignoriert", code),
            }
        }

        if !toggled.is_empty() {
            let regions = std::mem::take(&mut self.regions);
            self.regions = reorder(regions, &toggled, ToggleDirection::from_active(active));
            debug_assert!(is_selection_ordered(self.regions.values()));
        }
        toggled
    }

    /// Schaltet eine einzelne Region um. Gibt den neuen Zustand zurück.
    pub fn toggle(&mut self, code: &str) -> Option<bool> {
        let active = !self.regions.get(code)?.selected;
        self.apply_selection(&[code], active);
        Some(active)
    }

    /// Prüft die Selektions-Invariante.
    pub fn is_ordered(&self) -> bool {
        is_selection_ordered(self.regions.values())
    }
}
