//! Veränderliche Menge der vom Benutzer gezeichneten Features.

use indexmap::IndexMap;

use super::{Polygon, Shape};

/// Ein vom Benutzer gezeichnetes Feature.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnFeature {
    /// Eindeutige, nie wiederverwendete ID
    pub id: u64,
    /// Aktuelle Geometrie
    pub geometry: Shape,
    /// Opaker Style-Schlüssel der Oberfläche
    pub style: Option<String>,
}

/// Container für die gezeichneten Features in Einfüge-Reihenfolge.
#[derive(Debug, Clone)]
pub struct DrawnStore {
    features: IndexMap<u64, DrawnFeature>,
    next_id: u64,
}

impl DrawnStore {
    /// Erstellt einen leeren Store. IDs beginnen bei 1.
    pub fn new() -> Self {
        Self {
            features: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Fügt eine Geometrie ohne Style hinzu.
    pub fn add(&mut self, geometry: Shape) -> Option<u64> {
        self.add_with_style(geometry, None)
    }

    /// Fügt eine Geometrie hinzu und vergibt eine neue ID.
    ///
    /// Strukturell ungültige Geometrie wird abgelehnt (`None`),
    /// Selbstüberschneidung nur protokolliert.
    pub fn add_with_style(&mut self, geometry: Shape, style: Option<String>) -> Option<u64> {
        if !Self::accepts(&geometry) {
            return None;
        }
        let id = self.allocate_id();
        self.features.insert(
            id,
            DrawnFeature {
                id,
                geometry,
                style,
            },
        );
        log::info!("Feature {} hinzugefügt", id);
        Some(id)
    }

    /// Entfernt ein Feature. Unbekannte IDs sind ein No-op mit Warnung.
    pub fn remove(&mut self, id: u64) -> Option<DrawnFeature> {
        let removed = self.features.shift_remove(&id);
        if removed.is_none() {
            log::warn!("Feature {} nicht gefunden, nichts entfernt", id);
        }
        removed
    }

    /// Ersetzt ein Feature durch ein oder mehrere Polygone an derselben Position.
    ///
    /// Das erste Polygon behält die ID, weitere bekommen neue IDs und folgen
    /// direkt dahinter. Gibt die IDs der Ersatz-Features zurück; `None` (ohne
    /// Änderung) bei unbekannter ID, leerer oder ungültiger Ersatzliste.
    pub fn replace(&mut self, id: u64, pieces: Vec<Polygon>) -> Option<Vec<u64>> {
        let Some(position) = self.features.get_index_of(&id) else {
            log::warn!("Feature {} nicht gefunden, Ersetzen übersprungen", id);
            return None;
        };
        if pieces.is_empty() {
            log::debug!("Leere Ersatzliste für Feature {} ignoriert", id);
            return None;
        }
        if !pieces
            .iter()
            .all(|p| Self::accepts(&Shape::Polygon(p.clone())))
        {
            return None;
        }

        let style = self.features.get(&id).and_then(|f| f.style.clone());
        let mut pieces = pieces.into_iter();
        let mut ids = vec![id];

        if let (Some(first), Some(feature)) = (pieces.next(), self.features.get_mut(&id)) {
            feature.geometry = Shape::Polygon(first);
        }
        for (offset, polygon) in pieces.enumerate() {
            let new_id = self.allocate_id();
            self.features.shift_insert(
                position + 1 + offset,
                new_id,
                DrawnFeature {
                    id: new_id,
                    geometry: Shape::Polygon(polygon),
                    style: style.clone(),
                },
            );
            ids.push(new_id);
        }

        log::info!("Feature {} ersetzt durch {} Feature(s)", id, ids.len());
        Some(ids)
    }

    /// Setzt die Geometrie eines Features (Modify/Translate). `false` bei unbekannter ID
    /// oder ungültiger Geometrie.
    pub fn set_geometry(&mut self, id: u64, geometry: Shape) -> bool {
        if !Self::accepts(&geometry) {
            return false;
        }
        match self.features.get_mut(&id) {
            Some(feature) => {
                feature.geometry = geometry;
                true
            }
            None => {
                log::warn!("Feature {} nicht gefunden, Geometrie nicht gesetzt", id);
                false
            }
        }
    }

    /// Feature per ID.
    pub fn get(&self, id: u64) -> Option<&DrawnFeature> {
        self.features.get(&id)
    }

    /// Alle Features in Reihenfolge.
    pub fn all(&self) -> impl Iterator<Item = &DrawnFeature> {
        self.features.values()
    }

    /// Schnappschuss der aktuellen IDs (für Iteration während Mutation).
    pub fn ids(&self) -> Vec<u64> {
        self.features.keys().copied().collect()
    }

    /// Prüft, ob ein Feature existiert.
    pub fn has(&self, id: u64) -> bool {
        self.features.contains_key(&id)
    }

    /// Anzahl der Features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Gibt `true` zurück, wenn nichts gezeichnet ist.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Entfernt alle Features. IDs werden nicht zurückgesetzt.
    pub fn clear(&mut self) {
        self.features.clear();
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn accepts(geometry: &Shape) -> bool {
        if let Err(e) = geometry.validate() {
            log::warn!("Geometrie abgelehnt: {}", e);
            return false;
        }
        if geometry.has_self_intersection() {
            log::warn!("Geometrie überschneidet sich selbst");
        }
        true
    }
}

impl Default for DrawnStore {
    fn default() -> Self {
        Self::new()
    }
}
