//! Spatial-Index (KD-Tree) für schnelle Kandidaten-Suche unter den Regionsgrenzen.
//!
//! Indexiert wird der Mittelpunkt der Bounding-Box jeder Region; Regionen mit
//! identischem Mittelpunkt teilen sich einen Baum-Eintrag. Eine Abfrage
//! sucht im Radius `Abfrage-Halbdiagonale + größter Regions-Radius` und filtert
//! danach exakt über die Bounding-Boxen. Das Ergebnis ist eine konservative
//! Kandidatenmenge für die exakten Prädikate.

use std::collections::HashMap;

use glam::DVec2;
use kiddo::{KdTree, SquaredEuclidean};

use super::predicates::bounds_overlap;
use super::Shape;

/// Read-only Spatial-Index über allen Regionsgrenzen.
#[derive(Debug, Clone)]
pub struct RegionIndex {
    tree: KdTree<f64, 2>,
    /// Regions-Indizes pro Baum-Eintrag (ein Eintrag je eindeutigem Mittelpunkt)
    slots: Vec<Vec<usize>>,
    codes: Vec<String>,
    bounds: Vec<(DVec2, DVec2)>,
    max_radius: f64,
}

impl RegionIndex {
    /// Erstellt einen leeren Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            slots: Vec::new(),
            codes: Vec::new(),
            bounds: Vec::new(),
            max_radius: 0.0,
        }
    }

    /// Baut den Index aus (Code, Grenze)-Paaren. Grenzen ohne Punkte werden übersprungen.
    pub fn from_boundaries<'a>(boundaries: impl IntoIterator<Item = (&'a str, &'a Shape)>) -> Self {
        let mut codes = Vec::new();
        let mut bounds = Vec::new();
        let mut entries: Vec<[f64; 2]> = Vec::new();
        let mut slots: Vec<Vec<usize>> = Vec::new();
        let mut slot_by_center: HashMap<[u64; 2], usize> = HashMap::new();
        let mut max_radius: f64 = 0.0;

        for (code, shape) in boundaries {
            let Some((min, max)) = shape.bounds() else {
                continue;
            };
            let center = (min + max) * 0.5;
            max_radius = max_radius.max((max - min).length() * 0.5);
            // kiddo erlaubt nur begrenzt viele Punkte an exakt derselben Stelle
            let key = [center.x.to_bits(), center.y.to_bits()];
            let slot = *slot_by_center.entry(key).or_insert_with(|| {
                entries.push([center.x, center.y]);
                slots.push(Vec::new());
                slots.len() - 1
            });
            slots[slot].push(codes.len());
            codes.push(code.to_string());
            bounds.push((min, max));
        }

        Self {
            tree: (&entries).into(),
            slots,
            codes,
            bounds,
            max_radius,
        }
    }

    /// Anzahl indexierter Regionen.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Gibt `true` zurück, wenn keine Regionen im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Codes aller Regionen, deren Bounding-Box das Rechteck (min, max) berührt.
    pub fn candidates_in_rect(&self, min: DVec2, max: DVec2) -> Vec<&str> {
        if self.is_empty() {
            return Vec::new();
        }

        let center = (min + max) * 0.5;
        let radius = (max - min).length() * 0.5 + self.max_radius;

        let mut hits: Vec<usize> = self
            .tree
            .within::<SquaredEuclidean>(&[center.x, center.y], radius * radius)
            .into_iter()
            .filter_map(|entry| self.slots.get(entry.item as usize))
            .flatten()
            .copied()
            .filter(|&index| {
                self.bounds
                    .get(index)
                    .is_some_and(|&b| bounds_overlap(b, (min, max)))
            })
            .collect();
        // Eingabereihenfolge statt Distanz-Reihenfolge (deterministisch)
        hits.sort_unstable();

        hits.into_iter()
            .filter_map(|index| self.codes.get(index).map(String::as_str))
            .collect()
    }

    /// Codes aller Regionen, deren Bounding-Box die Shape berührt.
    pub fn candidates_for(&self, shape: &Shape) -> Vec<&str> {
        match shape.bounds() {
            Some((min, max)) => self.candidates_in_rect(min, max),
            None => Vec::new(),
        }
    }

    /// Codes aller Regionen, deren Bounding-Box den Punkt enthält.
    pub fn candidates_at(&self, point: DVec2) -> Vec<&str> {
        self.candidates_in_rect(point, point)
    }
}

impl Default for RegionIndex {
    fn default() -> Self {
        Self::empty()
    }
}
