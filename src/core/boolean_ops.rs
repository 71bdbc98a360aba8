//! Boolesche Polygon-Operationen: Vereinigung, Schnitt ("Cut") und Linien-Split.
//!
//! Die eigentliche Clipping-Arbeit erledigt `geo::BooleanOps`. Dieses Modul legt
//! nur den Vertrag fest: Vorbedingungen, Fan-Out in Einzelpolygone und
//! `None` statt Mutation bei jeder Operation ohne Wirkung.

use geo::BooleanOps;
use glam::DVec2;

use super::predicates::{contains, intersects, line_endpoints_outside, overlaps_partially};
use super::{Polygon, Shape};

/// Standard-Dicke des Linien-Streifens beim Split (Welteinheiten).
pub const DEFAULT_SPLIT_DELTA: f64 = 1e-3;
/// Standard-Mindestfläche, unter der ein Ergebnis-Polygon als degeneriert gilt.
pub const DEFAULT_MIN_AREA: f64 = 1e-9;

/// Welche Lagebeziehungen ein Cut akzeptiert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutMode {
    /// Nur echte Teil-Überlappung; volles Enthaltensein wird abgelehnt
    OverlapOnly,
    /// Zusätzlich volles Enthaltensein; die äußere Shape wird zum Minuenden
    PermitContainment,
}

/// Boolesche Geometrie-Engine mit Toleranzen für Split und Degenerations-Filter.
#[derive(Debug, Clone, Copy)]
pub struct BooleanEngine {
    /// Mindestfläche gültiger Ergebnis-Polygone
    pub min_area: f64,
    /// Breite des Streifens, zu dem eine Schnittlinie verdickt wird
    pub split_delta: f64,
}

impl Default for BooleanEngine {
    fn default() -> Self {
        Self {
            min_area: DEFAULT_MIN_AREA,
            split_delta: DEFAULT_SPLIT_DELTA,
        }
    }
}

impl BooleanEngine {
    /// Erstellt eine Engine mit expliziten Toleranzen.
    pub fn new(min_area: f64, split_delta: f64) -> Self {
        Self {
            min_area,
            split_delta,
        }
    }

    /// Vereinigt `a` und `b`. Nur definiert, wenn sich beide schneiden.
    ///
    /// Berühren sich die Shapes nur in einzelnen Punkten, verschmilzt nichts
    /// (Komponentenzahl bleibt gleich) und das Ergebnis ist `None`.
    pub fn union(&self, a: &Shape, b: &Shape) -> Option<Shape> {
        if !intersects(a, b) {
            log::debug!("Union übersprungen: Shapes schneiden sich nicht");
            return None;
        }
        let merged = a.to_geo().union(&b.to_geo());
        let pieces = self.keep_valid(Shape::from_geo(&merged)?.into_polygons());
        let merged = Shape::from_polygons(pieces)?;
        if merged.component_count() >= a.component_count() + b.component_count() {
            log::debug!("Union übersprungen: Shapes berühren sich nur in Punkten");
            return None;
        }
        Some(merged)
    }

    /// Schneidet `cutter` aus `target` heraus.
    ///
    /// Liefert die Ersatz-Polygone für `target` (Fan-Out pro Komponente) oder
    /// `None`, wenn die Vorbedingung des Modus nicht erfüllt ist oder nur
    /// degenerierte Reste übrig bleiben. Bei `PermitContainment` und einem
    /// `cutter`, der `target` vollständig umschließt, ist das Ergebnis
    /// `cutter − target` (Ring um das bisherige Feature).
    pub fn cut(&self, target: &Shape, cutter: &Shape, mode: CutMode) -> Option<Vec<Polygon>> {
        let (minuend, subtrahend) = match mode {
            CutMode::OverlapOnly => {
                if !overlaps_partially(target, cutter) {
                    log::debug!("Cut übersprungen: keine echte Teil-Überlappung");
                    return None;
                }
                (target, cutter)
            }
            CutMode::PermitContainment => {
                if contains(cutter, target) {
                    (cutter, target)
                } else if contains(target, cutter) || overlaps_partially(target, cutter) {
                    (target, cutter)
                } else {
                    log::debug!("Cut übersprungen: Shapes schneiden sich nicht");
                    return None;
                }
            }
        };

        let difference = minuend.to_geo().difference(&subtrahend.to_geo());
        let pieces = self.keep_valid(Shape::from_geo(&difference)?.into_polygons());
        if pieces.is_empty() {
            return None;
        }
        let remaining: f64 = pieces.iter().map(Polygon::area).sum();
        if remaining >= minuend.area() - self.min_area {
            log::debug!("Cut ohne Wirkung: Fläche unverändert");
            return None;
        }
        Some(pieces)
    }

    /// Teilt `shape` entlang einer Linie mit zwei Endpunkten.
    ///
    /// Beide Endpunkte müssen echt außerhalb liegen. Die Linie wird zu einem
    /// schmalen Viereck verdickt und abgezogen; nur wenn dabei mehr Komponenten
    /// entstehen als vorher, gilt der Split als erfolgt.
    pub fn line_split(&self, shape: &Shape, line: [DVec2; 2]) -> Option<Vec<Polygon>> {
        if line[0] == line[1] {
            log::debug!("Linien-Split übersprungen: Linie hat Länge 0");
            return None;
        }
        if !line_endpoints_outside(line, shape) {
            log::debug!("Linien-Split übersprungen: Endpunkt liegt innerhalb des Polygons");
            return None;
        }

        let strip: Shape = self.thin_quad(line).into();
        let difference = shape.to_geo().difference(&strip.to_geo());
        let pieces = self.keep_valid(Shape::from_geo(&difference)?.into_polygons());

        if pieces.len() <= shape.component_count() {
            log::debug!("Linien-Split ohne Wirkung: Linie durchquert das Polygon nicht");
            return None;
        }
        Some(pieces)
    }

    /// Verdickt eine Linie zu einem Viereck, versetzt um `split_delta` entlang
    /// der Achse, die am wenigsten parallel zur Linie liegt.
    pub fn thin_quad(&self, line: [DVec2; 2]) -> Polygon {
        let [a, b] = line;
        let direction = b - a;
        let offset = if direction.x.abs() >= direction.y.abs() {
            DVec2::new(0.0, self.split_delta)
        } else {
            DVec2::new(self.split_delta, 0.0)
        };
        Polygon::from_exterior(vec![a, b, b + offset, a + offset])
    }

    fn keep_valid(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let before = polygons.len();
        let kept: Vec<Polygon> = polygons
            .into_iter()
            .filter(|p| p.validate().is_ok() && p.area() >= self.min_area)
            .collect();
        if kept.len() < before {
            log::warn!(
                "{} degenerierte Ergebnis-Polygone verworfen",
                before - kept.len()
            );
        }
        kept
    }
}
