//! Planare Polygon-Typen: Ringe, Polygone mit Löchern und Multi-Polygone.
//!
//! Ring 0 eines Polygons ist die Außengrenze, alle weiteren Ringe sind Löcher.
//! Ringe sind geschlossen (erster Punkt == letzter Punkt). Die Konvertierung
//! nach `geo` erfolgt nur an der Grenze zur Booleschen Geometrie.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Geschlossener Koordinaten-Ring (erster Punkt == letzter Punkt).
pub type Ring = Vec<DVec2>;

/// Minimale Punktanzahl eines geschlossenen Rings (Dreieck + Schlusspunkt).
pub const MIN_RING_POINTS: usize = 4;

/// Strukturelle Fehler einer Geometrie (Ring-Schluss, Punktanzahl, Koordinaten).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Geometrie ohne einen einzigen Ring
    #[error("Geometrie ist leer")]
    Empty,
    /// Erster und letzter Punkt eines Rings stimmen nicht überein
    #[error("Ring {ring} ist nicht geschlossen")]
    UnclosedRing { ring: usize },
    /// Ring hat weniger als `MIN_RING_POINTS` Punkte
    #[error("Ring {ring} hat nur {count} Punkte (mindestens 4)")]
    TooFewPoints { ring: usize, count: usize },
    /// NaN oder Unendlich in einer Koordinate
    #[error("Ring {ring} enthält nicht-endliche Koordinaten")]
    NonFinite { ring: usize },
}

/// Polygon als geordnete Ring-Liste (Ring 0 = Außengrenze, Rest = Löcher).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    /// Alle Ringe, Außengrenze zuerst
    pub rings: Vec<Ring>,
}

impl Polygon {
    /// Erstellt ein Polygon aus bereits geschlossenen Ringen (ohne Validierung).
    pub fn new(rings: Vec<Ring>) -> Self {
        Self { rings }
    }

    /// Erstellt ein Polygon ohne Löcher und schließt den Ring falls nötig.
    pub fn from_exterior(mut points: Vec<DVec2>) -> Self {
        close_ring(&mut points);
        Self {
            rings: vec![points],
        }
    }

    /// Achsen-alignierte Rechteck-Fläche zwischen zwei Eckpunkten.
    pub fn rectangle(a: DVec2, b: DVec2) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self::from_exterior(vec![
            min,
            DVec2::new(max.x, min.y),
            max,
            DVec2::new(min.x, max.y),
        ])
    }

    /// Außengrenze (Ring 0). Leer, falls das Polygon keine Ringe hat.
    pub fn exterior(&self) -> &[DVec2] {
        self.rings.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Alle Loch-Ringe.
    pub fn holes(&self) -> &[Ring] {
        self.rings.get(1..).unwrap_or(&[])
    }

    /// Prüft die strukturelle Wohlgeformtheit (Schluss, Punktanzahl, endliche Werte).
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.rings.is_empty() {
            return Err(GeometryError::Empty);
        }
        for (ring_index, ring) in self.rings.iter().enumerate() {
            if ring.len() < MIN_RING_POINTS {
                return Err(GeometryError::TooFewPoints {
                    ring: ring_index,
                    count: ring.len(),
                });
            }
            if ring.iter().any(|p| !p.is_finite()) {
                return Err(GeometryError::NonFinite { ring: ring_index });
            }
            if ring.first() != ring.last() {
                return Err(GeometryError::UnclosedRing { ring: ring_index });
            }
        }
        Ok(())
    }

    /// Fläche (Außengrenze minus Löcher), unabhängig von der Orientierung.
    pub fn area(&self) -> f64 {
        let Some((outer, holes)) = self.rings.split_first() else {
            return 0.0;
        };
        let holes_area: f64 = holes.iter().map(|r| ring_signed_area(r).abs()).sum();
        (ring_signed_area(outer).abs() - holes_area).max(0.0)
    }

    /// Bounding-Box (min, max) über alle Ringe.
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        bounds_of(self.rings.iter().flatten().copied())
    }

    /// Verschiebt alle Punkte um `delta`.
    pub fn translate(&mut self, delta: DVec2) {
        for point in self.rings.iter_mut().flatten() {
            *point += delta;
        }
    }

    /// Prüft auf echte Selbstüberschneidungen zwischen nicht benachbarten Kanten.
    ///
    /// Nur für Diagnose-Warnungen; O(n²) über alle Kanten aller Ringe.
    pub fn has_self_intersection(&self) -> bool {
        let edges: Vec<(usize, usize, DVec2, DVec2)> = self
            .rings
            .iter()
            .enumerate()
            .flat_map(|(ring_index, ring)| {
                ring.windows(2)
                    .enumerate()
                    .map(move |(edge_index, w)| (ring_index, edge_index, w[0], w[1]))
            })
            .collect();

        for (i, &(ring_a, edge_a, a0, a1)) in edges.iter().enumerate() {
            for &(ring_b, edge_b, b0, b1) in edges.iter().skip(i + 1) {
                if ring_a == ring_b {
                    let ring_edges = self.rings[ring_a].len() - 1;
                    let adjacent = edge_b == edge_a + 1 || (edge_a == 0 && edge_b + 1 == ring_edges);
                    if adjacent {
                        continue;
                    }
                }
                if segments_cross(a0, a1, b0, b1) {
                    return true;
                }
            }
        }
        false
    }

    /// Konvertiert in ein `geo`-Polygon.
    pub fn to_geo(&self) -> geo::Polygon<f64> {
        let mut rings = self.rings.iter().map(|ring| ring_to_geo(ring));
        let exterior = rings
            .next()
            .unwrap_or_else(|| geo::LineString::new(Vec::new()));
        geo::Polygon::new(exterior, rings.collect())
    }

    /// Konvertiert ein `geo`-Polygon zurück (Ringe sind dort bereits geschlossen).
    pub fn from_geo(polygon: &geo::Polygon<f64>) -> Self {
        let mut rings = Vec::with_capacity(1 + polygon.interiors().len());
        rings.push(ring_from_geo(polygon.exterior()));
        rings.extend(polygon.interiors().iter().map(ring_from_geo));
        Self { rings }
    }
}

/// Geometrie eines Features oder einer Regionsgrenze: Polygon oder Multi-Polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Einzelnes Polygon
    Polygon(Polygon),
    /// Mehrere getrennte Polygone
    MultiPolygon(Vec<Polygon>),
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}

impl Shape {
    /// Baut eine Shape aus einer Polygon-Liste. `None` bei leerer Liste.
    pub fn from_polygons(mut polygons: Vec<Polygon>) -> Option<Self> {
        match polygons.len() {
            0 => None,
            1 => polygons.pop().map(Shape::Polygon),
            _ => Some(Shape::MultiPolygon(polygons)),
        }
    }

    /// Alle enthaltenen Polygone als Slice.
    pub fn polygons(&self) -> &[Polygon] {
        match self {
            Shape::Polygon(polygon) => std::slice::from_ref(polygon),
            Shape::MultiPolygon(polygons) => polygons,
        }
    }

    /// Zerlegt die Shape in ihre Polygone.
    pub fn into_polygons(self) -> Vec<Polygon> {
        match self {
            Shape::Polygon(polygon) => vec![polygon],
            Shape::MultiPolygon(polygons) => polygons,
        }
    }

    /// Anzahl der Polygon-Komponenten.
    pub fn component_count(&self) -> usize {
        self.polygons().len()
    }

    /// Ob die Shape ein Multi-Polygon ist.
    pub fn is_multi(&self) -> bool {
        matches!(self, Shape::MultiPolygon(_))
    }

    /// Gesamtfläche aller Komponenten.
    pub fn area(&self) -> f64 {
        self.polygons().iter().map(Polygon::area).sum()
    }

    /// Bounding-Box (min, max) über alle Komponenten.
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        bounds_of(self.polygons().iter().flat_map(|p| p.rings.iter().flatten().copied()))
    }

    /// Verschiebt alle Komponenten um `delta`.
    pub fn translate(&mut self, delta: DVec2) {
        match self {
            Shape::Polygon(polygon) => polygon.translate(delta),
            Shape::MultiPolygon(polygons) => polygons.iter_mut().for_each(|p| p.translate(delta)),
        }
    }

    /// Prüft die strukturelle Wohlgeformtheit aller Komponenten.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let polygons = self.polygons();
        if polygons.is_empty() {
            return Err(GeometryError::Empty);
        }
        polygons.iter().try_for_each(Polygon::validate)
    }

    /// Ob irgendeine Komponente Selbstüberschneidungen hat.
    pub fn has_self_intersection(&self) -> bool {
        self.polygons().iter().any(Polygon::has_self_intersection)
    }

    /// Konvertiert in ein `geo`-MultiPolygon (einheitlicher Operand für Prädikate).
    pub fn to_geo(&self) -> geo::MultiPolygon<f64> {
        geo::MultiPolygon::new(self.polygons().iter().map(Polygon::to_geo).collect())
    }

    /// Konvertiert ein `geo`-MultiPolygon zurück. `None` bei leerem Ergebnis.
    pub fn from_geo(multi: &geo::MultiPolygon<f64>) -> Option<Self> {
        Self::from_polygons(multi.0.iter().map(Polygon::from_geo).collect())
    }
}

/// Schließt einen Ring, falls letzter und erster Punkt verschieden sind.
pub fn close_ring(points: &mut Ring) {
    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        if first != last {
            points.push(first);
        }
    }
}

/// Vorzeichenbehaftete Fläche eines geschlossenen Rings (Shoelace, CCW positiv).
pub fn ring_signed_area(ring: &[DVec2]) -> f64 {
    ring.windows(2).map(|w| w[0].perp_dot(w[1])).sum::<f64>() * 0.5
}

fn bounds_of(points: impl Iterator<Item = DVec2>) -> Option<(DVec2, DVec2)> {
    points.fold(None, |acc, p| match acc {
        None => Some((p, p)),
        Some((min, max)) => Some((min.min(p), max.max(p))),
    })
}

/// Echte Kreuzung zweier Strecken (Berührung an Endpunkten zählt nicht).
fn segments_cross(a0: DVec2, a1: DVec2, b0: DVec2, b1: DVec2) -> bool {
    let d1 = (a1 - a0).perp_dot(b0 - a0);
    let d2 = (a1 - a0).perp_dot(b1 - a0);
    let d3 = (b1 - b0).perp_dot(a0 - b0);
    let d4 = (b1 - b0).perp_dot(a1 - b0);
    d1 * d2 < 0.0 && d3 * d4 < 0.0
}

fn ring_to_geo(ring: &[DVec2]) -> geo::LineString<f64> {
    geo::LineString::new(
        ring.iter()
            .map(|p| geo::Coord { x: p.x, y: p.y })
            .collect(),
    )
}

fn ring_from_geo(line: &geo::LineString<f64>) -> Ring {
    let mut ring: Ring = line.coords().map(|c| DVec2::new(c.x, c.y)).collect();
    close_ring(&mut ring);
    ring
}
