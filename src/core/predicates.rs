//! Räumliche Prädikate zwischen Shapes: Schnitt, Enthaltensein, Punkt-Lage.
//!
//! Alle Prädikate prüfen zuerst die Bounding-Boxen und delegieren erst dann
//! an die DE-9IM-Relation von `geo`.

use geo::coordinate_position::{CoordPos, CoordinatePosition};
use geo::dimensions::Dimensions;
use geo::relate::IntersectionMatrix;
use geo::Relate;
use glam::DVec2;

use super::Shape;

/// Ob sich zwei achsen-alignierte Boxen (min, max) berühren oder überlappen.
pub fn bounds_overlap(a: (DVec2, DVec2), b: (DVec2, DVec2)) -> bool {
    a.0.x <= b.1.x && b.0.x <= a.1.x && a.0.y <= b.1.y && b.0.y <= a.1.y
}

fn shapes_may_touch(a: &Shape, b: &Shape) -> bool {
    match (a.bounds(), b.bounds()) {
        (Some(ba), Some(bb)) => bounds_overlap(ba, bb),
        _ => false,
    }
}

/// Ob `a` und `b` mindestens einen Punkt gemeinsam haben (symmetrisch).
pub fn intersects(a: &Shape, b: &Shape) -> bool {
    if !shapes_may_touch(a, b) {
        return false;
    }
    a.to_geo().relate(&b.to_geo()).is_intersects()
}

/// Ob `a` die Shape `b` vollständig enthält.
///
/// Berührung des Randes von innen zählt als enthalten; für verschiedene
/// Shapes gilt nie gleichzeitig `contains(a, b)` und `contains(b, a)`.
pub fn contains(a: &Shape, b: &Shape) -> bool {
    if !shapes_may_touch(a, b) {
        return false;
    }
    a.to_geo().relate(&b.to_geo()).is_contains()
}

fn interiors_meet(matrix: &IntersectionMatrix) -> bool {
    matrix.get(CoordPos::Inside, CoordPos::Inside) != Dimensions::Empty
}

/// Ob sich die Innenflächen schneiden. Reine Rand-Berührung zählt nicht.
pub fn interiors_intersect(a: &Shape, b: &Shape) -> bool {
    if !shapes_may_touch(a, b) {
        return false;
    }
    interiors_meet(&a.to_geo().relate(&b.to_geo()))
}

/// Teilweise Überlappung: Innenflächen schneiden sich, keine Shape enthält die andere.
pub fn overlaps_partially(a: &Shape, b: &Shape) -> bool {
    if !shapes_may_touch(a, b) {
        return false;
    }
    let matrix = a.to_geo().relate(&b.to_geo());
    interiors_meet(&matrix) && !matrix.is_contains() && !matrix.is_within()
}

fn position_of(point: DVec2, shape: &Shape) -> CoordPos {
    shape
        .to_geo()
        .coordinate_position(&geo::Coord {
            x: point.x,
            y: point.y,
        })
}

/// Ob der Punkt innerhalb der Shape oder auf ihrem Rand liegt.
pub fn point_in_shape(point: DVec2, shape: &Shape) -> bool {
    if let Some((min, max)) = shape.bounds() {
        if !bounds_overlap((point, point), (min, max)) {
            return false;
        }
    }
    position_of(point, shape) != CoordPos::Outside
}

/// Ob der Punkt echt außerhalb liegt (Rand zählt nicht als außen).
pub fn point_strictly_outside(point: DVec2, shape: &Shape) -> bool {
    !point_in_shape(point, shape)
}

/// Ob beide Endpunkte einer Linie echt außerhalb der Shape liegen.
pub fn line_endpoints_outside(line: [DVec2; 2], shape: &Shape) -> bool {
    line.iter().all(|&p| point_strictly_outside(p, shape))
}
