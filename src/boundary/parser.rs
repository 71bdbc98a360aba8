//! Parser für Regionsgrenzen im GeoJSON-FeatureCollection-Format.
//!
//! Property-Werte dürfen String, Zahl oder Array (erstes Element zählt) sein.
//! Unterstützt werden Polygon- und MultiPolygon-Geometrien mit genau zwei
//! Werten pro Koordinate.

use glam::DVec2;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::BoundaryError;
use crate::core::{Polygon, Region, Ring, Shape};

/// Welche Properties Code und Name einer Region liefern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryKeys {
    /// Property mit dem eindeutigen Regions-Code
    pub code: String,
    /// Property mit dem Anzeigenamen
    pub name: String,
}

impl BoundaryKeys {
    /// Erstellt Keys aus zwei Property-Namen.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

impl Default for BoundaryKeys {
    fn default() -> Self {
        Self::new(
            crate::shared::CODE_PROPERTY,
            crate::shared::NAME_PROPERTY,
        )
    }
}

#[derive(Debug, Deserialize)]
struct RawCollection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    geometry: Option<RawGeometry>,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: Value,
}

type RawRing = Vec<Vec<f64>>;

/// Parsed eine FeatureCollection in Regionen (Eingabereihenfolge, unselektiert).
///
/// Prüft nur die Struktur; doppelte Codes werden beim Aufbau der
/// Regionsliste erkannt.
pub fn parse_feature_collection(
    json: &str,
    keys: &BoundaryKeys,
) -> Result<Vec<Region>, BoundaryError> {
    let collection: RawCollection = serde_json::from_str(json)?;
    if collection.kind != "FeatureCollection" {
        return Err(BoundaryError::NotFeatureCollection(collection.kind));
    }

    let mut regions = Vec::with_capacity(collection.features.len());
    for (index, feature) in collection.features.into_iter().enumerate() {
        regions.push(parse_feature(index, feature, keys)?);
    }
    log::debug!("{} Features geparst", regions.len());
    Ok(regions)
}

fn parse_feature(
    index: usize,
    feature: RawFeature,
    keys: &BoundaryKeys,
) -> Result<Region, BoundaryError> {
    let properties = feature.properties.unwrap_or_default();
    let code = property_text(&properties, &keys.code).ok_or_else(|| {
        BoundaryError::MissingProperty {
            index,
            property: keys.code.clone(),
        }
    })?;
    let name = property_text(&properties, &keys.name).ok_or_else(|| {
        BoundaryError::MissingProperty {
            index,
            property: keys.name.clone(),
        }
    })?;

    let geometry = feature
        .geometry
        .ok_or_else(|| BoundaryError::MissingGeometry { code: code.clone() })?;
    let boundary = parse_geometry(&code, geometry)?;

    Ok(Region::new(code, name, boundary))
}

/// Liest eine Property als Text. Arrays liefern ihr erstes Element.
fn property_text(properties: &Map<String, Value>, key: &str) -> Option<String> {
    value_text(properties.get(key)?)
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => items.first().and_then(value_text),
        _ => None,
    }
}

fn parse_geometry(code: &str, geometry: RawGeometry) -> Result<Shape, BoundaryError> {
    let polygons: Vec<Vec<RawRing>> = match geometry.kind.as_str() {
        "Polygon" => vec![serde_json::from_value(geometry.coordinates)?],
        "MultiPolygon" => serde_json::from_value(geometry.coordinates)?,
        other => {
            return Err(BoundaryError::UnsupportedGeometry {
                code: code.to_string(),
                kind: other.to_string(),
            })
        }
    };

    let polygons = polygons
        .into_iter()
        .map(|rings| parse_polygon(code, rings))
        .collect::<Result<Vec<_>, _>>()?;

    let shape = Shape::from_polygons(polygons).ok_or_else(|| BoundaryError::InvalidGeometry {
        code: code.to_string(),
        source: crate::core::GeometryError::Empty,
    })?;
    shape
        .validate()
        .map_err(|source| BoundaryError::InvalidGeometry {
            code: code.to_string(),
            source,
        })?;
    if shape.has_self_intersection() {
        log::warn!("Grenze von '{}' überschneidet sich selbst", code);
    }
    Ok(shape)
}

fn parse_polygon(code: &str, rings: Vec<RawRing>) -> Result<Polygon, BoundaryError> {
    let rings = rings
        .into_iter()
        .map(|ring| parse_ring(code, ring))
        .collect::<Result<Vec<Ring>, _>>()?;
    Ok(Polygon::new(rings))
}

fn parse_ring(code: &str, ring: RawRing) -> Result<Ring, BoundaryError> {
    ring.into_iter()
        .map(|position| match position.as_slice() {
            &[x, y] => Ok(DVec2::new(x, y)),
            other => Err(BoundaryError::CoordinateArity {
                code: code.to_string(),
                found: other.len(),
            }),
        })
        .collect()
}
