//! Fehler beim Laden der Regionsgrenzen und Attribute.

use thiserror::Error;

use crate::core::GeometryError;

/// Strukturelle Verletzungen in einer Boundary- oder Attribut-Datei.
///
/// Jeder dieser Fehler bricht das gesamte Laden ab.
#[derive(Debug, Error)]
pub enum BoundaryError {
    /// Syntaktisch ungültiges JSON oder falsche Typen
    #[error("Ungültiges JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Wurzel-Objekt ist keine FeatureCollection
    #[error("FeatureCollection erwartet, gefunden: '{0}'")]
    NotFeatureCollection(String),
    /// Pflicht-Property (Code oder Name) fehlt
    #[error("Feature {index}: Property '{property}' fehlt")]
    MissingProperty { index: usize, property: String },
    /// Feature ohne Geometrie
    #[error("Feature '{code}': keine Geometrie")]
    MissingGeometry { code: String },
    /// Geometrie-Typ außer Polygon/MultiPolygon
    #[error("Feature '{code}': Geometrie-Typ '{kind}' nicht unterstützt")]
    UnsupportedGeometry { code: String, kind: String },
    /// Koordinate mit falscher Anzahl Werte
    #[error("Feature '{code}': Koordinate mit {found} Werten (genau 2 erwartet)")]
    CoordinateArity { code: String, found: usize },
    /// Ring nicht geschlossen, zu wenige Punkte oder leere Grenze
    #[error("Feature '{code}': {source}")]
    InvalidGeometry {
        code: String,
        #[source]
        source: GeometryError,
    },
    /// Regions-Code mehrfach vergeben
    #[error("Regions-Code '{0}' ist doppelt vergeben")]
    DuplicateCode(String),
}
