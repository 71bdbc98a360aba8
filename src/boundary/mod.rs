//! Import der Regionsgrenzen (GeoJSON) und der Regions-Attribute.
//!
//! Strukturelle Fehler (offener Ring, falsche Koordinaten-Anzahl,
//! doppelter Code, leere Grenze) brechen das Laden mit `BoundaryError` ab.

pub mod attributes;
mod error;
pub mod loader;
pub mod parser;

pub use attributes::{
    apply_attributes, apply_population, parse_attribute_map, parse_population_list,
    PopulationEntry,
};
pub use error::BoundaryError;
pub use loader::{load_attribute_file, load_population_file, load_regions, load_regions_file};
pub use parser::{parse_feature_collection, BoundaryKeys};
