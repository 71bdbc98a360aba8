//! Laden der Regionsgrenzen und Attribute aus Dateien.

use std::path::Path;

use anyhow::{Context, Result};

use super::attributes::{parse_attribute_map, parse_population_list, PopulationEntry};
use super::parser::{parse_feature_collection, BoundaryKeys};
use super::BoundaryError;
use crate::core::{RegionAttributes, RegionList};
use indexmap::IndexMap;

/// Baut die Regionsliste aus einer FeatureCollection.
///
/// Doppelte Codes sind ein fataler Ladefehler.
pub fn load_regions(json: &str, keys: &BoundaryKeys) -> Result<RegionList, BoundaryError> {
    let regions = parse_feature_collection(json, keys)?;
    let list = RegionList::from_regions(regions)
        .map_err(|duplicate| BoundaryError::DuplicateCode(duplicate.0))?;
    log::info!("{} Regionen geladen", list.len());
    Ok(list)
}

/// Lädt die Regionsliste aus einer GeoJSON-Datei.
pub fn load_regions_file(path: &Path, keys: &BoundaryKeys) -> Result<RegionList> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Boundary-Datei nicht lesbar: {}", path.display()))?;
    load_regions(&content, keys)
        .with_context(|| format!("Boundary-Datei ungültig: {}", path.display()))
}

/// Lädt eine Attribut-Zuordnung `Code -> Kennzahlen` aus einer JSON-Datei.
pub fn load_attribute_file(path: &Path) -> Result<IndexMap<String, RegionAttributes>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Attribut-Datei nicht lesbar: {}", path.display()))?;
    parse_attribute_map(&content)
        .with_context(|| format!("Attribut-Datei ungültig: {}", path.display()))
}

/// Lädt eine Bevölkerungsliste aus einer JSON-Datei.
pub fn load_population_file(path: &Path) -> Result<Vec<PopulationEntry>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Bevölkerungs-Datei nicht lesbar: {}", path.display()))?;
    parse_population_list(&content)
        .with_context(|| format!("Bevölkerungs-Datei ungültig: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_code_is_fatal() {
        let json = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{"ste_code":"A","ste_name":"A"},
             "geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}},
            {"type":"Feature","properties":{"ste_code":"A","ste_name":"A2"},
             "geometry":{"type":"Polygon","coordinates":[[[2,0],[3,0],[3,1],[2,0]]]}}]}"#;
        let err = load_regions(json, &BoundaryKeys::default()).expect_err("Fehler erwartet");
        assert!(matches!(err, BoundaryError::DuplicateCode(ref code) if code == "A"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_regions_file(
            Path::new("/nonexistent/boundaries.geojson"),
            &BoundaryKeys::default(),
        )
        .expect_err("Fehler erwartet");
        assert!(format!("{err:#}").contains("boundaries.geojson"));
    }
}
