//! Loader für Regions-Attribute (Kennzahlen pro Code, Bevölkerung pro Name).

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use super::BoundaryError;
use crate::core::{parse_population, RegionAttributes, RegionList};

/// Einwohnerzahl einer Region, identifiziert über den Namen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulationEntry {
    /// Regionsname (Vergleich ohne Groß-/Kleinschreibung)
    pub name: String,
    /// Einwohnerzahl
    pub population: u64,
}

#[derive(Debug, Deserialize)]
struct RawPopulationEntry {
    name: String,
    population: Value,
}

/// Parsed eine Zuordnung `Code -> Kennzahlen` (JSON-Objekt).
pub fn parse_attribute_map(
    json: &str,
) -> Result<IndexMap<String, RegionAttributes>, BoundaryError> {
    Ok(serde_json::from_str(json)?)
}

/// Parsed eine Bevölkerungsliste `[{ "name": ..., "population": "1,234" }]`.
///
/// Einträge mit unlesbarer Zahl werden mit Warnung übersprungen.
pub fn parse_population_list(json: &str) -> Result<Vec<PopulationEntry>, BoundaryError> {
    let raw: Vec<RawPopulationEntry> = serde_json::from_str(json)?;
    Ok(raw
        .into_iter()
        .filter_map(|entry| {
            let population = match &entry.population {
                Value::String(text) => parse_population(text),
                Value::Number(n) => n.as_u64(),
                _ => None,
            };
            match population {
                Some(population) => Some(PopulationEntry {
                    name: entry.name,
                    population,
                }),
                None => {
                    log::warn!("Bevölkerung für '{}' nicht lesbar, übersprungen", entry.name);
                    None
                }
            }
        })
        .collect())
}

/// Hängt Kennzahlen an die Regionen mit passendem Code.
///
/// Eine bereits bekannte Einwohnerzahl bleibt erhalten, wenn der neue
/// Datensatz keine liefert. Gibt die Anzahl aktualisierter Regionen zurück.
pub fn apply_attributes(
    regions: &mut RegionList,
    attributes: &IndexMap<String, RegionAttributes>,
) -> usize {
    let mut updated = 0;
    for (code, incoming) in attributes {
        let Some(region) = regions.get_mut(code) else {
            log::warn!("Attribute für unbekannten Code '{}' ignoriert", code);
            continue;
        };
        let mut merged = incoming.clone();
        if merged.population == 0 {
            merged.population = region.attributes.as_ref().map_or(0, |a| a.population);
        }
        region.attributes = Some(merged);
        updated += 1;
    }
    log::info!("Attribute für {} Regionen übernommen", updated);
    updated
}

/// Setzt Einwohnerzahlen per Namensvergleich (ohne Groß-/Kleinschreibung).
///
/// Gibt die Anzahl aktualisierter Regionen zurück.
pub fn apply_population(regions: &mut RegionList, entries: &[PopulationEntry]) -> usize {
    let by_name: HashMap<String, u64> = entries
        .iter()
        .map(|e| (e.name.trim().to_lowercase(), e.population))
        .collect();

    let codes: Vec<String> = regions.codes().into_iter().map(str::to_string).collect();
    let mut updated = 0;
    for code in codes {
        let Some(region) = regions.get_mut(&code) else {
            continue;
        };
        let Some(&population) = by_name.get(&region.name.trim().to_lowercase()) else {
            continue;
        };
        region
            .attributes
            .get_or_insert_with(RegionAttributes::default)
            .population = population;
        updated += 1;
    }
    log::info!("Bevölkerung für {} Regionen übernommen", updated);
    updated
}
