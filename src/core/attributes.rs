//! Numerische Regions-Attribute (Fallzahlen, Bevölkerung) und Vergleichskennzahlen.

use serde::{Deserialize, Deserializer, Serialize};

/// Optionale Kennzahlen einer Region aus dem Attribut-Loader.
///
/// Akzeptiert neben den eigenen Feldnamen auch die Schlüssel des
/// COVID-Tracking-Formats (`positive`, `hospitalizedCumulative`, ...).
/// `null` zählt als 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionAttributes {
    /// Kumulierte Fälle
    #[serde(alias = "positive", alias = "totalCases", deserialize_with = "null_as_zero")]
    pub total_cases: u64,
    /// Neue Fälle seit der letzten Meldung
    #[serde(alias = "positiveIncrease", alias = "newCases", deserialize_with = "null_as_zero")]
    pub new_cases: u64,
    /// Kumulierte Hospitalisierungen
    #[serde(
        alias = "hospitalizedCumulative",
        alias = "totalHospitalized",
        deserialize_with = "null_as_zero"
    )]
    pub total_hospitalized: u64,
    /// Aktuell Hospitalisierte
    #[serde(alias = "hospitalizedCurrently", deserialize_with = "null_as_zero")]
    pub hospitalized_currently: u64,
    /// Durchgeführte Tests
    #[serde(alias = "totalTestResults", alias = "totalTest", deserialize_with = "null_as_zero")]
    pub total_tests: u64,
    /// Einwohnerzahl (0 = unbekannt)
    #[serde(deserialize_with = "null_as_zero")]
    pub population: u64,
}

fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or(0))
}

impl RegionAttributes {
    /// Fälle pro Einwohner in Prozent. `None` ohne Bevölkerungszahl.
    pub fn case_percentage(&self) -> Option<f64> {
        percentage(self.total_cases, self.population)
    }

    /// Hospitalisierungen pro Einwohner in Prozent. `None` ohne Bevölkerungszahl.
    pub fn hospitalized_percentage(&self) -> Option<f64> {
        percentage(self.total_hospitalized, self.population)
    }
}

fn percentage(value: u64, population: u64) -> Option<f64> {
    (population > 0).then(|| value as f64 / population as f64 * 100.0)
}

/// Parst eine Einwohnerzahl mit Tausendertrennzeichen, z.B. `"1,234,567"`.
pub fn parse_population(text: &str) -> Option<u64> {
    let digits: String = text
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '_' | ' '))
        .collect();
    digits.parse().ok()
}

/// Vergleichszeile einer Region für die Gegenüberstellung.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionComparison {
    /// Regions-Code
    pub code: String,
    /// Anzeigename
    pub name: String,
    /// Fälle in Prozent der Bevölkerung
    pub case_percentage: f64,
    /// Hospitalisierte in Prozent der Bevölkerung
    pub hospitalized_percentage: f64,
}

/// Gegenüberstellung mehrerer Regionen inklusive Maxima (Skalierung der Balken).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonSummary {
    /// Eine Zeile pro vergleichbarer Region, in Listenreihenfolge
    pub entries: Vec<RegionComparison>,
    /// Größter Fall-Prozentsatz
    pub max_case_percentage: f64,
    /// Größter Hospitalisierungs-Prozentsatz
    pub max_hospitalized_percentage: f64,
}

impl ComparisonSummary {
    /// Baut die Gegenüberstellung aus (Code, Name, Attribute)-Tripeln.
    ///
    /// Regionen ohne Attribute oder ohne Bevölkerungszahl werden übersprungen.
    pub fn build<'a>(
        regions: impl IntoIterator<Item = (&'a str, &'a str, Option<&'a RegionAttributes>)>,
    ) -> Self {
        let mut summary = Self::default();
        for (code, name, attributes) in regions {
            let Some(attributes) = attributes else {
                continue;
            };
            let (Some(case_percentage), Some(hospitalized_percentage)) = (
                attributes.case_percentage(),
                attributes.hospitalized_percentage(),
            ) else {
                log::debug!("Region {} ohne Bevölkerungszahl, nicht vergleichbar", code);
                continue;
            };
            summary.max_case_percentage = summary.max_case_percentage.max(case_percentage);
            summary.max_hospitalized_percentage = summary
                .max_hospitalized_percentage
                .max(hospitalized_percentage);
            summary.entries.push(RegionComparison {
                code: code.to_string(),
                name: name.to_string(),
                case_percentage,
                hospitalized_percentage,
            });
        }
        summary
    }
}
