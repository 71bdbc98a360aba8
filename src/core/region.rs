//! Verwaltungsregion mit unveränderlicher Grenze und Selektionsflag.

use super::{RegionAttributes, Shape};

/// Eine Region der Basis-Ebene (z.B. Bundesstaat).
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Eindeutiger Regions-Code
    pub code: String,
    /// Anzeigename
    pub name: String,
    /// Grenze, nach dem Laden unveränderlich
    boundary: Shape,
    /// Ob die Region aktuell selektiert ist
    pub selected: bool,
    /// Optionale Kennzahlen aus dem Attribut-Loader
    pub attributes: Option<RegionAttributes>,
}

impl Region {
    /// Erstellt eine unselektierte Region ohne Attribute.
    pub fn new(code: impl Into<String>, name: impl Into<String>, boundary: Shape) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            boundary,
            selected: false,
            attributes: None,
        }
    }

    /// Grenze der Region (read-only).
    pub fn boundary(&self) -> &Shape {
        &self.boundary
    }
}
