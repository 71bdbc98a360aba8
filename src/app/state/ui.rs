use std::path::PathBuf;

use crate::core::ComparisonSummary;

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Code der Region unter dem Mauszeiger (Tooltip)
    pub hovered_region: Option<String>,
    /// Letzte Gegenüberstellung der selektierten Regionen
    pub comparison: Option<ComparisonSummary>,
    /// Temporäre Statusnachricht
    pub status_message: Option<String>,
    /// Pfad der geladenen Boundary-Datei
    pub boundary_path: Option<PathBuf>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
