//! Handler für Datei-Operationen und Optionen.

use std::path::PathBuf;

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::EditorOptions;

/// Lädt Regionsgrenzen und propagiert Fehler an den Aufrufer.
pub fn load_boundaries(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    use_cases::file_io::load_boundaries(state, path)
}

/// Lädt Kennzahlen pro Regions-Code.
pub fn load_attributes(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    use_cases::file_io::load_attributes(state, &path)
}

/// Lädt Einwohnerzahlen pro Regionsname.
pub fn load_population(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    use_cases::file_io::load_population(state, &path)
}

/// Übernimmt geänderte Optionen (ungültige Werte fallen auf Defaults zurück).
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    state.options = options.sanitized();
    log::info!("Optionen übernommen");
}

/// Speichert die Optionen als TOML.
pub fn save_options(state: &AppState, path: PathBuf) -> anyhow::Result<()> {
    use_cases::file_io::save_options(state, &path)
}
