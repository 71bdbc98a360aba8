//! Use-Cases für das Laden von Grenzen und Attributen.

use std::path::{Path, PathBuf};

use anyhow::Result;

use super::viewport;
use crate::app::notifications::StateChange;
use crate::app::state::ToolState;
use crate::app::AppState;
use crate::boundary::{self, BoundaryKeys};
use crate::core::RegionList;

/// Lädt die Regionsgrenzen und ersetzt die aktuelle Sitzung.
///
/// Gezeichnete Features und das aktive Werkzeug werden verworfen,
/// danach wird die Kamera auf die Ausdehnung eingepasst.
pub fn load_boundaries(state: &mut AppState, path: PathBuf) -> Result<()> {
    let keys = BoundaryKeys::new(
        state.options.code_property.clone(),
        state.options.name_property.clone(),
    );
    let regions = boundary::load_regions_file(&path, &keys)?;
    install_regions(state, regions);
    state.ui.boundary_path = Some(path);
    Ok(())
}

/// Übernimmt eine bereits geladene Regionsliste in die Sitzung.
pub fn install_regions(state: &mut AppState, regions: RegionList) {
    if state.editor.active_tool != ToolState::Idle {
        crate::app::tools::cancel(state);
    }
    if !state.drawn.is_empty() {
        state.drawn.clear();
        state.notify(StateChange::DrawnFeaturesUpdated);
    }
    state.view.viewport_snapshot = None;
    state.ui.hovered_region = None;
    state.ui.comparison = None;
    state.regions = regions;
    state.notify(StateChange::RegionListUpdated);
    viewport::fit_to_regions(state);
    state.ui.status_message = Some(format!("{} Regionen geladen", state.regions.len()));
}

/// Lädt Kennzahlen pro Regions-Code.
pub fn load_attributes(state: &mut AppState, path: &Path) -> Result<()> {
    let attributes = boundary::load_attribute_file(path)?;
    if boundary::apply_attributes(&mut state.regions, &attributes) > 0 {
        state.notify(StateChange::RegionListUpdated);
    }
    Ok(())
}

/// Lädt Einwohnerzahlen pro Regionsname.
pub fn load_population(state: &mut AppState, path: &Path) -> Result<()> {
    let entries = boundary::load_population_file(path)?;
    if boundary::apply_population(&mut state.regions, &entries) > 0 {
        state.notify(StateChange::RegionListUpdated);
    }
    Ok(())
}

/// Speichert die aktuellen Optionen als TOML.
pub fn save_options(state: &AppState, path: &Path) -> Result<()> {
    state.options.save_to_file(path)
}
