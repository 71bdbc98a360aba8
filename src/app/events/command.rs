use std::path::PathBuf;

use glam::DVec2;

use crate::app::state::ToolState;
use crate::app::tools::ToolEvent;
use crate::core::Shape;
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Regionsgrenzen aus Datei laden
    LoadBoundaries { path: PathBuf },
    /// Kennzahlen aus Datei laden
    LoadAttributes { path: PathBuf },
    /// Einwohnerzahlen aus Datei laden
    LoadPopulation { path: PathBuf },
    /// Werkzeug aktivieren/umschalten
    ActivateTool { tool: ToolState },
    /// Aktives Werkzeug abbrechen
    CancelTool,
    /// Skizzen-Punkt setzen
    AddSketchPoint { world_pos: DVec2 },
    /// Skizze abschließen
    FinishSketch,
    /// Werkzeug-Event anwenden
    ApplyToolEvent { event: ToolEvent },
    /// Feature entfernen
    RemoveFeature { id: u64 },
    /// Region per Code umschalten
    ToggleRegion { code: String },
    /// Region unter einem Punkt umschalten
    ToggleRegionAt { world_pos: DVec2, tolerance: f64 },
    /// Hover-Region setzen
    SetHoveredRegion {
        world_pos: Option<DVec2>,
        tolerance: f64,
    },
    /// Regionen unter einer Geometrie (de)selektieren
    SelectRegionsByPolygon { shape: Shape, active: bool },
    /// Selektion aus allen Features neu aufbauen
    RecomputeSelections,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f64; 2] },
    /// Kamera verschieben
    PanCamera { delta: DVec2 },
    /// Kamera zoomen
    ZoomCamera {
        factor: f64,
        focus_world: Option<DVec2>,
    },
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Kamera auf alle Regionen einpassen
    FitToRegions,
    /// Selektierte Regionen gegenüberstellen
    CompareSelected,
    /// Optionen übernehmen
    ApplyOptions { options: Box<EditorOptions> },
    /// Optionen als TOML speichern
    SaveOptions { path: PathBuf },
}
