use std::path::PathBuf;

use glam::DVec2;
use serde::Deserialize;

use crate::app::state::ToolState;
use crate::app::tools::ToolEvent;
use crate::core::Shape;
use crate::shared::EditorOptions;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Deserialisierbar, damit Skripte sie abspielen können.
#[derive(Debug, Clone, Deserialize)]
pub enum AppIntent {
    /// Regionsgrenzen (GeoJSON) laden
    LoadBoundariesRequested { path: PathBuf },
    /// Kennzahlen pro Regions-Code laden
    LoadAttributesRequested { path: PathBuf },
    /// Einwohnerzahlen pro Regionsname laden
    LoadPopulationRequested { path: PathBuf },
    /// Werkzeug aktivieren (erneut = deaktivieren)
    ActivateToolRequested { tool: ToolState },
    /// Aktives Werkzeug abbrechen
    ToolCancelled,
    /// Punkt zur laufenden Skizze hinzufügen
    SketchPointAdded { world_pos: DVec2 },
    /// Laufende Skizze abschließen
    SketchFinished,
    /// Direktes Werkzeug-Event (Zeichnung, Bearbeitung, Import)
    ToolEvent { event: ToolEvent },
    /// Gezeichnetes Feature entfernen
    RemoveFeatureRequested { id: u64 },
    /// Klick auf die Karte
    RegionClicked { world_pos: DVec2 },
    /// Mauszeiger über der Karte (None = verlassen)
    RegionHovered { world_pos: Option<DVec2> },
    /// Region in der Liste umschalten
    RegionToggleRequested { code: String },
    /// Regionen unter einer Geometrie (de)selektieren
    SelectRegionsByPolygonRequested { shape: Shape, active: bool },
    /// Selektion aus allen Features neu aufbauen
    RecomputeSelectionsRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f64; 2] },
    /// Kamera um Delta verschieben (Welt-Einheiten)
    CameraPan { delta: DVec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f64,
        focus_world: Option<DVec2>,
    },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Kamera auf alle Regionen einpassen
    FitToRegionsRequested,
    /// Selektierte Regionen gegenüberstellen
    CompareSelectedRequested,
    /// Optionen wurden geändert
    OptionsChanged { options: EditorOptions },
    /// Optionen speichern
    SaveOptionsRequested,
}
