//! Mapping von UI-Intents auf mutierende App-Commands.

use super::use_cases::viewport::pick_tolerance_world;
use super::{AppCommand, AppIntent, AppState};


/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Hover und Regions-Klick erzeugen keine Commands, solange ein Werkzeug
/// die Aktionen unterdrückt.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::LoadBoundariesRequested { path } => vec![AppCommand::LoadBoundaries { path }],
        AppIntent::LoadAttributesRequested { path } => vec![AppCommand::LoadAttributes { path }],
        AppIntent::LoadPopulationRequested { path } => vec![AppCommand::LoadPopulation { path }],
        AppIntent::ActivateToolRequested { tool } => vec![AppCommand::ActivateTool { tool }],
        AppIntent::ToolCancelled => vec![AppCommand::CancelTool],
        AppIntent::SketchPointAdded { world_pos } => vec![AppCommand::AddSketchPoint { world_pos }],
        AppIntent::SketchFinished => vec![AppCommand::FinishSketch],
        AppIntent::ToolEvent { event } => vec![AppCommand::ApplyToolEvent { event }],
        AppIntent::RemoveFeatureRequested { id } => vec![AppCommand::RemoveFeature { id }],
        AppIntent::RegionClicked { world_pos } => {
            if !state.editor.actions_enabled() {
                log::debug!("Regions-Klick während aktivem Werkzeug unterdrückt");
                return Vec::new();
            }
            vec![AppCommand::ToggleRegionAt {
                world_pos,
                tolerance: pick_tolerance_world(state),
            }]
        }
        AppIntent::RegionHovered { world_pos } => {
            if !state.editor.actions_enabled() {
                return Vec::new();
            }
            vec![AppCommand::SetHoveredRegion {
                world_pos,
                tolerance: pick_tolerance_world(state),
            }]
        }
        AppIntent::RegionToggleRequested { code } => vec![AppCommand::ToggleRegion { code }],
        AppIntent::SelectRegionsByPolygonRequested { shape, active } => {
            vec![AppCommand::SelectRegionsByPolygon { shape, active }]
        }
        AppIntent::RecomputeSelectionsRequested => vec![AppCommand::RecomputeSelections],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom {
            factor,
            focus_world,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_world,
        }],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::FitToRegionsRequested => vec![AppCommand::FitToRegions],
        AppIntent::CompareSelectedRequested => vec![AppCommand::CompareSelected],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions {
            options: Box::new(options),
        }],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions {
            path: crate::shared::EditorOptions::config_path(),
        }],
    }
}
