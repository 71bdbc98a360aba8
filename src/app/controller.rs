//! Application Controller für zentrale Event-Verarbeitung.

use std::time::Instant;

use super::notifications::StateChange;
use super::{AppCommand, AppIntent, AppState};

/// Beobachter, der nach jedem Intent die gesammelten Änderungen erhält.
pub type ChangeListener = Box<dyn FnMut(&StateChange)>;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController {
    listeners: Vec<ChangeListener>,
}

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Beobachter für Zustandsänderungen.
    pub fn subscribe(&mut self, listener: impl FnMut(&StateChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Vor dem Mapping wird eine abgelaufene Wartezeit des Werkzeug-Automaten
    /// aufgelöst, danach erhalten alle Beobachter die gesammelten Änderungen.
    /// Auch bei einem Fehler werden bereits vorgemerkte Änderungen ausgeliefert.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        state.editor.settle(Instant::now());

        let commands = self.map_intent_to_commands(state, intent);
        let mut result = Ok(());
        for command in commands {
            result = self.handle_command(state, command);
            if result.is_err() {
                break;
            }
        }

        self.dispatch_changes(state);
        result
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    fn dispatch_changes(&mut self, state: &mut AppState) {
        let changes = state.pending_changes.drain();
        if changes.is_empty() {
            return;
        }
        for change in &changes {
            log::debug!("Zustandsänderung: {:?}", change);
            for listener in &mut self.listeners {
                listener(change);
            }
        }
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Datei-I/O ===
            AppCommand::LoadBoundaries { path } => handlers::file_io::load_boundaries(state, path)?,
            AppCommand::LoadAttributes { path } => handlers::file_io::load_attributes(state, path)?,
            AppCommand::LoadPopulation { path } => handlers::file_io::load_population(state, path)?,
            AppCommand::ApplyOptions { options } => handlers::file_io::apply_options(state, *options),
            AppCommand::SaveOptions { path } => handlers::file_io::save_options(state, path)?,

            // === Werkzeuge ===
            AppCommand::ActivateTool { tool } => handlers::tool::activate(state, tool),
            AppCommand::CancelTool => handlers::tool::cancel(state),
            AppCommand::AddSketchPoint { world_pos } => {
                handlers::tool::add_sketch_point(state, world_pos)
            }
            AppCommand::FinishSketch => handlers::tool::finish_sketch(state),
            AppCommand::ApplyToolEvent { event } => handlers::tool::apply_event(state, event),
            AppCommand::RemoveFeature { id } => handlers::tool::remove_feature(state, id),

            // === Selektion ===
            AppCommand::ToggleRegion { code } => handlers::selection::toggle_region(state, &code),
            AppCommand::ToggleRegionAt {
                world_pos,
                tolerance,
            } => handlers::selection::toggle_region_at(state, world_pos, tolerance),
            AppCommand::SetHoveredRegion {
                world_pos,
                tolerance,
            } => handlers::selection::set_hovered(state, world_pos, tolerance),
            AppCommand::SelectRegionsByPolygon { shape, active } => {
                handlers::selection::select_by_polygon(state, &shape, active)
            }
            AppCommand::RecomputeSelections => handlers::selection::recompute(state),
            AppCommand::CompareSelected => handlers::selection::compare_selected(state),

            // === Kamera & Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera {
                factor,
                focus_world,
            } => handlers::view::zoom_towards(state, factor, focus_world),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::FitToRegions => handlers::view::fit_to_regions(state),
        }

        Ok(())
    }
}
