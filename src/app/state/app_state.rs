use crate::app::notifications::{PendingChanges, StateChange};
use crate::app::CommandLog;
use crate::core::{BooleanEngine, DrawnFeature, DrawnStore, RegionList};
use crate::shared::EditorOptions;

use super::{EditorToolState, ToolState, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Regionen der Basis-Ebene in Anzeige-Reihenfolge
    pub regions: RegionList,
    /// Vom Benutzer gezeichnete Features
    pub drawn: DrawnStore,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Editor-Werkzeug-State
    pub editor: EditorToolState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Toleranzen, Wartezeiten, Property-Keys)
    pub options: EditorOptions,
    /// Noch nicht ausgelieferte Änderungs-Benachrichtigungen
    pub pending_changes: PendingChanges,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit gegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            regions: RegionList::new(),
            drawn: DrawnStore::new(),
            view: ViewState::new(),
            ui: UiState::new(),
            editor: EditorToolState::new(),
            command_log: CommandLog::new(),
            options,
            pending_changes: PendingChanges::default(),
        }
    }

    /// Aktives Werkzeug.
    pub fn tool_state(&self) -> ToolState {
        self.editor.active_tool
    }

    /// Alle gezeichneten Features in Reihenfolge.
    pub fn drawn_features(&self) -> impl Iterator<Item = &DrawnFeature> {
        self.drawn.all()
    }

    /// Ob mindestens ein Feature gezeichnet ist.
    pub fn has_drawn_features(&self) -> bool {
        !self.drawn.is_empty()
    }

    /// Anzahl der Regionen (für Status-Anzeige)
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Boolesche Engine mit den aktuellen Toleranzen.
    pub fn boolean_engine(&self) -> BooleanEngine {
        self.options.boolean_engine()
    }

    /// Merkt eine Änderungs-Benachrichtigung vor.
    pub fn notify(&mut self, change: StateChange) {
        self.pending_changes.push(change);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
