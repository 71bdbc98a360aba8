//! Synchrone Änderungs-Benachrichtigungen nach mutierenden Aufrufen.

use super::state::ToolState;

/// Art der Zustandsänderung, die Beobachter nach einem Intent erhalten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    /// Selektion oder Reihenfolge der Regionsliste hat sich geändert
    RegionListUpdated,
    /// Menge oder Geometrie der gezeichneten Features hat sich geändert
    DrawnFeaturesUpdated,
    /// Aktives Werkzeug hat gewechselt
    ToolStateChanged(ToolState),
}

/// Sammelt Änderungen bis zur Auslieferung durch den Controller.
///
/// Gleiche Änderungen werden zusammengefasst; bei Werkzeug-Wechseln
/// zählt nur der letzte Zustand.
#[derive(Debug, Clone, Default)]
pub struct PendingChanges {
    changes: Vec<StateChange>,
}

impl PendingChanges {
    /// Merkt eine Änderung vor.
    pub fn push(&mut self, change: StateChange) {
        if let StateChange::ToolStateChanged(_) = change {
            self.changes
                .retain(|c| !matches!(c, StateChange::ToolStateChanged(_)));
        } else if self.changes.contains(&change) {
            return;
        }
        self.changes.push(change);
    }

    /// Entnimmt alle vorgemerkten Änderungen.
    pub fn drain(&mut self) -> Vec<StateChange> {
        std::mem::take(&mut self.changes)
    }

    /// Gibt `true` zurück, wenn nichts vorgemerkt ist.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}
