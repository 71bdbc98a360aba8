use std::time::{Duration, Instant};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::core::Shape;

/// Aktives Editor-Werkzeug. Es ist immer genau eines aktiv.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ToolState {
    /// Kein Werkzeug: Klick schaltet Regionen, Hover zeigt Tooltip
    #[default]
    Idle,
    /// Neues Polygon zeichnen
    DrawPolygon,
    /// Polygon zeichnen und aus teilweise überlappenden Features schneiden
    DrawCut,
    /// Linie zeichnen und Features entlang der Linie teilen
    DrawLineCut,
    /// Polygon zeichnen und mit geschnittenen Features vereinigen
    DrawUnion,
    /// Wie `DrawCut`, erlaubt aber volles Enthaltensein
    DrawContainCut,
    /// Stützpunkte eines Features verschieben
    Modify,
    /// Ganzes Feature verschieben
    Transform,
    /// Geometrien per Drag & Drop importieren
    DragDropImport,
}

impl ToolState {
    /// Zeichen-Werkzeuge, die eine Skizze aufbauen und den Ausschnitt merken.
    pub fn is_drawing(self) -> bool {
        matches!(
            self,
            ToolState::DrawPolygon
                | ToolState::DrawCut
                | ToolState::DrawLineCut
                | ToolState::DrawUnion
                | ToolState::DrawContainCut
        )
    }

    /// Anzeigename für Status und Log.
    pub fn label(self) -> &'static str {
        match self {
            ToolState::Idle => "Idle",
            ToolState::DrawPolygon => "Polygon zeichnen",
            ToolState::DrawCut => "Polygon schneiden",
            ToolState::DrawLineCut => "Linien-Schnitt",
            ToolState::DrawUnion => "Vereinigen",
            ToolState::DrawContainCut => "Schneiden (inkl. Enthaltensein)",
            ToolState::Modify => "Bearbeiten",
            ToolState::Transform => "Verschieben",
            ToolState::DragDropImport => "Import",
        }
    }
}

/// Flüchtige Daten einer laufenden Werkzeug-Sitzung.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolSession {
    /// Bisher gesetzte Skizzen-Punkte (Welt-Koordinaten)
    pub sketch: Vec<DVec2>,
    /// Geometrie eines Features vor Modify/Translate: (ID, alte Geometrie)
    pub previous_geometry: Option<(u64, Shape)>,
}

impl ToolSession {
    /// Verwirft Skizze und gemerkte Geometrie.
    pub fn clear(&mut self) {
        self.sketch.clear();
        self.previous_geometry = None;
    }
}

/// Zustand des Werkzeug-Automaten.
#[derive(Debug, Clone, Default)]
pub struct EditorToolState {
    /// Aktives Werkzeug
    pub active_tool: ToolState,
    /// Laufende Sitzung des aktiven Werkzeugs
    pub session: ToolSession,
    /// Hover-Tooltip und Regions-Klick unterdrückt
    pub disabled_actions: bool,
    /// Zeitpunkt, ab dem unterdrückte Aktionen wieder aktiv sind
    pub reenable_at: Option<Instant>,
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand (Idle).
    pub fn new() -> Self {
        Self::default()
    }

    /// Plant das Wieder-Aktivieren nach einer abgeschlossenen Zeichnung.
    pub fn schedule_reenable(&mut self, now: Instant, delay_ms: u64) {
        if delay_ms == 0 {
            self.disabled_actions = false;
            self.reenable_at = None;
        } else {
            self.reenable_at = Some(now + Duration::from_millis(delay_ms));
        }
    }

    /// Hebt die Unterdrückung auf, sobald die Wartezeit abgelaufen ist.
    pub fn settle(&mut self, now: Instant) {
        if self.reenable_at.is_some_and(|at| now >= at) {
            self.disabled_actions = false;
            self.reenable_at = None;
        }
    }

    /// Ob Hover und Regions-Klick aktuell erlaubt sind.
    pub fn actions_enabled(&self) -> bool {
        !self.disabled_actions
    }
}
