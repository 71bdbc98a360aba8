//! Werkzeug-Automat: Aktivieren/Deaktivieren, Skizzen und Werkzeug-Events.
//!
//! Es ist immer genau ein `ToolState` aktiv. Alle Ereignisse der
//! Zeichen-, Bearbeiten- und Import-Interaktionen laufen über
//! `handle_tool_event` und werden dort am aktiven Werkzeug entschieden.
//! Die eigentliche Mutation erfolgt in den Use-Cases.

use std::time::Instant;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::app::notifications::StateChange;
use crate::app::state::ToolState;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{CutMode, Polygon, Shape};

/// Ereignis einer Werkzeug-Interaktion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ToolEvent {
    /// Polygon-Zeichnung abgeschlossen
    DrawEnd { shape: Shape },
    /// Linien-Zeichnung abgeschlossen (genau zwei Punkte erwartet)
    LineEnd { points: Vec<DVec2> },
    /// Bearbeitung eines Features beginnt
    ModifyStart { id: u64 },
    /// Bearbeitung eines Features endet mit neuer Geometrie
    ModifyEnd { id: u64, shape: Shape },
    /// Verschieben eines Features beginnt
    TranslateStart { id: u64 },
    /// Verschieben eines Features endet mit Gesamt-Delta
    TranslateEnd { id: u64, delta: DVec2 },
    /// Importierte Geometrien wurden abgelegt
    Drop { shapes: Vec<Shape> },
}

impl ToolEvent {
    /// Ob das Ereignis eine Zeichnung/Bearbeitung abschließt.
    fn completes_interaction(&self) -> bool {
        matches!(
            self,
            ToolEvent::DrawEnd { .. }
                | ToolEvent::LineEnd { .. }
                | ToolEvent::ModifyEnd { .. }
                | ToolEvent::TranslateEnd { .. }
        )
    }
}

/// Aktiviert ein Werkzeug.
///
/// Ist es bereits aktiv, wird auf `Idle` zurückgeschaltet. Sonst wird das
/// laufende Werkzeug abgebaut (Skizze und gemerkte Geometrie verworfen).
pub fn activate(state: &mut AppState, tool: ToolState) {
    let current = state.editor.active_tool;
    let target = if current == tool && tool != ToolState::Idle {
        ToolState::Idle
    } else {
        tool
    };

    state.editor.session.clear();
    state.editor.active_tool = target;
    state.editor.reenable_at = None;
    state.editor.disabled_actions = target != ToolState::Idle;

    if target.is_drawing() && state.options.snapshot_viewport_on_draw {
        state.view.viewport_snapshot = Some(state.view.camera.snapshot());
    }

    if target != current {
        log::info!("Werkzeug: {} -> {}", current.label(), target.label());
        state.notify(StateChange::ToolStateChanged(target));
    }
}

/// Bricht das aktive Werkzeug ab und kehrt zu `Idle` zurück.
pub fn cancel(state: &mut AppState) {
    if state.editor.active_tool == ToolState::Idle {
        state.editor.session.clear();
        return;
    }
    activate(state, ToolState::Idle);
}

/// Fügt der Skizze des aktiven Zeichen-Werkzeugs einen Punkt hinzu.
pub fn add_sketch_point(state: &mut AppState, world_pos: DVec2) {
    let tool = state.editor.active_tool;
    if !tool.is_drawing() {
        log::debug!("Skizzen-Punkt ohne Zeichen-Werkzeug ignoriert");
        return;
    }
    let sketch = &mut state.editor.session.sketch;
    sketch.push(world_pos);
    // Linien-Schnitt endet automatisch nach dem zweiten Punkt
    if tool == ToolState::DrawLineCut && sketch.len() == 2 {
        finish_sketch(state);
    }
}

/// Schließt die Skizze ab und leitet das passende Werkzeug-Event weiter.
pub fn finish_sketch(state: &mut AppState) {
    let tool = state.editor.active_tool;
    let points = std::mem::take(&mut state.editor.session.sketch);

    let event = match tool {
        ToolState::DrawLineCut => Some(ToolEvent::LineEnd { points }),
        t if t.is_drawing() => {
            if points.len() < 3 {
                log::debug!("Skizze mit {} Punkten verworfen", points.len());
                None
            } else {
                Some(ToolEvent::DrawEnd {
                    shape: Polygon::from_exterior(points).into(),
                })
            }
        }
        _ => None,
    };

    if let Some(event) = event {
        handle_tool_event(state, event);
    }
}

/// Zentrale Verteilung aller Werkzeug-Events nach aktivem Werkzeug.
pub fn handle_tool_event(state: &mut AppState, event: ToolEvent) {
    let tool = state.editor.active_tool;
    let completes = event.completes_interaction();

    match (tool, event) {
        (ToolState::DrawPolygon, ToolEvent::DrawEnd { shape }) => {
            use_cases::feature_edit::add_drawn_feature(state, shape, None);
        }
        (ToolState::DrawCut, ToolEvent::DrawEnd { shape }) => {
            use_cases::boolean_edit::cut_with_polygon(state, &shape, CutMode::OverlapOnly);
        }
        (ToolState::DrawContainCut, ToolEvent::DrawEnd { shape }) => {
            use_cases::boolean_edit::cut_with_polygon(state, &shape, CutMode::PermitContainment);
        }
        (ToolState::DrawUnion, ToolEvent::DrawEnd { shape }) => {
            use_cases::boolean_edit::union_with_polygon(state, shape);
        }
        (ToolState::DrawLineCut, ToolEvent::LineEnd { points }) => {
            use_cases::boolean_edit::split_with_line(state, &points);
        }
        (ToolState::Modify, ToolEvent::ModifyStart { id }) => {
            use_cases::feature_edit::begin_edit(state, id);
        }
        (ToolState::Modify, ToolEvent::ModifyEnd { id, shape }) => {
            use_cases::feature_edit::end_modify(state, id, shape);
        }
        (ToolState::Transform, ToolEvent::TranslateStart { id }) => {
            use_cases::feature_edit::begin_edit(state, id);
        }
        (ToolState::Transform, ToolEvent::TranslateEnd { id, delta }) => {
            use_cases::feature_edit::end_translate(state, id, delta);
        }
        (ToolState::DragDropImport, ToolEvent::Drop { shapes }) => {
            use_cases::feature_edit::import_features(state, shapes);
        }
        (tool, event) => {
            log::debug!("{:?} passt nicht zum Werkzeug {}, ignoriert", event, tool.label());
            return;
        }
    }

    if completes {
        state
            .editor
            .schedule_reenable(Instant::now(), state.options.settle_delay_ms);
    }
}
