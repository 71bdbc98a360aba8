//! Zentrale Konfiguration für den Region-Draw-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_MIN_AREA, DEFAULT_SPLIT_DELTA};

// ── Kamera ──────────────────────────────────────────────────────────

/// Zoom-Schritt bei stufenweisem Zoom (Menü-Buttons / Shortcuts).
pub const CAMERA_ZOOM_STEP: f64 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f64 = 1.1;

// ── Tools ───────────────────────────────────────────────────────────

/// Wartezeit nach Abschluss einer Zeichnung, bevor Hover/Klick wieder aktiv sind.
pub const SETTLE_DELAY_MS: u64 = 500;

// ── Selektion ───────────────────────────────────────────────────────

/// Pick-Toleranz für Regions-Klicks in Screen-Pixeln.
pub const REGION_PICK_TOLERANCE_PX: f64 = 3.0;

// ── Boundary-Import ─────────────────────────────────────────────────

/// Standard-Property für den Regions-Code.
pub const CODE_PROPERTY: &str = "ste_code";
/// Standard-Property für den Regions-Namen.
pub const NAME_PROPERTY: &str = "ste_name";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `region_draw.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Tools ────────────────────────────────────────────────────
    /// Wartezeit in ms bis Hover/Klick nach einer Zeichnung wieder aktiv sind (0 = sofort)
    pub settle_delay_ms: u64,
    /// Breite des Schnitt-Streifens beim Linien-Split (Welteinheiten)
    pub line_split_delta: f64,
    /// Mindestfläche gültiger Ergebnis-Polygone
    pub min_polygon_area: f64,
    /// Kartenausschnitt beim Start einer Zeichnung merken
    pub snapshot_viewport_on_draw: bool,

    // ── Selektion ───────────────────────────────────────────────
    /// Pick-Toleranz für Regions-Klicks in Pixeln
    pub region_pick_tolerance_px: f64,

    // ── Kamera ──────────────────────────────────────────────────
    /// Zoom-Faktor pro Stufe
    pub camera_zoom_step: f64,
    /// Zoom-Faktor pro Scroll-Schritt
    pub camera_scroll_zoom_step: f64,

    // ── Boundary-Import ─────────────────────────────────────────
    /// GeoJSON-Property mit dem Regions-Code
    pub code_property: String,
    /// GeoJSON-Property mit dem Regions-Namen
    pub name_property: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            settle_delay_ms: SETTLE_DELAY_MS,
            line_split_delta: DEFAULT_SPLIT_DELTA,
            min_polygon_area: DEFAULT_MIN_AREA,
            snapshot_viewport_on_draw: true,

            region_pick_tolerance_px: REGION_PICK_TOLERANCE_PX,

            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,

            code_property: CODE_PROPERTY.to_string(),
            name_property: NAME_PROPERTY.to_string(),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler werden Standardwerte verwendet.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert die Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Pfad der Konfigurationsdatei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("region-draw"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("region_draw.toml")
    }

    /// Ersetzt unbrauchbare Werte (nicht positiv, nicht endlich) durch Defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.line_split_delta) {
            log::warn!("line_split_delta {} ungültig", self.line_split_delta);
            self.line_split_delta = defaults.line_split_delta;
        }
        if !(self.min_polygon_area.is_finite() && self.min_polygon_area >= 0.0) {
            log::warn!("min_polygon_area {} ungültig", self.min_polygon_area);
            self.min_polygon_area = defaults.min_polygon_area;
        }
        if !positive(self.camera_zoom_step) {
            self.camera_zoom_step = defaults.camera_zoom_step;
        }
        if !positive(self.camera_scroll_zoom_step) {
            self.camera_scroll_zoom_step = defaults.camera_scroll_zoom_step;
        }
        if !(self.region_pick_tolerance_px.is_finite() && self.region_pick_tolerance_px >= 0.0) {
            self.region_pick_tolerance_px = defaults.region_pick_tolerance_px;
        }
        self
    }

    /// Boolesche Engine mit den konfigurierten Toleranzen.
    pub fn boolean_engine(&self) -> crate::core::BooleanEngine {
        crate::core::BooleanEngine::new(self.min_polygon_area, self.line_split_delta)
    }
}
