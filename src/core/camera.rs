//! 2D-Kamera für Pan, Zoom und Zoom-auf-Ausdehnung der Karte.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D-Kamera mit Pan und Zoom
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Position der Kamera (Bildmitte) in Welt-Koordinaten
    pub position: DVec2,
    /// Zoom-Level (1.0 = `BASE_WORLD_EXTENT` als halbe Höhe sichtbar)
    pub zoom: f64,
}

/// Gespeicherter Kartenausschnitt (Zentrum + Zoom).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSnapshot {
    /// Zentrum in Welt-Koordinaten
    pub center: DVec2,
    /// Zoom-Level
    pub zoom: f64,
}

impl Camera2D {
    /// Sichtbare Welt-Halbhöhe bei Zoom 1.0 (Grad, ganze Breitenspanne).
    pub const BASE_WORLD_EXTENT: f64 = 90.0;
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f64 = 1e-3;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f64 = 1e7;
    /// Rand beim Einpassen einer Ausdehnung (Anteil der Viewport-Größe).
    pub const FIT_PADDING: f64 = 0.05;

    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            position: DVec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: DVec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera (Pan)
    pub fn pan(&mut self, delta: DVec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level
    pub fn zoom_by(&mut self, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            log::warn!("Ungültiger Zoom-Faktor {} ignoriert", factor);
            return;
        }
        self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Konvertiert Screen-Koordinaten (Ursprung oben links, y nach unten)
    /// zu Welt-Koordinaten (y nach oben).
    pub fn screen_to_world(&self, screen_pos: DVec2, screen_size: DVec2) -> DVec2 {
        let size = screen_size.max(DVec2::ONE);
        let ndc = (screen_pos / size) * 2.0 - DVec2::ONE;
        let aspect = size.x / size.y;
        DVec2::new(
            ndc.x * Self::BASE_WORLD_EXTENT * aspect / self.zoom,
            -ndc.y * Self::BASE_WORLD_EXTENT / self.zoom,
        ) + self.position
    }

    /// Umrechnungsfaktor von Screen-Pixeln zu Welt-Einheiten.
    pub fn world_per_pixel(&self, viewport_height: f64) -> f64 {
        2.0 * Self::BASE_WORLD_EXTENT / (self.zoom * viewport_height.max(1.0))
    }

    /// Sichtbarer Welt-Ausschnitt als (min, max).
    pub fn visible_bounds(&self, screen_size: DVec2) -> (DVec2, DVec2) {
        let size = screen_size.max(DVec2::ONE);
        let half = DVec2::new(
            Self::BASE_WORLD_EXTENT * size.x / size.y,
            Self::BASE_WORLD_EXTENT,
        ) / self.zoom;
        (self.position - half, self.position + half)
    }

    /// Passt Position und Zoom so an, dass die Ausdehnung vollständig sichtbar ist.
    pub fn fit_bounds(&mut self, min: DVec2, max: DVec2, screen_size: DVec2) {
        let size = screen_size.max(DVec2::ONE);
        let aspect = size.x / size.y;
        let half = ((max - min) * 0.5 * (1.0 + Self::FIT_PADDING)).max(DVec2::splat(f64::EPSILON));

        let zoom_x = Self::BASE_WORLD_EXTENT * aspect / half.x;
        let zoom_y = Self::BASE_WORLD_EXTENT / half.y;

        self.position = (min + max) * 0.5;
        self.zoom = zoom_x.min(zoom_y).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Speichert den aktuellen Ausschnitt.
    pub fn snapshot(&self) -> ViewportSnapshot {
        ViewportSnapshot {
            center: self.position,
            zoom: self.zoom,
        }
    }

    /// Stellt einen gespeicherten Ausschnitt wieder her.
    pub fn restore(&mut self, snapshot: ViewportSnapshot) {
        self.position = snapshot.center;
        self.zoom = snapshot.zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
