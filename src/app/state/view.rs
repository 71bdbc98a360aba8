use glam::DVec2;

use crate::core::{Camera2D, ViewportSnapshot};

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// 2D-Kamera für die Ansicht
    pub camera: Camera2D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: DVec2,
    /// Beim Start einer Zeichnung gemerkter Ausschnitt
    pub viewport_snapshot: Option<ViewportSnapshot>,
}

impl ViewState {
    /// Standard-Viewport-Größe, bis die Oberfläche eine echte meldet.
    pub const DEFAULT_VIEWPORT: DVec2 = DVec2::new(1280.0, 720.0);

    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: Camera2D::new(),
            viewport_size: Self::DEFAULT_VIEWPORT,
            viewport_snapshot: None,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
