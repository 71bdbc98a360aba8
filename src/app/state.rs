//! Application State: zentrale Datenhaltung.
//!
//! `AppState` ist das Sitzungs-Aggregat: Regionsliste, gezeichnete Features,
//! Werkzeug-Automat, Kamera mit gemerktem Ausschnitt und Optionen.

mod app_state;
mod editor;
mod ui;
mod view;

pub use app_state::AppState;
pub use editor::{EditorToolState, ToolSession, ToolState};
pub use ui::UiState;
pub use view::ViewState;
