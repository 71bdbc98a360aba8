//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod notifications;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Sitzung (Regionen, Features, View, Werkzeug).
pub mod state;
pub mod tools;
pub mod use_cases;

pub use crate::core::Camera2D;
pub use command_log::CommandLog;
pub use controller::{AppController, ChangeListener};
pub use events::{AppCommand, AppIntent};
pub use notifications::StateChange;
pub use state::{AppState, EditorToolState, ToolSession, ToolState, UiState, ViewState};
pub use tools::ToolEvent;
