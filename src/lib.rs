//! Region Draw Library.
//! Interaktive Regions-Selektion per gezeichneter Geometrie, als Library
//! exportiert für Tests, Benchmarks und Wiederverwendung.

pub mod app;
pub mod boundary;
pub mod core;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorToolState, StateChange, ToolEvent,
    ToolState, UiState, ViewState,
};
pub use boundary::{load_regions, load_regions_file, BoundaryError, BoundaryKeys};
pub use core::{
    BooleanEngine, Camera2D, CutMode, DrawnFeature, DrawnStore, Polygon, Region,
    RegionAttributes, RegionIndex, RegionList, Shape,
};
pub use shared::EditorOptions;
