//! Use-Cases der Application-Layer-Orchestrierung.

pub mod boolean_edit;
pub mod comparison;
pub mod feature_edit;
pub mod file_io;
pub mod region_selection;
pub mod viewport;
