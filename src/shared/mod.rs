//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die von `app` und `boundary`
//! gleichermaßen gelesen werden.

pub mod options;

pub use options::EditorOptions;
pub use options::{CODE_PROPERTY, NAME_PROPERTY, SETTLE_DELAY_MS};
