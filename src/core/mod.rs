//! Core-Domänentypen: Geometrie, Prädikate, Boolesche Operationen, Regionen, Kamera.

pub mod attributes;
pub mod boolean_ops;
pub mod camera;
pub mod drawn_store;
/// Geometrie-Datenmodell
///
/// - Polygon: Ring-of-Rings (Außenring + Löcher), geschlossen
/// - Shape: Polygon oder MultiPolygon
/// - Konvertierung von und nach `geo`
pub mod geometry;
pub mod predicates;
pub mod region;
pub mod region_list;
pub mod selection_order;
pub mod spatial;

pub use attributes::{parse_population, ComparisonSummary, RegionAttributes, RegionComparison};
pub use boolean_ops::{BooleanEngine, CutMode, DEFAULT_MIN_AREA, DEFAULT_SPLIT_DELTA};
pub use camera::{Camera2D, ViewportSnapshot};
pub use drawn_store::{DrawnFeature, DrawnStore};
pub use geometry::{GeometryError, Polygon, Ring, Shape, MIN_RING_POINTS};
pub use region::Region;
pub use region_list::{DuplicateRegionCode, RegionList};
pub use selection_order::{is_selection_ordered, reorder, ToggleDirection};
pub use spatial::RegionIndex;
