//! Core-Domäne: Bézier-Auswertung, Hodograph und Kontrollpolygon.
//!
//! Layer-neutral und frei von UI-Abhängigkeiten. Alle Auswertungen sind
//! reine Funktionen über `&[Vec2]`; der einzige veränderliche Typ ist
//! das `ControlPolygon`, das ausschließlich vom App-Layer mutiert wird.

pub mod bezier;
pub mod control_polygon;
pub mod hodograph;

pub use bezier::{evaluate_at, sample, CurveError, CurveEvaluator, DEFAULT_STEP_COUNT};
pub use control_polygon::{ControlPolygon, PointMatch};
pub use hodograph::{derive, hodograph_curve, HodographBuilder};
