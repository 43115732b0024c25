//! Bezier-Hodograph-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, SelectionState};
pub use core::{
    derive, evaluate_at, hodograph_curve, sample, ControlPolygon, CurveError, CurveEvaluator,
    HodographBuilder, PointMatch, DEFAULT_STEP_COUNT,
};
pub use shared::{EditorOptions, PanelScene, RenderScene};
