//! Linework Core Library
//!
//! Platform-agnostic data model and construction logic for the Linework
//! curve editor: curve variants with derived geometry, an event-driven
//! construction state machine, a drawing aggregate with change events, and
//! a type-tagged persistence codec.

pub mod drawing;
pub mod geom;
pub mod shapes;
pub mod status;
pub mod storage;
pub mod tools;

pub use drawing::{Drawing, DrawingError, DrawingEvent, DrawingListener};
pub use geom::{Point3, TOLERANCE, Vector3};
pub use shapes::{Circle, Curve, CurveKind, CurveStyle, Line, Polyline, StrokeStyle};
pub use status::{LatestStatus, NullStatusSink, StatusSink};
pub use storage::{StorageError, StorageResult};
pub use tools::{ClickEvent, ClickOutcome, ClickResult, MouseButton, ToolKind, ToolManager};
