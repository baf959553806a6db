//! Drawing aggregate: an ordered collection of curves with change events.

use crate::shapes::{Circle, Curve, CurveKind, Line, Polyline};
use crate::storage::{self, StorageResult};
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Errors raised by drawing mutations.
#[derive(Debug, Error)]
pub enum DrawingError {
    /// The requested curve index does not exist.
    #[error("curve index {index} is out of bounds (drawing has {len} curves)")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Change notification fired after every drawing mutation.
#[derive(Debug, Clone)]
pub enum DrawingEvent {
    /// A curve was appended.
    CurveAdded(Curve),
    /// A curve was removed by index.
    CurveRemoved(Curve),
    /// The drawing was emptied; carries the prior contents.
    Cleared(Vec<Curve>),
    /// The drawing was replaced by a successful load; carries the new
    /// contents.
    Loaded(Vec<Curve>),
}

/// Synchronous observer of drawing changes.
pub type DrawingListener = Box<dyn FnMut(&DrawingEvent)>;

/// An ordered collection of curves, insertion order preserved.
#[derive(Default)]
pub struct Drawing {
    curves: Vec<Curve>,
    listeners: Vec<DrawingListener>,
}

impl fmt::Debug for Drawing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Drawing")
            .field("curves", &self.curves)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Drawing {
    /// Create a new empty drawing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a drawing containing the given curves.
    pub fn with_curves(curves: Vec<Curve>) -> Self {
        Self {
            curves,
            listeners: Vec::new(),
        }
    }

    /// Register a synchronous change observer.
    ///
    /// Listeners receive owned event data and hold no reference back into
    /// the drawing, so a notification cannot re-enter a mutating operation.
    pub fn subscribe(&mut self, listener: DrawingListener) {
        self.listeners.push(listener);
    }

    fn notify(&mut self, event: DrawingEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    /// Append a curve to the drawing.
    pub fn add(&mut self, curve: Curve) {
        self.curves.push(curve.clone());
        log::debug!("added {:?} curve ({} total)", curve.kind(), self.curves.len());
        self.notify(DrawingEvent::CurveAdded(curve));
    }

    /// Remove and return the curve at `index`.
    ///
    /// An out-of-bounds index fails with [`DrawingError::IndexOutOfBounds`]
    /// and leaves the drawing unchanged.
    pub fn remove_at(&mut self, index: usize) -> Result<Curve, DrawingError> {
        if index >= self.curves.len() {
            return Err(DrawingError::IndexOutOfBounds {
                index,
                len: self.curves.len(),
            });
        }

        let curve = self.curves.remove(index);
        self.notify(DrawingEvent::CurveRemoved(curve.clone()));
        Ok(curve)
    }

    /// Remove every curve, notifying once with the prior contents.
    pub fn clear_all(&mut self) {
        let snapshot = std::mem::take(&mut self.curves);
        log::debug!("cleared {} curves", snapshot.len());
        self.notify(DrawingEvent::Cleared(snapshot));
    }

    /// All curves, in insertion order.
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Get the curve at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Curve> {
        self.curves.get(index)
    }

    /// The number of curves.
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Check if the drawing is empty.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Curves of the requested variant, in original relative order.
    pub fn curves_of_kind(&self, kind: CurveKind) -> impl Iterator<Item = &Curve> {
        self.curves.iter().filter(move |curve| curve.kind() == kind)
    }

    /// The lines of the drawing, in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.curves.iter().filter_map(Curve::as_line)
    }

    /// The circles of the drawing, in insertion order.
    pub fn circles(&self) -> impl Iterator<Item = &Circle> {
        self.curves.iter().filter_map(Curve::as_circle)
    }

    /// The polylines of the drawing, in insertion order.
    pub fn polylines(&self) -> impl Iterator<Item = &Polyline> {
        self.curves.iter().filter_map(Curve::as_polyline)
    }

    /// Persist all curves to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> StorageResult<()> {
        storage::save_curves(path, &self.curves)
    }

    /// Replace the contents with curves loaded from `path`.
    ///
    /// All-or-nothing: on any error the drawing is left unmodified. On
    /// success one [`DrawingEvent::Loaded`] carries the new contents.
    pub fn load(&mut self, path: impl AsRef<Path>) -> StorageResult<()> {
        let curves = storage::load_curves(path)?;
        self.curves = curves;
        let snapshot = self.curves.clone();
        self.notify(DrawingEvent::Loaded(snapshot));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn sample_line() -> Curve {
        Curve::Line(Line::new(DVec3::ZERO, DVec3::new(1.0, 0.0, 0.0)))
    }

    fn sample_circle() -> Curve {
        Curve::Circle(Circle::new(DVec3::ZERO, DVec3::Z, 2.0))
    }

    fn recording_listener() -> (Rc<RefCell<Vec<String>>>, DrawingListener) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let listener: DrawingListener = Box::new(move |event| {
            let tag = match event {
                DrawingEvent::CurveAdded(_) => "added".to_string(),
                DrawingEvent::CurveRemoved(_) => "removed".to_string(),
                DrawingEvent::Cleared(prior) => format!("cleared:{}", prior.len()),
                DrawingEvent::Loaded(curves) => format!("loaded:{}", curves.len()),
            };
            sink.borrow_mut().push(tag);
        });
        (events, listener)
    }

    #[test]
    fn test_add_notifies() {
        let mut drawing = Drawing::new();
        let (events, listener) = recording_listener();
        drawing.subscribe(listener);

        drawing.add(sample_line());
        assert_eq!(drawing.len(), 1);
        assert_eq!(events.borrow().as_slice(), ["added"]);
    }

    #[test]
    fn test_remove_at_notifies_with_removed_curve() {
        let mut drawing = Drawing::new();
        drawing.add(sample_line());
        drawing.add(sample_circle());

        let removed = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&removed);
        drawing.subscribe(Box::new(move |event| {
            if let DrawingEvent::CurveRemoved(curve) = event {
                *sink.borrow_mut() = Some(curve.clone());
            }
        }));

        let curve = drawing.remove_at(0).unwrap();
        assert_eq!(curve.kind(), CurveKind::Line);
        assert_eq!(drawing.len(), 1);
        assert_eq!(removed.borrow().as_ref().map(Curve::kind), Some(CurveKind::Line));
    }

    #[test]
    fn test_remove_at_out_of_bounds() {
        let mut drawing = Drawing::new();
        drawing.add(sample_line());
        let (events, listener) = recording_listener();
        drawing.subscribe(listener);

        let err = drawing.remove_at(5).unwrap_err();
        assert!(matches!(
            err,
            DrawingError::IndexOutOfBounds { index: 5, len: 1 }
        ));
        assert_eq!(drawing.len(), 1);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_clear_all_fires_once_with_snapshot() {
        let mut drawing = Drawing::new();
        drawing.add(sample_line());
        drawing.add(sample_circle());

        let (events, listener) = recording_listener();
        drawing.subscribe(listener);

        drawing.clear_all();
        assert!(drawing.is_empty());
        assert_eq!(events.borrow().as_slice(), ["cleared:2"]);
    }

    #[test]
    fn test_variant_filters_preserve_order() {
        let mut drawing = Drawing::new();
        let first = Line::new(DVec3::ZERO, DVec3::X);
        let second = Line::new(DVec3::ZERO, DVec3::Y);
        drawing.add(Curve::Line(first.clone()));
        drawing.add(sample_circle());
        drawing.add(Curve::Line(second.clone()));

        let lines: Vec<&Line> = drawing.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(*lines[0], first);
        assert_eq!(*lines[1], second);

        assert_eq!(drawing.circles().count(), 1);
        assert_eq!(drawing.polylines().count(), 0);
        assert_eq!(drawing.curves_of_kind(CurveKind::Line).count(), 2);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drawing.json");

        let mut drawing = Drawing::new();
        drawing.add(sample_line());
        drawing.add(sample_circle());
        drawing.add(Curve::Polyline(Polyline::new(vec![
            DVec3::ZERO,
            DVec3::X,
            DVec3::Y,
        ])));
        drawing.save(&path).unwrap();

        let mut restored = Drawing::new();
        let (events, listener) = recording_listener();
        restored.subscribe(listener);
        restored.load(&path).unwrap();

        assert_eq!(restored.curves(), drawing.curves());
        assert_eq!(events.borrow().as_slice(), ["loaded:3"]);
    }

    #[test]
    fn test_failed_load_leaves_drawing_unmodified() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(
            &path,
            r#"[{"type": "unknown", "startPoint": {"x": 0.0, "y": 0.0, "z": 0.0}}]"#,
        )
        .unwrap();

        let mut drawing = Drawing::new();
        drawing.add(sample_line());

        let err = drawing.load(&path).unwrap_err();
        assert!(matches!(err, crate::storage::StorageError::Format(_)));
        assert_eq!(drawing.len(), 1);
        assert_eq!(drawing.curves()[0].kind(), CurveKind::Line);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut drawing = Drawing::new();
        let err = drawing.load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, crate::storage::StorageError::Io(_)));
    }
}
