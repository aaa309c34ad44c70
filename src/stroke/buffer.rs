//! Stroke accumulation buffer.
//!
//! Between a clear and the next recognition, the buffer collects every
//! completed stroke plus at most one in-progress stroke.  Recognition reads
//! **completed** strokes only — a drag that has not ended yet is never
//! submitted.
//!
//! # Example
//!
//! ```rust
//! use inkboard::stroke::StrokeBuffer;
//!
//! let mut buf = StrokeBuffer::new();
//! buf.begin_stroke();
//! buf.push_point(0.0, 0.0);
//! buf.push_point(4.0, 4.0);
//! buf.end_stroke();
//!
//! let strokes = buf.stroke_data();
//! assert_eq!(strokes.len(), 1);
//! assert_eq!(strokes[0].len(), 2);
//! ```

use crate::stroke::{Stroke, StrokePoint};

// ---------------------------------------------------------------------------
// StrokeBuffer
// ---------------------------------------------------------------------------

/// Accumulates handwriting strokes between draws.
///
/// The buffer is exclusively owned by the capture side between draws; the
/// recognition session only ever sees an owned snapshot from
/// [`stroke_data`](Self::stroke_data), so drawing can continue while a
/// recognition call is outstanding.
#[derive(Debug, Default)]
pub struct StrokeBuffer {
    /// Completed strokes, in drawing order.
    strokes: Vec<Stroke>,
    /// The stroke currently being drawn, if any.
    current: Option<Stroke>,
}

impl StrokeBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new stroke (pointer down on the canvas).
    ///
    /// Any stroke still in progress is completed first, so points are never
    /// lost to an out-of-order event stream.
    pub fn begin_stroke(&mut self) {
        self.end_stroke();
        self.current = Some(Stroke::new());
    }

    /// Append a point to the in-progress stroke (pointer move).
    ///
    /// Begins a stroke implicitly when none is in progress.
    pub fn push_point(&mut self, x: f32, y: f32) {
        self.current
            .get_or_insert_with(Stroke::new)
            .push(StrokePoint::new(x, y));
    }

    /// Complete the in-progress stroke (pointer up / leave the canvas).
    ///
    /// A stroke with no points is discarded rather than stored.
    pub fn end_stroke(&mut self) {
        if let Some(stroke) = self.current.take() {
            if !stroke.is_empty() {
                self.strokes.push(stroke);
            }
        }
    }

    /// Owned snapshot of all completed strokes, in drawing order.
    pub fn stroke_data(&self) -> Vec<Stroke> {
        self.strokes.clone()
    }

    /// Discard everything, including any in-progress stroke.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.current = None;
    }

    /// Number of completed strokes.
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// Returns `true` when no stroke has been completed since the last clear.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Basic capture -----------------------------------------------------

    #[test]
    fn completed_stroke_is_stored_in_order() {
        let mut buf = StrokeBuffer::new();
        buf.begin_stroke();
        buf.push_point(1.0, 2.0);
        buf.push_point(3.0, 4.0);
        buf.end_stroke();

        let strokes = buf.stroke_data();
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0], vec![StrokePoint::new(1.0, 2.0), StrokePoint::new(3.0, 4.0)]);
    }

    #[test]
    fn strokes_keep_drawing_order() {
        let mut buf = StrokeBuffer::new();
        buf.begin_stroke();
        buf.push_point(0.0, 0.0);
        buf.end_stroke();
        buf.begin_stroke();
        buf.push_point(9.0, 9.0);
        buf.end_stroke();

        let strokes = buf.stroke_data();
        assert_eq!(strokes.len(), 2);
        assert_eq!(strokes[0][0], StrokePoint::new(0.0, 0.0));
        assert_eq!(strokes[1][0], StrokePoint::new(9.0, 9.0));
    }

    // ---- In-progress stroke handling ---------------------------------------

    #[test]
    fn in_progress_stroke_is_not_visible_in_stroke_data() {
        let mut buf = StrokeBuffer::new();
        buf.begin_stroke();
        buf.push_point(1.0, 1.0);

        assert!(buf.stroke_data().is_empty());
        assert!(buf.is_empty());
    }

    #[test]
    fn begin_stroke_completes_the_previous_one() {
        let mut buf = StrokeBuffer::new();
        buf.begin_stroke();
        buf.push_point(1.0, 1.0);
        // Missed pointer-up: the next begin must not drop the first stroke.
        buf.begin_stroke();
        buf.push_point(2.0, 2.0);
        buf.end_stroke();

        assert_eq!(buf.len(), 2);
    }

    #[test]
    fn push_point_without_begin_starts_a_stroke() {
        let mut buf = StrokeBuffer::new();
        buf.push_point(5.0, 5.0);
        buf.end_stroke();

        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn empty_stroke_is_discarded() {
        let mut buf = StrokeBuffer::new();
        buf.begin_stroke();
        buf.end_stroke();

        assert!(buf.is_empty());
    }

    #[test]
    fn end_stroke_without_begin_is_a_noop() {
        let mut buf = StrokeBuffer::new();
        buf.end_stroke();
        assert!(buf.is_empty());
    }

    // ---- Snapshot / clear semantics ----------------------------------------

    #[test]
    fn stroke_data_is_an_owned_snapshot() {
        let mut buf = StrokeBuffer::new();
        buf.begin_stroke();
        buf.push_point(1.0, 1.0);
        buf.end_stroke();

        let snapshot = buf.stroke_data();
        // Further drawing must not mutate data already snapshotted.
        buf.begin_stroke();
        buf.push_point(2.0, 2.0);
        buf.end_stroke();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(buf.stroke_data().len(), 2);
    }

    #[test]
    fn clear_discards_completed_and_in_progress_strokes() {
        let mut buf = StrokeBuffer::new();
        buf.begin_stroke();
        buf.push_point(1.0, 1.0);
        buf.end_stroke();
        buf.begin_stroke();
        buf.push_point(2.0, 2.0);

        buf.clear();

        assert!(buf.is_empty());
        // The half-drawn stroke must not resurface on the next end_stroke.
        buf.end_stroke();
        assert!(buf.is_empty());
    }

    #[test]
    fn reuse_after_clear() {
        let mut buf = StrokeBuffer::new();
        buf.begin_stroke();
        buf.push_point(1.0, 1.0);
        buf.end_stroke();
        buf.clear();

        buf.begin_stroke();
        buf.push_point(3.0, 3.0);
        buf.end_stroke();

        assert_eq!(buf.len(), 1);
        assert_eq!(buf.stroke_data()[0][0], StrokePoint::new(3.0, 3.0));
    }
}
