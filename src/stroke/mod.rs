//! Handwriting stroke geometry and capture.
//!
//! A **stroke** is the ordered point sequence captured during one continuous
//! pointer drag; a full handwriting gesture is an ordered sequence of
//! strokes.  The canvas math that turns pointer events into points is a host
//! concern — this module owns the data side:
//!
//! * [`StrokePoint`] / [`Stroke`] — the geometry handed to recognizers.
//! * [`StrokeBuffer`] — accumulates strokes between draws and clears.
//! * [`StrokeCapturer`] — the narrow interface the recognition session reads
//!   stroke data through; [`SharedStrokeBuffer`] is the in-memory impl.
//!
//! # Quick start
//!
//! ```rust
//! use inkboard::stroke::StrokeBuffer;
//!
//! let mut buf = StrokeBuffer::new();
//! buf.begin_stroke();
//! buf.push_point(10.0, 12.5);
//! buf.push_point(11.0, 14.0);
//! buf.end_stroke();
//!
//! assert_eq!(buf.stroke_data().len(), 1);
//! buf.clear();
//! assert!(buf.is_empty());
//! ```

pub mod buffer;
pub mod capture;

pub use buffer::StrokeBuffer;
pub use capture::{new_shared_buffer, SharedStrokeBuffer, StrokeCapturer};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// A single sampled point of a stroke, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokePoint {
    pub x: f32,
    pub y: f32,
}

impl StrokePoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One continuous pointer drag: an ordered sequence of points.
pub type Stroke = Vec<StrokePoint>;
