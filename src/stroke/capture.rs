//! The capturer interface the recognition side reads strokes through.
//!
//! The host owns the canvas widget and its pointer math; the core only needs
//! two operations from it: hand over the completed strokes, and wipe the
//! slate after a candidate is committed.  [`SharedStrokeBuffer`] is the
//! ready-made in-memory implementation — the host pushes points into it from
//! its canvas events and hands a clone to the controller.

use std::sync::{Arc, Mutex};

use crate::stroke::{Stroke, StrokeBuffer};

// ---------------------------------------------------------------------------
// StrokeCapturer
// ---------------------------------------------------------------------------

/// Read side of a stroke capture surface.
///
/// Implementations must be `Send + Sync` so the controller can hold them
/// behind an `Arc<dyn StrokeCapturer>` next to the async recognition session.
pub trait StrokeCapturer: Send + Sync {
    /// Owned snapshot of all completed strokes since the last clear.
    fn stroke_data(&self) -> Vec<Stroke>;

    /// Discard all captured strokes (candidate committed, or canvas cleared).
    fn clear(&self);
}

// Compile-time assertion: Box<dyn StrokeCapturer> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn StrokeCapturer>) {}
};

// ---------------------------------------------------------------------------
// SharedStrokeBuffer
// ---------------------------------------------------------------------------

/// Thread-safe handle to a [`StrokeBuffer`].
///
/// Cheap to clone (`Arc` clone) and coercible to `Arc<dyn StrokeCapturer>`.
/// Lock for a short critical section; do **not** hold the lock across
/// `.await` points.
pub type SharedStrokeBuffer = Arc<Mutex<StrokeBuffer>>;

/// Construct a new, empty [`SharedStrokeBuffer`].
pub fn new_shared_buffer() -> SharedStrokeBuffer {
    Arc::new(Mutex::new(StrokeBuffer::new()))
}

impl StrokeCapturer for Mutex<StrokeBuffer> {
    fn stroke_data(&self) -> Vec<Stroke> {
        self.lock().unwrap().stroke_data()
    }

    fn clear(&self) {
        self.lock().unwrap().clear();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_buffer_round_trip() {
        let shared = new_shared_buffer();

        {
            let mut buf = shared.lock().unwrap();
            buf.begin_stroke();
            buf.push_point(1.0, 1.0);
            buf.end_stroke();
        }

        let capturer: Arc<dyn StrokeCapturer> = shared.clone();
        assert_eq!(capturer.stroke_data().len(), 1);

        capturer.clear();
        assert!(shared.lock().unwrap().is_empty());
    }

    #[test]
    fn shared_buffer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SharedStrokeBuffer>();
    }

    #[test]
    fn clones_share_state() {
        let shared = new_shared_buffer();
        let shared2 = Arc::clone(&shared);

        {
            let mut buf = shared.lock().unwrap();
            buf.begin_stroke();
            buf.push_point(2.0, 2.0);
            buf.end_stroke();
        }

        assert_eq!(shared2.stroke_data().len(), 1);
    }
}
