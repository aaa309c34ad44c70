//! Single-flight recognition session.
//!
//! Handwriting recognition is slow relative to UI events: a user can end a
//! stroke, immediately start another, and end that one too while the first
//! call is still running.  [`RecognitionSession`] guards the recognizer so
//! that at most one call is ever outstanding — excess submissions are
//! **dropped**, not queued, which keeps results strictly in submission order
//! and makes a burst of draw-end events harmless.
//!
//! Dropped submissions are not errors; only a genuine recognizer failure is
//! surfaced, and then only as a logged, recorded event — the session stays
//! usable for the next stroke.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::recognize::recognizer::StrokeRecognizer;
use crate::stroke::Stroke;

/// Default cap on the stored candidate list.
const DEFAULT_MAX_CANDIDATES: usize = 8;

// ---------------------------------------------------------------------------
// InFlightGuard
// ---------------------------------------------------------------------------

/// Clears the in-flight flag on drop, whatever happens to the call —
/// success, failure, panic, or the future being dropped mid-await.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

// ---------------------------------------------------------------------------
// RecognitionSession
// ---------------------------------------------------------------------------

/// Serialises recognition calls for one handwriting surface.
///
/// Shared by reference between the controller and the host panel; all
/// methods take `&self`.
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use inkboard::recognize::{RecognitionSession, UnavailableRecognizer};
///
/// # async fn example() {
/// let session = Arc::new(RecognitionSession::new(Arc::new(UnavailableRecognizer)));
/// // Wire session.submit(...) to the canvas draw-end event, read
/// // session.candidates() to render the candidate list.
/// # }
/// ```
pub struct RecognitionSession {
    /// The backend, swappable once model initialisation completes.
    recognizer: Mutex<Option<Arc<dyn StrokeRecognizer>>>,
    /// True from call dispatch until the call settles.
    in_flight: AtomicBool,
    /// Most recent successful candidate set, best match first.
    candidates: Mutex<Vec<String>>,
    /// Message of the most recent failure; cleared by the next success.
    last_error: Mutex<Option<String>>,
    /// Cap applied to the stored candidate list.
    max_candidates: usize,
}

impl RecognitionSession {
    /// Create a session driving `recognizer`.
    pub fn new(recognizer: Arc<dyn StrokeRecognizer>) -> Self {
        Self {
            recognizer: Mutex::new(Some(recognizer)),
            in_flight: AtomicBool::new(false),
            candidates: Mutex::new(Vec::new()),
            last_error: Mutex::new(None),
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }

    /// Create a session with no recognizer attached yet.
    ///
    /// Submissions are dropped (with a warning) until
    /// [`set_recognizer`](Self::set_recognizer) is called.
    pub fn detached() -> Self {
        Self {
            recognizer: Mutex::new(None),
            in_flight: AtomicBool::new(false),
            candidates: Mutex::new(Vec::new()),
            last_error: Mutex::new(None),
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }

    /// Override the candidate-list cap (default 8).
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    /// Attach or replace the recognizer backend.
    ///
    /// Takes effect from the next [`submit`](Self::submit); a call already in
    /// flight keeps the backend it was dispatched with.
    pub fn set_recognizer(&self, recognizer: Arc<dyn StrokeRecognizer>) {
        *self.recognizer.lock().unwrap() = Some(recognizer);
    }

    // -----------------------------------------------------------------------
    // Submission
    // -----------------------------------------------------------------------

    /// Submit `strokes` for recognition.
    ///
    /// Silently ignores the submission when `strokes` is empty (nothing has
    /// been drawn since the last clear) or when a call is already in flight —
    /// rapid repeated draw-end triggers must neither queue nor error.  An
    /// absent recognizer also drops the submission, with a warning.
    ///
    /// On success the candidate set is replaced (truncated to the configured
    /// cap).  On failure the previous candidates are retained so a transient
    /// failure does not blank a useful result list, and the failure message
    /// is recorded in [`last_error`](Self::last_error).
    pub async fn submit(&self, strokes: &[Stroke]) {
        if strokes.is_empty() {
            return;
        }

        let recognizer = match self.recognizer.lock().unwrap().clone() {
            Some(recognizer) => recognizer,
            None => {
                log::warn!("recognize: no recognizer attached, submission dropped");
                return;
            }
        };

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            log::debug!("recognize: submission dropped, a call is already in flight");
            return;
        }
        let _guard = InFlightGuard(&self.in_flight);

        // Owned snapshot: drawing may continue while the call is outstanding
        // without mutating what was submitted.
        let snapshot: Vec<Stroke> = strokes.to_vec();

        match recognizer.recognize(&snapshot).await {
            Ok(mut results) => {
                results.truncate(self.max_candidates);
                log::debug!("recognize: {} candidate(s)", results.len());
                *self.candidates.lock().unwrap() = results;
                *self.last_error.lock().unwrap() = None;
            }
            Err(e) => {
                log::warn!("recognize: recognition failed: {e}");
                *self.last_error.lock().unwrap() = Some(e.to_string());
            }
        }
    }

    // -----------------------------------------------------------------------
    // Results
    // -----------------------------------------------------------------------

    /// The current candidate set, best match first.
    pub fn candidates(&self) -> Vec<String> {
        self.candidates.lock().unwrap().clone()
    }

    /// Drop all candidates (a candidate was committed, or the canvas was
    /// cleared).
    pub fn clear_candidates(&self) {
        self.candidates.lock().unwrap().clear();
    }

    /// Message of the most recent recognition failure, if the last settled
    /// call failed.
    pub fn last_error(&self) -> Option<String> {
        self.last_error.lock().unwrap().clone()
    }

    /// Returns `true` while a recognition call is outstanding.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
