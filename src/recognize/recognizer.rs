//! Core stroke-recognizer trait and implementations.
//!
//! # Overview
//!
//! [`StrokeRecognizer`] is the interface the recognition session drives.  It
//! is object-safe and `Send + Sync` so it can be held behind an
//! `Arc<dyn StrokeRecognizer>` and called from any task.
//!
//! [`UnavailableRecognizer`] is a stub that always reports
//! [`RecognizeError::Unavailable`] — hosts use it to launch before a model
//! has finished loading.
//!
//! [`MockRecognizer`] (available under `#[cfg(test)]`) returns a
//! pre-configured response with optional simulated latency — useful for
//! unit-testing the session and controller without a real model.

use async_trait::async_trait;
use thiserror::Error;

use crate::stroke::Stroke;

// ---------------------------------------------------------------------------
// RecognizeError
// ---------------------------------------------------------------------------

/// All errors that can arise from the recognition subsystem.
#[derive(Debug, Clone, Error)]
pub enum RecognizeError {
    /// No recognizer backend is ready (model absent or still loading).
    #[error("recognizer unavailable — no model loaded")]
    Unavailable,

    /// The stroke sequence was empty.  The session never dispatches empty
    /// input; seeing this means a recognizer was called directly.
    #[error("no strokes to recognize")]
    EmptyStrokes,

    /// The backend failed during inference.
    #[error("recognition failed: {0}")]
    Recognition(String),

    /// The backend did not answer within its deadline.
    #[error("recognition timed out")]
    Timeout,
}

// ---------------------------------------------------------------------------
// StrokeRecognizer trait
// ---------------------------------------------------------------------------

/// Object-safe, thread-safe interface for handwriting recognizers.
///
/// # Contract
///
/// - `strokes` is an ordered sequence of completed strokes, each an ordered
///   point sequence in canvas coordinates.
/// - Returns ranked candidate strings, best match first.
/// - Returns `Err(RecognizeError::EmptyStrokes)` when `strokes` is empty.
#[async_trait]
pub trait StrokeRecognizer: Send + Sync {
    /// Recognize `strokes` and return ranked text candidates.
    async fn recognize(&self, strokes: &[Stroke]) -> Result<Vec<String>, RecognizeError>;
}

// Compile-time assertion: Box<dyn StrokeRecognizer> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn StrokeRecognizer>) {}
};

// ---------------------------------------------------------------------------
// UnavailableRecognizer
// ---------------------------------------------------------------------------

/// Recognizer stub that always reports [`RecognizeError::Unavailable`].
///
/// Lets a host launch its handwriting panel before the model download /
/// initialisation has completed: submissions fail softly and the session
/// stays usable, and the host swaps in the real recognizer via
/// [`RecognitionSession::set_recognizer`] once ready.
///
/// [`RecognitionSession::set_recognizer`]: crate::recognize::RecognitionSession::set_recognizer
#[derive(Debug, Default)]
pub struct UnavailableRecognizer;

#[async_trait]
impl StrokeRecognizer for UnavailableRecognizer {
    async fn recognize(&self, _strokes: &[Stroke]) -> Result<Vec<String>, RecognizeError> {
        Err(RecognizeError::Unavailable)
    }
}

// ---------------------------------------------------------------------------
// MockRecognizer  (test-only)
// ---------------------------------------------------------------------------

/// A test double that returns a pre-configured response, optionally after a
/// simulated inference delay, and counts how often it was called.
#[cfg(test)]
pub struct MockRecognizer {
    response: Result<Vec<String>, RecognizeError>,
    latency: std::time::Duration,
    calls: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl MockRecognizer {
    /// Create a mock that always returns `Ok(candidates)`.
    pub fn ok<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            response: Ok(candidates.into_iter().map(Into::into).collect()),
            latency: std::time::Duration::ZERO,
            calls: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Create a mock that always returns `Err(error)`.
    pub fn err(error: RecognizeError) -> Self {
        Self {
            response: Err(error),
            latency: std::time::Duration::ZERO,
            calls: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Simulate a slow backend: `recognize` sleeps this long before
    /// answering.
    pub fn with_latency(mut self, latency: std::time::Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Number of times `recognize` was dispatched.
    pub fn call_count(&self) -> usize {
        self.calls.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
#[async_trait]
impl StrokeRecognizer for MockRecognizer {
    async fn recognize(&self, strokes: &[Stroke]) -> Result<Vec<String>, RecognizeError> {
        self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);

        // Enforce the empty-input contract even in the mock so that callers
        // are tested against it.
        if strokes.is_empty() {
            return Err(RecognizeError::EmptyStrokes);
        }

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.response.clone()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
