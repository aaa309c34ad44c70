//! Handwriting recognition — recognizer interface and single-flight session.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │              StrokeRecognizer (trait)                │
//! │                                                      │
//! │   strokes ──▶ recognize() ──▶ ranked candidates      │
//! └──────────────────────────▲───────────────────────────┘
//!                            │ at most one call in flight
//!                  ┌─────────┴─────────┐
//!                  │ RecognitionSession │──▶ candidates()
//!                  └────────────────────┘
//! ```
//!
//! The recognizer itself (model loading, inference) lives in the host; the
//! core drives it through [`StrokeRecognizer`] and guards it with
//! [`RecognitionSession`] so rapid draw-end events can never overlap calls.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use inkboard::recognize::{RecognitionSession, UnavailableRecognizer};
//! use inkboard::stroke::StrokePoint;
//!
//! #[tokio::main]
//! async fn main() {
//!     // Hosts start with the stub and attach a real recognizer once its
//!     // model has finished loading.
//!     let session = RecognitionSession::new(Arc::new(UnavailableRecognizer));
//!
//!     let strokes = vec![vec![StrokePoint::new(0.0, 0.0), StrokePoint::new(4.0, 4.0)]];
//!     session.submit(&strokes).await;
//!
//!     println!("candidates: {:?}", session.candidates());
//! }
//! ```

pub mod recognizer;
pub mod session;

// ── Public re-exports ──────────────────────────────────────────────────────

pub use recognizer::{RecognizeError, StrokeRecognizer, UnavailableRecognizer};
pub use session::RecognitionSession;

// test-only re-export so other modules' test code can import MockRecognizer
// without `use inkboard::recognize::recognizer::MockRecognizer`.
#[cfg(test)]
pub use recognizer::MockRecognizer;
