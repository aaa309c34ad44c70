//! inkboard — interaction engine for an on-screen input-method keyboard.
//!
//! The rendering layer of a soft keyboard (layout, icons, styling, panel
//! switching) is view glue; the behaviour that actually has contracts lives
//! here and is shared by every panel:
//!
//! * [`repeat`] — long-press key repeat: act once on press, then repeat on a
//!   timer until the pointer is released or lost.
//! * [`stroke`] — handwriting stroke geometry and the buffer that accumulates
//!   it between draws.
//! * [`recognize`] — a single-flight session around a slow, async
//!   handwriting-recognition call, plus the recognizer trait it drives.
//! * [`panel`] — the pointer interaction controller that maps pointer
//!   lifecycle events onto the pieces above and emits [`panel::KeyEvent`]s to
//!   the host.
//! * [`config`] — settings structs with TOML persistence.
//!
//! # Architecture
//!
//! ```text
//! host panel ──pointer down/up/leave/cancel──▶ KeyController
//!                                               ├─▶ KeyRepeater ──ticks──▶ KeyEvent channel
//!                                               └─▶ RecognitionSession ──▶ candidates
//! canvas     ──draw end──────────────────────▶ KeyController
//! ```
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use inkboard::panel::{KeyBinding, KeyController, KeyEvent};
//! use inkboard::recognize::{RecognitionSession, UnavailableRecognizer};
//! use inkboard::repeat::RepeatConfig;
//! use inkboard::stroke::new_shared_buffer;
//! use tokio::sync::mpsc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let session = Arc::new(RecognitionSession::new(Arc::new(UnavailableRecognizer)));
//!     let capturer = new_shared_buffer();
//!     let (keys_tx, mut keys_rx) = mpsc::unbounded_channel::<KeyEvent>();
//!
//!     let controller = KeyController::new(
//!         RepeatConfig::default(),
//!         Arc::clone(&session),
//!         capturer,
//!         keys_tx,
//!     );
//!
//!     // Panels call controller.pointer_down(&binding, &target) from their
//!     // key handlers; the host drains key events here.
//!     let _delete = KeyBinding::repeating("delete").control();
//!     while let Some(event) = keys_rx.recv().await {
//!         println!("key: {} (control: {})", event.key, event.is_control);
//!     }
//!     let _ = controller;
//! }
//! ```

pub mod config;
pub mod panel;
pub mod recognize;
pub mod repeat;
pub mod stroke;
