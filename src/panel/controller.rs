//! Pointer interaction controller.
//!
//! [`KeyController`] translates the pointer lifecycle of a key surface into
//! calls on the repeat scheduler and the recognition session:
//!
//! ```text
//! pointer down ──▶ momentary: emit once
//!                  repeating: capture pointer, KeyRepeater::start
//! pointer up / leave / cancel ──▶ KeyRepeater::stop
//! context menu ──▶ suppressed, always
//! draw end ──▶ RecognitionSession::submit(capturer strokes)
//! candidate tap ──▶ emit candidate, clear candidates + canvas
//! ```
//!
//! The controller is mode-agnostic: which keys are momentary and which
//! repeat is the host panel's per-key, per-press decision via
//! [`KeyBinding`].

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::panel::events::{KeyBinding, KeyEvent, KeyMode};
use crate::recognize::RecognitionSession;
use crate::repeat::{KeyRepeater, RepeatConfig};
use crate::stroke::StrokeCapturer;

// ---------------------------------------------------------------------------
// PointerTarget
// ---------------------------------------------------------------------------

/// Host-side handle for the pressed key widget and its triggering event.
///
/// Stands in for the toolkit's element / pointer-capture mechanism, which
/// lives outside the core.
pub trait PointerTarget {
    /// Route all further events of this pointer gesture to the pressed key,
    /// so a drag-off-and-release still reaches its up/cancel handler.
    fn capture_pointer(&self);

    /// Cancel the toolkit's default reaction to the triggering event
    /// (text selection, native long-press menu, …).
    fn prevent_default(&self);
}

// ---------------------------------------------------------------------------
// KeyController
// ---------------------------------------------------------------------------

/// The interaction engine behind one keyboard panel.
///
/// Owns the panel's [`KeyRepeater`] and emits one [`KeyEvent`] per logical
/// key activation on the channel given at construction.  Events that can no
/// longer be delivered (host receiver dropped) are discarded.
pub struct KeyController {
    repeater: KeyRepeater,
    session: Arc<RecognitionSession>,
    capturer: Arc<dyn StrokeCapturer>,
    keys_tx: mpsc::UnboundedSender<KeyEvent>,
}

impl KeyController {
    /// Create a controller for one panel.
    ///
    /// * `repeat` — long-press timing for the panel's repeating keys.
    /// * `session` — recognition session shared with the host (which reads
    ///   candidates from it).
    /// * `capturer` — the stroke surface read on draw-end.
    /// * `keys_tx` — upward key-event channel to the host panel.
    pub fn new(
        repeat: RepeatConfig,
        session: Arc<RecognitionSession>,
        capturer: Arc<dyn StrokeCapturer>,
        keys_tx: mpsc::UnboundedSender<KeyEvent>,
    ) -> Self {
        Self {
            repeater: KeyRepeater::with_config(repeat),
            session,
            capturer,
            keys_tx,
        }
    }

    /// The recognition session this controller feeds.
    pub fn session(&self) -> &Arc<RecognitionSession> {
        &self.session
    }

    // -----------------------------------------------------------------------
    // Pointer lifecycle
    // -----------------------------------------------------------------------

    /// Pointer down on a key.
    ///
    /// Momentary keys fire exactly once.  Repeating keys capture the pointer
    /// and start the repeat sequence — the first fire happens here, on
    /// touch-down.
    pub fn pointer_down(&self, binding: &KeyBinding, target: &dyn PointerTarget) {
        target.prevent_default();

        match binding.mode {
            KeyMode::Momentary => {
                self.emit(binding.event());
            }
            KeyMode::Repeating => {
                target.capture_pointer();
                let keys_tx = self.keys_tx.clone();
                let event = binding.event();
                self.repeater.start(move || {
                    if keys_tx.send(event.clone()).is_err() {
                        log::debug!("panel: key event dropped, receiver closed");
                    }
                });
            }
        }
    }

    /// Pointer released over the key.
    pub fn pointer_up(&self) {
        self.repeater.stop();
    }

    /// Pointer dragged off the key.
    ///
    /// Treated exactly like a release: a pointer that left the key must not
    /// keep it repeating.
    pub fn pointer_leave(&self) {
        self.repeater.stop();
    }

    /// Pointer gesture aborted by the system (palm rejection, window switch).
    ///
    /// Treated exactly like a release.
    pub fn pointer_cancel(&self) {
        self.repeater.stop();
    }

    /// Secondary-press / long-press system menu trigger on a key.
    ///
    /// Always suppressed — keys never show a context menu.
    pub fn context_menu(&self, target: &dyn PointerTarget) {
        target.prevent_default();
    }

    // -----------------------------------------------------------------------
    // Handwriting
    // -----------------------------------------------------------------------

    /// The canvas reported the end of a stroke: submit the captured strokes.
    ///
    /// Goes through the session's single-flight guard, so a burst of
    /// draw-end events dispatches at most one recognition call.
    pub async fn draw_ended(&self) {
        let strokes = self.capturer.stroke_data();
        self.session.submit(&strokes).await;
    }

    /// The user tapped candidate `index` in the candidate list.
    ///
    /// Emits the candidate as a character key, then clears both the
    /// candidate list and the stroke surface for the next character.
    /// Out-of-range indices are ignored and return `None`.
    pub fn select_candidate(&self, index: usize) -> Option<String> {
        let candidate = self.session.candidates().get(index).cloned()?;

        self.emit(KeyEvent::character(candidate.clone()));
        self.session.clear_candidates();
        self.capturer.clear();

        Some(candidate)
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn emit(&self, event: KeyEvent) {
        if self.keys_tx.send(event).is_err() {
            log::debug!("panel: key event dropped, receiver closed");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
