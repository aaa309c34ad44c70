//! Pointer interaction layer shared by every keyboard panel.
//!
//! Every panel — numeric, symbol, handwriting — wires the same four pointer
//! handlers to every key: down starts the action, and up/leave/cancel all
//! stop it, because a lost pointer must never leave a key auto-repeating.
//! [`KeyController`] centralises that wiring once instead of re-deriving it
//! per key, and classifies each press through its [`KeyBinding`]:
//!
//! * [`KeyMode::Momentary`] — fires once on pointer down; up/leave/cancel
//!   are ignored.
//! * [`KeyMode::Repeating`] — pointer down starts long-press repeat; any of
//!   up/leave/cancel stops it.
//!
//! The controller emits one [`KeyEvent`] per logical key activation upward to
//! the host panel, and forwards canvas draw-end notifications to the
//! recognition session.

pub mod controller;
pub mod events;

pub use controller::{KeyController, PointerTarget};
pub use events::{KeyBinding, KeyEvent, KeyMode};
