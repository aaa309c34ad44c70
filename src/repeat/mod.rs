//! Long-press key repeat.
//!
//! Holding a soft-keyboard key re-fires its action after an initial delay,
//! then periodically until release.  [`KeyRepeater`] owns the timing state for
//! one key surface; [`RepeatConfig`] carries the two durations that control
//! it (400 ms delay, 60 ms interval by default).
//!
//! # Usage
//!
//! ```rust,no_run
//! use inkboard::repeat::KeyRepeater;
//!
//! #[tokio::main]
//! async fn main() {
//!     let repeater = KeyRepeater::new();
//!
//!     // Pointer down: fires immediately, repeats after 400 ms.
//!     repeater.start(|| println!("delete"));
//!
//!     // Pointer up / leave / cancel: all roads lead here.
//!     repeater.stop();
//! }
//! ```

pub mod scheduler;

pub use scheduler::{KeyRepeater, RepeatConfig};
