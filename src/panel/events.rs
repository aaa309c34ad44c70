//! Key activation payloads and per-key press classification.

// ---------------------------------------------------------------------------
// KeyEvent
// ---------------------------------------------------------------------------

/// One logical key activation, delivered to the host panel.
///
/// The immediate fire on pointer down and every subsequent repeat tick are
/// each one emission.  Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// The literal character, or the name of a control key.
    pub key: String,
    /// `true` for semantic control keys (`delete`, `enter`, …), `false` for
    /// literal character keys.
    pub is_control: bool,
}

impl KeyEvent {
    /// A literal character key (digit, symbol, recognized candidate, space).
    pub fn character(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            is_control: false,
        }
    }

    /// A semantic control key (`delete`, `enter`, `back`, …).
    pub fn control(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            is_control: true,
        }
    }
}

// ---------------------------------------------------------------------------
// KeyMode
// ---------------------------------------------------------------------------

/// How a key reacts to being held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMode {
    /// Fires exactly once on pointer down; hold duration is irrelevant and
    /// pointer up/leave/cancel are ignored.
    Momentary,
    /// Fires on pointer down, then auto-repeats while held.
    Repeating,
}

// ---------------------------------------------------------------------------
// KeyBinding
// ---------------------------------------------------------------------------

/// Static, per-key press classification, decided by the host panel.
///
/// A panel-wide behaviour flip (e.g. a symbol panel whose lock toggle turns
/// one-shot keys into repeating ones) is expressed by choosing the binding
/// mode at press time:
///
/// ```rust
/// use inkboard::panel::{KeyBinding, KeyMode};
///
/// let locked = true;
/// let binding = if locked {
///     KeyBinding::repeating("%")
/// } else {
///     KeyBinding::momentary("%")
/// };
/// assert_eq!(binding.mode, KeyMode::Repeating);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    /// The key payload emitted on every activation.
    pub key: String,
    /// Whether the payload is a semantic control key.
    pub is_control: bool,
    /// Momentary or repeating press behaviour.
    pub mode: KeyMode,
}

impl KeyBinding {
    /// A character key that fires once per press.
    pub fn momentary(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            is_control: false,
            mode: KeyMode::Momentary,
        }
    }

    /// A character key that auto-repeats while held.
    pub fn repeating(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            is_control: false,
            mode: KeyMode::Repeating,
        }
    }

    /// Mark this binding as a semantic control key (`delete`, `enter`, …).
    pub fn control(mut self) -> Self {
        self.is_control = true;
        self
    }

    /// The event emitted for one activation of this key.
    pub fn event(&self) -> KeyEvent {
        KeyEvent {
            key: self.key.clone(),
            is_control: self.is_control,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
