//! Key press resolution.
//!
//! This module implements the command pattern for board input, separating
//! "which key went down" from "what it does to the engine". Every binding
//! lives in one match, so a press resolves the same way whether it came
//! from the physical keyboard, a pointer tap or the repeat timer.

use klava_core::{KeyCode, Language, Modifier, Modifiers};
use klava_layout::{KeyEntry, Layout, UnmappedKey};

/// Action a single key press performs on the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    // Text editing
    /// Insert one character at the cursor
    Insert(char),
    InsertNewline,
    InsertTab,
    Backspace,
    Delete,

    // Cursor motion
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,

    // Input state
    ToggleCapsLock,
    /// Hold a modifier; changes how later presses resolve
    Hold(Modifier),

    // No operation (the Win key)
    None,
}

impl KeyAction {
    /// Resolve a key press into its action.
    ///
    /// Control keys are position-bound and ignore the language. Printable
    /// keys go through the language table: Shift selects the shifted
    /// variant, then Caps Lock uppercases the result, or lowercases it
    /// when Shift is also held.
    pub fn resolve(
        code: KeyCode,
        language: Language,
        modifiers: Modifiers,
        caps_lock: bool,
    ) -> Result<Self, UnmappedKey> {
        let action = match code {
            // Editing keys
            KeyCode::Backspace => Self::Backspace,
            KeyCode::Delete => Self::Delete,
            KeyCode::Enter => Self::InsertNewline,
            KeyCode::Tab => Self::InsertTab,

            // Cursor keys
            KeyCode::ArrowLeft => Self::MoveLeft,
            KeyCode::ArrowRight => Self::MoveRight,
            KeyCode::ArrowUp => Self::MoveUp,
            KeyCode::ArrowDown => Self::MoveDown,

            // Latches and modifiers
            KeyCode::CapsLock => Self::ToggleCapsLock,
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Self::Hold(Modifier::Shift),
            KeyCode::ControlLeft | KeyCode::ControlRight => Self::Hold(Modifier::Control),
            KeyCode::AltLeft | KeyCode::AltRight => Self::Hold(Modifier::Alt),

            // Rendered but bound to nothing
            KeyCode::MetaLeft => Self::None,

            // Everything else carries a character pair in the layout table
            code => match Layout::of(language).lookup(code)? {
                KeyEntry::Char { base, shifted } => {
                    let ch = if modifiers.shift { shifted } else { base };
                    Self::Insert(apply_caps_lock(ch, modifiers, caps_lock))
                }
                KeyEntry::Control(_) => Self::None,
            },
        };
        Ok(action)
    }
}

/// Flip letter case under Caps Lock.
///
/// Caps Lock alone uppercases; together with Shift it lowercases, undoing
/// the shifted variant for letters. Characters without case pass through.
fn apply_caps_lock(ch: char, modifiers: Modifiers, caps_lock: bool) -> char {
    if !caps_lock {
        ch
    } else if modifiers.shift {
        ch.to_lowercase().next().unwrap_or(ch)
    } else {
        ch.to_uppercase().next().unwrap_or(ch)
    }
}
