//! Physical key identity for the on-screen board.
//!
//! Keys are named by position (the web `event.code` convention), so the
//! same `KeyCode` resolves to different characters per layout language.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Physical key position on the 64-key board, layout-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Number row
    Backquote,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    Digit0,
    Minus,
    Equal,
    Backspace,
    // Top letter row
    Tab,
    KeyQ,
    KeyW,
    KeyE,
    KeyR,
    KeyT,
    KeyY,
    KeyU,
    KeyI,
    KeyO,
    KeyP,
    BracketLeft,
    BracketRight,
    Enter,
    // Home row
    CapsLock,
    KeyA,
    KeyS,
    KeyD,
    KeyF,
    KeyG,
    KeyH,
    KeyJ,
    KeyK,
    KeyL,
    Semicolon,
    Quote,
    Backslash,
    Delete,
    // Bottom letter row
    ShiftLeft,
    KeyZ,
    KeyX,
    KeyC,
    KeyV,
    KeyB,
    KeyN,
    KeyM,
    Comma,
    Period,
    Slash,
    ShiftRight,
    ArrowUp,
    // Control row
    ControlLeft,
    MetaLeft,
    AltLeft,
    Space,
    AltRight,
    ControlRight,
    ArrowLeft,
    ArrowDown,
    ArrowRight,
}

impl KeyCode {
    /// Every key position in board order (top-left to bottom-right).
    pub const ALL: [KeyCode; 64] = [
        KeyCode::Backquote,
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
        KeyCode::Digit5,
        KeyCode::Digit6,
        KeyCode::Digit7,
        KeyCode::Digit8,
        KeyCode::Digit9,
        KeyCode::Digit0,
        KeyCode::Minus,
        KeyCode::Equal,
        KeyCode::Backspace,
        KeyCode::Tab,
        KeyCode::KeyQ,
        KeyCode::KeyW,
        KeyCode::KeyE,
        KeyCode::KeyR,
        KeyCode::KeyT,
        KeyCode::KeyY,
        KeyCode::KeyU,
        KeyCode::KeyI,
        KeyCode::KeyO,
        KeyCode::KeyP,
        KeyCode::BracketLeft,
        KeyCode::BracketRight,
        KeyCode::Enter,
        KeyCode::CapsLock,
        KeyCode::KeyA,
        KeyCode::KeyS,
        KeyCode::KeyD,
        KeyCode::KeyF,
        KeyCode::KeyG,
        KeyCode::KeyH,
        KeyCode::KeyJ,
        KeyCode::KeyK,
        KeyCode::KeyL,
        KeyCode::Semicolon,
        KeyCode::Quote,
        KeyCode::Backslash,
        KeyCode::Delete,
        KeyCode::ShiftLeft,
        KeyCode::KeyZ,
        KeyCode::KeyX,
        KeyCode::KeyC,
        KeyCode::KeyV,
        KeyCode::KeyB,
        KeyCode::KeyN,
        KeyCode::KeyM,
        KeyCode::Comma,
        KeyCode::Period,
        KeyCode::Slash,
        KeyCode::ShiftRight,
        KeyCode::ArrowUp,
        KeyCode::ControlLeft,
        KeyCode::MetaLeft,
        KeyCode::AltLeft,
        KeyCode::Space,
        KeyCode::AltRight,
        KeyCode::ControlRight,
        KeyCode::ArrowLeft,
        KeyCode::ArrowDown,
        KeyCode::ArrowRight,
    ];

    /// Position code string, matching the web `event.code` convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyCode::Backquote => "Backquote",
            KeyCode::Digit1 => "Digit1",
            KeyCode::Digit2 => "Digit2",
            KeyCode::Digit3 => "Digit3",
            KeyCode::Digit4 => "Digit4",
            KeyCode::Digit5 => "Digit5",
            KeyCode::Digit6 => "Digit6",
            KeyCode::Digit7 => "Digit7",
            KeyCode::Digit8 => "Digit8",
            KeyCode::Digit9 => "Digit9",
            KeyCode::Digit0 => "Digit0",
            KeyCode::Minus => "Minus",
            KeyCode::Equal => "Equal",
            KeyCode::Backspace => "Backspace",
            KeyCode::Tab => "Tab",
            KeyCode::KeyQ => "KeyQ",
            KeyCode::KeyW => "KeyW",
            KeyCode::KeyE => "KeyE",
            KeyCode::KeyR => "KeyR",
            KeyCode::KeyT => "KeyT",
            KeyCode::KeyY => "KeyY",
            KeyCode::KeyU => "KeyU",
            KeyCode::KeyI => "KeyI",
            KeyCode::KeyO => "KeyO",
            KeyCode::KeyP => "KeyP",
            KeyCode::BracketLeft => "BracketLeft",
            KeyCode::BracketRight => "BracketRight",
            KeyCode::Enter => "Enter",
            KeyCode::CapsLock => "CapsLock",
            KeyCode::KeyA => "KeyA",
            KeyCode::KeyS => "KeyS",
            KeyCode::KeyD => "KeyD",
            KeyCode::KeyF => "KeyF",
            KeyCode::KeyG => "KeyG",
            KeyCode::KeyH => "KeyH",
            KeyCode::KeyJ => "KeyJ",
            KeyCode::KeyK => "KeyK",
            KeyCode::KeyL => "KeyL",
            KeyCode::Semicolon => "Semicolon",
            KeyCode::Quote => "Quote",
            KeyCode::Backslash => "Backslash",
            KeyCode::Delete => "Delete",
            KeyCode::ShiftLeft => "ShiftLeft",
            KeyCode::KeyZ => "KeyZ",
            KeyCode::KeyX => "KeyX",
            KeyCode::KeyC => "KeyC",
            KeyCode::KeyV => "KeyV",
            KeyCode::KeyB => "KeyB",
            KeyCode::KeyN => "KeyN",
            KeyCode::KeyM => "KeyM",
            KeyCode::Comma => "Comma",
            KeyCode::Period => "Period",
            KeyCode::Slash => "Slash",
            KeyCode::ShiftRight => "ShiftRight",
            KeyCode::ArrowUp => "ArrowUp",
            KeyCode::ControlLeft => "ControlLeft",
            KeyCode::MetaLeft => "MetaLeft",
            KeyCode::AltLeft => "AltLeft",
            KeyCode::Space => "Space",
            KeyCode::AltRight => "AltRight",
            KeyCode::ControlRight => "ControlRight",
            KeyCode::ArrowLeft => "ArrowLeft",
            KeyCode::ArrowDown => "ArrowDown",
            KeyCode::ArrowRight => "ArrowRight",
        }
    }

    /// Logical modifier this key maps to, if any.
    ///
    /// Left and right variants map to the same modifier.
    pub fn modifier(&self) -> Option<Modifier> {
        match self {
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Modifier::Shift),
            KeyCode::ControlLeft | KeyCode::ControlRight => Some(Modifier::Control),
            KeyCode::AltLeft | KeyCode::AltRight => Some(Modifier::Alt),
            _ => None,
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position code string not matching any key on the board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown key code: {0}")]
pub struct UnknownKeyCode(pub String);

impl FromStr for KeyCode {
    type Err = UnknownKeyCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnknownKeyCode(s.to_string()))
    }
}

/// Logical modifier identity, collapsed over left/right key variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Shift,
    Control,
    Alt,
}

impl Modifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Shift => "Shift",
            Modifier::Control => "Control",
            Modifier::Alt => "Alt",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the held logical modifiers at one point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub fn none() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_parse_known_codes() {
        assert_eq!("KeyQ".parse::<KeyCode>().unwrap(), KeyCode::KeyQ);
        assert_eq!("Digit3".parse::<KeyCode>().unwrap(), KeyCode::Digit3);
        assert_eq!("ShiftLeft".parse::<KeyCode>().unwrap(), KeyCode::ShiftLeft);
        assert_eq!("ArrowDown".parse::<KeyCode>().unwrap(), KeyCode::ArrowDown);
    }

    #[test]
    fn test_parse_unknown_code() {
        let err = "NumpadAdd".parse::<KeyCode>().unwrap_err();
        assert_eq!(err, UnknownKeyCode("NumpadAdd".to_string()));
    }

    #[test]
    fn test_as_str_round_trip() {
        for code in KeyCode::ALL {
            assert_eq!(code.as_str().parse::<KeyCode>().unwrap(), code);
        }
    }

    #[test]
    fn test_all_codes_unique() {
        let unique: HashSet<&str> = KeyCode::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(unique.len(), KeyCode::ALL.len());
    }

    #[test]
    fn test_modifier_mapping() {
        assert_eq!(KeyCode::ShiftLeft.modifier(), Some(Modifier::Shift));
        assert_eq!(KeyCode::ShiftRight.modifier(), Some(Modifier::Shift));
        assert_eq!(KeyCode::ControlRight.modifier(), Some(Modifier::Control));
        assert_eq!(KeyCode::AltLeft.modifier(), Some(Modifier::Alt));
        assert_eq!(KeyCode::MetaLeft.modifier(), None);
        assert_eq!(KeyCode::KeyA.modifier(), None);
        assert_eq!(KeyCode::CapsLock.modifier(), None);
    }

    #[test]
    fn test_modifiers_default_is_empty() {
        let mods = Modifiers::none();
        assert!(!mods.shift && !mods.control && !mods.alt);
    }
}
