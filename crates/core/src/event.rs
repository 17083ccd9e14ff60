//! Event types exchanged with the host environment.
//!
//! This module provides:
//! - `InputEvent` - raw input delivered by the host (keyboard, pointer, tick)
//! - `WidgetEvent` - notifications the engine emits for the rendering layer

use crate::key::KeyCode;
use crate::language::Language;

/// Raw input delivered by the host environment.
///
/// Keyboard and pointer input carry the same physical key identity; the
/// host maps a pointer hit on a rendered key element to that key's code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Physical key pressed
    KeyDown(KeyCode),
    /// Physical key released
    KeyUp(KeyCode),
    /// Pointer pressed on a rendered key element
    PointerDown(KeyCode),
    /// Pointer released over (or dragged off) a rendered key element
    PointerUp(KeyCode),
    /// Periodic tick from the host event loop, drives the repeat timer
    Tick,
    /// The widget lost input focus
    FocusLost,
}

/// Notifications emitted by the engine for the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEvent {
    /// A key gained the pressed visual state
    KeyPressed(KeyCode),
    /// A key lost the pressed visual state
    KeyReleased(KeyCode),
    /// The active language changed; key glyphs need re-rendering
    LanguageChanged(Language),
    /// Caps Lock toggled; the indicator should match the new state
    CapsChanged(bool),
    /// Buffer content or cursor changed; the text view needs redrawing
    NeedsRedraw,
}
