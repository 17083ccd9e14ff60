//! Held-key bookkeeping with a logical modifier view.

use std::collections::HashSet;

use klava_core::{KeyCode, Modifier, Modifiers};

/// Tracks which physical keys are currently held.
///
/// Left and right modifier keys collapse into one logical modifier:
/// holding either Shift sets Shift, and releasing either clears it,
/// matching the single Shift state the board displays.
#[derive(Debug, Default, Clone)]
pub struct KeyTracker {
    held: HashSet<KeyCode>,
    modifiers: HashSet<Modifier>,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Pressing an already-held key is a no-op.
    pub fn press(&mut self, code: KeyCode) {
        self.held.insert(code);
        if let Some(modifier) = code.modifier() {
            self.modifiers.insert(modifier);
        }
    }

    /// Record a key release.
    pub fn release(&mut self, code: KeyCode) {
        self.held.remove(&code);
        if let Some(modifier) = code.modifier() {
            self.modifiers.remove(&modifier);
        }
    }

    /// Whether the physical key is currently held.
    pub fn is_held(&self, code: KeyCode) -> bool {
        self.held.contains(&code)
    }

    /// Snapshot of the logical modifier state.
    pub fn modifiers(&self) -> Modifiers {
        Modifiers {
            shift: self.modifiers.contains(&Modifier::Shift),
            control: self.modifiers.contains(&Modifier::Control),
            alt: self.modifiers.contains(&Modifier::Alt),
        }
    }

    /// Whether the layout-switch chord (Shift and Control) is held.
    pub fn layout_chord(&self) -> bool {
        self.modifiers.contains(&Modifier::Shift) && self.modifiers.contains(&Modifier::Control)
    }

    /// Keys currently held, for releasing them all on focus loss.
    pub fn held_keys(&self) -> Vec<KeyCode> {
        self.held.iter().copied().collect()
    }

    /// Drop all held state.
    pub fn clear(&mut self) {
        self.held.clear();
        self.modifiers.clear();
    }
}
