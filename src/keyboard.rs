//! The engine: one struct owning every piece of keyboard state.
//!
//! `Keyboard` wires the held-key tracker, the repeat timer, the layout
//! tables and the text buffer together. Hosts feed it input events and
//! render from the notifications it returns.

use std::time::Instant;

use anyhow::Result;

use klava_buffer::TextBuffer;
use klava_config::{Config, PreferenceStore, LANGUAGE_KEY};
use klava_core::{InputEvent, KeyCode, Language, Modifiers, WidgetEvent};
use klava_input::{KeyTracker, RepeatTimer};
use klava_layout::Layout;

use crate::resolver::KeyAction;

/// The on-screen keyboard engine.
///
/// The language survives restarts through the preference store; every
/// other piece of state starts fresh. Event handlers return the
/// notifications the input produced, in order, for the rendering layer.
pub struct Keyboard {
    language: Language,
    caps_lock: bool,
    tracker: KeyTracker,
    repeat: RepeatTimer,
    buffer: TextBuffer,
    store: Box<dyn PreferenceStore>,
}

impl Keyboard {
    /// Engine with default settings, restoring the language from `store`.
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        Self::with_config(&Config::default(), store)
    }

    /// Engine with explicit settings, restoring the language from `store`.
    ///
    /// A missing or unparseable stored language falls back to English.
    pub fn with_config(config: &Config, store: Box<dyn PreferenceStore>) -> Self {
        let language = store
            .get(LANGUAGE_KEY)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default();
        Keyboard {
            language,
            caps_lock: false,
            tracker: KeyTracker::new(),
            repeat: RepeatTimer::new(config.keyboard.repeat_delay()),
            buffer: TextBuffer::new(),
            store,
        }
    }

    /// Dispatch one host input event.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<Vec<WidgetEvent>> {
        match event {
            InputEvent::KeyDown(code) => self.key_down(code),
            InputEvent::KeyUp(code) => Ok(self.key_up(code)),
            InputEvent::PointerDown(code) => self.pointer_down(code),
            InputEvent::PointerUp(code) => Ok(self.pointer_up(code)),
            InputEvent::Tick => self.tick(),
            InputEvent::FocusLost => Ok(self.focus_lost()),
        }
    }

    /// Handle a key going down.
    ///
    /// The layout-switch chord check runs before resolution, so a press
    /// that completes Shift+Ctrl types in the layout it switched to. A
    /// character press also arms the one-shot repeat for its key.
    pub fn key_down(&mut self, code: KeyCode) -> Result<Vec<WidgetEvent>> {
        klava_logger::debug(format!("key down: {}", code));
        self.tracker.press(code);
        let mut events = vec![WidgetEvent::KeyPressed(code)];

        // Checked on every press: the chord fires again for each key that
        // goes down while Shift and Ctrl stay held
        if self.tracker.layout_chord() {
            self.switch_language(&mut events);
        }

        let action = self.resolve(code)?;
        if let KeyAction::Insert(_) = action {
            self.repeat.arm(code, Instant::now());
        }
        self.apply(action, &mut events);
        Ok(events)
    }

    /// Handle a key coming back up.
    ///
    /// Releasing cancels the key's pending repeat; the buffer is
    /// untouched.
    pub fn key_up(&mut self, code: KeyCode) -> Vec<WidgetEvent> {
        klava_logger::debug(format!("key up: {}", code));
        self.tracker.release(code);
        self.repeat.cancel(code);
        vec![WidgetEvent::KeyReleased(code)]
    }

    /// Handle a pointer press on a rendered key element.
    ///
    /// Pointer input carries the same physical key identity as keyboard
    /// input and goes through the same path.
    pub fn pointer_down(&mut self, code: KeyCode) -> Result<Vec<WidgetEvent>> {
        self.key_down(code)
    }

    /// Handle a pointer release over a rendered key element.
    pub fn pointer_up(&mut self, code: KeyCode) -> Vec<WidgetEvent> {
        self.key_up(code)
    }

    /// Advance the repeat schedule.
    ///
    /// Each due key re-fires once if it is still held, resolved against
    /// the current language, modifier and lock state rather than a
    /// snapshot from press time.
    pub fn tick(&mut self) -> Result<Vec<WidgetEvent>> {
        let mut events = Vec::new();
        for code in self.repeat.due(Instant::now()) {
            if !self.tracker.is_held(code) {
                continue;
            }
            let action = self.resolve(code)?;
            self.apply(action, &mut events);
        }
        Ok(events)
    }

    /// Release everything held, for when the widget loses input focus.
    ///
    /// Keys released while the widget is unfocused never deliver a
    /// key-up, so the held set and the repeat schedule are dropped
    /// wholesale.
    pub fn focus_lost(&mut self) -> Vec<WidgetEvent> {
        let events: Vec<WidgetEvent> = self
            .tracker
            .held_keys()
            .into_iter()
            .map(WidgetEvent::KeyReleased)
            .collect();
        self.tracker.clear();
        self.repeat.clear();
        events
    }

    /// The active layout language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// The active key table, in board order for rendering.
    pub fn layout(&self) -> Layout {
        Layout::of(self.language)
    }

    /// Whether the Caps Lock latch is on.
    pub fn caps_lock(&self) -> bool {
        self.caps_lock
    }

    /// Snapshot of the held logical modifiers, for shifted keycap display.
    pub fn modifiers(&self) -> Modifiers {
        self.tracker.modifiers()
    }

    /// The text the board has typed.
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    /// The text buffer, for cursor and line rendering.
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Set the buffer selection, for pointer interaction with the text
    /// view. Both ends clamp to the buffer.
    pub fn set_selection(&mut self, anchor: usize, active: usize) {
        self.buffer.set_selection(anchor, active);
    }

    /// Resolve `code` at the current engine state.
    fn resolve(&self, code: KeyCode) -> Result<KeyAction> {
        match KeyAction::resolve(code, self.language, self.tracker.modifiers(), self.caps_lock) {
            Ok(action) => Ok(action),
            Err(err) => {
                klava_logger::error(format!("dropping key press: {}", err));
                Err(err.into())
            }
        }
    }

    /// Toggle the layout language and persist the choice.
    ///
    /// A store write failure does not undo the switch.
    fn switch_language(&mut self, events: &mut Vec<WidgetEvent>) {
        self.language = self.language.toggled();
        if let Err(err) = self.store.set(LANGUAGE_KEY, self.language.as_str()) {
            klava_logger::warn(format!("failed to persist language: {}", err));
        }
        klava_logger::info(format!("language switched to {}", self.language));
        events.push(WidgetEvent::LanguageChanged(self.language));
    }

    /// Apply a resolved action to the buffer and engine state.
    fn apply(&mut self, action: KeyAction, events: &mut Vec<WidgetEvent>) {
        match action {
            KeyAction::Insert(ch) => {
                self.buffer.insert_char(ch);
                events.push(WidgetEvent::NeedsRedraw);
            }
            KeyAction::InsertNewline => {
                self.buffer.insert("\n");
                events.push(WidgetEvent::NeedsRedraw);
            }
            KeyAction::InsertTab => {
                self.buffer.insert("\t");
                events.push(WidgetEvent::NeedsRedraw);
            }
            KeyAction::Backspace => {
                self.buffer.delete_relative(-1);
                events.push(WidgetEvent::NeedsRedraw);
            }
            KeyAction::Delete => {
                self.buffer.delete_relative(1);
                events.push(WidgetEvent::NeedsRedraw);
            }
            KeyAction::MoveLeft => {
                self.buffer.move_horizontal(-1);
                events.push(WidgetEvent::NeedsRedraw);
            }
            KeyAction::MoveRight => {
                self.buffer.move_horizontal(1);
                events.push(WidgetEvent::NeedsRedraw);
            }
            KeyAction::MoveUp => {
                self.buffer.move_line_up();
                events.push(WidgetEvent::NeedsRedraw);
            }
            KeyAction::MoveDown => {
                self.buffer.move_line_down();
                events.push(WidgetEvent::NeedsRedraw);
            }
            KeyAction::ToggleCapsLock => {
                self.caps_lock = !self.caps_lock;
                events.push(WidgetEvent::CapsChanged(self.caps_lock));
            }
            KeyAction::Hold(_) | KeyAction::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use klava_config::{FilePreferences, MemoryPreferences};

    fn engine() -> Keyboard {
        Keyboard::new(Box::new(MemoryPreferences::new()))
    }

    /// Engine whose repeat timer fires on the next tick.
    fn instant_repeat() -> Keyboard {
        let mut config = Config::default();
        config.keyboard.repeat_delay_ms = 0;
        Keyboard::with_config(&config, Box::new(MemoryPreferences::new()))
    }

    fn tap(keyboard: &mut Keyboard, code: KeyCode) {
        keyboard.key_down(code).unwrap();
        keyboard.key_up(code);
    }

    #[test]
    fn test_typing_emits_press_and_redraw() {
        let mut keyboard = engine();
        let events = keyboard.key_down(KeyCode::KeyG).unwrap();
        assert_eq!(
            events,
            vec![
                WidgetEvent::KeyPressed(KeyCode::KeyG),
                WidgetEvent::NeedsRedraw
            ]
        );
        assert_eq!(keyboard.text(), "g");

        let events = keyboard.key_up(KeyCode::KeyG);
        assert_eq!(events, vec![WidgetEvent::KeyReleased(KeyCode::KeyG)]);
        assert_eq!(keyboard.text(), "g");
    }

    #[test]
    fn test_shift_selects_uppercase() {
        let mut keyboard = engine();
        keyboard.key_down(KeyCode::ShiftLeft).unwrap();
        tap(&mut keyboard, KeyCode::KeyG);
        keyboard.key_up(KeyCode::ShiftLeft);
        tap(&mut keyboard, KeyCode::KeyG);
        assert_eq!(keyboard.text(), "Gg");
    }

    #[test]
    fn test_shift_selects_punctuation_variant() {
        let mut keyboard = engine();
        keyboard.key_down(KeyCode::ShiftLeft).unwrap();
        tap(&mut keyboard, KeyCode::Digit1);
        assert_eq!(keyboard.text(), "!");
    }

    #[test]
    fn test_caps_lock_law_end_to_end() {
        let mut keyboard = engine();
        tap(&mut keyboard, KeyCode::KeyG); // plain: g
        tap(&mut keyboard, KeyCode::CapsLock);
        tap(&mut keyboard, KeyCode::KeyG); // caps: G
        keyboard.key_down(KeyCode::ShiftLeft).unwrap();
        tap(&mut keyboard, KeyCode::KeyG); // caps and shift: g
        keyboard.key_up(KeyCode::ShiftLeft);
        tap(&mut keyboard, KeyCode::CapsLock);
        keyboard.key_down(KeyCode::ShiftLeft).unwrap();
        tap(&mut keyboard, KeyCode::KeyG); // shift: G
        assert_eq!(keyboard.text(), "gGgG");
    }

    #[test]
    fn test_caps_changed_events() {
        let mut keyboard = engine();
        let events = keyboard.key_down(KeyCode::CapsLock).unwrap();
        assert!(events.contains(&WidgetEvent::CapsChanged(true)));
        assert!(keyboard.caps_lock());

        keyboard.key_up(KeyCode::CapsLock);
        let events = keyboard.key_down(KeyCode::CapsLock).unwrap();
        assert!(events.contains(&WidgetEvent::CapsChanged(false)));
        assert!(!keyboard.caps_lock());
    }

    #[test]
    fn test_layout_chord_switches_language() {
        let mut keyboard = engine();
        keyboard.key_down(KeyCode::ShiftLeft).unwrap();
        let events = keyboard.key_down(KeyCode::ControlLeft).unwrap();
        assert!(events.contains(&WidgetEvent::LanguageChanged(Language::Ru)));
        assert_eq!(keyboard.language(), Language::Ru);
    }

    #[test]
    fn test_chord_fires_again_while_held() {
        let mut keyboard = engine();
        keyboard.key_down(KeyCode::ShiftLeft).unwrap();
        keyboard.key_down(KeyCode::ControlLeft).unwrap();
        assert_eq!(keyboard.language(), Language::Ru);

        // Another press with both modifiers still down switches back, and
        // the character resolves in the layout it switched to
        keyboard.key_down(KeyCode::KeyQ).unwrap();
        assert_eq!(keyboard.language(), Language::En);
        assert_eq!(keyboard.text(), "Q");
    }

    #[test]
    fn test_switched_layout_changes_typing() {
        let mut keyboard = engine();
        keyboard.key_down(KeyCode::ShiftLeft).unwrap();
        keyboard.key_down(KeyCode::ControlLeft).unwrap();
        keyboard.key_up(KeyCode::ShiftLeft);
        keyboard.key_up(KeyCode::ControlLeft);

        tap(&mut keyboard, KeyCode::KeyQ);
        tap(&mut keyboard, KeyCode::Backquote);
        assert_eq!(keyboard.text(), "йё");
    }

    #[test]
    fn test_language_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");

        let mut keyboard = Keyboard::new(Box::new(FilePreferences::at(path.clone())));
        assert_eq!(keyboard.language(), Language::En);
        keyboard.key_down(KeyCode::ShiftLeft).unwrap();
        keyboard.key_down(KeyCode::ControlLeft).unwrap();
        assert_eq!(keyboard.language(), Language::Ru);

        let restored = Keyboard::new(Box::new(FilePreferences::at(path)));
        assert_eq!(restored.language(), Language::Ru);
    }

    #[test]
    fn test_language_restored_from_store() {
        let mut store = MemoryPreferences::new();
        store.set(LANGUAGE_KEY, "ru").unwrap();
        let keyboard = Keyboard::new(Box::new(store));
        assert_eq!(keyboard.language(), Language::Ru);
    }

    #[test]
    fn test_garbage_stored_language_falls_back() {
        let mut store = MemoryPreferences::new();
        store.set(LANGUAGE_KEY, "de").unwrap();
        let keyboard = Keyboard::new(Box::new(store));
        assert_eq!(keyboard.language(), Language::En);
    }

    #[test]
    fn test_held_character_refires_once() {
        let mut keyboard = instant_repeat();
        keyboard.key_down(KeyCode::KeyG).unwrap();
        assert_eq!(keyboard.text(), "g");

        let events = keyboard.tick().unwrap();
        assert_eq!(events, vec![WidgetEvent::NeedsRedraw]);
        assert_eq!(keyboard.text(), "gg");

        // One shot: a later tick does not fire again
        assert!(keyboard.tick().unwrap().is_empty());
        assert_eq!(keyboard.text(), "gg");
    }

    #[test]
    fn test_release_cancels_repeat() {
        let mut keyboard = instant_repeat();
        tap(&mut keyboard, KeyCode::KeyG);
        assert!(keyboard.tick().unwrap().is_empty());
        assert_eq!(keyboard.text(), "g");
    }

    #[test]
    fn test_control_keys_do_not_repeat() {
        let mut keyboard = instant_repeat();
        tap(&mut keyboard, KeyCode::KeyA);
        keyboard.key_down(KeyCode::Backspace).unwrap();
        assert_eq!(keyboard.text(), "");
        assert!(keyboard.tick().unwrap().is_empty());
        assert_eq!(keyboard.text(), "");
    }

    #[test]
    fn test_arrow_keys_move_the_cursor() {
        let mut keyboard = engine();
        for code in [KeyCode::KeyA, KeyCode::KeyB] {
            tap(&mut keyboard, code);
        }
        tap(&mut keyboard, KeyCode::Enter);
        for code in [KeyCode::KeyC, KeyCode::KeyD] {
            tap(&mut keyboard, code);
        }
        assert_eq!(keyboard.text(), "ab\ncd");

        keyboard.set_selection(1, 1);
        tap(&mut keyboard, KeyCode::ArrowDown);
        assert_eq!(keyboard.buffer().cursor(), 4);
        tap(&mut keyboard, KeyCode::ArrowUp);
        assert_eq!(keyboard.buffer().cursor(), 1);
        tap(&mut keyboard, KeyCode::ArrowLeft);
        assert_eq!(keyboard.buffer().cursor(), 0);
        tap(&mut keyboard, KeyCode::ArrowRight);
        assert_eq!(keyboard.buffer().cursor(), 1);
    }

    #[test]
    fn test_typing_replaces_selection() {
        let mut keyboard = engine();
        for code in [KeyCode::KeyA, KeyCode::KeyB, KeyCode::KeyC] {
            tap(&mut keyboard, code);
        }
        keyboard.set_selection(0, 2);
        tap(&mut keyboard, KeyCode::KeyX);
        assert_eq!(keyboard.text(), "xc");
    }

    #[test]
    fn test_focus_lost_releases_held_keys() {
        let mut keyboard = engine();
        keyboard.key_down(KeyCode::ShiftLeft).unwrap();
        keyboard.key_down(KeyCode::KeyG).unwrap();
        assert_eq!(keyboard.text(), "G");

        let events = keyboard.focus_lost();
        assert_eq!(events.len(), 2);
        assert!(events.contains(&WidgetEvent::KeyReleased(KeyCode::ShiftLeft)));
        assert!(events.contains(&WidgetEvent::KeyReleased(KeyCode::KeyG)));

        // Shift is no longer held afterwards
        tap(&mut keyboard, KeyCode::KeyG);
        assert_eq!(keyboard.text(), "Gg");
    }

    #[test]
    fn test_win_key_types_nothing() {
        let mut keyboard = engine();
        let events = keyboard.key_down(KeyCode::MetaLeft).unwrap();
        assert_eq!(events, vec![WidgetEvent::KeyPressed(KeyCode::MetaLeft)]);
        assert_eq!(keyboard.text(), "");
    }

    #[test]
    fn test_tab_and_enter_insert_whitespace() {
        let mut keyboard = engine();
        tap(&mut keyboard, KeyCode::Tab);
        tap(&mut keyboard, KeyCode::Enter);
        assert_eq!(keyboard.text(), "\t\n");
    }

    #[test]
    fn test_pointer_events_behave_like_keys() {
        let mut keyboard = engine();
        keyboard
            .handle_event(InputEvent::PointerDown(KeyCode::KeyH))
            .unwrap();
        keyboard
            .handle_event(InputEvent::PointerUp(KeyCode::KeyH))
            .unwrap();
        keyboard
            .handle_event(InputEvent::KeyDown(KeyCode::Space))
            .unwrap();
        keyboard
            .handle_event(InputEvent::KeyUp(KeyCode::Space))
            .unwrap();
        keyboard.handle_event(InputEvent::Tick).unwrap();
        keyboard.handle_event(InputEvent::FocusLost).unwrap();
        assert_eq!(keyboard.text(), "h ");
    }
}
