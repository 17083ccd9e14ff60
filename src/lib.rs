//! Input engine for an on-screen keyboard widget.
//!
//! This crate ties the klava-* workspace crates together and provides:
//! - `Keyboard` - the engine owning all input and text state
//! - `KeyAction` - the resolved effect of a single key press
//! - Re-exports of the event, layout, buffer and config types hosts need
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                       host widget                       │
//! │  renders the board and text view, delivers InputEvents  │
//! └─────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                    klava (this crate)                   │
//! │   Keyboard and KeyAction: resolve presses, apply them   │
//! └─────────────────────────────────────────────────────────┘
//!        │            │            │            │
//!        ▼            ▼            ▼            ▼
//!  ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐
//!  │  layout  │ │  input   │ │  buffer  │ │  config  │
//!  └──────────┘ └──────────┘ └──────────┘ └──────────┘
//! ```

// Internal modules
mod keyboard;
mod resolver;

// Re-export main types for convenience
pub use keyboard::Keyboard;
pub use resolver::KeyAction;

// Re-export commonly used types from workspace crates
pub use klava_buffer::{Selection, TextBuffer};
pub use klava_config::{
    Config, FilePreferences, KeyboardSettings, LoggingSettings, MemoryPreferences,
    PreferenceStore, LANGUAGE_KEY,
};
pub use klava_core::{
    InputEvent, KeyCode, Language, Modifier, Modifiers, UnknownKeyCode, WidgetEvent,
};
pub use klava_layout::{KeyEntry, Layout, UnmappedKey};

// Re-export the logger so hosts can wire it up
pub use klava_logger as logger;
