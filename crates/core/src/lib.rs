//! Core types for the klava input engine.
//!
//! This crate provides the vocabulary shared by the rest of the workspace:
//! - `KeyCode` - physical key positions on the on-screen board
//! - `Modifier` / `Modifiers` - logical modifier identity and held state
//! - `Language` - the layout language
//! - `InputEvent` / `WidgetEvent` - events exchanged with the host

pub mod event;
pub mod key;
pub mod language;

pub use event::{InputEvent, WidgetEvent};
pub use key::{KeyCode, Modifier, Modifiers, UnknownKeyCode};
pub use language::Language;
