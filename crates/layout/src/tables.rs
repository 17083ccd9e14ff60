//! Static key tables, one per language, in board order.
//!
//! Control keys carry the caption the widget draws on them; printable keys
//! carry their base and shifted characters. Each table is complete on its
//! own, so shared entries (digits, control keys) are repeated per language.

use klava_core::KeyCode;

use crate::KeyEntry;

pub(crate) static EN: &[(KeyCode, KeyEntry)] = &[
    (KeyCode::Backquote, KeyEntry::pair('`', '~')),
    (KeyCode::Digit1, KeyEntry::pair('1', '!')),
    (KeyCode::Digit2, KeyEntry::pair('2', '@')),
    (KeyCode::Digit3, KeyEntry::pair('3', '#')),
    (KeyCode::Digit4, KeyEntry::pair('4', '$')),
    (KeyCode::Digit5, KeyEntry::pair('5', '%')),
    (KeyCode::Digit6, KeyEntry::pair('6', '^')),
    (KeyCode::Digit7, KeyEntry::pair('7', '&')),
    (KeyCode::Digit8, KeyEntry::pair('8', '*')),
    (KeyCode::Digit9, KeyEntry::pair('9', '(')),
    (KeyCode::Digit0, KeyEntry::pair('0', ')')),
    (KeyCode::Minus, KeyEntry::pair('-', '_')),
    (KeyCode::Equal, KeyEntry::pair('=', '+')),
    (KeyCode::Backspace, KeyEntry::control("Backspace")),
    (KeyCode::Tab, KeyEntry::control("Tab ⇒")),
    (KeyCode::KeyQ, KeyEntry::pair('q', 'Q')),
    (KeyCode::KeyW, KeyEntry::pair('w', 'W')),
    (KeyCode::KeyE, KeyEntry::pair('e', 'E')),
    (KeyCode::KeyR, KeyEntry::pair('r', 'R')),
    (KeyCode::KeyT, KeyEntry::pair('t', 'T')),
    (KeyCode::KeyY, KeyEntry::pair('y', 'Y')),
    (KeyCode::KeyU, KeyEntry::pair('u', 'U')),
    (KeyCode::KeyI, KeyEntry::pair('i', 'I')),
    (KeyCode::KeyO, KeyEntry::pair('o', 'O')),
    (KeyCode::KeyP, KeyEntry::pair('p', 'P')),
    (KeyCode::BracketLeft, KeyEntry::pair('[', '{')),
    (KeyCode::BracketRight, KeyEntry::pair(']', '}')),
    (KeyCode::Enter, KeyEntry::control("Enter ↵")),
    (KeyCode::CapsLock, KeyEntry::control("Caps Lock")),
    (KeyCode::KeyA, KeyEntry::pair('a', 'A')),
    (KeyCode::KeyS, KeyEntry::pair('s', 'S')),
    (KeyCode::KeyD, KeyEntry::pair('d', 'D')),
    (KeyCode::KeyF, KeyEntry::pair('f', 'F')),
    (KeyCode::KeyG, KeyEntry::pair('g', 'G')),
    (KeyCode::KeyH, KeyEntry::pair('h', 'H')),
    (KeyCode::KeyJ, KeyEntry::pair('j', 'J')),
    (KeyCode::KeyK, KeyEntry::pair('k', 'K')),
    (KeyCode::KeyL, KeyEntry::pair('l', 'L')),
    (KeyCode::Semicolon, KeyEntry::pair(';', ':')),
    (KeyCode::Quote, KeyEntry::pair('\'', '"')),
    (KeyCode::Backslash, KeyEntry::pair('\\', '|')),
    (KeyCode::Delete, KeyEntry::control("Del")),
    (KeyCode::ShiftLeft, KeyEntry::control("Shift")),
    (KeyCode::KeyZ, KeyEntry::pair('z', 'Z')),
    (KeyCode::KeyX, KeyEntry::pair('x', 'X')),
    (KeyCode::KeyC, KeyEntry::pair('c', 'C')),
    (KeyCode::KeyV, KeyEntry::pair('v', 'V')),
    (KeyCode::KeyB, KeyEntry::pair('b', 'B')),
    (KeyCode::KeyN, KeyEntry::pair('n', 'N')),
    (KeyCode::KeyM, KeyEntry::pair('m', 'M')),
    (KeyCode::Comma, KeyEntry::pair(',', '<')),
    (KeyCode::Period, KeyEntry::pair('.', '>')),
    (KeyCode::Slash, KeyEntry::pair('/', '?')),
    (KeyCode::ShiftRight, KeyEntry::control("Shift")),
    (KeyCode::ArrowUp, KeyEntry::control("▲")),
    (KeyCode::ControlLeft, KeyEntry::control("Ctrl")),
    (KeyCode::MetaLeft, KeyEntry::control("Win")),
    (KeyCode::AltLeft, KeyEntry::control("Alt")),
    (KeyCode::Space, KeyEntry::pair(' ', ' ')),
    (KeyCode::AltRight, KeyEntry::control("Alt")),
    (KeyCode::ControlRight, KeyEntry::control("Ctrl")),
    (KeyCode::ArrowLeft, KeyEntry::control("◀")),
    (KeyCode::ArrowDown, KeyEntry::control("▼")),
    (KeyCode::ArrowRight, KeyEntry::control("▶")),
];

pub(crate) static RU: &[(KeyCode, KeyEntry)] = &[
    (KeyCode::Backquote, KeyEntry::pair('ё', 'Ё')),
    (KeyCode::Digit1, KeyEntry::pair('1', '!')),
    (KeyCode::Digit2, KeyEntry::pair('2', '"')),
    (KeyCode::Digit3, KeyEntry::pair('3', '№')),
    (KeyCode::Digit4, KeyEntry::pair('4', ';')),
    (KeyCode::Digit5, KeyEntry::pair('5', '%')),
    (KeyCode::Digit6, KeyEntry::pair('6', ':')),
    (KeyCode::Digit7, KeyEntry::pair('7', '?')),
    (KeyCode::Digit8, KeyEntry::pair('8', '*')),
    (KeyCode::Digit9, KeyEntry::pair('9', '(')),
    (KeyCode::Digit0, KeyEntry::pair('0', ')')),
    (KeyCode::Minus, KeyEntry::pair('-', '_')),
    (KeyCode::Equal, KeyEntry::pair('=', '+')),
    (KeyCode::Backspace, KeyEntry::control("Backspace")),
    (KeyCode::Tab, KeyEntry::control("Tab ⇒")),
    (KeyCode::KeyQ, KeyEntry::pair('й', 'Й')),
    (KeyCode::KeyW, KeyEntry::pair('ц', 'Ц')),
    (KeyCode::KeyE, KeyEntry::pair('у', 'У')),
    (KeyCode::KeyR, KeyEntry::pair('к', 'К')),
    (KeyCode::KeyT, KeyEntry::pair('е', 'Е')),
    (KeyCode::KeyY, KeyEntry::pair('н', 'Н')),
    (KeyCode::KeyU, KeyEntry::pair('г', 'Г')),
    (KeyCode::KeyI, KeyEntry::pair('ш', 'Ш')),
    (KeyCode::KeyO, KeyEntry::pair('щ', 'Щ')),
    (KeyCode::KeyP, KeyEntry::pair('з', 'З')),
    (KeyCode::BracketLeft, KeyEntry::pair('х', 'Х')),
    (KeyCode::BracketRight, KeyEntry::pair('ъ', 'Ъ')),
    (KeyCode::Enter, KeyEntry::control("Enter ↵")),
    (KeyCode::CapsLock, KeyEntry::control("Caps Lock")),
    (KeyCode::KeyA, KeyEntry::pair('ф', 'Ф')),
    (KeyCode::KeyS, KeyEntry::pair('ы', 'Ы')),
    (KeyCode::KeyD, KeyEntry::pair('в', 'В')),
    (KeyCode::KeyF, KeyEntry::pair('а', 'А')),
    (KeyCode::KeyG, KeyEntry::pair('п', 'П')),
    (KeyCode::KeyH, KeyEntry::pair('р', 'Р')),
    (KeyCode::KeyJ, KeyEntry::pair('о', 'О')),
    (KeyCode::KeyK, KeyEntry::pair('л', 'Л')),
    (KeyCode::KeyL, KeyEntry::pair('д', 'Д')),
    (KeyCode::Semicolon, KeyEntry::pair('ж', 'Ж')),
    (KeyCode::Quote, KeyEntry::pair('э', 'Э')),
    (KeyCode::Backslash, KeyEntry::pair('\\', '|')),
    (KeyCode::Delete, KeyEntry::control("Del")),
    (KeyCode::ShiftLeft, KeyEntry::control("Shift")),
    (KeyCode::KeyZ, KeyEntry::pair('я', 'Я')),
    (KeyCode::KeyX, KeyEntry::pair('ч', 'Ч')),
    (KeyCode::KeyC, KeyEntry::pair('с', 'С')),
    (KeyCode::KeyV, KeyEntry::pair('м', 'М')),
    (KeyCode::KeyB, KeyEntry::pair('и', 'И')),
    (KeyCode::KeyN, KeyEntry::pair('т', 'Т')),
    (KeyCode::KeyM, KeyEntry::pair('ь', 'Ь')),
    (KeyCode::Comma, KeyEntry::pair('б', 'Б')),
    (KeyCode::Period, KeyEntry::pair('ю', 'Ю')),
    (KeyCode::Slash, KeyEntry::pair('.', ',')),
    (KeyCode::ShiftRight, KeyEntry::control("Shift")),
    (KeyCode::ArrowUp, KeyEntry::control("▲")),
    (KeyCode::ControlLeft, KeyEntry::control("Ctrl")),
    (KeyCode::MetaLeft, KeyEntry::control("Win")),
    (KeyCode::AltLeft, KeyEntry::control("Alt")),
    (KeyCode::Space, KeyEntry::pair(' ', ' ')),
    (KeyCode::AltRight, KeyEntry::control("Alt")),
    (KeyCode::ControlRight, KeyEntry::control("Ctrl")),
    (KeyCode::ArrowLeft, KeyEntry::control("◀")),
    (KeyCode::ArrowDown, KeyEntry::control("▼")),
    (KeyCode::ArrowRight, KeyEntry::control("▶")),
];
