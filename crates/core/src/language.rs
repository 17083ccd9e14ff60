//! Layout language identity.

use std::fmt;
use std::str::FromStr;

/// Language of the active key layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// English QWERTY.
    #[default]
    En,
    /// Russian ЙЦУКЕН.
    Ru,
}

impl Language {
    /// Identifier used for persistence and logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }

    /// The other supported language.
    pub fn toggled(&self) -> Language {
        match self {
            Language::En => Language::Ru,
            Language::Ru => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "ru" => Ok(Language::Ru),
            _ => Err(format!("Unknown language: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn test_toggled_alternates() {
        assert_eq!(Language::En.toggled(), Language::Ru);
        assert_eq!(Language::Ru.toggled(), Language::En);
    }

    #[test]
    fn test_parse() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("ru".parse::<Language>().unwrap(), Language::Ru);
        assert!("de".parse::<Language>().is_err());
        assert!("EN".parse::<Language>().is_err());
    }
}
