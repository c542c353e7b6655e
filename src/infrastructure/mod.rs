//! Implementations of the domain ports.

pub mod en_us;

use crate::domain::ports::NumberLocaleBox;
use crate::error::{CalcError, Result};
use en_us::EnUsLocale;

/// Looks up the number locale for a BCP 47 tag.
///
/// Fails with [`CalcError::UnsupportedLocale`] when no implementation exists,
/// in which case formatters use their manual fallback.
pub fn resolve_locale(tag: &str) -> Result<NumberLocaleBox> {
    if EnUsLocale::supports(tag) {
        Ok(Box::new(EnUsLocale::new()))
    } else {
        Err(CalcError::UnsupportedLocale(tag.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_locale() {
        let locale = resolve_locale("en-US").unwrap();
        assert_eq!(locale.tag(), "en-US");
    }

    #[test]
    fn test_resolve_unknown_locale() {
        assert!(matches!(
            resolve_locale("xx-YY"),
            Err(CalcError::UnsupportedLocale(ref tag)) if tag == "xx-YY"
        ));
    }
}
