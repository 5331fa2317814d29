//! Decimal separator of the process locale.

use std::env;

/// Languages whose usual decimal separator is a comma.
const COMMA_LANGUAGES: &[&str] = &[
    "af", "az", "be", "bg", "bs", "ca", "cs", "da", "de", "el", "es", "et", "eu", "fi", "fo",
    "fr", "gl", "hr", "hu", "hy", "id", "is", "it", "ka", "kk", "ky", "lt", "lv", "mk", "mn",
    "nb", "nl", "nn", "no", "pl", "pt", "ro", "ru", "sk", "sl", "sq", "sr", "sv", "tr", "uk",
    "uz", "vi",
];

/// The decimal separator implied by `LC_ALL`, `LC_NUMERIC` or `LANG`,
/// checked in that order. Defaults to `.`.
pub fn locale_decimal_separator() -> char {
    ["LC_ALL", "LC_NUMERIC", "LANG"]
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|value| !value.is_empty())
        .map_or('.', |locale| separator_for_locale(&locale))
}

/// Separator for a POSIX locale name such as `de_DE.UTF-8`.
fn separator_for_locale(locale: &str) -> char {
    let language = locale
        .split(['_', '.', '@', '-'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    // de_CH and it_CH use a period.
    if locale.contains("_CH") {
        return '.';
    }

    if COMMA_LANGUAGES.contains(&language.as_str()) {
        ','
    } else {
        '.'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_for_locale() {
        assert_eq!(separator_for_locale("en_US.UTF-8"), '.');
        assert_eq!(separator_for_locale("de_DE.UTF-8"), ',');
        assert_eq!(separator_for_locale("fr_FR"), ',');
        assert_eq!(separator_for_locale("de_CH.UTF-8"), '.');
        assert_eq!(separator_for_locale("pt-BR"), ',');
        assert_eq!(separator_for_locale("C"), '.');
        assert_eq!(separator_for_locale("POSIX"), '.');
        assert_eq!(separator_for_locale("ja_JP.UTF-8"), '.');
    }
}
