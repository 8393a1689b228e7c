use serde::{Deserialize, Serialize};

/// Name of the cookie that persists the visitor's language choice.
pub const LOCALE_COOKIE: &str = "NEXT_LOCALE";

/// One year, in seconds.
pub const LOCALE_COOKIE_MAX_AGE_SECS: u64 = 31_536_000;

/// Supported site languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Tr,
    En,
    Ru,
}

impl Default for Locale {
    fn default() -> Self {
        Locale::DEFAULT
    }
}

impl Locale {
    pub const DEFAULT: Locale = Locale::Tr;

    /// Menu order of the language switcher.
    pub const ALL: [Locale; 3] = [Locale::Tr, Locale::En, Locale::Ru];

    pub fn code(self) -> &'static str {
        match self {
            Locale::Tr => "tr",
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Locale::Tr => "Türkçe",
            Locale::En => "English",
            Locale::Ru => "Русский",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "tr" => Some(Locale::Tr),
            "en" => Some(Locale::En),
            "ru" => Some(Locale::Ru),
            _ => None,
        }
    }

    /// Persisted value → locale. Anything outside the supported set
    /// (including a missing value) resolves to [`Locale::DEFAULT`].
    pub fn resolve(persisted: Option<&str>) -> Self {
        persisted.and_then(Self::from_code).unwrap_or(Locale::DEFAULT)
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_supported_codes() {
        for locale in Locale::ALL {
            assert_eq!(Locale::resolve(Some(locale.code())), locale);
        }
        assert_eq!(Locale::resolve(Some(" EN ")), Locale::En);
    }

    #[test]
    fn unsupported_values_fall_back_to_turkish() {
        assert_eq!(Locale::resolve(None), Locale::Tr);
        assert_eq!(Locale::resolve(Some("")), Locale::Tr);
        assert_eq!(Locale::resolve(Some("de")), Locale::Tr);
        assert_eq!(Locale::resolve(Some("en-US")), Locale::Tr);
        assert_eq!(Locale::resolve(Some("tr; Path=/")), Locale::Tr);
    }

    #[test]
    fn serializes_as_lowercase_code() {
        assert_eq!(serde_json::to_string(&Locale::Ru).unwrap(), "\"ru\"");
        let parsed: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Locale::En);
    }
}
