use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Display language of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    English,
    Thai,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown locale tag: {0:?}")]
pub struct ParseLocaleError(pub String);

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Thai];

    /// Tag written to local storage.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Thai => "th",
        }
    }

    pub fn toggled(self) -> Locale {
        match self {
            Locale::English => Locale::Thai,
            Locale::Thai => Locale::English,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "en" => Ok(Locale::English),
            "th" => Ok(Locale::Thai),
            other => Err(ParseLocaleError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_parse_back() {
        for locale in Locale::ALL {
            assert_eq!(locale.tag().parse::<Locale>(), Ok(locale));
        }
    }

    #[test]
    fn unknown_tag_is_an_error() {
        assert_eq!(
            "fr".parse::<Locale>(),
            Err(ParseLocaleError("fr".to_string()))
        );
        assert!("".parse::<Locale>().is_err());
        assert!("EN".parse::<Locale>().is_err());
    }

    #[test]
    fn toggled_flips_between_variants() {
        assert_eq!(Locale::English.toggled(), Locale::Thai);
        assert_eq!(Locale::Thai.toggled(), Locale::English);
    }

    #[test]
    fn display_matches_the_stored_tag() {
        assert_eq!(Locale::Thai.to_string(), "th");
        assert_eq!(Locale::English.to_string().parse::<Locale>(), Ok(Locale::English));
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Locale::default(), Locale::English);
    }
}
