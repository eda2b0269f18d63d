use crate::i18n::locale::Locale;

/// localStorage key holding the language tag.
pub const LANGUAGE_STORAGE_KEY: &str = "language";
pub const DEFAULT_LOCALE: Locale = Locale::English;

/// Pixels scrolled before the header switches to its solid style.
pub const HEADER_SCROLL_OFFSET: f64 = 20.0;

pub mod reveal {
    pub const ABOUT: f64 = 0.2;
    pub const SERVICES: f64 = 0.2;
    pub const PORTFOLIO: f64 = 0.1;
    pub const CONTACT: f64 = 0.2;
}

pub const CONTACT_EMAIL: &str = "contact@vmimedia.com";
pub const CONTACT_PHONE: &str = "+66000000000";
pub const LINE_URL: &str = "#";
pub const FACEBOOK_URL: &str = "#";

pub fn get_asset_base_url() -> &'static str {
    option_env!("VMI_ASSET_BASE_URL").unwrap_or("")
}

/// Media and image paths are relative to the public root unless an asset
/// host is configured at build time.
pub fn asset_url(path: &str) -> String {
    format!("{}{}", get_asset_base_url().trim_end_matches('/'), path)
}

pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_url_keeps_absolute_path() {
        let url = asset_url("/AR/video_01.mp4");
        assert!(url.ends_with("/AR/video_01.mp4"));
        assert!(!url.contains("//AR"));
    }

    #[test]
    fn thresholds_are_fractions() {
        for t in [reveal::ABOUT, reveal::SERVICES, reveal::PORTFOLIO, reveal::CONTACT] {
            assert!((0.0..=1.0).contains(&t));
        }
    }
}
