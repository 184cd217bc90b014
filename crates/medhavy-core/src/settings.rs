//! Runtime settings.
//!
//! Resolution order: built-in defaults, then the JSON settings file (if
//! any), then command line overrides applied by the binary.
//!
//! ```json
//! { "modal_submit_delay_ms": 800, "start_page": "about" }
//! ```

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{SiteError, SiteResult};

/// Page shown when the window opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartPage {
    #[default]
    Home,
    About,
}

impl FromStr for StartPage {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(StartPage::Home),
            "about" => Ok(StartPage::About),
            other => Err(SiteError::Settings(format!("unknown start page: {other}"))),
        }
    }
}

/// Accepted simulated submission delays, in milliseconds.
pub const SUBMIT_DELAY_RANGE_MS: RangeInclusive<u64> = 100..=10_000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSettings {
    pub modal_submit_delay_ms: u64,
    pub newsletter_delay_ms: u64,
    pub window_width: f64,
    pub window_height: f64,
    pub start_page: StartPage,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            modal_submit_delay_ms: 1500,
            newsletter_delay_ms: 1000,
            window_width: 1280.0,
            window_height: 900.0,
            start_page: StartPage::Home,
        }
    }
}

impl SiteSettings {
    /// Settings file location when none is given on the command line.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("medhavy").join("settings.json"))
    }

    pub fn from_file(path: &Path) -> SiteResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let settings: SiteSettings = serde_json::from_str(&raw)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load from `explicit`, else the default path if it exists, else defaults.
    ///
    /// An explicit path that cannot be read is an error; a missing default
    /// file is not.
    pub fn load(explicit: Option<&Path>) -> SiteResult<Self> {
        if let Some(path) = explicit {
            tracing::info!("Loading settings from {:?}", path);
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::info!("Loading settings from {:?}", path);
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> SiteResult<()> {
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(SiteError::Settings(format!(
                "window size must be positive, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        for (name, ms) in [
            ("modal_submit_delay_ms", self.modal_submit_delay_ms),
            ("newsletter_delay_ms", self.newsletter_delay_ms),
        ] {
            if !SUBMIT_DELAY_RANGE_MS.contains(&ms) {
                return Err(SiteError::Settings(format!(
                    "{name} must be within {}..={} ms, got {ms}",
                    SUBMIT_DELAY_RANGE_MS.start(),
                    SUBMIT_DELAY_RANGE_MS.end()
                )));
            }
        }
        Ok(())
    }

    pub fn modal_submit_delay(&self) -> Duration {
        Duration::from_millis(self.modal_submit_delay_ms)
    }

    pub fn newsletter_delay(&self) -> Duration {
        Duration::from_millis(self.newsletter_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_published_delays() {
        let settings = SiteSettings::default();
        assert_eq!(settings.modal_submit_delay(), Duration::from_millis(1500));
        assert_eq!(settings.newsletter_delay(), Duration::from_millis(1000));
        assert_eq!(settings.start_page, StartPage::Home);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "modal_submit_delay_ms": 200, "start_page": "about" }}"#).unwrap();

        let settings = SiteSettings::load(Some(file.path())).unwrap();
        assert_eq!(settings.modal_submit_delay_ms, 200);
        assert_eq!(settings.start_page, StartPage::About);
        assert_eq!(settings.newsletter_delay_ms, 1000);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "colour": "blue" }}"#).unwrap();
        assert!(matches!(
            SiteSettings::load(Some(file.path())),
            Err(SiteError::Json(_))
        ));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(
            SiteSettings::load(Some(&missing)),
            Err(SiteError::Io(_))
        ));
    }

    #[test]
    fn zero_window_is_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "window_width": 0 }}"#).unwrap();
        assert!(matches!(
            SiteSettings::load(Some(file.path())),
            Err(SiteError::Settings(_))
        ));
    }

    #[test]
    fn submit_delays_are_range_checked() {
        let instant = SiteSettings {
            modal_submit_delay_ms: 0,
            ..SiteSettings::default()
        };
        assert!(matches!(instant.validate(), Err(SiteError::Settings(_))));

        let stalled = SiteSettings {
            newsletter_delay_ms: 60_000,
            ..SiteSettings::default()
        };
        assert!(matches!(stalled.validate(), Err(SiteError::Settings(_))));

        let quick = SiteSettings {
            modal_submit_delay_ms: 100,
            newsletter_delay_ms: 10_000,
            ..SiteSettings::default()
        };
        assert!(quick.validate().is_ok());
    }

    #[test]
    fn zero_delay_in_file_is_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "modal_submit_delay_ms": 0 }}"#).unwrap();
        assert!(matches!(
            SiteSettings::load(Some(file.path())),
            Err(SiteError::Settings(_))
        ));
    }

    #[test]
    fn start_page_parses() {
        assert_eq!("about".parse::<StartPage>().unwrap(), StartPage::About);
        assert!("pricing".parse::<StartPage>().is_err());
    }
}
