#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use medhavy_core::{SiteSettings, StartPage};
use tracing_subscriber::EnvFilter;

/// Global settings, resolved once at startup
static SETTINGS: OnceLock<SiteSettings> = OnceLock::new();

/// Get the resolved settings (defaults if startup never stored any)
pub fn get_settings() -> &'static SiteSettings {
    SETTINGS.get_or_init(SiteSettings::default)
}

/// Medhavy - B Wells product site
#[derive(Parser, Debug)]
#[command(name = "medhavy-desktop")]
#[command(about = "B Wells by Medhavy - AI-powered course materials")]
struct Args {
    /// Settings file (JSON); defaults to <config dir>/medhavy/settings.json
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page to open on launch: home or about
    #[arg(short, long)]
    page: Option<StartPage>,

    /// Simulated modal submission delay in milliseconds (100 to 10000)
    #[arg(long)]
    submit_delay_ms: Option<u64>,

    /// Simulated newsletter signup delay in milliseconds (100 to 10000)
    #[arg(long)]
    newsletter_delay_ms: Option<u64>,

    /// Window width in logical pixels
    #[arg(long)]
    width: Option<f64>,

    /// Window height in logical pixels
    #[arg(long)]
    height: Option<f64>,
}

impl Args {
    /// Apply command line overrides on top of file settings.
    fn apply(&self, settings: &mut SiteSettings) {
        if let Some(page) = self.page {
            settings.start_page = page;
        }
        if let Some(ms) = self.submit_delay_ms {
            settings.modal_submit_delay_ms = ms;
        }
        if let Some(ms) = self.newsletter_delay_ms {
            settings.newsletter_delay_ms = ms;
        }
        if let Some(width) = self.width {
            settings.window_width = width;
        }
        if let Some(height) = self.height {
            settings.window_height = height;
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut settings = match SiteSettings::load(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Failed to load settings, using defaults: {}", e);
            SiteSettings::default()
        }
    };
    args.apply(&mut settings);
    if let Err(e) = settings.validate() {
        tracing::error!("Invalid settings, using defaults: {}", e);
        settings = SiteSettings::default();
    }

    tracing::info!(
        "Starting on {:?} page ({}x{})",
        settings.start_page,
        settings.window_width,
        settings.window_height
    );

    let (window_width, window_height) = (settings.window_width, settings.window_height);
    let _ = SETTINGS.set(settings);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("B Wells by Medhavy")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_file_settings() {
        let args = Args::parse_from([
            "medhavy-desktop",
            "--page",
            "about",
            "--submit-delay-ms",
            "200",
            "--width",
            "800",
        ]);
        let mut settings = SiteSettings {
            newsletter_delay_ms: 50,
            ..SiteSettings::default()
        };
        args.apply(&mut settings);

        assert_eq!(settings.start_page, StartPage::About);
        assert_eq!(settings.modal_submit_delay_ms, 200);
        assert_eq!(settings.window_width, 800.0);
        // Untouched fields keep the file value
        assert_eq!(settings.newsletter_delay_ms, 50);
        assert_eq!(settings.window_height, 900.0);
    }

    #[test]
    fn zero_submit_delay_fails_validation() {
        let args = Args::parse_from(["medhavy-desktop", "--submit-delay-ms", "0"]);
        let mut settings = SiteSettings::default();
        args.apply(&mut settings);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn rejects_unknown_page() {
        assert!(Args::try_parse_from(["medhavy-desktop", "--page", "pricing"]).is_err());
    }
}
