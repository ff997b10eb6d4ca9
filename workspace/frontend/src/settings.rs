use log::Level;
use std::time::Duration;
use web_sys::window;

use crate::common::locale::canonical_locale;

/// Locale used when the browser does not report one
pub const DEFAULT_LOCALE: &str = "en-US";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// BCP 47 tag used to format dates (e.g., "en-US")
    pub locale: String,

    /// How long a logging notice stays visible, in milliseconds
    pub notice_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            debug_mode: false,
            locale: DEFAULT_LOCALE.to_string(),
            notice_duration_ms: 2000,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Some(language) = window.navigator().language() {
            if let Some(locale) = canonical_locale(&language) {
                settings.locale = locale;
            }
        }

        // Custom overrides from localStorage
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(log_level)) = storage.get_item("fertility_log_level") {
                settings.log_level = match log_level.to_lowercase().as_str() {
                    "error" => Level::Error,
                    "warn" => Level::Warn,
                    "info" => Level::Info,
                    "debug" => Level::Debug,
                    "trace" => Level::Trace,
                    _ => settings.log_level,
                };
            }

            if let Ok(Some(locale)) = storage.get_item("fertility_locale") {
                if let Some(locale) = canonical_locale(&locale) {
                    settings.locale = locale;
                }
            }

            if let Ok(Some(duration)) = storage.get_item("fertility_notice_duration_ms") {
                if let Ok(duration_val) = duration.parse::<u32>() {
                    settings.notice_duration_ms = duration_val;
                }
            }
        }

        settings
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms.into())
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
