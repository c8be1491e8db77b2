use log::Level;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Prefix put in front of the relative API paths (empty = same origin)
    pub api_base: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            log_level: Level::Info,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                // In development, use more verbose logging
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(api_base)) = storage.get_item("cropadvisor_api_base") {
                    settings.api_base = api_base.trim_end_matches('/').to_string();
                }

                if let Ok(Some(log_level)) = storage.get_item("cropadvisor_log_level") {
                    settings.log_level = parse_level(&log_level).unwrap_or(settings.log_level);
                }
            }
        }

        settings
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base, endpoint)
    }
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
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
