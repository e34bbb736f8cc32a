use std::env;
use tracing::warn;

const DEFAULT_CLINIC_NAME: &str = "Clinic";
const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_PRESCRIPTION_CAPACITY: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub clinic_name: String,
    pub log_filter: String,
    pub prescription_capacity: usize,
    pub render_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            clinic_name: DEFAULT_CLINIC_NAME.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            prescription_capacity: DEFAULT_PRESCRIPTION_CAPACITY,
            render_json: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Only the log filter, for setting up tracing before the rest of the
    /// configuration is read.
    pub fn log_filter_from_env() -> String {
        env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
    }

    /// Builds the configuration from any key lookup. Missing or unparsable
    /// values fall back to their defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            clinic_name: lookup("CLINIC_NAME")
                .unwrap_or_else(|| {
                    warn!("CLINIC_NAME not set, using default");
                    DEFAULT_CLINIC_NAME.to_string()
                }),
            // RUST_LOG is usually unset outside development, no warning
            log_filter: lookup("RUST_LOG")
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            prescription_capacity: match lookup("CLINIC_PRESCRIPTION_CAPACITY") {
                Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                    warn!("CLINIC_PRESCRIPTION_CAPACITY is not a number ({}), using default", raw);
                    DEFAULT_PRESCRIPTION_CAPACITY
                }),
                None => DEFAULT_PRESCRIPTION_CAPACITY,
            },
            render_json: match lookup("CLINIC_RENDER_JSON") {
                Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                    warn!("CLINIC_RENDER_JSON is not a boolean ({}), using default", raw);
                    false
                }),
                None => false,
            },
        };

        if !config.is_configured() {
            warn!("Application not fully configured - clinic name is empty");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.clinic_name.trim().is_empty()
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
