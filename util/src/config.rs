//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from environment variables. It provides
//! thread-safe access and mutation for testing or overrides in runtime environments.

use std::env;
use std::sync::{OnceLock, RwLock};

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub host: String,
    pub port: u16,
    pub gemini_api_key: String,
    pub model_name: String,
    pub model_max_output_tokens: u32,
    pub model_temperature: f32,
    pub model_timeout_seconds: u64,
    pub static_root: String,
    pub gateway_url: String,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// This method is used internally to populate the singleton. It panics
    /// if numeric variables are improperly formatted.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".into()),
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "quizmark".into()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "api=info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "api.log".into()),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true",
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".into())
                .parse()
                .unwrap(),
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            model_name: env::var("MODEL_NAME").unwrap_or_else(|_| "gemini-2.5-flash".into()),
            model_max_output_tokens: env::var("MODEL_MAX_OUTPUT_TOKENS")
                .unwrap_or_else(|_| "256".into())
                .parse()
                .unwrap(),
            model_temperature: env::var("MODEL_TEMPERATURE")
                .unwrap_or_else(|_| "0.3".into())
                .parse()
                .unwrap(),
            model_timeout_seconds: env::var("MODEL_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "30".into())
                .parse()
                .unwrap(),
            static_root: env::var("STATIC_ROOT").unwrap_or_else(|_| "dist".into()),
            gateway_url: env::var("GATEWAY_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:3000/api/evaluate".into()),
        }
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// # Panics
    /// Panics if the lock cannot be acquired.
    pub fn global() -> std::sync::RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .expect("Failed to acquire AppConfig read lock")
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock.write().unwrap();
            *guard = AppConfig::from_env();
        }
    }

    /// Generic internal setter for any field in the config.
    ///
    /// Used by public per-field setter methods.
    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock
            .write()
            .expect("Failed to acquire AppConfig write lock");
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    /// Override `env` value.
    pub fn set_env(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.env = value.into());
    }

    pub fn set_project_name(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.project_name = value.into());
    }

    pub fn set_log_level(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_level = value.into());
    }

    pub fn set_log_file(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_file = value.into());
    }

    pub fn set_log_to_stdout(value: bool) {
        AppConfig::set_field(|cfg| cfg.log_to_stdout = value);
    }

    pub fn set_host(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.host = value.into());
    }

    pub fn set_port(value: u16) {
        AppConfig::set_field(|cfg| cfg.port = value);
    }

    pub fn set_gemini_api_key(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.gemini_api_key = value.into());
    }

    pub fn set_model_name(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.model_name = value.into());
    }

    pub fn set_model_max_output_tokens(value: u32) {
        AppConfig::set_field(|cfg| cfg.model_max_output_tokens = value);
    }

    pub fn set_model_temperature(value: f32) {
        AppConfig::set_field(|cfg| cfg.model_temperature = value);
    }

    pub fn set_model_timeout_seconds(value: u64) {
        AppConfig::set_field(|cfg| cfg.model_timeout_seconds = value);
    }

    pub fn set_static_root(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.static_root = value.into());
    }

    pub fn set_gateway_url(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.gateway_url = value.into());
    }
}

// --- Free accessor functions ---
//
// Call sites read `config::port()` rather than holding the guard, so each
// accessor clones out of the lock.

pub fn env() -> String {
    AppConfig::global().env.clone()
}

pub fn project_name() -> String {
    AppConfig::global().project_name.clone()
}

pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

pub fn host() -> String {
    AppConfig::global().host.clone()
}

pub fn port() -> u16 {
    AppConfig::global().port
}

pub fn gemini_api_key() -> String {
    AppConfig::global().gemini_api_key.clone()
}

pub fn model_name() -> String {
    AppConfig::global().model_name.clone()
}

pub fn model_max_output_tokens() -> u32 {
    AppConfig::global().model_max_output_tokens
}

pub fn model_temperature() -> f32 {
    AppConfig::global().model_temperature
}

pub fn model_timeout_seconds() -> u64 {
    AppConfig::global().model_timeout_seconds
}

pub fn static_root() -> String {
    AppConfig::global().static_root.clone()
}

pub fn gateway_url() -> String {
    AppConfig::global().gateway_url.clone()
}
