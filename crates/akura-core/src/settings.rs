//! Global settings loaded from TOML, following the same OnceLock pattern as
//! the glyph table.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;
use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub repeat: RepeatSettings,
    pub session: SessionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepeatSettings {
    pub initial_delay_ms: u64,
    pub interval_ms: u64,
}

impl RepeatSettings {
    /// Long-press delay before the first auto repeat.
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    /// Delay between subsequent repeats.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    pub max_buffer_len: usize,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.repeat.interval_ms == 0 {
        return Err(SettingsError::InvalidValue {
            field: "repeat.interval_ms".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    if s.session.max_buffer_len == 0 {
        return Err(SettingsError::InvalidValue {
            field: "session.max_buffer_len".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.repeat.initial_delay_ms, 200);
        assert_eq!(s.repeat.interval_ms, 20);
        assert_eq!(s.repeat.initial_delay(), Duration::from_millis(200));
        assert_eq!(s.repeat.interval(), Duration::from_millis(20));
        assert_eq!(s.session.max_buffer_len, 100);
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[repeat]
initial_delay_ms = 350
interval_ms = 40

[session]
max_buffer_len = 64
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.repeat.initial_delay_ms, 350);
        assert_eq!(s.session.max_buffer_len, 64);
    }

    #[test]
    fn zero_initial_delay_is_allowed() {
        let toml = r#"
[repeat]
initial_delay_ms = 0
interval_ms = 20

[session]
max_buffer_len = 100
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.repeat.initial_delay(), Duration::ZERO);
    }

    #[test]
    fn error_zero_interval() {
        let toml = r#"
[repeat]
initial_delay_ms = 200
interval_ms = 0

[session]
max_buffer_len = 100
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("repeat.interval_ms"));
    }

    #[test]
    fn error_zero_buffer_len() {
        let toml = r#"
[repeat]
initial_delay_ms = 200
interval_ms = 20

[session]
max_buffer_len = 0
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("session.max_buffer_len"));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[repeat]
initial_delay_ms = 200
interval_ms = 20
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
