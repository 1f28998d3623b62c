//! Site configuration.
//!
//! Desktop builds read `.env` and the `SAEWEB_*` environment variables;
//! browser builds derive everything from the window. Bad values are logged
//! and replaced by defaults, they never stop the site from booting.

use std::str::FromStr;

use saeweb_domain::DEFAULT_VOLUME;
use thiserror::Error;

pub const ENV_SHELL: &str = "SAEWEB_SHELL";
pub const ENV_AUDIO_SRC: &str = "SAEWEB_AUDIO_SRC";
pub const ENV_AUDIO_VOLUME: &str = "SAEWEB_AUDIO_VOLUME";
pub const ENV_AUDIO_MUTED: &str = "SAEWEB_AUDIO_MUTED";
pub const ENV_VIEWPORT_WIDTH: &str = "SAEWEB_VIEWPORT_WIDTH";

/// Default soundtrack served from the site root
pub const DEFAULT_AUDIO_SRC: &str = "/hero-ambient.mp3";

/// Widths below this get the mobile shell
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown shell kind: {0}")]
    UnknownShell(String),

    #[error("invalid volume {value:?}: {reason}")]
    InvalidVolume { value: String, reason: String },

    #[error("invalid boolean flag {0:?}")]
    InvalidFlag(String),

    #[error("invalid viewport width {0:?}")]
    InvalidWidth(String),
}

/// Shell variant for UI layout selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShellKind {
    #[default]
    Desktop,
    Mobile,
}

impl ShellKind {
    pub fn for_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT_PX {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

impl FromStr for ShellKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(Self::Desktop),
            "mobile" => Ok(Self::Mobile),
            other => Err(ConfigError::UnknownShell(other.to_string())),
        }
    }
}

/// Hero soundtrack settings
#[derive(Debug, Clone, PartialEq)]
pub struct AudioConfig {
    pub src: String,
    /// Always within `[0, 1]`
    pub volume: f64,
    pub start_muted: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            src: DEFAULT_AUDIO_SRC.to_string(),
            volume: DEFAULT_VOLUME,
            start_muted: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub shell: ShellKind,
    pub audio: AudioConfig,
    pub viewport_width: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            shell: ShellKind::default(),
            audio: AudioConfig::default(),
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
        }
    }
}

pub fn parse_volume(raw: &str) -> Result<f64, ConfigError> {
    let value: f64 = raw.trim().parse().map_err(|e: std::num::ParseFloatError| {
        ConfigError::InvalidVolume {
            value: raw.to_string(),
            reason: e.to_string(),
        }
    })?;
    if !value.is_finite() {
        return Err(ConfigError::InvalidVolume {
            value: raw.to_string(),
            reason: "not a finite number".to_string(),
        });
    }
    Ok(value.clamp(0.0, 1.0))
}

pub fn parse_flag(raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag(raw.to_string())),
    }
}

fn parse_width(raw: &str) -> Result<f64, ConfigError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|w| w.is_finite() && *w > 0.0)
        .ok_or_else(|| ConfigError::InvalidWidth(raw.to_string()))
}

impl SiteConfig {
    /// Build from a key lookup, collecting every rejected value.
    ///
    /// Without an explicit shell the shell follows the viewport width.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut errors = Vec::new();

        if let Some(raw) = lookup(ENV_VIEWPORT_WIDTH) {
            match parse_width(&raw) {
                Ok(width) => config.viewport_width = width,
                Err(e) => errors.push(e),
            }
        }

        config.shell = match lookup(ENV_SHELL).map(|raw| raw.parse::<ShellKind>()) {
            Some(Ok(shell)) => shell,
            Some(Err(e)) => {
                errors.push(e);
                ShellKind::for_width(config.viewport_width)
            }
            None => ShellKind::for_width(config.viewport_width),
        };

        if let Some(src) = lookup(ENV_AUDIO_SRC).filter(|s| !s.trim().is_empty()) {
            config.audio.src = src.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_AUDIO_VOLUME) {
            match parse_volume(&raw) {
                Ok(volume) => config.audio.volume = volume,
                Err(e) => errors.push(e),
            }
        }

        if let Some(raw) = lookup(ENV_AUDIO_MUTED) {
            match parse_flag(&raw) {
                Ok(muted) => config.audio.start_muted = muted,
                Err(e) => errors.push(e),
            }
        }

        (config, errors)
    }

    /// Load `.env` (if any) and the process environment.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env"),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!(error = %e, "Failed to read .env"),
        }

        let (config, errors) = Self::from_lookup(|key| std::env::var(key).ok());
        for e in errors {
            tracing::warn!(error = %e, "Ignoring invalid configuration value");
        }
        config
    }

    /// Derive from the browser window.
    #[cfg(target_arch = "wasm32")]
    pub fn from_window() -> Self {
        let viewport_width =
            crate::infrastructure::platform::window_width().unwrap_or(DEFAULT_VIEWPORT_WIDTH);
        Self {
            shell: ShellKind::for_width(viewport_width),
            audio: AudioConfig::default(),
            viewport_width,
        }
    }
}
