// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search configuration.
//!
//! Values are merged with Figment: built-in defaults, then an optional TOML
//! file, then `COVER_*` environment variables. A bad `max_depth` is not an
//! error; it falls back to [`DEFAULT_MAX_DEPTH`].

use std::num::NonZeroUsize;
use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;

/// Depth used when none is given or the given one is unusable.
pub const DEFAULT_MAX_DEPTH: usize = 6;

/// Combinations between two count-level progress notifications.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 10_000;

/// Upper bound on combination size. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MaxDepth(NonZeroUsize);

impl MaxDepth {
    /// Non-positive values fall back to the default.
    pub fn new(value: i64) -> Self {
        match usize::try_from(value).ok().and_then(NonZeroUsize::new) {
            Some(depth) => Self(depth),
            None => {
                warn!(value, "max depth must be positive, using {DEFAULT_MAX_DEPTH}");
                Self::default()
            }
        }
    }

    /// Non-numeric or non-positive text falls back to the default.
    pub fn parse(text: &str) -> Self {
        match text.trim().parse::<i64>() {
            Ok(value) => Self::new(value),
            Err(_) => {
                warn!(text, "max depth is not a number, using {DEFAULT_MAX_DEPTH}");
                Self::default()
            }
        }
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for MaxDepth {
    fn default() -> Self {
        Self(NonZeroUsize::MIN.saturating_add(DEFAULT_MAX_DEPTH - 1))
    }
}

impl From<&DepthSetting> for MaxDepth {
    fn from(setting: &DepthSetting) -> Self {
        match setting {
            DepthSetting::Number(value) => MaxDepth::new(*value),
            DepthSetting::Text(text) => MaxDepth::parse(text),
            DepthSetting::Fraction(value) => {
                warn!(value, "max depth must be a whole number, using {DEFAULT_MAX_DEPTH}");
                MaxDepth::default()
            }
        }
    }
}

/// A depth as it appears in a config source, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DepthSetting {
    Number(i64),
    Fraction(f64),
    Text(String),
}

/// What the runner does when a search is requested while one is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BusyPolicy {
    /// Cancel the running search and start the new one.
    #[default]
    CancelPrevious,
    /// Refuse the new request.
    Reject,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct RawConfig {
    max_depth: DepthSetting,
    progress_interval: u64,
    busy_policy: BusyPolicy,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            max_depth: DepthSetting::Number(DEFAULT_MAX_DEPTH as i64),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            busy_policy: BusyPolicy::default(),
        }
    }
}

/// Resolved configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: MaxDepth,
    /// Zero disables count-level progress notifications.
    pub progress_interval: u64,
    pub busy_policy: BusyPolicy,
}

impl SearchConfig {
    pub const ENV_PREFIX: &'static str = "COVER_";

    /// Defaults, then `path` if given, then the environment.
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(RawConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(Self::ENV_PREFIX))
    }

    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment(path))
    }

    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let raw: RawConfig = figment.extract().map_err(Box::new)?;
        Ok(Self {
            max_depth: MaxDepth::from(&raw.max_depth),
            progress_interval: raw.progress_interval,
            busy_policy: raw.busy_policy,
        })
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: MaxDepth::default(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            busy_policy: BusyPolicy::default(),
        }
    }
}
