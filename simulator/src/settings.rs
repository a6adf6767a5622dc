//! Runtime settings read from the environment.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

/// Path of the persisted store file.
pub const ENV_STORE: &str = "UNCERTAINTY_STORE";

/// `1` for 24-hour display, `0` for 12-hour.
pub const ENV_24H: &str = "UNCERTAINTY_24H";

/// Window pixel scale.
pub const ENV_SCALE: &str = "UNCERTAINTY_SCALE";

const DEFAULT_STORE: &str = "uncertainty-time.store";
const DEFAULT_SCALE: u32 = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub store_path: PathBuf,
    pub clock_24h: bool,
    pub scale: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE),
            clock_24h: true,
            scale: DEFAULT_SCALE,
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self> { Self::from_lookup(|key| env::var(key).ok()) }

    /// Read settings through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(path) = lookup(ENV_STORE) {
            settings.store_path = PathBuf::from(path);
        }

        if let Some(value) = lookup(ENV_24H) {
            settings.clock_24h = match value.trim() {
                "1" | "true" => true,
                "0" | "false" => false,
                other => bail!("{ENV_24H} must be 0 or 1, got {other:?}"),
            };
        }

        if let Some(value) = lookup(ENV_SCALE) {
            let scale: u32 = value
                .trim()
                .parse()
                .with_context(|| format!("{ENV_SCALE} is not a number: {value:?}"))?;
            if scale == 0 {
                bail!("{ENV_SCALE} must be at least 1");
            }
            settings.scale = scale;
        }

        Ok(settings)
    }
}
