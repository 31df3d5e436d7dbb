//! Configuration System
//!
//! Optional host-side tuning for the generators, loaded hierarchically
//! from:
//! - `config.toml` (default configuration)
//! - `config.local.toml` (git-ignored local overrides)
//! - Environment variables (`INPUTGEN_` prefix)
//!
//! This is ambient plumbing for embedding hosts; the generation APIs work
//! fine with [`GeneratorConfig::default`] and never require a config file.
//!
//! ## Example
//!
//! ```toml
//! # config.toml
//! [search]
//! enable_gap_filling = true
//! default_cartesian_limit = 10000
//! ```
//!
//! ```bash
//! INPUTGEN_SEARCH__DEFAULT_CARTESIAN_LIMIT=500
//! ```

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// Top-level generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub search: SearchConfig,
}

/// Search-tuning knobs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Whether the secondary gap-filling pass runs after the primary pass.
    /// Disabling it trades completeness (P2) for speed; off-spec, exposed
    /// for diagnostics only.
    #[serde(default = "default_true")]
    pub enable_gap_filling: bool,

    /// Default bound handed to `generate_cartesian` by hosts that don't
    /// pick their own `limit`.
    #[serde(default = "default_cartesian_limit")]
    pub default_cartesian_limit: u64,
}

fn default_true() -> bool {
    true
}

fn default_cartesian_limit() -> u64 {
    100_000
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            enable_gap_filling: default_true(),
            default_cartesian_limit: default_cartesian_limit(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            search: SearchConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from `config.toml`, `config.local.toml`, and
    /// `INPUTGEN_*` environment variables, falling back to defaults for
    /// anything unset. Missing files are not an error.
    pub fn load() -> figment::error::Result<Self> {
        Figment::from(figment::providers::Serialized::defaults(
            GeneratorConfig::default(),
        ))
        .merge(Toml::file("config.toml"))
        .merge(Toml::file("config.local.toml"))
        .merge(Env::prefixed("INPUTGEN_").split("__"))
        .extract()
    }
}
