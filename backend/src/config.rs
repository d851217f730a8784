//! Conversion settings.
//!
//! Defaults are `data.csv` in, `data.json` out. `CARDLOAD_INPUT` and
//! `CARDLOAD_OUTPUT` (from the environment or a `.env` file) override them,
//! and command-line flags override both.

use std::env;
use std::path::PathBuf;

/// Default input path.
pub const DEFAULT_INPUT: &str = "data.csv";

/// Default output path.
pub const DEFAULT_OUTPUT: &str = "data.json";

/// Environment variable overriding the input path.
pub const INPUT_ENV: &str = "CARDLOAD_INPUT";

/// Environment variable overriding the output path.
pub const OUTPUT_ENV: &str = "CARDLOAD_OUTPUT";

/// Where to read from and write to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl ConvertOptions {
    /// Defaults, overridden by the environment (after loading `.env`).
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            input: lookup(INPUT_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.input),
            output: lookup(OUTPUT_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.output),
        }
    }

    /// Apply explicit overrides, e.g. from command-line flags.
    pub fn with_overrides(mut self, input: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        if let Some(input) = input {
            self.input = input;
        }
        if let Some(output) = output {
            self.output = output;
        }
        self
    }
}
