#![warn(missing_docs)]
//! Run configuration
//!
//! An [`EnumerationConfig`] holds everything needed for one run of the generator. It is assembled from defaults,
//! an optional YAML [`ConfigFile`] and command line flags (see [`crate::console`]).
use crate::{
    distributions::{DiskSweep, LatticeDistribution, LatticePoint, MAX_R_LIMIT},
    error::{LatticeError, LdResult},
    render::OutputFormat,
};
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use serde::Deserialize;
use serde_yaml::Value;
use std::{fs, path::Path};

/// Default exclusive upper bound of the radius sweep.
pub const DEFAULT_MAX_R: u32 = 7;

/// Effective configuration of a generator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumerationConfig {
    max_r: u32,
    seed: Option<u64>,
    format: OutputFormat,
}
impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            max_r: DEFAULT_MAX_R,
            seed: None,
            format: OutputFormat::default(),
        }
    }
}
impl EnumerationConfig {
    /// Create a new [`EnumerationConfig`].
    ///
    /// # Errors
    ///
    /// This function will return an error if `max_r` is zero or larger than [`MAX_R_LIMIT`].
    pub fn new(max_r: u32, seed: Option<u64>, format: OutputFormat) -> LdResult<Self> {
        DiskSweep::new(max_r)?;
        Ok(Self {
            max_r,
            seed,
            format,
        })
    }
    /// Returns the exclusive upper bound of the radius sweep.
    #[must_use]
    pub const fn max_r(&self) -> u32 {
        self.max_r
    }
    /// Returns the seed of the shuffle generator. `None` means seeding from process entropy.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }
    /// Returns the output format.
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }
    /// Overwrite all values present in the given [`ConfigFile`].
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the `max_r` value of the file is not a positive integer ([`LatticeError::InvalidRadius`]).
    ///   - the `max_r` value of the file is a sequence or a mapping ([`LatticeError::Config`]).
    pub fn merge_file(&mut self, file: &ConfigFile) -> LdResult<()> {
        if let Some(max_r) = &file.max_r {
            self.max_r = max_r_from_yaml(max_r)?;
        }
        if file.seed.is_some() {
            self.seed = file.seed;
        }
        if let Some(format) = file.format {
            self.format = format;
        }
        Ok(())
    }
    /// Sets the exclusive upper bound of the radius sweep.
    ///
    /// # Errors
    ///
    /// This function will return an error if `max_r` is zero or larger than [`MAX_R_LIMIT`].
    pub fn set_max_r(&mut self, max_r: u32) -> LdResult<()> {
        *self = Self::new(max_r, self.seed, self.format)?;
        Ok(())
    }
    /// Sets the seed of the shuffle generator.
    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }
    /// Sets the output format.
    pub fn set_format(&mut self, format: OutputFormat) {
        self.format = format;
    }
    /// Returns the [`DiskSweep`] described by this configuration.
    ///
    /// # Errors
    ///
    /// This function will return an error if `max_r` is zero or larger than [`MAX_R_LIMIT`].
    pub fn disk_sweep(&self) -> LdResult<DiskSweep> {
        DiskSweep::new(self.max_r)
    }
    /// Run the radius sweep with the configured random number generator.
    ///
    /// A configured seed selects a [`StdRng`] seeded with it, otherwise the thread local generator is used.
    ///
    /// # Errors
    ///
    /// This function will return an error if `max_r` is zero or larger than [`MAX_R_LIMIT`].
    pub fn generate(&self) -> LdResult<Vec<LatticePoint>> {
        let sweep = self.disk_sweep()?;
        let points = if let Some(seed) = self.seed {
            info!("Shuffling with seed {seed}");
            sweep.generate(&mut StdRng::seed_from_u64(seed))
        } else {
            sweep.generate(&mut rand::rng())
        };
        Ok(points)
    }
}

/// Content of a YAML configuration file. All entries are optional.
///
/// ```yaml
/// max_r: 7
/// seed: 42
/// format: glsl
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    max_r: Option<Value>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    format: Option<OutputFormat>,
}
impl ConfigFile {
    /// Read a [`ConfigFile`] from the YAML file at the given path.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the given path is not found or readable.
    ///   - the parsing of the file failed.
    pub fn from_file(path: &Path) -> LdResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            LatticeError::Config(format!("cannot read file {} : {}", path.display(), e))
        })?;
        Self::from_string(&contents)
    }
    /// Parse a [`ConfigFile`] from the given YAML string.
    ///
    /// An empty string yields a file without any entries.
    ///
    /// # Errors
    ///
    /// This function will return an error if the parsing of the string failed.
    pub fn from_string(contents: &str) -> LdResult<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents)
            .map_err(|e| LatticeError::Config(format!("parsing of configuration failed: {e}")))
    }
    /// Returns `true` if the file sets `max_r`.
    #[must_use]
    pub const fn has_max_r(&self) -> bool {
        self.max_r.is_some()
    }
    /// Returns `true` if the file sets a seed.
    #[must_use]
    pub const fn has_seed(&self) -> bool {
        self.seed.is_some()
    }
    /// Returns `true` if the file sets an output format.
    #[must_use]
    pub const fn has_format(&self) -> bool {
        self.format.is_some()
    }
}

/// Parse a textual maximum radius.
///
/// # Errors
///
/// This function will return an [`LatticeError::InvalidRadius`] if the input is not an integer, is not positive
/// or exceeds [`MAX_R_LIMIT`].
pub fn parse_max_r(input: &str) -> LdResult<u32> {
    let value = input.trim().parse::<i64>().map_err(|_| {
        LatticeError::InvalidRadius(format!("'{input}' is not an integer"))
    })?;
    if value <= 0 {
        return Err(LatticeError::InvalidRadius(format!(
            "max_r must be > 0, got {value}"
        )));
    }
    u32::try_from(value)
        .ok()
        .filter(|max_r| *max_r <= MAX_R_LIMIT)
        .ok_or_else(|| {
            LatticeError::InvalidRadius(format!("max_r must be <= {MAX_R_LIMIT}, got {value}"))
        })
}

/// Interpret the `max_r` entry of a configuration file.
///
/// Only YAML integers are accepted. Other scalars (strings, floats, booleans) are an invalid radius, collections
/// are a malformed configuration.
fn max_r_from_yaml(value: &Value) -> LdResult<u32> {
    match value {
        Value::Number(number) => parse_max_r(&number.to_string()),
        Value::String(text) => Err(LatticeError::InvalidRadius(format!(
            "'{text}' is not an integer"
        ))),
        Value::Bool(flag) => Err(LatticeError::InvalidRadius(format!(
            "'{flag}' is not an integer"
        ))),
        Value::Null => Err(LatticeError::InvalidRadius("max_r is empty".into())),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => Err(LatticeError::Config(
            "max_r must be a single integer value".into(),
        )),
    }
}
