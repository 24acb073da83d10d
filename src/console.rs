//! Handling the latticedisk CLI
//!
//! This module handles the command line parsing and assembles the effective [`EnumerationConfig`] from defaults,
//! an optional configuration file and the given flags (in increasing priority).
use crate::{
    config::{parse_max_r, ConfigFile, EnumerationConfig},
    error::{LatticeError, LdResult},
    get_version,
    render::OutputFormat,
};
use clap::{builder::Str, Parser};
use itertools::Itertools;
use log::info;
use std::{
    path::{Path, PathBuf},
    str::FromStr,
};
use strum::IntoEnumIterator;

/// Command line arguments for the latticedisk application.
#[derive(Debug)]
pub struct Args {
    /// effective configuration of the run
    pub config: EnumerationConfig,

    /// destination file of the rendered points. `None` means standard output
    pub output: Option<PathBuf>,
}

/// Enumerate lattice points inside disks of increasing radius and print them as `vec2` literals.
#[derive(Parser, Debug, Default)]
#[command(author, version = Str::from(get_version()), about, long_about = None)]
pub struct PartialArgs {
    /// exclusive upper bound of the radius sweep (default: 7)
    #[arg(short, long, allow_hyphen_values = true)]
    max_radius: Option<String>,

    /// seed of the shuffle generator. if not defined, the generator is seeded from process entropy
    #[arg(short, long)]
    seed: Option<String>,

    /// output format: glsl (default) or csv
    #[arg(short, long)]
    format: Option<String>,

    /// path to a YAML configuration file. command line flags take precedence over its entries
    #[arg(short, long)]
    config: Option<String>,

    /// destination file of the rendered points. if not defined, standard output is used
    #[arg(short, long)]
    output: Option<String>,
}

/// Evaluates if the passed seed string is valid.
/// # Attributes
/// * `seed_input`: decimal string of the seed
/// # Returns
/// * the seed as `u64`
/// # Errors
/// Returns an [`LatticeError::Console`] if the input is not an unsigned 64-bit integer
fn eval_seed_input(seed_input: &str) -> LdResult<u64> {
    seed_input.trim().parse::<u64>().map_err(|_| {
        LatticeError::Console(format!(
            "Invalid seed '{seed_input}'! Please use an unsigned integer."
        ))
    })
}

/// Evaluates if the passed format string is valid.
/// # Attributes
/// * `format_input`: String description of the output format
/// # Errors
/// Returns an [`LatticeError::Console`] listing the available formats if the input is unknown
fn eval_format_input(format_input: &str) -> LdResult<OutputFormat> {
    OutputFormat::from_str(format_input.trim()).map_err(|_| {
        LatticeError::Console(format!(
            "Invalid format '{format_input}'! Available formats: {}",
            OutputFormat::iter().join(", ")
        ))
    })
}

/// Evaluates if the passed output path is valid.
/// # Attributes
/// * `output_input`: path of the output file
/// # Returns
/// * [`PathBuf`] of the output file if its parent directory exists
/// # Errors
/// Returns an [`LatticeError::Console`] if the input is empty, a directory or its parent directory does not exist
fn eval_output_input(output_input: &str) -> LdResult<PathBuf> {
    let path = Path::new(output_input);
    if output_input.is_empty() || path.is_dir() {
        return Err(LatticeError::Console(format!(
            "Invalid output file '{output_input}'!"
        )));
    }
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            Err(LatticeError::Console(format!(
                "Output directory {} does not exist!",
                parent.display()
            )))
        }
        _ => Ok(path.to_path_buf()),
    }
}

impl TryFrom<PartialArgs> for Args {
    type Error = LatticeError;

    fn try_from(part_args: PartialArgs) -> LdResult<Self> {
        let mut config = EnumerationConfig::default();

        if let Some(config_path) = part_args.config.as_deref() {
            let file = ConfigFile::from_file(Path::new(config_path))?;
            config.merge_file(&file)?;
            info!("Read configuration file {config_path}");
            if file.has_max_r() && part_args.max_radius.is_some() {
                info!("max_r of the configuration file is overridden by the command line");
            }
            if file.has_seed() && part_args.seed.is_some() {
                info!("seed of the configuration file is overridden by the command line");
            }
            if file.has_format() && part_args.format.is_some() {
                info!("format of the configuration file is overridden by the command line");
            }
        }
        if let Some(max_radius) = part_args.max_radius.as_deref() {
            config.set_max_r(parse_max_r(max_radius)?)?;
        }
        if let Some(seed) = part_args.seed.as_deref() {
            config.set_seed(Some(eval_seed_input(seed)?));
        }
        if let Some(format) = part_args.format.as_deref() {
            config.set_format(eval_format_input(format)?);
        }
        let output = part_args
            .output
            .as_deref()
            .map(eval_output_input)
            .transpose()?;

        info!(
            "max_r: {}, seed: {}, format: {}",
            config.max_r(),
            config
                .seed()
                .map_or_else(|| "entropy".to_owned(), |s| s.to_string()),
            config.format()
        );
        Ok(Self { config, output })
    }
}
