//! This is the documentation for the **latticedisk** package.
//!
//! **latticedisk** enumerates all integer lattice points inside disks of increasing radius. Points that have
//! already been found at a smaller radius are skipped, and the candidates of each radius are tried in shuffled
//! order. The resulting list is rendered as `vec2(x.0,y.0),` lines which can be pasted into a shader array
//! literal.
//!
//! ## Example
//!
//! ```rust
//! use latticedisk::{config::EnumerationConfig, generate_and_render, render::OutputFormat};
//!
//! let config = EnumerationConfig::new(2, None, OutputFormat::Glsl).unwrap();
//! let mut output: Vec<u8> = Vec::new();
//! generate_and_render(&config, &mut output).unwrap();
//! assert_eq!(String::from_utf8(output).unwrap(), "1\nvec2(0.0,0.0),\n");
//! ```
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod console;
pub mod distributions;
pub mod error;
pub mod render;
pub mod utils;

use config::EnumerationConfig;
use error::{LatticeError, LdResult};
use log::{debug, info};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

/// Return the version information of the currently built latticedisk executable.
#[must_use]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Generate the lattice points described by `config` and render them into `writer`.
///
/// Nothing is written if the configuration is invalid.
///
/// # Errors
///
/// This function will return an error if
///   - the configuration contains an invalid radius.
///   - writing into `writer` fails.
pub fn generate_and_render<W: Write>(
    config: &EnumerationConfig,
    writer: &mut W,
) -> LdResult<()> {
    let points = config.generate()?;
    debug!("Rendering {} lattice points as {}", points.len(), config.format());
    render::render(&points, config.format(), writer)
}

/// Generate the lattice points described by `config` and write them to the given file or, if `output` is `None`,
/// to standard output.
///
/// # Errors
///
/// This function will return an error if
///   - the output file cannot be created.
///   - the configuration contains an invalid radius.
///   - writing the points fails.
pub fn write_output(config: &EnumerationConfig, output: Option<&Path>) -> LdResult<()> {
    if let Some(path) = output {
        info!("Write lattice points to {}", path.display());
        let file = File::create(path).map_err(|e| {
            LatticeError::Render(format!(
                "output file {} creation failed: {e}",
                path.display()
            ))
        })?;
        generate_and_render(config, &mut BufWriter::new(file))
    } else {
        info!("Write lattice points to standard output");
        generate_and_render(config, &mut BufWriter::new(io::stdout().lock()))
    }
}
