#![warn(missing_docs)]
//! Rendering of lattice point lists
//!
//! This module turns a list of [`LatticePoint`]s into text. Computing the points and rendering them are separate
//! stages, so the same list can be written in any [`OutputFormat`].
use crate::{
    distributions::LatticePoint,
    error::{LatticeError, LdResult},
};
use csv::{Terminator, WriterBuilder};
use serde::Deserialize;
use std::{fmt::Display, io::Write};
use strum::{EnumIter, EnumString};

/// Text format of the rendered point list.
#[derive(
    EnumIter, EnumString, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Count line followed by one `vec2(x.0,y.0),` line per point.
    ///
    /// Every point line carries a trailing comma, so the lines can be pasted into a shader array literal.
    #[default]
    Glsl,
    /// Header row `x,y` followed by one comma separated row per point.
    Csv,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::Glsl => "glsl",
            Self::Csv => "csv",
        };
        write!(f, "{msg}")
    }
}

/// Format a single point as a two component vector literal with trailing comma, e.g. `vec2(-1.0,2.0),`.
#[must_use]
pub fn format_vec2(point: &LatticePoint) -> String {
    format!("vec2({}.0,{}.0),", point.x, point.y)
}

/// Write the given points in the given [`OutputFormat`] into `writer`.
///
/// # Errors
///
/// This function will return an error if writing into `writer` fails.
pub fn render<W: Write>(
    points: &[LatticePoint],
    format: OutputFormat,
    writer: &mut W,
) -> LdResult<()> {
    match format {
        OutputFormat::Glsl => render_glsl(points, writer),
        OutputFormat::Csv => render_csv(points, writer),
    }
}

/// Render the given points into a `String`.
///
/// # Errors
///
/// This function will return an error if the rendered text is not valid UTF-8 (in theory not possible).
pub fn render_to_string(points: &[LatticePoint], format: OutputFormat) -> LdResult<String> {
    let mut buffer: Vec<u8> = Vec::new();
    render(points, format, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| LatticeError::Render(format!("rendered output is not valid UTF-8: {e}")))
}

fn render_glsl<W: Write>(points: &[LatticePoint], writer: &mut W) -> LdResult<()> {
    writeln!(writer, "{}", points.len())
        .map_err(|e| LatticeError::Render(format!("writing point count failed: {e}")))?;
    for point in points {
        writeln!(writer, "{}", format_vec2(point))
            .map_err(|e| LatticeError::Render(format!("writing point failed: {e}")))?;
    }
    writer
        .flush()
        .map_err(|e| LatticeError::Render(format!("flushing output failed: {e}")))
}

fn render_csv<W: Write>(points: &[LatticePoint], writer: &mut W) -> LdResult<()> {
    let mut csv_writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    csv_writer
        .write_record(["x", "y"])
        .map_err(|e| LatticeError::Render(format!("writing csv header failed: {e}")))?;
    for point in points {
        csv_writer
            .write_record([point.x.to_string(), point.y.to_string()])
            .map_err(|e| LatticeError::Render(format!("writing csv record failed: {e}")))?;
    }
    csv_writer
        .flush()
        .map_err(|e| LatticeError::Render(format!("flushing csv output failed: {e}")))
}
