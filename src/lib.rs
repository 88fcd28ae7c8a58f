//! # jitterplot
//!
//! Categorical jitter/strip plots: a scatter-based alternative to box
//! plots. Numeric samples are partitioned into categories, spread across
//! unit-wide horizontal bands with bounded jitter, optionally colored by a
//! secondary label, overlaid with per-category medians, and rendered to an
//! in-memory PNG via plotters.
//!
//! ```no_run
//! use jitterplot::{jitter_plot, JitterConfig};
//!
//! let values = [1.0, 2.0, 3.0, 4.0];
//! let groups = ["control", "control", "treated", "treated"];
//! let plot = jitter_plot(&values, &groups, &JitterConfig::default()).unwrap();
//! assert!(!plot.png_bytes.is_empty());
//! ```

pub mod config;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod style;
pub mod types;

pub use config::JitterConfig;
pub use error::{ErrorKind, PlotError, PlotResult};
pub use style::PlotStyle;
pub use types::{
    LegendEntry, MedianSegment, PointSpec, RenderedPlot, ResolvedPlot, Rgb, PALETTE,
};

/// Run the pure pipeline only: validate, resolve, color, lay out. No
/// drawing. Useful for inspecting positions and medians programmatically.
pub fn prepare(values: &[f64], groups: &[&str], config: &JitterConfig) -> PlotResult<ResolvedPlot> {
    pipeline::prepare(values, groups, config, types::DEFAULT_POINT_COLOR)
}

/// Render a jitter plot with the default style.
pub fn jitter_plot(
    values: &[f64],
    groups: &[&str],
    config: &JitterConfig,
) -> PlotResult<RenderedPlot> {
    jitter_plot_styled(values, groups, config, &PlotStyle::default())
}

/// Render a jitter plot with an explicit style.
pub fn jitter_plot_styled(
    values: &[f64],
    groups: &[&str],
    config: &JitterConfig,
    style: &PlotStyle,
) -> PlotResult<RenderedPlot> {
    let resolved = pipeline::prepare(values, groups, config, style.point_color)?;
    render::render(&resolved, config, style)
}
