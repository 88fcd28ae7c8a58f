/// Core data types shared by the pipeline and the renderer.

use serde::{Deserialize, Serialize};

/// Default maximum jitter band width, in ordinal units.
pub const DEFAULT_JITTER_WIDTH: f64 = 0.5;
/// Half-width of the median marker, in ordinal units.
pub const MEDIAN_HALF_WIDTH: f64 = 0.3;
/// Output image dimensions (pixels).
pub const PLOT_WIDTH: u32 = 800;
pub const PLOT_HEIGHT: u32 = 500;

/// Opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Point color when no color table is supplied.
pub const DEFAULT_POINT_COLOR: Rgb = Rgb::new(137, 180, 250);

/// Color palette suited to the dark default background (RGB).
/// Callers can pass this (or a slice of it) as the color table.
pub const PALETTE: &[Rgb] = &[
    Rgb::new(137, 180, 250), // blue
    Rgb::new(166, 227, 161), // green
    Rgb::new(249, 226, 175), // yellow
    Rgb::new(243, 139, 168), // red
    Rgb::new(203, 166, 247), // mauve
    Rgb::new(148, 226, 213), // teal
    Rgb::new(250, 179, 135), // peach
    Rgb::new(180, 190, 254), // lavender
];

/// One input observation after boundary conversion.
#[derive(Debug, Clone)]
pub struct Sample {
    pub value: f64,
    pub group: String,
    /// Secondary label controlling color assignment, when present.
    pub colorgroup: Option<String>,
}

/// Per-sample resolved draw attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointSpec {
    pub x: f64,
    pub y: f64,
    pub color: Rgb,
}

/// One median marker: a horizontal segment at the category median.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MedianSegment {
    pub x0: f64,
    pub x1: f64,
    pub y: f64,
}

/// One legend entry: a color-category label and its swatch.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgb,
}

/// Output of the pure pipeline, ready for drawing.
#[derive(Debug, Clone)]
pub struct ResolvedPlot {
    /// One entry per input sample, in resolved display order.
    pub points: Vec<PointSpec>,
    /// Color-category ordinal per point, parallel to `points`.
    pub color_ordinals: Vec<usize>,
    /// Group category labels in display order (index = ordinal).
    pub categories: Vec<String>,
    /// Empty when the median overlay is disabled.
    pub medians: Vec<MedianSegment>,
    /// Empty unless a color table was supplied and the legend enabled.
    pub legend: Vec<LegendEntry>,
}

/// A rendered plot image.
#[derive(Debug, Clone)]
pub struct RenderedPlot {
    pub png_bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}
