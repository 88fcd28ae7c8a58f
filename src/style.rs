use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};
use crate::types::{Rgb, DEFAULT_POINT_COLOR, PLOT_HEIGHT, PLOT_WIDTH};

/// Visual knobs, separate from the data semantics in `JitterConfig`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotStyle {
    /// Output image dimensions (pixels).
    pub width: u32,
    pub height: u32,
    /// Background color.
    pub background: Rgb,
    /// Axis / grid color.
    pub axis: Rgb,
    /// Label and caption text color.
    pub text: Rgb,
    /// Point color when no color table is supplied.
    pub point_color: Rgb,
    /// Point radius in pixels.
    pub point_radius: u32,
    /// Median marker color and stroke width.
    pub median_color: Rgb,
    pub median_stroke_width: u32,
    /// Axis label font size in points.
    pub label_font_size: u32,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: PLOT_WIDTH,
            height: PLOT_HEIGHT,
            background: Rgb::new(30, 30, 46),
            axis: Rgb::new(88, 91, 112),
            text: Rgb::new(186, 194, 222),
            point_color: DEFAULT_POINT_COLOR,
            point_radius: 3,
            median_color: Rgb::new(205, 214, 244),
            median_stroke_width: 3,
            label_font_size: 16,
        }
    }
}

impl PlotStyle {
    /// Parse a style from TOML text; omitted fields keep their defaults.
    pub fn from_toml_str(text: &str) -> PlotResult<Self> {
        let style: PlotStyle =
            toml::from_str(text).map_err(|e| PlotError::config(format!("style: {}", e)))?;
        if style.width == 0 || style.height == 0 {
            return Err(PlotError::config("style: image dimensions must be nonzero"));
        }
        Ok(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let style = PlotStyle::default();
        assert_eq!(style.width, 800);
        assert_eq!(style.height, 500);
    }

    #[test]
    fn test_from_toml_partial() {
        let style = PlotStyle::from_toml_str(
            "point_radius = 5\nbackground = { r = 0, g = 0, b = 0 }",
        )
        .unwrap();
        assert_eq!(style.point_radius, 5);
        assert_eq!(style.background, Rgb::new(0, 0, 0));
        assert_eq!(style.width, 800);
    }

    #[test]
    fn test_from_toml_rejects_zero_dims() {
        let err = PlotStyle::from_toml_str("width = 0").unwrap_err();
        assert_eq!(err.kind, crate::error::ErrorKind::InvalidConfig);
    }

    #[test]
    fn test_from_toml_rejects_garbage() {
        assert!(PlotStyle::from_toml_str("width = \"wide\"").is_err());
    }
}
