use serde::{Deserialize, Serialize};

use crate::types::{Rgb, DEFAULT_JITTER_WIDTH};

/// Per-plot configuration. Everything is optional; `Default` gives a plain
/// single-color jitter plot with median overlays.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JitterConfig {
    /// Color table indexed by color-category ordinal. `None` = one default
    /// color for every point (and no legend).
    pub colors: Option<Vec<Rgb>>,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Full width of the jitter band, in ordinal units. 0 = strip plot.
    pub jitter_width: f64,
    /// Secondary labels controlling color assignment. Same length as the
    /// values when given; takes precedence over the group labels.
    pub colorgroup: Option<Vec<String>>,
    pub show_median: bool,
    pub show_legend: bool,
    /// Explicit category display order. Must be an exact permutation of the
    /// distinct group labels.
    pub display_order: Option<Vec<String>>,
    /// Seed for jitter placement. `None` = nondeterministic between renders.
    pub seed: Option<u64>,
}

impl Default for JitterConfig {
    fn default() -> Self {
        Self {
            colors: None,
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            jitter_width: DEFAULT_JITTER_WIDTH,
            colorgroup: None,
            show_median: true,
            show_legend: false,
            display_order: None,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = JitterConfig::default();
        assert!(config.colors.is_none());
        assert_eq!(config.jitter_width, 0.5);
        assert!(config.show_median);
        assert!(!config.show_legend);
        assert!(config.display_order.is_none());
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_partial_toml() {
        let config: JitterConfig =
            toml::from_str("jitter_width = 0.2\nshow_legend = true").unwrap();
        assert_eq!(config.jitter_width, 0.2);
        assert!(config.show_legend);
        // Untouched fields keep their defaults
        assert!(config.show_median);
    }
}
