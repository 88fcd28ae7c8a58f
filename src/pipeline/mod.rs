//! The data-preparation pipeline: validate → resolve categories → map
//! colors → lay out jittered positions → median overlays → legend.
//!
//! Every stage is pure; all errors surface here, before any drawing.

pub mod category;
pub mod color;
pub mod layout;
pub mod legend;
pub mod median;
pub mod validate;

use std::collections::HashMap;

use crate::config::JitterConfig;
use crate::error::PlotResult;
use crate::types::{ResolvedPlot, Rgb, Sample};

/// Insertion-order-preserving label → ordinal mapping ("stable unique").
///
/// Built by a single left-to-right scan; the ordinal of a label is the
/// position of its first occurrence.
#[derive(Debug, Clone, Default)]
pub struct OrdinalMap {
    labels: Vec<String>,
    index: HashMap<String, usize>,
}

impl OrdinalMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan labels left to right, assigning ordinals by first occurrence.
    pub fn from_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let mut map = Self::new();
        for label in labels {
            map.insert(label);
        }
        map
    }

    /// Ordinal of `label`, assigning the next one on first sight.
    pub fn insert(&mut self, label: &str) -> usize {
        if let Some(&ordinal) = self.index.get(label) {
            return ordinal;
        }
        let ordinal = self.labels.len();
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), ordinal);
        ordinal
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in ordinal order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// Run the full pure pipeline. `point_color` is used when no color table is
/// supplied.
pub fn prepare(
    values: &[f64],
    groups: &[&str],
    config: &JitterConfig,
    point_color: Rgb,
) -> PlotResult<ResolvedPlot> {
    validate::check_inputs(values, groups, config)?;

    let samples: Vec<Sample> = values
        .iter()
        .zip(groups.iter())
        .enumerate()
        .map(|(i, (&value, &group))| Sample {
            value,
            group: group.to_string(),
            colorgroup: config.colorgroup.as_ref().map(|cg| cg[i].clone()),
        })
        .collect();

    let (samples, group_map) = category::resolve(samples, config.display_order.as_deref())?;
    let (colors, color_ordinals, color_map) =
        color::assign(&samples, config.colors.as_deref(), point_color)?;
    let points = layout::scatter(&samples, &group_map, &colors, config.jitter_width, config.seed);
    let medians = if config.show_median {
        median::segments(&samples, &group_map)
    } else {
        Vec::new()
    };
    let legend = legend::entries(
        config.show_legend && config.colors.is_some(),
        config.colors.as_deref(),
        &color_map,
    );

    Ok(ResolvedPlot {
        points,
        color_ordinals,
        categories: group_map.labels().to_vec(),
        medians,
        legend,
    })
}
