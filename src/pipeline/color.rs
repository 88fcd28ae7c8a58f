//! Color assignment from an optional color table.

use crate::error::{PlotError, PlotResult};
use crate::pipeline::OrdinalMap;
use crate::types::{Rgb, Sample};

/// Assign each sample a color.
///
/// The color selector is the sample's colorgroup when present, else its
/// group. Distinct selector values are enumerated by first occurrence over
/// the (already reordered) samples — an independent scan from the category
/// resolver's. Returns the per-sample colors, the per-sample color-category
/// ordinals, and the selector's ordinal map.
pub fn assign(
    samples: &[Sample],
    table: Option<&[Rgb]>,
    point_color: Rgb,
) -> PlotResult<(Vec<Rgb>, Vec<usize>, OrdinalMap)> {
    let mut map = OrdinalMap::new();
    let mut ordinals = Vec::with_capacity(samples.len());
    for sample in samples {
        let label = sample.colorgroup.as_deref().unwrap_or(&sample.group);
        ordinals.push(map.insert(label));
    }

    let colors = match table {
        None => vec![point_color; samples.len()],
        Some(table) => {
            if map.len() > table.len() {
                return Err(PlotError::color_index(format!(
                    "color table has {} rows but {} distinct color categories",
                    table.len(),
                    map.len()
                )));
            }
            ordinals.iter().map(|&i| table[i]).collect()
        }
    };

    Ok((colors, ordinals, map))
}
