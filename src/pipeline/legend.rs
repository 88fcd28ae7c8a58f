//! Legend entries for distinct color categories.

use crate::pipeline::OrdinalMap;
use crate::types::{LegendEntry, Rgb};

/// One entry per distinct color category in first-occurrence order, pairing
/// its label with its swatch. Empty unless enabled and a table is present.
pub fn entries(enabled: bool, table: Option<&[Rgb]>, color_map: &OrdinalMap) -> Vec<LegendEntry> {
    let table = match (enabled, table) {
        (true, Some(table)) => table,
        _ => return Vec::new(),
    };

    color_map
        .labels()
        .iter()
        .enumerate()
        .map(|(ordinal, label)| LegendEntry {
            label: label.clone(),
            // The color mapper has already checked the table covers every
            // ordinal in the map.
            color: table[ordinal],
        })
        .collect()
}
