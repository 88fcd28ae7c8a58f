//! Category resolution: display order of group labels and sample reordering.

use crate::error::{PlotError, PlotResult};
use crate::pipeline::OrdinalMap;
use crate::types::Sample;

/// Determine the display order of group categories and reorder the samples
/// to match.
///
/// Without an explicit order, categories keep their first-occurrence order
/// and the samples are untouched. With one, it must be an exact permutation
/// of the distinct group labels; samples are then stably reordered so that
/// category bands follow the explicit order, preserving the relative order
/// of samples within each category.
pub fn resolve(
    samples: Vec<Sample>,
    display_order: Option<&[String]>,
) -> PlotResult<(Vec<Sample>, OrdinalMap)> {
    let natural = OrdinalMap::from_labels(samples.iter().map(|s| s.group.as_str()));

    let order = match display_order {
        None => return Ok((samples, natural)),
        Some(order) => order,
    };

    let mut map = OrdinalMap::new();
    for label in order {
        let before = map.len();
        map.insert(label);
        if map.len() == before {
            return Err(PlotError::category_order(format!(
                "duplicate label in display_order: {:?}",
                label
            )));
        }
        if natural.get(label).is_none() {
            return Err(PlotError::category_order(format!(
                "display_order label not present in groups: {:?}",
                label
            )));
        }
    }
    if map.len() != natural.len() {
        let missing: Vec<&str> = natural
            .labels()
            .iter()
            .filter(|l| map.get(l).is_none())
            .map(|l| l.as_str())
            .collect();
        return Err(PlotError::category_order(format!(
            "display_order omits group labels: {:?}",
            missing
        )));
    }

    // Stable sort by explicit-order index keeps the original relative order
    // within each category.
    let mut samples = samples;
    samples.sort_by_key(|s| map.get(&s.group).unwrap_or(usize::MAX));

    Ok((samples, map))
}
