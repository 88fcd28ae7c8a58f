//! Per-category median markers.

use crate::pipeline::OrdinalMap;
use crate::types::{MedianSegment, Sample, MEDIAN_HALF_WIDTH};

/// Standard median: mean of the two middle order statistics for even counts.
/// Empty input yields NaN; the pipeline never calls it on an empty category.
fn median(values: &mut Vec<f64>) -> f64 {
    values.sort_by(|a, b| a.total_cmp(b));
    let n = values.len();
    if n == 0 {
        return f64::NAN;
    }
    if n % 2 == 1 {
        values[n / 2]
    } else {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    }
}

/// One horizontal segment per group category, centered at its ordinal with
/// fixed half-width, at the height of the category median. Partitioning is
/// always by group, never colorgroup.
pub fn segments(samples: &[Sample], groups: &OrdinalMap) -> Vec<MedianSegment> {
    let mut per_category: Vec<Vec<f64>> = vec![Vec::new(); groups.len()];
    for sample in samples {
        if let Some(ordinal) = groups.get(&sample.group) {
            per_category[ordinal].push(sample.value);
        }
    }

    per_category
        .iter_mut()
        .enumerate()
        .filter(|(_, values)| !values.is_empty())
        .map(|(ordinal, values)| {
            let center = ordinal as f64;
            MedianSegment {
                x0: center - MEDIAN_HALF_WIDTH,
                x1: center + MEDIAN_HALF_WIDTH,
                y: median(values),
            }
        })
        .collect()
}
