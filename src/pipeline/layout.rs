//! Jittered horizontal placement within category bands.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::pipeline::OrdinalMap;
use crate::types::{PointSpec, Rgb, Sample};

/// Place each sample in its category band.
///
/// A category band is centered at its ordinal; the horizontal offset is
/// uniform in `[-w/2, +w/2]` where `w` is the full jitter width. The
/// vertical position is the raw value. A seed makes placement reproducible
/// across calls; without one, each render jitters differently.
pub fn scatter(
    samples: &[Sample],
    groups: &OrdinalMap,
    colors: &[Rgb],
    jitter_width: f64,
    seed: Option<u64>,
) -> Vec<PointSpec> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let half = jitter_width / 2.0;

    samples
        .iter()
        .zip(colors.iter())
        .map(|(sample, &color)| {
            let ordinal = groups.get(&sample.group).unwrap_or(0) as f64;
            let offset = if half > 0.0 {
                rng.random_range(-half..=half)
            } else {
                0.0
            };
            PointSpec {
                x: ordinal + offset,
                y: sample.value,
                color,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(n: usize) -> (Vec<Sample>, OrdinalMap, Vec<Rgb>) {
        let samples: Vec<Sample> = (0..n)
            .map(|i| Sample {
                value: i as f64,
                group: if i % 2 == 0 { "A".to_string() } else { "B".to_string() },
                colorgroup: None,
            })
            .collect();
        let groups = OrdinalMap::from_labels(samples.iter().map(|s| s.group.as_str()));
        let colors = vec![Rgb::new(0, 0, 0); n];
        (samples, groups, colors)
    }

    #[test]
    fn test_offsets_bounded_by_half_width() {
        let (samples, groups, colors) = fixture(200);
        let width = 0.5;
        let points = scatter(&samples, &groups, &colors, width, None);
        for (point, sample) in points.iter().zip(&samples) {
            let ordinal = groups.get(&sample.group).unwrap() as f64;
            assert!((point.x - ordinal).abs() <= width / 2.0 + 1e-12);
            assert_eq!(point.y, sample.value);
        }
    }

    #[test]
    fn test_zero_width_is_strip_plot() {
        let (samples, groups, colors) = fixture(10);
        let points = scatter(&samples, &groups, &colors, 0.0, None);
        for (point, sample) in points.iter().zip(&samples) {
            assert_eq!(point.x, groups.get(&sample.group).unwrap() as f64);
        }
    }

    #[test]
    fn test_seed_reproduces_placement() {
        let (samples, groups, colors) = fixture(50);
        let a = scatter(&samples, &groups, &colors, 0.5, Some(42));
        let b = scatter(&samples, &groups, &colors, 0.5, Some(42));
        assert_eq!(a, b);

        let c = scatter(&samples, &groups, &colors, 0.5, Some(43));
        assert_ne!(a, c);
    }
}
