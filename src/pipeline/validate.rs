//! Eager input validation, ahead of any resolution or drawing.

use crate::config::JitterConfig;
use crate::error::{PlotError, PlotResult};

/// Check shape and numeric conformance of the inputs.
///
/// Lengths must agree, values must be finite, and the jitter width must be
/// a finite non-negative number. The color-table size check belongs to the
/// color mapper, which knows the distinct-category count.
pub fn check_inputs(values: &[f64], groups: &[&str], config: &JitterConfig) -> PlotResult<()> {
    if values.len() != groups.len() {
        return Err(PlotError::shape(format!(
            "{} values but {} group labels",
            values.len(),
            groups.len()
        )));
    }
    if let Some(colorgroup) = &config.colorgroup {
        if colorgroup.len() != values.len() {
            return Err(PlotError::shape(format!(
                "{} values but {} colorgroup labels",
                values.len(),
                colorgroup.len()
            )));
        }
    }

    if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
        return Err(PlotError::type_err(format!(
            "value at index {} is not finite: {}",
            pos, values[pos]
        )));
    }

    if !config.jitter_width.is_finite() || config.jitter_width < 0.0 {
        return Err(PlotError::config(format!(
            "jitter_width must be finite and non-negative, got {}",
            config.jitter_width
        )));
    }

    Ok(())
}
