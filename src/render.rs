/// Drawing: ResolvedPlot → PNG bytes via plotters.

use image::codecs::png::PngEncoder;
use image::ImageEncoder;
use plotters::prelude::*;

use crate::config::JitterConfig;
use crate::error::{PlotError, PlotResult};
use crate::style::PlotStyle;
use crate::types::{RenderedPlot, ResolvedPlot, Rgb};

fn to_rgb_color(color: Rgb) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

/// Draw a resolved plot to a PNG image. The pipeline has already caught
/// every input error; failures here come from the drawing backend.
pub fn render(
    resolved: &ResolvedPlot,
    config: &JitterConfig,
    style: &PlotStyle,
) -> PlotResult<RenderedPlot> {
    let width = style.width;
    let height = style.height;
    let mut buf = vec![0u8; (width * height * 3) as usize];

    let background = to_rgb_color(style.background);
    let axis_color = to_rgb_color(style.axis);
    let text_color = to_rgb_color(style.text);
    let median_color = to_rgb_color(style.median_color);

    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        root.fill(&background)
            .map_err(|e| PlotError::render(format!("fill: {}", e)))?;

        let (x_min, x_max) = compute_x_range(resolved.categories.len());
        let (y_min, y_max) = compute_y_range(resolved);

        let label_font = ("sans-serif", style.label_font_size)
            .into_font()
            .color(&text_color);

        let mut binding = ChartBuilder::on(&root);
        let builder = binding
            .margin(10)
            .x_label_area_size(32)
            .y_label_area_size(44);
        if !config.title.is_empty() {
            builder.caption(
                &config.title,
                ("sans-serif", style.label_font_size + 6)
                    .into_font()
                    .color(&text_color),
            );
        }
        let mut chart = builder
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(|e| PlotError::render(format!("chart build: {}", e)))?;

        let categories = &resolved.categories;
        let x_fmt = |x: &f64| {
            // Label the tick only when it sits on a category center.
            let nearest = x.round();
            if (*x - nearest).abs() < 0.25 && nearest >= 0.0 && (nearest as usize) < categories.len()
            {
                categories[nearest as usize].clone()
            } else {
                String::new()
            }
        };

        chart
            .configure_mesh()
            .axis_style(axis_color)
            .bold_line_style(axis_color.mix(0.3))
            .light_line_style(axis_color.mix(0.1))
            .x_labels(categories.len().max(1))
            .x_label_formatter(&x_fmt)
            .x_desc(config.x_label.as_str())
            .y_desc(config.y_label.as_str())
            .label_style(label_font.clone())
            .axis_desc_style(label_font.clone())
            .draw()
            .map_err(|e| PlotError::render(format!("mesh: {}", e)))?;

        let radius = style.point_radius as i32;
        if resolved.legend.is_empty() {
            chart
                .draw_series(resolved.points.iter().map(|p| {
                    Circle::new((p.x, p.y), radius, to_rgb_color(p.color).filled())
                }))
                .map_err(|e| PlotError::render(format!("draw points: {}", e)))?;
        } else {
            // One series per color category so each gets a legend entry.
            for (ordinal, entry) in resolved.legend.iter().enumerate() {
                let color = to_rgb_color(entry.color);
                chart
                    .draw_series(
                        resolved
                            .points
                            .iter()
                            .zip(&resolved.color_ordinals)
                            .filter(|(_, &o)| o == ordinal)
                            .map(|(p, _)| Circle::new((p.x, p.y), radius, color.filled())),
                    )
                    .map_err(|e| PlotError::render(format!("draw points: {}", e)))?
                    .label(entry.label.as_str())
                    .legend(move |(x, y)| Circle::new((x, y), radius, color.filled()));
            }
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(background.mix(0.8))
                .border_style(axis_color)
                .label_font(label_font.clone())
                .draw()
                .map_err(|e| PlotError::render(format!("legend: {}", e)))?;
        }

        for segment in &resolved.medians {
            chart
                .draw_series(LineSeries::new(
                    [(segment.x0, segment.y), (segment.x1, segment.y)],
                    median_color.stroke_width(style.median_stroke_width),
                ))
                .map_err(|e| PlotError::render(format!("draw median: {}", e)))?;
        }

        root.present()
            .map_err(|e| PlotError::render(format!("present: {}", e)))?;
    }

    let png_bytes = encode_rgb_to_png(&buf, width, height)?;

    Ok(RenderedPlot {
        png_bytes,
        width,
        height,
    })
}

/// Category bands are unit-wide and centered on their ordinals.
fn compute_x_range(category_count: usize) -> (f64, f64) {
    if category_count == 0 {
        return (-0.5, 0.5);
    }
    (-0.5, category_count as f64 - 0.5)
}

/// Compute the y-axis range from the data, with padding.
fn compute_y_range(resolved: &ResolvedPlot) -> (f64, f64) {
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for point in &resolved.points {
        y_min = y_min.min(point.y);
        y_max = y_max.max(point.y);
    }

    // Fallback for empty/constant data
    if !y_min.is_finite() || !y_max.is_finite() {
        return (-1.0, 1.0);
    }
    if (y_max - y_min).abs() < 1e-10 {
        return (y_min - 1.0, y_max + 1.0);
    }

    // Add 10% padding
    let pad = (y_max - y_min) * 0.1;
    (y_min - pad, y_max + pad)
}

/// Encode a raw RGB pixel buffer to PNG.
fn encode_rgb_to_png(rgb: &[u8], width: u32, height: u32) -> PlotResult<Vec<u8>> {
    let mut png = Vec::new();
    let encoder = PngEncoder::new(&mut png);
    encoder
        .write_image(rgb, width, height, image::ExtendedColorType::Rgb8)
        .map_err(|e| PlotError::render(format!("PNG encode: {}", e)))?;
    Ok(png)
}
