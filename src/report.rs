//! End-of-run collision chart.
//!
//! The chart is drawn by plotters into an in-memory RGB buffer and then shown
//! as a texture in its own window. Nothing is written to disk.

use std::fmt::Display;
use std::time::Duration;

use log::info;
use piston_window::{
    EventLoop, G2dTexture, PistonWindow, Texture, TextureSettings, WindowSettings, clear,
    image as draw_image,
};
use plotters::prelude::*;

use crate::error::{Result, SimError};
use crate::stats::CollisionSnapshot;

pub const CHART_TITLE: &str = "Collision Data: Male vs Female Entities Over Time";
const CHART_SIZE: (u32, u32) = (800, 600);
const PINK: RGBColor = RGBColor(255, 192, 203);

/// `(period, count)` points for the male and female series.
pub type Series = Vec<(i32, i32)>;

fn chart_err(e: impl Display) -> SimError {
    SimError::Chart(e.to_string())
}

pub fn series(snapshots: &[CollisionSnapshot]) -> (Series, Series) {
    snapshots
        .iter()
        .map(|s| {
            (
                (s.period as i32, s.male_collisions as i32),
                (s.period as i32, s.female_collisions as i32),
            )
        })
        .unzip()
}

pub fn x_axis_label(period: Duration) -> String {
    format!("Time Periods ({}s each)", period.as_secs())
}

/// Draw the two collision series, each point labelled with its value, and
/// return the image as tightly packed RGB bytes.
pub fn render_chart(
    snapshots: &[CollisionSnapshot],
    period: Duration,
    (width, height): (u32, u32),
) -> Result<Vec<u8>> {
    let (male, female) = series(snapshots);
    let max_period = male.last().map_or(1, |&(p, _)| p);
    let max_count = male
        .iter()
        .chain(female.iter())
        .map(|&(_, c)| c)
        .max()
        .unwrap_or(0);

    let mut buffer = vec![255u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(CHART_TITLE, ("sans-serif", 22).into_font())
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(0..max_period + 1, 0..max_count + 2)
            .map_err(chart_err)?;

        chart
            .configure_mesh()
            .x_desc(x_axis_label(period))
            .y_desc("Number of Collisions")
            .draw()
            .map_err(chart_err)?;

        for (label, color, points) in [
            ("Male Collisions", BLUE, male),
            ("Female Collisions", PINK, female),
        ] {
            chart
                .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))
                .map_err(chart_err)?
                .label(label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
            chart
                .draw_series(points.iter().map(|&p| Circle::new(p, 4, color.filled())))
                .map_err(chart_err)?;
            chart
                .draw_series(points.iter().map(|&(x, y)| {
                    EmptyElement::at((x, y))
                        + Text::new(y.to_string(), (-4, -20), ("sans-serif", 14).into_font())
                }))
                .map_err(chart_err)?;
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(chart_err)?;

        root.present().map_err(chart_err)?;
    }
    Ok(buffer)
}

fn rgb_to_rgba(rgb: &[u8]) -> Vec<u8> {
    rgb.chunks_exact(3)
        .flat_map(|p| [p[0], p[1], p[2], 255])
        .collect()
}

/// Show the chart window until it is closed. With no snapshots there is
/// nothing to plot and no window opens.
pub fn show(snapshots: &[CollisionSnapshot], period: Duration) -> Result<()> {
    if snapshots.is_empty() {
        info!("no complete reporting period, skipping chart");
        return Ok(());
    }
    info!("plotting {} reporting periods", snapshots.len());

    let (width, height) = CHART_SIZE;
    let rgba = rgb_to_rgba(&render_chart(snapshots, period, CHART_SIZE)?);
    let img = ::image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| SimError::Chart("chart buffer has the wrong size".into()))?;

    let mut window: PistonWindow = WindowSettings::new(CHART_TITLE, [width, height])
        .exit_on_esc(true)
        .build()
        .map_err(|e| SimError::Window(e.to_string()))?;
    window.set_lazy(true);

    let mut texture_context = window.create_texture_context();
    let texture: G2dTexture = Texture::from_image(&mut texture_context, &img, &TextureSettings::new())
        .map_err(|e| SimError::Chart(format!("{e:?}")))?;

    while let Some(e) = window.next() {
        window.draw_2d(&e, |c, g, _| {
            clear([1.0; 4], g);
            draw_image(&texture, c.transform, g);
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(period: usize, male: u32, female: u32) -> CollisionSnapshot {
        CollisionSnapshot {
            period,
            male_collisions: male,
            female_collisions: female,
        }
    }

    #[test]
    fn series_follow_period_order() {
        let (male, female) = series(&[snapshot(1, 4, 0), snapshot(2, 1, 3)]);
        assert_eq!(male, vec![(1, 4), (2, 1)]);
        assert_eq!(female, vec![(1, 0), (2, 3)]);
    }

    #[test]
    fn axis_label_uses_period_length() {
        assert_eq!(x_axis_label(Duration::from_secs(30)), "Time Periods (30s each)");
    }

    #[test]
    fn chart_renders_both_series() {
        let snapshots = [snapshot(1, 4, 0), snapshot(2, 1, 3)];
        let pixels = render_chart(&snapshots, Duration::from_secs(30), (400, 300)).unwrap();
        assert_eq!(pixels.len(), 400 * 300 * 3);
        assert!(pixels.iter().any(|&b| b != 255));
    }

    #[test]
    fn empty_log_opens_no_window() {
        assert!(show(&[], Duration::from_secs(30)).is_ok());
    }

    #[test]
    fn rgba_conversion_adds_opaque_alpha() {
        assert_eq!(rgb_to_rgba(&[1, 2, 3, 4, 5, 6]), vec![1, 2, 3, 255, 4, 5, 6, 255]);
    }
}
