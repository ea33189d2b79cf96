//! Desktop preview for the trendline curve engine.
//!
//! Drives `trendline-core` the way a rendering layer would: a synthetic
//! series is loaded, a new sample arrives and the window slides, and the
//! resulting transition is rendered at fixed progress steps. Every frame is
//! written as a PNG through `embedded-graphics-simulator` (headless, no SDL
//! window), and a few pointer readouts are logged.
//!
//! ```text
//! RUST_LOG=debug trendline-preview [output-dir]
//! ```

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay};
use log::info;

use trendline_core::{ChartConfig, ChartError};
use trendline_core::chart::{CanvasGeometry, CurveChart, CurvePath, CurveStroke, DataPoint};

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

/// Canvas width in pixels.
const DISPLAY_WIDTH_PX: u32 = 320;

/// Canvas height in pixels.
const DISPLAY_HEIGHT_PX: u32 = 120;

/// Horizontal padding inside the canvas.
const HORIZONTAL_PADDING_PX: f32 = 8.0;

/// Vertical padding inside the canvas.
const VERTICAL_PADDING_PX: f32 = 6.0;

/// Pixel scale factor for the written images.
const OUTPUT_SCALE: u32 = 2;

/// Frames rendered per transition (progress 0.0 through 1.0).
const FRAMES_PER_TRANSITION: u32 = 6;

/// Curve stroke width in pixels.
const STROKE_WIDTH_PX: u32 = 2;

/// Points in the visible window.
const WINDOW_POINTS: usize = 48;

/// Spacing between synthetic samples.
const SAMPLE_INTERVAL_MS: i64 = 10_000;

// ---------------------------------------------------------------------------
// Mock data generation
// ---------------------------------------------------------------------------

/// Generates a synthetic temperature-like series.
struct MockSeriesGenerator {
    /// Timestamp of the next sample.
    next_ts: i64,
}

impl MockSeriesGenerator {
    fn new() -> Self {
        Self { next_ts: 0 }
    }

    /// Produce the next sample and advance the clock.
    fn next_point(&mut self) -> DataPoint {
        let ts = self.next_ts;
        self.next_ts += SAMPLE_INTERVAL_MS;

        let t = ts as f64 / 1_000.0;
        // 20–26 °C sinusoidal with slow drift
        let value = 23.0 + 3.0 * (t / 120.0).sin() + 0.5 * (t / 37.0).cos();

        DataPoint::new(ts, value)
    }

    /// Produce `count` consecutive samples.
    fn history(&mut self, count: usize) -> Vec<DataPoint> {
        (0..count).map(|_| self.next_point()).collect()
    }
}

/// Chart errors are `no_std`; carry them as their message.
fn chart_error(e: ChartError) -> Box<dyn Error> {
    e.to_string().into()
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Draw one frame and write it to `path`.
fn write_frame(curve: &CurvePath, path: &Path) -> Result<(), Box<dyn Error>> {
    let mut display =
        SimulatorDisplay::<Rgb565>::new(Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX));
    display.clear(Rgb565::BLACK)?;

    CurveStroke::new(curve, Rgb565::CYAN, STROKE_WIDTH_PX).draw(&mut display)?;

    let output_settings = OutputSettingsBuilder::new().scale(OUTPUT_SCALE).build();
    display
        .to_rgb_output_image(&output_settings)
        .save_png(path)?;
    Ok(())
}

/// Render one transition at evenly spaced progress values.
fn render_transition(
    chart: &CurveChart,
    out_dir: &Path,
    label: &str,
) -> Result<(), Box<dyn Error>> {
    for frame in 0..FRAMES_PER_TRANSITION {
        let progress = frame as f32 / (FRAMES_PER_TRANSITION - 1) as f32;
        let Some(curve) = chart.frame(progress) else {
            continue;
        };

        let path = out_dir.join(format!("{label}_{frame:02}.png"));
        write_frame(&curve, &path)?;
        info!(
            "Wrote {} (progress {:.2}, {} commands)",
            path.display(),
            progress,
            curve.len()
        );
    }

    Ok(())
}

/// Log readouts for a pointer sweeping across the canvas.
fn sweep_pointer(chart: &mut CurveChart) {
    for x in (0..=DISPLAY_WIDTH_PX).step_by(40) {
        let x = x as f32;
        match chart.readout(x) {
            Some(readout) => {
                let value = chart.points()[readout.index].value;
                info!(
                    "Pointer x={:>5.1}: indicator at ({:.1}, {:.1}), point #{} = {:.2}",
                    x, readout.point.x, readout.point.y, readout.index, value
                );
            }
            None => info!("Pointer x={:>5.1}: outside the curve", x),
        }

        if let Some(index) = chart.select(x) {
            info!("Selected data point #{}", index);
        }
    }
    chart.clear_selection();
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    info!("Starting trendline preview");
    info!("Canvas: {}×{} (scale {}×)", DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, OUTPUT_SCALE);

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("frames"));
    fs::create_dir_all(&out_dir)?;

    let geometry = CanvasGeometry::new(DISPLAY_WIDTH_PX as f32, DISPLAY_HEIGHT_PX as f32)
        .with_padding(HORIZONTAL_PADDING_PX, VERTICAL_PADDING_PX);
    let mut chart = CurveChart::new(ChartConfig::new(geometry)).map_err(chart_error)?;

    let mut generator = MockSeriesGenerator::new();
    let mut window = generator.history(WINDOW_POINTS);

    // First update: the curve rises from the baseline
    chart.update(&window).map_err(chart_error)?;
    render_transition(&chart, &out_dir, "initial")?;

    // A new sample arrives and the window slides; the span is unchanged so
    // the curves share their shape and morph
    window.remove(0);
    window.push(generator.next_point());
    let state = chart.update(&window).map_err(chart_error)?;
    info!("Slide update (cut: {})", state.is_settled());
    render_transition(&chart, &out_dir, "slide")?;

    // The window grows; the per-segment sampling changes and the engine cuts
    window.extend(generator.history(WINDOW_POINTS / 2));
    let state = chart.update(&window).map_err(chart_error)?;
    info!("Grow update (cut: {})", state.is_settled());
    render_transition(&chart, &out_dir, "grow")?;

    sweep_pointer(&mut chart);

    info!("Frames written to {}", out_dir.display());
    Ok(())
}
