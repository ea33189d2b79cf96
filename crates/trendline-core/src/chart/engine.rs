//! Curve chart driver
//!
//! [`CurveChart`] is what a rendering layer holds on to: it keeps the latest
//! data and viewport, rebuilds the curve on every data update, rotates the
//! shared [`MorphState`], and answers animation ticks and pointer readouts.

extern crate alloc;
use alloc::sync::Arc;
use alloc::vec::Vec;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::lookup::{Readout, readout};
use super::morph::MorphState;
use super::path::{CurvePath, build_path};
use super::range::AxisRange;
use super::series::DataPoint;
use super::shared::SharedMorph;
use super::viewport::{CanvasGeometry, Viewport};
use super::{ChartError, ChartResult};
use crate::config::ChartConfig;

/// How data updates are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RenderMode {
    /// Morph from the visible curve to the new one
    #[default]
    Animated,
    /// Show the new curve immediately
    Static,
}

/// Stateful driver around the curve engine
#[derive(Debug)]
pub struct CurveChart {
    /// Validated configuration
    config: ChartConfig,
    /// Data of the current target curve
    points: Vec<DataPoint>,
    /// Viewport the current target curve was built with
    viewport: Option<Viewport>,
    /// Current transition and last drawn progress, shared with tick readers
    morph: SharedMorph,
    /// Data index last reported by [`CurveChart::select`]
    selected: Option<usize>,
}

impl CurveChart {
    /// Create a chart with no data yet
    pub fn new(config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;

        Ok(Self {
            config,
            points: Vec::new(),
            viewport: None,
            morph: SharedMorph::new(),
            selected: None,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Data of the current target curve
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// The shared transition, for tick callbacks that only hold `&self`
    ///
    /// Ticks through [`SharedMorph::frame`] record their progress just like
    /// [`CurveChart::frame`].
    pub fn shared(&self) -> &SharedMorph {
        &self.morph
    }

    /// Current transition snapshot
    pub fn snapshot(&self) -> Option<Arc<MorphState>> {
        self.morph.snapshot()
    }

    /// Replace the data and start a transition to the new curve
    ///
    /// In animated mode the first update rises from the bottom of the
    /// drawable area, and later updates start from the frame last drawn
    /// through either [`CurveChart::frame`] or [`CurveChart::shared`].
    /// Incompatible curves cut instantly. In static mode every update cuts.
    ///
    /// Returns the installed transition, or [`ChartError::NoData`] for an
    /// empty slice, leaving the current curve untouched.
    pub fn update(&mut self, points: &[DataPoint]) -> ChartResult<Arc<MorphState>> {
        let range = AxisRange::resolve(points, &self.config.range).ok_or(ChartError::NoData)?;
        let geometry = self.config.geometry;
        let path = build_path(points, &range, &geometry, self.config.smoothing);

        debug!(
            "Data update: {} points, {} commands, x {}..{}, y {}..{}",
            points.len(),
            path.len(),
            range.x.min,
            range.x.max,
            range.y.min,
            range.y.max
        );

        let state = match (self.config.mode, self.morph.visible()) {
            (RenderMode::Static, _) => MorphState::settled(path),
            (RenderMode::Animated, None) => MorphState::initial(path, geometry.bottom()),
            (RenderMode::Animated, Some((previous, progress))) => {
                previous.rotate(progress, path)
            }
        };

        self.points.clear();
        self.points.extend_from_slice(points);
        self.viewport = Some(Viewport::new(range, geometry));
        self.selected = None;

        let installed = self.morph.install(state);
        debug!("Morph state rotated (settled: {})", installed.is_settled());

        Ok(installed)
    }

    /// The path to draw at animation `progress` (clamped to [0, 1])
    ///
    /// The progress is remembered so an interrupting update can continue
    /// from this frame. Returns `None` before the first update.
    pub fn frame(&self, progress: f32) -> Option<CurvePath> {
        trace!("Frame at progress {}", progress);
        // Static mode only ever installs settled states
        self.morph.frame(progress)
    }

    /// The target curve of the current transition
    pub fn target(&self) -> Option<CurvePath> {
        self.morph.snapshot().map(|state| state.to().clone())
    }

    /// Indicator position and data index for a pointer at canvas `x`
    ///
    /// Answered against the target curve, so readouts do not move while the
    /// curve animates. `None` outside the curve's horizontal span.
    pub fn readout(&self, x: f32) -> Option<Readout> {
        let state = self.morph.snapshot()?;
        let viewport = self.viewport.as_ref()?;
        readout(state.to(), &self.points, viewport, x)
    }

    /// Track a pointer move, reporting the data index only when it changes
    ///
    /// Feeds a data-point-selected callback without repeating the same index
    /// on every pointer event.
    pub fn select(&mut self, x: f32) -> Option<usize> {
        let index = self.readout(x)?.index;
        if self.selected == Some(index) {
            return None;
        }

        self.selected = Some(index);
        Some(index)
    }

    /// Forget the last selected index (pointer released)
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Apply a new canvas size after a layout pass
    ///
    /// The current data is rebuilt for the new geometry and shown without
    /// animation, since the old and new curves live on different canvases.
    pub fn set_geometry(&mut self, geometry: CanvasGeometry) -> ChartResult<()> {
        let config = ChartConfig {
            geometry,
            ..self.config
        };
        config.validate()?;
        self.config = config;

        let Some(range) = self.viewport.as_ref().map(|viewport| *viewport.range()) else {
            return Ok(());
        };

        let path = build_path(&self.points, &range, &geometry, self.config.smoothing);
        debug!("Geometry changed, rebuilt {} commands", path.len());

        self.viewport = Some(Viewport::new(range, geometry));
        self.morph.install(MorphState::settled(path));
        Ok(())
    }
}
