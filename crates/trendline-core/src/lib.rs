//! Hardware-independent curve engine for trendline
//!
//! This crate turns an ordered time series into a smooth, densely sampled
//! curve inside a fixed-size canvas, morphs between successive curves as data
//! changes, and answers pointer readouts against the rendered curve.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for the preview binary and tests).

#![no_std]

extern crate alloc;

pub mod chart;
pub mod config;

pub use chart::{ChartError, ChartResult};
pub use config::ChartConfig;
