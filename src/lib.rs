//! barchart_rs
//!
//! A small Rust library for laying out vertical bar charts and drawing them
//! through a device-context style [`viz::Canvas`]. Pairs with the `barchart`
//! CLI and the `barchart-gui` window.
//!
//! ### Features
//! - Units of bars anchored at X positions, with per-bar labels and colors
//! - Axis lengths, legend origin and a label-deduplicated legend derived on every insertion
//! - Dialog-unit geometry converted to pixels with the host's dialog base units
//! - Display-list recording, SVG/PNG output through Plotters, and an egui window
//!
//! ### Example
//! ```no_run
//! use barchart_rs::sample::{SampleSettings, sample_chart};
//! use barchart_rs::viz::{self, RenderOptions};
//!
//! let chart = sample_chart(SampleSettings::default())?;
//! viz::render_to_file(&chart, "chart.svg", &RenderOptions::default())?;
//! let calls = viz::record_chart(&chart, &RenderOptions::default());
//! println!("{} drawing calls", calls.commands().len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod chart;
pub mod encoding;
pub mod error;
pub mod models;
pub mod sample;
pub mod style;
pub mod viz;
pub mod viz_plotters_adapter;

pub use chart::{ChartConfig, ChartData};
pub use error::{ChartError, ChartResult};
pub use models::{LegendEntry, LegendPlacement, Point, Rect, UnitData};
pub use style::{BarStyle, ChartStyle, Color, FontSpec};
