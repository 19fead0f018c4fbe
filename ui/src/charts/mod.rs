//! Pure SVG chart components.
//!
//! Charts render straight into RSX and size themselves through the SVG
//! `viewBox`, so they scale with their container. Colours come from the
//! theme's CSS variables.

mod bar;
pub mod geometry;
mod line;

pub use bar::{BarChart, BarDatum, HorizontalBarChart};
pub use geometry::BrushWindow;
pub use line::{ChartSeries, LineChart};
