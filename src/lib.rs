//! Interactive 2D point plotter.
//!
//! Points are placed on an integer grid by clicking, and the active draw mode
//! decides which primitive connects them. The core is independent of the
//! window: [`scene::SceneRenderer`] issues commands to any
//! [`raster::Rasterizer`], and [`app::PointPlotterApp`] wires it to eframe.

pub mod app;
pub mod config;
pub mod coordinate;
pub mod grid;
pub mod mode;
pub mod point;
pub mod raster;
pub mod scene;
pub mod state;

pub use config::PlotterConfig;
