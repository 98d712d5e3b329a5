use anyhow::Context;
use clap::Parser;
use point_plotter::app::PointPlotterApp;
use point_plotter::config::{LinesStyle, PlotterConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "point_plotter")]
#[command(version, about = "Plot points on a grid and connect them with GL-style primitives")]
struct Cli {
    /// Load settings from a TOML file
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// How LINES mode pairs up points
    #[arg(long, value_enum, value_name = "STYLE")]
    lines: Option<LinesStyle>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => PlotterConfig::load(path)
            .with_context(|| format!("Could not load config {}", path.display()))?,
        None => PlotterConfig::default(),
    };
    if let Some(style) = cli.lines {
        config.lines_style = style;
    }

    log::info!("Starting point plotter");
    log::info!("Controls:");
    log::info!("  - Left click: plot a point");
    log::info!("  - Right click: remove the nearest point");
    log::info!("  - 1-6: LINE_LOOP, TRIANGLES, QUADS, LINES, POINTS, POLYGONS");

    let native_options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(config.window_width, config.window_height)),
        ..Default::default()
    };

    eframe::run_native(
        "2D Point Plotter",
        native_options,
        Box::new(move |cc| Box::new(PointPlotterApp::new(cc, config))),
    )
    .map_err(|err| anyhow::anyhow!("Failed to open window: {err}"))?;

    log::info!("Point plotter closed");
    Ok(())
}
