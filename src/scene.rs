//! Per-frame scene: grid, markers, labels, the active primitive and overlays.

use crate::config::LinesStyle;
use crate::grid::Grid;
use crate::mode::DrawMode;
use crate::point::GridPoint;
use crate::raster::{self, PrimitiveKind, Rasterizer};

/// Offset of a point's coordinate label from the point, in grid units.
const LABEL_OFFSET: f32 = 0.2;

pub struct SceneRenderer {
    grid: Grid,
    lines_style: LinesStyle,
}

impl SceneRenderer {
    pub fn new(grid: Grid, lines_style: LinesStyle) -> Self {
        Self { grid, lines_style }
    }

    /// Issues the complete frame. Nothing is cached between calls.
    pub fn render(&self, points: &[GridPoint], mode: DrawMode, raster: &mut impl Rasterizer) {
        raster.clear(raster::BLACK);

        raster.set_color(raster::GRAY);
        self.grid.draw_lines(raster);

        raster.set_color(raster::RED);
        draw_markers(points, raster);

        raster.set_color(raster::WHITE);
        for point in points {
            raster.text(
                point.x as f32 + LABEL_OFFSET,
                point.y as f32 + LABEL_OFFSET,
                &point.to_string(),
            );
        }

        // Help text shares the primitive color.
        raster.set_color(raster::GREEN);
        self.draw_primitive(points, mode, raster);
        let edge = self.grid.extent() as f32;
        let (top, bottom) = (edge + 1.0, -edge - 1.0);
        raster.text(2.5, top, "Press 1-6 to change modes");
        raster.text(-edge, bottom, "Press MOUSE 1 to plot points");
        raster.text(2.0, bottom, "Press MOUSE 2 to remove points");

        raster.set_color(raster::WHITE);
        self.grid.draw_axis_labels(raster);
        raster.text(-edge, top, &format!("Mode: {}", mode.name()));

        raster.flush();
    }

    fn draw_primitive(&self, points: &[GridPoint], mode: DrawMode, raster: &mut impl Rasterizer) {
        match mode {
            DrawMode::LineLoop => {
                if points.len() >= 2 {
                    emit(raster, PrimitiveKind::LineLoop, points);
                }
            }
            DrawMode::Triangles => {
                for group in points.chunks_exact(3) {
                    emit(raster, PrimitiveKind::Triangles, group);
                }
            }
            DrawMode::Quads => {
                for group in points.chunks_exact(4) {
                    emit(raster, PrimitiveKind::Quads, group);
                }
            }
            DrawMode::Lines => match self.lines_style {
                LinesStyle::Disjoint => {
                    for pair in points.chunks_exact(2) {
                        emit(raster, PrimitiveKind::Lines, pair);
                    }
                }
                LinesStyle::Connected => {
                    if points.len() >= 2 {
                        emit(raster, PrimitiveKind::LineStrip, points);
                    }
                }
            },
            DrawMode::Points => draw_markers(points, raster),
            DrawMode::Polygons => {
                if points.len() >= 3 {
                    emit(raster, PrimitiveKind::Polygon, points);
                }
            }
        }
    }
}

fn draw_markers(points: &[GridPoint], raster: &mut impl Rasterizer) {
    if !points.is_empty() {
        emit(raster, PrimitiveKind::Points, points);
    }
}

fn emit(raster: &mut impl Rasterizer, kind: PrimitiveKind, points: &[GridPoint]) {
    raster.begin(kind);
    for point in points {
        raster.vertex(point.x as f32, point.y as f32);
    }
    raster.end();
}
