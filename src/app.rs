use crate::config::PlotterConfig;
use crate::coordinate::CoordinateSystem;
use crate::grid::Grid;
use crate::raster::{Color, PrimitiveKind, Rasterizer};
use crate::scene::SceneRenderer;
use crate::state::PlotterState;
use egui::{Color32, Context, Painter, Pos2, Rect, Shape, Stroke, Ui, Vec2};
use log::debug;

pub struct PointPlotterApp {
    state: PlotterState,
    renderer: SceneRenderer,
    config: PlotterConfig,
    viewport: Vec2,
}

impl PointPlotterApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: PlotterConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let coordinates = CoordinateSystem::new(config.view_half_extent);
        Self {
            state: PlotterState::new(coordinates, config.remove_radius),
            renderer: SceneRenderer::new(Grid::new(config.grid_extent), config.lines_style),
            config,
            viewport: Vec2::ZERO,
        }
    }

    // Mode commands are typed characters
    fn handle_keys(&mut self, ctx: &Context) {
        let typed: Vec<char> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Text(text) => Some(text.chars().collect::<Vec<_>>()),
                    _ => None,
                })
                .flatten()
                .collect()
        });

        for key in typed {
            self.state.on_key(key);
        }
    }

    fn handle_pointer(&mut self, ui: &Ui, canvas_rect: Rect) {
        let presses: Vec<(egui::PointerButton, Pos2)> = ui.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::PointerButton {
                        pos,
                        button,
                        pressed: true,
                        ..
                    } => Some((*button, *pos)),
                    _ => None,
                })
                .collect()
        });

        for (button, pos) in presses {
            if canvas_rect.contains(pos) {
                self.state
                    .on_pointer(button, pos - canvas_rect.min, canvas_rect.size());
            }
        }
    }

    fn track_resize(&mut self, size: Vec2) {
        if size != self.viewport {
            debug!("Viewport resized to {}x{}", size.x, size.y);
            self.viewport = size;
        }
    }

    fn draw_canvas(&mut self, ui: &mut Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click());
        let canvas_rect = response.rect;

        self.track_resize(canvas_rect.size());
        self.handle_pointer(ui, canvas_rect);

        let mut raster = PainterRasterizer::new(
            &painter,
            canvas_rect,
            self.state.coordinates(),
            &self.config,
        );
        self.renderer
            .render(self.state.points(), self.state.mode(), &mut raster);
    }
}

impl eframe::App for PointPlotterApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.draw_canvas(ui);
            });
    }
}

/// Draws rasterizer commands onto an egui painter, mapping grid units into `rect`.
struct PainterRasterizer<'a> {
    painter: &'a Painter,
    rect: Rect,
    coordinates: &'a CoordinateSystem,
    color: Color32,
    point_radius: f32,
    line_width: f32,
    font: egui::FontId,
    pending: Option<(PrimitiveKind, Vec<Pos2>)>,
}

impl<'a> PainterRasterizer<'a> {
    fn new(
        painter: &'a Painter,
        rect: Rect,
        coordinates: &'a CoordinateSystem,
        config: &PlotterConfig,
    ) -> Self {
        Self {
            painter,
            rect,
            coordinates,
            color: Color32::WHITE,
            point_radius: config.point_size / 2.0,
            line_width: config.line_width,
            font: egui::FontId::proportional(config.font_size),
            pending: None,
        }
    }
}

impl Rasterizer for PainterRasterizer<'_> {
    fn clear(&mut self, color: Color) {
        self.painter.rect_filled(self.rect, 0.0, color.to_color32());
    }

    fn set_color(&mut self, color: Color) {
        self.color = color.to_color32();
    }

    fn begin(&mut self, kind: PrimitiveKind) {
        self.pending = Some((kind, Vec::new()));
    }

    fn vertex(&mut self, x: f32, y: f32) {
        let pos = self.coordinates.to_screen(x, y, self.rect);
        if let Some((_, vertices)) = self.pending.as_mut() {
            vertices.push(pos);
        }
    }

    fn end(&mut self) {
        let Some((kind, vertices)) = self.pending.take() else {
            return;
        };

        let stroke = Stroke::new(self.line_width, self.color);
        for shape in primitive_shapes(kind, vertices, self.color, stroke, self.point_radius) {
            self.painter.add(shape);
        }
    }

    fn text(&mut self, x: f32, y: f32, text: &str) {
        let pos = self.coordinates.to_screen(x, y, self.rect);
        self.painter.text(
            pos,
            egui::Align2::LEFT_BOTTOM,
            text,
            self.font.clone(),
            self.color,
        );
    }

    fn flush(&mut self) {
        // egui presents the frame once `update` returns.
    }
}

/// Assembles egui shapes for one primitive, grouping vertices the way `kind` requires.
///
/// Incomplete trailing groups are dropped.
fn primitive_shapes(
    kind: PrimitiveKind,
    vertices: Vec<Pos2>,
    color: Color32,
    stroke: Stroke,
    point_radius: f32,
) -> Vec<Shape> {
    let filled = |group: &[Pos2]| Shape::convex_polygon(group.to_vec(), color, Stroke::NONE);

    match kind {
        PrimitiveKind::Points => vertices
            .into_iter()
            .map(|pos| Shape::circle_filled(pos, point_radius, color))
            .collect(),
        PrimitiveKind::Lines => vertices
            .chunks_exact(2)
            .map(|pair| Shape::line_segment([pair[0], pair[1]], stroke))
            .collect(),
        PrimitiveKind::LineStrip => vec![Shape::line(vertices, stroke)],
        PrimitiveKind::LineLoop => vec![Shape::closed_line(vertices, stroke)],
        PrimitiveKind::Triangles => vertices.chunks_exact(3).map(filled).collect(),
        PrimitiveKind::Quads => vertices.chunks_exact(4).map(filled).collect(),
        PrimitiveKind::Polygon => vec![filled(&vertices)],
    }
}
