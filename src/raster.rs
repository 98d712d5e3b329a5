//! Immediate-mode drawing interface the scene is rendered through.

/// RGB color with components in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn to_color32(self) -> egui::Color32 {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        egui::Color32::from_rgb(channel(self.r), channel(self.g), channel(self.b))
    }
}

pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
pub const GRAY: Color = Color::new(0.5, 0.5, 0.5);
pub const RED: Color = Color::new(1.0, 0.0, 0.0);
pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);

/// How the vertices between `begin` and `end` are assembled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimitiveKind {
    Points,
    /// Independent segments, one per vertex pair.
    Lines,
    LineStrip,
    LineLoop,
    Triangles,
    Quads,
    Polygon,
}

/// Receives the draw commands for one frame, in order.
///
/// Coordinates are logical grid units. Implementations never report back to
/// the caller.
pub trait Rasterizer {
    fn clear(&mut self, color: Color);
    fn set_color(&mut self, color: Color);
    fn begin(&mut self, kind: PrimitiveKind);
    fn vertex(&mut self, x: f32, y: f32);
    fn end(&mut self);
    fn text(&mut self, x: f32, y: f32, text: &str);
    fn flush(&mut self);
}

/// A single recorded draw command.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    SetColor(Color),
    Begin(PrimitiveKind),
    Vertex(f32, f32),
    End,
    Text { x: f32, y: f32, text: String },
    Flush,
}

/// Rasterizer that stores the command stream instead of drawing it.
#[derive(Debug, Default)]
pub struct RecordingRasterizer {
    pub commands: Vec<DrawCommand>,
}

impl RecordingRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertex lists of every recorded primitive of `kind`, in emission order.
    pub fn primitives(&self, kind: PrimitiveKind) -> Vec<Vec<(f32, f32)>> {
        let mut found = Vec::new();
        let mut current: Option<Vec<(f32, f32)>> = None;
        for command in &self.commands {
            match command {
                DrawCommand::Begin(k) => {
                    current = (*k == kind).then(Vec::new);
                }
                DrawCommand::Vertex(x, y) => {
                    if let Some(vertices) = current.as_mut() {
                        vertices.push((*x, *y));
                    }
                }
                DrawCommand::End => {
                    if let Some(vertices) = current.take() {
                        found.push(vertices);
                    }
                }
                _ => {}
            }
        }
        found
    }

    /// All text commands as `(x, y, text)`.
    pub fn texts(&self) -> Vec<(f32, f32, &str)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { x, y, text } => Some((*x, *y, text.as_str())),
                _ => None,
            })
            .collect()
    }
}

impl Rasterizer for RecordingRasterizer {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn set_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetColor(color));
    }

    fn begin(&mut self, kind: PrimitiveKind) {
        self.commands.push(DrawCommand::Begin(kind));
    }

    fn vertex(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::Vertex(x, y));
    }

    fn end(&mut self) {
        self.commands.push(DrawCommand::End);
    }

    fn text(&mut self, x: f32, y: f32, text: &str) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
        });
    }

    fn flush(&mut self) {
        self.commands.push(DrawCommand::Flush);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_converts_to_8bit_channels() {
        assert_eq!(GRAY.to_color32(), egui::Color32::from_rgb(128, 128, 128));
        assert_eq!(GREEN.to_color32(), egui::Color32::from_rgb(0, 255, 0));
        assert_eq!(
            Color::new(2.0, -1.0, 1.0).to_color32(),
            egui::Color32::from_rgb(255, 0, 255)
        );
    }

    #[test]
    fn primitives_groups_vertices_by_kind() {
        let mut raster = RecordingRasterizer::new();
        raster.begin(PrimitiveKind::Lines);
        raster.vertex(0.0, 0.0);
        raster.vertex(1.0, 1.0);
        raster.end();
        raster.begin(PrimitiveKind::Points);
        raster.vertex(5.0, 5.0);
        raster.end();

        assert_eq!(
            raster.primitives(PrimitiveKind::Lines),
            vec![vec![(0.0, 0.0), (1.0, 1.0)]]
        );
        assert_eq!(raster.primitives(PrimitiveKind::Points), vec![vec![(5.0, 5.0)]]);
        assert!(raster.primitives(PrimitiveKind::Polygon).is_empty());
    }
}
