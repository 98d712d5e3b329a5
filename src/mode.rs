use std::fmt;

/// Primitive used to connect the plotted points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawMode {
    #[default]
    LineLoop,
    Triangles,
    Quads,
    Lines,
    Points,
    Polygons,
}

impl DrawMode {
    /// Mode bound to a key command, `'1'` through `'6'`.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '1' => Some(DrawMode::LineLoop),
            '2' => Some(DrawMode::Triangles),
            '3' => Some(DrawMode::Quads),
            '4' => Some(DrawMode::Lines),
            '5' => Some(DrawMode::Points),
            '6' => Some(DrawMode::Polygons),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DrawMode::LineLoop => "LINE_LOOP",
            DrawMode::Triangles => "TRIANGLES",
            DrawMode::Quads => "QUADS",
            DrawMode::Lines => "LINES",
            DrawMode::Points => "POINTS",
            DrawMode::Polygons => "POLYGONS",
        }
    }
}

impl fmt::Display for DrawMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Holds the active draw mode; only key commands change it.
#[derive(Debug, Default)]
pub struct ModeSelector {
    current: DrawMode,
}

impl ModeSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> DrawMode {
        self.current
    }

    /// Applies a key command. Returns the new mode if the key selects one.
    pub fn handle_key(&mut self, key: char) -> Option<DrawMode> {
        let mode = DrawMode::from_key(key)?;
        self.current = mode;
        Some(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_line_loop() {
        assert_eq!(ModeSelector::new().current(), DrawMode::LineLoop);
    }

    #[test]
    fn key_three_selects_quads() {
        let mut modes = ModeSelector::new();
        assert_eq!(modes.handle_key('3'), Some(DrawMode::Quads));
        assert_eq!(modes.current(), DrawMode::Quads);
    }

    #[test]
    fn unknown_key_keeps_mode() {
        let mut modes = ModeSelector::new();
        modes.handle_key('5');
        assert_eq!(modes.handle_key('x'), None);
        assert_eq!(modes.handle_key('7'), None);
        assert_eq!(modes.handle_key('0'), None);
        assert_eq!(modes.current(), DrawMode::Points);
    }

    #[test]
    fn digit_keys_cover_every_mode_in_order() {
        let mut modes = ModeSelector::new();
        let expected_modes = [
            DrawMode::LineLoop,
            DrawMode::Triangles,
            DrawMode::Quads,
            DrawMode::Lines,
            DrawMode::Points,
            DrawMode::Polygons,
        ];
        for (key, expected) in ('1'..='6').zip(expected_modes) {
            modes.handle_key(key);
            assert_eq!(modes.current(), expected);
        }
    }

    #[test]
    fn names_match_overlay_text() {
        assert_eq!(DrawMode::Polygons.to_string(), "POLYGONS");
        assert_eq!(DrawMode::LineLoop.name(), "LINE_LOOP");
    }
}
