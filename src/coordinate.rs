use crate::point::GridPoint;
use egui::{Pos2, Rect, Vec2};

/// Default half-extent of the orthographic view, in grid units.
pub const DEFAULT_HALF_EXTENT: f32 = 12.0;

/// Maps between window pixels and the logical grid.
///
/// The view spans `[-half_extent, half_extent]` on both axes with y pointing
/// up, regardless of the window's aspect ratio.
#[derive(Clone, Copy, Debug)]
pub struct CoordinateSystem {
    half_extent: f32,
}

impl CoordinateSystem {
    pub fn new(half_extent: f32) -> Self {
        Self { half_extent }
    }

    fn span(&self) -> f32 {
        self.half_extent * 2.0
    }

    /// Converts a pixel offset inside a viewport of `size` into the nearest grid point.
    ///
    /// Returns `None` for a degenerate viewport.
    pub fn to_grid_coordinates(&self, pixel: Vec2, size: Vec2) -> Option<GridPoint> {
        if size.x <= 0.0 || size.y <= 0.0 {
            return None;
        }
        let x = pixel.x / (size.x / self.span()) - self.half_extent;
        let y = self.half_extent - pixel.y / (size.y / self.span());
        Some(GridPoint::new(x.round() as i32, y.round() as i32))
    }

    /// Converts logical coordinates into a screen position inside `rect`.
    pub fn to_screen(&self, x: f32, y: f32, rect: Rect) -> Pos2 {
        let scale_x = rect.width() / self.span();
        let scale_y = rect.height() / self.span();
        Pos2::new(
            rect.min.x + (x + self.half_extent) * scale_x,
            rect.min.y + (self.half_extent - y) * scale_y,
        )
    }
}

impl Default for CoordinateSystem {
    fn default() -> Self {
        Self::new(DEFAULT_HALF_EXTENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    #[test]
    fn window_center_maps_to_origin() {
        let coords = CoordinateSystem::default();
        let point = coords.to_grid_coordinates(vec2(300.0, 300.0), vec2(600.0, 600.0));
        assert_eq!(point, Some(GridPoint::new(0, 0)));
    }

    #[test]
    fn corners_map_to_view_bounds() {
        let coords = CoordinateSystem::default();
        let size = vec2(600.0, 600.0);
        assert_eq!(
            coords.to_grid_coordinates(vec2(0.0, 0.0), size),
            Some(GridPoint::new(-12, 12))
        );
        assert_eq!(
            coords.to_grid_coordinates(vec2(600.0, 600.0), size),
            Some(GridPoint::new(12, -12))
        );
    }

    #[test]
    fn clicks_snap_to_nearest_cell() {
        let coords = CoordinateSystem::default();
        // One unit is 25 px at 600 px; 340 px is 1.6 units right of center.
        let point = coords.to_grid_coordinates(vec2(340.0, 260.0), vec2(600.0, 600.0));
        assert_eq!(point, Some(GridPoint::new(2, 2)));
    }

    #[test]
    fn non_square_window_scales_axes_independently() {
        let coords = CoordinateSystem::default();
        let point = coords.to_grid_coordinates(vec2(900.0, 150.0), vec2(1200.0, 600.0));
        assert_eq!(point, Some(GridPoint::new(6, 6)));
    }

    #[test]
    fn degenerate_viewport_maps_to_nothing() {
        let coords = CoordinateSystem::default();
        assert_eq!(coords.to_grid_coordinates(vec2(10.0, 10.0), vec2(0.0, 600.0)), None);
        assert_eq!(coords.to_grid_coordinates(vec2(10.0, 10.0), vec2(600.0, 0.0)), None);
    }

    #[test]
    fn to_screen_inverts_grid_mapping() {
        let coords = CoordinateSystem::default();
        let rect = Rect::from_min_size(Pos2::new(10.0, 20.0), vec2(600.0, 600.0));
        let screen = coords.to_screen(4.0, -3.0, rect);
        let pixel = screen - rect.min;
        assert_eq!(
            coords.to_grid_coordinates(pixel, rect.size()),
            Some(GridPoint::new(4, -3))
        );
        assert_eq!(coords.to_screen(0.0, 0.0, rect), rect.center());
    }
}
