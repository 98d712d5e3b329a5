use std::fmt;

/// Default pick radius for removing a point, in grid units.
pub const DEFAULT_REMOVE_RADIUS: f32 = 1.0;

/// A plotted point on the logical grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, x: f32, y: f32) -> f32 {
        let dx = self.x as f32 - x;
        let dy = self.y as f32 - y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Insertion-ordered set of plotted points.
///
/// Order matters: it drives loop and polygon connectivity as well as the
/// triangle and quad grouping in the scene.
#[derive(Debug, Default)]
pub struct PointStore {
    points: Vec<GridPoint>,
}

impl PointStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `point` unless an equal point is already stored.
    pub fn add(&mut self, point: GridPoint) -> bool {
        if self.points.contains(&point) {
            return false;
        }
        self.points.push(point);
        true
    }

    /// Removes the point closest to `(x, y)` if it lies strictly within `max_dist`.
    ///
    /// On equal distances the earliest point in the sequence wins.
    pub fn remove_nearest(&mut self, x: f32, y: f32, max_dist: f32) -> Option<GridPoint> {
        let mut best: Option<(usize, f32)> = None;
        for (index, point) in self.points.iter().enumerate() {
            let dist = point.distance_to(x, y);
            let limit = best.map_or(max_dist, |(_, d)| d);
            if dist < limit {
                best = Some((index, dist));
            }
        }

        best.map(|(index, _)| self.points.remove(index))
    }

    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
