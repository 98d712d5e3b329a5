use crate::coordinate::CoordinateSystem;
use crate::mode::{DrawMode, ModeSelector};
use crate::point::{GridPoint, PointStore};
use egui::{PointerButton, Vec2};
use log::{debug, info};

/// Everything the plotter mutates in response to input.
#[derive(Debug)]
pub struct PlotterState {
    points: PointStore,
    modes: ModeSelector,
    coordinates: CoordinateSystem,
    remove_radius: f32,
}

impl PlotterState {
    pub fn new(coordinates: CoordinateSystem, remove_radius: f32) -> Self {
        Self {
            points: PointStore::new(),
            modes: ModeSelector::new(),
            coordinates,
            remove_radius,
        }
    }

    pub fn points(&self) -> &[GridPoint] {
        self.points.points()
    }

    pub fn mode(&self) -> DrawMode {
        self.modes.current()
    }

    pub fn coordinates(&self) -> &CoordinateSystem {
        &self.coordinates
    }

    /// Handles a button press at `pixel` inside a viewport of `viewport` size.
    ///
    /// Primary adds a point, secondary removes the nearest one. Returns `true`
    /// when the point set changed.
    pub fn on_pointer(&mut self, button: PointerButton, pixel: Vec2, viewport: Vec2) -> bool {
        let Some(point) = self.coordinates.to_grid_coordinates(pixel, viewport) else {
            debug!("Ignoring click in degenerate viewport {:?}", viewport);
            return false;
        };

        match button {
            PointerButton::Primary => {
                let added = self.points.add(point);
                if added {
                    debug!("Added point {} ({} total)", point, self.points.len());
                }
                added
            }
            PointerButton::Secondary => {
                let removed = self.points.remove_nearest(
                    point.x as f32,
                    point.y as f32,
                    self.remove_radius,
                );
                if let Some(removed) = removed {
                    debug!("Removed point {} ({} left)", removed, self.points.len());
                }
                removed.is_some()
            }
            _ => false,
        }
    }

    /// Handles a typed character. Returns `true` when it selected a mode.
    pub fn on_key(&mut self, key: char) -> bool {
        match self.modes.handle_key(key) {
            Some(mode) => {
                info!("Draw mode: {}", mode);
                true
            }
            None => false,
        }
    }
}
