use crate::raster::{PrimitiveKind, Rasterizer};

/// Background grid of unit lines covering `-extent..=extent` on both axes.
#[derive(Clone, Copy, Debug)]
pub struct Grid {
    extent: i32,
}

impl Grid {
    pub fn new(extent: i32) -> Self {
        Self { extent }
    }

    pub fn extent(&self) -> i32 {
        self.extent
    }

    /// Emits every vertical and horizontal line as one line list.
    pub fn draw_lines(&self, raster: &mut impl Rasterizer) {
        let e = self.extent as f32;
        raster.begin(PrimitiveKind::Lines);
        for i in -self.extent..=self.extent {
            let i = i as f32;
            raster.vertex(i, -e);
            raster.vertex(i, e);
            raster.vertex(-e, i);
            raster.vertex(e, i);
        }
        raster.end();
    }

    /// Emits the integer tick labels along both axes, skipping the origin.
    pub fn draw_axis_labels(&self, raster: &mut impl Rasterizer) {
        let ticks = || (-self.extent..=self.extent).filter(|&i| i != 0);

        for i in ticks() {
            raster.text(-0.5, i as f32 - 0.25, &i.to_string());
        }
        for i in ticks() {
            raster.text(i as f32 - 0.25, -0.75, &i.to_string());
        }
    }
}
