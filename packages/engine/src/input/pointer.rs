/// Where the grid is drawn on the host surface.
///
/// `to_grid` scales `pointer - origin` by `grid_dim / display_dim` per
/// axis and rounds ties to even. By default pointer `y` grows upward like
/// grid `y`; set `flip_y` for surfaces whose origin is the top-left corner
/// (canvas, DOM events), where `origin_y` is then the display's top edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerMapping {
    pub origin_x: f64,
    pub origin_y: f64,
    pub display_width: f64,
    pub display_height: f64,
    pub flip_y: bool,
}

impl PointerMapping {
    pub fn new(origin_x: f64, origin_y: f64, display_width: f64, display_height: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            display_width,
            display_height,
            flip_y: false,
        }
    }

    /// Square display of side `display_size` centered on a `screen_w x screen_h` surface.
    pub fn centered(screen_width: f64, screen_height: f64, display_size: f64) -> Self {
        Self::new(
            (screen_width - display_size) / 2.0,
            (screen_height - display_size) / 2.0,
            display_size,
            display_size,
        )
    }

    pub fn with_flip_y(mut self, flip_y: bool) -> Self {
        self.flip_y = flip_y;
        self
    }

    pub fn to_grid(&self, px: f64, py: f64, width: u32, height: u32) -> (i32, i32) {
        let dx = px - self.origin_x;
        let dy = if self.flip_y {
            self.display_height - (py - self.origin_y)
        } else {
            py - self.origin_y
        };
        // `as` saturates and maps NaN to 0.
        let gx = (dx * width as f64 / self.display_width).round_ties_even() as i32;
        let gy = (dy * height as f64 / self.display_height).round_ties_even() as i32;
        (gx, gy)
    }

    /// Only strictly interior cells start a paint; row 0 and column 0 are
    /// never painted from the pointer.
    pub fn accepts(x: i32, y: i32, width: u32, height: u32) -> bool {
        x > 0 && (x as i64) < width as i64 && y > 0 && (y as i64) < height as i64
    }
}
