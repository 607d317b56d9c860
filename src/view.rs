use common::Point;
use plot::Bounds;

/// Status line strip at the top of the window.
pub const CONSOLE_HEIGHT: f64 = 32.;
/// Gap between the window edge and the axes frame.
pub const PADDING: f64 = 16.;

/// Maps data coordinates into the axes rectangle of a window, y pointing up.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    bounds: Bounds,
    frame: [f64; 4],
}

impl Viewport {
    pub fn new(bounds: Bounds, width: f64, height: f64) -> Viewport {
        let left = PADDING;
        let top = CONSOLE_HEIGHT + PADDING;
        let frame_width = (width - 2. * PADDING).max(1.);
        let frame_height = (height - top - PADDING).max(1.);
        Viewport { bounds, frame: [left, top, frame_width, frame_height], }
    }

    /// `[x, y, width, height]` of the axes in window pixels.
    pub fn frame(&self) -> [f64; 4] {
        self.frame
    }

    pub fn to_screen(&self, p: Point) -> [f64; 2] {
        let [left, top, width, height] = self.frame;
        let fx = (p.x - self.bounds.min.x) / self.bounds.width();
        let fy = (p.y - self.bounds.min.y) / self.bounds.height();
        [left + fx * width, top + (1. - fy) * height]
    }
}
