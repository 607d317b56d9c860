/// RGBA, the way `piston_window` takes it.
pub type Color = [f32; 4];

/// Coordinates closer than this are treated as the same point.
pub const POINT_EPS: f64 = 1e-4;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn coincides(&self, other: &Point) -> bool {
        (self.x - other.x).abs() < POINT_EPS && (self.y - other.y).abs() < POINT_EPS
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Segment {
    pub src: Point,
    pub dst: Point,
}

impl Segment {
    pub fn min_x(&self) -> f64 {
        self.src.x.min(self.dst.x)
    }

    pub fn max_x(&self) -> f64 {
        self.src.x.max(self.dst.x)
    }
}
