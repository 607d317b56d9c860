use common::{Color, Point, Segment};

pub const LINE_WIDTH: f64 = 1.5;
pub const MARKER_RADIUS: f64 = 4.0;
pub const MARKER_COLOR: Color = [1.0, 0.0, 0.0, 1.0];

/// Relative padding added around the data on each axis.
const MARGIN: f64 = 0.05;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

#[derive(Clone, Default, Debug)]
pub struct Plot {
    segments: Vec<Segment>,
    colors: Vec<Color>,
    points: Vec<Point>,
}

impl Plot {
    pub fn new(segments: Vec<Segment>, colors: Vec<Color>, points: Vec<Point>) -> Plot {
        assert_eq!(segments.len(), colors.len(), "one color per segment");
        Plot { segments, colors, points, }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn colored_segments<'a>(&'a self) -> impl Iterator<Item = (&'a Segment, &'a Color)> + 'a {
        self.segments.iter().zip(self.colors.iter())
    }

    /// Autoscaled view: everything drawn fits, plus a small margin.
    pub fn bounds(&self) -> Bounds {
        let coords = self.segments.iter()
            .flat_map(|s| vec![s.src, s.dst])
            .chain(self.points.iter().cloned());

        let mut extent: Option<Bounds> = None;
        for p in coords {
            extent = Some(match extent {
                None =>
                    Bounds { min: p, max: p, },
                Some(b) =>
                    Bounds {
                        min: Point { x: b.min.x.min(p.x), y: b.min.y.min(p.y), },
                        max: Point { x: b.max.x.max(p.x), y: b.max.y.max(p.y), },
                    },
            });
        }

        match extent {
            None =>
                Bounds { min: Point { x: 0.0, y: 0.0, }, max: Point { x: 1.0, y: 1.0, }, },
            Some(b) => {
                let (min_x, max_x) = expand(b.min.x, b.max.x);
                let (min_y, max_y) = expand(b.min.y, b.max.y);
                Bounds { min: Point { x: min_x, y: min_y, }, max: Point { x: max_x, y: max_y, }, }
            },
        }
    }
}

fn expand(min: f64, max: f64) -> (f64, f64) {
    let span = max - min;
    if span > 0.0 {
        (min - span * MARGIN, max + span * MARGIN)
    } else {
        (min - 0.5, max + 0.5)
    }
}

pub trait Renderer {
    type Error;

    fn render(&mut self, plot: &Plot) -> Result<(), Self::Error>;
}

pub fn show<R>(plot: &Plot, renderer: &mut R) -> Result<(), R::Error> where R: Renderer {
    info!("rendering {} segments and {} points", plot.segments().len(), plot.points().len());
    renderer.render(plot)
}

/// Error type of a renderer that cannot fail.
#[derive(Debug)]
pub enum Never {}

/// Logs the figure instead of drawing it.
pub struct LogRenderer;

impl Renderer for LogRenderer {
    type Error = Never;

    fn render(&mut self, plot: &Plot) -> Result<(), Never> {
        let bounds = plot.bounds();
        info!(
            "view [{}, {}] x [{}, {}]",
            bounds.min.x, bounds.max.x, bounds.min.y, bounds.max.y,
        );
        for (segment, color) in plot.colored_segments() {
            debug!("segment {:?} color {:?}", segment, color);
        }
        for point in plot.points() {
            debug!("point {:?}", point);
        }
        Ok(())
    }
}
