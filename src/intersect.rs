use std::io;
use std::fs::File;
use std::cmp::Ordering;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use common::{Point, Segment};

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

#[derive(Debug)]
pub struct WriteError {
    pub file: PathBuf,
    pub error: io::Error,
}

pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if val == 0. {
        Orientation::Collinear
    } else if val > 0. {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Whether `q` falls inside the bounding box of `p` and `r`.
fn within(p: Point, q: Point, r: Point) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) &&
        q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

fn on_segment(s: &Segment, q: Point) -> bool {
    orientation(s.src, s.dst, q) == Orientation::Collinear && within(s.src, q, s.dst)
}

pub fn segments_intersect(a: &Segment, b: &Segment) -> bool {
    let o1 = orientation(a.src, a.dst, b.src);
    let o2 = orientation(a.src, a.dst, b.dst);
    let o3 = orientation(b.src, b.dst, a.src);
    let o4 = orientation(b.src, b.dst, a.dst);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && within(a.src, b.src, a.dst)) ||
        (o2 == Orientation::Collinear && within(a.src, b.dst, a.dst)) ||
        (o3 == Orientation::Collinear && within(b.src, a.src, b.dst)) ||
        (o4 == Orientation::Collinear && within(b.src, a.dst, b.dst))
}

/// Crossing point of the two supporting lines, `None` when they are parallel.
pub fn intersection_point(a: &Segment, b: &Segment) -> Option<Point> {
    let a1 = a.dst.y - a.src.y;
    let b1 = a.src.x - a.dst.x;
    let c1 = a1 * a.src.x + b1 * a.src.y;

    let a2 = b.dst.y - b.src.y;
    let b2 = b.src.x - b.dst.x;
    let c2 = a2 * b.src.x + b2 * b.src.y;

    let determinant = a1 * b2 - a2 * b1;
    if determinant == 0. {
        None
    } else {
        Some(Point {
            x: (b2 * c1 - b1 * c2) / determinant,
            y: (a1 * c2 - a2 * c1) / determinant,
        })
    }
}

/// All distinct intersection points, ordered top to bottom then left to right.
pub fn find_intersections(segments: &[Segment]) -> Vec<Point> {
    let mut order: Vec<usize> = (0 .. segments.len()).collect();
    order.sort_by(|&i, &j| {
        segments[i].min_x().partial_cmp(&segments[j].min_x()).unwrap_or(Ordering::Equal)
    });

    let mut found = Vec::new();
    let mut active: Vec<usize> = Vec::new();
    for &i in order.iter() {
        let current = &segments[i];
        active.retain(|&j| segments[j].max_x() >= current.min_x());
        for &j in active.iter() {
            collect_pair(&segments[j], current, &mut found);
        }
        active.push(i);
    }

    found.sort_by(|a, b| {
        b.y.partial_cmp(&a.y).unwrap_or(Ordering::Equal)
            .then(a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
    });
    debug!("{} segments intersect in {} points", segments.len(), found.len());
    found
}

fn collect_pair(a: &Segment, b: &Segment, found: &mut Vec<Point>) {
    if !segments_intersect(a, b) {
        return;
    }
    match intersection_point(a, b) {
        Some(p) =>
            push_distinct(found, p),
        None => {
            // collinear overlap: report the shared endpoints
            for &(s, p) in [(a, b.src), (a, b.dst), (b, a.src), (b, a.dst)].iter() {
                if on_segment(s, p) {
                    push_distinct(found, p);
                }
            }
        },
    }
}

fn push_distinct(found: &mut Vec<Point>, p: Point) {
    if !found.iter().any(|q| q.coincides(&p)) {
        found.push(p);
    }
}

/// Writes points in the `x y` per line format the point loader reads.
pub fn write_points<P>(path: P, points: &[Point]) -> Result<(), WriteError> where P: AsRef<Path> {
    let path = path.as_ref();
    let wrap = |error: io::Error| WriteError { file: path.to_path_buf(), error, };
    let file = File::create(path).map_err(&wrap)?;
    let mut writer = BufWriter::new(file);
    for p in points {
        writeln!(writer, "{} {}", p.x, p.y).map_err(&wrap)?;
    }
    writer.flush().map_err(&wrap)?;
    info!("{} intersection points written to {:?}", points.len(), path);
    Ok(())
}
