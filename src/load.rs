use std::{io, num};
use std::fs::File;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use rand::{self, Rng, ThreadRng};

use common::{Color, Point, Segment};

#[derive(Debug)]
pub enum Error {
    Open(io::Error),
    ReadLine { line: usize, error: io::Error, },
    MissingField { line: usize, field: usize, },
    ParseFloat { line: usize, field: usize, value: String, error: num::ParseFloatError, },
}

#[derive(Debug)]
pub struct FileError {
    pub file: PathBuf,
    pub error: Error,
}

pub trait ColorSource {
    fn next_color(&mut self) -> Color;
}

/// Three uniform channels in `[0, 1)`, fully opaque.
pub struct RandomColors<R> {
    rng: R,
}

impl RandomColors<ThreadRng> {
    pub fn new() -> RandomColors<ThreadRng> {
        RandomColors::with_rng(rand::thread_rng())
    }
}

impl<R> RandomColors<R> where R: Rng {
    pub fn with_rng(rng: R) -> RandomColors<R> {
        RandomColors { rng, }
    }
}

impl<R> ColorSource for RandomColors<R> where R: Rng {
    fn next_color(&mut self) -> Color {
        [self.rng.gen(), self.rng.gen(), self.rng.gen(), 1.0]
    }
}

/// Reads `x1 y1 x2 y2` lines after a single header line, which is skipped
/// without being checked against the number of segments that follow.
pub fn load_segments<B, C>(reader: B, colors: &mut C) -> Result<(Vec<Segment>, Vec<Color>), Error>
    where B: BufRead,
          C: ColorSource,
{
    let mut segments = Vec::new();
    let mut segment_colors = Vec::new();
    for (index, maybe_line) in reader.lines().enumerate() {
        let line = index + 1;
        let text = maybe_line.map_err(|error| Error::ReadLine { line, error, })?;
        if line == 1 {
            continue;
        }
        let fields = parse_fields(&text, line, 4)?;
        segments.push(Segment {
            src: Point { x: fields[0], y: fields[1], },
            dst: Point { x: fields[2], y: fields[3], },
        });
        segment_colors.push(colors.next_color());
    }
    debug!("loaded {} segments", segments.len());
    Ok((segments, segment_colors))
}

/// Reads `x y` lines, no header.
pub fn load_points<B>(reader: B) -> Result<Vec<Point>, Error> where B: BufRead {
    let mut points = Vec::new();
    for (index, maybe_line) in reader.lines().enumerate() {
        let line = index + 1;
        let text = maybe_line.map_err(|error| Error::ReadLine { line, error, })?;
        let fields = parse_fields(&text, line, 2)?;
        points.push(Point { x: fields[0], y: fields[1], });
    }
    debug!("loaded {} points", points.len());
    Ok(points)
}

pub fn read_segments<P, C>(path: P, colors: &mut C) -> Result<(Vec<Segment>, Vec<Color>), FileError>
    where P: AsRef<Path>,
          C: ColorSource,
{
    let path = path.as_ref();
    open(path)
        .and_then(|reader| load_segments(reader, colors))
        .map_err(|error| FileError { file: path.to_path_buf(), error, })
}

pub fn read_points<P>(path: P) -> Result<Vec<Point>, FileError> where P: AsRef<Path> {
    let path = path.as_ref();
    open(path)
        .and_then(load_points)
        .map_err(|error| FileError { file: path.to_path_buf(), error, })
}

fn open(path: &Path) -> Result<io::BufReader<File>, Error> {
    let file = File::open(path).map_err(Error::Open)?;
    Ok(io::BufReader::new(file))
}

fn parse_fields(text: &str, line: usize, count: usize) -> Result<Vec<f64>, Error> {
    let mut words = text.split_whitespace();
    let mut fields = Vec::with_capacity(count);
    for field in 0 .. count {
        let value = words.next()
            .ok_or(Error::MissingField { line, field, })?;
        let number = value.parse()
            .map_err(|error| Error::ParseFloat { line, field, value: value.to_string(), error, })?;
        fields.push(number);
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};
    use rand::{SeedableRng, XorShiftRng};
    use tempfile;
    use super::*;

    struct FixedColors(Vec<Color>);

    impl ColorSource for FixedColors {
        fn next_color(&mut self) -> Color {
            self.0.remove(0)
        }
    }

    fn gray_colors(count: usize) -> FixedColors {
        FixedColors((0 .. count).map(|i| [0.1 * i as f32, 0.5, 0.5, 1.0]).collect())
    }

    #[test]
    fn header_is_skipped() {
        let input = Cursor::new("irrelevant\n0 0 1 1\n");
        let (segments, colors) = load_segments(input, &mut gray_colors(1)).unwrap();
        assert_eq!(segments, vec![Segment {
            src: Point { x: 0.0, y: 0.0, },
            dst: Point { x: 1.0, y: 1.0, },
        }]);
        assert_eq!(colors, vec![[0.0, 0.5, 0.5, 1.0]]);
    }

    #[test]
    fn one_segment_per_data_line_in_field_order() {
        let input = Cursor::new("3\n1 2 3 4\n-1.5 2e1 0.25 -7 ignored\n5\t6  7 8\n");
        let (segments, colors) = load_segments(input, &mut gray_colors(3)).unwrap();
        assert_eq!(segments.len(), 3);
        assert_eq!(colors.len(), 3);
        assert_eq!(segments[1], Segment {
            src: Point { x: -1.5, y: 20.0, },
            dst: Point { x: 0.25, y: -7.0, },
        });
        assert_eq!(segments[2].dst, Point { x: 7.0, y: 8.0, });
    }

    #[test]
    fn header_count_is_not_checked() {
        let input = Cursor::new("10\n0 0 1 1\n");
        let (segments, _) = load_segments(input, &mut gray_colors(1)).unwrap();
        assert_eq!(segments.len(), 1);
    }

    #[test]
    fn empty_segments_file() {
        let (segments, colors) = load_segments(Cursor::new(""), &mut gray_colors(0)).unwrap();
        assert!(segments.is_empty());
        assert!(colors.is_empty());
    }

    #[test]
    fn three_fields_is_an_error() {
        let input = Cursor::new("2\n0 0 1 1\n0 0 1\n");
        match load_segments(input, &mut gray_colors(2)) {
            Err(Error::MissingField { line: 3, field: 3, }) =>
                (),
            other =>
                panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn blank_data_line_is_an_error() {
        let input = Cursor::new("1\n\n");
        match load_segments(input, &mut gray_colors(1)) {
            Err(Error::MissingField { line: 2, field: 0, }) =>
                (),
            other =>
                panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn non_numeric_field_is_an_error() {
        match load_points(Cursor::new("1 2\n3 four\n")) {
            Err(Error::ParseFloat { line: 2, field: 1, ref value, .. }) =>
                assert_eq!(value, "four"),
            other =>
                panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn points_have_no_header() {
        let points = load_points(Cursor::new("2 3\n")).unwrap();
        assert_eq!(points, vec![Point { x: 2.0, y: 3.0, }]);
    }

    #[test]
    fn empty_points_file() {
        assert!(load_points(Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn random_colors_are_opaque_and_in_range() {
        let mut colors = RandomColors::with_rng(XorShiftRng::from_seed([1, 2, 3, 4]));
        for _ in 0 .. 1000 {
            let color = colors.next_color();
            for &channel in &color[.. 3] {
                assert!(channel >= 0.0 && channel < 1.0);
            }
            assert_eq!(color[3], 1.0);
        }
    }

    #[test]
    fn seeded_colors_repeat() {
        let mut a = RandomColors::with_rng(XorShiftRng::from_seed([7, 7, 7, 7]));
        let mut b = RandomColors::with_rng(XorShiftRng::from_seed([7, 7, 7, 7]));
        assert_eq!(a.next_color(), b.next_color());
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        match read_segments(&path, &mut gray_colors(0)) {
            Err(FileError { ref file, error: Error::Open(..), }) =>
                assert_eq!(file, &path),
            other =>
                panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn reads_points_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.txt");
        let mut file = File::create(&path).unwrap();
        write!(file, "1 1\n2.5 -3\n").unwrap();
        drop(file);
        let points = read_points(&path).unwrap();
        assert_eq!(points, vec![Point { x: 1.0, y: 1.0, }, Point { x: 2.5, y: -3.0, }]);
    }
}
