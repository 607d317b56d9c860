extern crate rand;
extern crate gfx_core;
extern crate env_logger;
extern crate piston_window;
#[macro_use] extern crate log;
#[macro_use] extern crate clap;
#[cfg(test)] extern crate tempfile;

use std::process;
use std::path::PathBuf;

use clap::Arg;

mod common;
mod load;
mod plot;
mod view;
mod window;
mod intersect;

use load::RandomColors;
use plot::{LogRenderer, Plot};
use window::{PistonError, WindowRenderer};

fn main() {
    env_logger::init();
    match run() {
        Ok(()) =>
            info!("graceful shutdown"),
        Err(e) => {
            error!("fatal error: {:?}", e);
            process::exit(1);
        },
    }
}

#[derive(Debug)]
enum Error {
    MissingParameter(&'static str),
    LoadSegments(load::FileError),
    LoadPoints(load::FileError),
    WritePoints(intersect::WriteError),
    Piston(PistonError),
}

fn run() -> Result<(), Error> {
    let matches = app_from_crate!()
        .arg(Arg::with_name("data-dir")
             .short("d")
             .long("data-dir")
             .value_name("DIR")
             .help("Directory with segments and points files")
             .default_value(".")
             .takes_value(true))
        .arg(Arg::with_name("segments")
             .short("s")
             .long("segments")
             .value_name("FILE")
             .help("Segments file: a header line, then \"x1 y1 x2 y2\" per line")
             .default_value("input.txt")
             .takes_value(true))
        .arg(Arg::with_name("points")
             .short("p")
             .long("points")
             .value_name("FILE")
             .help("Points file: \"x y\" per line")
             .default_value("output.txt")
             .takes_value(true))
        .arg(Arg::with_name("assets-dir")
             .short("a")
             .long("assets-dir")
             .value_name("DIR")
             .help("Graphics resources directory")
             .default_value("./assets")
             .takes_value(true))
        .arg(Arg::with_name("intersect")
             .short("i")
             .long("intersect")
             .help("Compute segment intersections into the points file before plotting"))
        .arg(Arg::with_name("headless")
             .long("headless")
             .help("Log the plot instead of opening a window"))
        .get_matches();

    let data_dir = matches.value_of("data-dir")
        .ok_or(Error::MissingParameter("data-dir"))?;
    let segments_file = matches.value_of("segments")
        .ok_or(Error::MissingParameter("segments"))?;
    let points_file = matches.value_of("points")
        .ok_or(Error::MissingParameter("points"))?;
    let assets_dir = matches.value_of("assets-dir")
        .ok_or(Error::MissingParameter("assets-dir"))?;

    let segments_path = PathBuf::from(data_dir).join(segments_file);
    let points_path = PathBuf::from(data_dir).join(points_file);

    let (segments, colors) = load::read_segments(&segments_path, &mut RandomColors::new())
        .map_err(Error::LoadSegments)?;
    info!("{} segments loaded from {:?}", segments.len(), segments_path);

    if matches.is_present("intersect") {
        let found = intersect::find_intersections(&segments);
        intersect::write_points(&points_path, &found)
            .map_err(Error::WritePoints)?;
    }

    let points = load::read_points(&points_path)
        .map_err(Error::LoadPoints)?;
    info!("{} points loaded from {:?}", points.len(), points_path);

    let plot = Plot::new(segments, colors, points);
    if matches.is_present("headless") {
        plot::show(&plot, &mut LogRenderer)
            .map_err(|never| -> Error { match never {} })?;
    } else {
        plot::show(&plot, &mut WindowRenderer::new(assets_dir))
            .map_err(Error::Piston)?;
    }

    Ok(())
}
