use std::path::PathBuf;

use gfx_core;
use piston_window::{
    OpenGL,
    PistonWindow,
    WindowSettings,
    TextureSettings,
    Glyphs,
    Event,
    Input,
    Button,
    ButtonArgs,
    ButtonState,
    Key,
};

use plot::{self, Plot, Renderer};
use view::{Viewport, CONSOLE_HEIGHT};

const SCREEN_WIDTH: u32 = 640;
const SCREEN_HEIGHT: u32 = 480;

const BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const FOREGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

#[derive(Debug)]
pub enum PistonError {
    BuildWindow(String),
    DrawText(gfx_core::factory::CombinedError),
}

/// Shows the plot in a window and blocks until it is closed.
pub struct WindowRenderer {
    assets_dir: PathBuf,
}

impl WindowRenderer {
    pub fn new<P>(assets_dir: P) -> WindowRenderer where P: Into<PathBuf> {
        WindowRenderer { assets_dir: assets_dir.into(), }
    }
}

impl Renderer for WindowRenderer {
    type Error = PistonError;

    fn render(&mut self, plot: &Plot) -> Result<(), PistonError> {
        let opengl = OpenGL::V3_2;
        let mut window: PistonWindow = WindowSettings::new("segplot", [SCREEN_WIDTH, SCREEN_HEIGHT])
            .exit_on_esc(true)
            .opengl(opengl)
            .build()
            .map_err(PistonError::BuildWindow)?;

        let mut font_path = self.assets_dir.clone();
        font_path.push("FiraSans-Regular.ttf");
        let mut glyphs = match Glyphs::new(&font_path, window.factory.clone(), TextureSettings::new()) {
            Ok(glyphs) =>
                Some(glyphs),
            Err(e) => {
                warn!("no status line, failed to load font {:?}: {:?}", font_path, e);
                None
            },
        };

        let status = format!("{} segments, {} points", plot.segments().len(), plot.points().len());
        let mut env = Env::new(plot);
        while let Some(event) = window.next() {
            let maybe_result = window.draw_2d(&event, |context, g2d| {
                use piston_window::{clear, text, ellipse, line, Transformed};
                clear(BACKGROUND, g2d);

                // axes frame
                let [fx, fy, fw, fh] = env.viewport.frame();
                for edge in [
                    [fx, fy, fx + fw, fy],
                    [fx + fw, fy, fx + fw, fy + fh],
                    [fx + fw, fy + fh, fx, fy + fh],
                    [fx, fy + fh, fx, fy],
                ].iter() {
                    line(FOREGROUND, 0.5, *edge, context.transform, g2d);
                }

                // segments
                for (segment, &color) in plot.colored_segments() {
                    let [sx, sy] = env.viewport.to_screen(segment.src);
                    let [dx, dy] = env.viewport.to_screen(segment.dst);
                    line(color, plot::LINE_WIDTH / 2., [sx, sy, dx, dy], context.transform, g2d);
                }

                // points
                let r = plot::MARKER_RADIUS;
                for &point in plot.points() {
                    let [px, py] = env.viewport.to_screen(point);
                    ellipse(plot::MARKER_COLOR, [px - r, py - r, 2. * r, 2. * r], context.transform, g2d);
                }

                // status
                if let Some(ref mut glyphs) = glyphs {
                    text::Text::new_color(FOREGROUND, 16).draw(
                        &status,
                        glyphs,
                        &context.draw_state,
                        context.transform.trans(5.0, CONSOLE_HEIGHT - 12.0),
                        g2d
                    ).map_err(PistonError::DrawText)?;
                }

                Ok(())
            });
            if let Some(result) = maybe_result {
                let () = result?;
            }

            match event {
                Event::Input(Input::Button(ButtonArgs { button: Button::Keyboard(Key::Q), state: ButtonState::Release, .. })) =>
                    break,
                Event::Input(Input::Resize(width, height)) =>
                    env.reset(width, height),
                _ =>
                    (),
            }
        }

        info!("window closed");
        Ok(())
    }
}

struct Env {
    bounds: plot::Bounds,
    viewport: Viewport,
}

impl Env {
    fn new(plot: &Plot) -> Env {
        let bounds = plot.bounds();
        Env {
            bounds,
            viewport: Viewport::new(bounds, SCREEN_WIDTH as f64, SCREEN_HEIGHT as f64),
        }
    }

    fn reset(&mut self, width: u32, height: u32) {
        debug!("window resized to {}x{}", width, height);
        self.viewport = Viewport::new(self.bounds, width as f64, height as f64);
    }
}
