//! Drives the paperclip spinner against an offscreen host surface and logs
//! per-frame stats. Run with `cargo run --example spinner_demo`.

use std::time::{Duration, Instant};

use anyhow::Result;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use rotating_paperclips::{Framebuffer, Palette, PaperclipSpinner, SpinnerConfig};

const SCREEN_SIDE: u32 = 240;
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

fn main() -> Result<()> {
    env_logger::init();

    let config = SpinnerConfig::compact();
    let palette = Palette::default();
    let mut spinner = PaperclipSpinner::new(&config, palette)?;
    let mut screen = Framebuffer::new(SCREEN_SIDE)?;
    let bounds = Rectangle::new(Point::zero(), Size::new_equal(SCREEN_SIDE));

    let t0 = Instant::now();
    spinner.attach(t0)?;
    log::info!(
        "spinner running: {} px canvas in a {} px screen",
        spinner.side(),
        SCREEN_SIDE
    );

    for frame in 0..60u32 {
        let now = t0 + FRAME_INTERVAL * frame;
        if spinner.update(now) {
            spinner.draw(&mut screen, bounds)?;
            bounds
                .into_styled(PrimitiveStyle::with_stroke(Rgb565::BLACK, 1))
                .draw(&mut screen)?;

            let background = palette.background;
            let painted = screen
                .as_pixels()
                .iter()
                .filter(|&&c| c != background)
                .count();
            log::info!(
                "frame {frame:02}: angle {:6.1} deg, {painted} painted pixels",
                spinner.angle()
            );
        }
    }

    spinner.detach();
    log::info!("spinner detached");
    Ok(())
}
