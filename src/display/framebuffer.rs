// Offscreen square RGB565 surface the spinner redraws every tick and then
// composites onto the visible target.

use core::convert::Infallible;

use anyhow::{ensure, Result};
use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{OriginDimensions, Point, Size};
use embedded_graphics_core::pixelcolor::raw::RawU16;
use embedded_graphics_core::pixelcolor::{IntoStorage, Rgb565};
use embedded_graphics_core::primitives::Rectangle;
use embedded_graphics_core::Pixel;
use paperclips_core::color_utils::blend_rgb565;

use super::canvas::Transform;

/// Largest square surface we are willing to allocate.
const MAX_SIDE: u32 = 2048;

#[derive(Clone)]
pub struct Framebuffer {
    side: u32,
    buf: Vec<u16>,
    pub(super) transform: Option<Transform>,
}

impl Framebuffer {
    pub fn new(side: u32) -> Result<Self> {
        ensure!(side > 0, "framebuffer side must be non-zero");
        ensure!(
            side <= MAX_SIDE,
            "framebuffer side {side} exceeds the {MAX_SIDE} px limit"
        );
        Ok(Self {
            side,
            buf: vec![0; (side * side) as usize],
            transform: None,
        })
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    pub fn fill(&mut self, color: u16) {
        for pixel in self.buf.iter_mut() {
            *pixel = color;
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<u16> {
        if x < self.side && y < self.side {
            Some(self.buf[(y * self.side + x) as usize])
        } else {
            None
        }
    }

    pub fn as_pixels(&self) -> &[u16] {
        &self.buf
    }

    pub(crate) fn set_pixel(&mut self, x: i32, y: i32, color: u16) {
        if x >= 0 && y >= 0 && (x as u32) < self.side && (y as u32) < self.side {
            self.buf[(y as u32 * self.side + x as u32) as usize] = color;
        }
    }

    pub(crate) fn blend_pixel(&mut self, x: i32, y: i32, color: u16, alpha: u8) {
        if x >= 0 && y >= 0 && (x as u32) < self.side && (y as u32) < self.side {
            let idx = (y as u32 * self.side + x as u32) as usize;
            self.buf[idx] = blend_rgb565(color, self.buf[idx], alpha);
        }
    }

    /// Composite the frame onto `target`, centered within `bounds`.
    pub fn composite<D>(&self, target: &mut D, bounds: Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let dx = bounds.top_left.x + (bounds.size.width as i32 - self.side as i32) / 2;
        let dy = bounds.top_left.y + (bounds.size.height as i32 - self.side as i32) / 2;
        let area = Rectangle::new(Point::new(dx, dy), Size::new_equal(self.side));
        target.fill_contiguous(
            &area,
            self.buf.iter().map(|&c| Rgb565::from(RawU16::new(c))),
        )
    }
}

impl PartialEq for Framebuffer {
    /// Two frames are equal when they show the same picture.
    fn eq(&self, other: &Self) -> bool {
        self.side == other.side && self.buf == other.buf
    }
}

impl core::fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Framebuffer")
            .field("side", &self.side)
            .finish_non_exhaustive()
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new_equal(self.side)
    }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Rgb565>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.into_storage());
        }
        Ok(())
    }
}
