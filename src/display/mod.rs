// Offscreen rendering: the raster surface and the vector canvas on top of it.

pub mod canvas;
pub mod colors;
pub mod framebuffer;

pub use canvas::Canvas;
pub use framebuffer::Framebuffer;
