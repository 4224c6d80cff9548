//! Rotating paperclips loading spinner.
//!
//! Seven rounded-rectangle "paperclip" shapes and a middle circle, rotated
//! by a looping two-phase angle animation and rendered anti-aliased onto an
//! offscreen RGB565 surface, which composites onto any
//! `embedded_graphics::draw_target::DrawTarget` host surface.
//!
//! The pure math (layout, easing, timeline) lives in `paperclips-core` so it
//! can be tested without a surface; this crate adds the animation driver,
//! the framebuffer canvas and the widget lifecycle.

pub mod animation;
pub mod display;
pub mod ui;

pub use paperclips_core::config::{CanvasMetrics, SpinnerConfig};
pub use paperclips_core::easing::Easing;
pub use paperclips_core::geometry::ShapeSpec;

pub use display::{Canvas, Framebuffer};
pub use ui::components::spinner::PaperclipSpinner;
pub use ui::theme::Palette;

#[cfg(test)]
mod tests;
