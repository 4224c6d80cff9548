// The rotating paperclips loading widget.
//
// Geometry and palette are fixed at construction; the only per-frame state
// is the published angle. The host drives the widget with update() on each
// scheduler tick and draw() from its render callback, and must call
// detach() when the widget leaves the screen.

use std::time::Instant;

use anyhow::Result;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use paperclips_core::config::SpinnerConfig;
use paperclips_core::geometry::{paperclip_shapes, PointF, ShapeGeometry, ShapeSpec};
use paperclips_core::timeline::AngleTimeline;

use crate::animation::AngleAnimator;
use crate::display::{Canvas, Framebuffer};
use crate::ui::theme::Palette;

pub struct PaperclipSpinner {
    shapes: [ShapeSpec; 7],
    palette: Palette,
    animator: AngleAnimator,
    frame: Option<Framebuffer>,
    side: u32,
    angle: f32,
}

impl PaperclipSpinner {
    pub fn new(config: &SpinnerConfig, palette: Palette) -> Result<Self> {
        config.validate()?;
        let metrics = config.metrics();
        let timeline = AngleTimeline::paperclip(config.phase_duration(), config.easing);
        let angle = timeline.start_angle();
        Ok(Self {
            shapes: paperclip_shapes(&metrics),
            palette,
            animator: AngleAnimator::new(timeline),
            frame: Some(Framebuffer::new(metrics.side)?),
            side: metrics.side,
            angle,
        })
    }

    /// Begin (or resume) the looping animation. Reallocates the offscreen
    /// surface if a previous detach released it.
    pub fn attach(&mut self, now: Instant) -> Result<()> {
        if self.frame.is_none() {
            self.frame = Some(Framebuffer::new(self.side)?);
        }
        self.animator.start(now);
        log::debug!("spinner attached, {} px canvas", self.side);
        Ok(())
    }

    /// Stop the animation and release the offscreen surface. Idempotent;
    /// no further angle updates or redraws are observable afterwards.
    pub fn detach(&mut self) {
        if self.animator.is_running() {
            log::debug!("spinner detached at {:.1} deg", self.angle);
        }
        self.animator.cancel();
        self.frame = None;
    }

    /// Advance the angle for this tick. Returns true when a redraw is
    /// needed; always false once detached.
    pub fn update(&mut self, now: Instant) -> bool {
        if self.frame.is_none() {
            return false;
        }
        let Some(angle) = self.animator.sample(now) else {
            return false;
        };
        self.angle = angle;
        true
    }

    /// Redraw all shapes at the current angle and composite the frame
    /// centered within `bounds`. A no-op after detach.
    pub fn draw<D>(&mut self, target: &mut D, bounds: Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let Some(frame) = self.frame.as_mut() else {
            return Ok(());
        };
        let pivot = PointF::new(self.side as f32 / 2.0, self.side as f32 / 2.0);
        render_shapes(frame, &self.shapes, &self.palette, self.angle, pivot);
        frame.composite(target, bounds)
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    pub fn is_attached(&self) -> bool {
        self.frame.is_some() && self.animator.is_running()
    }

    pub fn shapes(&self) -> &[ShapeSpec; 7] {
        &self.shapes
    }
}

/// Clear the canvas and draw every shape, each independently rotated from
/// its unrotated base geometry about `pivot` by the angle times the shape's
/// spin factor.
pub fn render_shapes<C: Canvas>(
    canvas: &mut C,
    shapes: &[ShapeSpec],
    palette: &Palette,
    angle_deg: f32,
    pivot: PointF,
) {
    canvas.clear(palette.background);
    for spec in shapes {
        let color = palette.color_for(spec.slot);
        let shape_angle = angle_deg * spec.spin.factor();
        canvas.with_rotation(shape_angle, pivot, |c| match spec.geometry {
            ShapeGeometry::RoundRect {
                rect,
                corner_radius,
            } => c.draw_round_rect(rect, corner_radius, spec.style, color),
            ShapeGeometry::Circle { center, radius } => {
                c.draw_circle(center, radius, spec.style, color)
            }
        });
    }
}
