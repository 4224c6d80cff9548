// Minimal vector-drawing capability the spinner renders through: rounded
// rects, circles, and a scoped rotation about an arbitrary pivot.

use paperclips_core::geometry::{sd_circle, sd_round_rect, PointF, RectF, ShapeStyle};

use super::framebuffer::Framebuffer;

pub trait Canvas {
    fn clear(&mut self, color: u16);
    fn draw_round_rect(&mut self, rect: RectF, corner_radius: f32, style: ShapeStyle, color: u16);
    fn draw_circle(&mut self, center: PointF, radius: f32, style: ShapeStyle, color: u16);
    fn set_rotation(&mut self, degrees: f32, pivot: PointF);
    fn reset_rotation(&mut self);

    /// Draw with a rotation applied, then restore the identity transform so
    /// rotations never accumulate across shapes.
    fn with_rotation<F>(&mut self, degrees: f32, pivot: PointF, draw: F)
    where
        Self: Sized,
        F: FnOnce(&mut Self),
    {
        self.set_rotation(degrees, pivot);
        draw(self);
        self.reset_rotation();
    }
}

/// Active rotation about a pivot, precomputed for per-pixel sampling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    sin: f32,
    cos: f32,
    pivot: PointF,
}

impl Transform {
    pub(super) fn new(degrees: f32, pivot: PointF) -> Self {
        let r = degrees.to_radians();
        Self {
            sin: libm::sinf(r),
            cos: libm::cosf(r),
            pivot,
        }
    }

    /// Map an unrotated shape-space point onto the canvas.
    fn apply(&self, p: PointF) -> PointF {
        let dx = p.x - self.pivot.x;
        let dy = p.y - self.pivot.y;
        PointF::new(
            self.pivot.x + dx * self.cos - dy * self.sin,
            self.pivot.y + dx * self.sin + dy * self.cos,
        )
    }

    /// Map a canvas-space sample back into unrotated shape space.
    fn unapply(&self, p: PointF) -> PointF {
        let dx = p.x - self.pivot.x;
        let dy = p.y - self.pivot.y;
        PointF::new(
            self.pivot.x + dx * self.cos + dy * self.sin,
            self.pivot.y - dx * self.sin + dy * self.cos,
        )
    }
}

impl Framebuffer {
    /// Rasterize a signed-distance field over the canvas-space bounding box
    /// of `bounds` (shape space, already inflated by the stroke reach).
    /// Coverage within half a pixel of the edge is alpha-blended.
    fn paint_sdf<F>(&mut self, bounds: RectF, color: u16, dist: F)
    where
        F: Fn(PointF) -> f32,
    {
        let transform = self.transform;
        let corners = [
            PointF::new(bounds.left, bounds.top),
            PointF::new(bounds.right, bounds.top),
            PointF::new(bounds.right, bounds.bottom),
            PointF::new(bounds.left, bounds.bottom),
        ];

        let mut min_x = f32::MAX;
        let mut min_y = f32::MAX;
        let mut max_x = f32::MIN;
        let mut max_y = f32::MIN;
        for corner in corners {
            let p = match transform {
                Some(t) => t.apply(corner),
                None => corner,
            };
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        let side = self.side() as i32;
        let x0 = (libm::floorf(min_x) as i32).max(0);
        let y0 = (libm::floorf(min_y) as i32).max(0);
        let x1 = (libm::ceilf(max_x) as i32).min(side);
        let y1 = (libm::ceilf(max_y) as i32).min(side);

        for y in y0..y1 {
            for x in x0..x1 {
                let sample = PointF::new(x as f32 + 0.5, y as f32 + 0.5);
                let p = match transform {
                    Some(t) => t.unapply(sample),
                    None => sample,
                };
                let d = dist(p);
                if d <= -0.5 {
                    self.set_pixel(x, y, color);
                } else if d < 0.5 {
                    self.blend_pixel(x, y, color, ((0.5 - d) * 255.0) as u8);
                }
            }
        }
    }
}

impl Canvas for Framebuffer {
    fn clear(&mut self, color: u16) {
        self.fill(color);
    }

    fn draw_round_rect(&mut self, rect: RectF, corner_radius: f32, style: ShapeStyle, color: u16) {
        let center = rect.center();
        let half_w = rect.width() / 2.0;
        let half_h = rect.height() / 2.0;
        let reach = match style {
            ShapeStyle::Stroke { width } => width / 2.0 + 1.0,
            ShapeStyle::Fill => 1.0,
        };
        let bounds = RectF::new(
            rect.left - reach,
            rect.top - reach,
            rect.right + reach,
            rect.bottom + reach,
        );
        let outline =
            move |p: PointF| sd_round_rect(PointF::new(p.x - center.x, p.y - center.y), half_w, half_h, corner_radius);
        match style {
            ShapeStyle::Stroke { width } => {
                self.paint_sdf(bounds, color, move |p| libm::fabsf(outline(p)) - width / 2.0)
            }
            ShapeStyle::Fill => self.paint_sdf(bounds, color, outline),
        }
    }

    fn draw_circle(&mut self, center: PointF, radius: f32, style: ShapeStyle, color: u16) {
        let reach = match style {
            ShapeStyle::Stroke { width } => width / 2.0 + 1.0,
            ShapeStyle::Fill => 1.0,
        };
        let bounds = RectF::new(
            center.x - radius - reach,
            center.y - radius - reach,
            center.x + radius + reach,
            center.y + radius + reach,
        );
        let outline = move |p: PointF| sd_circle(PointF::new(p.x - center.x, p.y - center.y), radius);
        match style {
            ShapeStyle::Stroke { width } => {
                self.paint_sdf(bounds, color, move |p| libm::fabsf(outline(p)) - width / 2.0)
            }
            ShapeStyle::Fill => self.paint_sdf(bounds, color, outline),
        }
    }

    fn set_rotation(&mut self, degrees: f32, pivot: PointF) {
        self.transform = Some(Transform::new(degrees, pivot));
    }

    fn reset_rotation(&mut self) {
        self.transform = None;
    }
}
