//! Shape geometry for the paperclip spinner
//!
//! Pure coordinate math: rectangles, rotation matrices, signed distances and
//! the fixed seven-shape layout. No drawing happens here, so every function
//! can be tested without a surface.

use crate::config::CanvasMetrics;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in device pixels, edges inclusive of stroke center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> PointF {
        PointF::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }
}

/// 2x2 rotation matrix, row major.
///
/// `rotation_deg` follows canvas convention (y grows downward), so a
/// positive angle turns shapes clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat2 {
    pub m00: f32,
    pub m01: f32,
    pub m10: f32,
    pub m11: f32,
}

impl Mat2 {
    pub const IDENTITY: Mat2 = Mat2 {
        m00: 1.0,
        m01: 0.0,
        m10: 0.0,
        m11: 1.0,
    };

    pub fn rotation_deg(degrees: f32) -> Self {
        let r = degrees.to_radians();
        let s = libm::sinf(r);
        let c = libm::cosf(r);
        Mat2 {
            m00: c,
            m01: -s,
            m10: s,
            m11: c,
        }
    }

    pub fn apply(&self, p: PointF) -> PointF {
        PointF::new(
            self.m00 * p.x + self.m01 * p.y,
            self.m10 * p.x + self.m11 * p.y,
        )
    }

    pub fn approx_eq(&self, other: &Mat2, eps: f32) -> bool {
        (self.m00 - other.m00).abs() < eps
            && (self.m01 - other.m01).abs() < eps
            && (self.m10 - other.m10).abs() < eps
            && (self.m11 - other.m11).abs() < eps
    }

    /// The same rotation with its sign flipped.
    pub fn mirrored(&self) -> Mat2 {
        Mat2 {
            m00: self.m00,
            m01: -self.m01,
            m10: -self.m10,
            m11: self.m11,
        }
    }
}

/// Signed distance from `p` (relative to the rect center) to the boundary of
/// a rounded rectangle with the given half extents and corner radius.
/// Negative inside, positive outside.
pub fn sd_round_rect(p: PointF, half_w: f32, half_h: f32, radius: f32) -> f32 {
    let radius = radius.min(half_w).min(half_h);
    let qx = libm::fabsf(p.x) - (half_w - radius);
    let qy = libm::fabsf(p.y) - (half_h - radius);
    let ax = qx.max(0.0);
    let ay = qy.max(0.0);
    libm::sqrtf(ax * ax + ay * ay) + qx.max(qy).min(0.0) - radius
}

/// Signed distance from `p` (relative to the circle center) to a circle.
pub fn sd_circle(p: PointF, radius: f32) -> f32 {
    libm::sqrtf(p.x * p.x + p.y * p.y) - radius
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeGeometry {
    RoundRect { rect: RectF, corner_radius: f32 },
    Circle { center: PointF, radius: f32 },
}

impl ShapeGeometry {
    /// Unrotated bounding box of the shape outline.
    pub fn bounds(&self) -> RectF {
        match *self {
            ShapeGeometry::RoundRect { rect, .. } => rect,
            ShapeGeometry::Circle { center, radius } => RectF::new(
                center.x - radius,
                center.y - radius,
                center.x + radius,
                center.y + radius,
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeStyle {
    Stroke { width: f32 },
    Fill,
}

/// Which way a shape turns relative to the published angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinDirection {
    Clockwise,
    CounterClockwise,
    Static,
}

impl SpinDirection {
    pub fn factor(self) -> f32 {
        match self {
            SpinDirection::Clockwise => 1.0,
            SpinDirection::CounterClockwise => -1.0,
            SpinDirection::Static => 0.0,
        }
    }
}

/// Palette slot a shape is painted with; resolved by the widget's theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSlot {
    TopSimpleBar,
    BottomSimpleBar,
    TopComplexBar,
    BottomComplexBar,
    MiddleCircle,
}

/// Immutable description of one drawn primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeSpec {
    pub geometry: ShapeGeometry,
    pub style: ShapeStyle,
    pub spin: SpinDirection,
    pub slot: ColorSlot,
}

/// Compute the seven paperclip shapes for a square canvas.
///
/// Two full-width bars, two bars truncated at the middle circle, two
/// square end caps at the bar extremities and the filled middle circle.
/// Bars 1-2 follow the angle, 3-6 mirror it, the circle stays put.
pub fn paperclip_shapes(m: &CanvasMetrics) -> [ShapeSpec; 7] {
    let s = m.side as f32;
    let corner = m.corner_radius / 2.0;
    let stroke = ShapeStyle::Stroke {
        width: m.stroke_width,
    };

    let outer = RectF::new(
        (s - m.max_width) / 2.0,
        (s - m.max_height) / 2.0,
        (s + m.max_width) / 2.0,
        (s + m.max_height) / 2.0,
    );
    let truncated = RectF::new(
        outer.left,
        outer.top,
        (s + m.middle_circle_radius) / 2.0,
        outer.bottom,
    );
    let left_cap = RectF::new(outer.left, outer.top, outer.left + m.max_height, outer.bottom);
    let right_cap = RectF::new(outer.right - m.max_height, outer.top, outer.right, outer.bottom);

    [
        ShapeSpec {
            geometry: ShapeGeometry::RoundRect {
                rect: outer,
                corner_radius: corner,
            },
            style: stroke,
            spin: SpinDirection::Clockwise,
            slot: ColorSlot::TopSimpleBar,
        },
        ShapeSpec {
            geometry: ShapeGeometry::RoundRect {
                rect: truncated,
                corner_radius: corner,
            },
            style: stroke,
            spin: SpinDirection::Clockwise,
            slot: ColorSlot::BottomSimpleBar,
        },
        ShapeSpec {
            geometry: ShapeGeometry::RoundRect {
                rect: outer,
                corner_radius: corner,
            },
            style: stroke,
            spin: SpinDirection::CounterClockwise,
            slot: ColorSlot::TopComplexBar,
        },
        ShapeSpec {
            geometry: ShapeGeometry::RoundRect {
                rect: truncated,
                corner_radius: corner,
            },
            style: stroke,
            spin: SpinDirection::CounterClockwise,
            slot: ColorSlot::BottomComplexBar,
        },
        ShapeSpec {
            geometry: ShapeGeometry::RoundRect {
                rect: left_cap,
                corner_radius: corner,
            },
            style: stroke,
            spin: SpinDirection::CounterClockwise,
            slot: ColorSlot::BottomComplexBar,
        },
        ShapeSpec {
            geometry: ShapeGeometry::RoundRect {
                rect: right_cap,
                corner_radius: corner,
            },
            style: stroke,
            spin: SpinDirection::CounterClockwise,
            slot: ColorSlot::TopComplexBar,
        },
        ShapeSpec {
            geometry: ShapeGeometry::Circle {
                center: PointF::new(s / 2.0, s / 2.0),
                radius: m.middle_circle_radius,
            },
            style: ShapeStyle::Fill,
            spin: SpinDirection::Static,
            slot: ColorSlot::MiddleCircle,
        },
    ]
}
