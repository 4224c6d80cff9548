// Spinner palette definitions

use crate::display::colors;
use paperclips_core::geometry::ColorSlot;

/// The five shape colors plus the clear color, RGB565. Resolved once at
/// widget construction; the host theme decides which preset to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub top_simple_bar: u16,
    pub bottom_simple_bar: u16,
    pub top_complex_bar: u16,
    pub bottom_complex_bar: u16,
    pub middle_circle: u16,
    pub background: u16,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            top_simple_bar: colors::TOP_SIMPLE_BAR,
            bottom_simple_bar: colors::BOTTOM_SIMPLE_BAR,
            top_complex_bar: colors::TOP_COMPLEX_BAR,
            bottom_complex_bar: colors::BOTTOM_COMPLEX_BAR,
            middle_circle: colors::MIDDLE_CIRCLE,
            background: colors::WHITE,
        }
    }
}

impl Palette {
    /// Same clip colors over a dark surface.
    pub fn dark() -> Self {
        Self {
            background: colors::BLACK,
            ..Self::default()
        }
    }

    pub fn color_for(&self, slot: ColorSlot) -> u16 {
        match slot {
            ColorSlot::TopSimpleBar => self.top_simple_bar,
            ColorSlot::BottomSimpleBar => self.bottom_simple_bar,
            ColorSlot::TopComplexBar => self.top_complex_bar,
            ColorSlot::BottomComplexBar => self.bottom_complex_bar,
            ColorSlot::MiddleCircle => self.middle_circle,
        }
    }
}
