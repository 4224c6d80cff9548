// Color definitions for 16-bit RGB565 format

use paperclips_core::color_utils::rgb888_to_rgb565;

// Basic colors
pub const BLACK: u16 = 0x0000;
pub const WHITE: u16 = 0xFFFF;

// Paperclip palette (resolved from the app theme in the original design)
pub const TOP_SIMPLE_BAR: u16 = rgb888_to_rgb565(0x3F, 0x8C, 0xFF); // #3F8CFF bright blue
pub const BOTTOM_SIMPLE_BAR: u16 = rgb888_to_rgb565(0x36, 0xD9, 0xC0); // #36D9C0 teal
pub const TOP_COMPLEX_BAR: u16 = rgb888_to_rgb565(0xFF, 0x8A, 0x3D); // #FF8A3D orange
pub const BOTTOM_COMPLEX_BAR: u16 = rgb888_to_rgb565(0xF0, 0x4E, 0x6E); // #F04E6E pink-red
pub const MIDDLE_CIRCLE: u16 = rgb888_to_rgb565(0x6C, 0x4D, 0xF5); // #6C4DF5 violet
