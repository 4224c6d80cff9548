//! Color manipulation utilities
//!
//! RGB565 conversion and blending helpers used by the anti-aliased
//! rasterizer. Everything here is testable without a display.

/// Convert RGB888 to RGB565
pub const fn rgb888_to_rgb565(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | ((b as u16 & 0xF8) >> 3)
}

/// Convert RGB565 to RGB888
pub const fn rgb565_to_rgb888(color: u16) -> (u8, u8, u8) {
    let r = ((color >> 11) & 0x1F) as u8;
    let g = ((color >> 5) & 0x3F) as u8;
    let b = (color & 0x1F) as u8;

    // Expand to 8-bit by replicating upper bits
    let r8 = (r << 3) | (r >> 2);
    let g8 = (g << 2) | (g >> 4);
    let b8 = (b << 3) | (b >> 2);

    (r8, g8, b8)
}

/// Blend two RGB565 colors with alpha (0-255)
pub fn blend_rgb565(fg: u16, bg: u16, alpha: u8) -> u16 {
    if alpha == 255 {
        return fg;
    }
    if alpha == 0 {
        return bg;
    }

    let (fr, fg_, fb) = rgb565_to_rgb888(fg);
    let (br, bg_, bb) = rgb565_to_rgb888(bg);

    let alpha = alpha as u16;
    let inv_alpha = 255 - alpha;

    let r = ((fr as u16 * alpha + br as u16 * inv_alpha) / 255) as u8;
    let g = ((fg_ as u16 * alpha + bg_ as u16 * inv_alpha) / 255) as u8;
    let b = ((fb as u16 * alpha + bb as u16 * inv_alpha) / 255) as u8;

    rgb888_to_rgb565(r, g, b)
}

/// Common colors in RGB565 format
pub mod colors {
    pub const BLACK: u16 = 0x0000;
    pub const WHITE: u16 = 0xFFFF;
    pub const RED: u16 = 0xF800;
    pub const GREEN: u16 = 0x07E0;
    pub const BLUE: u16 = 0x001F;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_conversion_roundtrip() {
        // Conversion loses low bits, so only check it stays close
        let original = (128, 64, 192);
        let rgb565 = rgb888_to_rgb565(original.0, original.1, original.2);
        let (r, g, b) = rgb565_to_rgb888(rgb565);

        assert!((r as i16 - original.0 as i16).abs() <= 8);
        assert!((g as i16 - original.1 as i16).abs() <= 4);
        assert!((b as i16 - original.2 as i16).abs() <= 8);
    }

    #[test]
    fn test_known_colors() {
        assert_eq!(rgb888_to_rgb565(255, 0, 0), colors::RED);
        assert_eq!(rgb888_to_rgb565(0, 255, 0), colors::GREEN);
        assert_eq!(rgb888_to_rgb565(0, 0, 255), colors::BLUE);
        assert_eq!(rgb888_to_rgb565(0, 0, 0), colors::BLACK);
        assert_eq!(rgb888_to_rgb565(255, 255, 255), colors::WHITE);
    }

    #[test]
    fn test_blend_extremes() {
        // Full alpha returns the foreground, zero returns the background
        assert_eq!(blend_rgb565(colors::RED, colors::BLUE, 255), colors::RED);
        assert_eq!(blend_rgb565(colors::RED, colors::BLUE, 0), colors::BLUE);

        // 50% blend of red over blue should carry both components
        let blended = blend_rgb565(colors::RED, colors::BLUE, 128);
        let (r, g, b) = rgb565_to_rgb888(blended);
        assert!(r > 100 && b > 100 && g < 50);
    }

    #[test]
    fn test_blend_toward_white_brightens() {
        let dim = rgb888_to_rgb565(40, 40, 40);
        let blended = blend_rgb565(colors::WHITE, dim, 128);
        let (r, g, b) = rgb565_to_rgb888(blended);
        assert!(r > 100 && g > 100 && b > 100);
    }
}
