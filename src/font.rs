//! Tiny 3x5 bitmap font for the HUD. The terminal cells are already
//! spent on pixels, so text is drawn pixel-by-pixel like every other
//! shape; lowercase input is folded to the uppercase glyph set.

use crate::surface::{Rgb, Surface};

const GLYPH_W: i32 = 3;
const GLYPH_H: i32 = 5;
/// Horizontal advance per character (glyph plus one pixel of spacing).
const ADVANCE: i32 = GLYPH_W + 1;

#[rustfmt::skip]
const GLYPHS: &[(char, [u8; 15])] = &[
    ('0', [1,1,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1]),
    ('1', [0,1,0, 1,1,0, 0,1,0, 0,1,0, 1,1,1]),
    ('2', [1,1,1, 0,0,1, 1,1,1, 1,0,0, 1,1,1]),
    ('3', [1,1,1, 0,0,1, 0,1,1, 0,0,1, 1,1,1]),
    ('4', [1,0,1, 1,0,1, 1,1,1, 0,0,1, 0,0,1]),
    ('5', [1,1,1, 1,0,0, 1,1,1, 0,0,1, 1,1,1]),
    ('6', [1,1,1, 1,0,0, 1,1,1, 1,0,1, 1,1,1]),
    ('7', [1,1,1, 0,0,1, 0,1,0, 0,1,0, 0,1,0]),
    ('8', [1,1,1, 1,0,1, 1,1,1, 1,0,1, 1,1,1]),
    ('9', [1,1,1, 1,0,1, 1,1,1, 0,0,1, 1,1,1]),
    ('A', [0,1,0, 1,0,1, 1,1,1, 1,0,1, 1,0,1]),
    ('B', [1,1,0, 1,0,1, 1,1,0, 1,0,1, 1,1,0]),
    ('C', [0,1,1, 1,0,0, 1,0,0, 1,0,0, 0,1,1]),
    ('D', [1,1,0, 1,0,1, 1,0,1, 1,0,1, 1,1,0]),
    ('E', [1,1,1, 1,0,0, 1,1,0, 1,0,0, 1,1,1]),
    ('F', [1,1,1, 1,0,0, 1,1,0, 1,0,0, 1,0,0]),
    ('G', [0,1,1, 1,0,0, 1,0,1, 1,0,1, 0,1,1]),
    ('H', [1,0,1, 1,0,1, 1,1,1, 1,0,1, 1,0,1]),
    ('I', [1,1,1, 0,1,0, 0,1,0, 0,1,0, 1,1,1]),
    ('J', [0,0,1, 0,0,1, 0,0,1, 1,0,1, 0,1,0]),
    ('K', [1,0,1, 1,1,0, 1,0,0, 1,1,0, 1,0,1]),
    ('L', [1,0,0, 1,0,0, 1,0,0, 1,0,0, 1,1,1]),
    ('M', [1,0,1, 1,1,1, 1,1,1, 1,0,1, 1,0,1]),
    ('N', [1,1,0, 1,0,1, 1,0,1, 1,0,1, 1,0,1]),
    ('O', [0,1,0, 1,0,1, 1,0,1, 1,0,1, 0,1,0]),
    ('P', [1,1,0, 1,0,1, 1,1,0, 1,0,0, 1,0,0]),
    ('Q', [0,1,0, 1,0,1, 1,0,1, 0,1,1, 0,0,1]),
    ('R', [1,1,0, 1,0,1, 1,1,0, 1,0,1, 1,0,1]),
    ('S', [0,1,1, 1,0,0, 0,1,0, 0,0,1, 1,1,0]),
    ('T', [1,1,1, 0,1,0, 0,1,0, 0,1,0, 0,1,0]),
    ('U', [1,0,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1]),
    ('V', [1,0,1, 1,0,1, 1,0,1, 1,0,1, 0,1,0]),
    ('W', [1,0,1, 1,0,1, 1,1,1, 1,1,1, 1,0,1]),
    ('X', [1,0,1, 1,0,1, 0,1,0, 1,0,1, 1,0,1]),
    ('Y', [1,0,1, 1,0,1, 0,1,0, 0,1,0, 0,1,0]),
    ('Z', [1,1,1, 0,0,1, 0,1,0, 1,0,0, 1,1,1]),
    ('!', [0,1,0, 0,1,0, 0,1,0, 0,0,0, 0,1,0]),
    (':', [0,0,0, 0,1,0, 0,0,0, 0,1,0, 0,0,0]),
    ('-', [0,0,0, 0,0,0, 1,1,1, 0,0,0, 0,0,0]),
    ('.', [0,0,0, 0,0,0, 0,0,0, 0,0,0, 0,1,0]),
];

fn glyph(c: char) -> Option<&'static [u8; 15]> {
    let upper = c.to_ascii_uppercase();
    GLYPHS.iter().find(|(g, _)| *g == upper).map(|(_, px)| px)
}

/// Pixel width of `text` at the given integer scale.
pub fn text_width(text: &str, scale: i32) -> i32 {
    let chars = text.chars().count() as i32;
    if chars == 0 {
        0
    } else {
        (chars * ADVANCE - 1) * scale
    }
}

pub fn text_height(scale: i32) -> i32 {
    GLYPH_H * scale
}

fn draw_glyph(surface: &mut Surface, x: i32, y: i32, scale: i32, px: &[u8; 15], color: Rgb) {
    for row in 0..GLYPH_H {
        for col in 0..GLYPH_W {
            if px[(row * GLYPH_W + col) as usize] == 1 {
                surface.fill_rect(x + col * scale, y + row * scale, scale, scale, color);
            }
        }
    }
}

/// Draws `text` with its top-left corner at (x, y). Characters without
/// a glyph still advance the cursor so spacing stays stable.
pub fn draw_text(
    surface: &mut Surface,
    x: i32,
    y: i32,
    scale: i32,
    text: &str,
    color: Rgb,
    shadow: Option<Rgb>,
) {
    if let Some(sc) = shadow {
        draw_text_plain(surface, x + scale, y + scale, scale, text, sc);
    }
    draw_text_plain(surface, x, y, scale, text, color);
}

fn draw_text_plain(surface: &mut Surface, x: i32, y: i32, scale: i32, text: &str, color: Rgb) {
    let mut pen = x;
    for c in text.chars() {
        if let Some(px) = glyph(c) {
            draw_glyph(surface, pen, y, scale, px, color);
        }
        pen += ADVANCE * scale;
    }
}

/// Like [`draw_text`] but horizontally centered on `cx`.
pub fn draw_text_centered(
    surface: &mut Surface,
    cx: i32,
    y: i32,
    scale: i32,
    text: &str,
    color: Rgb,
    shadow: Option<Rgb>,
) {
    let x = cx - text_width(text, scale) / 2;
    draw_text(surface, x, y, scale, text, color, shadow);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hud_strings_are_fully_covered() {
        for s in ["SCORE 0123456789", "GAME OVER!", "BEST", "SPACE TO RESTART"] {
            for c in s.chars() {
                if c != ' ' {
                    assert!(glyph(c).is_some(), "missing glyph for {c:?}");
                }
            }
        }
    }

    #[test]
    fn test_lowercase_maps_to_uppercase() {
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph('z'), glyph('Z'));
    }

    #[test]
    fn test_width_accounts_for_spacing_and_scale() {
        assert_eq!(text_width("", 1), 0);
        assert_eq!(text_width("A", 1), 3);
        assert_eq!(text_width("AB", 1), 7);
        assert_eq!(text_width("AB", 2), 14);
    }

    #[test]
    fn test_drawing_marks_pixels_inside_the_glyph_box() {
        let paper = Rgb(0, 0, 0);
        let ink = Rgb(255, 255, 255);
        let mut s = Surface::new(10, 10, paper);
        draw_text(&mut s, 1, 1, 1, "T", ink, None);
        // Top bar of the T.
        assert_eq!(s.get(1, 1), ink);
        assert_eq!(s.get(2, 1), ink);
        assert_eq!(s.get(3, 1), ink);
        // Stem.
        assert_eq!(s.get(2, 5), ink);
        // Outside the box untouched.
        assert_eq!(s.get(5, 1), paper);
    }

    #[test]
    fn test_shadow_is_offset_by_scale() {
        let paper = Rgb(0, 0, 0);
        let ink = Rgb(255, 255, 255);
        let dark = Rgb(30, 30, 30);
        let mut s = Surface::new(12, 12, paper);
        draw_text(&mut s, 2, 2, 1, "I", ink, Some(dark));
        // Shadow peeks out one pixel right+down of the glyph.
        assert_eq!(s.get(5, 3), dark);
        assert_eq!(s.get(2, 2), ink);
    }
}
