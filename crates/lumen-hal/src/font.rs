//! Proportional 5x7 bitmap font.
//!
//! Glyphs are five column bytes; bit `n` is row `n` counted from the top of
//! the cell. Rows 0..=6 sit above the baseline and bit 7 is a one-pixel
//! descender on the baseline row itself.

/// Rows above the baseline.
pub const ASCENT: i32 = 7;
/// Gap inserted after every glyph.
pub const SPACING: i32 = 1;
const SPACE_ADVANCE: i32 = 3;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GlyphMetrics {
    /// First inked column.
    pub left: i32,
    pub width: i32,
    /// Horizontal distance to the next glyph.
    pub advance: i32,
}

pub fn glyph_metrics(glyph: &[u8; 5], c: char) -> GlyphMetrics {
    if c == ' ' {
        return GlyphMetrics {
            left: 0,
            width: 0,
            advance: SPACE_ADVANCE,
        };
    }

    let inked = || glyph.iter().enumerate().filter(|(_, bits)| **bits != 0).map(|(col, _)| col as i32);
    let (Some(left), Some(right)) = (inked().min(), inked().max()) else {
        return GlyphMetrics {
            left: 0,
            width: 1,
            advance: 1 + SPACING,
        };
    };

    let width = right - left + 1;
    GlyphMetrics {
        left,
        width,
        advance: width + SPACING,
    }
}

/// Rendered width of `text`: glyph advances minus the trailing gap.
pub fn text_width(text: &str) -> i32 {
    let total: i32 = text
        .chars()
        .map(|c| {
            let c = normalize_char(c);
            glyph_metrics(&glyph_5x7(c), c).advance
        })
        .sum();
    (total - SPACING).max(0)
}

/// Rasterizes `text` with its baseline at `baseline_y`, calling `plot` for
/// every lit pixel. Returns the pen position after the last glyph.
pub fn draw_text(x: i32, baseline_y: i32, text: &str, mut plot: impl FnMut(i32, i32)) -> i32 {
    let top = baseline_y - ASCENT;
    let mut pen = x;

    for c in text.chars() {
        let c = normalize_char(c);
        let glyph = glyph_5x7(c);
        let metrics = glyph_metrics(&glyph, c);

        for (col, bits) in glyph.iter().enumerate().skip(metrics.left as usize) {
            for row in 0..8 {
                if bits & (1 << row) != 0 {
                    plot(pen + col as i32 - metrics.left, top + row);
                }
            }
        }
        pen += metrics.advance;
    }

    pen
}

/// Folds accented Latin letters and typographic punctuation onto the
/// ASCII shapes the font carries.
pub fn normalize_char(c: char) -> char {
    match c {
        'á' | 'à' | 'ä' | 'â' | 'ã' | 'å' => 'a',
        'Á' | 'À' | 'Ä' | 'Â' | 'Ã' | 'Å' => 'A',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'É' | 'È' | 'Ë' | 'Ê' => 'E',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'Í' | 'Ì' | 'Ï' | 'Î' => 'I',
        'ó' | 'ò' | 'ö' | 'ô' | 'õ' => 'o',
        'Ó' | 'Ò' | 'Ö' | 'Ô' | 'Õ' => 'O',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        'Ú' | 'Ù' | 'Ü' | 'Û' => 'U',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ç' => 'c',
        'Ç' => 'C',
        '’' | '‘' | '´' | '`' => '\'',
        '“' | '”' | '„' => '"',
        '‐' | '‑' | '–' | '—' => '-',
        '…' => '.',
        '›' | '»' => '>',
        '‹' | '«' => '<',
        _ => c,
    }
}

/// Column bitmap for `c`; unknown characters render as a hollow box.
pub fn glyph_5x7(c: char) -> [u8; 5] {
    match c {
        'A' => [0x7E, 0x11, 0x11, 0x11, 0x7E],
        'B' => [0x7F, 0x49, 0x49, 0x49, 0x36],
        'C' => [0x3E, 0x41, 0x41, 0x41, 0x22],
        'D' => [0x7F, 0x41, 0x41, 0x22, 0x1C],
        'E' => [0x7F, 0x49, 0x49, 0x49, 0x41],
        'F' => [0x7F, 0x09, 0x09, 0x09, 0x01],
        'G' => [0x3E, 0x41, 0x49, 0x49, 0x7A],
        'H' => [0x7F, 0x08, 0x08, 0x08, 0x7F],
        'I' => [0x00, 0x41, 0x7F, 0x41, 0x00],
        'J' => [0x20, 0x40, 0x41, 0x3F, 0x01],
        'K' => [0x7F, 0x08, 0x14, 0x22, 0x41],
        'L' => [0x7F, 0x40, 0x40, 0x40, 0x40],
        'M' => [0x7F, 0x02, 0x0C, 0x02, 0x7F],
        'N' => [0x7F, 0x04, 0x08, 0x10, 0x7F],
        'O' => [0x3E, 0x41, 0x41, 0x41, 0x3E],
        'P' => [0x7F, 0x09, 0x09, 0x09, 0x06],
        'Q' => [0x3E, 0x41, 0x51, 0x21, 0x5E],
        'R' => [0x7F, 0x09, 0x19, 0x29, 0x46],
        'S' => [0x46, 0x49, 0x49, 0x49, 0x31],
        'T' => [0x01, 0x01, 0x7F, 0x01, 0x01],
        'U' => [0x3F, 0x40, 0x40, 0x40, 0x3F],
        'V' => [0x1F, 0x20, 0x40, 0x20, 0x1F],
        'W' => [0x7F, 0x20, 0x18, 0x20, 0x7F],
        'X' => [0x63, 0x14, 0x08, 0x14, 0x63],
        'Y' => [0x03, 0x04, 0x78, 0x04, 0x03],
        'Z' => [0x61, 0x51, 0x49, 0x45, 0x43],
        'a' => [0x20, 0x54, 0x54, 0x54, 0x78],
        'b' => [0x7F, 0x48, 0x44, 0x44, 0x38],
        'c' => [0x38, 0x44, 0x44, 0x44, 0x20],
        'd' => [0x38, 0x44, 0x44, 0x48, 0x7F],
        'e' => [0x38, 0x54, 0x54, 0x54, 0x18],
        'f' => [0x08, 0x7E, 0x09, 0x01, 0x02],
        'g' => [0x08, 0x14, 0x54, 0x54, 0x3C],
        'h' => [0x7F, 0x08, 0x04, 0x04, 0x78],
        'i' => [0x00, 0x44, 0x7D, 0x40, 0x00],
        'j' => [0x20, 0x40, 0x44, 0x3D, 0x00],
        'k' => [0x7F, 0x10, 0x28, 0x44, 0x00],
        'l' => [0x00, 0x41, 0x7F, 0x40, 0x00],
        'm' => [0x7C, 0x04, 0x18, 0x04, 0x78],
        'n' => [0x7C, 0x08, 0x04, 0x04, 0x78],
        'o' => [0x38, 0x44, 0x44, 0x44, 0x38],
        'p' => [0x7C, 0x14, 0x14, 0x14, 0x08],
        'q' => [0x08, 0x14, 0x14, 0x18, 0x7C],
        'r' => [0x7C, 0x08, 0x04, 0x04, 0x08],
        's' => [0x48, 0x54, 0x54, 0x54, 0x20],
        't' => [0x04, 0x3F, 0x44, 0x40, 0x20],
        'u' => [0x3C, 0x40, 0x40, 0x20, 0x7C],
        'v' => [0x1C, 0x20, 0x40, 0x20, 0x1C],
        'w' => [0x3C, 0x40, 0x30, 0x40, 0x3C],
        'x' => [0x44, 0x28, 0x10, 0x28, 0x44],
        'y' => [0x0C, 0x50, 0x50, 0x50, 0x3C],
        'z' => [0x44, 0x64, 0x54, 0x4C, 0x44],
        '0' => [0x3E, 0x51, 0x49, 0x45, 0x3E],
        '1' => [0x00, 0x42, 0x7F, 0x40, 0x00],
        '2' => [0x42, 0x61, 0x51, 0x49, 0x46],
        '3' => [0x21, 0x41, 0x45, 0x4B, 0x31],
        '4' => [0x18, 0x14, 0x12, 0x7F, 0x10],
        '5' => [0x27, 0x45, 0x45, 0x45, 0x39],
        '6' => [0x3C, 0x4A, 0x49, 0x49, 0x30],
        '7' => [0x01, 0x71, 0x09, 0x05, 0x03],
        '8' => [0x36, 0x49, 0x49, 0x49, 0x36],
        '9' => [0x06, 0x49, 0x49, 0x29, 0x1E],
        '.' => [0x00, 0x60, 0x60, 0x00, 0x00],
        ',' => [0x00, 0x80, 0x60, 0x00, 0x00],
        ';' => [0x00, 0x80, 0x66, 0x00, 0x00],
        ':' => [0x00, 0x36, 0x36, 0x00, 0x00],
        '!' => [0x00, 0x00, 0x5F, 0x00, 0x00],
        '?' => [0x02, 0x01, 0x51, 0x09, 0x06],
        '\'' => [0x00, 0x00, 0x03, 0x00, 0x00],
        '"' => [0x00, 0x03, 0x00, 0x03, 0x00],
        '/' => [0x20, 0x10, 0x08, 0x04, 0x02],
        '<' => [0x08, 0x14, 0x22, 0x41, 0x00],
        '>' => [0x00, 0x41, 0x22, 0x14, 0x08],
        '(' => [0x00, 0x1C, 0x22, 0x41, 0x00],
        ')' => [0x00, 0x41, 0x22, 0x1C, 0x00],
        '[' => [0x00, 0x7F, 0x41, 0x41, 0x00],
        ']' => [0x00, 0x41, 0x41, 0x7F, 0x00],
        '-' => [0x08, 0x08, 0x08, 0x08, 0x08],
        '+' => [0x08, 0x08, 0x3E, 0x08, 0x08],
        '=' => [0x14, 0x14, 0x14, 0x14, 0x14],
        '_' => [0x40, 0x40, 0x40, 0x40, 0x40],
        '%' => [0x23, 0x13, 0x08, 0x64, 0x62],
        '#' => [0x14, 0x7F, 0x14, 0x7F, 0x14],
        ' ' => [0x00, 0x00, 0x00, 0x00, 0x00],
        _ => [0x7F, 0x41, 0x41, 0x41, 0x7F],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_trim_blank_columns() {
        let i = glyph_metrics(&glyph_5x7('i'), 'i');
        assert_eq!(i, GlyphMetrics { left: 1, width: 3, advance: 4 });
        let m = glyph_metrics(&glyph_5x7('M'), 'M');
        assert_eq!(m, GlyphMetrics { left: 0, width: 5, advance: 6 });
        assert_eq!(glyph_metrics(&glyph_5x7(' '), ' ').advance, 3);
    }

    #[test]
    fn width_drops_trailing_gap() {
        assert_eq!(text_width(""), 0);
        assert_eq!(text_width("M"), 5);
        assert_eq!(text_width("Mi"), 9);
        assert_eq!(text_width("Mi"), draw_text(0, 7, "Mi", |_, _| {}) - SPACING);
    }

    #[test]
    fn glyph_rows_sit_above_baseline() {
        let mut rows = Vec::new();
        draw_text(10, 20, "L", |x, y| rows.push((x, y)));

        assert!(rows.contains(&(10, 13)));
        assert!(rows.contains(&(10, 19)));
        assert!(rows.contains(&(14, 19)));
        assert!(rows.iter().all(|&(_, y)| (13..20).contains(&y)));
    }

    #[test]
    fn descender_lands_on_baseline() {
        let mut rows = Vec::new();
        draw_text(0, 20, ",", |x, y| rows.push((x, y)));
        assert!(rows.contains(&(0, 20)));
    }

    #[test]
    fn accents_fold_to_ascii() {
        assert_eq!(normalize_char('é'), 'e');
        assert_eq!(normalize_char('—'), '-');
        assert_eq!(text_width("café"), text_width("cafe"));
    }
}
