//! In-memory 1bpp framebuffer sized at compile time.

/// 1bpp framebuffer with `LINE_BYTES * 8` columns and `HEIGHT` lines.
///
/// Bit mapping within one line byte: bit 7 is the first pixel in that byte.
/// A set bit is a dark ("on") pixel.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FrameBuffer<const LINE_BYTES: usize, const HEIGHT: usize> {
    rows: [[u8; LINE_BYTES]; HEIGHT],
}

impl<const LINE_BYTES: usize, const HEIGHT: usize> Default for FrameBuffer<LINE_BYTES, HEIGHT> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const LINE_BYTES: usize, const HEIGHT: usize> FrameBuffer<LINE_BYTES, HEIGHT> {
    pub const WIDTH: usize = LINE_BYTES * 8;

    /// Creates a blank framebuffer with every pixel off.
    pub const fn new() -> Self {
        Self {
            rows: [[0u8; LINE_BYTES]; HEIGHT],
        }
    }

    pub const fn width(&self) -> usize {
        Self::WIDTH
    }

    pub const fn height(&self) -> usize {
        HEIGHT
    }

    /// Sets every pixel off (`on = false`) or on (`on = true`).
    pub fn clear(&mut self, on: bool) {
        let fill = if on { 0xFF } else { 0x00 };
        for row in self.rows.iter_mut() {
            row.fill(fill);
        }
    }

    /// Sets a pixel state.
    ///
    /// Returns `true` when pixel is in bounds, `false` otherwise.
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) -> bool {
        if x >= Self::WIDTH || y >= HEIGHT {
            return false;
        }

        let byte = &mut self.rows[y][x / 8];
        let mask = 1u8 << (7 - (x % 8));
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }

        true
    }

    /// Reads a pixel state.
    pub fn pixel(&self, x: usize, y: usize) -> Option<bool> {
        if x >= Self::WIDTH || y >= HEIGHT {
            return None;
        }

        let mask = 1u8 << (7 - (x % 8));
        Some(self.rows[y][x / 8] & mask != 0)
    }

    /// Number of pixels currently on.
    pub fn lit_pixels(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .map(|byte| byte.count_ones() as usize)
            .sum()
    }

    /// Returns the payload of a 1-based panel line.
    pub fn line(&self, line: u16) -> Option<&[u8; LINE_BYTES]> {
        let index = (line as usize).checked_sub(1)?;
        self.rows.get(index)
    }

    /// Overwrites the payload of a 1-based panel line.
    pub fn set_line(&mut self, line: u16, data: &[u8; LINE_BYTES]) -> bool {
        let Some(index) = (line as usize).checked_sub(1) else {
            return false;
        };
        match self.rows.get_mut(index) {
            Some(row) => {
                row.copy_from_slice(data);
                true
            }
            None => false,
        }
    }

    /// Iterates `(line_number, payload)` pairs in panel order (1-based).
    pub fn lines(&self) -> impl Iterator<Item = (u16, &[u8; LINE_BYTES])> {
        self.rows
            .iter()
            .enumerate()
            .map(|(index, row)| ((index + 1) as u16, row))
    }
}

/// LS027B7DH01: 400x240.
pub type Ls027Frame = FrameBuffer<50, 240>;
/// LS013B7DH03: 128x128.
pub type Ls013Frame = FrameBuffer<16, 128>;
