//! Pixel surface contract implemented by display adapters.
//!
//! All coordinates here are screen space. Implementations clip silently:
//! writes outside the panel (negative coordinates included) are dropped.

use crate::geometry::Size;

/// Drawing half of the surface contract. Object safe so the rasterizer can
/// hold it as `&mut dyn Canvas`.
pub trait Canvas {
    fn set_pixel(&mut self, x: i32, y: i32, on: bool);

    /// Draws UTF-8 text with `baseline_y` as the font baseline, not the top.
    fn draw_string(&mut self, x: i32, baseline_y: i32, text: &str);

    /// Rendered width of `text` in pixels.
    fn string_width(&self, text: &str) -> i32;

    fn size(&self) -> Size;
}

/// Full display contract: drawing plus lifecycle and a monotonic clock.
pub trait PixelSurface: Canvas {
    type Error;

    fn init(&mut self) -> Result<(), Self::Error>;

    /// Blanks the back buffer.
    fn clear(&mut self);

    /// Pushes the back buffer to the panel.
    fn present(&mut self) -> Result<(), Self::Error>;

    fn now_millis(&self) -> u64;
}
