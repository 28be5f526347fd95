//! Framebuffer-backed pixel surface.

use core::{convert::Infallible, fmt};

use lumen_core::{
    geometry::Size,
    surface::{Canvas, PixelSurface},
};
use memlcd::FrameBuffer;

use crate::{clock::Clock, font};

/// In-memory 1bpp surface. `present` only counts frames; wrap it in a
/// [`crate::PanelSurface`] to drive real glass.
pub struct FrameSurface<const LINE_BYTES: usize, const HEIGHT: usize, C> {
    frame: FrameBuffer<LINE_BYTES, HEIGHT>,
    clock: C,
    presented: u64,
}

impl<const LINE_BYTES: usize, const HEIGHT: usize, C> FrameSurface<LINE_BYTES, HEIGHT, C>
where
    C: Clock,
{
    pub fn new(clock: C) -> Self {
        Self {
            frame: FrameBuffer::new(),
            clock,
            presented: 0,
        }
    }

    pub fn frame(&self) -> &FrameBuffer<LINE_BYTES, HEIGHT> {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut FrameBuffer<LINE_BYTES, HEIGHT> {
        &mut self.frame
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn into_clock(self) -> C {
        self.clock
    }

    pub fn presented_frames(&self) -> u64 {
        self.presented
    }

    /// Dumps the framebuffer as text, `#` for dark pixels.
    pub fn write_ascii(&self, out: &mut impl fmt::Write) -> fmt::Result {
        for y in 0..HEIGHT {
            for x in 0..FrameBuffer::<LINE_BYTES, HEIGHT>::WIDTH {
                let on = self.frame.pixel(x, y).unwrap_or(false);
                out.write_char(if on { '#' } else { '.' })?;
            }
            out.write_char('\n')?;
        }
        Ok(())
    }
}

fn plot<const LINE_BYTES: usize, const HEIGHT: usize>(
    frame: &mut FrameBuffer<LINE_BYTES, HEIGHT>,
    x: i32,
    y: i32,
    on: bool,
) {
    if let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) {
        frame.set_pixel(x, y, on);
    }
}

impl<const LINE_BYTES: usize, const HEIGHT: usize, C> Canvas for FrameSurface<LINE_BYTES, HEIGHT, C>
where
    C: Clock,
{
    fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        plot(&mut self.frame, x, y, on);
    }

    fn draw_string(&mut self, x: i32, baseline_y: i32, text: &str) {
        let frame = &mut self.frame;
        font::draw_text(x, baseline_y, text, |px, py| plot(frame, px, py, true));
    }

    fn string_width(&self, text: &str) -> i32 {
        font::text_width(text)
    }

    fn size(&self) -> Size {
        Size::new(
            FrameBuffer::<LINE_BYTES, HEIGHT>::WIDTH as u32,
            HEIGHT as u32,
        )
    }
}

impl<const LINE_BYTES: usize, const HEIGHT: usize, C> PixelSurface
    for FrameSurface<LINE_BYTES, HEIGHT, C>
where
    C: Clock,
{
    type Error = Infallible;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.frame.clear(false);
        Ok(())
    }

    fn clear(&mut self) {
        self.frame.clear(false);
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        self.presented += 1;
        Ok(())
    }

    fn now_millis(&self) -> u64 {
        self.clock.now_ms()
    }
}
