//! Recording fakes shared by unit tests.

use std::{collections::BTreeSet, convert::Infallible, string::String, vec::Vec};

use crate::{
    geometry::Size,
    surface::{Canvas, PixelSurface},
};

pub(crate) const GLYPH_WIDTH: i32 = 6;

/// Canvas that records lit pixels and text calls in screen space.
pub(crate) struct RecordingCanvas {
    pub pixels: BTreeSet<(i32, i32)>,
    pub strings: Vec<(i32, i32, String)>,
    size: Size,
}

impl RecordingCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: BTreeSet::new(),
            strings: Vec::new(),
            size: Size::new(width, height),
        }
    }

    pub fn reset(&mut self) {
        self.pixels.clear();
        self.strings.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if on {
            self.pixels.insert((x, y));
        } else {
            self.pixels.remove(&(x, y));
        }
    }

    fn draw_string(&mut self, x: i32, baseline_y: i32, text: &str) {
        self.strings.push((x, baseline_y, String::from(text)));
    }

    fn string_width(&self, text: &str) -> i32 {
        text.chars().count() as i32 * GLYPH_WIDTH
    }

    fn size(&self) -> Size {
        self.size
    }
}

/// Surface wrapper around [`RecordingCanvas`] with a settable clock.
pub(crate) struct RecordingSurface {
    pub canvas: RecordingCanvas,
    pub now_ms: u64,
    pub initialized: bool,
    pub clears: u32,
    pub presents: u32,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            canvas: RecordingCanvas::new(width, height),
            now_ms: 0,
            initialized: false,
            clears: 0,
            presents: 0,
        }
    }
}

impl Canvas for RecordingSurface {
    fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        self.canvas.set_pixel(x, y, on);
    }

    fn draw_string(&mut self, x: i32, baseline_y: i32, text: &str) {
        self.canvas.draw_string(x, baseline_y, text);
    }

    fn string_width(&self, text: &str) -> i32 {
        self.canvas.string_width(text)
    }

    fn size(&self) -> Size {
        self.canvas.size()
    }
}

impl PixelSurface for RecordingSurface {
    type Error = Infallible;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.initialized = true;
        Ok(())
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.canvas.reset();
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        self.presents += 1;
        Ok(())
    }

    fn now_millis(&self) -> u64 {
        self.now_ms
    }
}
