use core::fmt::Write;

use heapless::String;

use crate::{
    graphics::Graphics,
    widget::{FrameContext, Widget, WidgetBase},
};

const WINDOW_MS: u64 = 1_000;
/// `"FPS: "` plus the ten digits of `u32::MAX`.
const TEXT_CAPACITY: usize = 15;

/// Screen-pinned frames-per-second readout.
#[derive(Clone, Debug)]
pub struct FpsCounter {
    base: WidgetBase,
    window_start_ms: u64,
    frames: u32,
    fps: u32,
    text: String<TEXT_CAPACITY>,
}

impl FpsCounter {
    pub fn new(x: i32, y: i32) -> Self {
        let mut counter = Self {
            base: WidgetBase::new(x, y, 0, 0),
            window_start_ms: 0,
            frames: 0,
            fps: 0,
            text: String::new(),
        };
        counter.refresh_text();
        counter
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    fn refresh_text(&mut self) {
        self.text.clear();
        write!(self.text, "FPS: {}", self.fps).ok();
    }
}

impl Widget for FpsCounter {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn update(&mut self, ctx: &mut FrameContext<'_>) {
        self.frames = self.frames.saturating_add(1);
        if ctx.now_ms.saturating_sub(self.window_start_ms) >= WINDOW_MS {
            self.fps = self.frames;
            self.frames = 0;
            self.window_start_ms = ctx.now_ms;
            self.refresh_text();
        }
    }

    fn draw(&self, g: &mut Graphics<'_>) {
        if !self.base.visible {
            return;
        }
        let b = self.base.bounds;
        g.with_screen_space(|g| g.text(b.x, b.y + 10, &self.text));
    }

    fn content(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{motion::Camera, testing::RecordingCanvas};

    #[test]
    fn publishes_once_per_second() {
        let canvas = RecordingCanvas::new(128, 64);
        let mut camera = Camera::default();
        let mut fps = FpsCounter::new(90, 0);

        for frame in 0..30u64 {
            let mut ctx = FrameContext::new(&mut camera, &canvas, frame * 50);
            fps.update(&mut ctx);
        }
        // Frame 20 lands on t=1000 ms after 21 updates.
        assert_eq!(fps.fps(), 21);
        assert_eq!(fps.content(), "FPS: 21");
    }

    #[test]
    fn text_fits_the_largest_count() {
        let mut fps = FpsCounter::new(0, 0);
        fps.fps = u32::MAX;
        fps.refresh_text();
        assert_eq!(fps.content(), "FPS: 4294967295");
    }

    #[test]
    fn draws_in_screen_space() {
        let mut canvas = RecordingCanvas::new(128, 64);
        let fps = FpsCounter::new(90, 0);
        let mut g = Graphics::new(&mut canvas);
        g.set_camera_offset(0, 200);
        fps.draw(&mut g);

        assert_eq!(canvas.strings, vec![(90, 10, "FPS: 0".to_string())]);
    }
}
