use heapless::String;

use super::truncated;
use crate::{
    graphics::Graphics,
    widget::{Widget, WidgetBase},
};

const LABEL_BYTES: usize = 32;
const MIN_BAR_W: i32 = 20;

/// Read-only progress indicator with a caption.
#[derive(Clone, Debug)]
pub struct ProgressBar {
    base: WidgetBase,
    label: String<LABEL_BYTES>,
    value: f32,
    two_line: bool,
}

impl ProgressBar {
    pub fn new(x: i32, y: i32, w: i32, h: i32, label: &str, initial: f32) -> Self {
        let mut bar = Self {
            base: WidgetBase::new(x, y, w, h),
            label: truncated(label),
            value: 0.0,
            two_line: false,
        };
        bar.set_value(initial);
        bar
    }

    /// Caption on the first line, full-width bar underneath.
    pub fn two_line(mut self) -> Self {
        self.two_line = true;
        self
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Clamps into `0.0..=1.0`; NaN reads as empty.
    pub fn set_value(&mut self, value: f32) {
        self.value = if value > 1.0 {
            1.0
        } else if value > 0.0 {
            value
        } else {
            0.0
        };
    }

    fn draw_bar(&self, g: &mut Graphics<'_>, x: i32, y: i32, w: i32, h: i32) {
        g.rect(x, y, w, h);
        let fill = ((w - 4) as f32 * self.value) as i32;
        if fill > 0 {
            g.fill_rect(x + 2, y + 2, fill, h - 4);
        }
    }
}

impl Widget for ProgressBar {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn draw(&self, g: &mut Graphics<'_>) {
        if !self.base.visible {
            return;
        }
        let b = self.base.bounds;

        if self.two_line {
            g.text(b.x + 2, b.y + b.h / 4 + 4, &self.label);
            let bar_h = 6;
            self.draw_bar(g, b.x + 2, b.y + b.h * 3 / 4 - bar_h / 2, b.w - 4, bar_h);
        } else {
            g.text(b.x + 2, b.y + b.h / 2 + 4, &self.label);
            let bar_w = (b.w - g.text_width(&self.label) - 12).max(MIN_BAR_W);
            let bar_h = 8;
            self.draw_bar(g, b.x + b.w - bar_w - 4, b.y + (b.h - bar_h) / 2, bar_w, bar_h);
        }
    }

    fn content(&self) -> &str {
        &self.label
    }
}
