use heapless::String;

use super::truncated;
use crate::{
    graphics::Graphics,
    widget::{VerticalAnchor, Widget, WidgetBase},
};

pub const LABEL_CAPACITY: usize = 64;

/// Distance from a row top to the text baseline for fixed-width labels.
const TOP_TO_BASELINE: i32 = 12;
const ARROW_GAP: i32 = 10;

/// Single line of text, optionally with a `>` submenu arrow.
#[derive(Clone, Debug)]
pub struct Label {
    base: WidgetBase,
    text: String<LABEL_CAPACITY>,
    arrow: bool,
    selectable: bool,
}

impl Label {
    /// Auto-width label; `y` is the baseline.
    pub fn new(x: i32, y: i32, text: &str) -> Self {
        Self {
            base: WidgetBase::new(x, y, 0, 0),
            text: truncated(text),
            arrow: false,
            selectable: false,
        }
    }

    /// Fixed width; `y` becomes the row top and the arrow hugs the right edge.
    pub fn with_width(mut self, w: i32) -> Self {
        self.base.bounds.w = w.max(0);
        self
    }

    pub fn with_arrow(mut self) -> Self {
        self.arrow = true;
        self
    }

    /// Marks a plain label as a selectable list entry.
    pub fn selectable(mut self) -> Self {
        self.selectable = true;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = truncated(text);
    }

    pub fn has_arrow(&self) -> bool {
        self.arrow
    }

    fn baseline(&self) -> i32 {
        match self.vertical_anchor() {
            VerticalAnchor::Baseline => self.base.bounds.y,
            VerticalAnchor::Top => self.base.bounds.y + TOP_TO_BASELINE,
        }
    }
}

impl Widget for Label {
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

        let bounds = self.base.bounds;
        let baseline = self.baseline();
        g.text(bounds.x, baseline, &self.text);

        if self.arrow {
            let arrow_x = if bounds.w > 0 {
                bounds.x + bounds.w - ARROW_GAP
            } else {
                bounds.x + g.text_width(&self.text) + ARROW_GAP
            };
            let arrow_y = baseline - 4;
            g.line(arrow_x, arrow_y, arrow_x + 4, arrow_y + 4);
            g.line(arrow_x, arrow_y + 8, arrow_x + 4, arrow_y + 4);
        }
    }

    fn is_interactive(&self) -> bool {
        self.arrow || self.selectable
    }

    fn content(&self) -> &str {
        &self.text
    }
}
