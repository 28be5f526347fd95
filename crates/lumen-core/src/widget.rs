//! Widget contract shared by root widgets and list entries.

use crate::{
    geometry::Rect,
    graphics::Graphics,
    input::InputEvent,
    motion::Camera,
    surface::Canvas,
};

/// State every widget carries.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WidgetBase {
    pub bounds: Rect,
    pub visible: bool,
}

impl WidgetBase {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            bounds: Rect::new(x, y, w, h),
            visible: true,
        }
    }
}

/// How a widget interprets its `y` coordinate when placed in a row.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VerticalAnchor {
    /// `y` is the text baseline.
    Baseline,
    /// `y` is the top of the row.
    Top,
}

/// Per-frame state handed to `Widget::update`.
pub struct FrameContext<'a> {
    pub camera: &'a mut Camera,
    /// Text measurement against the active surface.
    pub metrics: &'a dyn Canvas,
    pub now_ms: u64,
}

impl<'a> FrameContext<'a> {
    pub fn new(camera: &'a mut Camera, metrics: &'a dyn Canvas, now_ms: u64) -> Self {
        Self {
            camera,
            metrics,
            now_ms,
        }
    }
}

pub trait Widget {
    fn base(&self) -> &WidgetBase;
    fn base_mut(&mut self) -> &mut WidgetBase;

    fn draw(&self, g: &mut Graphics<'_>);

    fn update(&mut self, _ctx: &mut FrameContext<'_>) {}

    fn is_interactive(&self) -> bool {
        false
    }

    /// Click.
    fn activate(&mut self) {}

    /// Display text, also used to estimate the selection box width.
    fn content(&self) -> &str {
        ""
    }

    /// Returns `true` when the event was consumed.
    fn handle_input(&mut self, _event: InputEvent) -> bool {
        false
    }

    fn bounds(&self) -> Rect {
        self.base().bounds
    }

    fn set_position(&mut self, x: i32, y: i32) {
        let bounds = &mut self.base_mut().bounds;
        bounds.x = x;
        bounds.y = y;
    }

    fn is_visible(&self) -> bool {
        self.base().visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.base_mut().visible = visible;
    }

    /// Auto-width widgets are text anchored on the baseline; fixed-width
    /// widgets lay out from the row top.
    fn vertical_anchor(&self) -> VerticalAnchor {
        if self.bounds().w == 0 {
            VerticalAnchor::Baseline
        } else {
            VerticalAnchor::Top
        }
    }
}
