use heapless::String;

use super::truncated;
use crate::{
    graphics::Graphics,
    motion::Follower,
    widget::{FrameContext, Widget, WidgetBase},
};

const LABEL_BYTES: usize = 32;
const TRACK_W: i32 = 25;
const TRACK_H: i32 = 13;
const TRACK_PAD: i32 = 4;
const KNOB_MARGIN: i32 = 2;
const KNOB_R: i32 = 4;
const KNOB_DIAMETER: i32 = 2 * KNOB_R + 1;
const KNOB_EASING: f32 = 0.3;
const KNOB_EPSILON: f32 = 0.05;

/// Labelled on/off toggle with an animated knob.
#[derive(Clone, Debug)]
pub struct Switch {
    base: WidgetBase,
    label: String<LABEL_BYTES>,
    on: bool,
    knob: Follower,
}

impl Switch {
    pub fn new(x: i32, y: i32, w: i32, h: i32, label: &str, initial: bool) -> Self {
        Self {
            base: WidgetBase::new(x, y, w, h),
            label: truncated(label),
            on: initial,
            knob: Follower::new(knob_target(initial), KNOB_EASING, KNOB_EPSILON),
        }
    }

    pub fn state(&self) -> bool {
        self.on
    }

    pub fn set_state(&mut self, on: bool) {
        self.on = on;
        self.knob.set_target(knob_target(on));
    }

    pub fn toggle(&mut self) {
        self.set_state(!self.on);
    }

    /// Knob travel in `0.0..=1.0`.
    pub fn knob_position(&self) -> f32 {
        self.knob.current()
    }
}

fn knob_target(on: bool) -> f32 {
    if on { 1.0 } else { 0.0 }
}

impl Widget for Switch {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn update(&mut self, _ctx: &mut FrameContext<'_>) {
        self.knob.tick();
    }

    fn draw(&self, g: &mut Graphics<'_>) {
        if !self.base.visible {
            return;
        }
        let b = self.base.bounds;

        g.text(b.x + 2, b.y + b.h / 2 + 4, &self.label);

        let track_x = b.x + b.w - TRACK_W - TRACK_PAD;
        let track_y = b.y + (b.h - TRACK_H) / 2;
        g.round_rect(track_x, track_y, TRACK_W, TRACK_H, TRACK_H / 2);

        let min_x = track_x + KNOB_MARGIN;
        let max_x = track_x + TRACK_W - KNOB_DIAMETER - KNOB_MARGIN;
        let knob = self.knob.current();
        let knob_x = min_x + ((max_x - min_x) as f32 * knob) as i32;

        let cx = knob_x + KNOB_R;
        let cy = track_y + KNOB_MARGIN + KNOB_R;
        if self.on || knob > 0.5 {
            g.fill_circle(cx, cy, KNOB_R);
        } else {
            g.circle(cx, cy, KNOB_R);
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn activate(&mut self) {
        self.toggle();
    }

    fn content(&self) -> &str {
        &self.label
    }
}
