use std::convert::Infallible;

use lumen_core::input::{InputEvent, InputProvider, ScriptedInput};

pub const DEMO_SCRIPT: &[InputEvent] = &[
    InputEvent::Next,
    InputEvent::Next,
    InputEvent::Next,
    InputEvent::Next,
    InputEvent::Next,
    InputEvent::Next,
    InputEvent::Next,
    InputEvent::Activate,
    InputEvent::Next,
    InputEvent::Next,
    InputEvent::Next,
    InputEvent::Previous,
    InputEvent::Previous,
    InputEvent::Activate,
];

/// Input source that is told when a new frame starts.
pub trait FrameInput: InputProvider {
    fn advance_frame(&mut self);
}

/// Releases one scripted event every `interval` frames, like a person
/// turning the encoder.
pub struct PacedInput {
    script: ScriptedInput<'static>,
    interval: u64,
    frame: u64,
    released: bool,
}

impl PacedInput {
    pub fn new(events: &'static [InputEvent], interval: u64) -> Self {
        Self {
            script: ScriptedInput::new(events),
            interval: interval.max(1),
            frame: 0,
            released: false,
        }
    }
}

impl FrameInput for PacedInput {
    fn advance_frame(&mut self) {
        self.frame += 1;
        self.released = false;
    }
}

impl InputProvider for PacedInput {
    type Error = Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        if self.released || self.frame % self.interval != 0 {
            return Ok(None);
        }
        self.released = true;
        self.script.poll_event()
    }
}
