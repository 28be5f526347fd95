//! Virtual rotary encoder. Scripted gestures are played back as pin levels,
//! one level change per frame, and decoded by the real `RotaryInput`.

use std::{cell::Cell, convert::Infallible, rc::Rc};

use embedded_hal::digital::{ErrorType, InputPin};
use lumen_core::input::{InputEvent, InputProvider, ScriptedInput};
use lumen_hal::input::{RotaryConfig, RotaryInput, RotaryInputError};

use crate::script::FrameInput;

/// Line levels for one frame: `(a, b, button_pressed)`.
type Levels = (bool, bool, bool);

const TURN_NEXT: [Levels; 4] = [
    (true, false, false),
    (true, true, false),
    (false, true, false),
    (false, false, false),
];
const TURN_PREVIOUS: [Levels; 4] = [
    (false, true, false),
    (true, true, false),
    (true, false, false),
    (false, false, false),
];
const CLICK: [Levels; 8] = [
    (false, false, true),
    (false, false, true),
    (false, false, true),
    (false, false, true),
    (false, false, false),
    (false, false, false),
    (false, false, false),
    (false, false, false),
];

fn gesture(event: InputEvent) -> &'static [Levels] {
    match event {
        InputEvent::Next => &TURN_NEXT,
        InputEvent::Previous => &TURN_PREVIOUS,
        InputEvent::Activate => &CLICK,
    }
}

#[derive(Clone, Default)]
pub struct KnobPin(Rc<Cell<bool>>);

impl ErrorType for KnobPin {
    type Error = Infallible;
}

impl InputPin for KnobPin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.0.get())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.0.get())
    }
}

pub struct SimulatedKnob {
    a: KnobPin,
    b: KnobPin,
    sw: KnobPin,
    input: RotaryInput<KnobPin, KnobPin, KnobPin>,
    script: ScriptedInput<'static>,
    gesture: &'static [Levels],
    interval: u64,
    frame: u64,
}

impl SimulatedKnob {
    pub fn new(
        events: &'static [InputEvent],
        interval: u64,
    ) -> Result<Self, RotaryInputError<Infallible, Infallible, Infallible>> {
        let (a, b, sw) = (KnobPin::default(), KnobPin::default(), KnobPin::default());
        // Active-low button at rest.
        sw.0.set(true);
        let input = RotaryInput::new(a.clone(), b.clone(), sw.clone(), RotaryConfig::default())?;

        Ok(Self {
            a,
            b,
            sw,
            input,
            script: ScriptedInput::new(events),
            gesture: &[],
            interval: interval.max(1),
            frame: 0,
        })
    }

    fn apply(&self, (a, b, pressed): Levels) {
        self.a.0.set(a);
        self.b.0.set(b);
        self.sw.0.set(!pressed);
    }
}

impl FrameInput for SimulatedKnob {
    fn advance_frame(&mut self) {
        self.frame += 1;
        if self.gesture.is_empty() && self.frame % self.interval == 0 {
            if let Ok(Some(event)) = self.script.poll_event() {
                self.gesture = gesture(event);
            }
        }
        if let Some((&levels, rest)) = self.gesture.split_first() {
            self.apply(levels);
            self.gesture = rest;
        }
    }
}

impl InputProvider for SimulatedKnob {
    type Error = RotaryInputError<Infallible, Infallible, Infallible>;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        self.input.poll_event()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(knob: &mut SimulatedKnob, frames: usize) -> Vec<InputEvent> {
        let mut events = Vec::new();
        for _ in 0..frames {
            knob.advance_frame();
            while let Some(event) = knob.poll_event().unwrap() {
                events.push(event);
            }
        }
        events
    }

    #[test]
    fn gestures_decode_back_to_the_script() {
        let script = &[InputEvent::Next, InputEvent::Activate, InputEvent::Previous];
        let mut knob = SimulatedKnob::new(script, 10).unwrap();
        assert_eq!(run(&mut knob, 40), script.to_vec());
    }
}
