use core::convert::Infallible;

use super::{InputEvent, InputProvider};

/// Replays a fixed sequence of events, one per poll.
#[derive(Clone, Debug)]
pub struct ScriptedInput<'a> {
    events: &'a [InputEvent],
    cursor: usize,
}

impl<'a> ScriptedInput<'a> {
    pub const fn new(events: &'a [InputEvent]) -> Self {
        Self { events, cursor: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.events.len().saturating_sub(self.cursor)
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}

impl InputProvider for ScriptedInput<'_> {
    type Error = Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        let event = self.events.get(self.cursor).copied();
        if event.is_some() {
            self.cursor += 1;
        }
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_events_in_order() {
        let script = [InputEvent::Next, InputEvent::Activate];
        let mut input = ScriptedInput::new(&script);

        assert_eq!(input.remaining(), 2);
        assert_eq!(input.poll_event(), Ok(Some(InputEvent::Next)));
        assert_eq!(input.poll_event(), Ok(Some(InputEvent::Activate)));
        assert_eq!(input.poll_event(), Ok(None));
        assert!(input.is_exhausted());
    }
}
