//! Navigation input shared by every input source.

mod scripted;

pub use scripted::ScriptedInput;

/// Discrete navigation events: one-dimensional movement plus a click.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    Next,
    Previous,
    Activate,
}

pub trait InputProvider {
    type Error;

    /// Returns the next pending event, if any. Never blocks.
    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
