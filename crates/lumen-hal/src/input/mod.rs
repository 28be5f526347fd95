pub mod rotary;

pub use rotary::{Debouncer, QuadratureDecoder, RotaryConfig, RotaryInput, RotaryInputError, Turn};
