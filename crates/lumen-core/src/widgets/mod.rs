//! Leaf widgets: text, toggles, progress and the frame-rate HUD.

mod fps;
mod label;
mod progress;
mod switch;

pub use fps::FpsCounter;
pub use label::{LABEL_CAPACITY, Label};
pub use progress::ProgressBar;
pub use switch::Switch;

use heapless::String;

/// Copies `text`, dropping whole characters once the buffer is full.
pub(crate) fn truncated<const N: usize>(text: &str) -> String<N> {
    let mut out = String::new();
    for ch in text.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}
