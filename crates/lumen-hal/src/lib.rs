#![cfg_attr(not(test), no_std)]

//! Board-side adapters for `lumen-core`: glyph font, framebuffer and
//! memory-LCD surfaces, clocks and rotary-encoder input.

pub mod clock;
pub mod font;
pub mod input;
pub mod panel;
pub mod surface;

pub use panel::PanelSurface;
pub use surface::FrameSurface;
