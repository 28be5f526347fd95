#![cfg_attr(not(test), no_std)]

//! Widget toolkit for 1bpp displays: camera-relative rasterizer, eased
//! followers, and a virtualized scrolling selection list.
//!
//! The crate never touches hardware. Boards provide a
//! [`surface::PixelSurface`]; everything above it is plain integer and
//! float arithmetic advanced once per frame.

extern crate alloc;

pub mod app;
pub mod geometry;
pub mod graphics;
pub mod input;
pub mod list;
pub mod motion;
pub mod surface;
pub mod widget;
pub mod widgets;

#[cfg(test)]
mod testing;
