//! Analog clock face for tokei.
//!
//! This crate knows where things go on the dial: the outline, the twelve
//! hour marks and the three hands. [`Ticker`] drives the per-tick
//! paint, flush, wait and erase cycle without touching a real clock or
//! terminal, which keeps it testable.

mod face;
mod geometry;
mod hands;
mod ticker;

pub use face::{draw_face, draw_tick_marks};
pub use geometry::FaceGeometry;
pub use hands::{Hand, HandAngles};
pub use ticker::{Phase, Step, Ticker};
