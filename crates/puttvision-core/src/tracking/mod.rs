//! Object tracking: per-class EMA smoothing with coasting and loss.
//!
//! The [`Tracker`] consumes one detection set per frame tick and maintains
//! one smoothed kinematic track per semantic class. It never raises errors;
//! a missing or lost object is ordinary state (`valid == false`), not a
//! fault.

mod track;
mod tracker;

pub use track::TrackedObject;
pub use tracker::Tracker;
