//! Core traits for the heatmaps service.

mod clock;

pub use clock::{Clock, FixedClock, SystemClock};
