//! Interval arithmetic over spelled notes.

pub mod construct;
pub mod distance;
pub mod identify;

pub use construct::construct;
pub use identify::identify;
