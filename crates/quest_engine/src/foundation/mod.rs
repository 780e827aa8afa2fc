//! Foundation layer: math types, frame timing, and logging.

pub mod logging;
pub mod math;
pub mod time;
