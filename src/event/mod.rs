mod report;
mod touchpoint;

pub(crate) use report::*;
pub use report::MAX_TOUCH_POINTS;
pub use touchpoint::*;
