pub mod mixer;
mod logging;
mod fixed_point;

pub use fixed_point::{run_fixed_point, FixedPointResult, SccError};
