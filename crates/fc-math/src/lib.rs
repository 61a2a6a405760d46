//! Failcast reliability math utilities.

pub mod math;

pub use math::correlation::*;
pub use math::describe::*;
pub use math::mtbf::*;
pub use math::stable::*;
pub use math::trend::*;
pub use math::weibull::*;
