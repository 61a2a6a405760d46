//! Core math modules.

pub mod correlation;
pub mod describe;
pub mod mtbf;
pub mod stable;
pub mod trend;
pub mod weibull;
