//! Evaluation of the normal distribution: density, cumulative
//! distribution, and the error function it is built upon.

pub mod load;
pub mod stats;

pub use stats::{erf, NormalDistribution, STANDARD_NORMAL};
