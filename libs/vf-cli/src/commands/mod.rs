//! Actions selected by the command-line flags.

pub mod describe;
pub mod run;
