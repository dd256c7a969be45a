//! Display primitives shared by command output.

pub mod colors;

pub use colors::*;
