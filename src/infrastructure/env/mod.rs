//! Process environment access
//!
//! - [`EnvSnapshot`]: owned, read-only copy of the environment
//! - [`EnvFileLoader`]: merges `.env`-style files into the process
//!   environment before the snapshot is taken

pub mod env_file;
pub mod snapshot;

pub use env_file::EnvFileLoader;
pub use snapshot::EnvSnapshot;
