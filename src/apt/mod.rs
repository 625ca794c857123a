//! apt-get invocation
//!
//! - `args`: assembles the install/upgrade argument vector
//! - `runner`: the `PackageManager` seam and its `apt-get` implementation

mod args;
mod runner;

pub use args::{install_args, printable, update_args};
pub use runner::{AptGet, PackageManager, Phase};
