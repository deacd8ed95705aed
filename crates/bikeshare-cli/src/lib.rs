//! Library side of the `bikeshare` command-line dashboard.

pub mod logging;
pub mod render;
