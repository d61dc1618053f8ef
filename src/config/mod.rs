//! JSON configuration for the command-line tools.
pub mod lane_demo;
