//! Cassette CLI library.
//!
//! Argument definitions, configuration loading, terminal rendering, and the
//! command implementations behind the `cassette` binary.

pub mod cli_args;
pub mod commands;
pub mod config;
pub mod render;
