//! `solidarity` command-line front end.
//!
//! The binary is a thin shell over this library so commands can be driven from
//! tests with an in-memory store and a byte buffer for output.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;

pub use app::App;
pub use cli::{Cli, Command};
pub use config::Config;
