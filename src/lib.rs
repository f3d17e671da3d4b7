//! rolestore CLI library
//!
//! Maps `users` subcommands onto ordered calls against the role-store
//! directory. The binary in `main.rs` only parses flags, wires the HTTP
//! client and turns errors into exit codes.

pub mod api;
pub mod batch;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
