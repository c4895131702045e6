//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the atelier binary.

mod access;
mod apply_order;
mod commands;

pub use access::handle_access;
pub use apply_order::handle_apply_order;
pub use commands::{Cli, Commands};
