//! CLI module
//!
//! Command-line interface over the user service.
//!
//! # Commands
//!
//! - `about` - Profile of a user
//! - `overview` - Posts and comments of a user
//! - `posts` / `comments` - One kind of a user's content
//! - `trophies` - Trophies of a user
//! - `available` - Whether a username is free

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
