//! External Commands
//!
//! Calls that leave the page. Only the random-todo import for now.

mod import;

pub use import::*;
