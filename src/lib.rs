//! qadesk: a terminal chat and internal-data Q&A client
//!
//! The header shell switches between the two modes; each mode's page offers
//! a fixed list of suggested prompts next to a free-form query input.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod help;
pub mod layout;
pub mod logging;
pub mod navigation;
pub mod pages;
pub mod scroll;
pub mod suggestions;
pub mod widgets;


pub use error::QadeskError;
