//! Hero OS CLI library.
//!
//! This crate provides the interactive session controller for the Hero OS
//! playground together with its configuration, terminal styling, and output
//! formatting.

pub mod config;
pub mod output;
pub mod session;
pub mod terminal;

#[cfg(test)]
pub(crate) mod test_helpers;
