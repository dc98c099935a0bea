//! # polyglot-core
//!
//! Core types, traits, configuration, and error handling for the Polyglot bot.

pub mod config;
pub mod error;
pub mod event;
pub mod lang;
pub mod traits;
