//! Command handlers.
//!
//! This module contains handlers for the generate and validate commands.

pub mod generate;
pub mod validate;
