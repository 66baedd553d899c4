//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Wiring config, CLI flags and seeds into engine options
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Builds engines and glyph sets from resolved settings

pub mod cli;
pub mod factory;
